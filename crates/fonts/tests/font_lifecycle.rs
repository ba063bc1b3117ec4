//! End-to-end font lifecycle: request, poll, lay out, dispose

use approx::assert_relative_eq;
use fonts::prelude::*;
use std::time::Duration;

fn glyph(character: char, advance: i32) -> Glyph {
    Glyph::new(
        character,
        FixedVec2::new(advance, 0),
        FixedVec2::new(0, 640),
        FixedVec2::zeros(),
        FixedVec2::new(advance - 64, 640),
    )
}

fn new_library(resolver: MemoryResolver) -> FontLibrary {
    fonts::foundation::logging::try_init();
    FontLibrary::new(Box::new(resolver))
}

fn payload() -> FontData {
    FontData {
        family_name: "Lifecycle Sans".to_string(),
        line_height: 32,
        glyphs: vec![glyph('A', 640), glyph('B', 512), glyph('?', 576)],
    }
}

#[test]
fn test_requested_font_lays_out_after_loading() {
    let mut resolver = MemoryResolver::new();
    resolver.deliver("fonts/lifecycle.ttf", payload());
    let mut library = new_library(resolver);

    let font = library
        .request_font("fonts/lifecycle.ttf", 32, Duration::from_secs(1))
        .unwrap();
    assert_eq!(library.status(font).unwrap(), RequestStatus::Submitted);
    assert_eq!(library.poll(font, Duration::from_millis(16)).unwrap(), RequestStatus::Loaded);

    let view = library.view(font).unwrap();
    let size = calculate_size(&view, "AB").unwrap();
    assert_relative_eq!(size.x, 0.5625);
    assert_relative_eq!(size.y, 0.0);

    let geometry = generate_vertices(&view, "A\nB").unwrap();
    assert_eq!(geometry.vertex_count(), 8);
    let shift = geometry.vertices[4].y - geometry.vertices[0].y;
    assert_relative_eq!(shift, -32.0 / (64.0 * 32.0));

    // Unmapped characters fall back to '?'
    let with_fallback = calculate_size(&view, "A~").unwrap();
    assert_relative_eq!(with_fallback.x, (640 + 576) as f32 / 2048.0);
}

#[test]
fn test_unresolved_request_times_out() {
    let mut library = new_library(MemoryResolver::new());
    let font = library
        .request_font("fonts/never.ttf", 32, Duration::from_secs(1))
        .unwrap();

    assert_eq!(library.poll(font, Duration::from_millis(750)).unwrap(), RequestStatus::Loading);
    assert_eq!(library.poll(font, Duration::from_millis(750)).unwrap(), RequestStatus::NotFound);
    assert!(matches!(
        library.view(font),
        Err(FontError::FontNotLoaded { status: RequestStatus::NotFound })
    ));
}

#[test]
fn test_synchronous_font_and_hit_testing() {
    let mut library = FontLibrary::with_config(
        FontSystemConfig::default().with_fallback('#'),
        Box::new(MemoryResolver::new()),
    );
    let a = library
        .create_glyph('A', FixedVec2::new(1024, 0), FixedVec2::zeros(), FixedVec2::zeros(), FixedVec2::zeros(), &[])
        .unwrap();
    let hash = library
        .create_glyph('#', FixedVec2::new(1024, 0), FixedVec2::zeros(), FixedVec2::zeros(), FixedVec2::zeros(), &[])
        .unwrap();
    let font = library.create_named_font("Grid", 32, &[a, hash], 32).unwrap();

    let view = library.view(font).unwrap();
    assert_eq!(view.glyph('z').unwrap().character(), '#');
    assert_eq!(try_index_of(&view, "AzA", Vec2::new(0.9, 0.0)).unwrap(), Some(2));
    assert_eq!(try_index_of(&view, "", Vec2::zeros()).unwrap(), None);

    assert!(library.dispose_font(font));
    assert!(library.glyph(a).is_some());
}

#[test]
fn test_kerning_authoring() {
    let mut library = new_library(MemoryResolver::new());
    let t = library
        .create_glyph(
            'T',
            FixedVec2::new(576, 0),
            FixedVec2::zeros(),
            FixedVec2::zeros(),
            FixedVec2::zeros(),
            &[Kerning::new('o', FixedVec2::new(-64, 0))],
        )
        .unwrap();

    assert_eq!(library.get_kerning(t, 'o').unwrap(), FixedVec2::new(-64, 0));
    assert_eq!(library.get_kerning(t, 'x').unwrap(), FixedVec2::zeros());
    assert!(matches!(
        library.add_kerning(t, 'o', FixedVec2::new(-32, 0)),
        Err(FontError::DuplicateKerning { character: 'T', next: 'o' })
    ));

    library.clear_kernings(t).unwrap();
    library.add_kerning(t, 'o', FixedVec2::new(-32, 0)).unwrap();
    assert_eq!(library.get_kerning(t, 'o').unwrap(), FixedVec2::new(-32, 0));
}

#[test]
fn test_long_texts_lay_out_without_overflow() {
    let mut library = new_library(MemoryResolver::new());
    let a = library
        .create_glyph('A', FixedVec2::new(640, 0), FixedVec2::zeros(), FixedVec2::zeros(), FixedVec2::zeros(), &[])
        .unwrap();
    let font = library.create_font(&[a], 32).unwrap();
    let view = library.view(font).unwrap();

    let tall = calculate_size(&view, &"\n".repeat(1_100_000)).unwrap();
    assert_relative_eq!(tall.y, 1_100_000.0);

    let wide = calculate_size(&view, &"A".repeat(3_400_000)).unwrap();
    assert_relative_eq!(wide.x, 1_062_500.0);
}
