// File: crates/plane-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plane_core::config::keys;
use plane_core::{Color, ConfigStore, PlaneSurface};

#[test]
fn render_rgba8_buffer() {
    let mut store = ConfigStore::new();
    store.set_bool(keys::LABEL_DRAW, false); // avoid font variance
    store.set_color(keys::MARGIN_TOP_BG_COLOR, Color::from_rgb(0x008080));
    let mut surface = PlaneSurface::new(store);

    let (px, w, h, stride) =
        plane_render_skia::render_to_rgba8(&mut surface, 400, 300).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Top-left pixel is the top margin fill (RGBA, opaque teal).
    assert_eq!(&px[0..4], &[0x00, 0x80, 0x80, 0xFF]);
}
