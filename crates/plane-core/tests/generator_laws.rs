// File: crates/plane-core/tests/generator_laws.rs
// Purpose: Validate the geometric contracts of line generation: axial lines,
// ordering, spacing, and degenerate inputs.

use plane_core::{LineGenerator, Orientation, Rect};

fn generator(rect: Rect, grid_unit: f32, lpu: f32) -> LineGenerator {
    LineGenerator::new(rect, grid_unit, lpu, -1.0, Orientation::Both)
}

#[test]
fn axial_lines_pass_through_rect_center() {
    let rects = [
        Rect::new(0.0, 0.0, 400.0, 200.0),
        Rect::new(60.0, 20.0, 720.0, 520.0),
        Rect::new(-35.0, 12.5, 301.0, 99.0),
    ];
    for rect in rects {
        let [hor, vert] = LineGenerator::axes_of(rect);
        assert_eq!(hor.start.y, rect.center_y());
        assert_eq!(hor.end.y, rect.center_y());
        assert_eq!(hor.start.x, rect.min_x());
        assert_eq!(hor.end.x, rect.max_x());

        assert_eq!(vert.start.x, rect.center_x());
        assert_eq!(vert.end.x, rect.center_x());
        assert_eq!(vert.start.y, rect.min_y());
        assert_eq!(vert.end.y, rect.max_y());
    }
}

#[test]
fn axes_ignore_spacing_length_and_mask() {
    let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
    let gen = LineGenerator::new(rect, 50.0, 0.0, 7.0, Orientation::Horizontal);
    let axes = gen.axes();
    assert_eq!(axes, LineGenerator::axes_of(rect));
}

#[test]
fn non_axial_lines_never_coincide_with_axes() {
    let rect = Rect::new(0.0, 0.0, 400.0, 100.0);
    let gen = generator(rect, 50.0, 1.0);
    for seg in gen.verticals() {
        assert_ne!(seg.start.x, rect.center_x());
    }
    for seg in gen.horizontals() {
        assert_ne!(seg.start.y, rect.center_y());
    }
    // Documented example: rect (0,0,400,100), unit 50, 1 lpu. The y-axis at
    // x=200 is skipped.
    let xs: Vec<f32> = gen.verticals().iter().map(|s| s.start.x).collect();
    assert_eq!(xs, vec![50.0, 100.0, 150.0, 250.0, 300.0, 350.0]);
}

#[test]
fn sequences_are_strictly_ordered() {
    let rect = Rect::new(10.0, 15.0, 333.0, 444.0);
    let gen = generator(rect, 40.0, 3.0);
    let ys: Vec<f32> = gen.horizontals().iter().map(|s| s.start.y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]), "ys not ascending: {ys:?}");
    let xs: Vec<f32> = gen.verticals().iter().map(|s| s.start.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]), "xs not ascending: {xs:?}");
}

#[test]
fn spacing_law() {
    // grid unit 100, 2 lines per unit => 50 px spacing.
    let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
    let gen = generator(rect, 100.0, 2.0);

    let xs: Vec<f32> = gen.verticals().iter().map(|s| s.start.x).collect();
    assert_eq!(xs, vec![50.0, 100.0, 150.0, 250.0, 300.0, 350.0]);
    let ys: Vec<f32> = gen.horizontals().iter().map(|s| s.start.y).collect();
    assert_eq!(ys, vec![50.0, 150.0]);

    let [hor, vert] = gen.axes();
    assert_eq!(vert.start.x, 200.0);
    assert_eq!(hor.start.y, 100.0);
}

#[test]
fn counts_match_sequences() {
    let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
    let gen = generator(rect, 100.0, 2.0);
    assert_eq!(gen.vertical_count(), 6);
    assert_eq!(gen.horizontal_count(), 2);
}

#[test]
fn degenerate_density_yields_empty_sequences() {
    let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
    for lpu in [0.0_f32, -1.0, f32::NAN, f32::INFINITY] {
        let gen = generator(rect, 100.0, lpu);
        assert_eq!(gen.iter().count(), 0, "lpu = {lpu}");
        assert_eq!(gen.horizontal_count(), 0);
        assert_eq!(gen.vertical_count(), 0);
    }
}

#[test]
fn zero_area_rect_is_harmless() {
    let rect = Rect::new(100.0, 100.0, 0.0, 0.0);
    let gen = generator(rect, 50.0, 1.0);
    assert_eq!(gen.iter().count(), 0);
}
