// File: crates/demo/src/main.rs
// Summary: Demo renders a configured Cartesian grid with a plotted sine curve to a PNG.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plane_core::config::keys;
use plane_core::{
    Color, ConfigStore, PlaneSurface, PlotCommand, PlotPoint, PlotShape, SetPlotColor,
    SetPlotShape,
};

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // System defaults, with a slightly sparser grid for an 800x600 frame.
    let mut store = ConfigStore::new();
    store.set_f32(keys::GRID_UNIT, 80.0);
    store.set_f32(keys::GRID_LINE_LPU, 1.0);

    let mut surface = PlaneSurface::new(store);
    surface.set_plot_supplier(Some(Box::new(sample_plot)));

    let out = std::path::PathBuf::from("target/out/plane_demo.png");
    plane_render_skia::render_to_png(&mut surface, WIDTH, HEIGHT, &out)?;
    info!(path = %out.display(), "wrote demo frame");
    println!("Wrote {}", out.display());
    Ok(())
}

/// One frame of user plot: a sine curve plus a few marked points.
fn sample_plot() -> Vec<Box<dyn PlotCommand>> {
    let mut commands: Vec<Box<dyn PlotCommand>> = Vec::new();

    commands.push(Box::new(SetPlotColor(Color::from_rgb(0x2060C0))));
    let steps = 400;
    for i in 0..=steps {
        let x = -4.0 + 8.0 * (i as f32) / (steps as f32);
        commands.push(Box::new(PlotPoint { x, y: x.sin() }));
    }

    commands.push(Box::new(SetPlotColor(Color::from_rgb(0xC03030))));
    commands.push(Box::new(SetPlotShape(PlotShape::Circle)));
    for x in [-3.0, -1.5, 0.0, 1.5, 3.0] {
        commands.push(Box::new(PlotPoint { x, y: x.sin() }));
    }

    commands
}
