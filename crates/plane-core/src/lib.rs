// File: crates/plane-core/src/lib.rs
// Summary: Core library entry point; exports the grid geometry and rendering API.

pub mod canvas;
pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod notify;
pub mod plot;
pub mod profile;
pub mod properties;
pub mod surface;
pub mod types;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use config::ConfigStore;
pub use error::PlaneError;
pub use generator::{LineGenerator, Orientation};
pub use graph::GraphManager;
pub use notify::{NotificationHub, NotificationReceiver, NotificationSender, REDRAW_EVENT};
pub use plot::{PlotCommand, PlotContext, PlotPoint, PlotShape, PlotSupplier, SetPlotColor, SetPlotShape};
pub use profile::Profile;
pub use properties::{FontStyle, GraphProperties, LineCategory, LineProperties};
pub use surface::PlaneSurface;
pub use types::{Color, Margin, Margins, Point, Rect, Segment, TextStyle};
