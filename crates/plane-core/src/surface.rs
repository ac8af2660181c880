// File: crates/plane-core/src/surface.rs
// Summary: Surface controller: margins, grid rectangle, coordinate transform, frame loop.

use tracing::{debug, trace};

use crate::canvas::Canvas;
use crate::config::{keys, ConfigStore};
use crate::graph::GraphManager;
use crate::notify::{NotificationHub, NotificationReceiver, NotificationSender, REDRAW_EVENT};
use crate::plot::{PlotContext, PlotSupplier};
use crate::profile::Profile;
use crate::types::{Color, Margin, Margins, Point, Rect};

/// Owner of the live drawing state: profile, margins, plot hook, and the
/// redraw inbox.
///
/// One `render` call computes and paints one complete frame; nothing is
/// cached between frames and no partial redraw is attempted. Configuration
/// changes arrive as notifications on the hub and take effect at the start
/// of the next frame, so an in-progress paint never observes a half-applied
/// profile.
pub struct PlaneSurface {
    store: ConfigStore,
    profile: Profile,
    margins: Margins,
    graph_manager: GraphManager,
    hub: NotificationHub,
    redraw_inbox: NotificationReceiver,
    plot_supplier: Option<PlotSupplier>,
    plot_color: Color,
    grid_rect: Rect,
}

impl PlaneSurface {
    /// Build a surface over an explicitly provided configuration store.
    pub fn new(store: ConfigStore) -> Self {
        let profile = Profile::new(&store);
        let margins = margins_from(&store);
        let hub = NotificationHub::new();
        let redraw_inbox = hub.subscribe(REDRAW_EVENT);
        Self {
            store,
            profile,
            margins,
            graph_manager: GraphManager::new(Rect::new(0.0, 0.0, 0.0, 0.0)),
            hub,
            redraw_inbox,
            plot_supplier: None,
            plot_color: Color::BLACK,
            grid_rect: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    /// Write the profile's current values back to the store.
    pub fn apply_profile(&mut self) {
        self.profile.apply(&mut self.store);
    }

    /// A publisher handle for redraw requests; cloneable and usable from
    /// any thread. The request is honored at the start of the next frame.
    pub fn redraw_sender(&self) -> NotificationSender {
        self.hub.sender()
    }

    /// Install the pull-based source of plot commands, re-pulled fresh on
    /// every frame. `None` clears the hook.
    pub fn set_plot_supplier(&mut self, supplier: Option<PlotSupplier>) {
        self.plot_supplier = supplier;
    }

    pub fn set_plot_color(&mut self, color: Color) {
        self.plot_color = color;
    }

    /// The grid rectangle for a surface of the given pixel size: the frame
    /// inside the four margins, clamped to zero when the margins exceed the
    /// surface.
    pub fn grid_rect_for(&self, width: f32, height: f32) -> Rect {
        Rect::new(
            self.margins.left.width,
            self.margins.top.width,
            width - self.margins.left.width - self.margins.right.width,
            height - self.margins.top.width - self.margins.bottom.width,
        )
    }

    /// The grid rectangle computed by the most recent frame.
    pub fn grid_rect(&self) -> Rect {
        self.grid_rect
    }

    /// Map a user-space point to pixel space using the most recent frame's
    /// grid rectangle.
    pub fn to_pixel(&self, x: f32, y: f32) -> Point {
        let rect = self.grid_rect;
        let x_offset = rect.x + (rect.width - 1.0) / 2.0;
        let y_offset = rect.y + (rect.height - 1.0) / 2.0;
        Point::new(
            x * self.profile.grid_unit() + x_offset,
            -y * self.profile.grid_unit() + y_offset,
        )
    }

    /// Compute and paint one complete frame at the given surface size.
    pub fn render(&mut self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let pending = self.redraw_inbox.drain();
        if pending > 0 {
            trace!(pending, "redraw notifications drained; resetting profile");
            self.profile.reset(&self.store);
            self.margins = margins_from(&self.store);
        }

        let rect = self.grid_rect_for(width, height);
        self.grid_rect = rect;
        self.graph_manager.refresh(rect);
        debug!(
            width,
            height,
            grid_x = rect.x,
            grid_y = rect.y,
            grid_width = rect.width,
            grid_height = rect.height,
            "rendering frame"
        );

        // Surface background under everything, margins included.
        let saved_color = canvas.color();
        canvas.set_color(self.profile.graph().bg_color());
        canvas.fill_rect(Rect::new(0.0, 0.0, width, height));
        canvas.set_color(saved_color);

        // Grid layers and the user plot are clipped to the grid rectangle.
        let saved_clip = canvas.clip();
        canvas.set_clip(Some(rect));
        self.graph_manager.draw_all(canvas, &self.profile);
        self.draw_user_plot(canvas, rect);
        canvas.set_clip(saved_clip);

        // Margins go on last so they occlude anything that bled under them.
        self.paint_margins(canvas, width, height);
    }

    fn draw_user_plot(&mut self, canvas: &mut dyn Canvas, rect: Rect) {
        let Some(supplier) = self.plot_supplier.as_mut() else {
            return;
        };
        let commands = supplier();
        let mut ctx = PlotContext::new(canvas, rect, self.profile.grid_unit(), self.plot_color);
        for command in &commands {
            command.execute(&mut ctx);
        }
    }

    fn paint_margins(&self, canvas: &mut dyn Canvas, width: f32, height: f32) {
        let saved = canvas.color();
        let Margins {
            top,
            right,
            bottom,
            left,
        } = self.margins;

        canvas.set_color(top.color);
        canvas.fill_rect(Rect::new(0.0, 0.0, width, top.width));
        canvas.set_color(right.color);
        canvas.fill_rect(Rect::new(width - right.width, 0.0, right.width, height));
        canvas.set_color(bottom.color);
        canvas.fill_rect(Rect::new(0.0, height - bottom.width, width, bottom.width));
        canvas.set_color(left.color);
        canvas.fill_rect(Rect::new(0.0, 0.0, left.width, height));
        canvas.set_color(saved);
    }
}

fn margins_from(store: &ConfigStore) -> Margins {
    let defaults = Margins::default();
    let side = |width_key: &str, color_key: &str, fallback: Margin| {
        Margin::new(
            store.as_f32(width_key).unwrap_or(fallback.width),
            store.as_color(color_key).unwrap_or(fallback.color),
        )
    };
    Margins::new(
        side(keys::MARGIN_TOP_WIDTH, keys::MARGIN_TOP_BG_COLOR, defaults.top),
        side(
            keys::MARGIN_RIGHT_WIDTH,
            keys::MARGIN_RIGHT_BG_COLOR,
            defaults.right,
        ),
        side(
            keys::MARGIN_BOTTOM_WIDTH,
            keys::MARGIN_BOTTOM_BG_COLOR,
            defaults.bottom,
        ),
        side(
            keys::MARGIN_LEFT_WIDTH,
            keys::MARGIN_LEFT_BG_COLOR,
            defaults.left,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    #[test]
    fn margins_load_from_store() {
        let mut store = ConfigStore::new();
        store.set_f32(keys::MARGIN_TOP_WIDTH, 10.0);
        store.set_color(keys::MARGIN_TOP_BG_COLOR, Color::from_rgb(0x123456));
        let surface = PlaneSurface::new(store);
        assert_eq!(surface.margins().top.width, 10.0);
        assert_eq!(surface.margins().top.color, Color::from_rgb(0x123456));
        // Untouched sides keep the seeded defaults.
        assert_eq!(surface.margins().bottom.width, 60.0);
    }

    #[test]
    fn oversized_margins_clamp_grid_rect() {
        let surface = PlaneSurface::new(ConfigStore::new());
        let rect = surface.grid_rect_for(50.0, 50.0);
        assert_eq!(rect.width, 0.0);
        assert!(rect.is_degenerate());

        // Rendering a degenerate frame must not panic.
        let mut surface = surface;
        let mut canvas = RecordingCanvas::new();
        surface.render(&mut canvas, 50.0, 50.0);
    }

    #[test]
    fn redraw_notification_resets_profile_before_next_frame() {
        let mut surface = PlaneSurface::new(ConfigStore::new());
        surface.profile_mut().set_grid_unit(999.0);
        let sender = surface.redraw_sender();
        sender.publish(REDRAW_EVENT);

        let mut canvas = RecordingCanvas::new();
        surface.render(&mut canvas, 200.0, 200.0);
        assert_eq!(surface.profile().grid_unit(), 65.0);
    }

    #[test]
    fn edits_survive_frames_without_notifications() {
        let mut surface = PlaneSurface::new(ConfigStore::new());
        surface.profile_mut().set_grid_unit(999.0);
        let mut canvas = RecordingCanvas::new();
        surface.render(&mut canvas, 200.0, 200.0);
        assert_eq!(surface.profile().grid_unit(), 999.0);
    }
}
