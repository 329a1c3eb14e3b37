//! Interactive Sierpinski triangle viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the view model and the
//! animation driver and implements [`eframe::App`] to render and
//! control the animation through an egui UI.

use eframe::App;
use fractal_core::{
    driver::AnimationDriver,
    geometry::BoundingBox,
    model::{ViewModel, numerus},
    motion,
    placement::Placement,
    types::MAX_DEPTH,
};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The core state: [`ViewModel`] (parameters, viewport, factor).
/// - The [`AnimationDriver`] advancing the shrink factor per frame.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The per-frame update is:
/// 1. Read slider input into the model parameters.
/// 2. Measure the central panel rect as the viewport.
/// 3. Tick the driver with the current wall-clock time and publish the
///    factor into the model.
/// 4. Compute placements and draw one filled triangle per leaf.
/// 5. Request a repaint, which re-arms the next tick.
pub struct Viewer {
    model: ViewModel,
    driver: AnimationDriver,
}

/// Triangle fill color.
const TRIANGLE_FILL: egui::Color32 = egui::Color32::from_rgb(28, 117, 188);
/// Label text color, the CSS `FloralWhite`.
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 250, 240);

/// Maps a placement's bounding box to the three screen-space corners
/// of its triangle: apex top-center, then base left and base right.
///
/// `origin` is the screen position of the viewport's top-left corner;
/// placements are viewport-relative.
fn triangle_points(bbox: &BoundingBox, origin: egui::Vec2) -> [egui::Pos2; 3] {
    let w2 = bbox.size.x / 2.0;
    [
        egui::pos2(bbox.pos.x, bbox.pos.y) + origin,
        egui::pos2(bbox.pos.x - w2, bbox.pos.y + bbox.size.y) + origin,
        egui::pos2(bbox.pos.x + w2, bbox.pos.y + bbox.size.y) + origin,
    ]
}

impl Viewer {
    /// Creates a new viewer with default parameters (depth 4, speed 50)
    /// and an idle animation driver. The driver starts running on the
    /// first frame.
    pub fn new() -> Self {
        Self {
            model: ViewModel::new(),
            driver: AnimationDriver::new(),
        }
    }

    /// Speed value shown next to the slider: the stored position
    /// round-tripped through the animation period, which is how the
    /// display contract defines it.
    fn displayed_speed(&self) -> u32 {
        motion::period_to_speed(self.model.period_ms()).round() as u32
    }

    /// Builds the top control panel (depth and speed sliders).
    fn ui_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Depth");
                ui.add(egui::Slider::new(
                    &mut self.model.params.depth,
                    0..=MAX_DEPTH,
                ));

                ui.separator();

                ui.label("Speed");
                ui.add(
                    egui::Slider::new(&mut self.model.params.speed_input, 1..=100)
                        .show_value(false),
                );
                ui.monospace(self.displayed_speed().to_string());
            });
        });

        // Sliders are range-limited, but the clamping contract lives in
        // the setters.
        self.model.params.set_depth(self.model.params.depth);
        self.model.params.set_speed_input(self.model.params.speed_input);
    }

    /// Builds the bottom status bar (fps, viewport, component counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(numerus(self.model.node_count(), "node"));
                ui.label(numerus(self.model.leaf_count(), "component"));
                ui.separator();
                ui.label(format!(
                    "{} x {} px",
                    self.model.viewport.x as u32, self.model.viewport.y as u32
                ));
                ui.label(format!("{} fps", self.driver.fps()));
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                ));
            });
        });
    }

    /// Builds the central panel: measures the viewport, advances the
    /// animation, and draws the leaf triangles.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let painter = ui.painter_at(rect);

            self.model.set_viewport(rect.width(), rect.height());

            // egui time is seconds since start; the driver works in
            // milliseconds.
            let now_ms = ctx.input(|i| i.time) * 1000.0;
            self.model.factor = self.driver.tick(now_ms, self.model.period_ms());

            let origin = rect.min.to_vec2();
            let label = self.model.label().to_string();

            for Placement { bbox, .. } in self.model.placements() {
                let points = triangle_points(&bbox, origin);
                painter.add(egui::Shape::convex_polygon(
                    points.to_vec(),
                    TRIANGLE_FILL,
                    egui::Stroke::NONE,
                ));

                let center = egui::pos2(
                    bbox.pos.x + origin.x,
                    bbox.pos.y + bbox.size.y * 0.66 + origin.y,
                );
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    &label,
                    egui::FontId::proportional((bbox.size.y * 0.25).clamp(4.0, 24.0)),
                    LABEL_COLOR,
                );
            }

            // One repaint request per published factor: this is the
            // self-re-arming tick subscription that keeps the loop
            // alive.
            ctx.request_repaint();
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_controls(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_core::driver::DriverState;
    use glam::Vec2;

    #[test]
    fn new_viewer_starts_idle_with_default_parameters() {
        let viewer = Viewer::new();
        assert_eq!(viewer.driver.state(), DriverState::Idle);
        assert_eq!(viewer.model.params.depth, 4);
        assert_eq!(viewer.model.params.speed_input, 50);
        assert!(viewer.model.placements().is_empty());
    }

    #[test]
    fn triangle_points_anchor_apex_and_base_corners() {
        let bbox = BoundingBox::new(Vec2::new(50.0, 0.0), Vec2::new(100.0, 80.0));
        let [apex, base_left, base_right] = triangle_points(&bbox, egui::vec2(10.0, 20.0));

        assert_eq!(apex, egui::pos2(60.0, 20.0));
        assert_eq!(base_left, egui::pos2(10.0, 100.0));
        assert_eq!(base_right, egui::pos2(110.0, 100.0));
    }

    #[test]
    fn displayed_speed_round_trips_the_slider_position() {
        let mut viewer = Viewer::new();
        for s in 1..=100 {
            viewer.model.params.set_speed_input(s);
            assert_eq!(viewer.displayed_speed(), s);
        }
    }

    #[test]
    fn simulated_frame_produces_one_placement_per_leaf() {
        let mut viewer = Viewer::new();
        viewer.model.set_viewport(800.0, 600.0);
        viewer.model.params.set_depth(3);

        // What ui_central_panel does per frame, minus the painting.
        let factor = viewer.driver.tick(16.7, viewer.model.period_ms());
        viewer.model.factor = factor;

        assert_eq!(viewer.driver.state(), DriverState::Running);
        assert_eq!(viewer.model.placements().len(), 27);
    }
}
