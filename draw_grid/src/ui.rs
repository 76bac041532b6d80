// ui.rs - egui front end for the draw grid component

use eframe::egui;
use egui::{Response, Sense, Vec2};

use crate::cell::DrawingState;
use crate::cli::MAX_GRID_DIMENSION;
use crate::component::DrawGridComponent;
use crate::palette::Palette;
use crate::DrawGridApp;

impl eframe::App for DrawGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(mode) = mode_shortcut(ctx) {
            self.component.set_drawing_state(mode);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Draw Grid");

            // Controls
            ui.horizontal(|ui| {
                let mode = self.component.drawing_state();
                if ui.button(mode.label()).clicked() {
                    let mode = self.component.change_drawing_state();
                    tracing::debug!(?mode, "drawing state changed");
                }

                if ui.button("⏹ Clear").clicked() {
                    self.component.clear();
                }

                ui.separator();

                let max = MAX_GRID_DIMENSION as usize;
                ui.label("Width:");
                ui.add(egui::DragValue::new(&mut self.pending_width).clamp_range(1..=max));
                ui.label("Height:");
                ui.add(egui::DragValue::new(&mut self.pending_height).clamp_range(1..=max));

                let pending = (self.pending_width, self.pending_height);
                if ui
                    .add_enabled(pending != self.component.grid().dimensions(), egui::Button::new("Resize"))
                    .clicked()
                {
                    self.apply_pending_size();
                }
            });

            ui.separator();
            ui.label("Click or drag to fill cells. Press D to draw, E to erase.");
            ui.separator();

            let (_, changed) = grid_widget(&mut self.component, &self.palette, ui, self.widget_size);
            if changed {
                ctx.request_repaint();
            }

            ui.separator();

            // Statistics
            let counts = self.component.counts();
            let total = self.component.grid().len().max(1);
            ui.horizontal(|ui| {
                ui.label(format!("Filled cells: {}", counts.clicked));
                ui.label(format!("Empty cells: {}", counts.inactive + counts.hovered));
                ui.label(format!("Coverage: {:.1}%", (counts.clicked as f32 / total as f32) * 100.0));
            });
        });
    }
}

/// D / E pick the pen mode directly, unless a text field has the keyboard.
fn mode_shortcut(ctx: &egui::Context) -> Option<DrawingState> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        if i.key_pressed(egui::Key::D) {
            Some(DrawingState::Drawing)
        } else if i.key_pressed(egui::Key::E) {
            Some(DrawingState::Erasing)
        } else {
            None
        }
    })
}

/// Allocates a `size` x `size` grid, hands this frame's pointer input to the
/// component and paints it. Returns the widget response and whether any cell
/// changed.
fn grid_widget(
    component: &mut DrawGridComponent,
    palette: &Palette,
    ui: &mut egui::Ui,
    size: f32,
) -> (Response, bool) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::click_and_drag());
    let changed = route_pointer(component, ui, &response);
    component.paint(&painter, response.rect, palette);
    (response, changed)
}

/// One handler per frame: press, then drag, then hover, else the pointer
/// has left the widget.
fn route_pointer(component: &mut DrawGridComponent, ui: &egui::Ui, response: &Response) -> bool {
    let bounds = response.rect;
    let pressed = response.hovered() && ui.input(|i| i.pointer.primary_pressed());

    if pressed {
        response
            .hover_pos()
            .is_some_and(|pos| component.mouse_down(bounds, pos))
    } else if response.dragged() {
        // egui reports a held button as dragging even when the pointer is still
        if response.drag_delta() == Vec2::ZERO {
            return false;
        }
        response
            .interact_pointer_pos()
            .is_some_and(|pos| component.mouse_drag(bounds, pos))
    } else if let Some(pos) = response.hover_pos() {
        component.mouse_move(bounds, pos)
    } else {
        component.mouse_exit()
    }
}
