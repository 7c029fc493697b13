use egui::Slider;

use crate::action::{ActionQueue, CanvasAction};
use crate::config::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, ToolConfig};
use crate::path::Tool;

/// Width of the fixed toolbar; the canvas gets the rest of the viewport.
pub const TOOLBAR_WIDTH: f32 = 240.0;

/// The left toolbar: tool selection, size/color pickers, and the action
/// buttons that enqueue commands for the board.
pub fn toolbar(ctx: &egui::Context, config: &mut ToolConfig, actions: &mut ActionQueue) {
    egui::SidePanel::left("toolbar")
        .exact_width(TOOLBAR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Shapes");
            tool_button(ui, config, Tool::Rectangle, "▭ Rectangle");
            tool_button(ui, config, Tool::Circle, "○ Circle");
            tool_button(ui, config, Tool::Line, "∕ Line");

            ui.separator();
            ui.heading("Free Tools");
            tool_button(ui, config, Tool::Brush, "🖌 Brush");
            tool_button(ui, config, Tool::Eraser, "⌫ Eraser");

            ui.separator();
            ui.heading("Tool Size");
            ui.add(Slider::new(
                &mut config.brush_size,
                MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE,
            ));

            ui.separator();
            ui.heading("Brush Color");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut config.brush_color,
                egui::color_picker::Alpha::Opaque,
            );

            ui.separator();
            ui.heading("Canvas Color");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut config.canvas_color,
                egui::color_picker::Alpha::Opaque,
            );

            ui.separator();
            ui.heading("Actions");
            ui.horizontal_wrapped(|ui| {
                if ui.button("Undo").clicked() {
                    actions.push(CanvasAction::Undo);
                }
                if ui.button("Redo").clicked() {
                    actions.push(CanvasAction::Redo);
                }
                if ui.button("Clear").clicked() {
                    actions.push(CanvasAction::Clear);
                }
                if ui.button("Save").clicked() {
                    actions.push(CanvasAction::Save);
                }
            });
        });
}

fn tool_button(ui: &mut egui::Ui, config: &mut ToolConfig, tool: Tool, label: &str) {
    if ui.selectable_label(config.tool == tool, label).clicked() {
        config.tool = tool;
    }
}
