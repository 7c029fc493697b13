use egui::Color32;

use crate::path::Tool;

/// Brush size bounds exposed by the toolbar slider.
pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Shared toolbar configuration read by the input controller.
///
/// Size and color are captured into a path when the stroke starts; changing
/// them mid-stroke never affects the path being drawn.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub brush_color: Color32,
    pub brush_size: u32,
    pub canvas_color: Color32,
    pub tool: Tool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            brush_color: Color32::BLACK,
            brush_size: 5,
            canvas_color: Color32::WHITE,
            tool: Tool::Brush,
        }
    }
}

impl ToolConfig {
    /// Brush size clamped to the slider bounds, as a stroke width.
    pub fn stroke_width(&self) -> f32 {
        self.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE) as f32
    }
}
