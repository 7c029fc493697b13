//! Turns pointer events into path mutations and finalizes them into history.

use egui::Pos2;

use crate::config::ToolConfig;
use crate::history::History;
use crate::path::Path;
use crate::renderer;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    Drawing,
}

/// Pointer-driven drawing state machine.
///
/// Freehand paths are committed at pointer-down and extended in place so the
/// stroke is visible incrementally; shape paths live here as a transient
/// until pointer-up commits them.
pub struct InputController {
    state: InputState,
    transient: Option<Path>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self {
            state: InputState::Idle,
            transient: None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state == InputState::Drawing
    }

    /// Idle → Drawing. Captures tool, color and size from the current config.
    pub fn pointer_down(
        &mut self,
        pos: Pos2,
        config: &ToolConfig,
        history: &mut History,
        surface: &mut Surface,
    ) {
        let (color, width) = (config.brush_color, config.stroke_width());
        if config.tool.is_freehand() {
            // Committed immediately; pointer-move extends it in place.
            let path = Path::freehand(config.tool, color, width, pos);
            renderer::draw_path(surface, &path);
            history.commit(path);
        } else {
            self.transient = Some(Path::shape(config.tool, color, width, pos));
        }
        self.state = InputState::Drawing;
    }

    /// Extend the in-progress path. Ignored while Idle.
    pub fn pointer_move(&mut self, pos: Pos2, history: &mut History, surface: &mut Surface) {
        if self.state != InputState::Drawing {
            return;
        }
        if let Some(transient) = &mut self.transient {
            // Shape preview: replay committed paths, then the transient on top.
            transient.set_endpoint(pos);
            renderer::redraw(surface, history.committed());
            renderer::draw_path(surface, transient);
        } else if let Some(path) = history.last_committed_mut() {
            let prev = path.endpoint();
            path.push_point(pos);
            renderer::draw_segment(surface, path, prev, pos);
        }
    }

    /// Drawing → Idle. Shapes are committed here; freehand paths already are.
    pub fn pointer_up(&mut self, history: &mut History, surface: &mut Surface) {
        if let Some(transient) = self.transient.take() {
            // Covers a click with no movement, where no preview was drawn.
            renderer::draw_path(surface, &transient);
            history.commit(transient);
        }
        self.state = InputState::Idle;
    }
}
