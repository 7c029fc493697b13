//! The canvas component: one owned structure bundling the raster surface,
//! the undo/redo history and the pointer state machine, driven by direct
//! method calls from the app loop.

use egui::{Color32, Pos2};

use crate::action::CanvasAction;
use crate::config::ToolConfig;
use crate::error::BoardError;
use crate::history::History;
use crate::input::InputController;
use crate::renderer;
use crate::surface::Surface;

/// Fixed export filename, written next to the process.
pub const EXPORT_FILE_NAME: &str = "drawing.png";

pub struct Board {
    surface: Surface,
    history: History,
    controller: InputController,
    // Set whenever surface pixels change; the app swaps the texture then.
    dirty: bool,
}

impl Board {
    /// The surface starts empty; the first canvas frame sizes it to the
    /// viewport via `resize`.
    pub fn new(background: Color32) -> Self {
        Self {
            surface: Surface::new(0, 0, background),
            history: History::new(),
            controller: InputController::new(),
            dirty: false,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.controller.is_drawing()
    }

    /// True once since the last call if the texture needs re-uploading.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn pointer_down(&mut self, pos: Pos2, config: &ToolConfig) {
        self.controller
            .pointer_down(pos, config, &mut self.history, &mut self.surface);
        self.dirty = true;
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.controller.is_drawing() {
            return;
        }
        self.controller
            .pointer_move(pos, &mut self.history, &mut self.surface);
        self.dirty = true;
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up(&mut self.history, &mut self.surface);
        self.dirty = true;
    }

    /// Dispatch one toolbar action against current state.
    pub fn apply(&mut self, action: CanvasAction) -> Result<(), BoardError> {
        match action {
            CanvasAction::Undo => {
                if self.history.undo() {
                    renderer::redraw(&mut self.surface, self.history.committed());
                    self.dirty = true;
                }
            }
            CanvasAction::Redo => {
                if self.history.redo() {
                    renderer::redraw(&mut self.surface, self.history.committed());
                    self.dirty = true;
                }
            }
            CanvasAction::Clear => {
                // Nothing remains, so a background-only fill suffices.
                self.history.clear();
                self.surface.clear();
                self.dirty = true;
            }
            CanvasAction::Save => self.save_png()?,
        }
        Ok(())
    }

    /// Change the canvas background and replay all paths over it.
    pub fn set_background(&mut self, color: Color32) {
        if color == self.surface.background() {
            return;
        }
        self.surface.set_background(color);
        renderer::redraw(&mut self.surface, self.history.committed());
        self.dirty = true;
    }

    /// Size the surface to the viewport, carrying existing raster content.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.surface.width() && height == self.surface.height() {
            return;
        }
        self.surface.resize(width, height);
        self.dirty = true;
    }

    /// Export the current surface as `drawing.png`. Does not touch history.
    pub fn save_png(&self) -> Result<(), BoardError> {
        if self.surface.width() == 0 || self.surface.height() == 0 {
            log::warn!("ignoring save: surface not yet sized");
            return Ok(());
        }
        let bytes = self.surface.encode_png()?;
        std::fs::write(EXPORT_FILE_NAME, bytes)?;
        log::info!(
            "saved {}x{} surface to {EXPORT_FILE_NAME}",
            self.surface.width(),
            self.surface.height()
        );
        Ok(())
    }
}
