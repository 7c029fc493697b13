use crate::action::ActionQueue;
use crate::board::Board;
use crate::config::ToolConfig;
use crate::panels;

/// Composition root: owns the toolbar configuration, the board, and the
/// action queue between them. Only the configuration is persisted across
/// runs; drawings live and die with the session.
pub struct SketchApp {
    config: ToolConfig,
    board: Board,
    actions: ActionQueue,
    texture: Option<egui::TextureHandle>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: ToolConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let board = Board::new(config.canvas_color);
        Self {
            config,
            board,
            actions: ActionQueue::new(),
            texture: None,
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(ctx, &mut self.config, &mut self.actions);

        // No-op unless the toolbar picked a new canvas color.
        self.board.set_background(self.config.canvas_color);

        for action in self.actions.drain() {
            if let Err(err) = self.board.apply(action) {
                log::error!("{action:?} failed: {err}");
            }
        }

        panels::canvas_panel(ctx, &mut self.board, &self.config, &mut self.texture);
    }
}
