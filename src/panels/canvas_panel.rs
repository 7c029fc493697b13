use egui::{Color32, Rect, TextureHandle, TextureOptions, pos2};

use crate::board::Board;
use crate::config::ToolConfig;

/// The drawing area: sizes the surface to the available rect, maps drag
/// interactions to pointer events in surface-local coordinates, and paints
/// the raster texture.
pub fn canvas_panel(
    ctx: &egui::Context,
    board: &mut Board,
    config: &ToolConfig,
    texture: &mut Option<TextureHandle>,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let size = ui.available_size();
            board.resize(size.x as usize, size.y as usize);

            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let origin = response.rect.min;

            if let Some(pos) = response.interact_pointer_pos() {
                let local = (pos - origin).to_pos2();
                if response.drag_started() {
                    board.pointer_down(local, config);
                } else if response.dragged() {
                    board.pointer_move(local);
                }
            }
            if response.drag_stopped() {
                board.pointer_up();
            }

            if board.take_dirty() && board.surface().width() > 0 {
                let image = board.surface().to_color_image();
                match texture {
                    Some(handle) => handle.set(image, TextureOptions::NEAREST),
                    None => {
                        *texture = Some(ctx.load_texture("board", image, TextureOptions::NEAREST));
                    }
                }
            }

            if let Some(handle) = texture {
                painter.image(
                    handle.id(),
                    response.rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });
}
