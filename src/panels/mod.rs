mod canvas_panel;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use toolbar::{TOOLBAR_WIDTH, toolbar};
