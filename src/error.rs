/// Errors surfaced by the export path.
///
/// Undo/redo on an empty stack and degenerate resizes are silent no-ops,
/// not errors; only encoding and writing the exported image can fail.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to encode surface as PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write exported image: {0}")]
    Io(#[from] std::io::Error),
}
