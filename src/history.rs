use crate::path::Path;

/// The two-stack undo/redo history over committed paths.
///
/// `committed` is append-only except for undo popping its tail; its order is
/// the z-order for redraw. `undone` holds paths available for redo and is
/// discarded whenever a new path is committed or the board is cleared.
#[derive(Default)]
pub struct History {
    committed: Vec<Path>,
    undone: Vec<Path>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized path. A commit after an undo invalidates the redo
    /// branch, so the undone sequence is cleared.
    pub fn commit(&mut self, path: Path) {
        self.committed.push(path);
        self.undone.clear();
    }

    /// Move the most recent committed path to the redo stack.
    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(path) => {
                self.undone.push(path);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone path back onto the committed stack.
    /// Returns false (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(path) => {
                self.committed.push(path);
                true
            }
            None => false,
        }
    }

    /// Drop both sequences.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    pub fn committed(&self) -> &[Path] {
        &self.committed
    }

    /// The in-progress freehand path lives at the committed tail while the
    /// pointer is down; pointer-move appends points through this.
    pub fn last_committed_mut(&mut self) -> Option<&mut Path> {
        self.committed.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Tool;
    use egui::{Color32, pos2};

    fn dot(x: f32, y: f32) -> Path {
        Path::freehand(Tool::Brush, Color32::BLACK, 5.0, pos2(x, y))
    }

    #[test]
    fn undo_then_redo_restores_committed() {
        let mut history = History::new();
        history.commit(dot(1.0, 1.0));
        history.commit(dot(2.0, 2.0));
        let before = history.committed().to_vec();

        assert!(history.undo());
        assert_eq!(history.committed().len(), 1);
        assert_eq!(history.undone_len(), 1);

        assert!(history.redo());
        assert_eq!(history.committed(), &before[..]);
        assert_eq!(history.undone_len(), 0);
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert_eq!(history.undone_len(), 0);
    }

    #[test]
    fn commit_discards_the_redo_branch() {
        let mut history = History::new();
        history.commit(dot(1.0, 1.0));
        history.commit(dot(2.0, 2.0));
        assert!(history.undo());
        assert!(history.can_redo());

        history.commit(dot(3.0, 3.0));
        assert!(!history.can_redo());
        assert_eq!(history.undone_len(), 0);
        assert_eq!(history.committed().len(), 2);
    }

    #[test]
    fn clear_empties_both_sequences() {
        let mut history = History::new();
        history.commit(dot(1.0, 1.0));
        history.commit(dot(2.0, 2.0));
        history.undo();

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
