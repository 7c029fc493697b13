use std::collections::VecDeque;

/// Discrete commands the toolbar sends to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    Undo,
    Redo,
    Clear,
    Save,
}

/// FIFO command queue owned by the composition root.
///
/// The toolbar pushes, the app drains once per frame and dispatches to the
/// board directly. There are no subscriptions, so handlers always see
/// current state rather than a snapshot captured at subscribe time.
#[derive(Debug, Default)]
pub struct ActionQueue {
    queue: VecDeque<CanvasAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: CanvasAction) {
        self.queue.push_back(action);
    }

    /// Remove and return all queued actions in dispatch order.
    pub fn drain(&mut self) -> impl Iterator<Item = CanvasAction> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
