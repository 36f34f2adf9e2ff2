use crate::Command;
use text::TextBuffer;
use tracing::{debug, warn};

/// Removes up to `len` chars from the end of the buffer.
///
/// The removed text is captured on `execute`, so `undo` puts back exactly
/// what was taken even when the request was clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
  len: usize,
  captured: Option<String>,
}

impl DeleteCommand {
  pub fn new(len: usize) -> Self {
    Self {
      len,
      captured: None,
    }
  }

  pub fn requested_len(&self) -> usize {
    self.len
  }

  /// Text removed by the last `execute`, if any
  pub fn captured(&self) -> Option<&str> {
    self.captured.as_deref()
  }
}

impl Command for DeleteCommand {
  fn execute(&mut self, buffer: &mut TextBuffer) {
    let removed = buffer.tail(self.len);
    debug!(requested = self.len, removed = %removed, "delete");
    buffer.delete(self.len);
    self.captured = Some(removed);
  }

  fn undo(&mut self, buffer: &mut TextBuffer) {
    match self.captured.take() {
      Some(removed) => {
        debug!(restored = %removed, "undo delete");
        buffer.insert(&removed);
      }
      None => warn!(requested = self.len, "undo of a delete that never ran"),
    }
  }
}
