use crate::Command;
use text::TextBuffer;
use tracing::debug;

/// Appends a fixed piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertCommand {
  text: String,
}

impl InsertCommand {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  pub fn text(&self) -> &str {
    &self.text
  }
}

impl Command for InsertCommand {
  fn execute(&mut self, buffer: &mut TextBuffer) {
    debug!(text = %self.text, "insert");
    buffer.insert(&self.text);
  }

  fn undo(&mut self, buffer: &mut TextBuffer) {
    let len = self.text.chars().count();
    debug!(len, "undo insert");
    buffer.delete(len);
  }
}
