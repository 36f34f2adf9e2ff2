use ropey::Rope;
use std::fmt;

/// Text store edited only at its end. Lengths are measured in chars.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
  rope: Rope,
}

impl TextBuffer {
  pub fn new() -> Self {
    Self { rope: Rope::new() }
  }

  /// Append `content` at the end of the buffer
  pub fn insert(&mut self, content: &str) {
    if content.is_empty() {
      return;
    }
    self.rope.insert(self.rope.len_chars(), content);
  }

  /// Remove the last `len` chars, clamped to the buffer length
  pub fn delete(&mut self, len: usize) {
    let start = self.tail_start(len);
    self.rope.remove(start..);
  }

  /// The last `len` chars, clamped to the buffer length
  pub fn tail(&self, len: usize) -> String {
    let start = self.tail_start(len);
    self.rope.slice(start..).to_string()
  }

  pub fn as_str(&self) -> String {
    self.rope.to_string()
  }

  pub fn len(&self) -> usize {
    self.rope.len_chars()
  }

  pub fn is_empty(&self) -> bool {
    self.rope.len_chars() == 0
  }

  fn tail_start(&self, len: usize) -> usize {
    self.rope.len_chars().saturating_sub(len)
  }
}

impl From<&str> for TextBuffer {
  fn from(content: &str) -> Self {
    Self {
      rope: Rope::from_str(content),
    }
  }
}

impl fmt::Display for TextBuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.rope)
  }
}
