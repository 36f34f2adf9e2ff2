/// Inputs for the fixed demonstration sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
  pub first_insert: String,
  pub second_insert: String,
  pub delete_len: usize,
  pub undo_count: usize,
}

impl Default for DemoConfig {
  fn default() -> Self {
    Self {
      first_insert: "Hello".to_string(),
      second_insert: " World!".to_string(),
      delete_len: 6,
      undo_count: 2,
    }
  }
}
