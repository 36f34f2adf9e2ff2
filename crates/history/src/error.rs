use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
  /// Undo was requested with an empty history. The buffer is left as is.
  #[error("no operation to undo")]
  NothingToUndo,
}
