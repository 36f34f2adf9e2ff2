// Undoable edits on a `TextBuffer`
//
// A command carries the parameters of one edit and knows how to apply it
// and how to reverse it. Commands never hold the buffer themselves; the
// caller lends it for each `execute`/`undo`, so a single buffer can be
// targeted by any number of commands.
//
// `undo` restores the buffer to its pre-`execute` state as long as nothing
// else touched the buffer in between.

mod delete;
mod insert;

pub use delete::DeleteCommand;
pub use insert::InsertCommand;

use std::fmt::Debug;
use text::TextBuffer;

pub trait Command: Debug {
  fn execute(&mut self, buffer: &mut TextBuffer);
  fn undo(&mut self, buffer: &mut TextBuffer);
}
