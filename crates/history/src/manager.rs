use crate::HistoryError;
use command::Command;
use text::TextBuffer;
use tracing::{debug, info};

/// LIFO record of executed commands.
///
/// Holds exactly the commands run through `execute_command` that have not
/// been undone yet, most recent last. Undone commands are dropped; there
/// is no redo.
#[derive(Debug, Default)]
pub struct HistoryManager {
  history: Vec<Box<dyn Command>>,
}

impl HistoryManager {
  pub fn new() -> Self {
    Self {
      history: Vec::new(),
    }
  }

  /// Run `command` against `buffer` and record it
  pub fn execute_command<C>(&mut self, mut command: C, buffer: &mut TextBuffer)
  where
    C: Command + 'static,
  {
    command.execute(buffer);
    self.history.push(Box::new(command));
    debug!(depth = self.history.len(), "command recorded");
  }

  /// Reverse the most recent command
  pub fn undo(&mut self, buffer: &mut TextBuffer) -> Result<(), HistoryError> {
    let Some(mut command) = self.history.pop() else {
      info!("no operation to undo");
      return Err(HistoryError::NothingToUndo);
    };

    command.undo(buffer);
    debug!(?command, depth = self.history.len(), "command undone");
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.history.len()
  }

  pub fn is_empty(&self) -> bool {
    self.history.is_empty()
  }
}
