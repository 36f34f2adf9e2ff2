use crate::DemoConfig;
use anyhow::{Context, Result};
use command::{DeleteCommand, InsertCommand};
use history::HistoryManager;
use std::io::Write;
use text::TextBuffer;
use tracing::info;

/// Play the insert/insert/delete/undo sequence, writing each state to `out`
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
  let mut buffer = TextBuffer::new();
  let mut history = HistoryManager::new();

  history.execute_command(InsertCommand::new(config.first_insert.as_str()), &mut buffer);
  history.execute_command(InsertCommand::new(config.second_insert.as_str()), &mut buffer);
  writeln!(out, "Current text: {buffer}").context("failed to write demo output")?;

  history.execute_command(DeleteCommand::new(config.delete_len), &mut buffer);
  writeln!(out, "After delete: {buffer}").context("failed to write demo output")?;

  for _ in 0..config.undo_count {
    let written = match history.undo(&mut buffer) {
      Ok(()) => writeln!(out, "After undo: {buffer}"),
      Err(err) => writeln!(out, "{err}"),
    };
    written.context("failed to write demo output")?;
  }

  info!(remaining = history.len(), "demo finished");
  Ok(())
}
