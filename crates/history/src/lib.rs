mod error;
mod manager;

pub use error::HistoryError;
pub use manager::HistoryManager;
