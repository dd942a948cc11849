mod codec;
mod history;
mod snapshot;

pub mod dirs;
pub mod storage;

pub use codec::{decode, encode, HistoryError};
pub use history::SnapshotHistory;
pub use snapshot::Snapshot;
