//! Walk progress reporting: lightweight updates sent from the walker to an
//! optional consumer over a bounded crossbeam channel.
//!
//! Updates are best-effort. The walker uses `try_send`, so a slow or
//! disconnected consumer only loses updates and never stalls the walk.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender, TrySendError};

/// Capacity of the channel returned by [`progress_channel`].
pub const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// Running totals after a directory has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkProgress {
    pub dirs_visited: usize,
    pub files_counted: usize,
    pub unreadable: usize,
    /// Directory that was just processed.
    pub current_path: PathBuf,
}

/// Sending half held by the walker.
#[derive(Debug, Clone)]
pub struct ProgressSink {
    sender: Sender<WalkProgress>,
}

impl ProgressSink {
    pub fn new(sender: Sender<WalkProgress>) -> Self {
        Self { sender }
    }

    /// Offer an update. Returns false if it was dropped.
    pub fn offer(&self, update: WalkProgress) -> bool {
        match self.sender.try_send(update) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Create a bounded progress channel.
pub fn progress_channel() -> (ProgressSink, Receiver<WalkProgress>) {
    let (tx, rx) = crossbeam_channel::bounded(PROGRESS_CHANNEL_CAPACITY);
    (ProgressSink::new(tx), rx)
}
