//! Progress indicators for long-running operations
//!
//! Uses `linya` for allocation-free, concurrency-optimized progress bars.
//! Record directories of real release trains hold thousands of files, so
//! the scan bar is shared across rayon workers.

use linya::{Bar, Progress};
use std::sync::{Arc, Mutex};

/// Thread-safe progress bar for scanning record files
#[derive(Clone)]
pub struct ScanProgress {
  progress: Arc<Mutex<Progress>>,
  bar: Arc<Bar>,
}

impl ScanProgress {
  /// Create a new progress bar for scanning `total` files
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self {
      progress: Arc::new(Mutex::new(progress)),
      bar: Arc::new(bar),
    }
  }

  /// Increment progress by 1 (safe to call from worker threads)
  pub fn inc(&self) {
    let mut progress = self.progress.lock().unwrap();
    progress.inc_and_draw(&self.bar, 1);
  }

  /// Set progress to a specific value
  #[allow(dead_code)]
  pub fn set(&self, pos: usize) {
    let mut progress = self.progress.lock().unwrap();
    progress.set_and_draw(&self.bar, pos);
  }
}
