use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::{Error, Result};

/// Longest uninterrupted sleep inside [`Interrupt::pause`].
const PAUSE_SLICE: Duration = Duration::from_millis(25);

/// Cooperative cancellation flag shared between the Ctrl-C handler and screens.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes the process Ctrl-C signal into this flag. Can only succeed once
    /// per process.
    pub fn install(&self) -> Result<()> {
        let flag = Arc::clone(&self.flag);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)).map_err(|e| {
            Error::unclassified(format!("Unable to install the Ctrl-C handler: {e}"))
        })
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// `Err(Error::Interrupted)` once cancellation was requested.
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_requested() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Sleeps for `duration`, waking up early with `Error::Interrupted`.
    /// A duration past the clock's range sleeps until interrupted.
    pub fn pause(&self, duration: Duration) -> Result<()> {
        let deadline = Instant::now().checked_add(duration);
        loop {
            self.checkpoint()?;
            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(());
                    }
                    deadline - now
                }
                None => PAUSE_SLICE,
            };
            thread::sleep(remaining.min(PAUSE_SLICE));
        }
    }
}
