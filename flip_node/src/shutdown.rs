//! Process interrupt handling.

use eyre::{Result, WrapErr};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cleared once the process receives a termination signal.
///
/// Only one handler may be installed per process.
#[derive(Debug, Clone)]
pub struct RunningFlag {
    running: Arc<AtomicBool>,
}

impl RunningFlag {
    /// Install the signal handler and return a flag that is set until
    /// the first SIGINT, SIGTERM or SIGHUP arrives.
    pub fn install() -> Result<Self> {
        let flag = Self {
            running: Arc::new(AtomicBool::new(true)),
        };

        let handler_flag = flag.clone();
        ctrlc::set_handler(move || handler_flag.stop())
            .wrap_err("Failed to install interrupt handler")?;

        Ok(flag)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
