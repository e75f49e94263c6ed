use crate::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Marks a simulated service busy for the lifetime of one capture
pub(super) struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    pub(super) fn acquire(flag: &'a AtomicBool, service: &str) -> AppResult<Self> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(AppError::CaptureInProgress(format!("{} is busy", service)));
        }
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
