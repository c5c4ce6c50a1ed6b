// src/exit.rs
//! Standardized process exit codes.
//!
//! Provides a stable contract for CI scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReportExit {
    /// Conversion completed and valid JSON was written.
    Success = 0,
    /// Generic error (I/O, serialization, lifecycle).
    Error = 1,
    /// Input validation failed (bad config, unusable arguments).
    InvalidInput = 2,
}

impl ReportExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ReportExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for ReportExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                Self::Error
            }
        }
    }
}
