pub mod check;
pub mod stats;
pub mod validate;

pub use check::run_check;
pub use stats::run_stats;
pub use validate::run_validate;

use std::process::ExitCode;

/// Exit status for a query the engine refused to evaluate.
pub const EXIT_REFUSED: u8 = 2;

pub fn refused() -> ExitCode {
    ExitCode::from(EXIT_REFUSED)
}
