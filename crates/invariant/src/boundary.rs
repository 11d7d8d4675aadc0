//! Recovering from failed assertions at an outer boundary.

use crate::AssertFailed;
use std::panic::{self, UnwindSafe};

/// Runs `f`, returning what it returns, or the failure if it failed an assertion.
///
/// The failure is logged at error level before it is returned. Panics that are not failed
/// assertions keep unwinding.
///
/// The panic hook still runs for the failure, so it is reported there too.
///
/// `dyn Dynamic` is not `RefUnwindSafe`, so a closure borrowing one must be wrapped in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe).
///
/// # Errors
///
/// If `f` failed an assertion.
pub fn catch<F, T>(f: F) -> Result<T, AssertFailed>
where
  F: FnOnce() -> T + UnwindSafe,
{
  match panic::catch_unwind(f) {
    Ok(x) => Ok(x),
    Err(payload) => match AssertFailed::from_panic(payload.as_ref()) {
      Some(e) => {
        log::error!("{e}");
        Err(e)
      }
      None => panic::resume_unwind(payload),
    },
  }
}
