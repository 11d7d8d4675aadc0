//! Assertions for debugging.
//!
//! Every check here panics with a message starting with [`TAG`] when its condition does not hold,
//! and does nothing otherwise. The checks are active in every build profile.
//!
//! - [`is_true`] and [`check!`] for plain conditions.
//! - [`ok`], [`not_ok`], and [`no_error`] for results of calls, which append the outcome to the
//!   message (`f(3) = false`).
//! - [`not_nil`] and [`deref`] for values that might be absent.
//! - [`type_of`], [`convert`], and [`convert_ref`] for [`Dynamic`] values.
//! - [`todo`] for cases not handled yet.
//!
//! [`catch`] turns a raised failure back into an [`AssertFailed`] at an outer boundary.

mod boundary;
mod check;
mod dynamic;


pub use boundary::catch;
pub use check::{deref, is_true, is_true_fmt, no_error, not_nil, not_ok, ok, Binding, Nullable};
pub use dynamic::{convert, convert_ref, type_of, Dynamic};

use std::fmt;

/// The start of every failure message.
pub const TAG: &str = "[ASSERT FAILED]: ";

/// A failed assertion.
///
/// Displays as [`TAG`] followed by the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertFailed(String);

impl AssertFailed {
  /// Returns a new `AssertFailed` with this description.
  #[must_use]
  pub fn new<S>(description: S) -> Self
  where
    S: Into<String>,
  {
    Self(description.into())
  }

  /// Returns the description, without the tag.
  #[must_use]
  pub fn description(&self) -> &str {
    self.0.as_str()
  }

  /// Returns the failure carried by a panic payload, as from [`std::panic::catch_unwind`], or
  /// `None` if the panic was not a failed assertion.
  ///
  /// A panic counts as a failed assertion when its message starts with [`TAG`], whether or not it
  /// came from this crate.
  #[must_use]
  pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Option<Self> {
    let msg = if let Some(s) = payload.downcast_ref::<String>() {
      s.as_str()
    } else {
      *payload.downcast_ref::<&'static str>()?
    };
    msg.strip_prefix(TAG).map(Self::new)
  }
}

impl fmt::Display for AssertFailed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{TAG}{}", self.0)
  }
}

impl std::error::Error for AssertFailed {}

/// Panics with the failure. Every check ends up here.
#[cold]
#[inline(never)]
#[track_caller]
fn raise(failure: &AssertFailed) -> ! {
  panic!("{failure}")
}

/// Marks a case that has not been handled yet.
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn todo() -> ! {
  raise(&AssertFailed::new("TODO: Handle this case"))
}

/// Asserts the condition holds.
///
/// With only a condition, the message is the condition's source text. Otherwise the rest is a
/// format string and its arguments, as with [`format!`].
///
/// # Panics
///
/// If the condition is false.
#[macro_export]
macro_rules! check {
  ($cond:expr $(,)?) => {
    $crate::is_true($cond, ::core::concat!("assertion failed: ", ::core::stringify!($cond)))
  };

  ($cond:expr, $fmt:literal $($arg:tt)*) => {
    $crate::is_true_fmt($cond, ::core::format_args!($fmt $($arg)*))
  };
}

/// Asserts the flag is true, with a message like `f(3) = false` if not. See [`ok`].
///
/// # Panics
///
/// If the flag is false.
#[macro_export]
macro_rules! check_ok {
  ($ok:expr, $fmt:literal $($arg:tt)*) => {
    $crate::ok($ok, ::core::format_args!($fmt $($arg)*))
  };
}

/// Asserts the flag is false, with a message like `f(3) = true` if not. See [`not_ok`].
///
/// # Panics
///
/// If the flag is true.
#[macro_export]
macro_rules! check_not_ok {
  ($ok:expr, $fmt:literal $($arg:tt)*) => {
    $crate::not_ok($ok, ::core::format_args!($fmt $($arg)*))
  };
}

/// Asserts the result is `Ok` and evaluates to its value. See [`no_error`].
///
/// # Panics
///
/// If the result is `Err`.
#[macro_export]
macro_rules! check_no_error {
  ($res:expr, $fmt:literal $($arg:tt)*) => {
    $crate::no_error($res, ::core::format_args!($fmt $($arg)*))
  };
}
