//! Checks on conditions, results, and possibly-absent values.

use crate::{raise, AssertFailed};
use std::fmt;

/// Asserts `cond` holds.
///
/// # Panics
///
/// If `cond` is false, with `msg` as the description.
#[track_caller]
pub fn is_true(cond: bool, msg: &str) {
  if !cond {
    raise(&AssertFailed::new(msg));
  }
}

/// Like [`is_true`], but the description is formatted. Usually called via [`check!`](crate::check).
///
/// # Panics
///
/// If `cond` is false.
#[track_caller]
pub fn is_true_fmt(cond: bool, args: fmt::Arguments<'_>) {
  if !cond {
    raise(&AssertFailed::new(args.to_string()));
  }
}

/// Asserts the outcome of the call described by `args` is true.
///
/// # Panics
///
/// If `ok` is false, with the description `<args> = false`.
#[track_caller]
pub fn ok(ok: bool, args: fmt::Arguments<'_>) {
  if !ok {
    raise(&AssertFailed::new(format!("{args} = false")));
  }
}

/// Asserts the outcome of the call described by `args` is false.
///
/// # Panics
///
/// If `ok` is true, with the description `<args> = true`.
#[track_caller]
pub fn not_ok(ok: bool, args: fmt::Arguments<'_>) {
  if ok {
    raise(&AssertFailed::new(format!("{args} = true")));
  }
}

/// Asserts the call described by `args` did not fail, and returns what it returned.
///
/// # Panics
///
/// If `res` is `Err(e)`, with the description `<args> = <e>`.
// not `must_use`, since `T` is often `()`.
#[allow(clippy::must_use_candidate)]
#[track_caller]
pub fn no_error<T, E>(res: Result<T, E>, args: fmt::Arguments<'_>) -> T
where
  E: fmt::Display,
{
  match res {
    Ok(x) => x,
    Err(e) => raise(&AssertFailed::new(format!("{args} = {e}"))),
  }
}

/// A value that may be nil.
pub trait Nullable {
  /// Returns whether this is nil.
  fn is_nil(&self) -> bool;
}

impl<T> Nullable for Option<T> {
  fn is_nil(&self) -> bool {
    self.is_none()
  }
}

impl<T: ?Sized> Nullable for *const T {
  fn is_nil(&self) -> bool {
    self.is_null()
  }
}

impl<T: ?Sized> Nullable for *mut T {
  fn is_nil(&self) -> bool {
    self.is_null()
  }
}

impl<N: Nullable + ?Sized> Nullable for &N {
  fn is_nil(&self) -> bool {
    (**self).is_nil()
  }
}

/// Asserts `value`, named `name`, is not nil.
///
/// # Panics
///
/// If `value` is nil.
#[track_caller]
pub fn not_nil<N>(value: &N, name: &str)
where
  N: Nullable + ?Sized,
{
  if value.is_nil() {
    raise(&AssertFailed::new(format!("{name:?} must not be nil")));
  }
}

/// What kind of binding a checked value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
  /// A function parameter.
  Parameter,
  /// Any other variable.
  Variable,
}

impl fmt::Display for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Binding::Parameter => f.write_str("parameter"),
      Binding::Variable => f.write_str("variable"),
    }
  }
}

/// Returns the value inside `elem`, the binding named `name`.
///
/// # Panics
///
/// If `elem` is `None`.
#[must_use]
#[track_caller]
pub fn deref<T>(elem: Option<T>, binding: Binding, name: &str) -> T {
  match elem {
    Some(x) => x,
    None => raise(&AssertFailed::new(format!("{binding} ({name}) expected to not be nil"))),
  }
}
