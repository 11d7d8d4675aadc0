//! Checks on the runtime type of dynamically typed values.

use crate::{raise, AssertFailed};
use std::any::{type_name, Any};

/// A value whose type is only known at runtime.
///
/// Implemented for every `'static` type. Use `&dyn Dynamic` or `Box<dyn Dynamic>` as the
/// dynamically typed value, and [`type_of`], [`convert`] or [`convert_ref`] to get back to a
/// static type.
///
/// `Box<dyn Dynamic>` is itself `Dynamic`, so `&b` for a boxed `b` is a `&dyn Dynamic` too. The
/// checks here look through such boxes and test the contents.
pub trait Dynamic: Any {
  /// Returns the name of the concrete type.
  fn type_name(&self) -> &'static str;

  /// Returns this as [`Any`].
  fn as_any(&self) -> &dyn Any;

  /// Returns this as a boxed [`Any`].
  fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> Dynamic for T {
  fn type_name(&self) -> &'static str {
    type_name::<T>()
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn into_any(self: Box<Self>) -> Box<dyn Any> {
    self
  }
}

/// Returns what `elem` holds, looking through any number of `Box<dyn Dynamic>`.
fn contents(mut elem: &dyn Dynamic) -> &dyn Dynamic {
  while let Some(b) = elem.as_any().downcast_ref::<Box<dyn Dynamic>>() {
    elem = &**b;
  }
  elem
}

#[cold]
#[track_caller]
fn mismatch<T>(target: &str, got: &str) -> ! {
  let msg = format!("expected {target:?} to be of type {}, got {got} instead", type_name::<T>());
  raise(&AssertFailed::new(msg))
}

/// Asserts `elem`, the value for `target`, is a `T`. If `allow_nil`, `elem` may also be `None`.
///
/// A boxed value passed as `Some(&b)` is checked by its contents.
///
/// # Panics
///
/// If `elem` is `None` and not `allow_nil`, or if it holds something other than a `T`.
#[track_caller]
pub fn type_of<T: Any>(elem: Option<&dyn Dynamic>, target: &str, allow_nil: bool) {
  match elem.map(contents) {
    None if allow_nil => {}
    None => mismatch::<T>(target, "nil"),
    Some(x) if x.as_any().is::<T>() => {}
    Some(x) => mismatch::<T>(target, x.type_name()),
  }
}

/// Converts `elem`, the value for `target`, to a `T`.
///
/// # Panics
///
/// If `elem` is `None`, or if it holds something other than a `T`.
#[must_use]
#[track_caller]
pub fn convert<T: Any>(elem: Option<Box<dyn Dynamic>>, target: &str) -> T {
  let Some(mut elem) = elem else { mismatch::<T>(target, "nil") };
  loop {
    // the name of the contents, not of the `Box`.
    let got = (*elem).type_name();
    elem = match elem.into_any().downcast::<T>() {
      Ok(x) => return *x,
      Err(any) => match any.downcast::<Box<dyn Dynamic>>() {
        Ok(inner) => *inner,
        Err(_) => mismatch::<T>(target, got),
      },
    };
  }
}

/// Like [`convert`], but borrows.
///
/// A boxed value passed as `Some(&b)` is converted by its contents.
///
/// # Panics
///
/// If `elem` is `None`, or if it holds something other than a `T`.
#[must_use]
#[track_caller]
pub fn convert_ref<'a, T: Any>(elem: Option<&'a dyn Dynamic>, target: &str) -> &'a T {
  let Some(elem) = elem.map(contents) else { mismatch::<T>(target, "nil") };
  match elem.as_any().downcast_ref::<T>() {
    Some(x) => x,
    None => mismatch::<T>(target, elem.type_name()),
  }
}
