use std::{fmt, process};

use crate::error::ArrayError;

/// Prints `message` as a fatal error on stderr and terminates the process.
pub fn fatal(message: impl fmt::Display) -> ! {
  eprintln!("FATAL: {message}");
  process::exit(1);
}

/// Terminates the process after an allocation failure.
///
/// Used by the infallible operations; the `try_` operations hand the error
/// back to the caller instead.
#[cold]
pub fn alloc_failure(err: &ArrayError) -> ! {
  fatal(err)
}
