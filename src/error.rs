use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
  /// A block of `slots` elements could not be allocated, either because the
  /// allocator refused it or because its byte size does not fit a `Layout`.
  #[error("memory allocation failed: {slots} slots of {elem_size} bytes")]
  OutOfMemory { slots: usize, elem_size: usize },
}

impl ArrayError {
  pub(crate) fn out_of_memory<T>(slots: usize) -> Self {
    Self::OutOfMemory {
      slots,
      elem_size: std::mem::size_of::<T>(),
    }
  }
}

pub type Result<T> = std::result::Result<T, ArrayError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_out_of_memory_message() {
    let err = ArrayError::out_of_memory::<u64>(12);

    assert_eq!(
      err,
      ArrayError::OutOfMemory {
        slots: 12,
        elem_size: 8
      }
    );
    assert_eq!(err.to_string(), "memory allocation failed: 12 slots of 8 bytes");
  }
}
