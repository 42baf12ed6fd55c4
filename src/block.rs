use std::{alloc::Layout, ptr};

use crate::error::{ArrayError, Result};
use crate::heap;

/// Uninitialized storage for `capacity` values of `T`.
///
/// A block owns its memory but never the values inside it: dropping a block
/// releases the storage without running any destructor. The pointer is null
/// if and only if `capacity` is zero.
pub struct RawBlock<T> {
  ptr: *mut T,
  capacity: usize,
}

impl<T> RawBlock<T> {
  pub const fn empty() -> Self {
    Self {
      ptr: ptr::null_mut(),
      capacity: 0,
    }
  }

  /// Allocates room for exactly `capacity` values.
  pub fn allocate(capacity: usize) -> Result<Self> {
    if capacity == 0 {
      return Ok(Self::empty());
    }

    let layout = Layout::array::<T>(capacity).map_err(|_| ArrayError::out_of_memory::<T>(capacity))?;
    let ptr = unsafe { heap::allocate(layout) } as *mut T;

    if ptr.is_null() {
      return Err(ArrayError::out_of_memory::<T>(capacity));
    }

    Ok(Self { ptr, capacity })
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn as_ptr(&self) -> *const T {
    self.ptr
  }

  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.ptr
  }

  /// Pointer to slot `index`.
  ///
  /// # Safety
  ///
  /// `index` must not exceed `capacity`.
  pub unsafe fn slot(
    &self,
    index: usize,
  ) -> *mut T {
    debug_assert!(index <= self.capacity);
    unsafe { self.ptr.add(index) }
  }
}

impl<T> Drop for RawBlock<T> {
  fn drop(&mut self) {
    if self.capacity == 0 {
      return;
    }

    // The layout was valid when the block was allocated.
    if let Ok(layout) = Layout::array::<T>(self.capacity) {
      unsafe { heap::deallocate(self.ptr as *mut u8, layout) }
    }
  }
}
