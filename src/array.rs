use std::{
  fmt, mem,
  ops::{Deref, DerefMut, Index, IndexMut},
  ptr, slice,
};

use crate::{block::RawBlock, error::ArrayError, error::Result, fatal, growth};

/// A growable, contiguous array with explicit storage management.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are allocated but
/// uninitialized. Allocation and construction are separate steps: the
/// storage lives in a [`RawBlock`] and values are written into it and dropped
/// out of it one by one.
pub struct GrowableArray<T> {
  block: RawBlock<T>,
  len: usize,
}

unsafe impl<T: Send> Send for GrowableArray<T> {}
unsafe impl<T: Sync> Sync for GrowableArray<T> {}

impl<T> GrowableArray<T> {
  /// Creates an empty array. Nothing is allocated.
  pub const fn new() -> Self {
    Self {
      block: RawBlock::empty(),
      len: 0,
    }
  }

  fn with_block(block: RawBlock<T>) -> Self {
    Self { block, len: 0 }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn capacity(&self) -> usize {
    self.block.capacity()
  }

  /// Raw pointer to the storage. Null if and only if `capacity() == 0`.
  pub fn as_ptr(&self) -> *const T {
    self.block.as_ptr()
  }

  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.block.as_mut_ptr()
  }

  pub fn as_slice(&self) -> &[T] {
    if self.len == 0 {
      return &[];
    }

    unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    if self.len == 0 {
      return &mut [];
    }

    unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr(), self.len) }
  }

  /// Moves the contents out, leaving `self` empty and reusable.
  pub fn take(&mut self) -> Self {
    mem::replace(self, Self::new())
  }

  /// Exchanges contents with `rhs`.
  ///
  /// The previous contents of `self` end up owned by `rhs` and are dropped
  /// whenever `rhs` is.
  pub fn move_assign(
    &mut self,
    rhs: &mut Self,
  ) {
    mem::swap(self, rhs);
  }

  /// Appends `value`, growing the storage when it is full.
  ///
  /// On failure the array is left exactly as it was and `value` is dropped.
  pub fn try_push_back(
    &mut self,
    value: T,
  ) -> Result<()> {
    let requested = self
      .len
      .checked_add(1)
      .ok_or_else(|| ArrayError::out_of_memory::<T>(usize::MAX))?;

    if requested > self.capacity() {
      self.grow(requested)?;
    }

    unsafe { self.construct_last(value) };

    Ok(())
  }

  /// Appends `value`, terminating the process if storage cannot be grown.
  pub fn push_back(
    &mut self,
    value: T,
  ) {
    if let Err(err) = self.try_push_back(value) {
      fatal::alloc_failure(&err);
    }
  }

  /// Removes the value at `position` and shifts everything after it one slot
  /// to the front. Capacity is unchanged.
  ///
  /// Returns `position`, which now names the value that followed the erased
  /// one, or `len()` if the erased value was the last.
  ///
  /// # Panics
  ///
  /// Panics if `position >= len()`.
  pub fn erase(
    &mut self,
    position: usize,
  ) -> usize {
    let len = self.len;

    if position >= len {
      panic!("erase position (is {position}) should be < len (is {len})");
    }

    unsafe {
      let hole = self.block.slot(position);
      let erased = ptr::read(hole);

      ptr::copy(hole.add(1), hole, len - position - 1);
      self.len = len - 1;

      drop(erased);
    }

    position
  }

  /// Drops every value in reverse order and releases the storage.
  pub fn clear(&mut self) {
    self.destroy_all();
    self.block = RawBlock::empty();
  }

  /// Allocates a larger block and relocates the live values into it.
  ///
  /// The new block is obtained before the old one is touched, so a failed
  /// allocation leaves the array intact.
  fn grow(
    &mut self,
    requested: usize,
  ) -> Result<()> {
    let capacity = growth::next_capacity(self.capacity(), requested)
      .ok_or_else(|| ArrayError::out_of_memory::<T>(usize::MAX))?;

    let mut block = RawBlock::allocate(capacity)?;

    if self.len > 0 {
      unsafe { ptr::copy_nonoverlapping(self.block.as_ptr(), block.as_mut_ptr(), self.len) };
    }

    // The old block is released here; its values now live in the new one.
    mem::swap(&mut self.block, &mut block);

    Ok(())
  }

  /// Writes `value` into slot `len` and counts it as live.
  ///
  /// # Safety
  ///
  /// `len` must be below capacity.
  unsafe fn construct_last(
    &mut self,
    value: T,
  ) {
    debug_assert!(self.len < self.capacity());

    unsafe { self.block.slot(self.len).write(value) };
    self.len += 1;
  }

  fn destroy_all(&mut self) {
    // The length drops before each value so a panicking destructor never
    // leaves a destroyed value counted as live.
    while self.len > 0 {
      self.len -= 1;
      unsafe { ptr::drop_in_place(self.block.slot(self.len)) };
    }
  }
}

impl<T: Clone> GrowableArray<T> {
  /// Creates an array holding `n` clones of `value`, with capacity `n`.
  pub fn try_filled(
    n: usize,
    value: &T,
  ) -> Result<Self> {
    let mut array = Self::with_block(RawBlock::allocate(n)?);

    // If a clone panics, dropping `array` destroys what was built so far and
    // releases the block.
    for _ in 0..n {
      unsafe { array.construct_last(value.clone()) };
    }

    Ok(array)
  }

  pub fn filled(
    n: usize,
    value: &T,
  ) -> Self {
    Self::try_filled(n, value).unwrap_or_else(|err| fatal::alloc_failure(&err))
  }

  /// Creates a copy with capacity equal to `self.len()`.
  pub fn try_clone(&self) -> Result<Self> {
    let mut copy = Self::with_block(RawBlock::allocate(self.len)?);

    for value in self.as_slice() {
      unsafe { copy.construct_last(value.clone()) };
    }

    Ok(copy)
  }

  /// Replaces the contents of `self` with a copy of `source`.
  ///
  /// The copy is built before the old contents are dropped, so on failure
  /// `self` is unchanged.
  pub fn assign(
    &mut self,
    source: &Self,
  ) -> Result<()> {
    let mut copy = source.try_clone()?;
    self.move_assign(&mut copy);

    Ok(())
  }
}

impl<T: Clone + Default> GrowableArray<T> {
  /// Creates an array holding `n` default values.
  pub fn with_len(n: usize) -> Self {
    Self::filled(n, &T::default())
  }
}

impl<T> Drop for GrowableArray<T> {
  fn drop(&mut self) {
    self.destroy_all();
  }
}

impl<T> Default for GrowableArray<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for GrowableArray<T> {
  fn clone(&self) -> Self {
    self.try_clone().unwrap_or_else(|err| fatal::alloc_failure(&err))
  }

  fn clone_from(
    &mut self,
    source: &Self,
  ) {
    if let Err(err) = self.assign(source) {
      fatal::alloc_failure(&err);
    }
  }
}

impl<T> Deref for GrowableArray<T> {
  type Target = [T];

  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for GrowableArray<T> {
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> Index<usize> for GrowableArray<T> {
  type Output = T;

  fn index(
    &self,
    index: usize,
  ) -> &T {
    &self.as_slice()[index]
  }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
  fn index_mut(
    &mut self,
    index: usize,
  ) -> &mut T {
    &mut self.as_mut_slice()[index]
  }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.as_slice()).finish()
  }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
  fn eq(
    &self,
    other: &[T],
  ) -> bool {
    self.as_slice() == other
  }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
  fn eq(
    &self,
    other: &[T; N],
  ) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T> FromIterator<T> for GrowableArray<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut array = GrowableArray::new();
    array.extend(iter);
    array
  }
}

impl<T> Extend<T> for GrowableArray<T> {
  fn extend<I: IntoIterator<Item = T>>(
    &mut self,
    iter: I,
  ) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.as_mut_slice().iter_mut()
  }
}
