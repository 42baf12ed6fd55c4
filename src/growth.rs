/// Smallest capacity a growing array ever allocates.
pub const MIN_CAPACITY: usize = 8;

/// Calculates the capacity to grow to when `requested` slots are needed.
///
/// The result is at least `2 * capacity + 1`, never below [`MIN_CAPACITY`] and
/// always large enough for `requested`. Returns `None` on overflow.
///
/// # Examples
///
/// ```rust
/// use rvector::growth::next_capacity;
///
/// assert_eq!(next_capacity(0, 1), Some(8));
/// assert_eq!(next_capacity(8, 9), Some(17));
/// assert_eq!(next_capacity(17, 100), Some(100));
/// ```
pub fn next_capacity(
  capacity: usize,
  requested: usize,
) -> Option<usize> {
  let doubled = capacity.checked_mul(2)?.checked_add(1)?;

  Some(doubled.max(requested.max(MIN_CAPACITY)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_minimum_capacity() {
    for requested in 0..=MIN_CAPACITY {
      assert_eq!(Some(MIN_CAPACITY), next_capacity(0, requested));
      assert_eq!(Some(MIN_CAPACITY), next_capacity(1, requested));
    }
  }

  #[test]
  fn test_doubling_sequence() {
    let mut capacity = 0;
    let mut capacities = Vec::new();

    for _ in 0..5 {
      capacity = next_capacity(capacity, capacity + 1).unwrap();
      capacities.push(capacity);
    }

    assert_eq!(capacities, vec![8, 17, 35, 71, 143]);
  }

  #[test]
  fn test_large_request_wins() {
    for capacity in 0..32 {
      let requested = 4 * capacity + 100;

      assert_eq!(Some(requested), next_capacity(capacity, requested));
    }
  }

  #[test]
  fn test_overflow() {
    assert_eq!(None, next_capacity(usize::MAX / 2 + 1, usize::MAX));
    assert_eq!(None, next_capacity(usize::MAX, 1));
    assert_eq!(Some(usize::MAX), next_capacity(usize::MAX / 2, 1));
    assert_eq!(Some(usize::MAX), next_capacity(usize::MAX / 2 - 1, usize::MAX));
  }
}
