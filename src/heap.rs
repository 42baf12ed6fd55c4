use std::{alloc, mem, ptr};
use libc::{c_void, sbrk};

/// Prints a one-line report of an allocation together with the current
/// program break.
pub unsafe fn print_alloc(
  layout: alloc::Layout,
  addr: *mut u8,
) {
  println!(
    "Allocated {} bytes (align {}), address = {:?}, program break = {:?}",
    layout.size(),
    layout.align(),
    addr,
    unsafe { sbrk(0) }
  );
}

/// Allocates a block that fits `layout`.
///
/// Returns a null pointer when the system cannot satisfy the request.
/// Zero-sized layouts never reach the system allocator: they get a
/// non-null, suitably aligned dangling pointer instead.
pub unsafe fn allocate(layout: alloc::Layout) -> *mut u8 {
  if layout.size() == 0 {
    return ptr::without_provenance_mut(layout.align());
  }

  // posix_memalign wants a power of two that is also a multiple of the
  // pointer size.
  let align = layout.align().max(mem::size_of::<usize>());
  let mut address: *mut c_void = ptr::null_mut();

  let status = unsafe { libc::posix_memalign(&mut address, align, layout.size()) };

  if status != 0 {
    return ptr::null_mut();
  }

  address as *mut u8
}

/// Returns a block obtained from [`allocate`] with the same `layout`.
pub unsafe fn deallocate(
  address: *mut u8,
  layout: alloc::Layout,
) {
  if address.is_null() || layout.size() == 0 {
    return;
  }

  unsafe { libc::free(address as *mut c_void) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alloc() {
    unsafe {
      let first_layout = alloc::Layout::new::<u64>();
      let first_addr = allocate(first_layout) as *mut u64;

      assert!(!first_addr.is_null());

      *first_addr = 3u64;

      assert_eq!(*first_addr, 3);

      let size: usize = 6;
      let second_layout = alloc::Layout::array::<u16>(size).unwrap();
      let second_addr = allocate(second_layout) as *mut u16;

      for i in 0..size {
        *(second_addr.add(i)) = (i + 1) as u16;
      }

      assert_eq!(*first_addr, 3);

      for i in 0..size {
        assert_eq!((i + 1) as u16, *(second_addr.add(i)))
      }

      deallocate(first_addr as *mut u8, first_layout);
      deallocate(second_addr as *mut u8, second_layout);
    }
  }

  #[test]
  fn test_alignment() {
    #[repr(align(64))]
    struct Line([u8; 64]);

    unsafe {
      let layout = alloc::Layout::array::<Line>(3).unwrap();
      let addr = allocate(layout);

      assert!(!addr.is_null());
      assert_eq!(addr as usize % 64, 0);

      deallocate(addr, layout);
    }
  }

  #[test]
  fn test_zero_sized() {
    unsafe {
      let layout = alloc::Layout::array::<u32>(0).unwrap();
      let addr = allocate(layout);

      assert!(!addr.is_null());
      assert_eq!(addr as usize % layout.align(), 0);

      deallocate(addr, layout);
    }
  }

  #[test]
  fn test_exhausted() {
    unsafe {
      let layout = alloc::Layout::array::<u8>(1 << 60).unwrap();

      assert!(allocate(layout).is_null());
    }
  }
}
