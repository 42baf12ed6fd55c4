use std::{alloc::Layout, io::Read};

use libc::sbrk;
use rvector::{GrowableArray, heap::print_alloc};

/// Waits until the user presses ENTER when the demo runs with `--step`.
/// Useful when you want to inspect memory state with tools like `pmap` or
/// `gdb` between phases.
fn block_until_enter_pressed(step: bool) {
  if !step {
    return;
  }

  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints the current program break using `sbrk(0)`.
unsafe fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { sbrk(0) },
  );
}

/// Reports the block currently backing `array`.
fn print_block(
  label: &str,
  array: &GrowableArray<i32>,
) {
  println!(
    "[{}] len = {}, capacity = {}",
    label,
    array.len(),
    array.capacity()
  );

  if let Ok(layout) = Layout::array::<i32>(array.capacity()) {
    unsafe { print_alloc(layout, array.as_ptr() as *mut u8) };
  }
}

/// Takes its own copy, bumps every value and prints it.
fn helper(mut copy: GrowableArray<i32>) {
  for value in &mut copy {
    *value += 1;
  }

  for i in 0..copy.len() {
    println!("{}", copy[i]);
  }
  println!();
}

fn main() {
  let step = std::env::args().any(|arg| arg == "--step");

  unsafe { print_program_break("start") };
  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 1) Push 0..9 one at a time and report every capacity change.
  // --------------------------------------------------------------------
  let mut array = GrowableArray::<i32>::new();
  let mut capacity = array.capacity();

  println!("\n[1] Push 0..9");
  for i in 0..10 {
    array.push_back(i);

    if array.capacity() != capacity {
      capacity = array.capacity();
      print_block("1", &array);
    }
  }

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 2) Hand a copy to a helper that mutates it. The original must not
  //    change.
  // --------------------------------------------------------------------
  println!("\n[2] Copy passed to helper (values + 1)");
  helper(array.clone());

  println!("[2] Original after helper");
  for value in &array {
    println!("{}", value);
  }

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 3) Erase index 3. Capacity stays where it was.
  // --------------------------------------------------------------------
  let position = array.erase(3);
  println!("\n[3] Erased index 3, now holding {:?}", array.get(position));
  println!("[3] Contents = {:?}", array);
  print_block("3", &array);

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 4) Move the contents out. The source stays usable and empty.
  // --------------------------------------------------------------------
  let moved = array.take();
  println!("\n[4] Moved {} values out", moved.len());
  print_block("4 source", &array);
  print_block("4 target", &moved);

  block_until_enter_pressed(step);

  // --------------------------------------------------------------------
  // 5) Clear releases the storage entirely.
  // --------------------------------------------------------------------
  let mut moved = moved;
  moved.clear();
  println!("\n[5] Cleared");
  print_block("5", &moved);

  unsafe { print_program_break("end") };
}
