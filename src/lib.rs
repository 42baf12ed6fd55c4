//! # rvector - A Growable Array with Explicit Storage Management
//!
//! This crate provides [`GrowableArray`], a contiguous, type-generic sequence
//! container built directly on raw memory. Allocating storage and
//! constructing values inside it are two separate steps, the way a
//! standard-library vector does it under the hood.
//!
//! ## Overview
//!
//! ```text
//!   GrowableArray<T> Layout:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          RawBlock<T>                                 │
//!   │                                                                      │
//!   │   ┌─────┬─────┬─────┬─────┬─────┬─────────────────────────────────┐  │
//!   │   │ v0  │ v1  │ v2  │ v3  │ v4  │      allocated, uninitialized   │  │
//!   │   └─────┴─────┴─────┴─────┴─────┴─────────────────────────────────┘  │
//!   │   ▲                             ▲                                 ▲  │
//!   │   │                             │                                 │  │
//!   │  ptr                           len                           capacity│
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Slots [0, len) hold live values.
//!   Slots [len, capacity) are never read as T.
//!   ptr is null if and only if capacity == 0.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rvector
//!   ├── array    - GrowableArray implementation
//!   ├── block    - RawBlock, owned uninitialized storage (internal)
//!   ├── error    - ArrayError::OutOfMemory
//!   ├── fatal    - Fatal hook used by the infallible operations
//!   ├── growth   - Capacity policy (next_capacity, MIN_CAPACITY)
//!   └── heap     - Allocation/deallocation pair over libc
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rvector::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//!
//! for i in 0..10 {
//!     array.push_back(i);
//! }
//!
//! assert_eq!(array.len(), 10);
//! assert_eq!(array[3], 3);
//!
//! array.erase(3);
//! assert_eq!(array, [0, 1, 2, 4, 5, 6, 7, 8, 9]);
//!
//! array.clear();
//! assert_eq!(array.capacity(), 0);
//! ```
//!
//! ## How It Grows
//!
//! When a push finds the block full, a new block is allocated with capacity
//! `max(2 * capacity + 1, max(requested, 8))`:
//!
//! ```text
//!   push #1    capacity 0  ──►  8
//!   push #9    capacity 8  ──► 17
//!   push #18   capacity 17 ──► 35
//!   push #36   capacity 35 ──► 71
//!
//!   Growth Step:
//!
//!   old ┌────┬────┬────┐           1. allocate new block
//!       │ v0 │ v1 │ v2 │           2. move v0..v2 into it
//!       └────┴────┴────┘           3. release old block
//!          │    │    │             4. adopt new block
//!          ▼    ▼    ▼
//!   new ┌────┬────┬────┬────┬────┬────┬────┐
//!       │ v0 │ v1 │ v2 │    │    │    │    │
//!       └────┴────┴────┴────┴────┴────┴────┘
//! ```
//!
//! The new block is obtained before anything else happens, so a failed
//! allocation leaves the array untouched.
//!
//! ## Failure Handling
//!
//! Operations that allocate come in two flavours:
//!
//! - **`try_` variants** (`try_push_back`, `try_filled`, `try_clone`, `assign`)
//!   return [`ArrayError::OutOfMemory`] to the caller.
//! - **Infallible variants** (`push_back`, `filled`, `clone`) hand the error to
//!   [`fatal::alloc_failure`], which prints a `FATAL:` line and exits.
//!
//! Out-of-range indexing and erasing are caller bugs and panic.
//!
//! ## Limitations
//!
//! - **Single-threaded mutation**: no internal synchronization
//! - **No shrinking**: capacity only drops, to zero, on `clear`
//! - **Unix-only**: Requires `libc` (`posix_memalign`, `free`, `sbrk`)

mod array;
mod block;
pub mod error;
pub mod fatal;
pub mod growth;
pub mod heap;

pub use array::GrowableArray;
pub use error::ArrayError;
