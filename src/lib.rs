//! # Ownership Tour
//!
//! A chapter-sized tour of Rust value semantics, built around one core type:
//! an exclusive owner of a heap slot that can be transferred but never
//! duplicated.
//!
//! ## Patterns Covered
//!
//! 1. **Literals and Initialization** - collection literals, const assertions,
//!    raw strings
//! 2. **Closures** - closures as comparators, returned closures, stored
//!    closures
//! 3. **Dispatch Tables** - hash maps from names to boxed closures with
//!    shared captured state
//! 4. **Iterator Predicates** - `all`/`any` over characters, slice parameters
//! 5. **Exclusive Ownership** - create, transfer, and the moves the compiler
//!    rejects
//! 6. **Collections of Move-Only Values** - building vectors without copies
//! 7. **Nullable Owner Handles** - slots with an observable empty state and
//!    a reportable `EmptyAccess` error
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_value_init
//! cargo run --bin p2_closures
//! cargo run --bin p3_dispatch_table
//! cargo run --bin p4_predicates
//! cargo run --bin p5_exclusive_owner
//! cargo run --bin p6_owner_collections
//! cargo run --bin p7_owner_slots
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the library error type
//! - `colored` - Colored verdict lines in the ownership demos
//! - `proptest` / `quickcheck` - Property tests for the ownership invariants

pub mod owner;
pub mod slot;

pub use owner::ExclusiveOwner;
pub use slot::{EmptyAccess, OwnerSlot};
