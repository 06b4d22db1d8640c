//! # `intcell` - Single-Value Integer Cell
//!
//! A minimal container that stores exactly one `i32` and exposes three
//! operations: construct, read and write.
//!
//! ## Guarantees
//!
//! - **Required initial value**: there is no `Default` impl. Every cell is
//!   created from a value supplied by the caller.
//! - **Last write wins**: [`IntCell::read`] always returns the most recent
//!   value passed to [`IntCell::write`], or the construction value if no
//!   write has happened.
//! - **Exclusive ownership**: writing takes `&mut self`, so the borrow checker
//!   rules out aliased mutation. Sharing across threads requires external
//!   synchronization chosen by the caller.
//! - **Total operations**: nothing can fail, so nothing returns `Result`.
//!
//! ## Features
//!
//! - `tracing`: emit a `trace`-level event on every write.
//!
//! ## Example
//!
//! ```rust
//! use intcell::IntCell;
//!
//! let mut cell = IntCell::new(-3);
//! assert_eq!(cell.read(), -3);
//!
//! cell.write(42);
//! assert_eq!(cell.read(), 42);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;

pub use cell::IntCell;
