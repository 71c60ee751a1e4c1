// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Jumplist - a sorted string list with a fast lane of jump pointers.
//!
//! # Quick Start
//!
//! ```
//! use jumplist::JumpList;
//!
//! let mut list = JumpList::new();
//! for value in ["c", "a", "b"] {
//!     list.insert(value);
//! }
//!
//! assert!(list.find("b"));
//! assert_eq!(list.get(0), Some("a"));
//! assert!(!list.insert("a"));
//! assert!(list.erase("a"));
//! assert_eq!(list.render(), "b c\nb\n2");
//! ```

mod bulk;
pub mod error;
mod jump_list;
mod render;

pub use bulk::fixture;
pub use error::JumpListError;
pub use jump_list::{JumpList, MAX_GAP_SIZE};
