//! # Adaptive List
//!
//! A sequence type that changes its storage layout as its length changes, so that tiny
//! lists carry no container overhead while large ones still grow without reallocating.
//!
//! ## Layouts
//!
//! | Length      | Layout   | Storage                    |
//! |-------------|----------|----------------------------|
//! | `0`         | Empty    | nothing                    |
//! | `1`         | Scalar   | the element itself         |
//! | `2..=N`     | Buffer   | `heapless::Vec<T, N>`      |
//! | `N + 1..`   | Chain    | `std::collections::LinkedList<T>` |
//!
//! `N` defaults to `5`. Appending past a boundary moves every element into the next
//! layout; removing back below it moves them back. Indexed access behaves the same in
//! every layout.
//!
//! ## Capacity Constraints (`N`)
//!
//! * `N` must be **at least 2**, checked at compile time in `AdaptiveList::new`.
//!
//! ## Failure Reporting
//!
//! Nothing panics on caller input. Out-of-range reads and `pop` on an empty list return
//! `None`; out-of-range `set` returns `false`. `replace` reports a [`ListError`].
//!
//! ## Examples
//!
//! ```rust
//! use adaptive_list::{AdaptiveList, Representation};
//!
//! let mut list: AdaptiveList<&str> = AdaptiveList::new();
//! for s in ["a", "b", "c", "d", "e"] {
//!     list.push(s);
//! }
//! assert_eq!(list.representation(), Representation::Buffer);
//! assert_eq!(list.render(), "[a, b, c, d, e]");
//!
//! // 6th element: buffer -> chain
//! list.push("f");
//! assert_eq!(list.representation(), Representation::Chain);
//! assert_eq!(list.render(), "[a, b, c, d, e, f]");
//!
//! // Back to 5: chain -> buffer
//! assert_eq!(list.pop(), Some("f"));
//! assert_eq!(list.representation(), Representation::Buffer);
//!
//! assert!(list.set(0, "z"));
//! assert!(list.set(4, "y"));
//! assert!(!list.set(5, "x"));
//! assert_eq!(list.render(), "[z, b, c, d, y]");
//! assert_eq!(list.get(5), None);
//! ```
//!
//! ### Custom buffer capacity
//!
//! ```rust
//! use adaptive_list::{AdaptiveList, Representation};
//!
//! let mut list: AdaptiveList<u32, 3> = (0..3).collect();
//! assert_eq!(list.representation(), Representation::Buffer);
//!
//! list.push(3);
//! assert_eq!(list.representation(), Representation::Chain);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod list;

// --- Re-exports ---

pub use error::ListError;
pub use list::{AdaptiveList, AnyList, Representation};
