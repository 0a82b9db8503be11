#![forbid(unsafe_code)]

//! Core of the page font size control.
//!
//! - [`tier`]: the text size scale and the ordered list of enabled tiers.
//! - [`class_set`]: pure transforms over an element's class list.
//! - [`controller`]: the bounded index that steps through the list and
//!   rewrites the target element's classes.
//!
//! Nothing here touches a DOM. Hosts implement [`ClassTarget`] for their
//! element type and call [`FontSizeController::increase`] /
//! [`FontSizeController::decrease`] from whatever event dispatch they have.

pub mod class_set;
pub mod controller;
pub mod logging;
pub mod tier;

pub use class_set::ClassSet;
pub use controller::{ClassTarget, FontSizeController, MemoryTarget, Step};
pub use tier::{Tier, TierList, TierListError};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace};
