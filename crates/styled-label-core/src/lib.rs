#![forbid(unsafe_code)]

//! Core primitives shared by the styled-label crates.
//!
//! - [`geometry`] - pixel sizes used for size negotiation
//! - [`observe`] - synchronous change listeners invoked outside of locks

pub mod geometry;
pub mod observe;

pub use geometry::Size;
pub use observe::{ChangeListeners, ListenerId};
