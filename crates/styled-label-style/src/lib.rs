#![forbid(unsafe_code)]

//! Style values for styled labels.
//!
//! - [`Color`] - RGBA color
//! - [`FontStyle`] - font emphasis bitmask
//! - [`LineDecoration`] - underline/strikethrough/wave with an optional color
//! - [`TextStyle`] - the attributes a range overrides
//! - [`StyleRange`] - a [`TextStyle`] pinned to a character interval
//!
//! # Example
//! ```
//! use styled_label_style::{Color, DecorationKind, StyleRange};
//!
//! let range = StyleRange::new(0, 5)
//!     .unwrap()
//!     .foreground(Color::RED)
//!     .bold()
//!     .decorate(DecorationKind::Underline, Some(Color::BLUE));
//!
//! assert_eq!(range.end(), 5);
//! assert!(range.style().font().is_bold());
//! ```

pub mod color;
pub mod range;
pub mod style;

pub use color::Color;
pub use range::{StyleRange, StyleRangeError};
pub use style::{DecorationKind, FontStyle, LineDecoration, TextStyle};
