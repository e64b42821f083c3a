#![forbid(unsafe_code)]

//! Size negotiation for styled labels.
//!
//! A label can be sized by a column count, a row count, the width its
//! container offers, or its natural text extent. [`LayoutConstraints`]
//! carries those settings; [`LayoutConstraintResolver`] turns them into a
//! wrap width, a line budget, the laid-out lines and a pixel size.
//!
//! Precedence, strongest first:
//! 1. a finite maximum size (always the final ceiling)
//! 2. `columns`
//! 3. `rows`
//! 4. the available width, when line wrap is on
//! 5. the natural size of the text
//!
//! Contradictory settings never fail. They resolve deterministically and are
//! reported as [`ConstraintWarning`]s.
//!
//! # Example
//! ```
//! use styled_label_layout::{LayoutConstraintResolver, LayoutConstraints, SizingBasis};
//! use styled_label_text::CellMetrics;
//!
//! let constraints = LayoutConstraints {
//!     columns: 100,
//!     max_columns: 20,
//!     line_wrap: true,
//!     ..LayoutConstraints::default()
//! };
//! let metrics = CellMetrics::new(7, 14);
//! let resolution = LayoutConstraintResolver::new(&constraints, &metrics)
//!     .resolve("a fairly long line of label text");
//!
//! assert_eq!(resolution.basis, SizingBasis::Columns);
//! assert_eq!(resolution.size.width, 20 * 7);
//! assert_eq!(resolution.wrap_width, Some(20 * 7));
//! ```

pub mod constraints;
pub mod resolver;

pub use constraints::LayoutConstraints;
pub use resolver::{ConstraintWarning, LayoutConstraintResolver, LayoutResolution, SizingBasis};
pub use styled_label_core::Size;
