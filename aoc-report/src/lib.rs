//! Adaptive table and bar chart rendering for benchmark reports
//!
//! Three independent pieces, each a pure function of its inputs:
//!
//! - [`width`]: computes per-column display widths that satisfy both
//!   individual cell content and merged group headers, distributing any
//!   extra width a group needs fairly across its member columns.
//! - [`chart`]: quantizes a sample, relative to the maximum observed
//!   across a run, into a fixed-width sequence of whole and partial block
//!   glyphs.
//! - [`table`]: prints bordered, optionally colorized rows from compact
//!   border templates, skipping hidden columns.
//!
//! Nothing here knows about solvers or options; callers assemble reports
//! from these parts.

pub mod chart;
pub mod table;
pub mod width;
