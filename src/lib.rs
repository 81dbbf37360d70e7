//! # fit-text
//!
//! Text-fitting engine: sizes and truncates a block of text so it visually
//! fills a fixed-size container without overflowing it.
//!
//! ## Architecture
//!
//! Two independent components composed sequentially by a layout pass:
//!
//! ```text
//! Bounds + text → font-size search → overflow resolution → final text/style
//! ```
//!
//! 1. The **font-size search** binary-searches integer font sizes within a
//!    range, probing a hidden measurer element, and returns the largest size
//!    whose rendered box fits the bounds.
//! 2. The **overflow resolver** then either clamps visible lines (`fit`) or
//!    truncates trailing characters/words with an ellipsis (`truncate`,
//!    `truncate-words`).
//!
//! The core never touches a rendering engine directly: it drives the
//! [`host::Measure`], [`host::StyleTarget`] and [`host::TextTree`] trait
//! seams. The crate ships a headless font-metrics host usable for tests and
//! engine-less embedders, and a Taffy-backed helper for deriving bounds from
//! a flex container.
//!
//! ## Modules
//!
//! - [`types`] - sizes, bounds, overflow methods, shared constants
//! - [`config`] - per-component options and attribute parsing
//! - [`host`] - trait seams plus the headless and flex hosts
//! - [`fit`] - the search, the overflow procedures, and the layout pass

pub mod config;
pub mod error;
pub mod fit;
pub mod host;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::FitTextOptions;

pub use error::FitError;

pub use fit::{
    PassOutcome, calculate_font_size, run_layout_pass, truncate, truncate_words, update_overflow,
};

pub use host::{FlexContainer, HeadlessElement, Measure, StyleTarget, TextTree, mirrors};
