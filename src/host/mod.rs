//! Host seams - the contract between the fitting core and a rendering host.
//!
//! The core never talks to a real rendering engine. It drives three small
//! capabilities, each its own trait so hosts only implement what a role
//! needs:
//!
//! - [`Measure`] - the synchronous measurement oracle. A measurer element
//!   must reflect the latest style/text write in its very next `measure()`
//!   call; no batched or asynchronous layout is modeled.
//! - [`StyleTarget`] - numeric pixel style writes plus the two visual-only
//!   side effects (line clamp, overflow marker).
//! - [`TextTree`] - positional access to direct child nodes and their text,
//!   implementable over any UI-tree representation.
//!
//! A measurer implements all three; the visible content wrapper only needs
//! [`StyleTarget`] and [`TextTree`]. The bundled [`HeadlessElement`] covers
//! both roles and doubles as the test oracle.

mod flex;
mod headless;

pub use flex::FlexContainer;
pub use headless::{HeadlessElement, HeadlessElementBuilder};

use crate::types::{NodeKind, Size, StyleProperty};

// =============================================================================
// Measurement oracle
// =============================================================================

/// Synchronous measurement of a rendered box.
pub trait Measure {
    /// Rendered size after the latest applied styles and text writes.
    fn measure(&self) -> Size;
}

// =============================================================================
// Style application
// =============================================================================

/// Style writes the overflow machinery performs on an element.
pub trait StyleTarget {
    /// Set a numeric pixel style property.
    fn apply_style(&mut self, property: StyleProperty, px: f32);

    /// Remove a previously applied style property.
    fn clear_style(&mut self, property: StyleProperty);

    /// Constrain the element to `lines` visible lines, or lift the
    /// constraint with `None`.
    fn set_line_clamp(&mut self, lines: Option<u16>);

    /// Toggle the "overflown" marker. Purely visual metadata; the host
    /// typically maps it to a class or flag that styles the clipped state.
    fn toggle_overflow_marker(&mut self, overflown: bool);
}

// =============================================================================
// Tree access
// =============================================================================

/// Positional access to an element's direct child nodes.
///
/// Indices are stable for the duration of a layout pass. Truncation relies on
/// that: it finds a node index on the measurer and writes the matching index
/// on the live content.
pub trait TextTree {
    /// Number of direct child nodes.
    fn child_count(&self) -> usize;

    /// Kind of the child at `index`.
    fn node_kind(&self, index: usize) -> NodeKind;

    /// Text content of the child at `index`.
    fn text_content(&self, index: usize) -> String;

    /// Replace the text content of the child at `index`.
    fn set_text_content(&mut self, index: usize, text: &str);

    /// Concatenated text of the whole subtree.
    fn full_text(&self) -> String;

    /// Replace the whole subtree with a single text node.
    fn set_full_text(&mut self, text: &str);
}

// =============================================================================
// Structural mirror check
// =============================================================================

/// Check that two trees have structurally identical children (same kinds in
/// the same order).
///
/// Measurer and content must mirror each other before a pass begins so that
/// positional indices line up. Text content may differ; only the shape
/// matters.
pub fn mirrors<A: TextTree, B: TextTree>(a: &A, b: &B) -> bool {
    if a.child_count() != b.child_count() {
        return false;
    }
    (0..a.child_count()).all(|i| a.node_kind(i) == b.node_kind(i))
}
