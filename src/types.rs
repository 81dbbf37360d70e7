//! Core types for fit-text.
//!
//! These types define the vocabulary the whole crate shares: measured sizes,
//! container bounds, the admissible font-size range and the overflow strategy.
//! They flow from configuration into the layout pass and out to the host.

// =============================================================================
// Constants
// =============================================================================

/// Line-height multiplier applied on top of the font size.
///
/// The clamp path derives the visible line box from this: one line is
/// `font_size * LINE_HEIGHT_EM` pixels tall. Hosts that measure text must use
/// the same multiplier or the line math drifts.
pub const LINE_HEIGHT_EM: f32 = 1.15;

/// Default lower bound of the font-size search, in pixels.
pub const DEFAULT_MIN_FONT_SIZE: u32 = 6;

/// Default upper bound of the font-size search, in pixels.
pub const DEFAULT_MAX_FONT_SIZE: u32 = 72;

/// Marker appended by character truncation.
pub const ELLIPSIS: char = '…';

/// Marker appended by word truncation.
///
/// Word truncation uses the three-dot literal rather than the single
/// ellipsis codepoint. The two procedures are not interchangeable.
pub const WORD_ELLIPSIS: &str = "...";

// =============================================================================
// Size / Bounds
// =============================================================================

/// A measured box, in pixels.
///
/// Returned by the measurement oracle after the latest style write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero-sized box.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check whether this box fits inside the given bounds.
    #[inline]
    pub fn fits(&self, bounds: Bounds) -> bool {
        self.height <= bounds.max_height && self.width <= bounds.max_width
    }
}

/// The pixel box the content must fit inside.
///
/// Supplied externally (the container's rendered size) and immutable for the
/// duration of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub max_height: f32,
    pub max_width: f32,
}

impl Bounds {
    /// Create bounds from a height/width pair.
    pub const fn new(max_height: f32, max_width: f32) -> Self {
        Self {
            max_height,
            max_width,
        }
    }
}

// =============================================================================
// Font-size range
// =============================================================================

/// Inclusive bounds on the admissible font size, in pixel units.
///
/// `min < max` is a precondition of the search; [`calculate_font_size`]
/// rejects ranges that violate it.
///
/// [`calculate_font_size`]: crate::fit::calculate_font_size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizeRange {
    pub min: u32,
    pub max: u32,
}

impl FontSizeRange {
    /// Create a new range.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for FontSizeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_FONT_SIZE,
            max: DEFAULT_MAX_FONT_SIZE,
        }
    }
}

// =============================================================================
// Overflow method
// =============================================================================

/// Strategy for resolving content that does not fit its container.
///
/// Fixed per component instance.
///
/// # Examples
///
/// ```
/// use fit_text::types::OverflowMethod;
///
/// assert_eq!(OverflowMethod::parse("truncate"), Some(OverflowMethod::Truncate));
/// assert_eq!(OverflowMethod::parse("truncate-words"), Some(OverflowMethod::TruncateWords));
/// assert_eq!(OverflowMethod::parse("bogus"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMethod {
    /// Shrink the font to fit, then line-clamp whatever still overflows.
    #[default]
    Fit,
    /// Fixed font size; drop trailing characters of the last text node.
    Truncate,
    /// Fixed font size; drop trailing words.
    TruncateWords,
}

impl OverflowMethod {
    /// Parse an overflow method keyword.
    ///
    /// Returns `None` for unknown keywords.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "fit" => Some(Self::Fit),
            "truncate" => Some(Self::Truncate),
            "truncate-words" => Some(Self::TruncateWords),
            _ => None,
        }
    }
}

// =============================================================================
// Style properties
// =============================================================================

/// Numeric pixel style properties the core writes through [`StyleTarget`].
///
/// [`StyleTarget`]: crate::host::StyleTarget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    FontSize,
    LineHeight,
    MaxHeight,
}

// =============================================================================
// Node kinds
// =============================================================================

/// Kind of a direct child node in a [`TextTree`].
///
/// Truncation only ever rewrites `Text` nodes; a tree whose children are all
/// `Element` nodes is an unsupported truncation shape.
///
/// [`TextTree`]: crate::host::TextTree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Element,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_fits() {
        let bounds = Bounds::new(100.0, 200.0);
        assert!(Size::new(200.0, 100.0).fits(bounds));
        assert!(!Size::new(200.0, 100.1).fits(bounds));
        assert!(!Size::new(200.5, 50.0).fits(bounds));
        assert!(Size::ZERO.fits(bounds));
    }

    #[test]
    fn test_font_size_range_default() {
        let range = FontSizeRange::default();
        assert_eq!(range.min, 6);
        assert_eq!(range.max, 72);
    }

    #[test]
    fn test_overflow_method_parse() {
        assert_eq!(OverflowMethod::parse("fit"), Some(OverflowMethod::Fit));
        assert_eq!(
            OverflowMethod::parse("truncate"),
            Some(OverflowMethod::Truncate)
        );
        assert_eq!(
            OverflowMethod::parse("truncate-words"),
            Some(OverflowMethod::TruncateWords)
        );
        assert_eq!(OverflowMethod::parse("  fit  "), Some(OverflowMethod::Fit));
        assert_eq!(OverflowMethod::parse(""), None);
        assert_eq!(OverflowMethod::parse("clip"), None);
    }

    #[test]
    fn test_overflow_method_default() {
        assert_eq!(OverflowMethod::default(), OverflowMethod::Fit);
    }
}
