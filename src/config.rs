//! Configuration for a fit-text component.
//!
//! Options are fixed per component instance. They can be built directly or
//! parsed from string attribute pairs the way a markup host hands them over
//! (`overflow="truncate"`, `min-font-size="10"`, ...).

use crate::types::{
    DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE, FontSizeRange, OverflowMethod,
};

/// Options consumed by [`run_layout_pass`].
///
/// `font_size` is only meaningful outside [`OverflowMethod::Fit`]: with a
/// fixed size the truncation methods fall back to the clamp path instead of
/// rewriting text.
///
/// [`run_layout_pass`]: crate::fit::run_layout_pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitTextOptions {
    /// Overflow resolution strategy.
    pub overflow: OverflowMethod,
    /// Lower bound of the font-size search, pixels.
    pub min_font_size: u32,
    /// Upper bound of the font-size search, pixels.
    pub max_font_size: u32,
    /// Fixed font size for the truncation methods, pixels.
    pub font_size: Option<u32>,
}

impl Default for FitTextOptions {
    fn default() -> Self {
        Self {
            overflow: OverflowMethod::Fit,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            font_size: None,
        }
    }
}

impl FitTextOptions {
    /// Build options from string attribute pairs.
    ///
    /// Recognized keys: `overflow`, `min-font-size`, `max-font-size`,
    /// `font-size`. Unknown keys are ignored, unparseable values fall back to
    /// the defaults. Numeric values may carry a `px` suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use fit_text::config::FitTextOptions;
    /// use fit_text::types::OverflowMethod;
    ///
    /// let opts = FitTextOptions::from_attrs([
    ///     ("overflow", "truncate"),
    ///     ("font-size", "24px"),
    /// ]);
    /// assert_eq!(opts.overflow, OverflowMethod::Truncate);
    /// assert_eq!(opts.font_size, Some(24));
    /// assert_eq!(opts.min_font_size, 6);
    /// ```
    pub fn from_attrs<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();

        for (key, value) in attrs {
            match key {
                "overflow" => {
                    if let Some(method) = OverflowMethod::parse(value) {
                        options.overflow = method;
                    }
                }
                "min-font-size" => {
                    if let Some(px) = parse_length(value) {
                        options.min_font_size = px;
                    }
                }
                "max-font-size" => {
                    if let Some(px) = parse_length(value) {
                        options.max_font_size = px;
                    }
                }
                "font-size" => {
                    options.font_size = parse_length(value);
                }
                _ => {}
            }
        }

        options
    }

    /// The search range implied by these options.
    pub fn font_size_range(&self) -> FontSizeRange {
        FontSizeRange::new(self.min_font_size, self.max_font_size)
    }
}

/// Parse a pixel length attribute value ("24", "24px").
///
/// Returns `None` for empty, negative or non-numeric input.
fn parse_length(value: &str) -> Option<u32> {
    let trimmed = value.trim().trim_end_matches("px").trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}
