//! The fitting core.
//!
//! Two independent pieces composed sequentially: the font-size search picks
//! the largest feasible size, overflow resolution makes whatever remains fit.
//! [`run_layout_pass`] is the composition - the single entry point an
//! embedder calls once per layout pass (and again on resize), with exclusive
//! access to one measurer/content pair for the duration.
//!
//! ```
//! use fit_text::config::FitTextOptions;
//! use fit_text::fit::run_layout_pass;
//! use fit_text::host::HeadlessElement;
//! use fit_text::types::Bounds;
//!
//! let mut content = HeadlessElement::builder(16.0)
//!     .text("Hello World")
//!     .wrap_width(200.0)
//!     .build();
//! let mut measurer = content.mirror();
//!
//! let outcome = run_layout_pass(
//!     &mut content,
//!     &mut measurer,
//!     Bounds::new(100.0, 200.0),
//!     &FitTextOptions::default(),
//! )
//! .unwrap();
//! assert!(outcome.font_size.is_some());
//! ```

mod overflow;
mod search;

pub use overflow::{truncate, truncate_words, update_overflow};
pub use search::calculate_font_size;

use log::debug;

use crate::config::FitTextOptions;
use crate::error::FitError;
use crate::host::{Measure, StyleTarget, TextTree, mirrors};
use crate::types::{Bounds, OverflowMethod, StyleProperty};

/// What a layout pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassOutcome {
    /// Font size applied to the content, when any was.
    pub font_size: Option<u32>,
}

/// Run one complete layout pass: fix a font size, then resolve overflow.
///
/// With [`OverflowMethod::Fit`] the font size is searched within the
/// configured range, applied to the content, and the clamp path tidies up.
/// The truncation methods keep their configured fixed font size when one is
/// set (clamp path again); without one they rewrite text instead - trailing
/// characters or trailing words, per method.
///
/// The measurer must mirror the content's child structure when the pass
/// starts; truncation indexes one by positions found on the other.
///
/// # Errors
///
/// [`FitError::InvalidFontRange`] from the search when the configured range
/// is inverted. Truncation paths never error.
pub fn run_layout_pass<C, M>(
    content: &mut C,
    measurer: &mut M,
    bounds: Bounds,
    options: &FitTextOptions,
) -> Result<PassOutcome, FitError>
where
    C: StyleTarget + TextTree,
    M: Measure + StyleTarget + TextTree,
{
    debug_assert!(
        mirrors(measurer, content),
        "measurer and content child trees diverged before the pass"
    );

    match options.overflow {
        OverflowMethod::Fit => {
            let font_size = calculate_font_size(
                measurer,
                bounds.max_height,
                bounds.max_width,
                options.min_font_size,
                options.max_font_size,
            )?;
            content.apply_style(StyleProperty::FontSize, font_size as f32);
            update_overflow(content, measurer, bounds.max_height, font_size);
            Ok(PassOutcome {
                font_size: Some(font_size),
            })
        }
        OverflowMethod::Truncate => {
            if let Some(font_size) = options.font_size {
                content.apply_style(StyleProperty::FontSize, font_size as f32);
                update_overflow(content, measurer, bounds.max_height, font_size);
                Ok(PassOutcome {
                    font_size: Some(font_size),
                })
            } else {
                truncate(content, measurer, bounds.max_height);
                Ok(PassOutcome::default())
            }
        }
        OverflowMethod::TruncateWords => {
            if let Some(font_size) = options.font_size {
                content.apply_style(StyleProperty::FontSize, font_size as f32);
                update_overflow(content, measurer, bounds.max_height, font_size);
                Ok(PassOutcome {
                    font_size: Some(font_size),
                })
            } else {
                // The word variant only rewrites the measurer; applying the
                // result to the live content is the pass's job.
                let text = truncate_words(measurer, bounds.max_height);
                content.set_full_text(&text);
                debug!("word truncation applied {} chars", text.chars().count());
                Ok(PassOutcome::default())
            }
        }
    }
}
