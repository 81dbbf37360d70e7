//! Font-size search.
//!
//! Binary search over integer font sizes against the measurement oracle.
//! Rendered height and width must be non-decreasing in font size for fixed
//! content; every host this crate ships satisfies that, and any external
//! measurer must too or the search result is meaningless.

use log::{debug, trace};

use crate::error::FitError;
use crate::host::{Measure, StyleTarget};
use crate::types::StyleProperty;

/// Find the largest integer font size in `[min_font_size, max_font_size]`
/// whose rendered box fits inside `expected_height` x `expected_width`.
///
/// The upper bound is handled exclusively: the loop ceiling starts one past
/// `max_font_size`, so the full range up to and including the maximum is
/// probed. Each probe writes the candidate size to the measurer and reads it
/// back; infeasible probes move the ceiling down, feasible probes move the
/// floor up, and the floor is returned once the window closes.
///
/// The lower bound is never validated: if even `min_font_size` overflows, it
/// is still returned. The result is best-effort, not guaranteed-fitting -
/// overflow resolution deals with the remainder.
///
/// # Errors
///
/// [`FitError::InvalidFontRange`] when `min_font_size >= max_font_size`.
pub fn calculate_font_size<M>(
    measurer: &mut M,
    expected_height: f32,
    expected_width: f32,
    min_font_size: u32,
    max_font_size: u32,
) -> Result<u32, FitError>
where
    M: Measure + StyleTarget,
{
    if min_font_size >= max_font_size {
        return Err(FitError::InvalidFontRange {
            min: min_font_size,
            max: max_font_size,
        });
    }

    let mut lo = min_font_size;
    let mut hi = max_font_size + 1;

    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        measurer.apply_style(StyleProperty::FontSize, mid as f32);
        let size = measurer.measure();

        let feasible = size.height <= expected_height && size.width <= expected_width;
        trace!(
            "probe {mid}px -> {}x{} (feasible: {feasible})",
            size.width, size.height
        );

        if feasible {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    debug!("font size search [{min_font_size}, {max_font_size}] -> {lo}px");
    Ok(lo)
}
