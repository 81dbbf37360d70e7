//! Overflow resolution.
//!
//! Once a font size is fixed, one of three procedures makes the rendered
//! result respect the container's height: a pure line-box clamp, character
//! truncation with an ellipsis, or word truncation. All three probe the
//! hidden measurer and touch the live content at most once; every failure
//! mode degrades visually instead of erroring.

use log::debug;

use crate::host::{Measure, StyleTarget, TextTree};
use crate::types::{ELLIPSIS, LINE_HEIGHT_EM, NodeKind, StyleProperty, WORD_ELLIPSIS};

// =============================================================================
// Line clamp
// =============================================================================

/// Clamp the content to the lines that fit, without touching its text.
///
/// Applies `font_size` to the measurer, checks whether the measured height
/// exceeds `max_height`, and mirrors the verdict onto the content: the
/// overflow marker is toggled either way; when overflown the content is
/// constrained to the whole lines that fit (`floor(max_height / line_height)`
/// with `line_height = font_size * LINE_HEIGHT_EM`) and its box capped at
/// exactly those line boxes; when not, both constraints are cleared.
///
/// Idempotent: repeating the call with identical inputs reproduces the same
/// final state.
pub fn update_overflow<C, M>(content: &mut C, measurer: &mut M, max_height: f32, font_size: u32)
where
    C: StyleTarget,
    M: Measure + StyleTarget,
{
    measurer.apply_style(StyleProperty::FontSize, font_size as f32);
    let overflown = measurer.measure().height > max_height;

    let line_height = font_size as f32 * LINE_HEIGHT_EM;
    let number_of_lines = (max_height / line_height).floor() as u16;

    debug!(
        "update_overflow: {font_size}px, overflown {overflown}, {number_of_lines} lines fit"
    );

    content.toggle_overflow_marker(overflown);
    if overflown {
        content.set_line_clamp(Some(number_of_lines));
        content.apply_style(StyleProperty::MaxHeight, line_height * number_of_lines as f32);
    } else {
        content.set_line_clamp(None);
        content.clear_style(StyleProperty::MaxHeight);
    }
}

// =============================================================================
// Character truncation
// =============================================================================

/// Truncate trailing characters of the last text node until the content
/// fits `max_height`.
///
/// No-op when the measured height already fits. The target is the last
/// direct child that is a plain text node, scanning from the end; when every
/// child is an element the shape is unsupported and the content is left
/// untouched, overflow unresolved.
///
/// The loop pops one character at a time, rewriting the measurer node as the
/// remaining characters plus `…` and re-measuring, until the height fits or
/// the characters run out (leaving just the ellipsis). Only then is the
/// matching node on the live content written, exactly once - all the
/// intermediate churn stays on the hidden measurer.
pub fn truncate<C, M>(content: &mut C, measurer: &mut M, max_height: f32)
where
    C: TextTree,
    M: Measure + TextTree,
{
    if measurer.measure().height <= max_height {
        return;
    }

    let Some(index) = last_text_node(measurer) else {
        debug!("truncate: no text node among children, leaving content as is");
        return;
    };

    let mut chars: Vec<char> = measurer.text_content(index).chars().collect();
    let original_len = chars.len();

    while measurer.measure().height > max_height {
        if chars.pop().is_none() {
            break;
        }
        let mut text: String = chars.iter().collect();
        text.push(ELLIPSIS);
        measurer.set_text_content(index, &text);
    }

    let mut text: String = chars.iter().collect();
    text.push(ELLIPSIS);
    debug!(
        "truncate: {original_len} -> {} chars on node {index}",
        chars.len()
    );
    content.set_text_content(index, &text);
}

/// Index of the last direct child that is a plain text node.
fn last_text_node<T: TextTree>(tree: &T) -> Option<usize> {
    (0..tree.child_count())
        .rev()
        .find(|&i| tree.node_kind(i) == NodeKind::Text)
}

// =============================================================================
// Word truncation
// =============================================================================

/// Drop trailing words until the measurer's text fits `expected_height`,
/// returning the final text.
///
/// Splits the measurer's full text on single spaces. Each iteration drops the
/// last word and rewrites the measurer as the remaining words joined by
/// spaces plus a literal `...`, re-measuring after every drop, until the
/// height fits or the words run out.
///
/// Unlike [`truncate`] this does not write the live content: the caller
/// applies the returned string. If the text already fits, it is returned
/// unchanged with no marker appended.
pub fn truncate_words<M>(measurer: &mut M, expected_height: f32) -> String
where
    M: Measure + TextTree,
{
    let full = measurer.full_text();
    let mut words: Vec<&str> = full.trim().split(' ').collect();

    while measurer.measure().height > expected_height {
        if words.pop().is_none() {
            break;
        }
        let mut text = words.join(" ");
        text.push_str(WORD_ELLIPSIS);
        measurer.set_full_text(&text);
    }

    debug!("truncate_words: kept {} words", words.len());
    measurer.full_text()
}
