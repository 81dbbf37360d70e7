//! Headless host - a font-metrics text model with no rendering engine.
//!
//! `HeadlessElement` stands in for a DOM-like element: it holds child nodes,
//! accepts the same style writes a real host would, and answers `measure()`
//! from a simple metrics model instead of a layout engine:
//!
//! - every character advances by its Unicode cell width times an em advance
//!   (`CHAR_ADVANCE_EM` of the current font size),
//! - text wraps greedily per character at the configured wrap width,
//! - one line is `font_size * LINE_HEIGHT_EM` pixels tall unless an explicit
//!   line-height was applied.
//!
//! Rendered width and height are non-decreasing in font size for fixed
//! content, which is exactly the monotonicity the font-size search requires.
//! That makes this host both the unit-test oracle and a usable measurer for
//! embedders without a real text stack.

use unicode_width::UnicodeWidthChar;

use crate::types::{LINE_HEIGHT_EM, NodeKind, Size, StyleProperty};

use super::{Measure, StyleTarget, TextTree};

/// Font size a fresh element starts with, in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Horizontal advance of one terminal-style cell, in em.
///
/// 0.6em is a common average advance for proportional UI fonts; the exact
/// value only shifts where wraps land, not any monotonicity.
pub const CHAR_ADVANCE_EM: f32 = 0.6;

bitflags::bitflags! {
    /// Visual state toggles applied by the overflow machinery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct StyleFlags: u8 {
        const OVERFLOWN = 1 << 0;
    }
}

/// A direct child node: either a plain text node or a nested element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChildNode {
    kind: NodeKind,
    text: String,
}

/// An off-screen element with measurable text content.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessElement {
    children: Vec<ChildNode>,
    /// Wrap width in pixels. `None` means the text never wraps.
    wrap_width: Option<f32>,
    font_size: f32,
    line_height: Option<f32>,
    max_height: Option<f32>,
    line_clamp: Option<u16>,
    flags: StyleFlags,
}

impl HeadlessElement {
    /// Start building an element at the given font size.
    pub fn builder(font_size: f32) -> HeadlessElementBuilder {
        HeadlessElementBuilder {
            element: Self {
                children: Vec::new(),
                wrap_width: None,
                font_size,
                line_height: None,
                max_height: None,
                line_clamp: None,
                flags: StyleFlags::default(),
            },
        }
    }

    /// Single text node, default font size, no wrapping.
    pub fn from_text(text: &str) -> Self {
        Self::builder(DEFAULT_FONT_SIZE).text(text).build()
    }

    /// Clone this element's children and wrap width into a fresh element.
    ///
    /// This is how a measurer is born: structurally identical to the live
    /// content at build time, free to be restyled and rewritten afterwards.
    pub fn mirror(&self) -> Self {
        Self {
            children: self.children.clone(),
            wrap_width: self.wrap_width,
            font_size: self.font_size,
            line_height: None,
            max_height: None,
            line_clamp: None,
            flags: StyleFlags::default(),
        }
    }

    /// Currently applied font size, pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Currently applied line clamp, if any.
    pub fn line_clamp(&self) -> Option<u16> {
        self.line_clamp
    }

    /// Currently applied max-height, pixels, if any.
    pub fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    /// Whether the overflow marker is set.
    pub fn is_overflown(&self) -> bool {
        self.flags.contains(StyleFlags::OVERFLOWN)
    }

    /// Pixel height of one line box under the current styles.
    fn line_box(&self) -> f32 {
        self.line_height
            .unwrap_or(self.font_size * LINE_HEIGHT_EM)
    }

    /// Pixel advance of a single character at the current font size.
    fn advance(&self, c: char) -> f32 {
        let cells = c.width().unwrap_or(0) as f32;
        cells * self.font_size * CHAR_ADVANCE_EM
    }

    /// Lay the subtree text out: line count and widest line in pixels.
    ///
    /// Greedy per-character wrap at `wrap_width`, explicit newlines honored.
    fn flow(&self) -> (u32, f32) {
        let text = self.full_text();
        if text.is_empty() {
            return (0, 0.0);
        }

        let mut lines = 0u32;
        let mut current = 0.0f32;
        let mut widest = 0.0f32;

        for c in text.chars() {
            if c == '\n' {
                lines += 1;
                widest = widest.max(current);
                current = 0.0;
                continue;
            }

            let advance = self.advance(c);
            let wraps = match self.wrap_width {
                Some(w) => current + advance > w && current > 0.0,
                None => false,
            };

            if wraps {
                lines += 1;
                widest = widest.max(current);
                current = advance;
            } else {
                current += advance;
            }
        }

        if current > 0.0 || lines == 0 {
            lines += 1;
            widest = widest.max(current);
        }

        (lines, widest)
    }
}

impl Measure for HeadlessElement {
    fn measure(&self) -> Size {
        let (mut lines, widest) = self.flow();

        if let Some(clamp) = self.line_clamp {
            lines = lines.min(clamp as u32);
        }

        let mut height = lines as f32 * self.line_box();
        if let Some(max) = self.max_height {
            height = height.min(max);
        }

        Size::new(widest, height)
    }
}

impl StyleTarget for HeadlessElement {
    fn apply_style(&mut self, property: StyleProperty, px: f32) {
        match property {
            StyleProperty::FontSize => self.font_size = px,
            StyleProperty::LineHeight => self.line_height = Some(px),
            StyleProperty::MaxHeight => self.max_height = Some(px),
        }
    }

    fn clear_style(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::FontSize => self.font_size = DEFAULT_FONT_SIZE,
            StyleProperty::LineHeight => self.line_height = None,
            StyleProperty::MaxHeight => self.max_height = None,
        }
    }

    fn set_line_clamp(&mut self, lines: Option<u16>) {
        self.line_clamp = lines;
    }

    fn toggle_overflow_marker(&mut self, overflown: bool) {
        self.flags.set(StyleFlags::OVERFLOWN, overflown);
    }
}

impl TextTree for HeadlessElement {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn node_kind(&self, index: usize) -> NodeKind {
        self.children[index].kind
    }

    fn text_content(&self, index: usize) -> String {
        self.children[index].text.clone()
    }

    fn set_text_content(&mut self, index: usize, text: &str) {
        self.children[index].text = text.to_string();
    }

    fn full_text(&self) -> String {
        self.children
            .iter()
            .map(|child| child.text.as_str())
            .collect()
    }

    fn set_full_text(&mut self, text: &str) {
        self.children = vec![ChildNode {
            kind: NodeKind::Text,
            text: text.to_string(),
        }];
    }
}

/// Builder for [`HeadlessElement`].
pub struct HeadlessElementBuilder {
    element: HeadlessElement,
}

impl HeadlessElementBuilder {
    /// Append a plain text child node.
    pub fn text(mut self, text: &str) -> Self {
        self.element.children.push(ChildNode {
            kind: NodeKind::Text,
            text: text.to_string(),
        });
        self
    }

    /// Append a nested element child with the given text content.
    pub fn element(mut self, text: &str) -> Self {
        self.element.children.push(ChildNode {
            kind: NodeKind::Element,
            text: text.to_string(),
        });
        self
    }

    /// Wrap text at the given pixel width.
    pub fn wrap_width(mut self, px: f32) -> Self {
        self.element.wrap_width = Some(px);
        self
    }

    /// Finish building.
    pub fn build(self) -> HeadlessElement {
        self.element
    }
}
