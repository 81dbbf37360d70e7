//! Flex container host - derives pass bounds from a flexbox container.
//!
//! The fitting core takes its [`Bounds`] from the container's rendered box.
//! Embedders with a real layout engine read that box themselves; this module
//! is the crate-native way to compute it, running the container description
//! through Taffy and extracting the content box a fit-text pass must fill.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, LengthPercentage, Rect, Size as TaffySize,
    Style, TaffyTree,
};

use crate::types::Bounds;

/// A fixed-size flex container wrapping one fit-text content area.
///
/// Padding and border are uniform per side; the content box is what remains
/// of the container once both are taken out, as computed by the layout
/// engine rather than by hand.
///
/// # Examples
///
/// ```
/// use fit_text::host::FlexContainer;
///
/// let container = FlexContainer::new(200.0, 100.0).with_padding(10.0);
/// let bounds = container.content_bounds();
/// assert_eq!(bounds.max_width, 180.0);
/// assert_eq!(bounds.max_height, 80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexContainer {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub border: f32,
}

impl FlexContainer {
    /// Container with the given outer pixel size, no padding or border.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            padding: 0.0,
            border: 0.0,
        }
    }

    /// Set uniform padding, pixels per side.
    pub const fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set uniform border width, pixels per side.
    pub const fn with_border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Compute the content box the fit pass must fill.
    ///
    /// Builds a two-node Taffy tree (container plus a growing content leaf),
    /// runs layout at the container's definite size, and reads the leaf's
    /// computed box.
    pub fn content_bounds(&self) -> Bounds {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let content_style = Style {
            flex_grow: 1.0,
            ..Default::default()
        };
        let content = tree.new_leaf(content_style).unwrap();

        let container_style = Style {
            display: Display::Flex,
            size: TaffySize {
                width: TaffyDimension::Length(self.width),
                height: TaffyDimension::Length(self.height),
            },
            padding: Rect {
                top: LengthPercentage::Length(self.padding),
                right: LengthPercentage::Length(self.padding),
                bottom: LengthPercentage::Length(self.padding),
                left: LengthPercentage::Length(self.padding),
            },
            border: Rect {
                top: LengthPercentage::Length(self.border),
                right: LengthPercentage::Length(self.border),
                bottom: LengthPercentage::Length(self.border),
                left: LengthPercentage::Length(self.border),
            },
            ..Default::default()
        };
        let container = tree
            .new_with_children(container_style, &[content])
            .unwrap();

        let available = TaffySize {
            width: AvailableSpace::Definite(self.width),
            height: AvailableSpace::Definite(self.height),
        };
        let _ = tree.compute_layout(container, available);

        match tree.layout(content) {
            Ok(layout) => Bounds::new(layout.size.height, layout.size.width),
            // Layout read failing means the tree was never computed; fall
            // back to the outer box so the pass still has usable bounds.
            Err(_) => Bounds::new(self.height, self.width),
        }
    }
}
