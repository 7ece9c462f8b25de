//! Placed items and their grid-positioned copies.
//!
//! An [`Item`] is an opaque placed unit taken from a key template: an integer
//! code, optional label and output text, an intrinsic size and the template
//! coordinates it was laid out at. A [`PositionedItem`] shares the item and
//! carries the coordinates the grid assigned to it.
//!
//! ## Equivalence
//!
//! ```text
//!   Item { code, label, output_text, width, height, x, y }
//!          └────────────┬──────────┘  └────────┬────────┘
//!                  ItemKey (Eq + Hash)     ignored for dedup
//! ```
//!
//! Two items are equivalent iff their [`ItemKey`]s are equal. Size and
//! position never take part in deduplication. Inserts compare in place with
//! [`Item::is_equivalent`]; set-based checks hash [`ItemKey`]s.

use std::fmt;
use std::sync::Arc;

/// Owned, hashable form of an item's identity.
///
/// Two items are equivalent iff their keys are equal; [`Item::is_equivalent`]
/// compares the same fields without building keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub code: i32,
    pub label: Option<String>,
    pub output_text: Option<String>,
}

/// A placed unit from a key template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    code: i32,
    label: Option<String>,
    output_text: Option<String>,
    width: i32,
    height: i32,
    x: i32,
    y: i32,
}

impl Item {
    /// Creates an item with the given code and size at the origin.
    pub fn new(code: i32, width: i32, height: i32) -> Self {
        Self {
            code,
            label: None,
            output_text: None,
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the output text.
    pub fn with_output_text(mut self, output_text: impl Into<String>) -> Self {
        self.output_text = Some(output_text.into());
        self
    }

    /// Sets the template coordinates.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn output_text(&self) -> Option<&str> {
        self.output_text.as_deref()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Template x coordinate.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Template y coordinate.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the deduplication key of this item.
    pub fn key(&self) -> ItemKey {
        ItemKey {
            code: self.code,
            label: self.label.clone(),
            output_text: self.output_text.clone(),
        }
    }

    /// Returns `true` if `other` has the same code, label and output text.
    ///
    /// Compares fields in place; no key is allocated.
    pub fn is_equivalent(&self, other: &Item) -> bool {
        self.code == other.code
            && self.label == other.label
            && self.output_text == other.output_text
    }
}

/// Axis-aligned rectangle in grid pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Returns `true` if `(px, py)` lies inside the half-open rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// An item with the coordinates currently assigned by its grid.
///
/// The template coordinates of the wrapped item are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedItem {
    item: Arc<Item>,
    x: i32,
    y: i32,
}

impl PositionedItem {
    pub(crate) fn new(item: Arc<Item>) -> Self {
        let (x, y) = (item.x, item.y);
        Self { item, x, y }
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// The wrapped item.
    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Shared handle to the wrapped item.
    #[inline]
    pub fn shared_item(&self) -> &Arc<Item> {
        &self.item
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.item.code
    }

    /// Current x coordinate in the grid.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current y coordinate in the grid.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn template_x(&self) -> i32 {
        self.item.x
    }

    #[inline]
    pub fn template_y(&self) -> i32 {
        self.item.y
    }

    /// Hit box at the current position.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.item.width,
            height: self.item.height,
        }
    }
}

impl fmt::Display for PositionedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridItem: code=0x{:x}", self.item.code)?;
        if let Some(label) = self.item.label() {
            write!(f, " label={label:?}")?;
        }
        write!(f, " at ({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalence_ignores_size_and_position() {
        let a = Item::new(0x1f600, 40, 50).with_label("😀").at(0, 0);
        let b = Item::new(0x1f600, 10, 10).with_label("😀").at(99, 7);
        assert!(a.is_equivalent(&b));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn equivalence_distinguishes_label_and_output_text() {
        let base = Item::new(7, 1, 1);
        assert!(!base.is_equivalent(&Item::new(7, 1, 1).with_label("x")));
        assert!(!base.is_equivalent(&Item::new(7, 1, 1).with_output_text(":)")));
        assert!(!base.is_equivalent(&Item::new(8, 1, 1)));
    }

    #[test]
    fn absent_and_empty_label_are_distinct() {
        let absent = Item::new(1, 1, 1);
        let empty = Item::new(1, 1, 1).with_label("");
        assert!(!absent.is_equivalent(&empty));
    }

    #[test]
    fn positioned_item_keeps_template_coordinates() {
        let mut positioned = PositionedItem::new(Arc::new(Item::new(1, 20, 30).at(5, 6)));
        assert_eq!((positioned.x(), positioned.y()), (5, 6));

        positioned.move_to(100, 200);
        assert_eq!((positioned.x(), positioned.y()), (100, 200));
        assert_eq!((positioned.template_x(), positioned.template_y()), (5, 6));
        assert_eq!(
            positioned.bounds(),
            Rect {
                x: 100,
                y: 200,
                width: 20,
                height: 30
            }
        );
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect {
            x: 10,
            y: 10,
            width: 5,
            height: 5,
        };
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(10, 15));
    }
}
