//! Fixed-column grid geometry.
//!
//! A [`GridLayout`] is derived once from a template set of items. Two anchor
//! keys, [`TEMPLATE_CODE_0`] and [`TEMPLATE_CODE_1`], give the left padding
//! and the horizontal step; the vertical step is the anchor height plus the
//! ambient vertical gap.
//!
//! ```text
//!   top_padding
//!   ┌──────────┬──────────┬──────────┐
//!   │ [0]      │ [1]      │ [2]      │   x = col * horizontal_step + left_padding
//!   ├──────────┼──────────┼──────────┤   y = row * vertical_step + top_padding
//!   │ [3]      │ [4]      │ ...      │
//!   └──────────┴──────────┴──────────┘
//!    columns = base_width / horizontal_step
//! ```

use crate::error::ConfigError;
use crate::item::Item;

/// Code of the anchor key giving the left padding (`'0'`).
pub const TEMPLATE_CODE_0: i32 = 0x30;
/// Code of the anchor key next to [`TEMPLATE_CODE_0`] (`'1'`).
pub const TEMPLATE_CODE_1: i32 = 0x31;

/// Ambient metrics supplied by the caller's layout context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMetrics {
    pub base_width: i32,
    pub vertical_gap: i32,
    pub top_padding: i32,
}

impl LayoutMetrics {
    pub fn new(base_width: i32, vertical_gap: i32, top_padding: i32) -> Self {
        Self {
            base_width,
            vertical_gap,
            top_padding,
        }
    }
}

/// Immutable grid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    left_padding: i32,
    horizontal_step: i32,
    vertical_step: i32,
    columns: usize,
    top_padding: i32,
}

impl GridLayout {
    /// Derives the grid parameters from the anchor keys of `template`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an anchor key is missing, the anchors share
    /// an x coordinate, fewer than one column fits in `base_width`, or a step
    /// does not fit in `i32`.
    pub fn from_template(template: &[Item], metrics: LayoutMetrics) -> Result<Self, ConfigError> {
        let key0 = template_key(template, TEMPLATE_CODE_0)?;
        let key1 = template_key(template, TEMPLATE_CODE_1)?;

        let horizontal_step = key1
            .x()
            .checked_sub(key0.x())
            .and_then(i32::checked_abs)
            .ok_or_else(|| ConfigError::new("horizontal step between template keys overflows i32"))?;
        if horizontal_step == 0 {
            return Err(ConfigError::new(
                "template keys 0x30 and 0x31 share an x coordinate; horizontal step must be > 0",
            ));
        }
        let columns = metrics.base_width / horizontal_step;
        if columns <= 0 {
            return Err(ConfigError::new(format!(
                "base width {} fits no column of width {}",
                metrics.base_width, horizontal_step
            )));
        }
        let vertical_step = key0
            .height()
            .checked_add(metrics.vertical_gap)
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "vertical step {} + {} overflows i32",
                    key0.height(),
                    metrics.vertical_gap
                ))
            })?;

        Ok(Self {
            left_padding: key0.x(),
            horizontal_step,
            vertical_step,
            columns: columns as usize,
            top_padding: metrics.top_padding,
        })
    }

    /// Checks that every cell of a grid holding `max_count` items has
    /// coordinates representable as `i32`.
    ///
    /// Steps are constant, so the last column and the last row bound every
    /// coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first cell that overflows.
    pub fn check_capacity(&self, max_count: usize) -> Result<(), ConfigError> {
        if max_count == 0 {
            return Ok(());
        }
        let last_column = self.columns.min(max_count) - 1;
        let last_row = (max_count - 1) / self.columns;

        let x = axis_coordinate(last_column, self.horizontal_step, self.left_padding);
        let y = axis_coordinate(last_row, self.vertical_step, self.top_padding);
        match (x, y) {
            (Some(_), Some(_)) => Ok(()),
            (None, _) => Err(ConfigError::new(format!(
                "column {last_column} x coordinate overflows i32 for max_count {max_count}"
            ))),
            (_, None) => Err(ConfigError::new(format!(
                "row {last_row} y coordinate overflows i32 for max_count {max_count}"
            ))),
        }
    }

    #[inline]
    pub fn left_padding(&self) -> i32 {
        self.left_padding
    }

    #[inline]
    pub fn horizontal_step(&self) -> i32 {
        self.horizontal_step
    }

    #[inline]
    pub fn vertical_step(&self) -> i32 {
        self.vertical_step
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn top_padding(&self) -> i32 {
        self.top_padding
    }

    /// Coordinates of the cell at `index` (0 = front of the order).
    ///
    /// `index` must lie within a capacity accepted by
    /// [`check_capacity`](Self::check_capacity).
    #[inline]
    pub fn position(&self, index: usize) -> (i32, i32) {
        let column = (index % self.columns) as i32;
        let row = (index / self.columns) as i32;
        (
            column * self.horizontal_step + self.left_padding,
            row * self.vertical_step + self.top_padding,
        )
    }
}

fn axis_coordinate(cell: usize, step: i32, padding: i32) -> Option<i32> {
    i32::try_from(cell)
        .ok()?
        .checked_mul(step)?
        .checked_add(padding)
}

fn template_key(template: &[Item], code: i32) -> Result<&Item, ConfigError> {
    template
        .iter()
        .find(|item| item.code() == code)
        .ok_or_else(|| ConfigError::new(format!("can't find template key: code=0x{code:x}")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Anchors 40px apart starting at x=5, 30px tall.
    pub fn template() -> Vec<Item> {
        vec![
            Item::new(TEMPLATE_CODE_0, 40, 30).at(5, 0),
            Item::new(TEMPLATE_CODE_1, 40, 30).at(45, 0),
        ]
    }

    /// Four columns, vertical step 32, top padding 3.
    pub fn metrics() -> LayoutMetrics {
        LayoutMetrics::new(160, 2, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{metrics, template};
    use super::*;

    #[test]
    fn derives_parameters_from_anchors() {
        let layout = GridLayout::from_template(&template(), metrics()).unwrap();
        assert_eq!(layout.left_padding(), 5);
        assert_eq!(layout.horizontal_step(), 40);
        assert_eq!(layout.vertical_step(), 32);
        assert_eq!(layout.columns(), 4);
        assert_eq!(layout.top_padding(), 3);
    }

    #[test]
    fn horizontal_step_is_absolute() {
        let template = vec![
            Item::new(TEMPLATE_CODE_0, 40, 30).at(85, 0),
            Item::new(TEMPLATE_CODE_1, 40, 30).at(45, 0),
        ];
        let layout = GridLayout::from_template(&template, metrics()).unwrap();
        assert_eq!(layout.horizontal_step(), 40);
        assert_eq!(layout.left_padding(), 85);
    }

    #[test]
    fn positions_wrap_rows() {
        let layout = GridLayout::from_template(&template(), metrics()).unwrap();
        assert_eq!(layout.position(0), (5, 3));
        assert_eq!(layout.position(3), (125, 3));
        assert_eq!(layout.position(4), (5, 35));
        assert_eq!(layout.position(9), (45, 67));
    }

    #[test]
    fn missing_anchor_is_config_error() {
        let only_zero = vec![Item::new(TEMPLATE_CODE_0, 40, 30)];
        let err = GridLayout::from_template(&only_zero, metrics()).unwrap_err();
        assert_eq!(err.message(), "can't find template key: code=0x31");
    }

    #[test]
    fn degenerate_geometry_is_config_error() {
        let stacked = vec![
            Item::new(TEMPLATE_CODE_0, 40, 30).at(5, 0),
            Item::new(TEMPLATE_CODE_1, 40, 30).at(5, 40),
        ];
        assert!(GridLayout::from_template(&stacked, metrics()).is_err());

        let narrow = LayoutMetrics::new(39, 0, 0);
        assert!(GridLayout::from_template(&template(), narrow).is_err());
    }

    #[test]
    fn overflowing_steps_are_config_errors() {
        let wide = vec![
            Item::new(TEMPLATE_CODE_0, 40, 30).at(i32::MIN, 0),
            Item::new(TEMPLATE_CODE_1, 40, 30).at(1, 0),
        ];
        assert!(GridLayout::from_template(&wide, metrics()).is_err());

        let tall = vec![
            Item::new(TEMPLATE_CODE_0, 40, i32::MAX).at(0, 0),
            Item::new(TEMPLATE_CODE_1, 40, i32::MAX).at(40, 0),
        ];
        let err = GridLayout::from_template(&tall, LayoutMetrics::new(40, 1, 0)).unwrap_err();
        assert!(err.message().contains("vertical step"));
    }

    #[test]
    fn capacity_whose_last_row_overflows_is_rejected() {
        // one column, rows 1_000_000_000 apart: row 2 is the last that fits
        let tall = vec![
            Item::new(TEMPLATE_CODE_0, 40, 1_000_000_000).at(0, 0),
            Item::new(TEMPLATE_CODE_1, 40, 1_000_000_000).at(40, 0),
        ];
        let layout = GridLayout::from_template(&tall, LayoutMetrics::new(40, 0, 0)).unwrap();
        assert!(layout.check_capacity(3).is_ok());
        let err = layout.check_capacity(5).unwrap_err();
        assert!(err.message().contains("row 4"));
        assert!(layout.check_capacity(0).is_ok());
    }

    #[test]
    fn capacity_whose_last_column_overflows_is_rejected() {
        // left padding 2e9, step 5e8: column 1 is already past i32::MAX
        let offset = vec![
            Item::new(TEMPLATE_CODE_0, 40, 30).at(2_000_000_000, 0),
            Item::new(TEMPLATE_CODE_1, 40, 30).at(1_500_000_000, 0),
        ];
        let layout =
            GridLayout::from_template(&offset, LayoutMetrics::new(1_000_000_000, 0, 0)).unwrap();
        assert_eq!(layout.columns(), 2);
        assert!(layout.check_capacity(1).is_ok());
        let err = layout.check_capacity(2).unwrap_err();
        assert!(err.message().contains("column 1"));
    }
}
