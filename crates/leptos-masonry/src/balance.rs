//! Column Balancer
//!
//! Greedy shortest-column placement. Rendered heights are unknown until
//! images load, so each item contributes its aspect ratio as a unit-less
//! height estimate.

use crate::error::LayoutError;

/// Height proxy used when an item has no usable aspect ratio
pub const DEFAULT_ASPECT_RATIO: f64 = 1.5;

/// An item that can be placed in a masonry column
pub trait MasonryItem {
    type Key: Clone + Eq + std::hash::Hash;

    /// Stable identity across re-renders
    fn key(&self) -> Self::Key;

    /// Height/width estimate, if the source data carried one
    fn aspect_ratio(&self) -> Option<f64>;
}

/// One column of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    pub items: Vec<T>,
    /// Sum of height proxies of `items`
    pub estimated_height: f64,
}

impl<T> Column<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            estimated_height: 0.0,
        }
    }
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Height proxy for one item: the ratio if positive and finite, else the default
pub fn height_proxy(aspect_ratio: Option<f64>) -> f64 {
    match aspect_ratio {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => DEFAULT_ASPECT_RATIO,
    }
}

/// Distribute `items` over `column_count` columns.
///
/// Each item goes to the column with the smallest estimated height, lowest
/// index on ties. Order is preserved within a column.
pub fn assign_columns<T>(items: &[T], column_count: usize) -> Result<Vec<Column<T>>, LayoutError>
where
    T: MasonryItem + Clone,
{
    if column_count == 0 {
        return Err(LayoutError::InvalidColumnCount(column_count));
    }

    let mut columns: Vec<Column<T>> = (0..column_count).map(|_| Column::new()).collect();

    for item in items {
        let mut shortest = 0;
        for (idx, column) in columns.iter().enumerate().skip(1) {
            if column.estimated_height < columns[shortest].estimated_height {
                shortest = idx;
            }
        }
        let target = &mut columns[shortest];
        target.estimated_height += height_proxy(item.aspect_ratio());
        target.items.push(item.clone());
    }

    Ok(columns)
}
