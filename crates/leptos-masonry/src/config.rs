//! Grid Configuration
//!
//! Breakpoint policy and observer options, deserializable from JSON with
//! every field defaulted.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// `columns` applies from `min_width` up to the next row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointRow {
    pub min_width: f64,
    pub columns: usize,
}

/// Step function from viewport width to column count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<BreakpointRow>", into = "Vec<BreakpointRow>")]
pub struct BreakpointTable {
    rows: Vec<BreakpointRow>,
}

impl From<Vec<BreakpointRow>> for BreakpointTable {
    fn from(rows: Vec<BreakpointRow>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<BreakpointTable> for Vec<BreakpointRow> {
    fn from(table: BreakpointTable) -> Self {
        table.rows
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::from_rows(vec![
            BreakpointRow { min_width: 1536.0, columns: 6 },
            BreakpointRow { min_width: 1280.0, columns: 5 },
            BreakpointRow { min_width: 1024.0, columns: 4 },
            BreakpointRow { min_width: 768.0, columns: 3 },
            BreakpointRow { min_width: 640.0, columns: 2 },
            BreakpointRow { min_width: 0.0, columns: 2 },
        ])
    }
}

impl BreakpointTable {
    /// Rows are kept sorted widest first regardless of input order
    pub fn from_rows(mut rows: Vec<BreakpointRow>) -> Self {
        rows.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self { rows }
    }

    pub fn rows(&self) -> &[BreakpointRow] {
        &self.rows
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows.is_empty() {
            return Err(LayoutError::EmptyBreakpoints);
        }
        if let Some(row) = self.rows.iter().find(|r| r.columns == 0) {
            return Err(LayoutError::InvalidColumnCount(row.columns));
        }
        if !self.rows.iter().any(|r| r.min_width <= 0.0) {
            return Err(LayoutError::MissingBaseBreakpoint);
        }
        Ok(())
    }

    /// Column count for `width`. Never below 1.
    pub fn columns_for(&self, width: f64) -> usize {
        self.rows
            .iter()
            .find(|r| width >= r.min_width)
            .or(self.rows.last())
            .map(|r| r.columns)
            .unwrap_or(1)
            .max(1)
    }
}

/// Options for one intersection observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin around the root, e.g. "0px" or "200px 0px"
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverOptions {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(LayoutError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Whether an entry counts as "in view" under this threshold
    pub fn in_view(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub breakpoints: BreakpointTable,
    pub item_observer: ObserverOptions,
    pub sentinel_observer: ObserverOptions,
    pub resize_debounce_ms: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            item_observer: ObserverOptions::default(),
            sentinel_observer: ObserverOptions::default(),
            resize_debounce_ms: 150,
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.breakpoints.validate()?;
        self.item_observer.validate()?;
        self.sentinel_observer.validate()?;
        Ok(())
    }

    pub fn columns_for(&self, width: f64) -> usize {
        self.breakpoints.columns_for(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoint_table() {
        let table = BreakpointTable::default();
        assert_eq!(table.columns_for(0.0), 2);
        assert_eq!(table.columns_for(639.0), 2);
        assert_eq!(table.columns_for(640.0), 2);
        assert_eq!(table.columns_for(767.0), 2);
        assert_eq!(table.columns_for(768.0), 3);
        assert_eq!(table.columns_for(1000.0), 3);
        assert_eq!(table.columns_for(1024.0), 4);
        assert_eq!(table.columns_for(1280.0), 5);
        assert_eq!(table.columns_for(1536.0), 6);
        assert_eq!(table.columns_for(3840.0), 6);
    }

    #[test]
    fn test_column_count_non_decreasing_with_width() {
        let table = BreakpointTable::default();
        let mut last = 0;
        for w in (0..2000).step_by(7) {
            let cols = table.columns_for(w as f64);
            assert!(cols >= last, "width {} dropped to {} columns", w, cols);
            last = cols;
        }
    }

    #[test]
    fn test_rows_sorted_on_construction() {
        let table = BreakpointTable::from_rows(vec![
            BreakpointRow { min_width: 0.0, columns: 1 },
            BreakpointRow { min_width: 900.0, columns: 3 },
            BreakpointRow { min_width: 500.0, columns: 2 },
        ]);
        assert_eq!(table.columns_for(100.0), 1);
        assert_eq!(table.columns_for(600.0), 2);
        assert_eq!(table.columns_for(1200.0), 3);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let empty = BreakpointTable::from_rows(vec![]);
        assert!(matches!(empty.validate(), Err(LayoutError::EmptyBreakpoints)));

        let zero = BreakpointTable::from_rows(vec![BreakpointRow { min_width: 0.0, columns: 0 }]);
        assert!(matches!(zero.validate(), Err(LayoutError::InvalidColumnCount(0))));

        let no_base = BreakpointTable::from_rows(vec![BreakpointRow { min_width: 320.0, columns: 2 }]);
        assert!(matches!(no_base.validate(), Err(LayoutError::MissingBaseBreakpoint)));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GridConfig::from_json(r#"{"resize_debounce_ms": 50, "sentinel_observer": {"root_margin": "400px"}}"#).unwrap();
        assert_eq!(config.resize_debounce_ms, 50);
        assert_eq!(config.sentinel_observer.root_margin, "400px");
        assert_eq!(config.sentinel_observer.threshold, 0.1);
        assert_eq!(config.breakpoints, BreakpointTable::default());
    }

    #[test]
    fn test_from_json_custom_breakpoints() {
        let config = GridConfig::from_json(
            r#"{"breakpoints": [{"min_width": 0, "columns": 1}, {"min_width": 800, "columns": 3}]}"#,
        )
        .unwrap();
        assert_eq!(config.columns_for(500.0), 1);
        assert_eq!(config.columns_for(800.0), 3);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(GridConfig::from_json("{not json"), Err(LayoutError::Config(_))));
        assert!(matches!(
            GridConfig::from_json(r#"{"item_observer": {"threshold": 1.5}}"#),
            Err(LayoutError::InvalidThreshold(_))
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{"breakpoints": [{"min_width": 0, "columns": 0}]}"#),
            Err(LayoutError::InvalidColumnCount(0))
        ));
    }

    #[test]
    fn test_in_view_respects_threshold() {
        let opts = ObserverOptions::default();
        assert!(!opts.in_view(true, 0.05));
        assert!(opts.in_view(true, 0.1));
        assert!(!opts.in_view(false, 0.5));
    }
}
