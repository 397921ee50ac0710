//! Row normalization: projection, cleaning, and type conversion.

use tabnorm_model::{Column, ColumnType, ShortRowPolicy};

use crate::normalization::{convert_boolean, convert_date, is_blank, strip_control_chars};
use crate::plan::ColumnPlan;

/// Normalize a single cell for its column type.
///
/// Control characters are stripped first. A blank result becomes the empty
/// string and skips conversion.
pub fn normalize_value(raw: &str, column_type: ColumnType) -> String {
    let value = strip_control_chars(raw);
    if is_blank(&value) {
        return String::new();
    }
    match column_type {
        ColumnType::Date => convert_date(&value),
        ColumnType::Boolean => convert_boolean(&value),
        ColumnType::String => value,
    }
}

/// Applies a frozen column plan to raw rows.
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    columns: Vec<Column>,
    /// Cells a row needs to cover every selected column.
    required_len: usize,
    policy: ShortRowPolicy,
}

impl RowNormalizer {
    pub fn new(plan: ColumnPlan, policy: ShortRowPolicy) -> Self {
        let required_len = plan
            .columns
            .iter()
            .map(|column| column.source_index + 1)
            .max()
            .unwrap_or(0);
        Self {
            columns: plan.columns,
            required_len,
            policy,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Sanitized output header.
    pub fn header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.sanitized_name.as_str())
            .collect()
    }

    pub fn required_len(&self) -> usize {
        self.required_len
    }

    /// True when `raw` lacks cells for some selected column.
    pub fn is_short(&self, raw: &[String]) -> bool {
        raw.len() < self.required_len
    }

    /// Normalize one raw row into output order.
    ///
    /// Returns `None` only when the row is short and the policy rejects it.
    pub fn normalize(&self, raw: &[String]) -> Option<Vec<String>> {
        if self.is_short(raw) && self.policy == ShortRowPolicy::Reject {
            return None;
        }
        let cleaned = self
            .columns
            .iter()
            .map(|column| {
                raw.get(column.source_index)
                    .map(|value| normalize_value(value, column.inferred_type))
                    .unwrap_or_default()
            })
            .collect();
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use tabnorm_model::TypeTable;

    use super::*;
    use crate::plan::plan_columns;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn blank_after_stripping_is_empty() {
        assert_eq!(normalize_value("\u{7}\t ", ColumnType::Date), "");
        assert_eq!(normalize_value("ye\u{0}s", ColumnType::Boolean), "true");
        assert_eq!(normalize_value(" keep ", ColumnType::String), " keep ");
    }

    #[test]
    fn pad_policy_fills_missing_cells() {
        let plan = plan_columns(&["a", "b", "c"], &[], &TypeTable::new());
        let normalizer = RowNormalizer::new(plan, ShortRowPolicy::Pad);
        assert_eq!(
            normalizer.normalize(&row(&["1"])),
            Some(row(&["1", "", ""]))
        );
    }

    #[test]
    fn reject_policy_drops_short_rows() {
        let plan = plan_columns(&["a", "b", "c"], &[], &TypeTable::new());
        let normalizer = RowNormalizer::new(plan, ShortRowPolicy::Reject);
        assert_eq!(normalizer.required_len(), 3);
        assert_eq!(normalizer.normalize(&row(&["1", "2"])), None);
        assert_eq!(
            normalizer.normalize(&row(&["1", "2", "3", "extra"])),
            Some(row(&["1", "2", "3"]))
        );
    }

    #[test]
    fn required_len_follows_selected_columns() {
        let plan = plan_columns(&["a", "b", "c"], &["a".to_string()], &TypeTable::new());
        let normalizer = RowNormalizer::new(plan, ShortRowPolicy::Reject);
        assert_eq!(normalizer.required_len(), 1);
        assert_eq!(normalizer.normalize(&row(&["x"])), Some(row(&["x"])));
    }
}
