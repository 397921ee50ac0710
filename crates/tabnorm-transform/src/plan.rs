//! Column selection.

use tabnorm_model::{Column, TypeTable};
use tracing::warn;

use crate::sanitize::sanitize_header;

/// Output columns for a run, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    pub columns: Vec<Column>,
    /// Allow-listed labels that do not exist in the source header.
    pub missing: Vec<String>,
}

impl ColumnPlan {
    /// Sanitized output header.
    pub fn header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.sanitized_name.as_str())
            .collect()
    }

    /// Source indices of the selected columns, in output order.
    pub fn source_indices(&self) -> Vec<usize> {
        self.columns.iter().map(|column| column.source_index).collect()
    }
}

/// Select output columns from the raw header.
///
/// An empty `allow_list` keeps every column in header order. Otherwise the
/// output follows allow-list order; each label picks the first header
/// position with that exact label, repeated labels are used once, and
/// labels absent from the header are reported with `warn!` and skipped.
pub fn plan_columns<S: AsRef<str>>(
    header: &[S],
    allow_list: &[String],
    types: &TypeTable,
) -> ColumnPlan {
    let sanitized = sanitize_header(header);
    let column_at = |index: usize| {
        let original_name = header[index].as_ref().to_string();
        Column {
            inferred_type: types.get(&original_name),
            sanitized_name: sanitized[index].clone(),
            source_index: index,
            original_name,
        }
    };

    if allow_list.is_empty() {
        return ColumnPlan {
            columns: (0..header.len()).map(column_at).collect(),
            missing: Vec::new(),
        };
    }

    let mut plan = ColumnPlan::default();
    for label in allow_list {
        if plan.columns.iter().any(|column| &column.original_name == label) {
            continue;
        }
        match header.iter().position(|name| name.as_ref() == label) {
            Some(index) => plan.columns.push(column_at(index)),
            None => {
                warn!(column = %label, "requested column not found in source header");
                plan.missing.push(label.clone());
            }
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use tabnorm_model::ColumnType;

    use super::*;

    #[test]
    fn empty_allow_list_keeps_everything() {
        let plan = plan_columns(&["#ID", "Name"], &[], &TypeTable::new());
        assert_eq!(plan.header(), vec!["id", "name"]);
        assert_eq!(plan.source_indices(), vec![0, 1]);
        assert!(plan.missing.is_empty());
    }

    #[test]
    fn allow_list_order_and_missing() {
        let mut types = TypeTable::new();
        types.insert("Active", ColumnType::Boolean);
        let allow = vec![
            "Active".to_string(),
            "Nope".to_string(),
            "#ID".to_string(),
            "Active".to_string(),
        ];
        let plan = plan_columns(&["#ID", "Name", "Active"], &allow, &types);
        assert_eq!(plan.header(), vec!["active", "id"]);
        assert_eq!(plan.source_indices(), vec![2, 0]);
        assert_eq!(plan.columns[0].inferred_type, ColumnType::Boolean);
        assert_eq!(plan.missing, vec!["Nope".to_string()]);
    }
}
