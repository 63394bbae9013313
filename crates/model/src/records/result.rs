use serde::{Deserialize, Serialize};

/// Message carried in the placeholder result row.
pub const COMPLETION_MESSAGE: &str = "Job successfully completed.";

/// Column descriptor in a notebook result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub comment: String,
}

/// Tabular payload handed back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub data: Vec<Vec<String>>,
    pub meta: Vec<ColumnMeta>,
    #[serde(rename = "type")]
    pub kind: String,
    pub has_more: bool,
}

impl ResultSet {
    /// Fixed payload returned for every fetch: a single `Header` string
    /// column with one completion row. The real job output stays in the
    /// external service and is not retrieved here.
    pub fn completed_placeholder() -> Self {
        ResultSet {
            data: vec![vec![COMPLETION_MESSAGE.to_string()]],
            meta: vec![ColumnMeta {
                name: "Header".to_string(),
                data_type: "STRING_TYPE".to_string(),
                comment: String::new(),
            }],
            kind: "table".to_string(),
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_single_cell_table() {
        let result = ResultSet::completed_placeholder();
        assert_eq!(result.data, vec![vec![COMPLETION_MESSAGE.to_string()]]);
        assert_eq!(result.meta.len(), 1);
        assert_eq!(result.meta[0].name, "Header");
        assert_eq!(result.meta[0].data_type, "STRING_TYPE");
        assert_eq!(result.kind, "table");
        assert!(!result.has_more);
    }

    #[test]
    fn column_type_serializes_under_type_key() {
        let json = serde_json::to_value(ResultSet::completed_placeholder()).unwrap();
        assert_eq!(json["type"], "table");
        assert_eq!(json["meta"][0]["type"], "STRING_TYPE");
    }
}
