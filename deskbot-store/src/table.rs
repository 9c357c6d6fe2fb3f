use serde_json::Value;

/// One row of a table: column name to scalar value, in source column
/// order. Nothing enforces that every row of a table carries the same
/// columns; the source data is trusted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.iter().find(|(name, _)| name == column).map(|(_, v)| v)
    }

    /// String form of one column, empty for missing or null cells.
    pub fn get_str(&self, column: &str) -> String {
        match self.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Non-null values rendered as display strings, in column order.
    pub fn values_text(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|(_, v)| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect()
    }
}

/// A named, ordered collection of records sharing a column schema.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { name: name.into(), columns, rows }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Record {
        Record::new(vec![
            ("Name".to_string(), json!("Amit Kumar")),
            ("Base_Salary".to_string(), json!(50000)),
            ("Notes".to_string(), Value::Null),
        ])
    }

    #[test]
    fn test_record_get() {
        let rec = sample_record();
        assert_eq!(rec.get("Name"), Some(&json!("Amit Kumar")));
        assert_eq!(rec.get("Missing"), None);
    }

    #[test]
    fn test_record_get_str() {
        let rec = sample_record();
        assert_eq!(rec.get_str("Name"), "Amit Kumar");
        assert_eq!(rec.get_str("Base_Salary"), "50000");
        assert_eq!(rec.get_str("Notes"), "");
        assert_eq!(rec.get_str("Missing"), "");
    }

    #[test]
    fn test_values_text_skips_nulls() {
        let rec = sample_record();
        assert_eq!(rec.values_text(), vec!["Amit Kumar".to_string(), "50000".to_string()]);
    }

    #[test]
    fn test_table_accessors() {
        let table = Table::new(
            "human_capital",
            vec!["Name".to_string(), "Base_Salary".to_string(), "Notes".to_string()],
            vec![sample_record()],
        );
        assert_eq!(table.name(), "human_capital");
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
