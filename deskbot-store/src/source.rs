use crate::table::{Record, Table};
use async_trait::async_trait;
use deskbot_core::{BotError, Result};
use serde_json::Value;
use std::path::PathBuf;

/// An external source tables are bulk-loaded from at startup.
///
/// `Ok(None)` means the source has no table by that name; whether that
/// is fatal is the loader's decision, not the source's.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn load_table(&self, name: &str) -> Result<Option<Table>>;
}

/// Loads tables from a directory of `<name>.json` files, each holding a
/// JSON array of flat objects. Column order is taken from the first row.
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn parse_table(name: &str, raw: &str) -> Result<Table> {
        let value: Value = serde_json::from_str(raw)?;
        let rows_json = value.as_array().ok_or_else(|| {
            BotError::Store(format!("Table {name} is not a JSON array"))
        })?;

        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(rows_json.len());

        for (idx, row) in rows_json.iter().enumerate() {
            let obj = row.as_object().ok_or_else(|| {
                BotError::Store(format!("Table {name} row {idx} is not an object"))
            })?;

            if columns.is_empty() {
                columns = obj.keys().cloned().collect();
            }

            let fields = obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            rows.push(Record::new(fields));
        }

        Ok(Table::new(name, columns, rows))
    }
}

#[async_trait]
impl TableSource for JsonDirSource {
    async fn load_table(&self, name: &str) -> Result<Option<Table>> {
        let path = self.dir.join(format!("{name}.json"));
        if !path.exists() {
            return Ok(None);
        }

        let raw = tokio::fs::read_to_string(&path).await?;
        Self::parse_table(name, &raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_table_columns_from_first_row() {
        let raw = r#"[{"Name": "Amit", "Department": "Finance"}, {"Name": "Priya", "Department": "HR"}]"#;
        let table = JsonDirSource::parse_table("human_capital", raw).unwrap();
        assert_eq!(table.columns(), &["Name".to_string(), "Department".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].get("Name"), Some(&json!("Priya")));
    }

    #[test]
    fn test_parse_table_keeps_source_column_order() {
        // Keys are deliberately out of alphabetical order; the table and
        // every record must keep them as written in the file.
        let raw = r#"[{"Name": "Amit", "Department": "Finance", "Base_Salary": 90000}]"#;
        let table = JsonDirSource::parse_table("human_capital", raw).unwrap();
        assert_eq!(
            table.columns(),
            &["Name".to_string(), "Department".to_string(), "Base_Salary".to_string()]
        );
        let fields: Vec<&str> =
            table.rows()[0].fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(fields, ["Name", "Department", "Base_Salary"]);
    }

    #[test]
    fn test_parse_table_rejects_non_array() {
        let err = JsonDirSource::parse_table("assets", r#"{"oops": true}"#).unwrap_err();
        assert!(matches!(err, BotError::Store(_)));
    }

    #[test]
    fn test_parse_table_rejects_non_object_row() {
        let err = JsonDirSource::parse_table("assets", r#"[1, 2]"#).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDirSource::new(dir.path());
        assert!(source.load_table("debt").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, r#"[{"Asset": "Laptop", "Location": "Gurgaon"}]"#).unwrap();

        let source = JsonDirSource::new(dir.path());
        let table = source.load_table("assets").await.unwrap().unwrap();
        assert_eq!(table.name(), "assets");
        assert_eq!(table.rows()[0].get_str("Location"), "Gurgaon");
    }
}
