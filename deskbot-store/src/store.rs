use crate::source::TableSource;
use crate::table::Table;
use deskbot_core::{BotError, Result};

/// The six accounting tables, in search order.
pub const ACCOUNTING_TABLES: [&str; 6] = [
    "assets",
    "chart_of_accounts",
    "debt",
    "human_capital",
    "profit_and_loss",
    "transactions",
];

/// The support knowledge-base table.
pub const SUPPORT_TABLE: &str = "support_knowledge";

/// Read-only collection of tables, populated once at startup and shared
/// for the process lifetime. Iteration order is load order, which
/// accounting search results depend on.
#[derive(Debug, Clone)]
pub struct TabularStore {
    tables: Vec<Table>,
}

impl TabularStore {
    /// Build a store from pre-loaded tables (tests and fixtures).
    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Bulk-load every required table from the source.
    ///
    /// A missing required table is a fatal startup error: the process
    /// must not start serving without its data.
    pub async fn load_all(source: &dyn TableSource) -> Result<Self> {
        let mut tables = Vec::with_capacity(ACCOUNTING_TABLES.len() + 1);

        for name in ACCOUNTING_TABLES.iter().chain(std::iter::once(&SUPPORT_TABLE)) {
            let table = source.load_table(name).await?.ok_or_else(|| {
                BotError::Store(format!("Required table missing from source: {name}"))
            })?;
            tracing::info!(table = name, rows = table.len(), "Loaded table");
            tables.push(table);
        }

        Ok(Self { tables })
    }

    /// Lookup by name. Absence is "no data", never an error.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    /// The accounting tables present in the store, in load order.
    pub fn accounting_tables(&self) -> impl Iterator<Item = &Table> {
        ACCOUNTING_TABLES.iter().filter_map(|name| self.get(name))
    }

    pub fn support_table(&self) -> Option<&Table> {
        self.get(SUPPORT_TABLE)
    }
}
