//! The two search tools the domain agents can invoke.
//!
//! Both take a single `query` string and always hand back a usable
//! string; internal failures surface as an `"Error: ..."` text through
//! [`deskbot_core::execute_to_string`], never as a panic or a raw error
//! crossing the tool boundary.

use async_trait::async_trait;
use deskbot_core::{BotError, Result, Tool, ToolName};
use deskbot_search::SearchEngine;
use serde_json::{json, Value};

const ACCOUNTING_DESCRIPTION: &str = "\
Search accounting/financial data across all tables.

Searches for any matching text in:
- assets: Assets and equipment
- chart_of_accounts: Chart of accounts
- debt: Debt information
- human_capital: Employee data (names, salaries, departments, etc.)
- profit_and_loss: Profit and loss
- transactions: Transactions

Examples:
- \"amit kumar\" or \"amit\" -> finds employee records
- \"base salary\" -> finds salary information
- \"gurgaon\" -> finds location-based records
- Use employee names, amounts, dates, departments, or any relevant keywords.";

const SUPPORT_DESCRIPTION: &str = "\
Search the smart metering support knowledge base for relevant customer queries \
and evidence-based answers.

This tool runs a combined keyword and simple semantic-style search over the \
support table and returns up to 3 relevance-ranked chunks. Each chunk contains \
up to 5 rows, and each row includes Customer_Query, Evidence_Based_Answer and \
Category.

Intended usage:
- ALWAYS call this tool first for any smart metering support question
- Pass the user's full question as the `query`
- Read all returned chunks and pick the single most relevant row
- Use the row's Evidence_Based_Answer as the core of your reply, paraphrasing \
in natural language
- Use Category (e.g., Billing & Accuracy, Reliability & Outages) to frame the \
explanation

If the result string contains \"No matching support records found.\", tell the \
user that no exact match exists in the knowledge base and either ask a brief \
clarifying question or give only high-level, non-fabricated guidance.";

fn query_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Free-text search query"
            }
        },
        "required": ["query"]
    })
}

fn query_arg(args: &Value) -> Result<&str> {
    args.get("query")
        .and_then(Value::as_str)
        .ok_or_else(|| BotError::Tool("missing string argument 'query'".to_string()))
}

/// Unranked substring search over every accounting table.
pub struct SearchAccountingTool {
    engine: SearchEngine,
}

impl SearchAccountingTool {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for SearchAccountingTool {
    fn name(&self) -> ToolName {
        ToolName::SearchAccounting
    }

    fn description(&self) -> &str {
        ACCOUNTING_DESCRIPTION
    }

    fn parameters_schema(&self) -> Value {
        query_schema()
    }

    async fn execute(&self, args: &Value) -> Result<String> {
        Ok(self.engine.search_accounting(query_arg(args)?, None))
    }
}

/// Ranked search over the support knowledge base.
pub struct SearchSupportTool {
    engine: SearchEngine,
}

impl SearchSupportTool {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for SearchSupportTool {
    fn name(&self) -> ToolName {
        ToolName::SearchSupport
    }

    fn description(&self) -> &str {
        SUPPORT_DESCRIPTION
    }

    fn parameters_schema(&self) -> Value {
        query_schema()
    }

    async fn execute(&self, args: &Value) -> Result<String> {
        Ok(self.engine.search_support(query_arg(args)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskbot_core::execute_to_string;
    use deskbot_store::{Record, Table, TabularStore};
    use std::sync::Arc;

    fn engine() -> SearchEngine {
        let table = Table::new(
            "human_capital",
            vec!["Name".to_string()],
            vec![Record::new(vec![("Name".to_string(), json!("Amit Kumar"))])],
        );
        SearchEngine::new(Arc::new(TabularStore::from_tables(vec![table])))
    }

    #[tokio::test]
    async fn test_accounting_tool_executes_query() {
        let tool = SearchAccountingTool::new(engine());
        let out = tool.execute(&json!({"query": "amit"})).await.unwrap();
        assert!(out.contains("Amit Kumar"));
    }

    #[tokio::test]
    async fn test_missing_query_becomes_error_string() {
        let tool = SearchAccountingTool::new(engine());
        let out = execute_to_string(&tool, &json!({})).await;
        assert!(out.starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_support_tool_without_table() {
        let tool = SearchSupportTool::new(engine());
        let out = tool.execute(&json!({"query": "meter"})).await.unwrap();
        assert_eq!(out, "Support data not loaded.");
    }

    #[test]
    fn test_tool_specs_carry_schema() {
        let tool = SearchSupportTool::new(engine());
        let spec = tool.spec();
        assert_eq!(spec.name, "search_support");
        assert_eq!(spec.parameters["required"][0], "query");
    }
}
