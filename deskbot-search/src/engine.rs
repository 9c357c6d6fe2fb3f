use crate::format::render_rows;
use crate::keywords::{derive_keywords, jaccard};
use deskbot_store::{Record, TabularStore, Table};
use std::collections::HashSet;
use std::sync::Arc;

const NO_ACCOUNTING_MATCH: &str = "No matching records found. Try searching with different \
     keywords like employee name, department, amount, or date.";
const NO_SUPPORT_MATCH: &str = "No matching support records found.";
const SUPPORT_COLUMNS: [&str; 3] = ["Customer_Query", "Evidence_Based_Answer", "Category"];

const CHUNK_SIZE: usize = 5;
const MAX_CHUNKS: usize = 3;
const TOP_ROWS: usize = CHUNK_SIZE * MAX_CHUNKS;

/// Lexical search over the shared store. Both policies are pure
/// functions of the query and the store contents; given identical
/// inputs they always produce identical output.
#[derive(Clone)]
pub struct SearchEngine {
    store: Arc<TabularStore>,
}

impl SearchEngine {
    pub fn new(store: Arc<TabularStore>) -> Self {
        Self { store }
    }

    /// Accounting policy: unranked substring filter, optionally
    /// restricted to one table. An unknown table name falls through to
    /// the all-tables search rather than failing.
    pub fn search_accounting(&self, query: &str, table: Option<&str>) -> String {
        let keywords = derive_keywords(query);
        tracing::debug!(query, keywords = ?keywords, "accounting search");

        if let Some(name) = table {
            if let Some(table) = self.store.get(name) {
                let hits = matching_rows(table, &keywords);
                if hits.is_empty() {
                    return format!("No matching records found in {name}.");
                }
                return table_block(table, &hits);
            }
        }

        let mut blocks = self.blocks_for(&keywords);

        // Multi-keyword queries that matched nothing are retried with
        // the first keyword alone, trading precision for recall.
        if blocks.is_empty() && keywords.len() > 1 {
            blocks = self.blocks_for(&keywords[..1]);
        }

        if blocks.is_empty() {
            NO_ACCOUNTING_MATCH.to_string()
        } else {
            blocks.join("\n")
        }
    }

    /// Support policy: hybrid keyword + token-overlap scoring, ranked
    /// descending and rendered as up to three chunks of five rows.
    pub fn search_support(&self, query: &str) -> String {
        let Some(table) = self.store.support_table() else {
            return "Support data not loaded.".to_string();
        };
        if table.is_empty() || query.trim().is_empty() {
            return NO_SUPPORT_MATCH.to_string();
        }

        let keywords = derive_keywords(query);
        tracing::debug!(query, keywords = ?keywords, "support search");

        let mut scored: Vec<(f64, &Record)> = table
            .rows()
            .iter()
            .filter_map(|row| {
                let score = score_row(row, &keywords);
                (score > 0.0).then_some((score, row))
            })
            .collect();
        if scored.is_empty() {
            return NO_SUPPORT_MATCH.to_string();
        }

        // Stable sort keeps original row order for equal scores.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(TOP_ROWS);

        let columns: Vec<String> = SUPPORT_COLUMNS.iter().map(|c| c.to_string()).collect();
        let mut chunks = Vec::new();
        for group in scored.chunks(CHUNK_SIZE).take(MAX_CHUNKS) {
            let max_score = group.iter().fold(0.0_f64, |acc, (s, _)| acc.max(*s));
            let rows: Vec<&Record> = group.iter().map(|(_, r)| *r).collect();
            chunks.push(format!(
                "\n=== Chunk {} (approx. relevance score: {max_score:.2}) ===\n{}",
                chunks.len() + 1,
                render_rows(&columns, &rows),
            ));
        }
        chunks.join("\n")
    }

    fn blocks_for(&self, keywords: &[String]) -> Vec<String> {
        self.store
            .accounting_tables()
            .filter_map(|table| {
                let hits = matching_rows(table, keywords);
                (!hits.is_empty()).then(|| table_block(table, &hits))
            })
            .collect()
    }
}

fn matching_rows<'a>(table: &'a Table, keywords: &[String]) -> Vec<&'a Record> {
    table
        .rows()
        .iter()
        .filter(|row| {
            let text = row.values_text().join(" ").to_lowercase();
            keywords.iter().any(|kw| text.contains(kw.as_str()))
        })
        .collect()
}

fn table_block(table: &Table, rows: &[&Record]) -> String {
    format!("\n{}:\n{}\n", table.name(), render_rows(table.columns(), rows))
}

fn score_row(row: &Record, keywords: &[String]) -> f64 {
    let text = format!(
        "{} {}",
        row.get_str("Customer_Query").to_lowercase(),
        row.get_str("Evidence_Based_Answer").to_lowercase(),
    );

    let distinct: HashSet<&str> = keywords.iter().map(String::as_str).collect();
    let keyword_score = distinct.iter().filter(|kw| text.contains(**kw)).count() as f64;

    let row_tokens: Vec<&str> =
        text.split_whitespace().filter(|t| t.chars().count() > 2).collect();
    keyword_score + jaccard(&row_tokens, keywords)
}
