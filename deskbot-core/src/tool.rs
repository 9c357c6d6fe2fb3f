use crate::{Result, ToolSpec};
use async_trait::async_trait;
use serde_json::Value;

/// The closed set of tools known to the system.
///
/// Model output carries tool names as strings; `parse` maps them into
/// this enum and anything unrecognized becomes `None`, which callers
/// treat as a recoverable no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchAccounting,
    SearchSupport,
}

impl ToolName {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "search_accounting" => Some(Self::SearchAccounting),
            "search_support" => Some(Self::SearchSupport),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchAccounting => "search_accounting",
            Self::SearchSupport => "search_support",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named capability an agent can execute on the model's behalf.
///
/// The description is part of the public contract: the model reads it to
/// decide when and how to call the tool, so it carries the full usage
/// instructions, not just a summary.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> ToolName;
    fn description(&self) -> &str;

    /// JSON schema of the arguments object.
    fn parameters_schema(&self) -> Value;

    /// Execute with the model-supplied arguments.
    ///
    /// Errors returned here are converted to `"Error: ..."` strings by
    /// the caller; nothing crosses the tool boundary as an exception.
    async fn execute(&self, args: &Value) -> Result<String>;

    /// The declaration handed to the completion capability.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().as_str().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// Run a tool, folding any failure into a user-safe string.
pub async fn execute_to_string(tool: &dyn Tool, args: &Value) -> String {
    match tool.execute(args).await {
        Ok(result) => result,
        Err(e) => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BotError;
    use serde_json::json;

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> ToolName {
            ToolName::SearchSupport
        }

        fn description(&self) -> &str {
            "always fails"
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: &Value) -> Result<String> {
            Err(BotError::Tool("boom".to_string()))
        }
    }

    #[test]
    fn test_tool_name_parse() {
        assert_eq!(ToolName::parse("search_accounting"), Some(ToolName::SearchAccounting));
        assert_eq!(ToolName::parse("search_support"), Some(ToolName::SearchSupport));
        assert_eq!(ToolName::parse("search_weather"), None);
        assert_eq!(ToolName::parse(""), None);
    }

    #[test]
    fn test_tool_name_roundtrip() {
        for name in [ToolName::SearchAccounting, ToolName::SearchSupport] {
            assert_eq!(ToolName::parse(name.as_str()), Some(name));
        }
    }

    #[tokio::test]
    async fn test_execute_to_string_wraps_errors() {
        let result = execute_to_string(&FailingTool, &json!({})).await;
        assert_eq!(result, "Error: Tool error: boom");
    }

    #[test]
    fn test_spec_uses_enum_name() {
        let spec = FailingTool.spec();
        assert_eq!(spec.name, "search_support");
        assert_eq!(spec.description, "always fails");
    }
}
