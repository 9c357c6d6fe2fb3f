//! Wire types for the OpenAI-compatible chat completions endpoint, plus
//! conversions to and from the core message types.

use deskbot_core::{BotError, ChatRequest, ChatResponse, Message, Result, Role, ToolSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

/// Function payload of a tool call. Arguments travel as a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDef,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<WireTool>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: WireMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    }
}

pub fn message_to_wire(msg: &Message) -> WireMessage {
    let tool_calls = if msg.tool_calls.is_empty() {
        None
    } else {
        Some(
            msg.tool_calls
                .iter()
                .map(|call| WireToolCall {
                    id: call.id.clone(),
                    call_type: "function".to_string(),
                    function: FunctionCall {
                        name: call.name.clone(),
                        arguments: call.args.to_string(),
                    },
                })
                .collect(),
        )
    };

    WireMessage {
        role: role_name(msg.role).to_string(),
        content: Some(msg.content.clone()),
        tool_calls,
        tool_call_id: msg.tool_call_id.clone(),
    }
}

pub fn build_request(model: &str, req: &ChatRequest, max_tokens: Option<u32>) -> ChatCompletionRequest {
    let tools = if req.tools.is_empty() {
        None
    } else {
        Some(req.tools.iter().map(tool_to_wire).collect())
    };

    ChatCompletionRequest {
        model: model.to_string(),
        messages: req.messages.iter().map(message_to_wire).collect(),
        temperature: req.temperature,
        max_tokens: req.max_tokens.or(max_tokens),
        tools,
    }
}

fn tool_to_wire(spec: &ToolSpec) -> WireTool {
    WireTool {
        tool_type: "function".to_string(),
        function: FunctionDef {
            name: spec.name.clone(),
            description: spec.description.clone(),
            parameters: spec.parameters.clone(),
        },
    }
}

/// Convert the first choice of a completion response into a
/// [`ChatResponse`]. Tool-call arguments that are not valid JSON are a
/// model-side defect and reported as a model error.
pub fn response_from_wire(resp: ChatCompletionResponse) -> Result<ChatResponse> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| BotError::Model("completion response has no choices".to_string()))?;

    let mut tool_calls = Vec::new();
    for call in choice.message.tool_calls.unwrap_or_default() {
        let args: Value = serde_json::from_str(&call.function.arguments).map_err(|e| {
            BotError::Model(format!(
                "tool call {} has malformed arguments: {e}",
                call.function.name
            ))
        })?;
        tool_calls.push(deskbot_core::ToolCall::new(call.id, call.function.name, args));
    }

    Ok(ChatResponse {
        content: choice.message.content.unwrap_or_default(),
        tool_calls,
    })
}
