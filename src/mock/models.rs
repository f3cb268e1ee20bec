use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag the web interface uses to recognise structured output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "gemini-response")]
    GeminiResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[default]
    #[serde(rename = "assistant")]
    Assistant,
}

/// One line of mocked assistant output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Map<String, Value>,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub content: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub id: String,
}

impl ResponseEvent {
    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            kind: EventKind::GeminiResponse,
            message: AssistantMessage {
                role: Role::Assistant,
                content,
            },
        }
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn trailing_text(&self) -> Option<&str> {
        match self.message.content.last() {
            Some(ContentBlock::Text { text }) => Some(text),
            _ => None,
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.message
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse { name, .. } => Some(name.as_str()),
                ContentBlock::Text { .. } => None,
            })
            .collect()
    }
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Build a tool_use block from any serializable input struct. The input
    /// must serialize to a JSON object.
    pub fn tool_use<T: Serialize>(
        id: impl Into<String>,
        name: &str,
        input: &T,
    ) -> serde_json::Result<Self> {
        let input = match serde_json::to_value(input)? {
            Value::Object(map) => map,
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "input for tool {} must be a JSON object, got {}",
                    name, other
                )))
            }
        };
        Ok(ContentBlock::ToolUse {
            id: id.into(),
            name: name.to_string(),
            input,
        })
    }
}
