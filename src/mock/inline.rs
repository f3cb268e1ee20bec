use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::{
    ContentBlock, MockRequest, Reply, ResponseEvent, ResponseSource, TodoItem, TodoPriority,
    TodoStatus,
};

const SAMPLE_FILE: &str = "src/components/ChatInterface.jsx";

#[derive(Serialize)]
struct ReadParams<'a> {
    file_path: &'a str,
}

#[derive(Serialize)]
struct WriteParams<'a> {
    file_path: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct BashParams<'a> {
    command: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct TodoWriteParams {
    todos: Vec<TodoItem>,
}

/// Two built-in events: a read-then-write file edit, and a shell command
/// followed by a todo list update. Both end with a text block echoing the
/// prompt.
#[derive(Default)]
pub struct InlineSource;

impl InlineSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn tool_id() -> String {
        format!("toolu_{}", Uuid::new_v4().simple())
    }

    fn file_edit_event(request: &MockRequest<'_>) -> serde_json::Result<ResponseEvent> {
        Ok(ResponseEvent::assistant(vec![
            ContentBlock::tool_use(
                Self::tool_id(),
                "Read",
                &ReadParams {
                    file_path: SAMPLE_FILE,
                },
            )?,
            ContentBlock::tool_use(
                Self::tool_id(),
                "Write",
                &WriteParams {
                    file_path: SAMPLE_FILE,
                    content: "// Updated by Mock Gemini\nexport default function ChatInterface() {}\n",
                },
            )?,
            ContentBlock::text(format!(
                "I read and updated {}. {}",
                SAMPLE_FILE,
                request.echo_text()
            )),
        ]))
    }

    fn shell_and_todo_event(request: &MockRequest<'_>) -> serde_json::Result<ResponseEvent> {
        let todos = vec![
            TodoItem {
                content: "Inspect project layout".to_string(),
                status: TodoStatus::Completed,
                priority: TodoPriority::High,
                id: "1".to_string(),
            },
            TodoItem {
                content: "Apply requested change".to_string(),
                status: TodoStatus::InProgress,
                priority: TodoPriority::High,
                id: "2".to_string(),
            },
            TodoItem {
                content: "Run the test suite".to_string(),
                status: TodoStatus::Pending,
                priority: TodoPriority::Medium,
                id: "3".to_string(),
            },
        ];

        Ok(ResponseEvent::assistant(vec![
            ContentBlock::tool_use(
                Self::tool_id(),
                "Bash",
                &BashParams {
                    command: "ls -la",
                    description: "List files in the project root",
                },
            )?,
            ContentBlock::tool_use(Self::tool_id(), "TodoWrite", &TodoWriteParams { todos })?,
            ContentBlock::text(format!("Updated the task list. {}", request.echo_text())),
        ]))
    }
}

#[async_trait]
impl ResponseSource for InlineSource {
    fn name(&self) -> &'static str {
        "inline"
    }

    async fn respond(&self, request: &MockRequest<'_>) -> Result<Reply> {
        Ok(Reply::Events(vec![
            Self::file_edit_event(request)?,
            Self::shell_and_todo_event(request)?,
        ]))
    }
}
