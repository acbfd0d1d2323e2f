/// External collaborator seams
///
/// The bridge never owns a debugger process. It talks to the debug session,
/// the debugger view and the structured-payload parser through the traits in
/// this module; production wires them to the editor's debug machinery and
/// tests wire them to scripted fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{AdapterKind, VisualizationOutcome};

#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("{0}")]
    Evaluate(String),
    #[error("debug session terminated")]
    SessionTerminated,
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// Evaluation mode requested from the session transport.
///
/// The bridge always asks for [`EvalContext::Repl`]: watch-context replies
/// get truncated for display and would cut the payload short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalContext {
    Repl,
    Watch,
}

impl EvalContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalContext::Repl => "repl",
            EvalContext::Watch => "watch",
        }
    }
}

/// A live debug session able to evaluate expressions.
#[async_trait]
pub trait DebugSession: Send + Sync {
    /// Evaluate `expression` in the given stack frame (or a frame-agnostic
    /// context when `frame_id` is `None`) and return the raw reply text.
    async fn evaluate(
        &self,
        expression: &str,
        frame_id: Option<i64>,
        context: EvalContext,
    ) -> Result<String>;
}

/// Read-only view onto the debugger UI state.
pub trait DebuggerView: Send + Sync {
    /// Identifier of the stack frame currently focused by the user, if any.
    fn active_frame_id(&self) -> Option<i64>;
}

/// Options forwarded alongside cleaned text to the payload parser.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub adapter_kind: AdapterKind,
    pub preferred_extractor: Option<String>,
}

/// The generic structured-payload parser, consumed as a black box.
pub trait PayloadParser: Send + Sync {
    /// Interpret cleaned reply text as a structured payload, or explain why
    /// it is not one.
    fn parse(&self, cleaned: &str, options: &ParseOptions) -> VisualizationOutcome;
}

/// Minimal parser satisfying the [`PayloadParser`] contract: accepts any
/// JSON object and rejects everything else with a displayable message.
#[derive(Debug, Default)]
pub struct JsonPayloadParser;

impl PayloadParser for JsonPayloadParser {
    fn parse(&self, cleaned: &str, _options: &ParseOptions) -> VisualizationOutcome {
        match serde_json::from_str::<serde_json::Value>(cleaned) {
            Ok(value) if value.is_object() => VisualizationOutcome::data(value),
            Ok(other) => VisualizationOutcome::error(crate::types::DisplayableMessage::text(
                format!("Expected a JSON object payload, got: {}", other),
            )),
            Err(err) => VisualizationOutcome::error(crate::types::DisplayableMessage::inline(vec![
                crate::types::DisplayableMessage::text("Reply is not a structured payload:"),
                crate::types::DisplayableMessage::code(truncate_for_display(cleaned)),
                crate::types::DisplayableMessage::text(format!("({})", err)),
            ])),
        }
    }
}

// Keep pasted reply excerpts short enough to read in an error bubble.
fn truncate_for_display(text: &str) -> String {
    const LIMIT: usize = 120;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let cut: String = text.chars().take(LIMIT).collect();
        format!("{}…", cut)
    }
}
