/// Core data types for the visualization bridge
///
/// This module defines the adapter-kind tags, request/outcome types and the
/// displayable message tree shared by the rest of the crate.

use serde::{Deserialize, Serialize};

/// Flavor of the debug adapter backing a session.
///
/// Immutable for the life of a session; derived from the adapter-type string
/// the debug session reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterKind {
    /// GDB behind an MI driver (e.g. the `cppdbg` adapter); console commands
    /// need the `-exec` escape.
    GdbMi,
    /// GDB talked to directly, plain console syntax.
    Gdb,
    /// LLDB with a command-escape prefix.
    Lldb,
    /// MSVC-style native debugger; no scripting mechanism at all.
    CppVsDbg,
    /// Anything we have never heard of. Degrades, never crashes.
    Other,
}

impl AdapterKind {
    /// Map a debug session's adapter-type string to a kind.
    ///
    /// Unrecognized strings map to [`AdapterKind::Other`] so that unknown
    /// adapters degrade to the conservative default profile.
    pub fn from_session_type(session_type: &str) -> Self {
        match session_type {
            "cppdbg" => AdapterKind::GdbMi,
            "gdb" | "gdbserver" | "native-debug" => AdapterKind::Gdb,
            "lldb" | "lldb-mi" | "lldb-dap" => AdapterKind::Lldb,
            "cppvsdbg" => AdapterKind::CppVsDbg,
            _ => AdapterKind::Other,
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AdapterKind::GdbMi => "cppdbg",
            AdapterKind::Gdb => "gdb",
            AdapterKind::Lldb => "lldb",
            AdapterKind::CppVsDbg => "cppvsdbg",
            AdapterKind::Other => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A single visualization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationRequest {
    /// The expression to visualize, as typed by the user.
    pub expression: String,
    /// Optional extractor preference forwarded to the payload parser.
    pub preferred_extractor: Option<String>,
}

impl VisualizationRequest {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            preferred_extractor: None,
        }
    }

    pub fn with_extractor(mut self, extractor: impl Into<String>) -> Self {
        self.preferred_extractor = Some(extractor.into());
        self
    }
}

/// Result of a visualization request: either a structured payload ready for
/// rendering, or a displayable explanation of what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisualizationOutcome {
    Data { result: serde_json::Value },
    Error { message: DisplayableMessage },
}

impl VisualizationOutcome {
    pub fn data(result: serde_json::Value) -> Self {
        VisualizationOutcome::Data { result }
    }

    pub fn error(message: DisplayableMessage) -> Self {
        VisualizationOutcome::Error { message }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, VisualizationOutcome::Data { .. })
    }
}

/// A small recursive tree of renderable message nodes.
///
/// Everything the bridge reports to the user is one of these, so failure
/// paths can mix prose, pasteable commands and step lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum DisplayableMessage {
    /// Plain prose.
    Text(String),
    /// A command or snippet the user can paste verbatim.
    Code(String),
    /// Numbered steps, rendered in order.
    OrderedList(Vec<DisplayableMessage>),
    /// Fragments joined on one line.
    Inline(Vec<DisplayableMessage>),
}

impl DisplayableMessage {
    pub fn text(s: impl Into<String>) -> Self {
        DisplayableMessage::Text(s.into())
    }

    pub fn code(s: impl Into<String>) -> Self {
        DisplayableMessage::Code(s.into())
    }

    pub fn ordered(items: Vec<DisplayableMessage>) -> Self {
        DisplayableMessage::OrderedList(items)
    }

    pub fn inline(items: Vec<DisplayableMessage>) -> Self {
        DisplayableMessage::Inline(items)
    }
}

impl std::fmt::Display for DisplayableMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayableMessage::Text(s) => write!(f, "{}", s),
            DisplayableMessage::Code(s) => write!(f, "`{}`", s),
            DisplayableMessage::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}. {}", i + 1, item)?;
                }
                Ok(())
            }
            DisplayableMessage::Inline(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_kind_from_session_type() {
        assert_eq!(AdapterKind::from_session_type("cppdbg"), AdapterKind::GdbMi);
        assert_eq!(AdapterKind::from_session_type("gdb"), AdapterKind::Gdb);
        assert_eq!(AdapterKind::from_session_type("lldb"), AdapterKind::Lldb);
        assert_eq!(
            AdapterKind::from_session_type("cppvsdbg"),
            AdapterKind::CppVsDbg
        );
        assert_eq!(
            AdapterKind::from_session_type("mock-debugger"),
            AdapterKind::Other
        );
    }

    #[test]
    fn test_display_message_rendering() {
        let msg = DisplayableMessage::inline(vec![
            DisplayableMessage::text("Run"),
            DisplayableMessage::code("-exec source vis.py"),
            DisplayableMessage::text("manually."),
        ]);
        assert_eq!(msg.to_string(), "Run `-exec source vis.py` manually.");
    }

    #[test]
    fn test_display_ordered_list_rendering() {
        let msg = DisplayableMessage::ordered(vec![
            DisplayableMessage::text("first"),
            DisplayableMessage::text("second"),
        ]);
        assert_eq!(msg.to_string(), "1. first\n2. second");
    }

    #[test]
    fn test_outcome_serialization_shape() {
        let outcome = VisualizationOutcome::data(serde_json::json!({"kind": {"graph": true}}));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "data");
        assert!(json["result"]["kind"]["graph"].as_bool().unwrap());
    }
}
