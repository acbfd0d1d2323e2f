/// Error triage for raw debugger failure text
///
/// Debuggers report failures as free-form prose whose wording differs per
/// backend and version. This module pattern-matches that prose into a small
/// set of actionable diagnoses. The rule list is ordered data: first match
/// wins, because real error strings routinely satisfy several heuristics.

use crate::commands::build_install_command;
use crate::types::{AdapterKind, DisplayableMessage};

/// Everything the classifier may weave into its guidance.
#[derive(Debug, Clone)]
pub struct ClassifyContext<'a> {
    pub expression: &'a str,
    pub command_sent: &'a str,
    pub adapter_kind: AdapterKind,
    pub script_path: &'a str,
}

struct Rule {
    /// Lowercased substrings; any hit selects this rule.
    patterns: &'static [&'static str],
    build: fn(&str, &ClassifyContext) -> DisplayableMessage,
}

// Order matters: "Undefined command: \"vis\"" also contains wording the
// scope rule could loosely match in some backends, and scripting-support
// errors mention "command" too. Tuning means editing this table only.
const RULES: &[Rule] = &[
    Rule {
        patterns: &[
            "no symbol",
            "not in current context",
            "use of undeclared identifier",
            "cannot find variable",
            "identifier is undefined",
        ],
        build: variable_not_in_scope,
    },
    Rule {
        patterns: &[
            "undefined command",
            "undefined mi command",
            "is not a valid command",
            "unrecognized command",
        ],
        build: script_not_loaded,
    },
    Rule {
        patterns: &[
            "python scripting is not supported",
            "python is not initialized",
            "not compiled with python",
            "scripting is not available",
        ],
        build: scripting_unavailable,
    },
];

/// Map raw debugger error text to displayable guidance. Total: text no rule
/// recognizes falls through to a generic diagnostic carrying the raw error,
/// the adapter kind and the exact command that was sent.
pub fn classify(raw_error: &str, ctx: &ClassifyContext<'_>) -> DisplayableMessage {
    let haystack = raw_error.to_lowercase();
    for rule in RULES {
        if rule.patterns.iter().any(|p| haystack.contains(p)) {
            return (rule.build)(raw_error, ctx);
        }
    }
    generic_failure(raw_error, ctx)
}

fn variable_not_in_scope(_raw: &str, ctx: &ClassifyContext<'_>) -> DisplayableMessage {
    DisplayableMessage::inline(vec![
        DisplayableMessage::code(ctx.expression.to_string()),
        DisplayableMessage::text(
            "is not visible from the debugger's current position. \
             Pause at a breakpoint where the variable is in scope, then try again.",
        ),
    ])
}

fn script_not_loaded(_raw: &str, ctx: &ClassifyContext<'_>) -> DisplayableMessage {
    let mut parts = vec![DisplayableMessage::text(
        "The visualization script is not loaded in this debug session.",
    )];
    match build_install_command(ctx.adapter_kind, ctx.script_path) {
        Some(install) => {
            parts.push(DisplayableMessage::text(
                "Paste this into the debug console to load it manually:",
            ));
            parts.push(DisplayableMessage::code(install));
        }
        None => parts.push(DisplayableMessage::text(
            "This debugger type cannot load it automatically.",
        )),
    }
    DisplayableMessage::inline(parts)
}

fn scripting_unavailable(_raw: &str, ctx: &ClassifyContext<'_>) -> DisplayableMessage {
    DisplayableMessage::inline(vec![
        DisplayableMessage::text(format!(
            "Your {} binary was built without Python scripting, which the \
             visualizer needs.",
            ctx.adapter_kind
        )),
        DisplayableMessage::ordered(vec![
            DisplayableMessage::inline(vec![
                DisplayableMessage::text("Debian/Ubuntu:"),
                DisplayableMessage::code("sudo apt install gdb"),
            ]),
            DisplayableMessage::inline(vec![
                DisplayableMessage::text("macOS:"),
                DisplayableMessage::code("brew install gdb"),
            ]),
            DisplayableMessage::text(
                "Windows (MSYS2): install the mingw-w64 gdb package, which \
                 bundles Python.",
            ),
        ]),
    ])
}

fn generic_failure(raw: &str, ctx: &ClassifyContext<'_>) -> DisplayableMessage {
    DisplayableMessage::inline(vec![
        DisplayableMessage::text(format!(
            "Visualization failed on the {} adapter:",
            ctx.adapter_kind
        )),
        DisplayableMessage::code(raw.to_string()),
        DisplayableMessage::text("Command sent:"),
        DisplayableMessage::code(ctx.command_sent.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(kind: AdapterKind) -> ClassifyContext<'static> {
        ClassifyContext {
            expression: "foo",
            command_sent: "-exec vis foo",
            adapter_kind: kind,
            script_path: "/opt/vis/universal_vis.py",
        }
    }

    #[test]
    fn test_classify_symbol_not_in_scope() {
        let msg = classify(
            "No symbol \"foo\" in current context.",
            &ctx(AdapterKind::GdbMi),
        );
        let rendered = msg.to_string();
        assert!(rendered.contains("not visible"));
        assert!(rendered.contains("`foo`"));
        // Must not fall through to the generic diagnostic.
        assert!(!rendered.contains("Command sent"));
    }

    #[test]
    fn test_classify_lldb_wording_hits_scope_rule() {
        let msg = classify(
            "error: use of undeclared identifier 'foo'",
            &ctx(AdapterKind::Lldb),
        );
        assert!(msg.to_string().contains("not visible"));
    }

    #[test]
    fn test_classify_script_not_loaded_embeds_install_command() {
        let msg = classify("Undefined command: \"vis\".", &ctx(AdapterKind::GdbMi));
        let rendered = msg.to_string();
        assert!(rendered.contains("script is not loaded"));
        assert!(rendered.contains("`-exec source /opt/vis/universal_vis.py`"));
    }

    #[test]
    fn test_classify_missing_python_support() {
        let msg = classify(
            "Python scripting is not supported in this copy of GDB.",
            &ctx(AdapterKind::Gdb),
        );
        let rendered = msg.to_string();
        assert!(rendered.contains("without Python scripting"));
        assert!(rendered.contains("sudo apt install gdb"));
    }

    #[test]
    fn test_classify_order_prefers_scope_over_command_rule() {
        // Mentions both a missing symbol and a command; the scope rule is
        // first and must win.
        let msg = classify(
            "No symbol \"vis\" in current context (undefined command).",
            &ctx(AdapterKind::Gdb),
        );
        assert!(msg.to_string().contains("not visible"));
    }

    #[test]
    fn test_classify_generic_fallback_carries_context() {
        let msg = classify("Cannot access memory at address 0x0", &ctx(AdapterKind::Gdb));
        let rendered = msg.to_string();
        assert!(rendered.contains("gdb adapter"));
        assert!(rendered.contains("Cannot access memory"));
        assert!(rendered.contains("`-exec vis foo`"));
    }
}
