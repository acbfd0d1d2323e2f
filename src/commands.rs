/// Command construction for debugger backends
///
/// Pure functions that turn an adapter kind plus an input into the exact
/// textual command the adapter expects. Nothing here talks to a session.

use crate::profile;
use crate::types::AdapterKind;

/// Commands the injected script adds for GIF recording of a visualization.
pub const GIF_START: &str = "gif_start";
pub const GIF_FRAME: &str = "gif_frame";
pub const GIF_STOP: &str = "gif_stop";

/// Build the one-time script-installation command for an adapter.
///
/// Returns `None` when the adapter cannot load scripts; callers use that as
/// the signal to skip injection entirely. Backslashes in `script_path` are
/// escaped here; callers must pass the path unescaped.
pub fn build_install_command(kind: AdapterKind, script_path: &str) -> Option<String> {
    let profile = profile::lookup(kind);
    let source = profile.source_command?;
    Some(source(&escape_path(script_path)))
}

/// Wrap a user expression in the adapter's visualization-subcommand syntax.
///
/// The expression is trimmed first. When the adapter cannot run the script
/// the trimmed expression is returned unchanged; the orchestrator sends that
/// as a plain evaluation on the fallback path.
pub fn build_visualize_command(kind: AdapterKind, expression: &str) -> String {
    let expression = expression.trim();
    let profile = profile::lookup(kind);
    if !profile.supports_scripting {
        return expression.to_string();
    }
    build_script_command(kind, &format!("{} {}", profile.vis_command, expression))
}

/// Wrap an arbitrary injected-script command line (e.g. `vis head` or
/// `gif_start`) with the adapter's required command prefix.
pub fn build_script_command(kind: AdapterKind, command_line: &str) -> String {
    let profile = profile::lookup(kind);
    match profile.command_prefix {
        Some(prefix) => format!("{}{}", prefix, command_line),
        None => command_line.to_string(),
    }
}

/// Escape path separators the adapters' command grammars treat specially.
/// Windows-style backslashes must be doubled exactly once.
fn escape_path(path: &str) -> String {
    path.replace('\\', "\\\\")
}
