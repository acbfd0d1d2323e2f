/// Adapter syntax profiles
///
/// Each debug-adapter flavor accepts a different textual command syntax.
/// This module keeps those differences in one read-only table so adding an
/// adapter is a table entry, not a new branch scattered across the crate.

use crate::types::AdapterKind;

/// Syntax rules for one adapter flavor.
#[derive(Debug, Clone, Copy)]
pub struct AdapterProfile {
    /// Whether the debugger can load the visualization script at all.
    pub supports_scripting: bool,
    /// Prefix required before any console command sent through `evaluate`.
    pub command_prefix: Option<&'static str>,
    /// Name of the injected visualization subcommand.
    pub vis_command: &'static str,
    /// Builds the script-load command from an already-escaped path.
    /// None when scripting is unsupported.
    pub source_command: Option<fn(&str) -> String>,
}

const GDB_MI: AdapterProfile = AdapterProfile {
    supports_scripting: true,
    command_prefix: Some("-exec "),
    vis_command: "vis",
    source_command: Some(|path| format!("-exec source {}", path)),
};

const GDB: AdapterProfile = AdapterProfile {
    supports_scripting: true,
    command_prefix: None,
    vis_command: "vis",
    source_command: Some(|path| format!("source {}", path)),
};

const LLDB: AdapterProfile = AdapterProfile {
    supports_scripting: true,
    command_prefix: Some("`"),
    vis_command: "vis",
    source_command: Some(|path| format!("`command script import \"{}\"", path)),
};

const CPP_VS_DBG: AdapterProfile = AdapterProfile {
    supports_scripting: false,
    command_prefix: None,
    vis_command: "vis",
    source_command: None,
};

// Conservative default for adapters we have never seen: assume no scripting,
// use the generic MI execute prefix.
const UNKNOWN: AdapterProfile = AdapterProfile {
    supports_scripting: false,
    command_prefix: Some("-exec "),
    vis_command: "vis",
    source_command: None,
};

/// Look up the syntax profile for an adapter kind. Total: every kind,
/// including [`AdapterKind::Other`], maps to a usable profile.
pub fn lookup(kind: AdapterKind) -> &'static AdapterProfile {
    match kind {
        AdapterKind::GdbMi => &GDB_MI,
        AdapterKind::Gdb => &GDB,
        AdapterKind::Lldb => &LLDB,
        AdapterKind::CppVsDbg => &CPP_VS_DBG,
        AdapterKind::Other => &UNKNOWN,
    }
}
