/// Per-session injection lifecycle
///
/// Installing the visualization script is a once-per-session affair: success
/// is permanent, and both "this debugger can't do it" and "the attempt blew
/// up" are remembered so a broken session never turns into a retry storm.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

use crate::commands::build_install_command;
use crate::transport::{DebugSession, EvalContext};
use crate::types::AdapterKind;

/// Where a session stands with respect to script installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionPhase {
    /// No visualization request has hit this session yet.
    NotAttempted,
    /// The script is loaded; permanent for the life of the session.
    Injected,
    /// The adapter cannot load scripts; structural, terminal.
    Unsupported,
    /// The install command failed; terminal under the no-retry policy.
    Failed(String),
}

/// Injection state for one debug session.
pub struct SessionInjection {
    kind: AdapterKind,
    script_path: String,
    phase: AsyncMutex<InjectionPhase>,
}

impl SessionInjection {
    pub fn new(kind: AdapterKind, script_path: impl Into<String>) -> Self {
        Self {
            kind,
            script_path: script_path.into(),
            phase: AsyncMutex::new(InjectionPhase::NotAttempted),
        }
    }

    pub fn adapter_kind(&self) -> AdapterKind {
        self.kind
    }

    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    /// Make sure the script is installed, attempting installation at most
    /// once for the life of this state record. Returns true iff the session
    /// is (now) injected.
    ///
    /// The phase lock is held across the install await, so concurrent
    /// callers on a cold session share one in-flight attempt instead of
    /// racing duplicate `source` commands into the debugger.
    pub async fn ensure_injected(
        &self,
        session: &dyn DebugSession,
        frame_id: Option<i64>,
    ) -> bool {
        let mut phase = self.phase.lock().await;
        match &*phase {
            InjectionPhase::Injected => true,
            InjectionPhase::Unsupported | InjectionPhase::Failed(_) => false,
            InjectionPhase::NotAttempted => {
                let Some(install) = build_install_command(self.kind, &self.script_path) else {
                    log::debug!("INJECT[{}]: scripting unsupported, skipping", self.kind);
                    *phase = InjectionPhase::Unsupported;
                    return false;
                };
                log::debug!("INJECT[{}]: sending install command: {}", self.kind, install);
                match session.evaluate(&install, frame_id, EvalContext::Repl).await {
                    Ok(_) => {
                        log::debug!("INJECT[{}]: script installed", self.kind);
                        *phase = InjectionPhase::Injected;
                        true
                    }
                    Err(err) => {
                        log::warn!("INJECT[{}]: install failed: {}", self.kind, err);
                        *phase = InjectionPhase::Failed(err.to_string());
                        false
                    }
                }
            }
        }
    }

    /// Current phase snapshot.
    pub async fn phase(&self) -> InjectionPhase {
        self.phase.lock().await.clone()
    }

    /// The remembered install failure, if the attempt failed.
    pub async fn last_error(&self) -> Option<String> {
        match &*self.phase.lock().await {
            InjectionPhase::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}

/// Explicit owner of per-session injection state.
///
/// State records are created on a session's first visualization request and
/// dropped when the caller reports the session gone; nothing outlives its
/// session and nothing is shared across sessions.
#[derive(Default)]
pub struct InjectionRegistry {
    sessions: Mutex<HashMap<String, Arc<SessionInjection>>>,
}

impl InjectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the state record for a session, creating it on first use.
    pub fn state_for(
        &self,
        session_id: &str,
        kind: AdapterKind,
        script_path: &str,
    ) -> Arc<SessionInjection> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                log::debug!("REGISTRY: new injection state for session {}", session_id);
                Arc::new(SessionInjection::new(kind, script_path))
            })
            .clone()
    }

    /// Drop a session's state record. Call when the debug session ends.
    pub fn dispose(&self, session_id: &str) {
        if self.sessions.lock().unwrap().remove(session_id).is_some() {
            log::debug!("REGISTRY: disposed injection state for session {}", session_id);
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
