/// Visualization bridge for textual debug adapters
///
/// This crate turns "evaluate this expression and give me a visualizable
/// value" requests into the textual command/reply dance that GDB-, LLDB- and
/// MSVC-style debug adapters actually speak: it installs a visualization
/// script into the debugger once per session, wraps expressions in the
/// script's `vis` command, scrubs adapter decoration off the reply, and
/// hands the embedded JSON to a payload parser. Every failure becomes an
/// actionable displayable message; nothing escapes as a panic or raw error.

use std::sync::Arc;

pub mod classify;
pub mod commands;
pub mod normalize;
pub mod profile;
pub mod script;
pub mod session;
pub mod transport;
pub mod types;

pub use session::{InjectionPhase, InjectionRegistry, SessionInjection};
pub use transport::{
    DebugSession, DebuggerView, EvalContext, JsonPayloadParser, ParseOptions, PayloadParser,
    TransportError,
};
pub use types::{AdapterKind, DisplayableMessage, VisualizationOutcome, VisualizationRequest};

use classify::{classify, ClassifyContext};

/// Per-session orchestrator: the crate's entire public entry point.
///
/// One instance per debug session, owning that session's collaborators and
/// sharing the session's injection state record (usually handed out by an
/// [`InjectionRegistry`]). Each visualization request is an independent unit
/// of work; only the injection state is remembered between calls.
pub struct Visualizer<S, V, P> {
    session: S,
    view: V,
    parser: P,
    injection: Arc<SessionInjection>,
}

impl<S, V, P> Visualizer<S, V, P>
where
    S: DebugSession,
    V: DebuggerView,
    P: PayloadParser,
{
    pub fn new(session: S, view: V, parser: P, injection: Arc<SessionInjection>) -> Self {
        Self {
            session,
            view,
            parser,
            injection,
        }
    }

    /// Evaluate `request.expression` and produce a structured payload or a
    /// displayable explanation of why there is none.
    ///
    /// Suspends only while awaiting the session transport. Never panics and
    /// never surfaces a raw transport error.
    pub async fn get_visualization_data(
        &self,
        request: &VisualizationRequest,
    ) -> VisualizationOutcome {
        let frame_id = self.view.active_frame_id();
        let kind = self.injection.adapter_kind();

        if !self.injection.ensure_injected(&self.session, frame_id).await {
            return self.raw_fallback(request, frame_id).await;
        }

        let command = commands::build_visualize_command(kind, &request.expression);
        log::debug!("VIS[{}]: sending: {}", kind, command);

        match self
            .session
            .evaluate(&command, frame_id, EvalContext::Repl)
            .await
        {
            Ok(reply) => {
                let cleaned = normalize::clean(&reply);
                self.parser.parse(&cleaned, &self.parse_options(request))
            }
            Err(err) => {
                log::warn!("VIS[{}]: evaluate failed: {}", kind, err);
                VisualizationOutcome::error(classify(
                    &err.to_string(),
                    &ClassifyContext {
                        expression: request.expression.trim(),
                        command_sent: &command,
                        adapter_kind: kind,
                        script_path: self.injection.script_path(),
                    },
                ))
            }
        }
    }

    /// Degraded path for sessions without the script: evaluate the bare
    /// expression and hope the reply parses; otherwise explain the injection
    /// failure with the remembered reason and a manual remedy.
    async fn raw_fallback(
        &self,
        request: &VisualizationRequest,
        frame_id: Option<i64>,
    ) -> VisualizationOutcome {
        let kind = self.injection.adapter_kind();
        let expression = request.expression.trim();
        log::debug!("VIS[{}]: fallback raw evaluation: {}", kind, expression);

        match self
            .session
            .evaluate(expression, frame_id, EvalContext::Repl)
            .await
        {
            Ok(reply) => {
                let outcome = self
                    .parser
                    .parse(&normalize::clean(&reply), &self.parse_options(request));
                if outcome.is_data() {
                    outcome
                } else {
                    self.injection_failed_message().await
                }
            }
            Err(err) => {
                log::warn!("VIS[{}]: fallback evaluate failed: {}", kind, err);
                self.injection_failed_message().await
            }
        }
    }

    async fn injection_failed_message(&self) -> VisualizationOutcome {
        let kind = self.injection.adapter_kind();
        let mut parts = vec![DisplayableMessage::text(
            "No visualization data: the visualization script is not installed \
             in this debug session.",
        )];
        match self.injection.phase().await {
            InjectionPhase::Failed(reason) => {
                parts.push(DisplayableMessage::text("Installing it failed with:"));
                parts.push(DisplayableMessage::code(reason));
            }
            InjectionPhase::Unsupported => {
                parts.push(DisplayableMessage::text(format!(
                    "The {} adapter cannot load debugger scripts.",
                    kind
                )));
            }
            _ => {}
        }
        if let Some(install) =
            commands::build_install_command(kind, self.injection.script_path())
        {
            parts.push(DisplayableMessage::text(
                "You can try loading it manually from the debug console:",
            ));
            parts.push(DisplayableMessage::code(install));
        }
        VisualizationOutcome::error(DisplayableMessage::inline(parts))
    }

    fn parse_options(&self, request: &VisualizationRequest) -> ParseOptions {
        ParseOptions {
            adapter_kind: self.injection.adapter_kind(),
            preferred_extractor: request.preferred_extractor.clone(),
        }
    }
}
