//! The agent contract: [`Agent`] trait and the shared [`AgentCore`] state.
//!
//! Every concrete agent embeds an `AgentCore` and implements the three
//! mandatory operations. A type that leaves out `analyze`, `plan` or
//! `execute` does not compile, so no half-implemented agent can exist.
//!
//! Callers are expected to run `analyze → plan → execute`, feeding each
//! result into the next call. The contract does not enforce that order.
//!
//! ```
//! use bmad_agent_contract::{
//!     Agent, AgentCore, AgentState, Capability, ExecutionContext, ExecutionResult, Scope,
//! };
//!
//! struct Echo {
//!     core: AgentCore,
//! }
//!
//! impl Echo {
//!     fn respond(&mut self, capability: Capability) -> ExecutionResult {
//!         let result = ExecutionResult::succeeded(self.agent_id(), capability, 1.0);
//!         self.record_result(result.clone());
//!         result
//!     }
//! }
//!
//! impl Agent for Echo {
//!     fn core(&self) -> &AgentCore { &self.core }
//!     fn state(&mut self) -> AgentState<'_> { self.core.state() }
//!
//!     fn analyze(&mut self, _context: &ExecutionContext) -> ExecutionResult {
//!         self.respond(Capability::Analysis)
//!     }
//!     fn plan(&mut self, _context: &ExecutionContext, _analysis: &ExecutionResult) -> ExecutionResult {
//!         self.respond(Capability::Planning)
//!     }
//!     fn execute(&mut self, _context: &ExecutionContext, _plan: &ExecutionResult) -> ExecutionResult {
//!         self.respond(Capability::Implementation)
//!     }
//! }
//!
//! let mut agent = Echo {
//!     core: AgentCore::new("echo", vec![Capability::Analysis], Scope::FileSpecific),
//! };
//! let ctx = ExecutionContext::new("/tmp/project", "library", "say hello");
//! assert!(agent.validate_context(&ctx));
//!
//! let analysis = agent.analyze(&ctx);
//! let plan = agent.plan(&ctx, &analysis);
//! agent.execute(&ctx, &plan);
//! assert_eq!(agent.execution_history().len(), 3);
//! ```

use tracing::{debug, error, info};

use crate::capability::{Capability, Scope};
use crate::config::AgentConfig;
use crate::context::ExecutionContext;
use crate::history::ExecutionHistory;
use crate::logger::AgentLogger;
use crate::result::ExecutionResult;

/// Confidence returned by [`Agent::can_handle_task`] unless overridden.
pub const DEFAULT_TASK_CONFIDENCE: f64 = 0.5;

/// Languages accepted by [`Agent::supports_language`] unless overridden.
pub const DEFAULT_SUPPORTED_LANGUAGES: [&str; 3] = ["python", "javascript", "typescript"];

/// Boxed agent for dynamic dispatch.
pub type BoxedAgent = Box<dyn Agent>;

/// State shared by every agent: identity, tags, logger, history and the
/// currently attached context.
///
/// Identity, capabilities and scope are fixed at construction. The only
/// mutable access is through [`AgentState`], which can record results and
/// attach or clear the context but never replace the core itself.
#[derive(Debug)]
pub struct AgentCore {
    agent_id: String,
    capabilities: Vec<Capability>,
    scope: Scope,
    logger: AgentLogger,
    history: ExecutionHistory,
    context: Option<ExecutionContext>,
}

impl AgentCore {
    /// Core with default config: unbounded history, logger `bmad.agent.<id>`.
    pub fn new(agent_id: impl Into<String>, capabilities: Vec<Capability>, scope: Scope) -> Self {
        Self::from_config(agent_id, capabilities, scope, &AgentConfig::default())
    }

    /// Core using an injected logger. `config` still supplies the history
    /// limit; its logger prefix is ignored.
    pub fn with_logger(
        agent_id: impl Into<String>,
        capabilities: Vec<Capability>,
        scope: Scope,
        logger: AgentLogger,
        config: &AgentConfig,
    ) -> Self {
        Self::build(
            agent_id.into(),
            capabilities,
            scope,
            logger,
            ExecutionHistory::with_limit(config.history_limit),
        )
    }

    /// Core whose logger prefix and history limit come from `config`.
    pub fn from_config(
        agent_id: impl Into<String>,
        capabilities: Vec<Capability>,
        scope: Scope,
        config: &AgentConfig,
    ) -> Self {
        let agent_id = agent_id.into();
        let logger = AgentLogger::for_agent(&config.logger_prefix, &agent_id);
        Self::build(
            agent_id,
            capabilities,
            scope,
            logger,
            ExecutionHistory::with_limit(config.history_limit),
        )
    }

    fn build(
        agent_id: String,
        capabilities: Vec<Capability>,
        scope: Scope,
        logger: AgentLogger,
        history: ExecutionHistory,
    ) -> Self {
        let tags: Vec<&str> = capabilities.iter().map(Capability::as_str).collect();
        logger.in_scope(|| {
            info!(
                agent_id = %agent_id,
                scope = %scope,
                "initialized agent {} with capabilities: {:?}",
                agent_id,
                tags
            )
        });

        Self {
            agent_id,
            capabilities,
            scope,
            logger,
            history,
            context: None,
        }
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn logger(&self) -> &AgentLogger {
        &self.logger
    }

    pub fn history(&self) -> &ExecutionHistory {
        &self.history
    }

    pub fn context(&self) -> Option<&ExecutionContext> {
        self.context.as_ref()
    }

    /// Mutable handle for the owning agent's [`Agent::state`].
    pub fn state(&mut self) -> AgentState<'_> {
        AgentState { core: self }
    }

    fn set_context(&mut self, context: ExecutionContext) {
        self.context = Some(context);
    }

    /// Check the required context fields, logging the first one missing.
    pub fn validate_context(&self, context: &ExecutionContext) -> bool {
        match context.missing_required_field() {
            Some(field) => {
                self.logger.in_scope(|| {
                    error!(
                        agent_id = %self.agent_id,
                        field = %field,
                        "missing required context field: {}",
                        field
                    )
                });
                false
            }
            None => true,
        }
    }

    fn record(&mut self, result: ExecutionResult) {
        let agent_id = &self.agent_id;
        self.logger.in_scope(|| {
            if result.success {
                info!(
                    agent_id = %agent_id,
                    confidence = result.confidence_score,
                    findings = result.findings.len(),
                    recommendations = result.recommendations.len(),
                    "agent {} completed successfully, confidence: {:.2}, findings: {}, recommendations: {}",
                    agent_id,
                    result.confidence_score,
                    result.findings.len(),
                    result.recommendations.len()
                );
            } else {
                error!(
                    agent_id = %agent_id,
                    "agent {} failed: {}",
                    agent_id,
                    result.error_details.as_deref().unwrap_or("no error details")
                );
            }
        });

        let evicted = self.history.push(result);
        if evicted > 0 {
            self.logger.in_scope(|| {
                debug!(
                    agent_id = %self.agent_id,
                    evicted,
                    retained = self.history.len(),
                    "history limit reached, evicted oldest entries"
                )
            });
        }
    }

    fn reset(&mut self) {
        self.context = None;
        self.logger
            .in_scope(|| debug!(agent_id = %self.agent_id, "agent {} state reset", self.agent_id));
    }
}

/// Narrow mutable view of an [`AgentCore`].
///
/// Exposes the three mutations the contract allows: appending to history,
/// attaching a context and clearing it. The core behind it cannot be read
/// out or replaced, so identity, tags and past history survive any caller
/// holding `&mut dyn Agent`.
///
/// ```compile_fail
/// use bmad_agent_contract::{Agent, AgentCore, BoxedAgent, Capability, Scope};
///
/// fn swap_core(agent: &mut BoxedAgent) {
///     *agent.state() = AgentCore::new("impostor", vec![Capability::Analysis], Scope::FileSpecific);
/// }
/// ```
#[derive(Debug)]
pub struct AgentState<'a> {
    core: &'a mut AgentCore,
}

impl AgentState<'_> {
    /// Append `result` to history and log its outcome. The only history mutator.
    pub fn record(self, result: ExecutionResult) {
        self.core.record(result);
    }

    pub fn set_context(self, context: ExecutionContext) {
        self.core.set_context(context);
    }

    /// Drop the attached context. History is kept.
    pub fn reset(self) {
        self.core.reset();
    }
}

/// Contract every BMAD agent satisfies.
///
/// Implementors expose their [`AgentCore`] read-only through `core`, hand
/// out an [`AgentState`] through `state`, and provide the three mandatory
/// operations. Everything else has a default that agents may
/// override. Operations that record history take `&mut self`; callers
/// sharing an agent across threads must add their own lock.
pub trait Agent {
    fn core(&self) -> &AgentCore;

    fn state(&mut self) -> AgentState<'_>;

    /// Inspect `context` and report findings and recommendations.
    fn analyze(&mut self, context: &ExecutionContext) -> ExecutionResult;

    /// Turn a prior analysis into a plan, expressed through
    /// `recommendations` and `next_steps`.
    fn plan(
        &mut self,
        context: &ExecutionContext,
        analysis_result: &ExecutionResult,
    ) -> ExecutionResult;

    /// Carry out a prior plan and report the outcome.
    fn execute(
        &mut self,
        context: &ExecutionContext,
        plan_result: &ExecutionResult,
    ) -> ExecutionResult;

    fn agent_id(&self) -> &str {
        self.core().agent_id()
    }

    fn capabilities(&self) -> &[Capability] {
        self.core().capabilities()
    }

    fn scope(&self) -> Scope {
        self.core().scope()
    }

    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// `false` (with an error log naming the field) if `project_path`,
    /// `project_type` or `current_task` is missing.
    fn validate_context(&self, context: &ExecutionContext) -> bool {
        self.core().validate_context(context)
    }

    /// Confidence in `0.0..=1.0` that this agent can take on the task.
    fn can_handle_task(&self, _task_description: &str, _context: &ExecutionContext) -> f64 {
        DEFAULT_TASK_CONFIDENCE
    }

    /// Ids of agents that must run before this one. Declarative only.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    fn supports_language(&self, language: &str) -> bool {
        DEFAULT_SUPPORTED_LANGUAGES
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(language))
    }

    fn supports_framework(&self, _framework: &str) -> bool {
        false
    }

    /// Copy of the history; mutating it does not affect the agent.
    fn execution_history(&self) -> Vec<ExecutionResult> {
        self.core().history().to_vec()
    }

    fn context(&self) -> Option<&ExecutionContext> {
        self.core().context()
    }

    fn set_context(&mut self, context: ExecutionContext) {
        self.state().set_context(context);
    }

    /// Clear the attached context for the next task. History is untouched.
    fn reset_state(&mut self) {
        self.state().reset();
    }

    /// Append `result` to history and log the outcome.
    fn record_result(&mut self, result: ExecutionResult) {
        self.state().record(result);
    }
}
