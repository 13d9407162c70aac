//! Progress notification port
//!
//! Defines the interface for reporting progress during a plan run.

use studio_domain::{AgentRole, PlanPhase};

/// Callback for progress updates during a plan run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: PlanPhase, total_tasks: usize);

    /// Called when one agent request finishes within a phase
    fn on_task_complete(&self, phase: PlanPhase, role: AgentRole, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: PlanPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: PlanPhase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: PlanPhase, _role: AgentRole, _success: bool) {}
    fn on_phase_complete(&self, _phase: PlanPhase) {}
}
