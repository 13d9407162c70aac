//! Progress reporting for plan runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use studio_application::ports::progress::ProgressNotifier;
use studio_domain::{AgentRole, PlanPhase};

/// Reports progress during a plan run with one bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_label(phase: PlanPhase) -> String {
        let index = match phase {
            PlanPhase::Specialists => 1,
            PlanPhase::Summary => 2,
            PlanPhase::Visuals => 3,
        };
        format!("Phase {}: {}", index, phase.display_name())
    }

    fn phase_bar(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.phase_bar.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: PlanPhase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_label(phase));
        pb.set_message("Starting...");

        *self.phase_bar() = Some(pb);
    }

    fn on_task_complete(&self, _phase: PlanPhase, role: AgentRole, success: bool) {
        if let Some(pb) = self.phase_bar().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), role.display_name())
            } else {
                format!("{} {}", "x".red(), role.display_name())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: PlanPhase) {
        if let Some(pb) = self.phase_bar().take() {
            pb.finish_with_message(format!("{} done", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: PlanPhase, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_label(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: PlanPhase, role: AgentRole, success: bool) {
        if success {
            println!("  {} {}", "v".green(), role.display_name());
        } else {
            println!("  {} {} (failed)", "x".red(), role.display_name());
        }
    }

    fn on_phase_complete(&self, _phase: PlanPhase) {
        println!();
    }
}
