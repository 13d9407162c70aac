//! Output formatter trait

use studio_domain::DesignPlan;

/// Trait for formatting design plans
pub trait OutputFormatter {
    /// Format every section of the plan
    fn format(&self, plan: &DesignPlan) -> String;

    /// Format as JSON
    fn format_json(&self, plan: &DesignPlan) -> String;

    /// Format the client overview only (concise output)
    fn format_summary_only(&self, plan: &DesignPlan) -> String;
}
