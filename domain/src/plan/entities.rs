//! Design plan - the aggregate of all agent results for one submission.

use crate::agent::result::AgentResult;
use crate::agent::role::{AgentRole, ImageRole, TextRole};
use crate::brief::RoomBrief;
use serde::{Deserialize, Serialize};

/// Complete result of one plan run (Aggregate)
///
/// Built once per submission. Every slot holds either content or a failure
/// marker; a plan is never partially updated or merged with another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPlan {
    /// The brief the plan was generated for
    pub brief: RoomBrief,
    /// Client summary
    pub summary: AgentResult,
    /// Layout plan
    pub architect: AgentResult,
    /// Furniture and budget plan
    pub furniture: AgentResult,
    /// Color palette and materials
    pub colors: AgentResult,
    /// Moodboard images in display order (empty when visuals were off)
    #[serde(default)]
    pub moodboard: Vec<AgentResult>,
    /// Full room render
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<AgentResult>,
}

impl DesignPlan {
    /// Plan with text slots only.
    pub fn new(
        brief: RoomBrief,
        summary: AgentResult,
        architect: AgentResult,
        furniture: AgentResult,
        colors: AgentResult,
    ) -> Self {
        Self {
            brief,
            summary,
            architect,
            furniture,
            colors,
            moodboard: Vec::new(),
            render: None,
        }
    }

    /// Attach moodboard images.
    pub fn with_moodboard(mut self, moodboard: Vec<AgentResult>) -> Self {
        self.moodboard = moodboard;
        self
    }

    /// Attach the full render.
    pub fn with_render(mut self, render: AgentResult) -> Self {
        self.render = Some(render);
        self
    }

    /// Text slot for a role.
    pub fn text_slot(&self, role: TextRole) -> &AgentResult {
        match role {
            TextRole::Architect => &self.architect,
            TextRole::Furniture => &self.furniture,
            TextRole::Colorist => &self.colors,
            TextRole::Summarizer => &self.summary,
        }
    }

    /// Text slots in display order: summary first, then the specialists.
    pub fn text_slots(&self) -> [&AgentResult; 4] {
        [&self.summary, &self.architect, &self.furniture, &self.colors]
    }

    /// Image result for a role, if one was requested.
    pub fn image_slot(&self, role: ImageRole) -> Option<&AgentResult> {
        match role {
            ImageRole::Render => self.render.as_ref(),
            board => self
                .moodboard
                .iter()
                .find(|r| r.role == AgentRole::Image(board)),
        }
    }

    /// All image results: moodboard then render.
    pub fn image_results(&self) -> impl Iterator<Item = &AgentResult> {
        self.moodboard.iter().chain(self.render.iter())
    }

    /// Every result in the plan.
    pub fn all_results(&self) -> impl Iterator<Item = &AgentResult> {
        self.text_slots().into_iter().chain(self.image_results())
    }

    /// Returns an iterator over only the failed results.
    pub fn failed_results(&self) -> impl Iterator<Item = &AgentResult> {
        self.all_results().filter(|r| !r.is_success())
    }

    /// Whether any image was requested for this plan.
    pub fn has_visuals(&self) -> bool {
        !self.moodboard.is_empty() || self.render.is_some()
    }

    /// Whether every request behind this plan succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed_results().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::BriefDraft;

    fn text_only_plan() -> DesignPlan {
        let brief = BriefDraft::new("Study").validate().unwrap();
        DesignPlan::new(
            brief,
            AgentResult::text(TextRole::Summarizer, "summary"),
            AgentResult::text(TextRole::Architect, "layout"),
            AgentResult::failure(TextRole::Furniture, "timeout"),
            AgentResult::text(TextRole::Colorist, "palette"),
        )
    }

    #[test]
    fn test_text_slots_order() {
        let plan = text_only_plan();
        let roles: Vec<_> = plan.text_slots().iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["summarizer", "architect", "furniture", "colorist"]);
        assert_eq!(plan.text_slot(TextRole::Colorist).as_text(), Some("palette"));
    }

    #[test]
    fn test_failed_results() {
        let plan = text_only_plan();
        let failed: Vec<_> = plan.failed_results().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].failure_reason(), Some("timeout"));
        assert!(!plan.is_complete());
        assert!(!plan.has_visuals());
    }

    #[test]
    fn test_image_slots() {
        let plan = text_only_plan()
            .with_moodboard(vec![
                AgentResult::image(ImageRole::FurnitureBoard, vec![1]),
                AgentResult::failure(ImageRole::ColorBoard, "decode"),
            ])
            .with_render(AgentResult::image(ImageRole::Render, vec![2]));
        assert!(plan.has_visuals());
        assert_eq!(plan.image_results().count(), 3);
        assert_eq!(
            plan.image_slot(ImageRole::FurnitureBoard).and_then(|r| r.as_image()),
            Some(&[1u8][..])
        );
        assert!(plan.image_slot(ImageRole::LightingBoard).is_none());
        assert!(plan.image_slot(ImageRole::Render).is_some());
        assert_eq!(plan.all_results().count(), 7);
    }
}
