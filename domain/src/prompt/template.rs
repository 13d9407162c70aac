//! Prompt templates for the design agents

use crate::agent::result::AgentResult;
use crate::agent::role::{ImageRole, TextRole};
use crate::brief::RoomBrief;

/// Templates for generating prompts for each agent role
///
/// All functions are pure and total. Brief fields are inserted exactly as
/// submitted.
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt shared by the specialist agents
    pub fn designer_system() -> &'static str {
        "You are a senior interior designer. Answer in clean Markdown with headings and bullet points."
    }

    /// System prompt for the client summary
    pub fn summary_system() -> &'static str {
        "You summarize interior designs for non-technical clients in simple English."
    }

    /// System prompt for a text role
    pub fn system_for(role: TextRole) -> &'static str {
        match role {
            TextRole::Summarizer => Self::summary_system(),
            _ => Self::designer_system(),
        }
    }

    /// The brief as a labelled block, one field per line
    pub fn brief_block(brief: &RoomBrief) -> String {
        let photo = brief
            .reference_photo()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Room description: {}\nPreferred style: {}\nPurpose: {}\nBudget: {}\nReference photo: {}",
            brief.description(),
            brief.style(),
            Self::purpose_or_none(brief),
            brief.budget(),
            photo
        )
    }

    /// The brief's purpose, or `none` when it was left blank
    fn purpose_or_none(brief: &RoomBrief) -> &str {
        match brief.purpose() {
            p if p.trim().is_empty() => "none",
            p => p,
        }
    }

    /// User prompt for one of the specialist agents
    pub fn specialist_prompt(role: TextRole, brief: &RoomBrief) -> String {
        format!(
            r#"You are {} for interior design.

{}

Provide a clear, structured plan in bullet points.
Be specific and practical, not generic."#,
            role.expertise(),
            Self::brief_block(brief)
        )
    }

    /// User prompt for the client summary
    ///
    /// `specialists` are the results of the specialist agents from the same
    /// run; failed ones are listed as unavailable so the summarizer does not
    /// invent their content.
    pub fn summary_prompt(brief: &RoomBrief, specialists: &[AgentResult]) -> String {
        let mut prompt = format!(
            r#"You are {}.

Create a friendly summary (max 2 paragraphs + bullet list)
for this client based on:

{}
"#,
            TextRole::Summarizer.expertise(),
            Self::brief_block(brief)
        );

        if !specialists.is_empty() {
            prompt.push_str("\nSpecialist notes:\n");
            for result in specialists {
                match (result.as_text(), result.failure_reason()) {
                    (Some(text), _) => {
                        prompt.push_str(&format!(
                            "\n--- {} ---\n{}\n",
                            result.role.display_name(),
                            text
                        ));
                    }
                    (None, reason) => {
                        prompt.push_str(&format!(
                            "\n--- {} ---\n(unavailable: {})\n",
                            result.role.display_name(),
                            reason.unwrap_or("no content")
                        ));
                    }
                }
            }
        }

        prompt.push_str(
            r#"
The summary should highlight:
- main layout idea
- key furniture choices
- key color palette and materials"#,
        );

        prompt
    }

    /// Prompt for an image role
    pub fn image_prompt(role: ImageRole, brief: &RoomBrief) -> String {
        let style = brief.style();
        let description = brief.description();
        let purpose = Self::purpose_or_none(brief);
        let budget = brief.budget();
        match role {
            ImageRole::FurnitureBoard => format!(
                "Moodboard showing ONLY individual furniture pieces for a {} room. \
                 Room description: {}. Purpose: {}. Budget: {}. \
                 Pinterest style, clean white background, no people, focus on items.",
                style, description, purpose, budget
            ),
            ImageRole::ColorBoard => format!(
                "Color palette board + materials for a {} interior. \
                 Room description: {}. Purpose: {}. \
                 Show swatches, fabrics, wood, metal, stone, organized nicely.",
                style, description, purpose
            ),
            ImageRole::LightingBoard => format!(
                "Lighting mood board for a {} interior. Warm cozy cinematic lighting, \
                 focus on lamps, wall lights, ceiling lights that match: {}.",
                style, description
            ),
            ImageRole::Render => {
                let reference = if brief.reference_photo().is_some() {
                    " Keep the layout and architecture of the attached reference photo."
                } else {
                    ""
                };
                // "a Modern Hosting guests room"; a blank purpose is left out
                let room = match brief.purpose().trim() {
                    "" => format!("{} room", style),
                    purpose => format!("{} {} room", style, purpose),
                };
                format!(
                    "Ultra realistic 3D render of a {}, budget {}. {}. \
                     Cinematic lighting, Pinterest style, no people, wide angle.{}",
                    room, budget, description, reference
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{BriefDraft, PhotoUpload};

    fn brief() -> RoomBrief {
        BriefDraft::new("Cozy living room 4x5m, beige & brown tones")
            .with_style("Luxury")
            .with_purpose("Hosting guests")
            .with_budget(42_000)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_specialist_prompt_contains_brief() {
        let brief = brief();
        for role in TextRole::SPECIALISTS {
            let prompt = PromptTemplate::specialist_prompt(role, &brief);
            assert!(prompt.contains(role.expertise()));
            assert!(prompt.contains("Cozy living room 4x5m, beige & brown tones"));
            assert!(prompt.contains("Preferred style: Luxury"));
            assert!(prompt.contains("Purpose: Hosting guests"));
            assert!(prompt.contains("Budget: 42000 SAR"));
            assert!(prompt.contains("Reference photo: none"));
        }
    }

    #[test]
    fn test_summary_prompt_includes_specialist_notes() {
        let specialists = vec![
            AgentResult::text(TextRole::Architect, "Sofa faces the window."),
            AgentResult::failure(TextRole::Furniture, "rate limited"),
            AgentResult::text(TextRole::Colorist, "Warm beige walls."),
        ];
        let prompt = PromptTemplate::summary_prompt(&brief(), &specialists);
        assert!(prompt.contains("--- Architect Plan ---\nSofa faces the window."));
        assert!(prompt.contains("--- Furniture Plan ---\n(unavailable: rate limited)"));
        assert!(prompt.contains("Warm beige walls."));
        assert!(prompt.contains("key color palette and materials"));
    }

    #[test]
    fn test_blank_purpose_renders_as_none() {
        let brief = BriefDraft::new("Small bedroom").validate().unwrap();
        let prompt = PromptTemplate::specialist_prompt(TextRole::Architect, &brief);
        assert!(prompt.contains("Purpose: none\n"));
    }

    #[test]
    fn test_blank_purpose_in_image_prompts() {
        let brief = BriefDraft::new("Room").validate().unwrap();

        let furniture = PromptTemplate::image_prompt(ImageRole::FurnitureBoard, &brief);
        assert!(furniture.contains("Room description: Room. Purpose: none. Budget: 15000 SAR."));
        let colors = PromptTemplate::image_prompt(ImageRole::ColorBoard, &brief);
        assert!(colors.contains("Purpose: none. Show swatches"));

        let render = PromptTemplate::image_prompt(ImageRole::Render, &brief);
        assert!(render.starts_with("Ultra realistic 3D render of a Modern room, budget 15000 SAR."));
        assert!(!render.contains("  "));
        assert!(!render.contains("none"));
    }

    #[test]
    fn test_summary_prompt_without_notes() {
        let prompt = PromptTemplate::summary_prompt(&brief(), &[]);
        assert!(!prompt.contains("Specialist notes:"));
        assert!(prompt.contains("Room description: Cozy living room"));
    }

    #[test]
    fn test_image_prompts_mention_style() {
        let brief = brief();
        for role in ImageRole::MOODBOARD {
            assert!(PromptTemplate::image_prompt(role, &brief).contains("Luxury"));
        }
        let render = PromptTemplate::image_prompt(ImageRole::Render, &brief);
        assert!(render.starts_with("Ultra realistic 3D render of a Luxury Hosting guests room"));
        assert!(render.contains("budget 42000 SAR"));
        assert!(!render.contains("reference photo"));
    }

    #[test]
    fn test_render_prompt_mentions_reference_photo() {
        let brief = BriefDraft::new("Small bedroom")
            .with_reference_photo(PhotoUpload::new("room.png", vec![1, 2]))
            .validate()
            .unwrap();
        let render = PromptTemplate::image_prompt(ImageRole::Render, &brief);
        assert!(render.contains("attached reference photo"));
        let text = PromptTemplate::specialist_prompt(TextRole::Architect, &brief);
        assert!(text.contains("Reference photo: attached (image/png, 2 bytes)"));
    }

    #[test]
    fn test_system_prompts() {
        assert_eq!(
            PromptTemplate::system_for(TextRole::Summarizer),
            PromptTemplate::summary_system()
        );
        assert_eq!(
            PromptTemplate::system_for(TextRole::Colorist),
            PromptTemplate::designer_system()
        );
    }
}
