//! Console output formatter for design plans

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use studio_domain::{AgentResult, AgentStatus, DesignPlan, ImageRole, OutputFormat};

/// Formats design plans for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render in the requested format
    pub fn render(plan: &DesignPlan, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(plan),
            OutputFormat::Summary => Self::format_summary_only(plan),
            OutputFormat::Json => Self::format_json(plan),
        }
    }

    /// Format the complete plan
    pub fn format(plan: &DesignPlan) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Interior Studio Design Plan"));
        output.push('\n');
        output.push_str(&Self::brief_lines(plan));

        for slot in plan.text_slots() {
            output.push_str(&Self::section_header(slot.role.display_name()));
            output.push_str(&Self::text_body(slot));
        }

        if plan.has_visuals() {
            output.push_str(&Self::section_header("AI Moodboard"));
            for image in &plan.moodboard {
                output.push_str(&Self::image_line(image));
            }

            if let Some(render) = &plan.render {
                output.push_str(&Self::section_header(ImageRole::Render.display_name()));
                output.push_str(&Self::image_line(render));
            }
        }

        let failed = plan.failed_results().count();
        if failed > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} section(s) could not be generated.", failed)
                    .yellow()
                    .bold()
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(plan: &DesignPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the client overview only (concise output)
    pub fn format_summary_only(plan: &DesignPlan) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Your Design Overview ===".cyan().bold()
        ));
        output.push_str(&Self::brief_lines(plan));
        output.push('\n');
        output.push_str(&Self::text_body(&plan.summary));

        output
    }

    fn brief_lines(plan: &DesignPlan) -> String {
        let brief = &plan.brief;
        let mut lines = format!(
            "{} {}\n{} {}\n",
            "Room:".cyan().bold(),
            brief.description(),
            "Style:".cyan().bold(),
            brief.style()
        );
        if !brief.purpose().is_empty() {
            lines.push_str(&format!("{} {}\n", "Purpose:".cyan().bold(), brief.purpose()));
        }
        lines.push_str(&format!("{} {}\n", "Budget:".cyan().bold(), brief.budget()));
        if let Some(photo) = brief.reference_photo() {
            lines.push_str(&format!("{} {}\n", "Photo:".cyan().bold(), photo));
        }
        lines
    }

    /// Body of a text section. Failures stay inside their own section.
    fn text_body(result: &AgentResult) -> String {
        match (&result.status, result.as_text()) {
            (AgentStatus::Ok, Some(text)) => format!("\n{}\n", text.trim_end()),
            (AgentStatus::Failed { reason }, _) => {
                format!("\n{} {}\n", "Error:".red().bold(), reason)
            }
            (AgentStatus::Ok, None) => format!("\n{}\n", "(no content)".dimmed()),
        }
    }

    fn image_line(result: &AgentResult) -> String {
        let name = result.role.display_name();
        match (&result.status, result.as_image()) {
            (AgentStatus::Ok, Some(bytes)) => format!(
                "  {} {} {}\n",
                "v".green(),
                name,
                format!("({})", Self::human_size(bytes.len())).dimmed()
            ),
            (AgentStatus::Failed { reason }, _) => {
                format!("  {} {}: {}\n", "x".red(), name, reason)
            }
            (AgentStatus::Ok, None) => format!("  {} {} (no image)\n", "x".red(), name),
        }
    }

    fn human_size(bytes: usize) -> String {
        if bytes >= 1024 * 1024 {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        } else if bytes >= 1024 {
            format!("{} KB", bytes / 1024)
        } else {
            format!("{} B", bytes)
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, plan: &DesignPlan) -> String {
        Self::format(plan)
    }

    fn format_json(&self, plan: &DesignPlan) -> String {
        Self::format_json(plan)
    }

    fn format_summary_only(&self, plan: &DesignPlan) -> String {
        Self::format_summary_only(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_domain::{BriefDraft, TextRole};

    fn plan() -> DesignPlan {
        colored::control::set_override(false);
        let brief = BriefDraft::new("Reading nook under the stairs")
            .with_style("Classic")
            .validate()
            .unwrap();
        DesignPlan::new(
            brief,
            AgentResult::text(TextRole::Summarizer, "A warm, quiet corner."),
            AgentResult::text(TextRole::Architect, "- Bench along the wall"),
            AgentResult::failure(TextRole::Furniture, "Rate limited: try later"),
            AgentResult::text(TextRole::Colorist, "- Deep green walls"),
        )
    }

    #[test]
    fn test_full_output_sections_in_order() {
        let output = ConsoleFormatter::format(&plan());
        let positions: Vec<usize> = [
            "Overview",
            "Architect Plan",
            "Furniture Plan",
            "Color Palette",
        ]
        .iter()
        .map(|title| output.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!output.contains("AI Moodboard"));
    }

    #[test]
    fn test_failure_stays_in_its_section() {
        let output = ConsoleFormatter::format(&plan());
        let furniture = output.find("Furniture Plan").unwrap();
        let colors = output.find("Color Palette").unwrap();
        let error = output.find("Error: Rate limited").unwrap();
        assert!(furniture < error && error < colors);
        assert!(output.contains("- Deep green walls"));
        assert!(output.contains("1 section(s) could not be generated."));
    }

    #[test]
    fn test_visual_sections() {
        let plan = plan()
            .with_moodboard(vec![
                AgentResult::image(ImageRole::FurnitureBoard, vec![0; 2048]),
                AgentResult::failure(ImageRole::ColorBoard, "Image decode failed"),
                AgentResult::image(ImageRole::LightingBoard, vec![0; 10]),
            ])
            .with_render(AgentResult::image(ImageRole::Render, vec![0; 4096]));
        let output = ConsoleFormatter::format(&plan);

        assert!(output.contains("AI Moodboard"));
        assert!(output.contains("Furniture Pieces (2 KB)"));
        assert!(output.contains("Color Palette & Materials: Image decode failed"));
        assert!(output.contains("Lighting Mood (10 B)"));
        assert!(output.contains("3D Render"));
    }

    #[test]
    fn test_summary_only() {
        let output = ConsoleFormatter::format_summary_only(&plan());
        assert!(output.contains("A warm, quiet corner."));
        assert!(!output.contains("Bench along the wall"));
    }

    #[test]
    fn test_json_output() {
        let plan = plan().with_moodboard(vec![AgentResult::image(
            ImageRole::FurnitureBoard,
            vec![1, 2, 3],
        )]);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::render(&plan, OutputFormat::Json)).unwrap();
        assert_eq!(json["summary"]["content"]["data"], "A warm, quiet corner.");
        assert_eq!(json["moodboard"][0]["content"]["data"], "AQID");
        assert_eq!(json["furniture"]["status"]["state"], "failed");
    }
}
