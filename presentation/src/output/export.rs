//! Writing a plan to disk: PNG files plus one Markdown document

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use studio_domain::{AgentResult, AgentStatus, DesignPlan};
use tracing::{debug, info};

/// Name of the Markdown document inside the export directory
pub const PLAN_FILE: &str = "design-plan.md";

/// Files written by one export
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub markdown: PathBuf,
    pub images: Vec<PathBuf>,
}

/// Exports a [`DesignPlan`] into a directory.
pub struct PlanExporter {
    dir: PathBuf,
}

impl PlanExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write every successful image and the Markdown document.
    ///
    /// Existing files with the same names are overwritten.
    pub fn export(&self, plan: &DesignPlan) -> io::Result<ExportSummary> {
        std::fs::create_dir_all(&self.dir)?;

        let mut summary = ExportSummary::default();
        for result in plan.image_results() {
            if let Some(bytes) = result.as_image() {
                let path = self.dir.join(Self::image_file_name(result));
                std::fs::write(&path, bytes)?;
                debug!("Wrote {}", path.display());
                summary.images.push(path);
            }
        }

        let markdown = self.dir.join(PLAN_FILE);
        std::fs::write(&markdown, Self::render_markdown(plan))?;
        summary.markdown = markdown;

        info!(
            "Exported plan to {} ({} image(s))",
            self.dir.display(),
            summary.images.len()
        );
        Ok(summary)
    }

    fn image_file_name(result: &AgentResult) -> String {
        format!("{}.png", result.role.as_str())
    }

    /// The plan as Markdown, with image links relative to the export directory.
    pub fn render_markdown(plan: &DesignPlan) -> String {
        let brief = &plan.brief;
        let mut md = String::new();

        let _ = writeln!(md, "# {} room design\n", brief.style());
        let _ = writeln!(md, "- **Room:** {}", brief.description());
        if !brief.purpose().is_empty() {
            let _ = writeln!(md, "- **Purpose:** {}", brief.purpose());
        }
        let _ = writeln!(md, "- **Budget:** {}", brief.budget());

        for slot in plan.text_slots() {
            let _ = writeln!(md, "\n## {}\n", slot.role.display_name());
            match (&slot.status, slot.as_text()) {
                (AgentStatus::Ok, Some(text)) => {
                    let _ = writeln!(md, "{}", text.trim_end());
                }
                (AgentStatus::Failed { reason }, _) => {
                    let _ = writeln!(md, "> Not available: {}", reason);
                }
                (AgentStatus::Ok, None) => {
                    let _ = writeln!(md, "> Not available");
                }
            }
        }

        if plan.has_visuals() {
            let _ = writeln!(md, "\n## AI Moodboard\n");
            for image in &plan.moodboard {
                Self::image_markdown(&mut md, image);
            }
            if let Some(render) = &plan.render {
                let _ = writeln!(md, "\n## {}\n", render.role.display_name());
                Self::image_markdown(&mut md, render);
            }
        }

        md
    }

    fn image_markdown(md: &mut String, result: &AgentResult) {
        let name = result.role.display_name();
        match result.failure_reason() {
            None => {
                let _ = writeln!(md, "![{}]({})\n", name, Self::image_file_name(result));
            }
            Some(reason) => {
                let _ = writeln!(md, "> {} not available: {}\n", name, reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_domain::{BriefDraft, ImageRole, TextRole};

    fn plan() -> DesignPlan {
        let brief = BriefDraft::new("Balcony 2x3m")
            .with_style("Boho")
            .with_purpose("Morning coffee")
            .validate()
            .unwrap();
        DesignPlan::new(
            brief,
            AgentResult::text(TextRole::Summarizer, "Plants and a hammock chair."),
            AgentResult::text(TextRole::Architect, "- Keep the door clear"),
            AgentResult::text(TextRole::Furniture, "- Hammock chair"),
            AgentResult::failure(TextRole::Colorist, "HTTP 500"),
        )
        .with_moodboard(vec![
            AgentResult::image(ImageRole::FurnitureBoard, vec![1, 2, 3]),
            AgentResult::failure(ImageRole::ColorBoard, "Rate limited"),
            AgentResult::image(ImageRole::LightingBoard, vec![4, 5]),
        ])
        .with_render(AgentResult::image(ImageRole::Render, vec![6]))
    }

    #[test]
    fn test_export_writes_images_and_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PlanExporter::new(dir.path().join("out"));

        let summary = exporter.export(&plan()).unwrap();

        assert_eq!(summary.images.len(), 3);
        assert_eq!(
            std::fs::read(exporter.dir().join("furniture_board.png")).unwrap(),
            vec![1, 2, 3]
        );
        assert_eq!(std::fs::read(exporter.dir().join("render.png")).unwrap(), vec![6]);
        assert!(!exporter.dir().join("color_board.png").exists());
        assert!(summary.markdown.ends_with(PLAN_FILE));
        assert!(summary.markdown.exists());
    }

    #[test]
    fn test_markdown_content() {
        let md = PlanExporter::render_markdown(&plan());

        assert!(md.starts_with("# Boho room design"));
        assert!(md.contains("- **Purpose:** Morning coffee"));
        assert!(md.contains("## Overview\n\nPlants and a hammock chair."));
        assert!(md.contains("## Color Palette\n\n> Not available: HTTP 500"));
        assert!(md.contains("![Furniture Pieces](furniture_board.png)"));
        assert!(md.contains("> Color Palette & Materials not available: Rate limited"));
        assert!(md.contains("![3D Render](render.png)"));
    }

    #[test]
    fn test_markdown_without_visuals() {
        let brief = BriefDraft::new("Hall").validate().unwrap();
        let plan = DesignPlan::new(
            brief,
            AgentResult::text(TextRole::Summarizer, "s"),
            AgentResult::text(TextRole::Architect, "a"),
            AgentResult::text(TextRole::Furniture, "f"),
            AgentResult::text(TextRole::Colorist, "c"),
        );
        let md = PlanExporter::render_markdown(&plan);
        assert!(!md.contains("AI Moodboard"));
        assert!(!md.contains("Purpose"));
    }
}
