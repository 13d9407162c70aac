//! Interactive design session (Read-Eval-Print Loop)

use super::command::ReplCommand;
use crate::cli::input::BriefFields;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::export::PlanExporter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::{Path, PathBuf};
use studio_application::{ModelClient, NoProgress, StudioSession};
use studio_domain::{BriefDraft, DesignStyle};
use tracing::warn;

const HISTORY_SIZE: usize = 500;
const DEFAULT_SAVE_DIR: &str = "studio-plan";

/// What the user typed at a prompt
enum Input {
    Line(String),
    /// Ctrl-C: abandon the current brief
    Cancel,
    /// Ctrl-D: leave the session
    Exit,
}

/// Interactive studio session
pub struct StudioRepl<C: ModelClient + 'static> {
    session: StudioSession<C>,
    config: ReplConfig,
    output: OutputConfig,
}

impl<C: ModelClient + 'static> StudioRepl<C> {
    pub fn new(session: StudioSession<C>, config: ReplConfig, output: OutputConfig) -> Self {
        Self {
            session,
            config,
            output,
        }
    }

    /// Run the interactive loop until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> io::Result<()> {
        let mut editor = self.create_editor();
        self.print_welcome();

        loop {
            let line = match Self::read(&mut editor, "studio")? {
                Input::Line(line) => line,
                Input::Cancel => continue,
                Input::Exit => {
                    println!("Bye!");
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(command) = ReplCommand::parse(line) {
                if self.handle_command(command) {
                    break;
                }
                continue;
            }

            // Anything else starts a new brief with this line as the description
            match self.collect_brief(&mut editor, line)? {
                Some(draft) => self.process_brief(draft).await,
                None => println!("{}", "Brief cancelled.".dimmed()),
            }
        }

        Ok(())
    }

    fn create_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let history_path = self
            .config
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("interior-studio").join("history.txt")));

        let Some(path) = history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History disabled: {}", e);
                editor
            }
        }
    }

    fn read(editor: &mut Reedline, label: &str) -> io::Result<Input> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        #[allow(unreachable_patterns)]
        let input = match editor.read_line(&prompt)? {
            Signal::Success(line) => Input::Line(line),
            Signal::CtrlD => Input::Exit,
            Signal::CtrlC => Input::Cancel,
            _ => Input::Cancel,
        };
        Ok(input)
    }

    /// Ask for a field; an empty answer keeps `default`.
    fn ask(editor: &mut Reedline, label: &str, default: &str) -> io::Result<Option<String>> {
        let label = if default.is_empty() {
            label.to_string()
        } else {
            format!("{} [{}]", label, default)
        };
        match Self::read(editor, &label)? {
            Input::Line(line) if line.trim().is_empty() => Ok(Some(default.to_string())),
            Input::Line(line) => Ok(Some(line.trim().to_string())),
            Input::Cancel | Input::Exit => Ok(None),
        }
    }

    /// Prompt for the remaining fields. `None` when the user cancels or a
    /// field cannot be read.
    fn collect_brief(
        &self,
        editor: &mut Reedline,
        description: &str,
    ) -> io::Result<Option<BriefDraft>> {
        let styles = DesignStyle::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("/");

        let Some(style) = Self::ask(editor, &format!("style ({})", styles), "Modern")? else {
            return Ok(None);
        };
        let Some(purpose) = Self::ask(editor, "purpose", "")? else {
            return Ok(None);
        };
        let Some(budget) = Self::ask(editor, &format!("budget ({})", self.config.currency), "15000")?
        else {
            return Ok(None);
        };
        let Ok(budget) = budget.replace([',', '_'], "").parse::<u64>() else {
            println!("{} budget must be a whole number", "Error:".red().bold());
            return Ok(None);
        };
        let Some(photo) = Self::ask(editor, "reference photo path (optional)", "")? else {
            return Ok(None);
        };

        let photo_path = (!photo.is_empty()).then(|| PathBuf::from(&photo));
        let fields = BriefFields {
            description,
            style: &style,
            purpose: &purpose,
            budget,
            photo: photo_path.as_deref(),
        };
        match fields.into_draft(&self.config.currency) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                println!("{} could not read {}: {}", "Error:".red().bold(), photo, e);
                Ok(None)
            }
        }
    }

    async fn process_brief(&self, draft: BriefDraft) {
        println!();
        let want_images = self.config.want_images;

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.session
                .submit_with_progress(draft, want_images, &progress)
                .await
        } else {
            self.session
                .submit_with_progress(draft, want_images, &NoProgress)
                .await
        };

        match result {
            Ok(plan) => {
                println!("{}", ConsoleFormatter::render(&plan, self.output.format));
                println!(
                    "{}",
                    "Use /save to export images and Markdown, /show to display again.".dimmed()
                );
            }
            Err(e) => {
                println!("{} {}", "Error:".red().bold(), e);
            }
        }
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Interior Studio - Design Session     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Describe your room to start a new plan.");
        println!(
            "Visuals: {}",
            if self.config.want_images { "on" } else { "off" }
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  {}            - Show the last plan again", "/show".cyan());
        println!("  {}  - Generate moodboards and render", "/visuals on|off".cyan());
        println!("  {}      - Export images and Markdown", "/save [dir]".cyan());
        println!("  {}           - Forget the last plan", "/clear".cyan());
        println!("  {}            - Show this help", "/help".cyan());
        println!("  {}            - Exit", "/quit".cyan());
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Show => match self.session.latest() {
                Some(plan) => println!("{}", ConsoleFormatter::render(&plan, self.output.format)),
                None => println!("{}", "No plan yet. Describe a room first.".yellow()),
            },
            ReplCommand::Visuals(Some(on)) => {
                self.config.want_images = on;
                println!("Visuals {}", if on { "on" } else { "off" });
            }
            ReplCommand::Visuals(None) => {
                println!(
                    "Visuals are {}",
                    if self.config.want_images { "on" } else { "off" }
                );
            }
            ReplCommand::Save(dir) => self.save(dir.as_deref()),
            ReplCommand::Clear => {
                self.session.reset();
                println!("{}", "Plan cleared.".green());
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn save(&self, dir: Option<&Path>) {
        let Some(plan) = self.session.latest() else {
            println!("{}", "No plan to save.".yellow());
            return;
        };
        let dir = dir
            .map(Path::to_path_buf)
            .or_else(|| self.output.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR));

        match PlanExporter::new(&dir).export(&plan) {
            Ok(summary) => {
                println!(
                    "{} {} ({} image(s))",
                    "Saved".green(),
                    summary.markdown.display(),
                    summary.images.len()
                );
            }
            Err(e) => println!("{} could not save to {}: {}", "Error:".red().bold(), dir.display(), e),
        }
    }
}
