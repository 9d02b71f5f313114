use crate::food::image::EncodedImage;
use crate::food::journal::{FoodJournal, OverlayMode, PendingAnalysis, SubmissionOutcome};
use crate::food::models::{Mood, UserProfile};
use crate::providers::traits::AnalysisProvider;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod food_cmd;
mod system;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Exit,
    Log(Option<String>),
    Photo(String),
    Mood(String),
    Moods,
    Cancel,
    Journal,
    Summary,
    Profile,
    Delete(String),
    /// Free text typed while the overlay is open.
    Describe(String),
    Usage(&'static str),
    Unknown(String),
}

/// Whether the REPL should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn parse_command(input: &str, overlay_open: bool) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword.to_lowercase(), rest.trim()),
        None => (input.to_lowercase(), ""),
    };

    match keyword.as_str() {
        "help" if rest.is_empty() => Command::Help,
        "exit" | "quit" if rest.is_empty() => Command::Exit,
        "log" => Command::Log(Some(rest.to_string()).filter(|r| !r.is_empty())),
        "photo" | "snap" if rest.is_empty() => Command::Usage("photo <image_path>"),
        "photo" | "snap" => Command::Photo(rest.to_string()),
        "mood" if rest.is_empty() => Command::Moods,
        "mood" => Command::Mood(rest.to_string()),
        "moods" if rest.is_empty() => Command::Moods,
        "cancel" | "close" if rest.is_empty() => Command::Cancel,
        "journal" | "list" if rest.is_empty() => Command::Journal,
        "summary" if rest.is_empty() => Command::Summary,
        "profile" if rest.is_empty() => Command::Profile,
        "delete" | "rm" if rest.is_empty() => Command::Usage("delete <id>"),
        "delete" | "rm" => Command::Delete(rest.to_string()),
        _ if overlay_open => Command::Describe(input.to_string()),
        _ => Command::Unknown(input.to_string()),
    }
}

pub struct CommandHandler {
    provider: Box<dyn AnalysisProvider + Send + Sync>,
    profile: UserProfile,
    journal: FoodJournal,
}

impl CommandHandler {
    pub fn new(provider: Box<dyn AnalysisProvider + Send + Sync>, profile: UserProfile) -> Self {
        Self {
            provider,
            profile,
            journal: FoodJournal::new(),
        }
    }

    pub fn journal(&self) -> &FoodJournal {
        &self.journal
    }

    pub fn prompt(&self) -> String {
        match self.journal.mode() {
            OverlayMode::Idle => "👤 ".to_string(),
            _ => format!("🍽️  [{}] ", self.journal.mood()),
        }
    }

    pub fn print_welcome(&self) {
        println!("{}", food_cmd::render_profile(&self.profile));
        system::print_help();
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<Flow, String> {
        let command = parse_command(input, self.journal.mode().is_open());

        match command {
            Command::Empty => {}
            Command::Help => system::print_help(),
            Command::Exit => {
                system::print_goodbye();
                return Ok(Flow::Exit);
            }
            Command::Log(None) => {
                self.journal.open_overlay();
                self.print_overlay();
            }
            Command::Log(Some(text)) => {
                self.journal.open_overlay();
                self.submit_text(&text).await?;
            }
            Command::Describe(text) => self.submit_text(&text).await?,
            Command::Photo(path) => {
                self.journal.open_overlay();
                self.submit_photo(&path).await?;
            }
            Command::Mood(name) => {
                let mood: Mood = name.parse()?;
                self.journal.set_mood(mood);
                println!("{} Feeling {}", mood.emoji(), mood.to_string().bright_yellow());
            }
            Command::Moods => println!("{}", food_cmd::render_moods(self.journal.mood())),
            Command::Cancel => {
                if self.journal.mode().is_open() {
                    self.journal.close_overlay();
                    println!("Overlay closed. Nothing was logged.");
                } else {
                    println!("Nothing to cancel.");
                }
            }
            Command::Journal => println!("{}", food_cmd::render_journal(self.journal.entries())),
            Command::Summary => println!(
                "{}",
                food_cmd::render_summary(&self.journal.totals(), &self.journal.ring(), &self.profile)
            ),
            Command::Profile => {
                println!("{}", food_cmd::render_profile(&self.profile));
                println!(
                    "   {}",
                    format!("Mindful Choice Powered by Google Gemini ({})", self.provider.get_model_info())
                        .bright_black()
                );
            }
            Command::Delete(id) => {
                if self.journal.delete_entry(&id) {
                    println!("🗑️  Removed entry {}", id.bright_yellow());
                } else {
                    println!("No entry with id {}. Type 'journal' to see ids.", id);
                }
            }
            Command::Usage(usage) => println!("Usage: {}", usage),
            Command::Unknown(_) => {
                return Err("Unknown command. Type 'log <meal>' to log a meal or 'help' for all commands.".to_string());
            }
        }
        Ok(Flow::Continue)
    }

    fn print_overlay(&self) {
        println!("\n{}", "Add to Aura".bold().green());
        println!("{}", food_cmd::render_moods(self.journal.mood()));
        println!("What did you nourish with? Type a description, or 'photo <path>' to snap one.");
        println!(
            "{}",
            "e.g. 'A bowl of fresh greek yogurt with berries and a sprinkle of walnuts'".bright_black()
        );
    }

    async fn submit_text(&mut self, text: &str) -> Result<(), String> {
        match self.journal.begin_text_submission(text) {
            Some(pending) => self.run_analysis(pending).await,
            None => Ok(()),
        }
    }

    async fn submit_photo(&mut self, path: &str) -> Result<(), String> {
        if self.journal.mode() != OverlayMode::Composing {
            return Ok(());
        }
        let image = EncodedImage::from_path(path).await.map_err(|e| e.to_string())?;
        println!("📷 Read {} ({} KB)", path.bright_yellow(), image.byte_len() / 1024);

        match self.journal.begin_photo_submission(&image) {
            Some(pending) => self.run_analysis(pending).await,
            None => Ok(()),
        }
    }

    async fn run_analysis(&mut self, pending: PendingAnalysis) -> Result<(), String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .map_err(|e| e.to_string())?,
        );
        spinner.set_message("Analyzing your choice... Gemini is translating nutrition into mindfulness.");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let ctrl_c = async {
            let _ = tokio::signal::ctrl_c().await;
        };
        let outcome = self
            .journal
            .run_submission(self.provider.as_ref(), pending, ctrl_c)
            .await;
        spinner.finish_and_clear();

        match outcome {
            SubmissionOutcome::Logged(entry) => {
                println!("{}", "✨ Added to your aura".green());
                println!("{}", food_cmd::render_entry(&entry));
                Ok(())
            }
            SubmissionOutcome::Failed(e) => Err(format!("Something went wrong. Let's try that again. ({})", e)),
            SubmissionOutcome::Cancelled => {
                println!("Logging cancelled. Nothing was logged.");
                Ok(())
            }
            SubmissionOutcome::Discarded => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::testing::StubProvider;
    use crate::providers::traits::AnalysisInput;
    use std::io::Write;

    fn handler(provider: &StubProvider) -> CommandHandler {
        CommandHandler::new(Box::new(provider.clone()), UserProfile::default())
    }

    #[test]
    fn test_parse_idle_commands() {
        assert_eq!(parse_command("  ", false), Command::Empty);
        assert_eq!(parse_command("HELP", false), Command::Help);
        assert_eq!(parse_command("log", false), Command::Log(None));
        assert_eq!(parse_command("log   a banana ", false), Command::Log(Some("a banana".into())));
        assert_eq!(parse_command("photo", false), Command::Usage("photo <image_path>"));
        assert_eq!(parse_command("photo lunch.jpg", false), Command::Photo("lunch.jpg".into()));
        assert_eq!(parse_command("mood heavy", false), Command::Mood("heavy".into()));
        assert_eq!(parse_command("mood", false), Command::Moods);
        assert_eq!(parse_command("delete ab12cd34", false), Command::Delete("ab12cd34".into()));
        assert_eq!(parse_command("a banana", false), Command::Unknown("a banana".into()));
    }

    #[test]
    fn test_parse_free_text_while_composing() {
        assert_eq!(parse_command("a banana", true), Command::Describe("a banana".into()));
        assert_eq!(parse_command("help me decide", true), Command::Describe("help me decide".into()));
        assert_eq!(parse_command("cancel", true), Command::Cancel);
    }

    #[tokio::test]
    async fn test_log_with_description_adds_entry() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);

        handler.handle_command("mood energized").await.unwrap();
        let flow = handler.handle_command("log a banana").await.unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(provider.inputs(), vec![AnalysisInput::Text("a banana".into())]);
        let entries = handler.journal().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, Mood::Energized);
        assert_eq!(entries[0].description, "a banana");
        assert_eq!(handler.journal().mode(), OverlayMode::Idle);
    }

    #[tokio::test]
    async fn test_overlay_flow_and_blank_input() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);

        handler.handle_command("log").await.unwrap();
        assert_eq!(handler.journal().mode(), OverlayMode::Composing);
        assert!(handler.prompt().contains("balanced"));

        handler.handle_command("   ").await.unwrap();
        assert_eq!(provider.calls(), 0);

        handler.handle_command("cancel").await.unwrap();
        assert_eq!(handler.journal().mode(), OverlayMode::Idle);
        assert!(handler.journal().entries().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_overlay_stays_open() {
        let provider = StubProvider::failing();
        let mut handler = handler(&provider);

        let err = handler.handle_command("log mystery stew").await.unwrap_err();

        assert!(err.starts_with("Something went wrong. Let's try that again."));
        assert!(err.contains("analysis failed"));
        assert_eq!(handler.journal().mode(), OverlayMode::Composing);
        assert!(handler.journal().entries().is_empty());
    }

    #[tokio::test]
    async fn test_photo_is_sent_inline() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();

        handler
            .handle_command(&format!("photo {}", file.path().display()))
            .await
            .unwrap();

        match &provider.inputs()[..] {
            [AnalysisInput::Image { media_type, .. }] => assert_eq!(media_type, "image/jpeg"),
            other => panic!("unexpected inputs: {:?}", other),
        }
        let entry = &handler.journal().entries()[0];
        assert!(entry.image.as_deref().unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_bad_photo_keeps_overlay_open() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a picture").unwrap();

        let err = handler
            .handle_command(&format!("photo {}", file.path().display()))
            .await
            .unwrap_err();

        assert!(err.contains("not a supported image"));
        assert_eq!(provider.calls(), 0);
        assert_eq!(handler.journal().mode(), OverlayMode::Composing);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_a_noop() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);
        handler.handle_command("log toast").await.unwrap();

        handler.handle_command("delete nope").await.unwrap();
        assert_eq!(handler.journal().entries().len(), 1);

        let id = handler.journal().entries()[0].id.clone();
        handler.handle_command(&format!("delete {}", id)).await.unwrap();
        assert!(handler.journal().entries().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_after_failure_closes_overlay() {
        let provider = StubProvider::failing();
        let mut handler = handler(&provider);
        handler.handle_command("log").await.unwrap();
        assert!(handler.handle_command("mystery stew").await.is_err());
        assert!(handler.journal().mode().is_open());

        assert_eq!(handler.handle_command("cancel").await, Ok(Flow::Continue));
        assert_eq!(handler.journal().mode(), OverlayMode::Idle);
        assert_eq!(handler.handle_command("cancel").await, Ok(Flow::Continue));
    }

    #[tokio::test]
    async fn test_exit_stops_the_loop() {
        let mut handler = handler(&StubProvider::ok());
        assert_eq!(handler.handle_command("quit").await.unwrap(), Flow::Exit);
    }

    #[tokio::test]
    async fn test_unknown_command_while_idle() {
        let provider = StubProvider::ok();
        let mut handler = handler(&provider);
        assert!(handler.handle_command("a banana").await.is_err());
        assert_eq!(provider.calls(), 0);
    }
}
