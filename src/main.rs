use aura_nutri::commands::{CommandHandler, Flow};
use aura_nutri::config::ProviderConfig;
use aura_nutri::food::config::profile_from_env;
use aura_nutri::personality::AssistantPersona;
use aura_nutri::providers::gemini::GeminiProvider;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Mindful food logging powered by Gemini", long_about = None)]
struct Args {
    /// Gemini API key (falls back to GEMINI_API_KEY, then API_KEY)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Model used for analysis (falls back to GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// JSON file describing the assistant persona
    #[arg(long)]
    persona: Option<PathBuf>,

    /// Display name for the session profile
    #[arg(long)]
    name: Option<String>,

    /// Daily calorie goal in kcal
    #[arg(long)]
    calorie_goal: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    colored::control::set_override(true);
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = ProviderConfig::from_env(args.api_key.clone(), args.model.clone())?;
    let persona = load_persona(args.persona.as_ref());
    let provider = GeminiProvider::new(config, &persona).context("Failed to initialize Gemini provider")?;

    let mut profile = profile_from_env();
    if let Some(name) = args.name.clone() {
        profile.name = name;
    }
    if let Some(goal) = args.calorie_goal.filter(|g| *g > 0.0) {
        profile.daily_calorie_goal = goal;
    }
    info!("Starting session for {} with persona {}", profile.name, persona);

    let mut command_handler = CommandHandler::new(Box::new(provider), profile);
    command_handler.print_welcome();

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline(&command_handler.prompt()) {
            Ok(line) => {
                let input = line.trim();
                if !input.is_empty() {
                    let _ = rl.add_history_entry(input);
                }

                match command_handler.handle_command(input).await {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => println!("{}", e.red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if command_handler.journal().mode().is_open() {
                    // Ctrl-C closes the overlay before it quits the app
                    if let Err(e) = command_handler.handle_command("cancel").await {
                        println!("{}", e.red());
                    }
                    continue;
                }
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn load_persona(path: Option<&PathBuf>) -> AssistantPersona {
    match path {
        Some(path) => AssistantPersona::from_file(path).unwrap_or_else(|e| {
            warn!("Failed to load persona from {}: {}. Using default.", path.display(), e);
            AssistantPersona::default()
        }),
        None => AssistantPersona::default(),
    }
}
