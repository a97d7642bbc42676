//! pw-toolkit - password strength analyzer and wordlist generator
//!
//! Scripted use goes through the `analyze` and `generate` subcommands; running
//! without a subcommand opens the interactive menu.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use pw_toolkit::{
    opener::open_file,
    wordlist::generate_to_file,
    AnalysisRequest, GenerationRequest, PwToolkitError, StrengthReport, StrengthReporter, Theme,
    ToolkitConfig, WordlistSummary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Colour theme for terminal output (light or dark).
    #[arg(long, global = true)]
    theme: Option<Theme>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze the strength of a password.
    Analyze {
        /// Password to analyze; prompted for (masked) when omitted.
        password: Option<String>,

        /// Words an attacker may know about you (name, birth year...).
        #[arg(long = "user-input", value_name = "WORD")]
        user_inputs: Vec<String>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate a custom wordlist from seed words.
    Generate {
        /// Common words, comma-separated.
        #[arg(short, long)]
        words: String,

        /// Number patterns such as birth years, comma-separated.
        #[arg(short, long, default_value = "")]
        numbers: String,

        /// Maximum number of entries to generate.
        #[arg(short, long)]
        max: Option<String>,

        /// Maximum leetspeak combinations per seed word.
        #[arg(long)]
        variants: Option<usize>,

        /// Output file, overwritten on each run.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the wordlist with the default application afterwards.
        #[arg(long)]
        open: bool,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive menu with both tools.
    Interactive,
}

fn main() {
    // Initialize the library
    if let Err(e) = pw_toolkit::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pw_toolkit=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<PwToolkitError>() {
            Some(err) => {
                eprintln!("{}", err.user_message());
                // Bad input exits like a usage error
                process::exit(if err.is_input_error() { 2 } else { 1 });
            }
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ToolkitConfig::from_env().context("Failed to load configuration")?;
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    match cli.cmd {
        Some(Command::Analyze {
            password,
            user_inputs,
            json,
        }) => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };
            let request = AnalysisRequest::new(password).with_user_inputs(user_inputs);
            let report = StrengthReporter::new().analyze(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display_report(&report, config.theme);
            }
        }
        Some(Command::Generate {
            words,
            numbers,
            max,
            variants,
            output,
            open,
            json,
        }) => {
            let max = max.unwrap_or_else(|| config.max_entries.to_string());
            let request = GenerationRequest::from_raw(&words, &numbers, &max)?
                .with_max_variants(variants.unwrap_or(config.max_variants_per_word))
                .with_output_path(output.unwrap_or_else(|| config.output_path.clone()));

            let summary = generate_to_file(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                display_summary(&summary, config.theme);
            }

            if open {
                open_wordlist(&summary);
            }
        }
        Some(Command::Interactive) | None => run_interactive(config)?,
    }

    Ok(())
}

/// Menu entries of the interactive mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Analyze,
    Generate,
    ToggleTheme,
    Quit,
}

struct MenuItem {
    action: MenuAction,
    label: String,
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn menu(theme: Theme) -> Vec<MenuItem> {
    vec![
        MenuItem {
            action: MenuAction::Analyze,
            label: "🔐 Password Strength Analyzer".to_string(),
        },
        MenuItem {
            action: MenuAction::Generate,
            label: "📝 Wordlist Generator".to_string(),
        },
        MenuItem {
            action: MenuAction::ToggleTheme,
            label: theme.toggle_label().to_string(),
        },
        MenuItem {
            action: MenuAction::Quit,
            label: "Quit".to_string(),
        },
    ]
}

/// Interactive loop. Failed actions are reported and the menu comes back.
fn run_interactive(mut config: ToolkitConfig) -> anyhow::Result<()> {
    print_banner(config.theme);

    loop {
        let choice = match Select::new("What would you like to do?", menu(config.theme)).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(PwToolkitError::from(e).into()),
        };

        let result = match choice.action {
            MenuAction::Analyze => interactive_analyze(config.theme),
            MenuAction::Generate => interactive_generate(&config),
            MenuAction::ToggleTheme => {
                config.theme = config.theme.toggle();
                tracing::debug!(theme = %config.theme, "Theme toggled");
                Ok(())
            }
            MenuAction::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(PwToolkitError::Prompt { .. }) if !console::user_attended() => {
                return Err(anyhow::anyhow!("Interactive mode needs a terminal"));
            }
            Err(e) => eprintln!("{}", e.user_message()),
        }
        println!();
    }

    println!("{}", config.theme.footer_style().apply_to("For ethical use only"));
    Ok(())
}

fn interactive_analyze(theme: Theme) -> pw_toolkit::Result<()> {
    let password = prompt_password()?;
    let report = StrengthReporter::new().analyze(&AnalysisRequest::new(password))?;
    display_report(&report, theme);
    Ok(())
}

fn interactive_generate(config: &ToolkitConfig) -> pw_toolkit::Result<()> {
    let words = Text::new("Enter common words (comma-separated):").prompt()?;
    let numbers = Text::new("Enter number patterns (birth years, etc., comma-separated):")
        .with_help_message("Entries that are not digits only are ignored")
        .prompt()?;
    let default_max = config.max_entries.to_string();
    let max = Text::new("Max combinations to generate:")
        .with_default(&default_max)
        .prompt()?;

    let request = GenerationRequest::from_raw(&words, &numbers, &max)?
        .with_max_variants(config.max_variants_per_word)
        .with_output_path(config.output_path.clone());
    let summary = generate_to_file(&request)?;
    display_summary(&summary, config.theme);

    if Confirm::new("Do you want to view it now?")
        .with_default(false)
        .prompt()?
    {
        open_wordlist(&summary);
    }
    Ok(())
}

fn prompt_password() -> pw_toolkit::Result<String> {
    Ok(Password::new("Enter password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
        .with_help_message("Ctrl+R to show/hide the password")
        .prompt()?)
}

fn open_wordlist(summary: &WordlistSummary) {
    if let Err(e) = open_file(&summary.output_path) {
        eprintln!("{}", e.user_message());
    }
}

fn print_banner(theme: Theme) {
    println!("{}", theme.label_style().apply_to("🔐 Password Toolkit"));
    println!("═══════════════════════════════════════");
    println!();
}

/// Display a strength report coloured by score bucket
fn display_report(report: &StrengthReport, theme: Theme) {
    println!();
    println!(
        "{}",
        theme
            .score_style(report.bucket)
            .apply_to(format!("Score (0–4): {} ({})", report.score, report.bucket))
    );
    println!("{}", report.feedback_text());
    println!(
        "{}",
        theme.footer_style().apply_to(format!(
            "⏱️  Offline crack time: {} (10^{:.1} guesses)",
            report.crack_time, report.guesses_log10
        ))
    );
}

fn display_summary(summary: &WordlistSummary, theme: Theme) {
    println!();
    println!(
        "{}",
        theme.accent_style().apply_to(format!(
            "✅ Wordlist saved as '{}' with {} entries.",
            summary.output_path.display(),
            summary.entries
        ))
    );
    if summary.cap_reached {
        println!(
            "{}",
            theme.footer_style().apply_to(format!(
                "ℹ️  Stopped at the limit of {} entries",
                summary.max_entries
            ))
        );
    }
}
