//! Contact Form CLI - Drives the form from JSON
//!
//! Commands: validate, check-email, simulate
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 when the form would be rejected

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use contactform_core::{ContactForm, FieldKey, FormData, FormEvent, SubmitOutcome};

#[derive(Parser)]
#[command(name = "contactform-cli")]
#[command(about = "Contact Form CLI - validate submissions and replay form events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON form config
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a submission
    Validate {
        /// JSON payload: {"fields": {...}, "consent": bool}
        #[arg(short, long)]
        payload: String,
    },

    /// Check an address against the email rule
    CheckEmail {
        email: String,
    },

    /// Replay events against a fresh form
    Simulate {
        /// JSON array of events
        #[arg(short, long)]
        events: String,
    },
}

#[derive(Deserialize)]
struct ValidatePayload {
    #[serde(default)]
    fields: FormData,
    #[serde(default)]
    consent: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut form = match ContactForm::from_config_file(cli.config.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            print_json(&serde_json::json!({
                "error": e.to_string(),
            }));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Validate { payload } => {
            let payload: ValidatePayload = match serde_json::from_str(&payload) {
                Ok(p) => p,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "valid": false,
                        "error": format!("Invalid payload: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            let errors = form.validate(&payload.fields, payload.consent);
            let valid = errors.is_empty();
            print_json(&serde_json::json!({
                "valid": valid,
                "errors": errors,
            }));
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Validation failure
            }
        }

        Commands::CheckEmail { email } => {
            let error = form.validator().validate_field(FieldKey::Email, &email);
            let valid = error.is_none();
            print_json(&serde_json::json!({
                "email": email,
                "valid": valid,
                "error": error,
            }));
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }

        Commands::Simulate { events } => {
            let events: Vec<FormEvent> = match serde_json::from_str(&events) {
                Ok(e) => e,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "success": false,
                        "error": format!("Invalid events: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            let mut last_outcome: Option<SubmitOutcome> = None;
            for event in &events {
                match form.dispatch(event) {
                    Ok(Some(outcome)) => last_outcome = Some(outcome),
                    Ok(None) => {}
                    Err(e) => {
                        print_json(&serde_json::json!({
                            "success": false,
                            "error": e.to_string(),
                        }));
                        return ExitCode::FAILURE;
                    }
                }
            }

            let accepted = last_outcome.as_ref().is_some_and(SubmitOutcome::is_accepted);
            print_json(&serde_json::json!({
                "success": accepted,
                "outcome": last_outcome,
                "selectedOption": form.selector().selected(),
                "document": form.document(),
            }));
            if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Last submit rejected, or never submitted
            }
        }
    }
}
