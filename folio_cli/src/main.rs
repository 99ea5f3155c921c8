use anyhow::{bail, Result};
use clap::Parser;
use console::{style, Term};
use std::path::PathBuf;
use std::sync::Arc;

use folio_cli::ui::form::read_line;
use folio_cli::{SystemOpener, TerminalForm, TerminalSurface};
use folio_core::utils::logger;
use folio_core::{
    Config, EmailJsClient, FormEvent, FormField, FormPayload, Notifier, SubmissionOutcome,
    SubmissionWorkflow, WorkflowSettings,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Send a message through the portfolio contact form", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.folio/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Your email address
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    subject: Option<String>,

    #[arg(long)]
    message: Option<String>,
}

impl Cli {
    fn payload(&self) -> FormPayload {
        FormPayload::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.subject.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
        )
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load_or_default()?,
    };
    config.validate()?;
    Ok(config)
}

/// Ask for every blank field, forwarding focus/blur like the page does
async fn fill_missing(
    form: &TerminalForm,
    workflow: &SubmissionWorkflow,
    mut payload: FormPayload,
) -> Result<FormPayload> {
    for field in FormField::ALL {
        if !payload.get(field).trim().is_empty() {
            continue;
        }
        workflow.handle_event(FormEvent::Focus(field)).await;
        let value = form.prompt(field).await?;
        workflow
            .handle_event(FormEvent::Blur {
                field,
                value: value.clone(),
            })
            .await;
        payload.set(field, value);
    }
    Ok(payload)
}

/// Offer the action of the current notification until it auto-dismisses
async fn offer_action(term: &Term, notifier: &Notifier) -> Result<()> {
    let Some(current) = notifier.current() else {
        return Ok(());
    };
    let Some(label) = current.action_label.clone() else {
        return Ok(());
    };

    term.write_str(&format!(
        "{} ",
        style(format!("{}? [Y/n]", label)).yellow().bold()
    ))?;

    match tokio::time::timeout(notifier.timings().auto_dismiss, read_line(term.clone())).await {
        Ok(Ok(answer)) if !answer.trim().eq_ignore_ascii_case("n") => {
            notifier.activate_action(current.id);
        }
        Ok(_) => {
            notifier.close(current.id);
        }
        Err(_) => {
            term.write_line("")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("FOLIO_DEBUG", "1");
    }

    if let Err(e) = logger::init_global_logger() {
        eprintln!("⚠️ Failed to initialize logger: {}", e);
    }

    let config = load_config(&cli)?;
    let term = Term::stdout();

    let relay = Arc::new(EmailJsClient::new(&config.relay)?);
    let surface = Arc::new(TerminalSurface::new(term.clone()));
    let form = Arc::new(TerminalForm::new(term.clone()));
    let notifier = Notifier::new(surface, config.notifications.into());
    let workflow = SubmissionWorkflow::new(
        WorkflowSettings::from_config(&config),
        relay,
        form.clone(),
        Arc::new(SystemOpener),
        notifier.clone(),
    );

    let mut payload = cli.payload();
    loop {
        if form.is_interactive() {
            payload = fill_missing(&form, &workflow, payload).await?;
        }

        match workflow.submit(&payload).await {
            SubmissionOutcome::Success => return Ok(()),
            SubmissionOutcome::RemoteFailure(reason) => {
                logger::info(&format!("Offering mail client after: {}", reason));
                offer_action(&term, &notifier).await?;
                return Ok(());
            }
            SubmissionOutcome::ValidationFailure(fields) => {
                if !form.is_interactive() {
                    bail!("missing fields: {}", FormField::join_labels(&fields));
                }
            }
        }
    }
}
