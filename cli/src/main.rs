//! Command-line front end for the chat portal's authentication service.
//!
//! `login` and `register` run the same submission flow as the browser page,
//! rendered to the terminal. `logout`, `save` and `load` call the
//! session-scoped endpoints directly.

mod terminal;
mod transport;

#[cfg(test)]
mod test_support;


use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use client::config::{BASE_URL_KEY, CHAT_ROUTE_KEY, EndpointConfig};
use client::net::api::AuthClient;
use client::net::error::SubmitError;
use client::net::types::{Credentials, Registration};
use client::pages::access_flow::AccessController;
use client::state::access::ViewState;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use terminal::TerminalView;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("invalid JSON document: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not read document: {0}")]
    Io(#[from] io::Error),
    #[error("the service did not accept the submission")]
    NotAccepted,
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Chat portal login / registration CLI")]
struct Cli {
    /// Service origin [default: http://localhost:1337]
    #[arg(long, env = BASE_URL_KEY)]
    base_url: Option<String>,

    #[arg(long, env = "PORTAL_SESSION_TOKEN")]
    session_token: Option<String>,

    /// Route reported after a successful login [default: /pages/chat/]
    #[arg(long, env = CHAT_ROUTE_KEY)]
    chat_route: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the issued session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        email: String,
    },
    /// End the current session.
    Logout,
    /// Store a JSON document for the session user.
    Save {
        #[arg(long, default_value = "-", help = "JSON document, or - for stdin")]
        data: String,
    },
    /// Print the JSON document stored for the session user.
    Load,
}

impl Cli {
    /// Endpoints resolved through the same keys the browser build reads.
    fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig::from_lookup(|key| match key {
            BASE_URL_KEY => self.base_url.clone(),
            CHAT_ROUTE_KEY => self.chat_route.clone(),
            _ => None,
        })
    }
}

type TerminalFlow = AccessController<ReqwestTransport, TerminalView>;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::NotAccepted) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.endpoint_config();
    let api = AuthClient::new(config, ReqwestTransport::new(cli.session_token)?);
    execute(api, cli.command).await
}

async fn execute(api: AuthClient<ReqwestTransport>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let flow = AccessController::new(api, TerminalView::default());
            if let Some(token) = login(&flow, Credentials { username, password }).await? {
                println!("session token: {token}");
            }
            Ok(())
        }
        Command::Register { username, password, email } => {
            let flow = AccessController::new(api, TerminalView::showing(ViewState::ShowRegister));
            register(&flow, Registration { username, password, email }).await
        }
        Command::Logout => {
            println!("{}", api.logout().await?);
            Ok(())
        }
        Command::Save { data } => {
            let document: Value = serde_json::from_str(&read_document(&data)?)?;
            print_json(&api.save_data(&document).await?)
        }
        Command::Load => print_json(&api.load_data().await?),
    }
}

/// Submit a login and return the session token the service issued, if any.
async fn login(flow: &TerminalFlow, credentials: Credentials) -> Result<Option<String>, CliError> {
    flow.submit_login(credentials).await;
    if flow.view().redirect().is_none() {
        return Err(CliError::NotAccepted);
    }
    Ok(flow.client().transport().session_token())
}

async fn register(flow: &TerminalFlow, registration: Registration) -> Result<(), CliError> {
    flow.submit_register(registration).await;
    if flow.view().has_error() { Err(CliError::NotAccepted) } else { Ok(()) }
}

fn read_document(data: &str) -> Result<String, CliError> {
    if data != "-" {
        return Ok(data.to_owned());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
