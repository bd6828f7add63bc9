//! Command-line client for the FinansRisk API.
//!
//! Uses the same session manager as the browser client; the credential lives
//! in a token file instead of `localStorage`.

mod http;
mod token_file;


use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use finansrisk::config::DEFAULT_BASE_URL;
use finansrisk::firma::NewFirma;
use finansrisk::{ApiClient, ApiConfig, ApiError, AuthSession, TokenStore, Transport, Upload};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestTransport;
use crate::token_file::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", api_error_text(.0))]
    Api(#[from] ApiError),
    #[error("no token file given; pass --token-file or set HOME")]
    MissingTokenPath,
    #[error("could not read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("login succeeded but the session could not be confirmed")]
    SessionNotConfirmed,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error text with the server's own message appended when it sent one.
fn api_error_text(err: &ApiError) -> String {
    match err.server_message() {
        Some(msg) => format!("{err}: {msg}"),
        None => err.to_string(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "finansrisk-cli", about = "FinansRisk API command-line client")]
struct Cli {
    #[arg(long, env = "FINANSRISK_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "FINANSRISK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register { username: String, password: String },
    /// Log in and store the access token.
    Login { username: String, password: String },
    /// Forget the stored access token.
    Logout,
    /// Show the user the stored token belongs to.
    Whoami,
    Firma(FirmaCommand),
    /// List the uploaded reporting periods of a firma.
    Periods { firma_id: i64 },
    /// Show the analysis of one period.
    Analysis { firma_id: i64, donem: String },
    Upload(UploadCommand),
}

#[derive(Args, Debug)]
struct FirmaCommand {
    #[command(subcommand)]
    command: FirmaSubcommand,
}

#[derive(Subcommand, Debug)]
enum FirmaSubcommand {
    List,
    Show {
        firma_id: i64,
    },
    Create {
        #[arg(long)]
        adi: String,
        #[arg(long)]
        vkn: String,
    },
    Delete {
        firma_id: i64,
    },
}

#[derive(Args, Debug)]
struct UploadCommand {
    #[command(subcommand)]
    command: UploadSubcommand,
}

#[derive(Subcommand, Debug)]
enum UploadSubcommand {
    /// Financial statement CSV.
    Csv { firma_id: i64, path: PathBuf },
    /// E-defter (electronic ledger) XML.
    Edefter { firma_id: i64, path: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_session(cli: &Cli) -> Result<AuthSession, CliError> {
    let token_path = match &cli.token_file {
        Some(path) => path.clone(),
        None => FileTokenStore::default_path().ok_or(CliError::MissingTokenPath)?,
    };
    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());
    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(token_path));
    let api = ApiClient::new(ApiConfig::new(cli.base_url.as_str()), transport, tokens);
    Ok(AuthSession::new(api))
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let session = build_session(&cli)?;
    tracing::debug!(base_url = %session.api().config().base_url, "api client ready");

    match cli.command {
        Command::Register { username, password } => {
            let reply = session.register(username.trim(), &password).await?;
            print_message(reply.msg.as_deref(), "Registered.");
            Ok(())
        }
        Command::Login { username, password } => {
            let state = session.login(username.trim(), &password).await?;
            let name = state.username().ok_or(CliError::SessionNotConfirmed)?;
            println!("Logged in as {name}.");
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            match session.validate().await.user {
                Some(user) => print_json(&user)?,
                None => println!("not logged in"),
            }
            Ok(())
        }
        Command::Firma(firma) => checked(&session, run_firma(session.api(), firma)).await,
        Command::Periods { firma_id } => {
            let api = session.api();
            checked(&session, async { print_json(&api.list_financial_periods(firma_id).await?) }).await
        }
        Command::Analysis { firma_id, donem } => {
            let api = session.api();
            checked(&session, async { print_json(&api.get_financial_analysis(firma_id, &donem).await?) }).await
        }
        Command::Upload(upload) => checked(&session, run_upload(session.api(), upload)).await,
    }
}

/// Await an authenticated call; a rejected credential is cleared before the
/// error is returned.
async fn checked(session: &AuthSession, call: impl Future<Output = Result<(), CliError>>) -> Result<(), CliError> {
    let result = call.await;
    if let Err(CliError::Api(err)) = &result {
        if session.handle_api_error(err) {
            tracing::warn!("stored token was rejected and has been cleared");
        }
    }
    result
}

async fn run_firma(api: &ApiClient, firma: FirmaCommand) -> Result<(), CliError> {
    match firma.command {
        FirmaSubcommand::List => print_json(&api.list_firmalar().await?),
        FirmaSubcommand::Show { firma_id } => print_json(&api.get_firma(firma_id).await?),
        FirmaSubcommand::Create { adi, vkn } => {
            let new_firma = NewFirma::new(&adi, &vkn)?;
            print_json(&api.create_firma(&new_firma).await?)
        }
        FirmaSubcommand::Delete { firma_id } => {
            let reply = api.delete_firma(firma_id).await?;
            print_message(reply.msg.as_deref(), "Deleted.");
            Ok(())
        }
    }
}

async fn run_upload(api: &ApiClient, upload: UploadCommand) -> Result<(), CliError> {
    let reply = match upload.command {
        UploadSubcommand::Csv { firma_id, path } => {
            let file = read_upload(&path, Upload::csv)?;
            api.upload_financials_csv(firma_id, file).await?
        }
        UploadSubcommand::Edefter { firma_id, path } => {
            let file = read_upload(&path, Upload::edefter_xml)?;
            api.upload_edefter_xml(firma_id, file).await?
        }
    };
    print_message(reply.msg.as_deref(), "Uploaded.");
    Ok(())
}

/// Read `path` into an upload named after its final component.
fn read_upload(path: &Path, build: fn(String, Vec<u8>) -> Upload) -> Result<Upload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(build(file_name, bytes))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_message(msg: Option<&str>, fallback: &str) {
    println!("{}", msg.unwrap_or(fallback));
}
