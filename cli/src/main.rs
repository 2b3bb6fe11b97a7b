mod session_file;
mod transport;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use supply_dash::auth::{AuthFlow, AuthOutcome, LoginDraft, SignUpDraft};
use supply_dash::config::{ConfigError, DEFAULT_BASE_URL};
use supply_dash::{ApiClient, ApiConfig, ApiError, SessionStore};
use tracing_subscriber::EnvFilter;

use crate::session_file::FileBackend;
use crate::transport::ReqwestTransport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not signed in; run `supply-cli login` first")]
    NotSignedIn,
    #[error("{}", .0.join("\n"))]
    Rejected(Vec<String>),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "supply-cli", about = "Supply-chain dashboard API CLI")]
struct Cli {
    #[arg(long, env = "SUPPLY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SUPPLY_SESSION_FILE", default_value = ".supply-session")]
    session_file: PathBuf,

    #[arg(long, default_value_t = 30, help = "Per-request timeout in seconds")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login(LoginArgs),
    /// Create an account.
    Signup(SignupArgs),
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user's profile.
    Whoami,
    /// Demand forecast, trends and model status.
    Overview,
    Tracking(TrackingCommand),
    Model(ModelCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "SUPPLY_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "SUPPLY_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long, help = "Defaults to --password")]
    confirm_password: Option<String>,
}

#[derive(Args, Debug)]
struct TrackingCommand {
    #[command(subcommand)]
    command: TrackingSubcommand,
}

#[derive(Subcommand, Debug)]
enum TrackingSubcommand {
    Orders,
    Delays,
    Eta,
    Order { order_id: String },
}

#[derive(Args, Debug)]
struct ModelCommand {
    #[command(subcommand)]
    command: ModelSubcommand,
}

#[derive(Subcommand, Debug)]
enum ModelSubcommand {
    Performance { model_id: String },
    Info,
}

type Client = ApiClient<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = build_client(&cli)?;

    match cli.command {
        Command::Login(args) => run_login(&api, args).await,
        Command::Signup(args) => run_signup(&api, args).await,
        Command::Logout => {
            api.logout();
            println!("Signed out.");
            Ok(())
        }
        Command::Whoami => run_whoami(&api).await,
        Command::Overview => print_json(&serde_json::to_value(api.overview().await?)?),
        Command::Tracking(tracking) => run_tracking(&api, tracking).await,
        Command::Model(model) => run_model(&api, model).await,
    }
}

fn build_client(cli: &Cli) -> Result<Client, CliError> {
    let config = ApiConfig::new(&cli.base_url)?;
    let session = Arc::new(SessionStore::new(FileBackend::new(cli.session_file.clone())));
    let transport = ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?;
    Ok(ApiClient::new(config, session, transport))
}

fn settle(outcome: AuthOutcome, flow: &AuthFlow) -> Result<(), CliError> {
    match outcome {
        AuthOutcome::Navigate(_) => {
            println!("Signed in.");
            Ok(())
        }
        AuthOutcome::ShowLogin => {
            println!("{}", flow.notice().unwrap_or_default());
            Ok(())
        }
        AuthOutcome::Failed(messages) => Err(CliError::Rejected(messages)),
        AuthOutcome::Ignored => Ok(()),
    }
}

async fn run_login(api: &Client, args: LoginArgs) -> Result<(), CliError> {
    let mut flow = AuthFlow::new();
    flow.login.draft = LoginDraft { email: args.email, password: args.password };
    let outcome = flow.submit_login(api).await;
    settle(outcome, &flow)
}

async fn run_signup(api: &Client, args: SignupArgs) -> Result<(), CliError> {
    let mut flow = AuthFlow::new();
    flow.toggle();
    flow.signup.draft = signup_draft(args);
    let outcome = flow.submit_signup(api).await;
    settle(outcome, &flow)
}

fn signup_draft(args: SignupArgs) -> SignUpDraft {
    let confirm_password = args.confirm_password.unwrap_or_else(|| args.password.clone());
    SignUpDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        username: args.username,
        email: args.email,
        password: args.password,
        confirm_password,
    }
}

async fn run_whoami(api: &Client) -> Result<(), CliError> {
    if !api.session().is_authenticated() {
        return Err(CliError::NotSignedIn);
    }
    match api.profile().await? {
        Some(profile) => println!("{} <{}>", profile.display_name(), profile.email),
        None => println!("Signed in (no profile returned)."),
    }
    Ok(())
}

async fn run_tracking(api: &Client, tracking: TrackingCommand) -> Result<(), CliError> {
    let json = match tracking.command {
        TrackingSubcommand::Orders => serde_json::to_value(api.orders().await?)?,
        TrackingSubcommand::Delays => serde_json::to_value(api.delays().await?)?,
        TrackingSubcommand::Eta => serde_json::to_value(api.eta().await?)?,
        TrackingSubcommand::Order { order_id } => serde_json::to_value(api.order(&order_id).await?)?,
    };
    print_json(&json)
}

async fn run_model(api: &Client, model: ModelCommand) -> Result<(), CliError> {
    let json = match model.command {
        ModelSubcommand::Performance { model_id } => serde_json::to_value(api.model_performance(&model_id).await?)?,
        ModelSubcommand::Info => serde_json::to_value(api.model_info().await?)?,
    };
    print_json(&json)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{pretty}");
    Ok(())
}
