//! Command-line driver for one-off token lifecycle runs.
//!
//! Logs in with the given credentials, then creates, downloads, exercises,
//! and revokes an API token. The first failing step is reported and the
//! remainder of the sequence is abandoned.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vco_integration::{
    vco_config, ApiTokenParams, UserType, VcoClient, DEFAULT_TOKEN_LIFETIME_MS,
    DEFAULT_TOKEN_NAME,
};

#[derive(Parser, Debug)]
#[command(name = "vco-token", about = "Exercise the VCO API token lifecycle")]
struct Args {
    /// Orchestrator hostname (or full base URL).
    #[arg(long)]
    hostname: String,

    /// Login username.
    #[arg(long)]
    username: String,

    /// Login password.
    #[arg(long)]
    password: String,

    /// User type: OPERATOR, ENTERPRISE, PROXY, or MSP.
    #[arg(long = "user-type")]
    user_type: String,

    /// Display name for the token.
    #[arg(long, default_value = DEFAULT_TOKEN_NAME)]
    name: String,

    /// Token lifetime in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TOKEN_LIFETIME_MS)]
    lifetime_ms: u64,

    /// Operator user id (OPERATOR only).
    #[arg(long, default_value_t = 1)]
    operator_user_id: u64,

    /// Enterprise user id (ENTERPRISE, PROXY, MSP).
    #[arg(long, default_value_t = 1)]
    enterprise_user_id: u64,

    /// Enterprise id (ENTERPRISE only).
    #[arg(long, default_value_t = 1)]
    enterprise_id: u64,

    /// Enterprise proxy id (PROXY, MSP).
    #[arg(long, default_value_t = 1)]
    enterprise_proxy_id: u64,

    /// Skip TLS certificate verification.
    #[arg(long)]
    insecure: bool,
}

fn token_params(args: &Args, user_type: UserType) -> ApiTokenParams {
    match user_type {
        UserType::Operator => {
            ApiTokenParams::for_operator(args.operator_user_id, &args.name, args.lifetime_ms)
        }
        UserType::Enterprise => ApiTokenParams::for_enterprise(
            args.enterprise_user_id,
            args.enterprise_id,
            &args.name,
            args.lifetime_ms,
        ),
        UserType::Proxy | UserType::Msp => ApiTokenParams::for_proxy(
            args.enterprise_user_id,
            args.enterprise_proxy_id,
            &args.name,
            args.lifetime_ms,
        ),
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let user_type: UserType = args.user_type.parse()?;

    let config = vco_config()
        .hostname(&args.hostname)
        .username(&args.username)
        .password(&args.password)
        .user_type(user_type)
        .insecure(args.insecure)
        .build()?;

    let client = VcoClient::new(config)?;
    client.authenticate().await?;

    let params = token_params(&args, user_type);
    let token_id = client.run_token_lifecycle(params).await?;
    println!("created, exercised and revoked API token {}", token_id);

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(error) = run(args).await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
