//! oktactl - Main entry point

use clap::Parser;
use log::{debug, info};

use oktactl::{
    run_app_groups_command, run_apps_command, run_get_app_command, run_groups_command,
    run_users_command, Cli, Command, GetResource, ListResource, OktaClient, OrgResolver,
    TokenResolver,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting oktactl v{}", env!("CARGO_PKG_VERSION"));

    // Resolve org URL and token with fallback logic, before any network call
    let org_url = OrgResolver::resolve(cli.org_url.as_deref())?;
    let token = TokenResolver::resolve(cli.token.as_deref())?;

    debug!("Using org URL: {}", org_url);

    let client = OktaClient::new(token, org_url);

    match &cli.command {
        Command::List { resource } => match resource {
            ListResource::Apps(_) => run_apps_command(&client, &cli).await?,
            ListResource::AppGroups(_) => run_app_groups_command(&client, &cli).await?,
            ListResource::Groups(_) => run_groups_command(&client, &cli).await?,
            ListResource::Users(_) => run_users_command(&client, &cli).await?,
        },
        Command::Get { resource } => match resource {
            GetResource::App(_) => run_get_app_command(&client, &cli).await?,
        },
    }

    debug!("Completed successfully");
    Ok(())
}
