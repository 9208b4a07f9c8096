//! Application command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource, ListResource};
use crate::okta::OktaService;
use crate::output::{output_app_groups, output_apps};
use crate::ui::{create_spinner, finish_spinner};

/// Run the 'list apps' command
pub async fn run_apps_command(
    service: &impl OktaService,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::List {
        resource: ListResource::Apps(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Searching applications matching '{}'", args.query);

    let spinner = create_spinner(
        &format!("Searching applications matching '{}'...", args.query),
        cli.quiet,
    );
    let result = service.list_apps(&args.query).await;
    finish_spinner(spinner);
    let apps = result?;

    if apps.is_empty() {
        eprintln!("No applications found matching '{}'", args.query);
        return Ok(());
    }

    output_apps(&apps, &args.output, cli.no_header);
    Ok(())
}

/// Run the 'get app' command
pub async fn run_get_app_command(
    service: &impl OktaService,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::App(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Fetching application '{}'", args.app_id);

    let spinner = create_spinner(
        &format!("Fetching application '{}'...", args.app_id),
        cli.quiet,
    );
    let result = service.get_app(&args.app_id).await;
    finish_spinner(spinner);

    match result? {
        Some(app) => {
            output_apps(std::slice::from_ref(&app), &args.output, cli.no_header);
            Ok(())
        }
        None => Err(format!("Application '{}' not found", args.app_id).into()),
    }
}

/// Run the 'list app-groups' command
pub async fn run_app_groups_command(
    service: &impl OktaService,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::List {
        resource: ListResource::AppGroups(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Fetching group assignments for application '{}'", args.app_id);

    let spinner = create_spinner(
        &format!("Fetching group assignments for '{}'...", args.app_id),
        cli.quiet,
    );
    let result = service.list_app_groups(&args.app_id).await;
    finish_spinner(spinner);
    let (app, groups) = result?;

    if groups.is_empty() {
        eprintln!("No group assignments found for application '{}'", args.app_id);
        return Ok(());
    }

    output_app_groups(&app, &groups, &args.output, cli.no_header);
    Ok(())
}
