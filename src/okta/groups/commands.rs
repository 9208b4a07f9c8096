//! Group command handlers

use log::debug;

use crate::cli::{Cli, Command, ListResource};
use crate::okta::OktaService;
use crate::output::{output_groups, output_users};
use crate::ui::{create_spinner, finish_spinner};

/// Run the 'list groups' command
pub async fn run_groups_command(
    service: &impl OktaService,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::List {
        resource: ListResource::Groups(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Searching groups matching '{}'", args.query);

    let spinner = create_spinner(
        &format!("Searching groups matching '{}'...", args.query),
        cli.quiet,
    );
    let result = service.list_groups(&args.query).await;
    finish_spinner(spinner);
    let groups = result?;

    if groups.is_empty() {
        eprintln!("No groups found matching '{}'", args.query);
        return Ok(());
    }

    output_groups(&groups, &args.output, cli.no_header);
    Ok(())
}

/// Run the 'list users' command
pub async fn run_users_command(
    service: &impl OktaService,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::List {
        resource: ListResource::Users(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Fetching users in group '{}'", args.group_id);

    let spinner = create_spinner(
        &format!("Fetching users in group '{}'...", args.group_id),
        cli.quiet,
    );
    let result = service.list_group_users(&args.group_id).await;
    finish_spinner(spinner);
    let users = result?;

    if users.is_empty() {
        eprintln!("No users found in group '{}'", args.group_id);
        return Ok(());
    }

    output_users(&users, &args.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OktaError, Result};
    use crate::okta::apps::{App, GroupAssignment};
    use crate::okta::groups::{Group, User};
    use clap::Parser;

    /// Fixture-backed service, substituting the network client
    struct FixtureService {
        groups: Vec<Group>,
        users: Vec<User>,
        fail: bool,
    }

    impl OktaService for FixtureService {
        async fn list_apps(&self, _query: &str) -> Result<Vec<App>> {
            Ok(Vec::new())
        }

        async fn get_app(&self, _app_id: &str) -> Result<Option<App>> {
            Ok(None)
        }

        async fn list_app_groups(&self, app_id: &str) -> Result<(App, Vec<GroupAssignment>)> {
            Err(OktaError::Api {
                status: 404,
                message: format!("Application '{}' not found", app_id),
            })
        }

        async fn list_groups(&self, query: &str) -> Result<Vec<Group>> {
            if self.fail {
                return Err(OktaError::Api {
                    status: 500,
                    message: "fixture failure".to_string(),
                });
            }
            Ok(self
                .groups
                .iter()
                .filter(|g| g.name().starts_with(query))
                .cloned()
                .collect())
        }

        async fn list_group_users(&self, _group_id: &str) -> Result<Vec<User>> {
            if self.fail {
                return Err(OktaError::Api {
                    status: 500,
                    message: "fixture failure".to_string(),
                });
            }
            Ok(self.users.clone())
        }
    }

    fn fixture_group(id: &str, name: &str) -> Group {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "OKTA_GROUP",
            "profile": {"name": name}
        }))
        .unwrap()
    }

    fn fixture_user(id: &str, email: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "profile": {"email": email, "firstName": "Test", "lastName": "User"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_groups_command_with_fixture() {
        let service = FixtureService {
            groups: vec![
                fixture_group("00g1", "engineering"),
                fixture_group("00g2", "eng-contractors"),
                fixture_group("00g3", "sales"),
            ],
            users: Vec::new(),
            fail: false,
        };
        let cli = Cli::parse_from(["oktactl", "-q", "list", "groups", "eng"]);

        let result = run_groups_command(&service, &cli).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_groups_command_empty_is_ok() {
        let service = FixtureService {
            groups: Vec::new(),
            users: Vec::new(),
            fail: false,
        };
        let cli = Cli::parse_from(["oktactl", "-q", "list", "groups", "nomatch"]);

        let result = run_groups_command(&service, &cli).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_groups_command_propagates_error() {
        let service = FixtureService {
            groups: Vec::new(),
            users: Vec::new(),
            fail: true,
        };
        let cli = Cli::parse_from(["oktactl", "-q", "list", "groups", "eng"]);

        let result = run_groups_command(&service, &cli).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_users_command_with_fixture() {
        let service = FixtureService {
            groups: Vec::new(),
            users: vec![
                fixture_user("00u1", "jane@example.com"),
                fixture_user("00u2", "john@example.com"),
            ],
            fail: false,
        };
        let cli = Cli::parse_from(["oktactl", "-q", "list", "users", "00g1"]);

        let result = run_users_command(&service, &cli).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_users_command_propagates_error() {
        let service = FixtureService {
            groups: Vec::new(),
            users: Vec::new(),
            fail: true,
        };
        let cli = Cli::parse_from(["oktactl", "-q", "list", "users", "00g1"]);

        let result = run_users_command(&service, &cli).await;
        assert!(result.is_err());
    }
}
