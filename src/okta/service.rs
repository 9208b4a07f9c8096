//! Service seam over the five logical directory queries
//!
//! Command handlers are generic over this trait, so tests can substitute
//! a fixture-backed implementation for the network-backed [`OktaClient`].

use crate::error::Result;

use super::apps::{App, GroupAssignment};
use super::groups::{Group, User};
use super::OktaClient;

/// The five logical queries against the Okta directory
#[allow(async_fn_in_trait)]
pub trait OktaService {
    /// Search active applications whose name or label starts with `query`
    async fn list_apps(&self, query: &str) -> Result<Vec<App>>;

    /// Fetch one application by ID; `None` when it does not exist
    async fn get_app(&self, app_id: &str) -> Result<Option<App>>;

    /// Group assignments for an application, names resolved per group
    async fn list_app_groups(&self, app_id: &str) -> Result<(App, Vec<GroupAssignment>)>;

    /// Search groups whose profile name starts with `query`
    async fn list_groups(&self, query: &str) -> Result<Vec<Group>>;

    /// Users belonging to a group
    async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>>;
}

impl OktaService for OktaClient {
    async fn list_apps(&self, query: &str) -> Result<Vec<App>> {
        OktaClient::list_apps(self, query).await
    }

    async fn get_app(&self, app_id: &str) -> Result<Option<App>> {
        OktaClient::get_app(self, app_id).await
    }

    async fn list_app_groups(&self, app_id: &str) -> Result<(App, Vec<GroupAssignment>)> {
        OktaClient::list_app_groups(self, app_id).await
    }

    async fn list_groups(&self, query: &str) -> Result<Vec<Group>> {
        OktaClient::list_groups(self, query).await
    }

    async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>> {
        OktaClient::list_group_users(self, group_id).await
    }
}
