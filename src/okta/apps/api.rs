//! Application API operations

use futures::stream::{self, StreamExt};
use log::debug;

use crate::config::api;
use crate::error::{OktaError, Result};
use crate::okta::OktaClient;

use super::models::{App, GroupAssignment};

impl OktaClient {
    /// Search active applications whose name or label starts with `query`
    pub async fn list_apps(&self, query: &str) -> Result<Vec<App>> {
        let url = format!(
            "{}/{}?q={}&filter={}",
            self.base_url(),
            api::APPS,
            urlencoding::encode(query),
            urlencoding::encode(api::ACTIVE_APPS_FILTER)
        );
        debug!("Searching applications: {}", url);

        let response = self.get(&url).send().await?;
        let apps: Vec<App> = self
            .parse_api_response(response, &format!("applications matching '{}'", query))
            .await?;

        debug!("Found {} applications for query '{}'", apps.len(), query);
        Ok(apps)
    }

    /// Get one application by ID; `None` when it does not exist
    pub async fn get_app(&self, app_id: &str) -> Result<Option<App>> {
        let path = format!("/{}/{}", api::APPS, app_id);
        self.fetch_resource_by_path::<App>(&path, &format!("application '{}'", app_id))
            .await
    }

    /// List group assignments for an application, with group names resolved
    ///
    /// Fetches up to 200 assignments (first page), then resolves each
    /// group's display name through a bounded, order-preserving lookup
    /// stream. A failed lookup degrades that one assignment to an empty
    /// name; it never aborts the listing.
    pub async fn list_app_groups(&self, app_id: &str) -> Result<(App, Vec<GroupAssignment>)> {
        let app = self.get_app(app_id).await?.ok_or_else(|| OktaError::Api {
            status: 404,
            message: format!("Application '{}' not found", app_id),
        })?;

        let url = format!(
            "{}/{}/{}/{}?limit={}",
            self.base_url(),
            api::APPS,
            app_id,
            api::GROUPS,
            api::GROUP_ASSIGNMENT_LIMIT
        );
        debug!("Fetching group assignments: {}", url);

        let response = self.get(&url).send().await?;
        let assignments: Vec<GroupAssignment> = self
            .parse_api_response(
                response,
                &format!("group assignments for application '{}'", app_id),
            )
            .await?;

        debug!(
            "Resolving names for {} group assignments (max {} concurrent)",
            assignments.len(),
            api::MAX_CONCURRENT_GROUP_LOOKUPS
        );

        let enriched = stream::iter(
            assignments
                .into_iter()
                .map(|assignment| self.resolve_assignment_name(assignment)),
        )
        .buffered(api::MAX_CONCURRENT_GROUP_LOOKUPS)
        .collect::<Vec<_>>()
        .await;

        Ok((app, enriched))
    }

    /// Attach the group's display name to an assignment
    ///
    /// A transport error, non-success status or missing group leaves the
    /// name unset.
    async fn resolve_assignment_name(&self, mut assignment: GroupAssignment) -> GroupAssignment {
        match self.get_group(&assignment.id).await {
            Ok(Some(group)) => {
                assignment.name = group.profile.name.clone();
            }
            Ok(None) => {
                debug!("Group '{}' not found during enrichment", assignment.id);
            }
            Err(e) => {
                debug!("Group lookup failed for '{}': {}", assignment.id, e);
            }
        }
        assignment
    }
}
