//! Group API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::okta::OktaClient;

use super::models::{Group, User};

impl OktaClient {
    /// Search groups whose profile name starts with `query`
    pub async fn list_groups(&self, query: &str) -> Result<Vec<Group>> {
        let search = format!("profile.name sw \"{}\"", query);
        let url = format!(
            "{}/{}?limit={}&search={}",
            self.base_url(),
            api::GROUPS,
            api::GROUP_LIMIT,
            urlencoding::encode(&search)
        );
        debug!("Searching groups: {}", url);

        let response = self.get(&url).send().await?;
        let groups: Vec<Group> = self
            .parse_api_response(response, &format!("groups matching '{}'", query))
            .await?;

        debug!("Found {} groups for query '{}'", groups.len(), query);
        Ok(groups)
    }

    /// Get one group by ID; `None` when it does not exist
    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        let path = format!("/{}/{}", api::GROUPS, group_id);
        self.fetch_resource_by_path::<Group>(&path, &format!("group '{}'", group_id))
            .await
    }

    /// List users belonging to a group (first page, up to 100)
    pub async fn list_group_users(&self, group_id: &str) -> Result<Vec<User>> {
        let url = format!(
            "{}/{}/{}/{}?limit={}",
            self.base_url(),
            api::GROUPS,
            group_id,
            api::USERS,
            api::GROUP_LIMIT
        );
        debug!("Fetching group users: {}", url);

        let response = self.get(&url).send().await?;
        let users: Vec<User> = self
            .parse_api_response(response, &format!("users in group '{}'", group_id))
            .await?;

        debug!("Found {} users in group '{}'", users.len(), group_id);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OktaError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn group_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "lastUpdated": "2024-02-06T12:00:00.000Z",
            "lastMembershipUpdated": "2024-03-01T09:30:00.000Z",
            "type": "OKTA_GROUP",
            "profile": {"name": name, "description": ""}
        })
    }

    fn user_json(id: &str, first: &str, last: &str, email: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "profile": {"firstName": first, "lastName": last, "email": email}
        })
    }

    #[tokio::test]
    async fn test_list_groups_prefix_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups"))
            .and(query_param("limit", "100"))
            .and(query_param("search", "profile.name sw \"eng\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                group_json("00g1", "engineering"),
                group_json("00g2", "eng-contractors")
            ])))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let groups = client.list_groups("eng").await.unwrap();

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.name().starts_with("eng")));
    }

    #[tokio::test]
    async fn test_list_groups_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let groups = client.list_groups("nomatch").await.unwrap();

        assert!(groups.is_empty());
    }

    #[tokio::test]
    async fn test_list_groups_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let result = client.list_groups("eng").await;

        assert!(result.is_err());
        match result.unwrap_err() {
            OktaError::Api { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected OktaError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00g1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(group_json("00g1", "Engineering")))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let group = client.get_group("00g1").await.unwrap();

        assert!(group.is_some());
        assert_eq!(group.unwrap().name(), "Engineering");
    }

    #[tokio::test]
    async fn test_get_group_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let group = client.get_group("missing").await.unwrap();

        assert!(group.is_none());
    }

    #[tokio::test]
    async fn test_list_group_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00g1/users"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                user_json("00u1", "Jane", "Doe", "jane.doe@example.com"),
                user_json("00u2", "John", "Smith", "john.smith@example.com")
            ])))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let users = client.list_group_users("00g1").await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email(), "jane.doe@example.com");
        assert_eq!(users[1].first_name(), "John");
    }

    #[tokio::test]
    async fn test_list_group_users_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/groups/00g1/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
            )
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let result = client.list_group_users("00g1").await;

        assert!(result.is_err());
    }
}
