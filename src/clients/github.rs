use std::time::Instant;

use reqwest::Client;
use serde::Deserialize;

/// Fixed outgoing identity; the listing endpoint rejects anonymous clients.
pub const USER_AGENT: &str = "MCP_Server";

#[derive(Clone)]
pub struct GithubClient {
    base: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
pub struct RepoWire {
    pub name: String,
}

impl GithubClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: Client::new(),
        }
    }

    /// One GET to the repository listing endpoint. A non-2xx status is total
    /// failure; no retry, no timeout.
    pub async fn repos_for(&self, username: &str) -> Result<Vec<RepoWire>, String> {
        let url = format!("{}/users/{}/repos", self.base.trim_end_matches('/'), username);
        tracing::debug!(endpoint = %url, "github.repos request");
        let start = Instant::now();
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            crate::infra::logging::log_metric("get_github_repos", "remote_error_total", 1.0);
            return Err(format!("github api status {}", resp.status()));
        }
        let repos = resp.json::<Vec<RepoWire>>().await.map_err(|e| e.to_string())?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("get_github_repos", "remote_latency_ms", elapsed_ms);
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn it_lists_repo_names_in_order() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .header("user-agent", USER_AGENT);
            then.status(200)
                .json_body(json!([{"name": "Hello-World"}, {"name": "Spoon-Knife"}]));
        });

        let cli = GithubClient::new(server.base_url());
        let out = cli.repos_for("octocat").await.unwrap();
        m.assert();

        let names: Vec<_> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Hello-World", "Spoon-Knife"]);
    }

    #[tokio::test]
    async fn it_reports_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/ghost/repos");
            then.status(404).body("Not Found");
        });

        let cli = GithubClient::new(server.base_url());
        let err = cli.repos_for("ghost").await.unwrap_err();
        assert!(err.contains("github api status 404"), "got: {err}");
    }

    #[tokio::test]
    async fn it_tolerates_extra_fields_in_the_listing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/octocat/repos");
            then.status(200)
                .json_body(json!([{"name": "Hello-World", "fork": false, "stargazers_count": 3}]));
        });

        let cli = GithubClient::new(server.base_url());
        let out = cli.repos_for("octocat").await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Hello-World");
    }
}
