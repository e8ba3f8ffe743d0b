use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::github::GithubClient;
use crate::core::{Args, Block, DispatchError, Entry, FieldType, Handler, Schema};

/// `get_github_repos`: one remote listing call, formatted as a 1-indexed
/// newline-separated list under a count header.
#[derive(Clone)]
pub struct GetGithubRepos {
    client: GithubClient,
}

impl GetGithubRepos {
    pub fn entry(client: GithubClient) -> Entry {
        Entry::tool(
            "get_github_repos",
            "Get Github repositories from the given username",
            Schema::empty().field("username", FieldType::String, "Github username"),
            Arc::new(Self { client }),
        )
    }
}

#[async_trait]
impl Handler for GetGithubRepos {
    async fn handle(&self, args: Args<'_>) -> Result<Vec<Block>, DispatchError> {
        let username = args.str("username")?;
        let repos = self
            .client
            .repos_for(username)
            .await
            .map_err(DispatchError::Upstream)?;
        let listing = repos
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, r.name))
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(vec![Block::text(format!(
            "Github Repositories for {username}: ({} repos) \n\n {listing}",
            repos.len()
        ))])
    }
}
