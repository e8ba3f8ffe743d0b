use crate::clients::github::GithubClient;
use crate::core::Registry;
use crate::infra::config::Config;
use crate::prompts::explain_sql::ExplainSql;
use crate::resources::society_rules::SocietyRules;
use crate::tools::arithmetic::AddTwoNumbers;
use crate::tools::github_repos::GetGithubRepos;

/// Build the process-wide entry table. Called exactly once; duplicate names
/// abort startup.
pub fn build_registry(cfg: &Config) -> Registry {
    Registry::builder()
        .register(AddTwoNumbers::entry())
        .register(GetGithubRepos::entry(GithubClient::new(
            cfg.github_api_base.clone(),
        )))
        .register(SocietyRules::entry(cfg.rules_path.clone()))
        .register(ExplainSql::entry())
        .build()
}

pub async fn run() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        github_api_base = %cfg.github_api_base,
        rules_path = %cfg.rules_path.display(),
        "BOOT first-mcp"
    );

    let registry = build_registry(&cfg);
    crate::infra::mcp::serve_stdio(registry)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryKind;
    use serial_test::serial;

    #[test]
    #[serial]
    fn registry_holds_every_advertised_entry() {
        std::env::remove_var("GITHUB_API_BASE");
        std::env::remove_var("RULES_PATH");
        let reg = build_registry(&Config::from_env());
        assert!(reg.get(EntryKind::Tool, "add_two_number").is_some());
        assert!(reg.get(EntryKind::Tool, "get_github_repos").is_some());
        assert!(reg.get(EntryKind::Resource, "society_rules").is_some());
        assert!(reg.get(EntryKind::Prompt, "explain_sql").is_some());
        assert!(reg.resource_by_uri("rules://all").is_some());
    }
}
