use std::path::PathBuf;

pub struct Config {
    /// Base URL of the repository-listing API. Overridable for tests.
    pub github_api_base: String,
    /// Location of the static rules document.
    pub rules_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let github_api_base = std::env::var("GITHUB_API_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "https://api.github.com".into());
        let rules_path = std::env::var("RULES_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/rules.json"))
            });

        Self {
            github_api_base,
            rules_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_public_api_and_packaged_rules() {
        std::env::remove_var("GITHUB_API_BASE");
        std::env::remove_var("RULES_PATH");
        let cfg = Config::from_env();
        assert_eq!(cfg.github_api_base, "https://api.github.com");
        assert!(cfg.rules_path.ends_with("data/rules.json"));
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        std::env::set_var("GITHUB_API_BASE", "http://127.0.0.1:9999");
        std::env::set_var("RULES_PATH", "/tmp/rules.json");
        let cfg = Config::from_env();
        assert_eq!(cfg.github_api_base, "http://127.0.0.1:9999");
        assert_eq!(cfg.rules_path, std::path::PathBuf::from("/tmp/rules.json"));
        std::env::remove_var("GITHUB_API_BASE");
        std::env::remove_var("RULES_PATH");
    }
}
