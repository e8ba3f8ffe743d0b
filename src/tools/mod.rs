pub mod arithmetic;
pub mod github_repos;
