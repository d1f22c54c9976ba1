pub struct Config;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

impl Config {
    /// Base address of the tournament API.
    ///
    /// Set `TOURNAMENT_API_URL` at build time to point elsewhere; an empty
    /// value makes every request relative, for deployments that proxy `/api/`.
    pub fn api_base_url() -> String {
        Self::resolve_base_url(option_env!("TOURNAMENT_API_URL"))
    }

    pub(crate) fn resolve_base_url(configured: Option<&str>) -> String {
        configured
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}
