pub mod tournaments;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    join_url(&Config::api_base_url(), path)
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}
