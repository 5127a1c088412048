use serde::{Deserialize, Serialize};

pub const SITE_CONFIG_PATH: &str = "/api/site-config";

/// Deployment-specific contact details, served by the host at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl SiteConfig {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn repositories_href(&self) -> String {
        let separator = if self.github_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}tab=repositories", self.github_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SiteConfig {
        SiteConfig {
            form_endpoint: "https://formspree.io/f/abc123".to_string(),
            email: "hello@example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            linkedin_url: "https://www.linkedin.com/in/example".to_string(),
        }
    }

    #[test]
    fn derived_links() {
        let config = sample();
        assert_eq!(config.mailto_href(), "mailto:hello@example.com");
        assert_eq!(
            config.repositories_href(),
            "https://github.com/example?tab=repositories"
        );
    }

    #[test]
    fn repositories_link_extends_existing_query() {
        let config = SiteConfig {
            github_url: "https://github.com/example?ref=site".to_string(),
            ..sample()
        };
        assert_eq!(
            config.repositories_href(),
            "https://github.com/example?ref=site&tab=repositories"
        );
    }
}
