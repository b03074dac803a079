use crate::consts::dashboard_consts::http::{API_URL_ENV, DEFAULT_API_URL};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The backend the dashboard polls.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine.
    #[default]
    Local,
    /// Any other backend, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the environment from, in order: an explicit URL, the
    /// `SIGNAL_API_URL` variable, a configured URL, then the local default.
    /// A source that is not an http(s) URL is skipped with a warning.
    pub fn resolve(explicit: Option<&str>, configured: Option<&str>) -> Self {
        let from_env = std::env::var(API_URL_ENV).ok();
        Self::resolve_with(explicit, from_env.as_deref(), configured)
    }

    fn resolve_with(explicit: Option<&str>, from_env: Option<&str>, configured: Option<&str>) -> Self {
        [explicit, from_env, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .find_map(|url| match url.parse() {
                Ok(environment) => Some(environment),
                Err(()) => {
                    log::warn!("Ignoring invalid API URL {:?}: expected http:// or https://", url);
                    None
                }
            })
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" => Err(()),
            "local" => Ok(Environment::Local),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                if s.trim_end_matches('/') == DEFAULT_API_URL {
                    Ok(Environment::Local)
                } else {
                    Ok(Environment::Custom {
                        api_url: s.to_string(),
                    })
                }
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let env = Environment::resolve_with(
            Some("https://signals.example.com/"),
            Some("http://10.0.0.2:8000"),
            Some("http://10.0.0.3:8000"),
        );
        assert_eq!(env.api_url(), "https://signals.example.com");
    }

    #[test]
    fn test_env_var_beats_config_file() {
        let env = Environment::resolve_with(None, Some("http://10.0.0.2:8000"), Some("http://10.0.0.3:8000"));
        assert_eq!(env.api_url(), "http://10.0.0.2:8000");
    }

    #[test]
    fn test_invalid_url_falls_through_to_next_source() {
        let env = Environment::resolve_with(Some("10.0.0.9:8000"), None, Some("http://10.0.0.3:8000"));
        assert_eq!(env.api_url(), "http://10.0.0.3:8000");

        let env = Environment::resolve_with(None, Some("ftp://10.0.0.2"), Some("http://10.0.0.3:8000"));
        assert_eq!(env.api_url(), "http://10.0.0.3:8000");
    }

    #[test]
    fn test_defaults_to_local() {
        assert_eq!(Environment::resolve_with(None, None, None), Environment::Local);
        assert_eq!(Environment::resolve_with(Some("  "), None, None), Environment::Local);
        assert_eq!(Environment::Local.api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!("ftp://example.com".parse::<Environment>().is_err());
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "http://localhost:8000/".parse::<Environment>(),
            Ok(Environment::Local)
        );
    }
}
