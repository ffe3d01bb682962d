//! Authenticated client construction
//!
//! Resolves the ambient credential for a host (github.com or GitHub
//! Enterprise) and builds an [`OctocrabClient`] pointed at its API.

use crate::{OctocrabClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Resolves GitHub tokens for different hosts
///
/// Tries multiple sources in order:
/// 1. Host-specific env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
/// 2. `gh auth token --hostname {host}` command
/// 3. `GH_TOKEN` or `GITHUB_TOKEN` (github.com), `GH_ENTERPRISE_TOKEN` or
///    `GITHUB_ENTERPRISE_TOKEN` (other hosts)
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    default_token: Option<String>,
    enterprise_token: Option<String>,
}

/// Env var holding a token for one specific host
pub fn host_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| std::env::var(k).ok())
        .find(|v| !v.is_empty())
}

impl TokenResolver {
    /// Create a token resolver reading the generic token variables
    pub fn new() -> Self {
        Self {
            default_token: first_env(&["GH_TOKEN", "GITHUB_TOKEN"]),
            enterprise_token: first_env(&["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]),
        }
    }

    /// Get a token for the given host
    pub async fn get_token(&self, host: &str) -> Result<String> {
        let env_key = host_env_key(host);
        if let Some(token) = first_env(&[env_key.as_str()]) {
            debug!("Using token from env var {} for host {}", env_key, host);
            return Ok(token);
        }

        debug!("Trying gh auth token for host {}", host);
        match tokio::process::Command::new("gh")
            .args(["auth", "token", "--hostname", host])
            .output()
            .await
        {
            Ok(output) if output.status.success() => {
                let token = String::from_utf8(output.stdout)
                    .context("Invalid UTF-8 in gh auth token output")?
                    .trim()
                    .to_string();
                if !token.is_empty() {
                    debug!("Using token from gh CLI for host {}", host);
                    return Ok(token);
                }
            }
            Ok(output) => debug!("gh auth token exited with {}", output.status),
            Err(e) => debug!("Could not run gh: {}", e),
        }

        if let Some(token) = self.fallback_token(host) {
            debug!("Using generic token variable for host {}", host);
            return Ok(token.to_string());
        }

        Err(anyhow::anyhow!(
            "No token found for host '{}'. \
             Set GH_TOKEN, {} or run 'gh auth login --hostname {}'",
            host,
            env_key,
            host
        ))
    }

    fn fallback_token(&self, host: &str) -> Option<&str> {
        if host == DEFAULT_HOST {
            self.default_token.as_deref()
        } else {
            self.enterprise_token.as_deref()
        }
    }
}

/// REST API base URI for a host
pub fn api_base_uri(host: &str) -> String {
    if host == DEFAULT_HOST {
        "https://api.github.com".to_string()
    } else {
        format!("https://{}/api/v3", host)
    }
}

/// Build an authenticated client for the given host
pub async fn connect(host: &str, tokens: &TokenResolver) -> Result<OctocrabClient> {
    info!("Creating GitHub client for host: {}", host);

    let token = tokens.get_token(host).await?;

    let mut builder = Octocrab::builder().personal_token(token);
    if host != DEFAULT_HOST {
        builder = builder
            .base_uri(api_base_uri(host))
            .context("Failed to set base URI")?;
    }

    let octocrab = builder.build().context("Failed to build Octocrab client")?;
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_env_key() {
        let hosts = [
            ("github.com", "GITHUB_TOKEN_GITHUB_COM"),
            ("ghe.example.com", "GITHUB_TOKEN_GHE_EXAMPLE_COM"),
            (
                "github-enterprise.corp.com",
                "GITHUB_TOKEN_GITHUB_ENTERPRISE_CORP_COM",
            ),
        ];

        for (host, expected_key) in hosts {
            assert_eq!(
                host_env_key(host),
                expected_key,
                "Host '{}' should produce key '{}'",
                host,
                expected_key
            );
        }
    }

    #[test]
    fn test_api_base_uri() {
        assert_eq!(api_base_uri(DEFAULT_HOST), "https://api.github.com");
        assert_eq!(
            api_base_uri("ghe.example.com"),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn test_fallback_token_is_host_specific() {
        let tokens = TokenResolver {
            default_token: Some("public".to_string()),
            enterprise_token: Some("enterprise".to_string()),
        };
        assert_eq!(tokens.fallback_token(DEFAULT_HOST), Some("public"));
        assert_eq!(tokens.fallback_token("ghe.example.com"), Some("enterprise"));

        let empty = TokenResolver::default();
        assert_eq!(empty.fallback_token(DEFAULT_HOST), None);
    }
}
