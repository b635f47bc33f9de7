//! Runtime configuration: where the service lives and which demo account
//! to sign in with. Values come from the environment (an optional `.env`
//! file is loaded first by `main`) and fall back to local defaults.

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";

const ENV_BASE_URL: &str = "NOTEKEEPER_URL";
const ENV_USERNAME: &str = "NOTEKEEPER_USERNAME";
const ENV_PASSWORD: &str = "NOTEKEEPER_PASSWORD";

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials {
                username: DEFAULT_USERNAME.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or whitespace-only values
    /// keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Config {
            base_url: get(ENV_BASE_URL, DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            credentials: Credentials {
                username: get(ENV_USERNAME, DEFAULT_USERNAME),
                password: get(ENV_PASSWORD, DEFAULT_PASSWORD),
            },
        }
    }
}
