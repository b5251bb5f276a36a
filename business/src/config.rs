use log::info;
use serde::Deserialize;
use std::env::vars;
use ustr::Ustr;

/// Base URL used by native builds when `ROSTER_API_BASE_URL` is not set.
pub const DEFAULT_NATIVE_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Public/demo deployments: mutating actions are disabled.
    pub read_only: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_is_public: Option<bool>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            read_only: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Reads `ROSTER_API_BASE_URL` and `ROSTER_IS_PUBLIC` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading roster configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            roster_api_base_url,
            roster_is_public,
        } = raw;

        let api_base_url = match roster_api_base_url {
            Some(url) => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                url.trim_end_matches('/').to_string()
            }
            None => Self::default().api_base_url,
        };

        Self {
            api_base_url,
            read_only: roster_is_public.unwrap_or(false),
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_NATIVE_BASE_URL.to_string()
            },
            read_only: false,
        }
    }
}
