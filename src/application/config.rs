use crate::error::{AppError, IceResult};
use crate::utils::config::get_env_or_none;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// How the client authenticates against ICE
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API token, with the id of the client it was issued to
    ApiToken {
        /// Token value
        token: String,
        /// Token client id, sent along with the token when present
        client: Option<String>,
    },
    /// Account email and password, exchanged for a session id at construction
    Password {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiToken { client, .. } => f
                .debug_struct("ApiToken")
                .field("token", &"***")
                .field("client", client)
                .finish(),
            Credentials::Password { email, .. } => f
                .debug_struct("Password")
                .field("email", email)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Flat key set accepted in mappings, files and the environment
///
/// `root` plus either `token` (and optionally `client`) or `email` and `password`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigKeys {
    /// Web address of the ICE instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API token client id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Account email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Configuration of an ICE client: where the instance lives and how to authenticate
///
/// Exactly one authentication mode is set; this is checked whenever a configuration is
/// built from untyped keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigKeys", into = "ConfigKeys")]
pub struct IceConfig {
    /// Web address of the instance, without trailing slash
    pub root: String,
    /// Authentication mode and secrets
    pub credentials: Credentials,
}

fn normalize_root(root: &str) -> String {
    root.trim().trim_end_matches('/').to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl IceConfig {
    /// Token authentication against the instance at `root`
    pub fn with_token(root: &str, token: impl Into<String>, client: Option<&str>) -> Self {
        Self {
            root: normalize_root(root),
            credentials: Credentials::ApiToken {
                token: token.into(),
                client: client.map(str::to_string),
            },
        }
    }

    /// Email and password authentication against the instance at `root`
    pub fn with_password(
        root: &str,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            root: normalize_root(root),
            credentials: Credentials::Password {
                email: email.into(),
                password: password.into(),
            },
        }
    }

    /// Builds a configuration from a mapping with the keys of [`ConfigKeys`]
    pub fn from_map(map: &HashMap<String, String>) -> IceResult<Self> {
        let get = |key: &str| map.get(key).cloned();
        ConfigKeys {
            root: get("root"),
            token: get("token"),
            client: get("client"),
            email: get("email"),
            password: get("password"),
        }
        .try_into()
    }

    /// Reads a configuration file holding the keys of [`ConfigKeys`]
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML:
    ///
    /// ```toml
    /// root = "https://ice.example.org"
    /// token = "WHz+BC..."
    /// client = "icebot"
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> IceResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        debug!("Loaded ICE configuration from {}", path.display());
        Ok(config)
    }

    /// Reads the configuration from the environment, after loading a `.env` file if any
    ///
    /// Variables: `ICE_ROOT`, `ICE_TOKEN`, `ICE_TOKEN_CLIENT`, `ICE_EMAIL`, `ICE_PASSWORD`.
    pub fn from_env() -> IceResult<Self> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        ConfigKeys {
            root: get_env_or_none("ICE_ROOT"),
            token: get_env_or_none("ICE_TOKEN"),
            client: get_env_or_none("ICE_TOKEN_CLIENT"),
            email: get_env_or_none("ICE_EMAIL"),
            password: get_env_or_none("ICE_PASSWORD"),
        }
        .try_into()
    }

    /// Whether the client must log in before its first request
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self.credentials, Credentials::Password { .. })
    }
}

impl TryFrom<ConfigKeys> for IceConfig {
    type Error = AppError;

    fn try_from(keys: ConfigKeys) -> Result<Self, Self::Error> {
        let root = non_blank(keys.root)
            .ok_or_else(|| AppError::Config("missing `root`".to_string()))?;
        let token = non_blank(keys.token);
        let client = non_blank(keys.client);
        let email = non_blank(keys.email);
        let password = non_blank(keys.password);

        let credentials = match (token, email, password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(AppError::Config(
                    "both `token` and `email`/`password` are set, use only one".to_string(),
                ));
            }
            (Some(token), None, None) => Credentials::ApiToken { token, client },
            (None, Some(email), Some(password)) => {
                if client.is_some() {
                    return Err(AppError::Config(
                        "`client` only applies to token authentication".to_string(),
                    ));
                }
                Credentials::Password { email, password }
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(AppError::Config(
                    "`email` and `password` must be set together".to_string(),
                ));
            }
            (None, None, None) => {
                return Err(AppError::Config(
                    "no credentials: set `token` or `email` and `password`".to_string(),
                ));
            }
        };

        Ok(Self {
            root: normalize_root(&root),
            credentials,
        })
    }
}

impl From<IceConfig> for ConfigKeys {
    fn from(config: IceConfig) -> Self {
        let mut keys = ConfigKeys {
            root: Some(config.root),
            ..ConfigKeys::default()
        };
        match config.credentials {
            Credentials::ApiToken { token, client } => {
                keys.token = Some(token);
                keys.client = client;
            }
            Credentials::Password { email, password } => {
                keys.email = Some(email);
                keys.password = Some(password);
            }
        }
        keys
    }
}
