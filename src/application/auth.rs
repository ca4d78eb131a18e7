/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Authentication against an ICE instance
//!
//! Token credentials are used as they are. Email and password credentials are
//! exchanged once for a session id, which is then attached to every request.

use crate::application::config::{Credentials, IceConfig};
use crate::constants::{
    API_TOKEN_CLIENT_HEADER, API_TOKEN_HEADER, LOGIN_ENDPOINT, REST_PREFIX, SESSION_ID_HEADER,
};
use crate::error::{AppError, IceResult};
use crate::model::http::{HttpRequest, IceTransport, RequestBody};
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, info};

#[derive(Clone, PartialEq, Eq)]
enum SessionCredential {
    ApiToken { token: String, client: Option<String> },
    SessionId(String),
}

/// Resolved credentials of an authenticated client
///
/// Immutable once built: the client never re-authenticates.
#[derive(Clone)]
pub struct Session {
    credential: SessionCredential,
    info: Option<Value>,
    authenticated_at: DateTime<Utc>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.credential {
            SessionCredential::ApiToken { .. } => "api-token",
            SessionCredential::SessionId(_) => "session-id",
        };
        f.debug_struct("Session")
            .field("mode", &mode)
            .field("authenticated_at", &self.authenticated_at)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Session using an API token directly
    pub fn from_token(token: impl Into<String>, client: Option<String>) -> Self {
        Self {
            credential: SessionCredential::ApiToken {
                token: token.into(),
                client,
            },
            info: None,
            authenticated_at: Utc::now(),
        }
    }

    /// Session obtained by logging in
    pub fn from_session_id(session_id: impl Into<String>, info: Value) -> Self {
        Self {
            credential: SessionCredential::SessionId(session_id.into()),
            info: Some(info),
            authenticated_at: Utc::now(),
        }
    }

    /// Whether requests are authenticated with an API token
    #[must_use]
    pub fn is_token(&self) -> bool {
        matches!(self.credential, SessionCredential::ApiToken { .. })
    }

    /// Session id returned by the login call, in password mode
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        match &self.credential {
            SessionCredential::SessionId(id) => Some(id),
            SessionCredential::ApiToken { .. } => None,
        }
    }

    /// Body of the login response (account details), in password mode
    #[must_use]
    pub fn info(&self) -> Option<&Value> {
        self.info.as_ref()
    }

    /// When the session was established
    #[must_use]
    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }

    /// Headers to attach to every authenticated request
    #[must_use]
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        match &self.credential {
            SessionCredential::ApiToken { token, client } => {
                if let Some(client) = client {
                    headers.push((API_TOKEN_CLIENT_HEADER.to_string(), client.clone()));
                }
                headers.push((API_TOKEN_HEADER.to_string(), token.clone()));
            }
            SessionCredential::SessionId(id) => {
                headers.push((SESSION_ID_HEADER.to_string(), id.clone()));
            }
        }
        headers
    }
}

/// Authentication handler for an ICE instance
pub struct Auth<'a, T: IceTransport + ?Sized> {
    config: &'a IceConfig,
    transport: &'a T,
}

impl<'a, T: IceTransport + ?Sized> Auth<'a, T> {
    /// Creates a new authentication handler
    ///
    /// # Arguments
    /// * `config` - Instance address and credentials
    /// * `transport` - Transport used for the login call
    pub fn new(config: &'a IceConfig, transport: &'a T) -> Self {
        Self { config, transport }
    }

    /// Resolves the configured credentials into a session
    ///
    /// Token credentials need no network call. Email and password credentials are sent
    /// to the login endpoint once.
    pub async fn authenticate(&self) -> IceResult<Session> {
        match &self.config.credentials {
            Credentials::ApiToken { token, client } => {
                debug!("Using API token authentication");
                Ok(Session::from_token(token.clone(), client.clone()))
            }
            Credentials::Password { email, password } => self.login(email, password).await,
        }
    }

    /// Exchanges an email and password for a session id
    ///
    /// # Returns
    /// * `Ok(Session)` - Session carrying the returned id and the login response body
    /// * `Err(AppError::Authentication)` - If the server rejected the credentials
    /// * `Err(AppError::Transport)` - If the server could not be reached
    pub async fn login(&self, email: &str, password: &str) -> IceResult<Session> {
        let url = format!("{}/{}/{}", self.config.root, REST_PREFIX, LOGIN_ENDPOINT);
        info!("Logging in to {} as {}", self.config.root, email);

        let mut request = HttpRequest::new(Method::POST, url);
        for name in ["Accept", "Content-Type"] {
            request
                .headers
                .push((name.to_string(), "application/json".to_string()));
        }
        request.body = RequestBody::Json(serde_json::to_value(LoginRequest { email, password })?);

        let response = self.transport.send(request).await?;
        let status = response.status;
        debug!("Login response status: {}", status);

        if !status.is_success() {
            let body = response.text();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Authentication { status, body });
        }

        let info: Value = response.json()?;
        let session_id = serde_json::from_value::<LoginResponse>(info.clone())
            .ok()
            .and_then(|login| login.session_id)
            .filter(|id| !id.is_empty());
        let Some(session_id) = session_id else {
            error!("Login response carries no session id");
            return Err(AppError::Authentication {
                status,
                body: response.text(),
            });
        };

        info!("✓ Login successful for {}", email);
        Ok(Session::from_session_id(session_id, info))
    }
}
