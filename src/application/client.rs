/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Session client for the ICE REST API
//!
//! [`IceClient`] holds the instance address and the resolved session, builds
//! authenticated requests and decodes their JSON answers. The endpoint methods live in
//! the service traits of [`crate::application::interfaces`].
//!
//! # Example
//! ```ignore
//! use ice_client::prelude::*;
//!
//! let config = IceConfig::from_env()?;
//! let ice = IceClient::new(config).await?;
//! let folders = ice.get_collection_folders(Collection::Personal).await?;
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::IceConfig;
use crate::constants::REST_PREFIX;
use crate::error::IceResult;
use crate::model::http::{
    FormField, HttpRequest, HttpResponse, IceTransport, ReqwestTransport, RequestBody,
    make_http_request,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Authenticated client of one ICE instance
///
/// The configuration and session are fixed at construction. In password mode the login
/// call happens in the constructor; in token mode building a client makes no network
/// call. No request is ever retried.
///
/// A client can be shared between tasks when its transport allows it, but it holds no
/// lock: coordinating concurrent use is up to the caller.
pub struct IceClient<T: IceTransport = ReqwestTransport> {
    config: Arc<IceConfig>,
    session: Session,
    transport: T,
}

impl IceClient<ReqwestTransport> {
    /// Creates a client using `reqwest` and authenticates it
    ///
    /// # Arguments
    /// * `config` - Instance address and credentials
    ///
    /// # Returns
    /// * `Ok(IceClient)` - Authenticated client ready to use
    /// * `Err(AppError::Authentication)` - If the login was rejected
    pub async fn new(config: IceConfig) -> IceResult<Self> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, transport).await
    }

    /// Creates a client from a TOML or JSON configuration file
    ///
    /// See [`IceConfig::from_file`] for the accepted keys.
    pub async fn from_file(path: impl AsRef<std::path::Path>) -> IceResult<Self> {
        Self::new(IceConfig::from_file(path)?).await
    }

    /// Creates a client from the `ICE_*` environment variables
    pub async fn from_env() -> IceResult<Self> {
        Self::new(IceConfig::from_env()?).await
    }
}

impl<T: IceTransport> IceClient<T> {
    /// Creates a client sending its requests through `transport`, and authenticates it
    pub async fn with_transport(config: IceConfig, transport: T) -> IceResult<Self> {
        let session = Auth::new(&config, &transport).authenticate().await?;
        Ok(Self {
            config: Arc::new(config),
            session,
            transport,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &IceConfig {
        &self.config
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Login response (account details), in password mode
    pub fn session_info(&self) -> Option<&Value> {
        self.session.info()
    }

    /// Transport used by the client
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL of an endpoint: `{root}/rest/{endpoint}`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.root,
            REST_PREFIX,
            endpoint.trim_start_matches('/')
        )
    }

    /// Makes a GET request
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> IceResult<R> {
        self.request(Method::GET, endpoint, &[], None::<&()>).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> IceResult<R> {
        self.request(Method::GET, endpoint, query, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> IceResult<R> {
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> IceResult<R> {
        self.request(Method::PUT, endpoint, &[], Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> IceResult<R> {
        self.request(Method::DELETE, endpoint, &[], None::<&()>).await
    }

    /// Makes a request and decodes the JSON answer
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Part of the address after `{root}/rest/`
    /// * `query` - Query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(R)` - Decoded response; an empty body decodes as `null`
    /// * `Err(AppError)` - Non-2xx status, transport failure or undecodable body
    pub async fn request<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> IceResult<R> {
        let body = match body {
            Some(b) => RequestBody::Json(serde_json::to_value(b)?),
            None => RequestBody::Empty,
        };
        let response = self.send(method, endpoint, query, body).await?;
        response.json()
    }

    /// Makes a GET request and returns the body as text, for file endpoints
    pub async fn get_text(&self, endpoint: &str) -> IceResult<String> {
        let response = self
            .send(Method::GET, endpoint, &[], RequestBody::Empty)
            .await?;
        Ok(response.text())
    }

    /// Makes a multipart POST request, for file uploads
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: Vec<FormField>,
    ) -> IceResult<R> {
        let response = self
            .send(Method::POST, endpoint, &[], RequestBody::Multipart(fields))
            .await?;
        response.json()
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: RequestBody,
    ) -> IceResult<HttpResponse> {
        let mut headers = self.session.auth_headers();
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        let request = HttpRequest {
            method,
            url: self.endpoint_url(endpoint),
            headers,
            query: query
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
            body,
        };
        make_http_request(&self.transport, request).await
    }
}
