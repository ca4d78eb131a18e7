/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::USER_AGENT;
use crate::error::{AppError, IceResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// Body attached to an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON document, sent with `Content-Type: application/json`
    Json(Value),
    /// `multipart/form-data` fields, used for file uploads
    Multipart(Vec<FormField>),
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Field name
    pub name: String,
    /// Field content
    pub value: String,
    /// File name, when the field is an uploaded file
    pub file_name: Option<String>,
}

impl FormField {
    /// Plain text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            file_name: None,
        }
    }

    /// File field carrying `content` under `file_name`
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: content.into(),
            file_name: Some(file_name.into()),
        }
    }
}

/// A fully built request, ready to be handed to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, without query string
    pub url: String,
    /// Headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl HttpRequest {
    /// Request without headers, query or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Value of the first header named `name` (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of the first query parameter named `name`
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with a text body
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as JSON
    ///
    /// An empty body decodes as `null`, so endpoints answering with nothing can be read
    /// into `Value`, `()` or `Option<_>`.
    pub fn json<T: DeserializeOwned>(&self) -> IceResult<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Capability sending requests to the ICE server
///
/// The client never talks to the network directly: every exchange goes through a
/// transport, so tests can substitute a fake one.
#[async_trait]
pub trait IceTransport: Send + Sync {
    /// Sends one request and returns the response, whatever its status
    ///
    /// Fails with [`AppError::Transport`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> IceResult<HttpResponse>;
}

/// Transport backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate user agent
    pub fn new() -> IceResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client (proxies, timeouts, certificates)
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IceTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> IceResult<HttpResponse> {
        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => {
                let mut form = Form::new();
                for field in fields {
                    form = match field.file_name {
                        Some(file_name) => {
                            form.part(field.name, Part::text(field.value).file_name(file_name))
                        }
                        None => form.text(field.name, field.value),
                    };
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

/// Sends a request through `transport` and turns non-2xx responses into errors
///
/// # Returns
///
/// * `Ok(HttpResponse)` - The response, when its status is 2xx
/// * `Err(AppError::Authentication)` - On 401 and 403
/// * `Err(AppError::NotFound)` - On 404
/// * `Err(AppError::Remote)` - On any other non-2xx status
/// * `Err(AppError::Transport)` - When the request could not be sent
pub async fn make_http_request<T: IceTransport + ?Sized>(
    transport: &T,
    request: HttpRequest,
) -> IceResult<HttpResponse> {
    let method = request.method.clone();
    let url = request.url.clone();
    debug!("{} {}", method, url);

    let response = transport.send(request).await.inspect_err(|e| {
        error!("{} {} could not be sent: {}", method, url, e);
    })?;
    debug!("Response status: {}", response.status);

    if response.status.is_success() {
        return Ok(response);
    }

    let body = response.text();
    error!(
        "Request {} {} failed with status {}: {}",
        method, url, response.status, body
    );
    Err(AppError::from_status(response.status, body, &url))
}
