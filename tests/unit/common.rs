// Fake transport used by the unit tests

use ice_client::prelude::*;
use std::sync::Mutex;

pub const ROOT: &str = "https://ice.test";

#[derive(Clone)]
enum Reply {
    Status(StatusCode, String),
    Fail(String),
}

struct Route {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    reply: Reply,
}

/// Transport answering from a fixed routing table and recording every request
#[derive(Default)]
pub struct FakeTransport {
    routes: Vec<Route>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method {ROOT}/rest/{path}` with `status` and `body`
    pub fn route(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.route_query(method, path, &[], status, body)
    }

    /// Same as `route`, only when every `query` pair is present
    pub fn route_query(
        mut self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        status: u16,
        body: &str,
    ) -> Self {
        self.routes.push(Route {
            method,
            url: format!("{ROOT}/rest/{path}"),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            reply: Reply::Status(StatusCode::from_u16(status).unwrap(), body.to_string()),
        });
        self
    }

    /// Fails `method {ROOT}/rest/{path}` as if the network was down
    pub fn failing(mut self, method: Method, path: &str, message: &str) -> Self {
        self.routes.push(Route {
            method,
            url: format!("{ROOT}/rest/{path}"),
            query: Vec::new(),
            reply: Reply::Fail(message.to_string()),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests sent to `method {ROOT}/rest/{path}`
    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{ROOT}/rest/{path}");
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait]
impl IceTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> IceResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let route = self.routes.iter().find(|route| {
            route.method == request.method
                && route.url == request.url
                && route
                    .query
                    .iter()
                    .all(|(k, v)| request.query_param(k) == Some(v.as_str()))
        });
        match route.map(|r| r.reply.clone()) {
            Some(Reply::Status(status, body)) => Ok(HttpResponse::new(status, body)),
            Some(Reply::Fail(message)) => Err(AppError::Transport(message)),
            None => Ok(HttpResponse::new(StatusCode::NOT_FOUND, "no route")),
        }
    }
}

pub fn token_config() -> IceConfig {
    IceConfig::with_token(ROOT, "secret-token", Some("icebot"))
}

pub fn password_config() -> IceConfig {
    IceConfig::with_password(ROOT, "john@doe.org", "hunter2")
}

/// Client authenticated with an API token
pub async fn token_client(transport: FakeTransport) -> IceClient<FakeTransport> {
    IceClient::with_transport(token_config(), transport)
        .await
        .expect("token client")
}
