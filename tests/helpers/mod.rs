use notekeeper_client::api::{HttpRequest, HttpResponse, Transport};
use notekeeper_client::ApiError;
use reqwest::Method;
use std::cell::RefCell;

/// Transport that answers from a fixed routing table and records every
/// request it is handed.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<(Method, String, u16, String)>,
    pub sent: RefCell<Vec<HttpRequest>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `method` request whose URL ends with `path`.
    pub fn route(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .push((method, path.to_string(), status, body.to_string()));
        self
    }

    pub fn count(&self, method: &Method, path: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| &r.method == method && r.url.ends_with(path))
            .count()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let found = self
            .routes
            .iter()
            .find(|(m, p, _, _)| *m == request.method && request.url.ends_with(p.as_str()))
            .map(|(_, _, status, body)| HttpResponse {
                status: *status,
                body: body.clone(),
            })
            .unwrap_or(HttpResponse {
                status: 404,
                body: String::new(),
            });
        self.sent.borrow_mut().push(request);
        Ok(found)
    }
}
