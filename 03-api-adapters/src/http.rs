//! A value-based wire model: comparable request and response values, a
//! handler abstraction over transport, and request-transforming filters
//! that compose around any handler.

/// The request methods the examples need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound request, described as plain data so tests can compare it
/// against an expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub uri: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiRequest {
    pub fn new(method: Method, uri: impl Into<String>) -> ApiRequest {
        ApiRequest {
            method,
            uri: uri.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn get(uri: impl Into<String>) -> ApiRequest {
        ApiRequest::new(Method::Get, uri)
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> ApiRequest {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> ApiRequest {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> ApiRequest {
        self.body = body.into();
        self
    }

    /// The first header with the given name, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> ApiResponse {
        ApiResponse {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> ApiResponse {
        ApiResponse::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can turn a request into a response: the real network,
/// an in-memory table, or a filter wrapped around either.
pub trait HttpHandler {
    fn handle(&self, request: ApiRequest) -> ApiResponse;
}

// Closures are handlers, so tests can inline their transport.
impl<F> HttpHandler for F
where
    F: Fn(ApiRequest) -> ApiResponse,
{
    fn handle(&self, request: ApiRequest) -> ApiResponse {
        self(request)
    }
}

/// A handler that rewrites every request before its inner handler sees it.
pub struct MapRequest<H, F> {
    inner: H,
    transform: F,
}

impl<H, F> HttpHandler for MapRequest<H, F>
where
    H: HttpHandler,
    F: Fn(ApiRequest) -> ApiRequest,
{
    fn handle(&self, request: ApiRequest) -> ApiResponse {
        self.inner.handle((self.transform)(request))
    }
}

pub trait HttpHandlerExt: HttpHandler + Sized {
    /// Wraps this handler so `transform` runs on every request first.
    fn map_request<F>(self, transform: F) -> MapRequest<Self, F>
    where
        F: Fn(ApiRequest) -> ApiRequest,
    {
        MapRequest {
            inner: self,
            transform,
        }
    }
}

impl<H: HttpHandler> HttpHandlerExt for H {}

/// Prefixes every request's uri with `base`.
pub fn set_base_uri(base: impl Into<String>) -> impl Fn(ApiRequest) -> ApiRequest {
    let base = base.into();
    move |mut request| {
        request.uri = format!("{}{}", base, request.uri);
        request
    }
}

/// Adds a header to every request.
pub fn set_header(
    name: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(ApiRequest) -> ApiRequest {
    let name = name.into();
    let value = value.into();
    move |request| request.with_header(name.clone(), value.clone())
}

/// Adds a bearer `Authorization` header to every request.
pub fn bearer_auth(token: impl Into<String>) -> impl Fn(ApiRequest) -> ApiRequest {
    set_header("Authorization", format!("Bearer {}", token.into()))
}

/// The real network. Transport failures surface as a 503 response; the
/// handler contract has no separate error channel.
pub struct ReqwestHandler {
    client: reqwest::blocking::Client,
}

impl ReqwestHandler {
    pub fn new() -> ReqwestHandler {
        ReqwestHandler {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestHandler {
    fn default() -> ReqwestHandler {
        ReqwestHandler::new()
    }
}

impl HttpHandler for ReqwestHandler {
    fn handle(&self, request: ApiRequest) -> ApiResponse {
        let mut builder = match request.method {
            Method::Get => self.client.get(request.uri.as_str()),
            Method::Post => self.client.post(request.uri.as_str()),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }
        match builder.send() {
            Ok(response) => {
                let status = response.status().as_u16();
                ApiResponse::new(status, response.text().unwrap_or_default())
            }
            Err(e) => ApiResponse::new(503, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn capturing<'a>(seen: &'a RefCell<Vec<ApiRequest>>) -> impl Fn(ApiRequest) -> ApiResponse + 'a {
        move |request| {
            seen.borrow_mut().push(request);
            ApiResponse::ok("")
        }
    }

    #[test]
    fn a_closure_is_a_handler() {
        let handler = |request: ApiRequest| ApiResponse::ok(request.uri);

        assert_eq!(handler.handle(ApiRequest::get("/ping")).body, "/ping");
    }

    #[test]
    fn set_base_uri_prefixes_the_request_uri() {
        let seen = RefCell::new(Vec::new());
        let handler = capturing(&seen).map_request(set_base_uri("https://example.com"));

        handler.handle(ApiRequest::get("/users/bob"));

        assert_eq!(seen.borrow()[0].uri, "https://example.com/users/bob");
    }

    #[test]
    fn filters_compose_around_a_handler() {
        let seen = RefCell::new(Vec::new());
        let handler = capturing(&seen)
            .map_request(set_base_uri("https://example.com"))
            .map_request(set_header("Accept", "application/json"))
            .map_request(bearer_auth("sesame"));

        handler.handle(ApiRequest::get("/users/bob"));

        let request = &seen.borrow()[0];
        assert_eq!(request.uri, "https://example.com/users/bob");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer sesame"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = ApiRequest::get("/").with_header("Content-Type", "text/plain");

        assert_eq!(request.header("content-type"), Some("text/plain"));
    }
}
