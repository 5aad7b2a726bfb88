//! Explicit route table
//!
//! Routes are `(method, path template, handler)` tuples kept in registration
//! order. A request is dispatched to the first route whose template and method
//! both match, so dispatch never depends on how a framework orders its own
//! routing tree.
//!
//! Templates use `{name}` for a parameter occupying a whole path segment:
//!
//! ```
//! use axum::http::{Method, StatusCode};
//! use axum::response::IntoResponse;
//! use server::routing::{RouteMatch, RouteTable};
//!
//! let table = RouteTable::new()
//!     .route(Method::GET, "/items/{id}", |_| StatusCode::OK.into_response())
//!     .unwrap();
//!
//! let RouteMatch::Matched { params, .. } = table.match_request(&Method::GET, "/items/42") else {
//!     panic!("expected a match");
//! };
//! assert_eq!(params.get("id"), Some("42"));
//! ```

use axum::http::Method;
use axum::response::Response;
use percent_encoding::percent_decode_str;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ServerError};

/// Request handler stored in the table
pub type Handler = Arc<dyn Fn(&PathParams) -> Response + Send + Sync>;

/// One segment of a parsed path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly
    Literal(String),
    /// Captures the request segment (any value, including empty)
    Param(String),
}

/// A parsed path template such as `/poct/device/{device_id}/results`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a template
    ///
    /// Templates must start with `/`. A parameter must fill its whole segment,
    /// have a non-empty name and be closed.
    pub fn parse(template: &str) -> Result<Self> {
        let Some(rest) = template.strip_prefix('/') else {
            return Err(ServerError::invalid_route(template, "must start with '/'"));
        };

        let mut segments = Vec::new();
        for raw in rest.split('/') {
            if let Some(inner) = raw.strip_prefix('{') {
                let Some(name) = inner.strip_suffix('}') else {
                    return Err(ServerError::invalid_route(template, "unclosed '{'"));
                };
                if name.is_empty() {
                    return Err(ServerError::invalid_route(template, "empty parameter name"));
                }
                if name.contains(|c: char| c == '{' || c == '}') {
                    return Err(ServerError::invalid_route(template, "nested braces"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if raw.contains(|c: char| c == '{' || c == '}') {
                return Err(ServerError::invalid_route(
                    template,
                    "parameters must occupy a whole segment",
                ));
            } else {
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        Ok(Self { segments })
    }

    /// Match a request path, returning the captured parameters
    ///
    /// Parameter values are percent-decoded; literal segments are compared
    /// against the raw path.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        let mut parts = rest.split('/');
        let mut params = PathParams::default();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = percent_decode_str(part).decode_utf8_lossy().into_owned();
                    params.push(name.clone(), value);
                }
            }
        }

        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }
}

/// Parameters captured from a matched path, in template order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(String, String)>,
}

impl PathParams {
    fn push(&mut self, name: String, value: String) {
        self.values.push((name, value));
    }

    /// Look up a captured value by parameter name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A registered route
#[derive(Clone)]
pub struct Route {
    method: Method,
    template: String,
    pattern: PathPattern,
    handler: Handler,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Invoke the handler with captured parameters
    pub fn handle(&self, params: &PathParams) -> Response {
        (self.handler)(params)
    }

    /// Whether this route serves `method` (`HEAD` is served by `GET` routes)
    fn serves(&self, method: &Method) -> bool {
        self.method == *method || (*method == Method::HEAD && self.method == Method::GET)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// Outcome of matching a request against the table
#[derive(Debug)]
pub enum RouteMatch<'a> {
    /// No registered template matched the path
    NotFound,
    /// Some template matched the path, but none for this method
    MethodNotAllowed { allowed: Vec<Method> },
    /// Template and method matched
    Matched {
        route: &'a Route,
        params: PathParams,
    },
}

/// Ordered table of routes, built once at startup
#[derive(Clone, Default, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route
    pub fn route<F>(mut self, method: Method, template: &str, handler: F) -> Result<Self>
    where
        F: Fn(&PathParams) -> Response + Send + Sync + 'static,
    {
        let pattern = PathPattern::parse(template)?;
        self.routes.push(Route {
            method,
            template: template.to_string(),
            pattern,
            handler: Arc::new(handler),
        });
        Ok(self)
    }

    /// Match an `(HTTP method, path)` pair
    ///
    /// Routes are tried in registration order. When the path matches one or more
    /// templates but the method matches none, the methods registered for those
    /// templates are returned sorted and de-duplicated.
    pub fn match_request(&self, method: &Method, path: &str) -> RouteMatch<'_> {
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };
            if route.serves(method) {
                return RouteMatch::Matched { route, params };
            }
            allowed.push(route.method.clone());
        }

        if allowed.is_empty() {
            return RouteMatch::NotFound;
        }

        allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        allowed.dedup();
        RouteMatch::MethodNotAllowed { allowed }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Render an `Allow` header value for the registered methods of a path
///
/// `HEAD` is added when `GET` is present and `OPTIONS` is always added.
pub fn allow_header_value(registered: &[Method]) -> String {
    let mut methods: Vec<&str> = registered.iter().map(Method::as_str).collect();
    if registered.contains(&Method::GET) {
        methods.push(Method::HEAD.as_str());
    }
    methods.push(Method::OPTIONS.as_str());
    methods.sort_unstable();
    methods.dedup();
    methods.join(", ")
}
