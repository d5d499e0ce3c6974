//! In-process stand-in for the CRM backend.
//!
//! Requests are matched against an explicit, ordered table of
//! `(method, pattern) -> handler` entries. Static patterns are tried before
//! parameterized ones, and the first match in each pass wins. Every matched
//! request waits for the configured latency before its handler runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, DashboardReader, ProjectReader, UserReader};
use crate::transport::{
    ApiReply, ApiRequest, Method, STATUS_NOT_FOUND, Transport, TransportError,
};

pub mod handlers;
pub mod route;

pub use route::{RouteParams, RoutePattern};

/// Artificial latency applied to every mock response.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Signature shared by all mock endpoints.
pub type Handler<R> = fn(&MockContext<R>, &ApiRequest, &RouteParams) -> ApiReply;

pub struct Route<R> {
    pub method: Method,
    pub pattern: RoutePattern,
    pub handler: Handler<R>,
}

/// Ordered list of routes.
pub struct RouteTable<R> {
    routes: Vec<Route<R>>,
}

impl<R> Default for RouteTable<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> RouteTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, method: Method, pattern: &str, handler: Handler<R>) -> Self {
        self.routes.push(Route {
            method,
            pattern: RoutePattern::parse(pattern),
            handler,
        });
        self
    }

    pub fn routes(&self) -> &[Route<R>] {
        &self.routes
    }

    /// Finds the route answering `method` and `path`.
    pub fn resolve(&self, method: Method, path: &str) -> Option<(&Route<R>, RouteParams)> {
        let candidates = |parameterized: bool| {
            self.routes.iter().filter(move |route| {
                route.method == method && route.pattern.is_parameterized() == parameterized
            })
        };

        candidates(false)
            .chain(candidates(true))
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }
}

/// State shared by the handlers: the fixture repository and the id counter
/// used by `POST /customers`.
pub struct MockContext<R> {
    pub repo: R,
    created: AtomicUsize,
}

impl<R> MockContext<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            created: AtomicUsize::new(0),
        }
    }
}

impl<R: CustomerReader> MockContext<R> {
    /// Hands out ids past every listed customer, one more on each call.
    pub fn next_customer_id(&self) -> RepositoryResult<CustomerId> {
        let listed = self.repo.listed_customer_count()?;
        let created = self.created.fetch_add(1, Ordering::SeqCst);
        Ok(CustomerId::MIN.offset(listed.saturating_add(created)))
    }
}

pub struct MockRouter<R> {
    table: RouteTable<R>,
    context: MockContext<R>,
    latency: Duration,
}

impl<R> MockRouter<R>
where
    R: CustomerReader + ProjectReader + DashboardReader + UserReader,
{
    /// Router serving the full CRM route table from `repo`.
    pub fn new(repo: R, latency: Duration) -> Self {
        Self::with_table(handlers::route_table(), repo, latency)
    }
}

impl<R> MockRouter<R> {
    pub fn with_table(table: RouteTable<R>, repo: R, latency: Duration) -> Self {
        Self {
            table,
            context: MockContext::new(repo),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn context(&self) -> &MockContext<R> {
        &self.context
    }

    pub fn handles(&self, request: &ApiRequest) -> bool {
        self.table
            .resolve(request.method, request.route_path())
            .is_some()
    }

    /// Answers a request if a route matches, after the artificial latency.
    ///
    /// Returns `None` for requests the table does not cover.
    pub async fn dispatch(&self, request: &ApiRequest) -> Option<ApiReply> {
        let Some((route, params)) = self.table.resolve(request.method, request.route_path())
        else {
            debug!("No mock route for {} {}", request.method, request.path);
            return None;
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let reply = (route.handler)(&self.context, request, &params);
        info!(
            "{} {} -> {} ({})",
            request.method,
            request.path,
            reply.status,
            route.pattern.as_str()
        );
        Some(reply)
    }
}

#[async_trait]
impl<R> Transport for MockRouter<R>
where
    R: Send + Sync,
{
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        match self.dispatch(&request).await {
            Some(reply) => Ok(reply),
            None => Err(TransportError::Server {
                status: STATUS_NOT_FOUND,
                message: format!("no mock route for {} {}", request.method, request.path),
            }),
        }
    }
}

/// Mock router in front of another transport: matched requests are answered
/// by the router, everything else passes through to `next`.
pub struct Intercepted<R, T> {
    router: MockRouter<R>,
    next: T,
}

impl<R, T> Intercepted<R, T> {
    pub fn new(router: MockRouter<R>, next: T) -> Self {
        Self { router, next }
    }
}

#[async_trait]
impl<R, T> Transport for Intercepted<R, T>
where
    R: Send + Sync,
    T: Transport,
{
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        match self.router.dispatch(&request).await {
            Some(reply) => Ok(reply),
            None => self.next.send(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::STATUS_OK;

    fn reply_with(status: u16) -> ApiReply {
        ApiReply {
            status,
            body: serde_json::Value::Null,
        }
    }

    fn static_handler(_: &MockContext<()>, _: &ApiRequest, _: &RouteParams) -> ApiReply {
        reply_with(200)
    }

    fn param_handler(_: &MockContext<()>, _: &ApiRequest, _: &RouteParams) -> ApiReply {
        reply_with(299)
    }

    fn table() -> RouteTable<()> {
        RouteTable::new()
            .route(Method::Get, "/customers/:id", param_handler)
            .route(Method::Get, "/customers/new", static_handler)
            .route(Method::Get, "/customers", static_handler)
    }

    #[test]
    fn static_routes_win_over_parameterized_ones() {
        let table = table();
        let (route, params) = table.resolve(Method::Get, "/customers/new").expect("route");
        assert_eq!(route.pattern.as_str(), "/customers/new");
        assert_eq!(params, RouteParams::default());

        let (route, params) = table.resolve(Method::Get, "/customers/7").expect("route");
        assert_eq!(route.pattern.as_str(), "/customers/:id");
        assert_eq!(params.get("id"), Some("7"));
    }

    #[test]
    fn method_must_match() {
        assert!(table().resolve(Method::Delete, "/customers").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_waits_for_latency() {
        let router = MockRouter::with_table(table(), (), DEFAULT_LATENCY);
        let started = tokio::time::Instant::now();

        let reply = router
            .dispatch(&ApiRequest::get("/customers"))
            .await
            .expect("handled");

        assert_eq!(reply.status, STATUS_OK);
        assert!(started.elapsed() >= DEFAULT_LATENCY);
    }

    #[tokio::test]
    async fn unmatched_requests_are_not_handled() {
        let router = MockRouter::with_table(table(), (), Duration::ZERO);
        assert!(router.dispatch(&ApiRequest::get("/offers")).await.is_none());
        assert!(!router.handles(&ApiRequest::get("/offers")));

        let err = router
            .send(ApiRequest::get("/offers"))
            .await
            .expect_err("no route");
        assert!(matches!(err, TransportError::Server { status: 404, .. }));
    }

    struct Fallback;

    #[async_trait]
    impl Transport for Fallback {
        async fn send(&self, _request: ApiRequest) -> Result<ApiReply, TransportError> {
            Ok(reply_with(418))
        }
    }

    #[tokio::test]
    async fn intercepted_passes_unmatched_requests_through() {
        let transport = Intercepted::new(
            MockRouter::with_table(table(), (), Duration::ZERO),
            Fallback,
        );

        let handled = transport.send(ApiRequest::get("/customers/3")).await;
        let passed = transport.send(ApiRequest::get("/offers")).await;

        assert_eq!(handled.map(|r| r.status), Ok(299));
        assert_eq!(passed.map(|r| r.status), Ok(418));
    }
}
