//! HTTP router.

use crate::http::{Request, Response};
use matchit::Router as MatchitRouter;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type-erased route handler.
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// Path router with one match table per HTTP method.
///
/// Paths use `{name}` segments for parameters, e.g. `/students/{id}`.
pub struct Router {
    get_routes: MatchitRouter<Arc<BoxedHandler>>,
    post_routes: MatchitRouter<Arc<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_routes: MatchitRouter::new(),
            post_routes: MatchitRouter::new(),
        }
    }

    /// Register a GET route.
    pub fn get<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.get_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Register a POST route.
    pub fn post<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.post_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Match a request to a handler, extracting path parameters.
    pub fn match_route(
        &self,
        method: &hyper::Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let routes = match *method {
            hyper::Method::GET => &self.get_routes,
            hyper::Method::POST => &self.post_routes,
            _ => return None,
        };

        routes.at(path).ok().map(|matched| {
            let params: HashMap<String, String> = matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (matched.value.clone(), params)
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use pretty_assertions::assert_eq;

    async fn handler(_req: Request) -> Response {
        Ok(HttpResponse::text("ok"))
    }

    fn router() -> Router {
        Router::new()
            .get("/students", handler)
            .get("/students/{id}", handler)
            .post("/students/{id}/toggle", handler)
    }

    #[test]
    fn matches_static_and_parameterized_paths() {
        let router = router();

        let (_, params) = router
            .match_route(&hyper::Method::GET, "/students")
            .unwrap();
        assert!(params.is_empty());

        let (_, params) = router
            .match_route(&hyper::Method::GET, "/students/42")
            .unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn methods_are_kept_separate() {
        let router = router();

        assert!(router
            .match_route(&hyper::Method::POST, "/students/7/toggle")
            .is_some());
        assert!(router
            .match_route(&hyper::Method::GET, "/students/7/toggle")
            .is_none());
        assert!(router
            .match_route(&hyper::Method::POST, "/students")
            .is_none());
    }

    #[test]
    fn unknown_paths_do_not_match() {
        let router = router();
        assert!(router.match_route(&hyper::Method::GET, "/nope").is_none());
    }
}
