//! Request middleware.
//!
//! Middleware wrap the handler: each one receives the request and a
//! [`Next`] that runs the rest of the chain, so it can act before and
//! after the response is produced.

use crate::http::{Request, Response};
use crate::routing::BoxedHandler;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: Request, next: Next<'_>) -> Response;
}

/// The remainder of the middleware chain, ending at the route handler.
pub struct Next<'a> {
    middleware: &'a [Arc<dyn Middleware>],
    handler: &'a BoxedHandler,
}

impl<'a> Next<'a> {
    pub fn new(middleware: &'a [Arc<dyn Middleware>], handler: &'a BoxedHandler) -> Self {
        Self {
            middleware,
            handler,
        }
    }

    /// Run the next middleware, or the handler once the chain is exhausted.
    pub fn run(self, req: Request) -> Pin<Box<dyn Future<Output = Response> + Send + 'a>> {
        Box::pin(async move {
            match self.middleware.split_first() {
                Some((current, rest)) => {
                    current
                        .handle(req, Next::new(rest, self.handler))
                        .await
                }
                None => (self.handler)(req).await,
            }
        })
    }
}
