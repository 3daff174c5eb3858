use crate::config::ServerConfig;
use crate::http::{HttpResponse, Request};
use crate::middleware::{Middleware, Next};
use crate::routing::Router;
use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

pub struct Server {
    router: Arc<Router>,
    middleware: Vec<Arc<dyn Middleware>>,
    host: String,
    port: u16,
}

impl Server {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
            middleware: Vec::new(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }

    /// Build a server from an explicit config.
    pub fn from_config(router: Router, config: &ServerConfig) -> Self {
        Self::new(router).host(&config.host).port(config.port)
    }

    /// Append middleware that runs on every request, in registration order.
    pub fn middleware<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Bind the configured address and serve until the process exits.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = SocketAddr::new(self.host.parse()?, self.port);
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "server listening");
        self.serve(listener).await
    }

    /// Serve connections from an already-bound listener. Useful for tests
    /// that bind port 0 and need the actual address.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let router = self.router;
        let middleware = Arc::new(self.middleware);

        loop {
            let (stream, _) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let router = router.clone();
            let middleware = middleware.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let router = router.clone();
                    let middleware = middleware.clone();
                    async move { Ok::<_, Infallible>(handle_request(router, middleware, req).await) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!(error = %err, "error serving connection");
                }
            });
        }
    }
}

async fn handle_request(
    router: Arc<Router>,
    middleware: Arc<Vec<Arc<dyn Middleware>>>,
    req: hyper::Request<hyper::body::Incoming>,
) -> hyper::Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match router.match_route(&method, &path) {
        Some((handler, params)) => {
            let request = Request::new(req).with_params(params);
            let response = Next::new(&middleware, &handler).run(request).await;
            response.unwrap_or_else(|e| e).into_hyper()
        }
        None => HttpResponse::json(serde_json::json!({
            "code": 404,
            "message": "route not found",
            "data": null,
        }))
        .status(404)
        .into_hyper(),
    }
}
