//! # HTTP Server
//!
//! GET-only JSON server built on Hyper and Tokio, with graceful
//! shutdown on ctrl-c.
//!
//! The dispatch pipeline itself ([`process_request`]) is pure,
//! synchronous, in-memory work over immutable inputs: parse the
//! target, match the path, bind arguments, invoke the handler, infer
//! and serialize the result. The async machinery only carries bytes to
//! and from it, and [`Server::dispatch`] exposes it network-free for
//! tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tracing::{error, info};

use crate::bind::{bind, Args, BindPolicy};
use crate::error::{Error, Result};
use crate::infer::ToJson;
use crate::json::JsonValue;
use crate::request::{Method, Request};
use crate::route::RouteSpec;
use crate::router::{HandlerId, Router};

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub address: SocketAddr,
    /// Enable keep-alive connections
    pub keep_alive: bool,
    /// Shutdown timeout for draining active connections
    pub shutdown_timeout: Duration,
    /// Policy for parameters that cannot be bound
    pub bind_policy: BindPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: ([127, 0, 0, 1], 8000).into(),
            keep_alive: true,
            shutdown_timeout: Duration::from_secs(30),
            bind_policy: BindPolicy::default(),
        }
    }
}

/// Response produced by the dispatcher, one per request
#[derive(Debug)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
    /// Content type
    pub content_type: String,
}

impl Response {
    /// Create a 200 JSON response
    #[must_use]
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            content_type: "application/json".to_string(),
        }
    }

    /// Create a 200 plain-text response
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            content_type: "text/plain".to_string(),
        }
    }

    /// Set the status code
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Convert to a hyper response
    fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        hyper::Response::builder()
            .status(status)
            .header("Content-Type", &self.content_type)
            .body(Full::new(Bytes::from(self.body)))
            .unwrap_or_else(|_| {
                hyper::Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Full::new(Bytes::from("Internal Server Error")))
                    .unwrap()
            })
    }
}

/// Handler function type: bound arguments in, JSON tree out
pub type Handler = Arc<dyn Fn(&Args) -> Result<JsonValue> + Send + Sync>;

/// GET-only JSON server: route registry plus handler table
pub struct Server {
    config: ServerConfig,
    router: Router,
    handlers: Vec<Handler>,
}

impl Default for Server {
    fn default() -> Self {
        Self::new()
    }
}

impl Server {
    /// Create a new server with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            router: Router::new(),
            handlers: Vec::new(),
        }
    }

    /// Bind the server to an address
    #[must_use]
    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.config.address = addr;
        self
    }

    /// Choose what happens when a parameter cannot be bound
    #[must_use]
    pub fn with_bind_policy(mut self, policy: BindPolicy) -> Self {
        self.config.bind_policy = policy;
        self
    }

    /// Register a route with a prebuilt [`Handler`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoutePattern`] via the router for a
    /// malformed spec.
    pub fn add_route(&mut self, spec: RouteSpec, handler: Handler) -> Result<HandlerId> {
        let handler_id = self.router.register(spec)?;
        self.handlers.push(handler);
        Ok(handler_id)
    }

    /// Register a route whose handler returns any supported value.
    ///
    /// The closure's return value is passed through JSON inference, so
    /// handlers return plain typed values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Server::add_route`].
    pub fn route<F, R>(&mut self, spec: RouteSpec, handler: F) -> Result<HandlerId>
    where
        F: Fn(&Args) -> Result<R> + Send + Sync + 'static,
        R: ToJson,
    {
        self.add_route(
            spec,
            Arc::new(move |args| handler(args).and_then(|value| value.to_json())),
        )
    }

    /// Register a GET route by path template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoutePattern`] for a malformed template.
    pub fn get<F, R>(&mut self, pattern: &str, handler: F) -> Result<HandlerId>
    where
        F: Fn(&Args) -> Result<R> + Send + Sync + 'static,
        R: ToJson,
    {
        self.route(RouteSpec::new(pattern)?, handler)
    }

    /// Execute a request directly, without the network stack.
    ///
    /// This is the dispatcher the serve loop uses, exposed for tests.
    #[must_use]
    pub fn dispatch(&self, method: Method, target: &str) -> Response {
        let request = Request::new(method, target);
        process_request(
            &request,
            &self.router,
            &self.handlers,
            self.config.bind_policy,
        )
    }

    /// Start the server with graceful shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BindError`] when the address cannot be bound,
    /// or an IO error from the accept loop.
    pub async fn serve(&self) -> Result<()> {
        let addr = self.config.address;

        let socket = tokio::net::TcpSocket::new_v4()?;
        socket.set_reuseaddr(true)?;
        #[cfg(not(windows))]
        {
            socket.set_reuseport(true)?;
        }
        socket.bind(addr).map_err(|source| Error::BindError {
            address: addr.to_string(),
            source,
        })?;

        let listener = socket.listen(1024)?;

        info!("Server listening on http://{}", addr);

        let router = Arc::new(self.router.clone());
        let handlers = Arc::new(self.handlers.clone());
        let policy = self.config.bind_policy;
        let active = Arc::new(AtomicUsize::new(0));

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    let (stream, remote_addr) = accept_result?;
                    let io = TokioIo::new(stream);

                    let router = router.clone();
                    let handlers = handlers.clone();
                    let active = active.clone();

                    tokio::task::spawn(async move {
                        active.fetch_add(1, Ordering::Relaxed);

                        if let Err(err) = http1::Builder::new()
                            .serve_connection(io, service_fn(move |req| {
                                let router = router.clone();
                                let handlers = handlers.clone();
                                async move {
                                    let method = req.method().clone();
                                    let path = req.uri().path().to_string();
                                    let version = format!("{:?}", req.version());

                                    let response = handle_request(&req, &router, &handlers, policy);

                                    info!("    {} - \"{} {} {}\" {}",
                                        remote_addr,
                                        method,
                                        path,
                                        version,
                                        response.status
                                    );

                                    Ok::<_, hyper::Error>(response.into_hyper())
                                }
                            }))
                            .await
                        {
                            error!("Error serving connection: {:?}", err);
                        }
                        active.fetch_sub(1, Ordering::Relaxed);
                    });
                }
                () = shutdown_signal() => {
                    info!("Shutdown signal received, stopping server...");
                    break;
                }
            }
        }

        let timeout = self.config.shutdown_timeout;
        let drain = async {
            loop {
                if active.load(Ordering::Relaxed) == 0 {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        };
        let _ = tokio::time::timeout(timeout, drain).await;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C signal handler: {}", err);
    }
}

/// Serialize an error message into the standard JSON error body.
///
/// Goes through the value model so embedded quotes in messages are
/// escaped.
fn error_body(message: &str) -> String {
    JsonValue::object(vec![(
        "error".to_string(),
        JsonValue::string(message),
    )])
    .to_json_string()
}

/// Core request processing (network agnostic, synchronous).
///
/// Guarantees exactly one outcome per request: 405 for a non-GET
/// method, 404 when no descriptor matches, 400 for a binding failure
/// under the reject policy, 500 for a handler or inference failure,
/// otherwise 200 with the serialized JSON body.
fn process_request(
    request: &Request,
    router: &Router,
    handlers: &[Handler],
    policy: BindPolicy,
) -> Response {
    if request.method != Method::Get {
        return Response::json(error_body("Method Not Allowed")).with_status(405);
    }

    let Some(matched) = router.match_path(&request.url.segments) else {
        return Response::json(error_body("Not Found")).with_status(404);
    };

    let (Some(route), Some(handler)) = (
        router.route(matched.handler_id),
        handlers.get(matched.handler_id),
    ) else {
        return Response::json(error_body("Not Found")).with_status(404);
    };

    let args = match bind(route, &matched.path_vars, &request.url.query, policy) {
        Ok(args) => args,
        Err(err) => {
            return Response::json(error_body(&err.to_string())).with_status(400);
        }
    };

    match handler(&args) {
        Ok(value) => Response::json(value.to_json_string()),
        Err(err) => {
            error!("Handler failed for {}: {}", request.path, err);
            Response::json(error_body(&err.to_string())).with_status(500)
        }
    }
}

/// Bridge one hyper request into the dispatcher.
fn handle_request(
    req: &hyper::Request<hyper::body::Incoming>,
    router: &Router,
    handlers: &[Handler],
    policy: BindPolicy,
) -> Response {
    let target = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };

    match Method::from_hyper(req.method()) {
        Some(method) => {
            let request = Request::new(method, &target);
            process_request(&request, router, handlers, policy)
        }
        // verbs outside the enum are never routed
        None => Response::json(error_body("Method Not Allowed")).with_status(405),
    }
}
