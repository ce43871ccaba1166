//! Serving a [`Router`] over HTTP with hyper.
//!
//! A router holding [`BoxedHandler`]s can be frozen into a [`RouterService`],
//! which implements [`hyper::service::Service`]. For every request the
//! service matches the method and path, stores the extracted [`Params`] in the
//! request extensions and hands the request to the handler. When nothing
//! matches it answers `404 Not Found` with an empty body.
//!
//! ```rust,no_run
//! use pathtrie::service::{Body, BoxedHandler};
//! use pathtrie::{Params, Router};
//! use hyper::body::Incoming;
//! use hyper::{Request, Response};
//! use std::convert::Infallible;
//!
//! async fn hello(req: Request<Incoming>) -> Result<Response<Body>, Infallible> {
//!     let name = req
//!         .extensions()
//!         .get::<Params>()
//!         .and_then(|params| params.get("name"))
//!         .unwrap_or("world");
//!     Ok(Response::new(Body::from(format!("Hello, {}!", name))))
//! }
//!
//! let mut router: Router<BoxedHandler<Incoming>> = Router::new();
//! router.get("/hello/:name", Box::new(hello));
//!
//! let service = router.into_service();
//! ```
use crate::{Params, Router};

use futures::future::{self, BoxFuture, FutureExt};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

/// The response body produced by handlers.
pub type Body = Full<Bytes>;

/// The outcome of a handler.
pub type HandlerResult = Result<Response<Body>, Infallible>;

/// Logic that produces a response for a matched request.
///
/// Implemented for every `Fn(Request<B>) -> impl Future<Output = HandlerResult>`,
/// so plain `async fn`s can be registered directly.
pub trait Handler<B>: Send + Sync + 'static {
    /// Produces the response for `req`.
    fn handle(&self, req: Request<B>) -> BoxFuture<'static, HandlerResult>;
}

impl<B, F, R> Handler<B> for F
where
    F: Fn(Request<B>) -> R + Send + Sync + 'static,
    R: Future<Output = HandlerResult> + Send + 'static,
{
    fn handle(&self, req: Request<B>) -> BoxFuture<'static, HandlerResult> {
        self(req).boxed()
    }
}

/// A type-erased [`Handler`].
pub type BoxedHandler<B> = Box<dyn Handler<B>>;

impl<B> Router<BoxedHandler<B>>
where
    B: Send + 'static,
{
    /// Dispatches a single request.
    ///
    /// On a match the extracted [`Params`] are inserted into the request
    /// extensions and the handler takes over. Otherwise the response is a
    /// bare `404 Not Found`.
    pub fn serve(&self, mut req: Request<B>) -> BoxFuture<'static, HandlerResult> {
        let mut params = Params::new();

        match self.lookup(req.method().as_str(), req.uri().path(), &mut params) {
            Ok(handler) => {
                req.extensions_mut().insert(params);
                handler.handle(req)
            }
            Err(_) => future::ok(not_found()).boxed(),
        }
    }

    /// Freezes the router into a hyper `Service`.
    ///
    /// No routes can be added afterwards; the service is cheap to clone and
    /// every clone shares the same routes.
    pub fn into_service(self) -> RouterService<B> {
        RouterService(Arc::new(self))
    }
}

fn not_found() -> Response<Body> {
    let mut res = Response::new(Body::default());
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

/// A frozen [`Router`] shared between connections.
pub struct RouterService<B>(Arc<Router<BoxedHandler<B>>>);

impl<B> RouterService<B> {
    /// The router this service dispatches to.
    pub fn router(&self) -> &Router<BoxedHandler<B>> {
        &self.0
    }
}

impl<B> Clone for RouterService<B> {
    fn clone(&self) -> Self {
        RouterService(Arc::clone(&self.0))
    }
}

impl<B> hyper::service::Service<Request<B>> for RouterService<B>
where
    B: Send + 'static,
{
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, HandlerResult>;

    fn call(&self, req: Request<B>) -> Self::Future {
        self.0.serve(req)
    }
}
