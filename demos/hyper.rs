use std::convert::Infallible;

use hyper::body::Incoming;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use pathtrie::service::{Body, BoxedHandler};
use pathtrie::{Params, Router};
use tokio::net::TcpListener;

// GET /
async fn index(_req: Request<Incoming>) -> Result<Response<Body>, Infallible> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /users/:id
async fn user(req: Request<Incoming>) -> Result<Response<Body>, Infallible> {
    let id = req
        .extensions()
        .get::<Params>()
        .and_then(|params| params.get("id"))
        .unwrap_or_default();

    Ok(Response::new(Body::from(format!("user {}", id))))
}

// GET /users/:id/posts/:post
async fn post(req: Request<Incoming>) -> Result<Response<Body>, Infallible> {
    let params = req.extensions().get::<Params>().cloned().unwrap_or_default();
    let body = format!(
        "post {} by user {}",
        params.get("post").unwrap_or_default(),
        params.get("id").unwrap_or_default()
    );

    Ok(Response::new(Body::from(body)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // `RUST_LOG=pathtrie=trace` shows registrations and misses
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut router: Router<BoxedHandler<Incoming>> = Router::new();
    router.get("/", Box::new(index));
    router.get("/users/:id", Box::new(user));
    router.get("/users/:id/posts/:post", Box::new(post));

    // no routes can be added once the router is frozen into a service
    let service = router.into_service();

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;

    loop {
        let (tcp, _) = listener.accept().await?;
        let service = service.clone();

        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(TokioIo::new(tcp), service)
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
