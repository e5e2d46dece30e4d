use axum::{
    body::Body,
    extract::Request,
    http::{Response, StatusCode},
    middleware::Next,
};
use tracing::Instrument;

use crate::{middleware::normalize_uri, utils::RootSpan};

pub(crate) async fn trace_root(mut req: Request, next: Next) -> Result<Response<Body>, StatusCode> {
    let root_span = RootSpan::new(req.method().as_str(), &normalize_uri(req.uri().path()));

    req.extensions_mut().insert(root_span.clone());

    let resp = next.run(req).instrument(root_span.span().clone()).await;

    root_span.record().http_status_code(&resp.status());

    if resp.status().is_client_error() || resp.status().is_server_error() {
        root_span.record().status("error");
    } else {
        root_span.record().status("ok");
    }

    Ok(resp)
}
