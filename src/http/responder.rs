//! Maps a parsed request onto a response using the resource store.

use crate::activity;
use crate::http::mime::content_type_for;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::store::ResourceStore;

/// What a method does to an existing resource
#[derive(Debug, Clone, Copy)]
enum ResourceOp {
    Get,
    Head,
    Delete,
}

/// Decide the response for `req`.
///
/// Missing resources and unsupported methods produce 404/501 responses, not
/// errors. An `Err` means the resource existed but could not be read, which
/// aborts the session.
pub async fn build_response(req: &Request, store: &ResourceStore) -> anyhow::Result<Response> {
    let op = match &req.method {
        Method::GET => ResourceOp::Get,
        Method::HEAD => ResourceOp::Head,
        Method::DELETE => ResourceOp::Delete,
        Method::OPTIONS => return Ok(Response::options()),
        Method::Unrecognized(token) => {
            tracing::info!(method = %token, "Method not supported");
            return Ok(Response::not_implemented());
        }
    };

    // Parsing never yields a supported method without a target
    let Some(target) = req.target.as_deref() else {
        return Ok(Response::not_implemented());
    };

    if !store.exists(target).await {
        return Ok(Response::not_found(target));
    }

    let content_type = content_type_for(target);

    let response = match op {
        ResourceOp::Get => {
            let (file, size) = store.open(target).await?;
            Response::ok_file(content_type, file, size)
        }
        ResourceOp::Head => {
            let size = store.size(target).await?;
            Response::head(content_type, size)
        }
        ResourceOp::Delete => {
            let removed = store.delete(target).await;
            activity::deletion(target, removed);
            Response::deleted(content_type)
        }
    };

    Ok(response)
}
