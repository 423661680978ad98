//! HTTP API bindings for Leptos
//!
//! [`FetchGateway`] implements the store ports on top of the browser's
//! `fetch`. Base URLs are fixed at build time.

mod assignments;
mod teachers;

use classroom_core::GatewayError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Root of the assignment API.
pub const ASSIGN_API: &str = match option_env!("CLASSROOM_ASSIGN_URL") {
    Some(url) => url,
    None => "http://localhost:5024/api/assignteacher",
};

/// Root of the teacher profile API.
pub const TEACHER_API: &str = match option_env!("CLASSROOM_TEACHER_URL") {
    Some(url) => url,
    None => "https://localhost:5001/api/teacher",
};

/// Browser `fetch` implementation of both gateway ports.
#[derive(Clone, Copy, Default)]
pub struct FetchGateway;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Issue a request and fail on any non-2xx status.
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, GatewayError> {
    log::debug!("{} {}", method, url);

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| GatewayError::Transport(format!("Failed to create request: {:?}", e)))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| GatewayError::Transport(format!("Failed to set headers: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| GatewayError::Transport("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| GatewayError::Transport(format!("Fetch failed: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| GatewayError::Decode("Response is not a Response".into()))?;

    if !resp.ok() {
        let message = read_text(&resp)
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(|body| body.message);
        return Err(GatewayError::Server { status: resp.status(), message });
    }

    Ok(resp)
}

async fn read_text(resp: &Response) -> Result<String, GatewayError> {
    let promise = resp
        .text()
        .map_err(|e| GatewayError::Decode(format!("Body read failed: {:?}", e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| GatewayError::Decode(format!("Body future failed: {:?}", e)))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Decode a JSON response body.
async fn read_json<R: DeserializeOwned>(resp: &Response) -> Result<R, GatewayError> {
    let json = JsFuture::from(
        resp.json()
            .map_err(|e| GatewayError::Decode(format!("JSON parse failed: {:?}", e)))?,
    )
    .await
    .map_err(|e| GatewayError::Decode(format!("JSON future failed: {:?}", e)))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| GatewayError::Decode(format!("Deserialize failed: {}", e)))
}

fn encode<A: Serialize>(body: &A) -> Result<String, GatewayError> {
    serde_json::to_string(body)
        .map_err(|e| GatewayError::Decode(format!("Failed to serialize body: {}", e)))
}

/// GET and decode.
async fn api_get<R: DeserializeOwned>(url: &str) -> Result<R, GatewayError> {
    let resp = send("GET", url, None).await?;
    read_json(&resp).await
}
