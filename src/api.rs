//! Backend API Client
//!
//! Fetch-based bindings to the remote client collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{BackendError, Client, ClientPage};

const API_BASE_URL: &str = "http://localhost:8080";

/// Failures crossing the API boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status and a structured body
    #[error("HTTP {status}: {data}")]
    Response { status: u16, data: BackendError },

    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Fetch(String),

    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ========================
// Request Argument Structs
// ========================

#[derive(Serialize)]
pub struct SaveClientArgs<'a> {
    pub name: &'a str,
}

// ========================
// Client Endpoints
// ========================

pub async fn get_clients(page: usize, size: usize) -> ApiResult<ClientPage> {
    let resp = send("GET", &format!("client?page={page}&size={size}"), None).await?;
    read_json(&resp).await
}

pub async fn create_client(args: &SaveClientArgs<'_>) -> ApiResult<Client> {
    let resp = send("PUT", "client", Some(to_body(args)?)).await?;
    read_json(&resp).await
}

pub async fn update_client(id: &str, args: &SaveClientArgs<'_>) -> ApiResult<Client> {
    let resp = send("PUT", &format!("client/{id}"), Some(to_body(args)?)).await?;
    read_json(&resp).await
}

pub async fn delete_client(id: &str) -> ApiResult<()> {
    let _ = send("DELETE", &format!("client/{id}"), None).await?;
    Ok(())
}

// ========================
// Fetch Plumbing
// ========================

fn to_body<T: Serialize>(args: &T) -> ApiResult<String> {
    serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(method: &str, path: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{API_BASE_URL}/{path}");
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| ApiError::Fetch(js_string(&e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Fetch(js_string(&e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Fetch("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Fetch(js_string(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Fetch(js_string(&e)))?;

    if resp.ok() {
        Ok(resp)
    } else {
        Err(error_from_response(&resp).await)
    }
}

/// A JSON `{msg}` body is surfaced with its status; anything else stays opaque
async fn error_from_response(resp: &Response) -> ApiError {
    let status = resp.status();
    if let Ok(promise) = resp.json() {
        if let Ok(value) = JsFuture::from(promise).await {
            if let Ok(data) = serde_wasm_bindgen::from_value::<BackendError>(value) {
                return ApiError::Response { status, data };
            }
        }
    }
    ApiError::Fetch(format!("HTTP {status}"))
}

async fn read_json<T: DeserializeOwned>(resp: &Response) -> ApiResult<T> {
    let promise: js_sys::Promise = resp.json().map_err(|e| ApiError::Decode(js_string(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_string(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display() {
        let err = ApiError::Response {
            status: 400,
            data: BackendError {
                msg: "Cliente en uso".to_string(),
            },
        };
        assert_eq!(err.to_string(), "HTTP 400: Cliente en uso");
    }

    #[test]
    fn test_save_args_wire_shape() {
        let body = to_body(&SaveClientArgs { name: "Pepe" }).unwrap();
        assert_eq!(body, r#"{"name":"Pepe"}"#);
    }
}
