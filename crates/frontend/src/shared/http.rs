//! Thin gloo-net wrappers for the `{ data: ... }` envelope protocol

use super::api_error::RequestError;
use contracts::shared::api_envelope::ApiEnvelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn get_data<T: DeserializeOwned>(url: &str) -> Result<T, RequestError> {
    log::debug!("GET {}", url);
    let response = Request::get(url).send().await?;
    read_envelope(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, RequestError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .json(body)
        .map_err(|e| RequestError::Encode(e.to_string()))?
        .send()
        .await?;
    read_envelope(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, RequestError> {
    log::debug!("PUT {}", url);
    let response = Request::put(url)
        .json(body)
        .map_err(|e| RequestError::Encode(e.to_string()))?
        .send()
        .await?;
    read_envelope(response).await
}

pub async fn delete_data<T: DeserializeOwned>(url: &str) -> Result<T, RequestError> {
    log::debug!("DELETE {}", url);
    let response = Request::delete(url).send().await?;
    read_envelope(response).await
}

/// Multi-part POST; only the status is consumed
pub async fn post_form(url: &str, form: web_sys::FormData) -> Result<(), RequestError> {
    log::debug!("POST {} (multipart)", url);
    let response = Request::post(url)
        .body(form)
        .map_err(|e| RequestError::Encode(e.to_string()))?
        .send()
        .await?;
    ensure_ok(&response)
}

fn ensure_ok(response: &Response) -> Result<(), RequestError> {
    if response.ok() {
        Ok(())
    } else {
        Err(RequestError::Status(response.status()))
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    ensure_ok(&response)?;
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))?;
    Ok(envelope.into_data())
}
