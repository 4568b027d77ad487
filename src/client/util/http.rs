//! JSON requests against the StaffDesk API.
//!
//! Non-2xx responses are turned into a displayable message, using the `error` field of
//! the API's `ErrorDto` body when present. Outside of the browser build every request
//! fails with [`UNAVAILABLE`].

use serde::{de::DeserializeOwned, Serialize};

use crate::model::api::ErrorDto;

#[cfg(not(feature = "web"))]
const UNAVAILABLE: &str = "API requests are only available in the browser";

/// Formats a failed response, preferring the message of an `ErrorDto` body.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn error_message(status: u16, body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    };

    format!("Request failed with status {}: {}", status, detail)
}

#[cfg(feature = "web")]
async fn parse_response<T: DeserializeOwned>(response: reqwasm::http::Response) -> Result<T, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !(200..300).contains(&status) {
        return Err(error_message(status, &body));
    }

    serde_json::from_str::<T>(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(feature = "web")]
fn encode_body<B: Serialize>(body: &B) -> Result<String, String> {
    serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))
}

#[cfg(feature = "web")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(encode_body(body)?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(encode_body(body)?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::delete(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(not(feature = "web"))]
pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err(UNAVAILABLE.to_string())
}

#[cfg(not(feature = "web"))]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(_url: &str, _body: &B) -> Result<T, String> {
    Err(UNAVAILABLE.to_string())
}

#[cfg(not(feature = "web"))]
pub async fn put_json<B: Serialize, T: DeserializeOwned>(_url: &str, _body: &B) -> Result<T, String> {
    Err(UNAVAILABLE.to_string())
}

#[cfg(not(feature = "web"))]
pub async fn delete_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err(UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_dto() {
        assert_eq!(
            error_message(404, r#"{"error":"Employee not found"}"#),
            "Request failed with status 404: Employee not found"
        );
        assert_eq!(
            error_message(422, "Failed to deserialize the JSON body"),
            "Request failed with status 422: Failed to deserialize the JSON body"
        );
        assert_eq!(
            error_message(500, ""),
            "Request failed with status 500: Unknown error"
        );
    }
}
