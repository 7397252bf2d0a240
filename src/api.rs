//! Backend API Commands
//!
//! HTTP bindings for the todo REST endpoints.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::Todo;

/// Failure modes of an API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("HTTP error! status: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    /// The response payload did not decode
    #[error("decode error: {0}")]
    Decode(String),
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct UpdateTodoArgs {
    completed: bool,
}

// ========================
// Commands
// ========================

/// Fetch the full todo collection
pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let response = Request::get(&collection_url(config::api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a todo with the given text; the server assigns the id
pub async fn create_todo(text: &str) -> Result<Todo, ApiError> {
    let request = Request::post(&collection_url(config::api_base()))
        .json(&CreateTodoArgs { text })
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Set the completed flag on a todo
pub async fn update_todo(id: u32, completed: bool) -> Result<Todo, ApiError> {
    let request = Request::put(&item_url(config::api_base(), id))
        .json(&UpdateTodoArgs { completed })
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete a todo; the response body and status are ignored
pub async fn delete_todo(id: u32) -> Result<(), ApiError> {
    Request::delete(&item_url(config::api_base(), id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(())
}

/// Promote a non-success response to an error carrying its raw body
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        status_text,
        body,
    })
}

fn collection_url(api_base: &str) -> String {
    format!("{}/todos", api_base)
}

fn item_url(api_base: &str, id: u32) -> String {
    format!("{}/todos/{}", api_base, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_without_proxy_prefix() {
        assert_eq!(collection_url("/api"), "/api/todos");
        assert_eq!(item_url("/api", 7), "/api/todos/7");
    }

    #[test]
    fn test_urls_with_proxy_prefix() {
        assert_eq!(collection_url("/apps/todo/api"), "/apps/todo/api/todos");
        assert_eq!(item_url("/apps/todo/api", 7), "/apps/todo/api/todos/7");
    }
}
