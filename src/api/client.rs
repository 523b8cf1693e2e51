use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, ApiConfig};

/// Payload of `POST /api/domain-chat`.
///
/// `user_input` carries the draft exactly as typed, untrimmed. `session_id`
/// is an opaque correlation token minted per submission attempt; the client
/// never interprets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
    pub session_id: String,
}

/// Decoded success body. Only `response` is consumed; extra fields are
/// ignored. A missing or ill-typed `response` is a decode failure, not a
/// blank bubble.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// What can go wrong in one request cycle. Typed here, flat at the surface:
/// `Display` yields the single string the UI shows, and no caller
/// distinguishes the variants beyond that.
#[derive(Debug, Error)]
pub enum ChatApiError {
    /// The endpoint answered with a non-success status.
    #[error("{detail}")]
    Endpoint {
        status: reqwest::StatusCode,
        detail: String,
    },
    /// The request never completed: unreachable host, dropped connection.
    #[error("request failed: {0}")]
    Transport(String),
    /// The endpoint answered 2xx with a body that is not a chat reply.
    #[error("malformed reply: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ChatApiError {
    fn from(err: reqwest::Error) -> Self {
        ChatApiError::Transport(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatApiError>;

/// Transport seam for the Domain Chat endpoint. Implementors encapsulate the
/// HTTP client and wire details; the session state machine only sees
/// [`ChatRequest`] in, [`ChatReply`] or [`ChatApiError`] out.
#[async_trait]
pub trait DomainChatApi: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> ChatResult<ChatReply>;
}

/// Production transport over reqwest.
pub struct HttpChatApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpChatApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl DomainChatApi for HttpChatApi {
    async fn send(&self, request: &ChatRequest) -> ChatResult<ChatReply> {
        let mut call = self.client.post(self.config.chat_url()).json(request);
        if self.config.skip_tunnel_warning {
            call = call.header("ngrok-skip-browser-warning", "true");
        }
        if let Some(token) = &self.config.bearer_token {
            call = call.bearer_auth(token);
        }

        let response = call.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "domain chat endpoint returned an error");
            return Err(ChatApiError::Endpoint {
                status,
                detail: endpoint_detail(status, &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Human-readable message for a failed status: the body's `detail` field when
/// one is present, otherwise a generic message carrying the status code.
pub fn endpoint_detail(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|err| err.detail)
        .unwrap_or_else(|_| format!("chat endpoint error {status}"))
}

static SHARED_API: Lazy<HttpChatApi> =
    Lazy::new(|| HttpChatApi::new(config::api_config().clone()));

/// Sends one chat turn through the process-wide [`HttpChatApi`].
pub async fn send_chat(request: &ChatRequest) -> ChatResult<ChatReply> {
    SHARED_API.send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn request_wire_shape() {
        let request = ChatRequest {
            user_input: "Hello".to_string(),
            session_id: "finch-session-1700000000000".to_string(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({
                "user_input": "Hello",
                "session_id": "finch-session-1700000000000",
            })
        );
    }

    #[test]
    fn reply_tolerates_extra_fields() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"Hi there","model":"domain-1"}"#).expect("decode");
        assert_eq!(reply.response, "Hi there");
    }

    #[test]
    fn reply_without_response_field_is_a_decode_error() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"answer":"Hi"}"#).is_err());
        assert!(serde_json::from_str::<ChatReply>("not json").is_err());
    }

    #[test]
    fn endpoint_detail_prefers_body_detail() {
        let detail = endpoint_detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail":"internal error"}"#,
        );
        assert_eq!(detail, "internal error");
    }

    #[test]
    fn endpoint_detail_falls_back_to_status_code() {
        for body in ["", "<html>bad gateway</html>", r#"{"message":"nope"}"#] {
            let detail = endpoint_detail(StatusCode::BAD_GATEWAY, body);
            assert!(detail.contains("502"), "{detail:?} should name the status");
        }
    }

    #[test]
    fn endpoint_error_displays_detail_only() {
        let err = ChatApiError::Endpoint {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "internal error");
    }
}
