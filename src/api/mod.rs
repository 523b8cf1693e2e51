//! Domain Chat API boundary.
//!
//! The backend is a black box: one JSON request per user turn, one JSON reply
//! or an error back. [`DomainChatApi`] is the transport seam — production
//! code goes through the reqwest-backed [`HttpChatApi`], tests script the
//! trait directly.

mod client;

pub use client::{
    ChatApiError, ChatReply, ChatRequest, ChatResult, DomainChatApi, HttpChatApi, endpoint_detail,
    send_chat,
};
