//! Finch — a minimal chat front-end for the Domain Chat API.
//!
//! One screen, one request cycle: the chat view collects a draft, sends it to
//! `POST /api/domain-chat`, and renders the conversation as message bubbles.
//! The submit state machine lives in [`session`] and can be driven without a
//! UI (see `tests/session_tests.rs`).

pub mod api;
pub mod config;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
