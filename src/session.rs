//! The chat session state machine.
//!
//! One cycle per user turn: `Idle` → `Submitting` → success or failure →
//! `Idle` again. [`SessionState`] holds the whole of the UI-visible state and
//! owns every transition; [`ChatSession`] drives the cycle headlessly around
//! an awaited transport call, and the chat view drives the same transitions
//! from its event handlers.

use time::OffsetDateTime;

use crate::api::{ChatReply, ChatRequest, ChatResult, DomainChatApi};
use crate::types::Message;

pub const SESSION_ID_PREFIX: &str = "finch-session";

/// Everything the chat screen reflects: the draft, the transcript, the
/// in-flight flag, and the last cycle's error.
///
/// Invariants: `history` is append-only; `pending` and `last_error` are never
/// both set once a cycle resolves; the draft is cleared only on the success
/// path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    input: String,
    history: Vec<Message>,
    pending: bool,
    last_error: Option<String>,
}

/// Token for a cycle that has been admitted but not yet resolved. Produced by
/// [`SessionState::begin_submit`], consumed by [`SessionState::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSubmit {
    input: String,
    pub request: ChatRequest,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the draft. Called on every keystroke.
    pub fn set_input(&mut self, draft: impl Into<String>) {
        self.input = draft.into();
    }

    /// Admits one submission: refuses a blank draft and refuses while a cycle
    /// is already in flight (the composer is disabled then, but the guard
    /// holds even for programmatic callers). On admission the previous error
    /// is cleared, the pending flag goes up, and the request carries the
    /// draft untrimmed together with a fresh session identifier.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.pending || self.input.trim().is_empty() {
            return None;
        }

        self.last_error = None;
        self.pending = true;

        let input = self.input.clone();
        let request = ChatRequest {
            user_input: input.clone(),
            session_id: next_session_id(),
        };
        Some(PendingSubmit { input, request })
    }

    /// Applies the outcome of the awaited call. Success appends the user and
    /// bot messages in order and clears the draft; failure records the
    /// flattened error and leaves both transcript and draft untouched. The
    /// pending flag drops on every path.
    pub fn resolve(&mut self, pending: PendingSubmit, outcome: ChatResult<ChatReply>) {
        match outcome {
            Ok(reply) => {
                self.history.push(Message::user(pending.input));
                self.history.push(Message::bot(reply.response));
                self.input.clear();
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
        self.pending = false;
    }
}

/// Correlation token sent with each request, `<prefix>-<unix-ms>`. Minted per
/// submission attempt, not per session; the backend is the only party that
/// reads it.
pub fn next_session_id() -> String {
    let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!("{SESSION_ID_PREFIX}-{now_ms}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank draft or a cycle already in flight; nothing changed.
    Ignored,
    Replied,
    Failed,
}

/// The headless form of the chat screen: the same state machine, driven
/// without a renderer. Useful on its own and as the harness the integration
/// tests exercise.
pub struct ChatSession<A: DomainChatApi> {
    state: SessionState,
    api: A,
}

impl<A: DomainChatApi> ChatSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: SessionState::new(),
            api,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_input(&mut self, draft: impl Into<String>) {
        self.state.set_input(draft);
    }

    /// Runs one full cycle. The await on the transport is the sole
    /// suspension point; there is no cancellation — once admitted, the cycle
    /// runs to resolution.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(pending) = self.state.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let outcome = self.api.send(&pending.request).await;
        if let Err(err) = &outcome {
            tracing::error!("chat request failed: {err}");
        }

        let replied = outcome.is_ok();
        self.state.resolve(pending, outcome);
        if replied {
            SubmitOutcome::Replied
        } else {
            SubmitOutcome::Failed
        }
    }
}
