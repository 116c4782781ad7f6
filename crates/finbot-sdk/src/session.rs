//! Chat session lifecycle and message sending.
//!
//! A [`ChatSession`] is owned by one chat view for its whole lifetime:
//!
//! ```text
//!   new(symbol)
//!      │ begin_init ──(no symbol)──────────────► Failed
//!      ▼
//!   Initializing ──finish_init(Err)────────────► Failed
//!      │ finish_init(Ok)
//!      ▼
//!   Ready ◄──┐ begin_send / finish_send
//!      │     └───────────────────────────
//!      │ take_teardown
//!      ▼
//!   Closed
//! ```
//!
//! Every network step is split into a synchronous `begin_*` that mutates
//! state and hands out a ticket, and a `finish_*` that applies the result.
//! Reactive front-ends call the two halves around their own spawned
//! future; the `async` wrappers chain them for callers that can hold
//! `&mut self` across an await. Completions carrying the id of a session
//! that has since been superseded or torn down are dropped.

use finbot_models::{ChatMessage, MessageId, MessageStatus, SessionId, Transcript};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::FinbotClient;
use crate::error::SdkError;

/// Where a chat session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the server to prepare the session.
    Initializing,
    /// Accepting questions.
    Ready,
    /// Initialization failed; terminal for this view.
    Failed,
    /// Torn down; terminal for this view.
    Closed,
}

/// Reasons a session cannot even start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The view was opened without a ticker symbol.
    #[error("no ticker symbol was provided")]
    MissingSymbol,
}

/// Handed out by [`ChatSession::begin_init`]; describes the call to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitTicket {
    /// Freshly minted id of the new session.
    pub session_id: SessionId,
    /// Symbol the session is about.
    pub symbol: String,
    /// Previous live session of this view, still to be cleaned up.
    pub superseded: Option<SessionId>,
}

/// Handed out by [`ChatSession::begin_send`]; describes the call to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSend {
    /// Session the turn belongs to.
    pub session_id: SessionId,
    /// Id of the user message awaiting its status.
    pub message_id: MessageId,
    /// Trimmed text to submit.
    pub text: String,
}

/// Shown when the view was opened without a symbol.
pub const MISSING_SYMBOL_TEXT: &str =
    "No ticker symbol was selected. Go back and look up a ticker first.";
/// Shown when session initialization could not reach the backend.
pub const INIT_CONNECTION_ERROR_TEXT: &str =
    "Sorry, there was an error connecting to the service. Please try again later.";
/// Shown when the backend rejected a chat turn.
pub const SEND_REJECTED_TEXT: &str = "Sorry, I encountered an error. Please try again.";
/// Shown when a chat turn could not reach the backend.
pub const SEND_CONNECTION_ERROR_TEXT: &str =
    "Sorry, there was an error connecting to the service. Please try again.";
/// Shown when a chat turn exceeded the request timeout.
pub const SEND_TIMEOUT_TEXT: &str = "The assistant took too long to respond. Please try again.";

/// First bot message of a ready session.
pub fn greeting(symbol: &str) -> String {
    format!("Hello! I've gathered the latest information about {symbol}. How can I help you analyze it?")
}

fn init_failure_text(symbol: &str, error: &SdkError) -> String {
    if error.is_transport() {
        return INIT_CONNECTION_ERROR_TEXT.to_string();
    }
    match error.server_message() {
        Some(message) => {
            format!("Sorry, I couldn't fetch data for {symbol}: {message}. Please try again later.")
        }
        None => format!("Sorry, I couldn't fetch data for {symbol}. Please try again later."),
    }
}

fn send_failure_text(error: &SdkError) -> &'static str {
    match error {
        SdkError::Timeout => SEND_TIMEOUT_TEXT,
        e if e.is_transport() => SEND_CONNECTION_ERROR_TEXT,
        _ => SEND_REJECTED_TEXT,
    }
}

/// State of one chat view: session, transcript, input buffer and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    symbol: Option<String>,
    session_id: Option<SessionId>,
    phase: SessionPhase,
    transcript: Transcript,
    input: String,
    waiting: bool,
}

impl ChatSession {
    /// A session for `symbol`, not yet initialized.
    ///
    /// A blank symbol counts as absent.
    pub fn new(symbol: Option<String>) -> Self {
        Self {
            symbol: symbol
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            session_id: None,
            phase: SessionPhase::Initializing,
            transcript: Transcript::new(),
            input: String::new(),
            waiting: false,
        }
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// Start a new session.
    ///
    /// Without a symbol the session fails immediately and the caller must
    /// not contact the server. Otherwise any live session is superseded:
    /// its transcript is cleared and its id is returned in the ticket so
    /// that its cleanup still happens.
    pub fn begin_init(&mut self) -> Result<InitTicket, SessionError> {
        let Some(symbol) = self.symbol.clone() else {
            warn!("chat session requested without a ticker symbol");
            self.phase = SessionPhase::Failed;
            self.waiting = false;
            self.transcript
                .reset_with(ChatMessage::bot(MISSING_SYMBOL_TEXT, MessageStatus::Error));
            return Err(SessionError::MissingSymbol);
        };

        let superseded = self.take_teardown();
        let session_id = SessionId::generate();
        info!(%session_id, symbol = %symbol, "starting chat session");

        self.session_id = Some(session_id.clone());
        self.phase = SessionPhase::Initializing;
        self.waiting = false;
        self.input.clear();
        self.transcript.clear();

        Ok(InitTicket {
            session_id,
            symbol,
            superseded,
        })
    }

    /// Apply the outcome of `GET /get_ticker_data` for `ticket`.
    pub fn finish_init(&mut self, ticket: &InitTicket, result: Result<Value, SdkError>) {
        if !self.is_current(&ticket.session_id) {
            debug!(session_id = %ticket.session_id, "dropping init result of a stale session");
            return;
        }

        match result {
            Ok(_) => {
                info!(session_id = %ticket.session_id, "chat session ready");
                self.phase = SessionPhase::Ready;
                self.transcript.reset_with(ChatMessage::bot(
                    greeting(&ticket.symbol),
                    MessageStatus::Sent,
                ));
            }
            Err(e) => {
                warn!(session_id = %ticket.session_id, error = %e, "chat session initialization failed");
                self.phase = SessionPhase::Failed;
                self.transcript.reset_with(ChatMessage::bot(
                    init_failure_text(&ticket.symbol, &e),
                    MessageStatus::Error,
                ));
            }
        }
    }

    /// Initialize against the backend; returns true when the session is ready.
    pub async fn initialize(&mut self, client: &FinbotClient) -> bool {
        let Ok(ticket) = self.begin_init() else {
            return false;
        };
        if let Some(previous) = &ticket.superseded {
            release(client, previous).await;
        }
        let result = client.get_ticker_data(&ticket.session_id, &ticket.symbol).await;
        self.finish_init(&ticket, result);
        self.phase == SessionPhase::Ready
    }

    // ------------------------------------------------------------------
    // Sending
    // ------------------------------------------------------------------

    /// Submit the input buffer.
    ///
    /// Does nothing and returns `None` when the trimmed input is empty, the
    /// session is not ready, or a previous turn is still outstanding.
    /// Otherwise appends the user turn as `sending`, clears the input and
    /// blocks further sends until [`finish_send`](Self::finish_send).
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.accepts_input() {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let session_id = self.session_id.clone()?;

        let message = ChatMessage::user(text.clone());
        let message_id = message.id;
        if let Err(e) = self.transcript.push(message) {
            warn!(error = %e, "could not record user message");
            return None;
        }

        self.input.clear();
        self.waiting = true;
        Some(PendingSend {
            session_id,
            message_id,
            text,
        })
    }

    /// Apply the outcome of `POST /chat` for `pending`.
    ///
    /// On success the user turn becomes `sent` and the reply is appended.
    /// On failure the user turn becomes `error` and an explanatory bot turn
    /// is appended. Sending is unblocked in every case.
    pub fn finish_send(&mut self, pending: &PendingSend, result: Result<String, SdkError>) {
        if !self.is_current(&pending.session_id) {
            debug!(session_id = %pending.session_id, "dropping chat reply of a stale session");
            return;
        }
        self.waiting = false;

        match result {
            Ok(reply) => {
                self.transcript
                    .update_status(&pending.message_id, MessageStatus::Sent);
                self.append(ChatMessage::bot(reply, MessageStatus::Sent));
            }
            Err(e) => {
                warn!(session_id = %pending.session_id, error = %e, "chat turn failed");
                self.transcript
                    .update_status(&pending.message_id, MessageStatus::Error);
                self.append(ChatMessage::bot(send_failure_text(&e), MessageStatus::Error));
            }
        }
    }

    /// Send the input buffer; returns true when a turn was submitted.
    pub async fn send(&mut self, client: &FinbotClient) -> bool {
        let Some(pending) = self.begin_send() else {
            return false;
        };
        let result = client.chat(&pending.session_id, &pending.text).await;
        self.finish_send(&pending, result);
        true
    }

    /// Replace the input buffer with `text` and send it.
    pub async fn send_text(&mut self, text: &str, client: &FinbotClient) -> bool {
        self.set_input(text);
        self.send(client).await
    }

    fn append(&mut self, message: ChatMessage) {
        if let Err(e) = self.transcript.push(message) {
            warn!(error = %e, "could not record bot message");
        }
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Hand out the live session id for cleanup, at most once.
    ///
    /// Returns `None` before any session exists and on every later call.
    /// The session is closed afterwards.
    pub fn take_teardown(&mut self) -> Option<SessionId> {
        if self.phase == SessionPhase::Closed {
            return None;
        }
        let session_id = self.session_id.clone()?;
        self.phase = SessionPhase::Closed;
        self.waiting = false;
        Some(session_id)
    }

    /// Close the session and release it on the server.
    pub async fn teardown(&mut self, client: &FinbotClient) {
        if let Some(session_id) = self.take_teardown() {
            release(client, &session_id).await;
        }
    }

    fn is_current(&self, session_id: &SessionId) -> bool {
        self.phase != SessionPhase::Closed && self.session_id.as_ref() == Some(session_id)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Symbol this session is about.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Id of the current session, if one was started.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// A turn is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Initialization has not settled yet.
    pub fn is_initializing(&self) -> bool {
        self.phase == SessionPhase::Initializing
    }

    /// The input control should be enabled.
    pub fn accepts_input(&self) -> bool {
        self.phase == SessionPhase::Ready && !self.waiting
    }

    /// The send action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.accepts_input() && !self.input.trim().is_empty()
    }
}

/// Release a session on the server; failures are logged and swallowed.
pub async fn release(client: &FinbotClient, session_id: &SessionId) {
    match client.cleanup_session(session_id).await {
        Ok(()) => info!(%session_id, "chat session released"),
        Err(e) => warn!(%session_id, error = %e, "chat session cleanup failed"),
    }
}

#[cfg(test)]
mod tests {
    use finbot_models::Sender;
    use serde_json::json;

    use super::*;

    fn ready_session(symbol: &str) -> ChatSession {
        let mut session = ChatSession::new(Some(symbol.to_string()));
        let ticket = session.begin_init().unwrap();
        session.finish_init(&ticket, Ok(json!({})));
        session
    }

    fn rejected(message: &str) -> SdkError {
        SdkError::Api {
            code: 500,
            message: message.to_string(),
        }
    }

    #[test]
    fn successful_init_greets_once() {
        let session = ready_session("AAPL");
        assert_eq!(session.phase(), SessionPhase::Ready);

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].status, MessageStatus::Sent);
        assert_eq!(
            messages[0].content,
            "Hello! I've gathered the latest information about AAPL. How can I help you analyze it?"
        );
    }

    #[test]
    fn rejected_init_reports_server_message() {
        let mut session = ChatSession::new(Some("ZZZZ".into()));
        let ticket = session.begin_init().unwrap();
        session.finish_init(&ticket, Err(rejected("Unknown ticker")));

        assert_eq!(session.phase(), SessionPhase::Failed);
        let first = &session.transcript().messages()[0];
        assert_eq!(first.status, MessageStatus::Error);
        assert!(first.content.contains("Unknown ticker"));
        assert!(first.content.contains("ZZZZ"));
        assert!(!session.accepts_input());
    }

    #[test]
    fn unreachable_backend_during_init() {
        let mut session = ChatSession::new(Some("AAPL".into()));
        let ticket = session.begin_init().unwrap();
        session.finish_init(&ticket, Err(SdkError::Timeout));

        let first = &session.transcript().messages()[0];
        assert_eq!(first.content, INIT_CONNECTION_ERROR_TEXT);
        assert_eq!(first.status, MessageStatus::Error);
    }

    #[test]
    fn missing_symbol_fails_without_session() {
        for symbol in [None, Some("   ".to_string())] {
            let mut session = ChatSession::new(symbol);
            assert_eq!(session.begin_init(), Err(SessionError::MissingSymbol));
            assert_eq!(session.phase(), SessionPhase::Failed);
            assert!(session.session_id().is_none());
            assert_eq!(session.transcript().messages()[0].status, MessageStatus::Error);
            assert_eq!(session.take_teardown(), None);
        }
    }

    #[test]
    fn blank_input_is_a_noop() {
        let mut session = ready_session("AAPL");
        session.set_input("   \t ");
        let before = session.clone();

        assert!(session.begin_send().is_none());
        assert_eq!(session, before);
    }

    #[test]
    fn sending_before_ready_is_a_noop() {
        let mut session = ChatSession::new(Some("AAPL".into()));
        session.set_input("hello");
        assert!(session.begin_send().is_none());

        let _ticket = session.begin_init().unwrap();
        session.set_input("hello");
        assert!(session.begin_send().is_none());
        assert_eq!(session.input(), "hello");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn sends_are_serialized() {
        let mut session = ready_session("AAPL");
        session.set_input("first");
        let pending = session.begin_send().unwrap();
        assert!(session.is_waiting());
        assert!(!session.accepts_input());

        session.set_input("second");
        assert!(session.begin_send().is_none());

        session.finish_send(&pending, Ok("answer".into()));
        assert!(!session.is_waiting());
        assert!(session.begin_send().is_some());
    }

    #[test]
    fn successful_send_appends_user_then_bot() {
        let mut session = ready_session("AAPL");
        session.set_input("  What is the P/E ratio?  ");
        let pending = session.begin_send().unwrap();

        assert_eq!(pending.text, "What is the P/E ratio?");
        assert_eq!(session.input(), "");
        assert_eq!(
            session.transcript().get(&pending.message_id).unwrap().status,
            MessageStatus::Sending
        );

        session.finish_send(&pending, Ok("The P/E ratio is 35.".into()));

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].status, MessageStatus::Sent);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_eq!(messages[2].status, MessageStatus::Sent);
        assert_eq!(messages[2].content, "The P/E ratio is 35.");
    }

    #[test]
    fn failed_send_marks_user_message_as_error() {
        let mut session = ready_session("AAPL");
        session.set_input("hello");
        let pending = session.begin_send().unwrap();
        session.finish_send(&pending, Err(rejected("model overloaded")));

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].status, MessageStatus::Error);
        assert_eq!(messages[2].content, SEND_REJECTED_TEXT);
        assert_eq!(messages[2].status, MessageStatus::Error);
        assert!(session.accepts_input());
    }

    #[test]
    fn transport_failures_have_their_own_wording() {
        let mut session = ready_session("AAPL");
        session.set_input("one");
        let pending = session.begin_send().unwrap();
        session.finish_send(&pending, Err(SdkError::Timeout));
        assert_eq!(session.transcript().last().unwrap().content, SEND_TIMEOUT_TEXT);

        session.set_input("two");
        let pending = session.begin_send().unwrap();
        let parse = serde_json::from_str::<Value>("<html>").unwrap_err();
        session.finish_send(&pending, Err(SdkError::from(parse)));
        assert_eq!(
            session.transcript().last().unwrap().content,
            SEND_CONNECTION_ERROR_TEXT
        );
    }

    #[test]
    fn teardown_is_handed_out_once() {
        let mut session = ChatSession::new(Some("AAPL".into()));
        assert_eq!(session.take_teardown(), None);

        let ticket = session.begin_init().unwrap();
        assert_eq!(session.take_teardown(), Some(ticket.session_id.clone()));
        assert_eq!(session.take_teardown(), None);
        assert_eq!(session.phase(), SessionPhase::Closed);
    }

    #[test]
    fn completions_after_teardown_are_dropped() {
        let mut session = ready_session("AAPL");
        session.set_input("hello");
        let pending = session.begin_send().unwrap();
        let _ = session.take_teardown();
        let before = session.clone();

        session.finish_send(&pending, Ok("late".into()));
        assert_eq!(session, before);
    }

    #[test]
    fn reinit_supersedes_previous_session() {
        let mut session = ChatSession::new(Some("AAPL".into()));
        let first = session.begin_init().unwrap();
        assert_eq!(first.superseded, None);

        let second = session.begin_init().unwrap();
        assert_eq!(second.superseded, Some(first.session_id.clone()));
        assert_ne!(first.session_id, second.session_id);

        session.finish_init(&first, Ok(json!({})));
        assert!(session.is_initializing());
        assert!(session.transcript().is_empty());

        session.finish_init(&second, Ok(json!({})));
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.session_id(), Some(&second.session_id));
    }
}
