//! Line-oriented chat loop over stdin.

use std::collections::HashSet;

use anyhow::{Result, bail};
use finbot_sdk::{ChatSession, FinbotClient, MessageId, Transcript};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render;

const QUIT_COMMAND: &str = "/quit";

/// Chat about `symbol` until `/quit`, end of input or Ctrl-C.
///
/// The session is released exactly once on every exit path. Fails when
/// the session could not be initialized.
pub async fn run(client: &FinbotClient, symbol: String) -> Result<()> {
    let mut session = ChatSession::new(Some(symbol));
    let mut printed = Printed::default();

    let ready = tokio::select! {
        ready = session.initialize(client) => ready,
        _ = tokio::signal::ctrl_c() => {
            session.teardown(client).await;
            return Ok(());
        }
    };
    printed.flush(&session);
    if !ready {
        session.teardown(client).await;
        bail!("chat session could not be initialized");
    }
    println!("Type your question, or {QUIT_COMMAND} to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            debug!("stdin closed");
            break;
        };
        let text = line.trim();
        if text == QUIT_COMMAND {
            break;
        }
        if text.is_empty() {
            continue;
        }

        session.set_input(text);
        tokio::select! {
            _ = session.send(client) => {}
            _ = tokio::signal::ctrl_c() => break,
        }
        printed.flush(&session);
    }

    session.teardown(client).await;
    Ok(())
}

/// Ids of the transcript messages already written to stdout.
#[derive(Default)]
struct Printed(HashSet<MessageId>);

impl Printed {
    fn flush(&mut self, session: &ChatSession) {
        for line in self.fresh_lines(session.transcript()) {
            println!("{line}");
        }
    }

    /// Lines for messages that settled since the last call.
    fn fresh_lines(&mut self, transcript: &Transcript) -> Vec<String> {
        let mut lines = Vec::new();
        for message in transcript.messages() {
            if !message.status.is_settled() || self.0.contains(&message.id) {
                continue;
            }
            self.0.insert(message.id);
            lines.extend(render::message_line(message));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use finbot_sdk::{ChatMessage, MessageStatus};

    use super::*;

    #[test]
    fn pending_turns_wait_until_settled() {
        let mut transcript = Transcript::default();
        let question = ChatMessage::user("What is the P/E?");
        let question_id = question.id;
        transcript.push(question).unwrap();
        transcript
            .push(ChatMessage::bot("Hello", MessageStatus::Sent))
            .unwrap();

        let mut printed = Printed::default();
        assert_eq!(printed.fresh_lines(&transcript), ["finbot> Hello"]);

        transcript.update_status(&question_id, MessageStatus::Error);
        assert_eq!(
            printed.fresh_lines(&transcript),
            ["  (not delivered) What is the P/E?"]
        );
        assert!(printed.fresh_lines(&transcript).is_empty());
    }
}
