//! Conversation engine
//!
//! Two states: Idle and AwaitingReply (`is_typing`). A send appends the
//! user's message at once, waits on the configured latency, then appends
//! the reply. Sends during AwaitingReply are rejected rather than queued.
//!
//! Every send takes a ticket. Clearing the conversation drops the pending
//! ticket, so a reply that lands after a clear is discarded instead of
//! reappearing in the fresh conversation.

use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

use super::error::{AssistantError, AssistantResult};
use super::message::ChatMessage;
use super::random::{RandomSource, StdRandom};
use super::responder::generate_reply;
use crate::events::{self, DemoEvent};
use crate::latency::SharedLatency;

struct Conversation {
    messages: Vec<ChatMessage>,
    pending: Option<u64>,
    next_ticket: u64,
    random: Box<dyn RandomSource>,
}

/// What a completed send produced
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// The user's message, appended before the wait
    pub user: ChatMessage,
    /// The assistant's reply, or `None` if the conversation was cleared
    /// while the reply was pending
    pub reply: Option<ChatMessage>,
}

/// Owns the chat transcript and the typing flag
pub struct ConversationEngine {
    conversation: Arc<Mutex<Conversation>>,
    latency: SharedLatency,
    events: broadcast::Sender<DemoEvent>,
}

impl ConversationEngine {
    /// Engine with entropy-seeded reply selection
    pub fn new(latency: SharedLatency) -> Self {
        Self::with_random(latency, Box::new(StdRandom::new()))
    }

    /// Engine with a caller-supplied random source
    pub fn with_random(latency: SharedLatency, random: Box<dyn RandomSource>) -> Self {
        Self {
            conversation: Arc::new(Mutex::new(Conversation {
                messages: vec![ChatMessage::greeting()],
                pending: None,
                next_ticket: 0,
                random,
            })),
            latency,
            events: events::channel(),
        }
    }

    /// Send a user message and wait for the reply.
    ///
    /// Empty or whitespace-only text is rejected without touching state.
    /// While a reply is pending, further sends fail with
    /// [`AssistantError::Busy`].
    pub async fn send_message(&self, text: &str) -> AssistantResult<SendOutcome> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let (user, ticket) = {
            let mut conversation = self.conversation.lock().await;
            if conversation.pending.is_some() {
                tracing::debug!("Rejecting message while a reply is pending");
                return Err(AssistantError::Busy);
            }

            let user = ChatMessage::user(text);
            conversation.messages.push(user.clone());

            let ticket = conversation.next_ticket;
            conversation.next_ticket += 1;
            conversation.pending = Some(ticket);
            (user, ticket)
        };

        tracing::debug!(message_id = %user.id, ticket, "User message appended");
        events::publish(
            &self.events,
            DemoEvent::MessageAppended {
                message: user.clone(),
            },
        );
        events::publish(&self.events, DemoEvent::TypingChanged { is_typing: true });

        self.latency.wait().await;

        let reply = {
            let mut conversation = self.conversation.lock().await;
            if conversation.pending != Some(ticket) {
                None
            } else {
                conversation.pending = None;
                let reply_text = generate_reply(text, conversation.random.as_mut());
                let reply = ChatMessage::assistant(reply_text);
                conversation.messages.push(reply.clone());
                Some(reply)
            }
        };

        match &reply {
            Some(message) => {
                tracing::debug!(message_id = %message.id, ticket, "Assistant reply appended");
                events::publish(
                    &self.events,
                    DemoEvent::MessageAppended {
                        message: message.clone(),
                    },
                );
                events::publish(&self.events, DemoEvent::TypingChanged { is_typing: false });
            }
            None => {
                tracing::debug!(ticket, "Discarding reply for a cleared conversation");
            }
        }

        Ok(SendOutcome { user, reply })
    }

    /// Reset to a single fresh greeting.
    ///
    /// Any pending reply is invalidated and the typing flag drops at once.
    pub async fn clear_conversation(&self) -> Vec<ChatMessage> {
        let (messages, was_typing) = {
            let mut conversation = self.conversation.lock().await;
            conversation.messages = vec![ChatMessage::greeting()];
            let was_typing = conversation.pending.take().is_some();
            (conversation.messages.clone(), was_typing)
        };

        tracing::info!(was_typing, "Conversation cleared");
        events::publish(
            &self.events,
            DemoEvent::ConversationCleared {
                messages: messages.clone(),
            },
        );
        if was_typing {
            events::publish(&self.events, DemoEvent::TypingChanged { is_typing: false });
        }
        messages
    }

    /// Snapshot of the transcript, oldest first
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.conversation.lock().await.messages.clone()
    }

    /// Whether a reply is pending
    pub async fn is_typing(&self) -> bool {
        self.conversation.lock().await.pending.is_some()
    }

    /// Subscribe to conversation change events
    pub fn subscribe(&self) -> broadcast::Receiver<DemoEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::message::{Sender, GREETING};
    use crate::assistant::responder::{CANNED_REPLIES, STEPS_REPLY};
    use crate::latency::{Immediate, Latency};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    /// Each wait blocks until the test releases the matching gate
    struct Gates {
        queue: std::sync::Mutex<VecDeque<oneshot::Receiver<()>>>,
    }

    impl Gates {
        fn new(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<()>>) {
            let mut senders = Vec::new();
            let mut queue = VecDeque::new();
            for _ in 0..count {
                let (tx, rx) = oneshot::channel();
                senders.push(tx);
                queue.push_back(rx);
            }
            (
                Arc::new(Self {
                    queue: std::sync::Mutex::new(queue),
                }),
                senders,
            )
        }
    }

    #[async_trait]
    impl Latency for Gates {
        async fn wait(&self) {
            let gate = self.queue.lock().unwrap().pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
    }

    struct FirstIndex;

    impl RandomSource for FirstIndex {
        fn next_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    async fn wait_for_typing(rx: &mut broadcast::Receiver<DemoEvent>, expected: bool) {
        loop {
            if let DemoEvent::TypingChanged { is_typing } = rx.recv().await.unwrap() {
                if is_typing == expected {
                    return;
                }
            }
        }
    }

    #[tokio::test]
    async fn test_starts_with_greeting() {
        let engine = ConversationEngine::new(Arc::new(Immediate));
        let messages = engine.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert_eq!(messages[0].text, GREETING);
        assert!(!engine.is_typing().await);
    }

    #[tokio::test]
    async fn test_empty_message_is_ignored() {
        let engine = ConversationEngine::new(Arc::new(Immediate));
        let mut rx = engine.subscribe();

        assert_eq!(
            engine.send_message("").await.unwrap_err(),
            AssistantError::EmptyMessage
        );
        assert_eq!(
            engine.send_message("   \n\t").await.unwrap_err(),
            AssistantError::EmptyMessage
        );

        assert_eq!(engine.messages().await.len(), 1);
        assert!(!engine.is_typing().await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_steps_question_end_to_end() {
        let (gates, mut senders) = Gates::new(1);
        let engine = Arc::new(ConversationEngine::new(gates));
        let mut rx = engine.subscribe();
        assert!(!engine.is_typing().await);

        let task = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.send_message("How many steps have I done?").await })
        };

        wait_for_typing(&mut rx, true).await;
        assert!(engine.is_typing().await);
        let messages = engine.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::User);

        senders.remove(0).send(()).unwrap();
        let outcome = task.await.unwrap().unwrap();

        assert!(!engine.is_typing().await);
        let messages = engine.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text, "How many steps have I done?");
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].text, STEPS_REPLY);
        assert_eq!(outcome.reply.unwrap().text, STEPS_REPLY);
    }

    #[tokio::test]
    async fn test_send_while_awaiting_reply_is_rejected() {
        let (gates, mut senders) = Gates::new(1);
        let engine = Arc::new(ConversationEngine::new(gates));
        let mut rx = engine.subscribe();

        let task = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.send_message("first").await })
        };
        wait_for_typing(&mut rx, true).await;

        assert_eq!(
            engine.send_message("second").await.unwrap_err(),
            AssistantError::Busy
        );
        assert_eq!(engine.messages().await.len(), 2);

        senders.remove(0).send(()).unwrap();
        task.await.unwrap().unwrap();

        let texts: Vec<String> = engine.messages().await.into_iter().map(|m| m.text).collect();
        assert_eq!(texts.len(), 3);
        assert!(!texts.contains(&"second".to_string()));
    }

    #[tokio::test]
    async fn test_clear_discards_pending_reply() {
        let (gates, mut senders) = Gates::new(1);
        let engine = Arc::new(ConversationEngine::new(gates));
        let mut rx = engine.subscribe();

        let task = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.send_message("tell me about sleep").await })
        };
        wait_for_typing(&mut rx, true).await;

        let cleared = engine.clear_conversation().await;
        assert_eq!(cleared.len(), 1);
        assert!(!engine.is_typing().await);

        senders.remove(0).send(()).unwrap();
        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.reply.is_none());

        let messages = engine.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_stale_reply_does_not_touch_next_send() {
        let (gates, mut senders) = Gates::new(2);
        let engine = Arc::new(ConversationEngine::new(gates));
        let mut rx = engine.subscribe();

        let stale = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.send_message("old question").await })
        };
        wait_for_typing(&mut rx, true).await;
        engine.clear_conversation().await;

        let fresh = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.send_message("how did I sleep").await })
        };
        wait_for_typing(&mut rx, true).await;

        // Release the stale reply first; the fresh send must stay pending
        senders.remove(0).send(()).unwrap();
        assert!(stale.await.unwrap().unwrap().reply.is_none());
        assert!(engine.is_typing().await);
        assert_eq!(engine.messages().await.len(), 2);

        senders.remove(0).send(()).unwrap();
        assert!(fresh.await.unwrap().unwrap().reply.is_some());
        assert!(!engine.is_typing().await);
        assert_eq!(engine.messages().await.len(), 3);
    }

    #[tokio::test]
    async fn test_clear_resets_to_single_assistant_message() {
        let engine = ConversationEngine::new(Arc::new(Immediate));
        engine.send_message("hi").await.unwrap();
        engine.send_message("water?").await.unwrap();
        assert_eq!(engine.messages().await.len(), 5);

        let messages = engine.clear_conversation().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Assistant);
        assert_eq!(engine.messages().await, messages);
    }

    #[tokio::test]
    async fn test_fallback_reply_uses_injected_random() {
        let engine = ConversationEngine::with_random(Arc::new(Immediate), Box::new(FirstIndex));
        let outcome = engine.send_message("hello").await.unwrap();
        assert_eq!(outcome.reply.unwrap().text, CANNED_REPLIES[0]);
    }
}
