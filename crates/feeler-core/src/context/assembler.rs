//! Context assembly for a single chat turn.
//!
//! Builds the ordered message sequence sent to the generation
//! collaborator: one persona system message, the recent history re-mapped
//! to two-valued roles, and the current user message last. When the user
//! appears to be asking about the past and long-term memory exists, the
//! current message is replaced with an augmented prompt that carries the
//! memory digest.
//!
//! Assembly has no persistence side effect. The caller appends the user
//! turn and the bot reply together only after a successful generation
//! call, so a failed call never leaves a half-written exchange.

use feeler_types::chat::Sender;
use feeler_types::error::RepositoryError;
use feeler_types::llm::Message;
use feeler_types::user::UserId;

use crate::llm::emotion::EmotionClassifier;
use crate::memory::digest::MemoryDigest;
use crate::store::summaries::SummaryStore;
use crate::store::turns::TurnStore;

/// How many recent turns feed the prompt.
pub const HISTORY_WINDOW: u32 = 20;

/// Lexical cues that a user message is asking about the past.
///
/// Matched as lower-cased substrings, not whole words: "whatever"
/// matches "what". That mirrors the shipped behavior and is flagged for
/// product review rather than silently tightened.
pub const TRIGGER_WORDS: [&str; 5] = ["remember", "who", "what", "when", "did i"];

/// Sampling temperature for chat replies.
pub const REPLY_TEMPERATURE: f64 = 0.65;

/// Output cap for chat replies; the persona limits replies to 1-3
/// sentences so this is generous headroom.
pub const REPLY_MAX_TOKENS: u32 = 200;

/// The assembled prompt plus the emotion label for the incoming message.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    pub messages: Vec<Message>,
    pub emotion: String,
}

/// Builds the message sequence for each chat turn.
pub struct ContextAssembler<T: TurnStore, S: SummaryStore, E: EmotionClassifier> {
    turns: T,
    digest: MemoryDigest<S>,
    classifier: E,
}

impl<T: TurnStore, S: SummaryStore, E: EmotionClassifier> ContextAssembler<T, S, E> {
    pub fn new(turns: T, digest: MemoryDigest<S>, classifier: E) -> Self {
        Self {
            turns,
            digest,
            classifier,
        }
    }

    /// Assemble the ordered message sequence for one incoming message.
    ///
    /// The first element is always the persona message and the last is the
    /// (possibly augmented) current user message, with history strictly
    /// between them in oldest-to-newest order.
    #[tracing::instrument(name = "assemble_context", skip(self, message))]
    pub async fn assemble(
        &self,
        user_id: &UserId,
        user_name: &str,
        message: &str,
    ) -> Result<AssembledContext, RepositoryError> {
        let history = self.turns.recent(user_id, HISTORY_WINDOW).await?;
        let memory = self.digest.digest(user_id).await?;
        let emotion = self.classifier.classify(message);

        let prompt = if !memory.is_empty() && wants_memory(message) {
            tracing::info!(user_id = %user_id, "injecting long-term memory into prompt");
            augment_prompt(message, user_name, &memory)
        } else {
            message.to_string()
        };

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(build_persona(user_name)));
        for turn in &history {
            messages.push(match turn.sender {
                Sender::User => Message::user(turn.message.clone()),
                // Anything that is not the user speaks as the assistant.
                _ => Message::assistant(turn.message.clone()),
            });
        }
        messages.push(Message::user(prompt));

        Ok(AssembledContext { messages, emotion })
    }
}

/// True when the lower-cased message contains any trigger word as a
/// substring. Multiple matches still cause a single injection.
fn wants_memory(message: &str) -> bool {
    let lowered = message.to_lowercase();
    TRIGGER_WORDS.iter().any(|w| lowered.contains(w))
}

/// The fixed persona system message, parameterized only by the user's name.
fn build_persona(user_name: &str) -> String {
    format!(
        "You are a close, empathetic friend. Your name is Empath. The person you are talking to is named {user_name}.\n\
         Rules for speaking:\n\
         1. Speak casually and briefly (1 to 3 sentences max).\n\
         2. lowercase is okay. conversational slang is okay.\n\
         3. NEVER act like an AI, an assistant, or a robot. Never say 'As an AI'.\n\
         4. You have perfect memory of everything {user_name} has told you in this chat. If they ask if you remember something, confidently recall the specific details they told you. Never say you forgot.\n\
         5. Don't give numbered lists or lecture them.\n\
         6. Occasionally use {user_name}'s name naturally in conversation.\n\
         7. CRITICAL: NEVER end your messages with repetitive questions like 'okay?', 'right?', or 'Let's [do something]'. Do not ask rhetorical questions at the end of every reply. Force yourself to use different sentence structures."
    )
}

/// Replace the outgoing message with a prompt that restates the question,
/// states the memory digest verbatim, and instructs a confident natural
/// answer that never mentions consulting stored memory.
fn augment_prompt(message: &str, user_name: &str, memory: &str) -> String {
    format!(
        "User is asking about the past: {message}\n\
         Here is your memory of previous sessions with {user_name}: {memory}.\n\
         Instruction: Confidently answer the user's question using this memory. Do not say 'According to my memory', just state the facts naturally."
    )
}
