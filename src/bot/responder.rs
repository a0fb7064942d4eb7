use super::matcher::{self, Candidate, IndexedEntry};
use super::memory::ConversationMemory;
use super::phrases::{self, PhraseBook, RandomSource};
use crate::config::BotConfig;
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::nlp::Normalizer;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Farewell,
    Answer,
    Fallback,
}

/// A response together with how it was chosen.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
    /// Scored entries, best first. Empty for farewells and fallbacks.
    pub candidates: Vec<Candidate>,
}

/// One conversation with the knowledge base.
///
/// Owns the session memory; the knowledge base, phrases and normalizer are
/// fixed once built. Every call to [`Responder::respond`] is total.
pub struct Responder {
    name: String,
    normalizer: Normalizer,
    entries: Vec<IndexedEntry>,
    phrases: PhraseBook,
    memory: ConversationMemory,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("memory", &self.memory)
            .field("rng", &"RandomSource")
            .finish()
    }
}

impl Responder {
    pub fn new(
        config: &BotConfig,
        normalizer: Normalizer,
        knowledge: &KnowledgeBase,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let phrases = PhraseBook::from_config(config)?;
        let entries = matcher::index_knowledge(knowledge, &normalizer);

        info!("🤖 {} ready with {} knowledge entries", config.name, entries.len());

        Ok(Self {
            name: config.name.clone(),
            normalizer,
            entries,
            phrases,
            memory: ConversationMemory::new(),
            rng,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    /// Forgets the conversation so far.
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    pub fn pick_greeting(&mut self) -> String {
        phrases::choose(&self.phrases.greetings, self.rng.as_mut()).to_string()
    }

    pub fn get_response(&mut self, input: &str) -> String {
        self.respond(input).text
    }

    pub fn respond(&mut self, input: &str) -> Reply {
        let normalized = self.normalizer.normalize(input);
        self.memory.record(input, &normalized.tokens);

        if self.phrases.is_farewell(&normalized.lowered) {
            debug!("Farewell trigger: {:?}", normalized.lowered);
            return Reply {
                text: phrases::choose(&self.phrases.farewells, self.rng.as_mut()).to_string(),
                kind: ReplyKind::Farewell,
                candidates: Vec::new(),
            };
        }

        let prior: Vec<&[String]> = self.memory.prior_turns().collect();
        let candidates = matcher::rank(&self.entries, &normalized.tokens, &prior);
        debug!(
            "Tokens {:?} matched {} of {} entries",
            normalized.tokens,
            candidates.len(),
            self.entries.len()
        );

        match candidates.first().map(|best| best.answer.clone()) {
            Some(text) => Reply {
                text,
                kind: ReplyKind::Answer,
                candidates,
            },
            None => Reply {
                text: phrases::choose(&self.phrases.fallbacks, self.rng.as_mut()).to_string(),
                kind: ReplyKind::Fallback,
                candidates,
            },
        }
    }
}
