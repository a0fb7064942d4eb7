pub mod matcher;
pub mod memory;
pub mod phrases;
pub mod responder;

pub use matcher::{Candidate, IndexedEntry};
pub use memory::{ConversationMemory, CONTEXT_CAPACITY};
pub use phrases::{PhraseBook, RandomSource, ScriptedRandom, SeededRandom};
pub use responder::{Reply, ReplyKind, Responder};
