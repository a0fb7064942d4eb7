//! # Parrot - keyword-matching chatbot
//!
//! Answers free-text questions from a fixed knowledge base by lexical
//! overlap, with a small bonus for entries related to the last few turns.
//!
//! ## Features
//!
//! - Normalization: tokenize, drop stop words and symbols, lemmatize
//! - Scored lookup with a three-turn recency bonus
//! - Injectable random source for greetings, farewells and fallbacks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use parrot::{config::Config, session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let mut bot = session::open_session(&config).await?;
//!
//!     println!("{}", bot.pick_greeting());
//!     println!("{}", bot.get_response("What is the chemical symbol for water?"));
//!
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod nlp;
pub mod session;
pub mod transcript;
pub mod utils;

// Re-export commonly used types for convenience
pub use bot::{Reply, ReplyKind, Responder};
pub use config::Config;
pub use error::ResourceError;
pub use knowledge::KnowledgeBase;
pub use nlp::{NormalizedInput, Normalizer};
pub use transcript::Transcript;
