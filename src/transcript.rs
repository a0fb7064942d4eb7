use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// `None` for lines the bot says unprompted, like the greeting.
    pub user: Option<String>,
    pub bot: String,
    pub timestamp: DateTime<Utc>,
}

/// What the user sees of a conversation, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub session_id: Uuid,
    pub bot_name: String,
    pub started_at: DateTime<Utc>,
    pub exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn new(bot_name: &str, greeting: String) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            bot_name: bot_name.to_string(),
            started_at: now,
            exchanges: vec![Exchange {
                user: None,
                bot: greeting,
                timestamp: now,
            }],
        }
    }

    pub fn push(&mut self, user: &str, bot: &str) {
        self.exchanges.push(Exchange {
            user: Some(user.to_string()),
            bot: bot.to_string(),
            timestamp: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
        Ok(())
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for exchange in &self.exchanges {
            if let Some(user) = &exchange.user {
                writeln!(f, "You: {}", user)?;
            }
            writeln!(f, "{}: {}", self.bot_name, exchange.bot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_greeting_without_user_line() {
        let mut transcript = Transcript::new("Chatbot", "Hello!".to_string());
        transcript.push("what is your name", "I am a simple chatbot.");

        assert_eq!(
            transcript.to_string(),
            "Chatbot: Hello!\nYou: what is your name\nChatbot: I am a simple chatbot.\n"
        );
    }

    #[test]
    fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");

        let mut transcript = Transcript::new("Chatbot", "Hi there!".to_string());
        transcript.push("bye", "Take care!");
        transcript.save_json(&path).unwrap();

        let loaded: Transcript =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.session_id, transcript.session_id);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.exchanges[0].user, None);
        assert_eq!(loaded.exchanges[1].bot, "Take care!");
    }
}
