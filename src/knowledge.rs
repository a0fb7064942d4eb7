//! The fixed question -> answer table the responder matches against.
//!
//! Keys are the question text exactly as written. Inserting a question that
//! already exists replaces its answer in place, so a file with duplicate
//! questions yields one entry per distinct question.

use crate::error::{ResourceError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const DEFAULT_ENTRIES: [(&str, &str); 4] = [
    ("what is your name", "I am a simple chatbot."),
    (
        "what is the chemical symbol for water",
        "The chemical symbol for water is H2O.",
    ),
    (
        "what is the chemical symbol for gold",
        "The chemical symbol for gold is Au.",
    ),
    (
        "what is the largest mammal",
        "The blue whale is the largest mammal.",
    ),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// TOML layout: a list of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct TomlKnowledge {
    #[serde(default)]
    entry: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    responses: IndexMap<String, String>,
}

impl KnowledgeBase {
    pub fn from_pairs<I, Q, A>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut responses = IndexMap::new();
        for (question, answer) in pairs {
            let question = question.into();
            let answer = answer.into();

            if question.trim().is_empty() {
                return Err(ResourceError::Knowledge("question text is empty".to_string()));
            }
            if answer.trim().is_empty() {
                return Err(ResourceError::Knowledge(format!(
                    "answer for '{}' is empty",
                    question
                )));
            }

            responses.insert(question, answer);
        }

        if responses.is_empty() {
            return Err(ResourceError::Knowledge("no entries".to_string()));
        }

        Ok(Self { responses })
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: TomlKnowledge =
            toml::from_str(content).map_err(|e| ResourceError::Knowledge(e.to_string()))?;
        Self::from_pairs(parsed.entry.into_iter().map(|qa| (qa.question, qa.answer)))
    }

    /// A JSON object mapping question to answer. Later duplicate keys win.
    pub fn parse_json(content: &str) -> Result<Self> {
        let parsed: IndexMap<String, String> =
            serde_json::from_str(content).map_err(|e| ResourceError::Knowledge(e.to_string()))?;
        Self::from_pairs(parsed)
    }

    /// Loads `.toml` or `.json` by extension.
    pub async fn load_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ResourceError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let knowledge = match extension.as_str() {
            "toml" => Self::parse_toml(&content)?,
            "json" => Self::parse_json(&content)?,
            other => {
                return Err(ResourceError::Knowledge(format!(
                    "unsupported knowledge file type '{}' (expected .toml or .json)",
                    other
                )))
            }
        };

        info!("🧠 Loaded {} knowledge entries from {:?}", knowledge.len(), path);
        Ok(knowledge)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.responses.get(question).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.responses.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    pub fn to_entries(&self) -> Vec<QuestionAnswer> {
        self.iter()
            .map(|(question, answer)| QuestionAnswer {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            responses: DEFAULT_ENTRIES
                .iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_questions_collapse() {
        let kb = KnowledgeBase::from_pairs([
            ("what is your name", "first"),
            ("what is the largest mammal", "whale"),
            ("what is your name", "second"),
        ])
        .unwrap();

        assert_eq!(kb.len(), 2);
        assert_eq!(kb.get("what is your name"), Some("second"));
        assert_eq!(kb.iter().next().map(|(q, _)| q), Some("what is your name"));
    }

    #[test]
    fn test_json_duplicates_collapse() {
        let kb = KnowledgeBase::parse_json(r#"{"hello there": "a", "hello there": "b"}"#).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.get("hello there"), Some("b"));
    }

    #[test]
    fn test_toml_entries() {
        let kb = KnowledgeBase::parse_toml(
            r#"
[[entry]]
question = "what is the capital of france"
answer = "Paris."

[[entry]]
question = "who wrote hamlet"
answer = "Shakespeare."
"#,
        )
        .unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.get("who wrote hamlet"), Some("Shakespeare."));
    }

    #[test]
    fn test_rejects_empty_answers_and_empty_tables() {
        assert!(KnowledgeBase::from_pairs([("q", " ")]).is_err());
        assert!(KnowledgeBase::parse_toml("").is_err());
        assert!(KnowledgeBase::parse_json("{}").is_err());
    }

    #[test]
    fn test_default_has_four_entries() {
        assert_eq!(KnowledgeBase::default().len(), 4);
    }
}
