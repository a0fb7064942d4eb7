use super::lexicon::Lexicon;
use super::resources::LinguisticResources;
use super::stopwords::StopWordSet;
use super::tokenizer::WordTokenizer;
use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

/// Output of [`Normalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInput {
    /// Filtered, lemmatized tokens in input order, duplicates kept.
    pub tokens: Vec<String>,
    /// The whole input lowercased, untouched otherwise.
    pub lowered: String,
}

impl NormalizedInput {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Stateless text normalization: lowercase, tokenize, drop stop words and
/// non-alphanumeric tokens, lemmatize what is left.
#[derive(Debug, Clone)]
pub struct Normalizer {
    resources: Arc<LinguisticResources>,
}

impl Normalizer {
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.resources.tokenizer
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.resources.stop_words
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.resources.lexicon
    }

    pub fn normalize(&self, text: &str) -> NormalizedInput {
        let lowered = text.to_lowercase();

        let tokens: Vec<String> = self
            .resources
            .tokenizer
            .tokenize(&lowered)
            .into_iter()
            .filter(|token| is_alphanumeric(token) && !self.resources.stop_words.contains(token))
            .map(|token| self.resources.lexicon.lemmatize(&token))
            .collect();

        trace!("Normalized {:?} -> {:?}", text, tokens);

        NormalizedInput { tokens, lowered }
    }
}

/// Non-empty and made only of letters and digits.
fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
