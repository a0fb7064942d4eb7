use crate::error::{ResourceError, Result};
use regex::Regex;

/// Word runs and punctuation runs. Inner hyphens, periods and apostrophes
/// stay inside a word (`e-mail`, `3.14`, `don't`), as do digit-group commas
/// (`1,000`).
pub const DEFAULT_PATTERN: &str = r"\w+(?:[-.'’]\w+|,\d+)*|['’]\w+|[^\w\s]+";

/// Splits text into word and punctuation tokens, left to right.
///
/// The "model" is a regex pattern. Contractions matched as one token are
/// split afterwards the way Penn Treebank tokenization does it:
/// `don't` becomes `do` + `n't`, `it's` becomes `it` + `'s`, `cannot`
/// becomes `can` + `not`.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(ResourceError::Tokenizer("pattern is empty".to_string()));
        }

        let pattern = Regex::new(pattern).map_err(|e| ResourceError::Tokenizer(e.to_string()))?;

        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for m in self.pattern.find_iter(text) {
            split_contraction(m.as_str(), &mut tokens);
        }
        tokens
    }
}

fn split_contraction(token: &str, out: &mut Vec<String>) {
    if token.eq_ignore_ascii_case("cannot") {
        out.push(token[..3].to_string());
        out.push(token[3..].to_string());
        return;
    }

    let Some(pos) = token.find(['\'', '’']) else {
        out.push(token.to_string());
        return;
    };

    if pos == 0 {
        out.push(token.to_string());
        return;
    }

    let apostrophe_len = token[pos..].chars().next().map_or(1, char::len_utf8);
    let rest = &token[pos + apostrophe_len..];

    // "n't" binds to the negation, not to the stem: "don't" -> "do", "n't"
    if rest.eq_ignore_ascii_case("t") && pos > 1 && token[..pos].ends_with(['n', 'N']) {
        let stem_end = pos - 1;
        out.push(token[..stem_end].to_string());
        out.push(token[stem_end..].to_string());
        return;
    }

    out.push(token[..pos].to_string());
    out.push(token[pos..].to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_a_boundary() {
        let tokenizer = WordTokenizer::new(DEFAULT_PATTERN).unwrap();
        assert_eq!(
            tokenizer.tokenize("what is the symbol for water?"),
            vec!["what", "is", "the", "symbol", "for", "water", "?"]
        );
        assert_eq!(tokenizer.tokenize("h2o."), vec!["h2o", "."]);
    }

    #[test]
    fn test_contractions_split() {
        let tokenizer = WordTokenizer::new(DEFAULT_PATTERN).unwrap();
        assert_eq!(tokenizer.tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenizer.tokenize("what's up"), vec!["what", "'s", "up"]);
        assert_eq!(tokenizer.tokenize("Cannot"), vec!["Can", "not"]);
    }

    #[test]
    fn test_inner_symbols_stay_in_the_word() {
        let tokenizer = WordTokenizer::new(DEFAULT_PATTERN).unwrap();
        assert_eq!(tokenizer.tokenize("e-mail"), vec!["e-mail"]);
        assert_eq!(tokenizer.tokenize("state-of-the-art"), vec!["state-of-the-art"]);
        assert_eq!(tokenizer.tokenize("pi is 3.14."), vec!["pi", "is", "3.14", "."]);
        assert_eq!(
            tokenizer.tokenize("1,000 or gold, water"),
            vec!["1,000", "or", "gold", ",", "water"]
        );
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(matches!(WordTokenizer::new("(unclosed"), Err(ResourceError::Tokenizer(_))));
        assert!(matches!(WordTokenizer::new("  "), Err(ResourceError::Tokenizer(_))));
    }
}
