use parrot::nlp::{LinguisticResources, Normalizer};
use std::sync::Arc;

fn normalizer() -> Normalizer {
    Normalizer::new(Arc::new(LinguisticResources::bundled().unwrap()))
}

#[test]
fn test_stop_words_and_punctuation_removed() {
    let normalized = normalizer().normalize("What is the chemical symbol for water?");
    assert_eq!(normalized.tokens, vec!["chemical", "symbol", "water"]);
    assert_eq!(normalized.lowered, "what is the chemical symbol for water?");
}

#[test]
fn test_tokens_are_lemmatized() {
    let normalized = normalizer().normalize("Tell me about MAMMALS and whales");
    assert_eq!(normalized.tokens, vec!["tell", "mammal", "whale"]);
}

#[test]
fn test_order_and_duplicates_preserved() {
    let normalized = normalizer().normalize("gold, water, gold!");
    assert_eq!(normalized.tokens, vec!["gold", "water", "gold"]);
}

#[test]
fn test_mixed_symbol_tokens_dropped() {
    let normalized = normalizer().normalize("snake_case 42 ## h2o");
    assert_eq!(normalized.tokens, vec!["42", "h2o"]);
}

#[test]
fn test_contractions_leave_no_fragments() {
    let normalized = normalizer().normalize("I don't know what's water");
    assert_eq!(normalized.tokens, vec!["know", "water"]);
}

#[test]
fn test_empty_and_stop_word_only_inputs() {
    let normalizer = normalizer();
    for input in ["", "   ", "?!...", "what is the", "Is it?"] {
        let normalized = normalizer.normalize(input);
        assert!(normalized.is_empty(), "expected no tokens for {:?}", input);
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let normalizer = normalizer();
    for input in ["What is the largest mammal?", "Gold symbols, please", ""] {
        assert_eq!(normalizer.normalize(input), normalizer.normalize(input));
    }
}

#[test]
fn test_unicode_lowercasing() {
    let normalized = normalizer().normalize("ÉCOLE Straße");
    assert_eq!(normalized.tokens, vec!["école", "straße"]);
}

#[test]
fn test_hyphenated_and_dotted_words_are_dropped_whole() {
    let normalizer = normalizer();
    for input in ["e-mail", "state-of-the-art", "3.14", "1,000"] {
        let normalized = normalizer.normalize(input);
        assert!(normalized.is_empty(), "expected no tokens for {:?}", input);
    }

    let normalized = normalizer.normalize("What is e-mail worth to 1,000 whales?");
    assert_eq!(normalized.tokens, vec!["worth", "whale"]);
}

#[test]
fn test_cannot_splits_into_stop_words() {
    let normalized = normalizer().normalize("I cannot find water");
    assert_eq!(normalized.tokens, vec!["find", "water"]);
}
