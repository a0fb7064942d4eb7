use crate::knowledge::KnowledgeBase;
use crate::nlp::Normalizer;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Weight of each earlier turn that touches an entry's question.
pub const CONTEXT_WEIGHT: f64 = 0.5;

/// A knowledge entry with its question normalized once up front.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    pub question: String,
    pub answer: String,
    pub tokens: HashSet<String>,
}

/// One scored knowledge entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub question: String,
    pub answer: String,
    pub match_count: usize,
    pub context_bonus: usize,
    pub score: f64,
}

/// Normalizes every question of the knowledge base.
pub fn index_knowledge(knowledge: &KnowledgeBase, normalizer: &Normalizer) -> Vec<IndexedEntry> {
    knowledge
        .iter()
        .map(|(question, answer)| IndexedEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            tokens: normalizer.normalize(question).tokens.into_iter().collect(),
        })
        .collect()
}

/// Scores every entry sharing at least one token with `tokens`.
///
/// `prior` are the remembered turns before the current one. Each of them
/// adds [`CONTEXT_WEIGHT`] to an entry if any of its tokens is in the
/// entry's question. The result is ordered best first: by score, then by
/// answer text, both descending.
pub fn rank(entries: &[IndexedEntry], tokens: &[String], prior: &[&[String]]) -> Vec<Candidate> {
    let input: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut candidates: Vec<Candidate> = entries
        .iter()
        .filter_map(|entry| {
            let match_count = input.iter().filter(|t| entry.tokens.contains(**t)).count();
            if match_count == 0 {
                return None;
            }

            let context_bonus = prior
                .iter()
                .filter(|turn| turn.iter().any(|t| entry.tokens.contains(t)))
                .count();

            Some(Candidate {
                question: entry.question.clone(),
                answer: entry.answer.clone(),
                match_count,
                context_bonus,
                score: match_count as f64 + CONTEXT_WEIGHT * context_bonus as f64,
            })
        })
        .collect();

    candidates.sort_by(best_first);
    candidates
}

/// Equal scores go to the lexicographically greater answer.
fn best_first(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.answer.cmp(&a.answer))
}
