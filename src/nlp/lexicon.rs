use crate::error::{ResourceError, Result};
use std::collections::{HashMap, HashSet};

/// Base nouns and irregular forms, see `resources/lemmas.txt`.
pub const BUNDLED_LEMMAS: &str = include_str!("../../resources/lemmas.txt");

/// Regular noun inflections, tried in this order.
const NOUN_SUFFIXES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Maps a token to its dictionary base form.
///
/// Works like WordNet's noun morphology: irregular forms come from an
/// exception table, regular ones from suffix rewrites, and a rewrite only
/// counts when it lands on a known noun. Words the dictionary cannot place
/// come back unchanged.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    nouns: HashSet<String>,
    exceptions: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn parse(content: &str) -> Result<Self> {
        let mut lexicon = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
            if fields.iter().any(|f| !f.chars().all(char::is_alphanumeric)) {
                return Err(ResourceError::Lexicon(format!(
                    "line {}: entries must be alphanumeric words",
                    index + 1
                )));
            }

            match fields.split_first() {
                Some((base, [])) => {
                    lexicon.nouns.insert(base.clone());
                }
                Some((inflected, bases)) => {
                    lexicon.nouns.extend(bases.iter().cloned());
                    lexicon
                        .exceptions
                        .entry(inflected.clone())
                        .or_default()
                        .extend(bases.iter().cloned());
                }
                None => {}
            }
        }

        if lexicon.nouns.is_empty() {
            return Err(ResourceError::Lexicon("dictionary contains no words".to_string()));
        }

        Ok(lexicon)
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_LEMMAS)
    }

    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }

    pub fn lemmatize(&self, word: &str) -> String {
        self.candidates(word)
            .into_iter()
            .reduce(|best, form| if form.len() < best.len() { form } else { best })
            .unwrap_or_else(|| word.to_string())
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(word) {
            let forms = std::iter::once(word.to_string()).chain(bases.iter().cloned());
            return self.known(forms);
        }

        let mut forms = apply_rules(&[word.to_string()]);
        let found = self.known(std::iter::once(word.to_string()).chain(forms.iter().cloned()));
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms);
            let found = self.known(forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    fn known(&self, forms: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .filter(|form| self.nouns.contains(form) && seen.insert(form.clone()))
            .collect()
    }
}

fn apply_rules(forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            NOUN_SUFFIXES.iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{}{}", stem, new))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lexicon = Lexicon::bundled().unwrap();
        assert_eq!(lexicon.lemmatize("symbols"), "symbol");
        assert_eq!(lexicon.lemmatize("whales"), "whale");
        assert_eq!(lexicon.lemmatize("boxes"), "box");
        assert_eq!(lexicon.lemmatize("branches"), "branch");
        assert_eq!(lexicon.lemmatize("babies"), "baby");
        assert_eq!(lexicon.lemmatize("wolves"), "wolf");
    }

    #[test]
    fn test_irregular_plurals() {
        let lexicon = Lexicon::bundled().unwrap();
        assert_eq!(lexicon.lemmatize("children"), "child");
        assert_eq!(lexicon.lemmatize("mice"), "mouse");
        assert_eq!(lexicon.lemmatize("knives"), "knife");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let lexicon = Lexicon::bundled().unwrap();
        assert_eq!(lexicon.lemmatize("largest"), "largest");
        assert_eq!(lexicon.lemmatize("running"), "running");
        assert_eq!(lexicon.lemmatize("h2o"), "h2o");
    }

    #[test]
    fn test_known_base_is_kept() {
        let lexicon = Lexicon::parse("gas\n").unwrap();
        assert_eq!(lexicon.lemmatize("gas"), "gas");
    }

    #[test]
    fn test_rejects_empty_dictionary() {
        assert!(matches!(Lexicon::parse("# nothing\n\n"), Err(ResourceError::Lexicon(_))));
    }
}
