use crate::config::BotConfig;
use crate::error::{ResourceError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice of an index. Injected so tests can script the draws.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// `StdRng`, from OS entropy or a fixed seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out.
/// Draws are reduced modulo the list length.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw % len
    }
}

/// Canned phrases and the inputs that end a conversation.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    pub greetings: Vec<String>,
    pub farewells: Vec<String>,
    pub fallbacks: Vec<String>,
    pub farewell_triggers: Vec<String>,
}

impl PhraseBook {
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let book = Self {
            greetings: non_blank(&config.greetings),
            farewells: non_blank(&config.farewells),
            fallbacks: non_blank(&config.fallbacks),
            farewell_triggers: config.farewell_triggers.iter().map(|t| t.to_lowercase()).collect(),
        };
        book.validate()?;
        Ok(book)
    }

    fn validate(&self) -> Result<()> {
        let lists: [(&'static str, &Vec<String>); 3] = [
            ("greetings", &self.greetings),
            ("farewells", &self.farewells),
            ("fallbacks", &self.fallbacks),
        ];

        for (name, phrases) in lists {
            if phrases.is_empty() {
                return Err(ResourceError::Phrases(name));
            }
        }
        Ok(())
    }

    /// Full-string equality against the lowered input, not token membership.
    pub fn is_farewell(&self, lowered: &str) -> bool {
        self.farewell_triggers.iter().any(|t| t == lowered)
    }
}

fn non_blank(phrases: &[String]) -> Vec<String> {
    phrases.iter().filter(|p| !p.trim().is_empty()).cloned().collect()
}

/// Picks one phrase uniformly.
pub fn choose<'a>(phrases: &'a [String], rng: &mut dyn RandomSource) -> &'a str {
    &phrases[rng.pick(phrases.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_random_cycles() {
        let mut rng = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(rng.pick(4), 1);
        assert_eq!(rng.pick(4), 1);
        assert_eq!(rng.pick(4), 1);
    }

    #[test]
    fn test_seeded_random_stays_in_range() {
        let mut rng = SeededRandom::from_seed(7);
        for _ in 0..100 {
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let mut config = BotConfig::default();
        config.fallbacks.clear();
        assert!(matches!(
            PhraseBook::from_config(&config),
            Err(ResourceError::Phrases("fallbacks"))
        ));
    }

    #[test]
    fn test_farewell_is_exact_match() {
        let book = PhraseBook::from_config(&BotConfig::default()).unwrap();
        assert!(book.is_farewell("bye"));
        assert!(!book.is_farewell("bye bye"));
        assert!(!book.is_farewell(" quit"));
    }
}
