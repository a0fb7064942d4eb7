use super::lexicon::Lexicon;
use super::stopwords::StopWordSet;
use super::tokenizer::{WordTokenizer, DEFAULT_PATTERN};
use crate::error::{ResourceError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TOKENIZER_FILE: &str = "tokenizer.txt";
pub const STOP_WORDS_FILE: &str = "stopwords.txt";
pub const LEMMAS_FILE: &str = "lemmas.txt";

/// Where the three linguistic resources come from.
///
/// Acquiring them (bundling, downloading, caching) is the source's business;
/// the normalizer only ever sees the loaded result.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    fn name(&self) -> &str;
    async fn load_tokenizer(&self) -> Result<WordTokenizer>;
    async fn load_stop_words(&self) -> Result<StopWordSet>;
    async fn load_lexicon(&self) -> Result<Lexicon>;
}

/// Data compiled into the binary.
pub struct BundledResources;

#[async_trait]
impl ResourceSource for BundledResources {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load_tokenizer(&self) -> Result<WordTokenizer> {
        WordTokenizer::new(DEFAULT_PATTERN)
    }

    async fn load_stop_words(&self) -> Result<StopWordSet> {
        StopWordSet::bundled()
    }

    async fn load_lexicon(&self) -> Result<Lexicon> {
        Lexicon::bundled()
    }
}

/// `tokenizer.txt`, `stopwords.txt` and `lemmas.txt` in one directory.
pub struct DirectoryResources {
    dir: PathBuf,
    label: String,
}

impl DirectoryResources {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let label = dir.display().to_string();
        Self { dir, label }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read(&self, file: &str) -> Result<String> {
        let path = self.dir.join(file);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ResourceError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

#[async_trait]
impl ResourceSource for DirectoryResources {
    fn name(&self) -> &str {
        &self.label
    }

    async fn load_tokenizer(&self) -> Result<WordTokenizer> {
        let content = self.read(TOKENIZER_FILE).await?;
        let pattern = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .ok_or_else(|| ResourceError::Tokenizer(format!("{} has no pattern", TOKENIZER_FILE)))?;
        WordTokenizer::new(pattern)
    }

    async fn load_stop_words(&self) -> Result<StopWordSet> {
        StopWordSet::parse(&self.read(STOP_WORDS_FILE).await?)
    }

    async fn load_lexicon(&self) -> Result<Lexicon> {
        Lexicon::parse(&self.read(LEMMAS_FILE).await?)
    }
}

/// The loaded, read-only resources shared by every normalizer of a process.
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    pub tokenizer: WordTokenizer,
    pub stop_words: StopWordSet,
    pub lexicon: Lexicon,
}

impl LinguisticResources {
    pub async fn load(source: &dyn ResourceSource) -> Result<Self> {
        let tokenizer = source.load_tokenizer().await?;
        let stop_words = source.load_stop_words().await?;
        let lexicon = source.load_lexicon().await?;

        info!(
            "📚 Loaded linguistic resources from {}: {} stop words, {} lemmas",
            source.name(),
            stop_words.len(),
            lexicon.len()
        );

        Ok(Self {
            tokenizer,
            stop_words,
            lexicon,
        })
    }

    /// Compiled-in resources, loaded without a runtime.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            tokenizer: WordTokenizer::new(DEFAULT_PATTERN)?,
            stop_words: StopWordSet::bundled()?,
            lexicon: Lexicon::bundled()?,
        })
    }
}
