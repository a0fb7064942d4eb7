pub mod lexicon;
pub mod normalizer;
pub mod resources;
pub mod stopwords;
pub mod tokenizer;

pub use lexicon::Lexicon;
pub use normalizer::{NormalizedInput, Normalizer};
pub use resources::{BundledResources, DirectoryResources, LinguisticResources, ResourceSource};
pub use stopwords::StopWordSet;
pub use tokenizer::WordTokenizer;
