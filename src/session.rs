//! Wires configuration, resources and knowledge into a [`Responder`].

use crate::bot::{RandomSource, Responder, SeededRandom};
use crate::config::Config;
use crate::knowledge::KnowledgeBase;
use crate::nlp::{
    BundledResources, DirectoryResources, LinguisticResources, Normalizer, ResourceSource,
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Loads the linguistic resources named by the config.
///
/// A configured directory is authoritative: if it is missing or incomplete
/// this fails instead of quietly using the bundled data.
pub async fn load_resources(config: &Config) -> Result<Arc<LinguisticResources>> {
    let source: Box<dyn ResourceSource> = match &config.resources.dir {
        Some(dir) => Box::new(DirectoryResources::new(dir)),
        None => Box::new(BundledResources),
    };

    let resources = LinguisticResources::load(source.as_ref())
        .await
        .with_context(|| format!("Failed to load linguistic resources from {}", source.name()))?;

    Ok(Arc::new(resources))
}

pub async fn load_knowledge(config: &Config) -> Result<KnowledgeBase> {
    match &config.knowledge.path {
        Some(path) => KnowledgeBase::load_file(path)
            .await
            .with_context(|| format!("Failed to load knowledge base: {}", path.display())),
        None => Ok(KnowledgeBase::default()),
    }
}

/// Starts a new conversation with randomness taken from the config seed.
pub async fn open_session(config: &Config) -> Result<Responder> {
    open_session_with(config, Box::new(SeededRandom::from_optional_seed(config.seed))).await
}

pub async fn open_session_with(config: &Config, rng: Box<dyn RandomSource>) -> Result<Responder> {
    let resources = load_resources(config).await?;
    let knowledge = load_knowledge(config).await?;
    let responder = Responder::new(&config.bot, Normalizer::new(resources), &knowledge, rng)
        .context("Failed to build responder")?;
    Ok(responder)
}
