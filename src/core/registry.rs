use std::path::Path;

use anyhow::{Result, bail};

use super::{
    processor::{ExtractionProcessor, I18nextProcessor, Processor},
    result::ExtractionResult,
};
use crate::config::Config;

/// Extract keys under `root` with the processor `config.project_type` names.
///
/// The only failures are configuration errors and an unknown project type;
/// unreadable files and directories end up in [`ExtractionResult::skipped`].
pub fn extract_keys(root: &Path, config: &Config) -> Result<ExtractionResult> {
    let registry = ProcessorRegistry::from_config(config)?;
    let processor = registry.get(&config.project_type)?;
    Ok(processor.process(root))
}

/// Maps project-type identifiers to processors.
#[derive(Debug, Clone, Default)]
pub struct ProcessorRegistry {
    processors: Vec<Processor>,
}

impl ProcessorRegistry {
    /// Registry with every built-in project type, configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::default();
        registry.register(I18nextProcessor::from_config(config)?.into());
        Ok(registry)
    }

    /// Add a processor, replacing any registered under the same identifier.
    pub fn register(&mut self, processor: Processor) {
        let project_type = processor.project_type();
        self.processors.retain(|p| p.project_type() != project_type);
        self.processors.push(processor);
    }

    pub fn get(&self, project_type: &str) -> Result<&Processor> {
        match self
            .processors
            .iter()
            .find(|p| p.project_type() == project_type)
        {
            Some(processor) => Ok(processor),
            None => bail!(
                "Unsupported project type: \"{}\" (supported: {})",
                project_type,
                self.project_types().join(", ")
            ),
        }
    }

    pub fn project_types(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.project_type()).collect()
    }
}
