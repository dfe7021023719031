//! Extraction processors.
//!
//! A processor pairs one [`FileFinder`] with one [`KeyExtractor`] for a project
//! type and runs the find → extract → union pipeline. Each call to
//! [`ExtractionProcessor::process`] does a fresh walk; nothing is cached.

use std::path::Path;

use anyhow::Result;
use enum_dispatch::enum_dispatch;
use rayon::prelude::*;

use super::{
    extractor::{I18nextKeyExtractor, KeyExtractor},
    finder::{FileFinder, SourceFileFinder},
    result::{ExtractionResult, FileOutcome},
};
use crate::config::Config;

pub const I18NEXT_PROJECT_TYPE: &str = "i18next/i18next";

/// Find files with `finder`, extract each in parallel, union the keys.
pub fn run_pipeline<F, E>(finder: &F, extractor: &E, root: &Path) -> ExtractionResult
where
    F: FileFinder + ?Sized,
    E: KeyExtractor + Sync + ?Sized,
{
    let found = finder.scan(root);

    let outcomes: Vec<FileOutcome> = found
        .files
        .par_iter()
        .map(|file| extractor.extract_outcome(file))
        .collect();

    ExtractionResult::from_outcomes(found.files, outcomes, found.skipped)
}

/// Capability shared by every project type.
#[enum_dispatch]
pub trait ExtractionProcessor {
    /// Scan `root` and return every key referenced beneath it.
    fn process(&self, root: &Path) -> ExtractionResult;

    /// Identifier this processor is registered under.
    fn project_type(&self) -> &'static str;
}

/// JavaScript/TypeScript sources using i18next `t(...)` calls.
#[derive(Debug, Clone, Default)]
pub struct I18nextProcessor {
    finder: SourceFileFinder,
    extractor: I18nextKeyExtractor,
}

impl I18nextProcessor {
    pub fn new(finder: SourceFileFinder, extractor: I18nextKeyExtractor) -> Self {
        Self { finder, extractor }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            SourceFileFinder::from_config(config),
            I18nextKeyExtractor::with_call_names(config.call_names.as_slice())?,
        ))
    }
}

impl ExtractionProcessor for I18nextProcessor {
    fn process(&self, root: &Path) -> ExtractionResult {
        run_pipeline(&self.finder, &self.extractor, root)
    }

    fn project_type(&self) -> &'static str {
        I18NEXT_PROJECT_TYPE
    }
}

/// Every supported project type.
#[enum_dispatch(ExtractionProcessor)]
#[derive(Debug, Clone)]
pub enum Processor {
    I18next(I18nextProcessor),
}
