//! Analysis pipeline: category -> case file -> statistics + narrative -> analysis file
//!
//! A run either completes and persists `{category}_analysis.json` or fails
//! without writing anything.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::analysis::AnalysisReport;
use crate::model::case::{CaseField, CaseRecord, absent_fields};
use crate::service::aggregation::aggregate_cases;
use crate::service::schema::{
    ANALYSIS_SUFFIX, DocumentError, case_objects, read_document, write_document,
};
use crate::service::summary::{NarrativeSummarizer, SummaryError};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No analysis saved for category: {0}")]
    NotAnalyzed(String),

    #[error("Case file {path:?}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl AnalysisError {
    fn document(path: &Path, source: DocumentError) -> Self {
        AnalysisError::Document {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Input and output files of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFiles {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Load a case collection for aggregation
///
/// The document must be a non-empty list of objects. Missing fields read as
/// empty strings; a missing decision therefore classifies as unclassified.
pub fn load_cases(path: &Path) -> Result<Vec<CaseRecord>, DocumentError> {
    let document = read_document(path)?;
    let objects = case_objects(&document)?;

    Ok(objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| {
            if absent_fields(object).contains(&CaseField::FinalDecision) {
                tracing::warn!(
                    path = %path.display(),
                    index = index,
                    "Case record has no final decision, treating it as unclassified"
                );
            }
            CaseRecord::from_loose(object)
        })
        .collect())
}

/// Runs the analysis pipeline for configured categories
pub struct AnalysisService {
    data_dir: PathBuf,
    categories: Vec<String>,
    summarizer: Arc<dyn NarrativeSummarizer>,
}

impl AnalysisService {
    pub fn new(
        data_dir: PathBuf,
        categories: Vec<String>,
        summarizer: Arc<dyn NarrativeSummarizer>,
    ) -> Self {
        tracing::info!(
            data_dir = %data_dir.display(),
            categories = categories.len(),
            "Analysis service initialized"
        );

        Self {
            data_dir,
            categories,
            summarizer,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the file pair of a configured category
    pub fn resolve(&self, category: &str) -> Result<CategoryFiles, AnalysisError> {
        if !self.categories.iter().any(|c| c == category) {
            return Err(AnalysisError::UnknownCategory(category.to_string()));
        }

        Ok(CategoryFiles {
            input: self.data_dir.join(format!("{category}.json")),
            output: self.data_dir.join(format!("{category}{ANALYSIS_SUFFIX}")),
        })
    }

    /// Aggregate a category, request the narrative and persist both
    pub async fn run(&self, category: &str) -> Result<AnalysisReport, AnalysisError> {
        let files = self.resolve(category)?;

        tracing::info!(
            category = %category,
            input = %files.input.display(),
            "Starting case analysis"
        );

        let cases =
            load_cases(&files.input).map_err(|e| AnalysisError::document(&files.input, e))?;
        let aggregation = aggregate_cases(&cases);

        let analysis = self
            .summarizer
            .summarize(&aggregation.decision_groups, &aggregation.statistics)
            .await?;

        let report = AnalysisReport {
            statistics: aggregation.statistics,
            analysis,
        };

        write_document(&files.output, &report)
            .map_err(|e| AnalysisError::document(&files.output, e))?;

        tracing::info!(
            category = %category,
            output = %files.output.display(),
            total_cases = report.statistics.total_cases,
            "Analysis saved"
        );

        Ok(report)
    }

    /// Read a previously persisted analysis
    pub fn load_saved(&self, category: &str) -> Result<AnalysisReport, AnalysisError> {
        let files = self.resolve(category)?;

        match read_document(&files.output) {
            Ok(document) => serde_json::from_value(document).map_err(|e| {
                AnalysisError::document(&files.output, DocumentError::InvalidJson(e))
            }),
            Err(DocumentError::Read(e)) if e.kind() == io::ErrorKind::NotFound => {
                Err(AnalysisError::NotAnalyzed(category.to_string()))
            }
            Err(e) => Err(AnalysisError::document(&files.output, e)),
        }
    }
}
