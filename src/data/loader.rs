use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::Question;

use super::Catalog;

const UNTITLED: &str = "Quiz";

/// Errors raised while loading or validating a question catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog must contain at least one question")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateId(u32),

    #[error("question {id}: correct index {index} is outside its {options} options")]
    CorrectIndexOutOfRange { id: u32, index: usize, options: usize },
}

/// Accepted file layouts: a titled document or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Titled {
        #[serde(rename = "quizTitle", alias = "title")]
        title: String,
        questions: Vec<Question>,
    },
    Bare(Vec<Question>),
}

pub fn parse_catalog(json: &str) -> Result<Catalog, LoadError> {
    match serde_json::from_str::<CatalogFile>(json)? {
        CatalogFile::Titled { title, questions } => Catalog::new(title, questions),
        CatalogFile::Bare(questions) => Catalog::new(UNTITLED, questions),
    }
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json_content)?;
    tracing::info!(
        path = %path.display(),
        questions = catalog.len(),
        "loaded question catalog"
    );
    Ok(catalog)
}
