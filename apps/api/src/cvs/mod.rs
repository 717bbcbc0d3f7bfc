//! CV store — loads candidate CVs from a directory and preselects the most
//! relevant ones for a vacancy before any agent call is made.
//!
//! Relevance is a plain keyword-overlap count: cheap, deterministic, and good
//! enough to cut the CV set down to the handful the agent actually rates.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::errors::AppError;

/// One CV on file. `name` is the filename stem; `content` is extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDocument {
    pub name: String,
    pub filename: String,
    pub content: String,
}

/// Directory-backed CV store. Reads `.txt` files as UTF-8 and extracts text
/// from `.pdf` files; anything else is ignored. Re-reads on every call so CVs
/// dropped into the directory are picked up without a restart.
#[derive(Debug, Clone)]
pub struct CvStore {
    dir: PathBuf,
}

impl CvStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Loads every parseable CV in the directory. Files that fail to parse
    /// are logged and skipped rather than failing the whole load.
    pub fn load_all(&self) -> Result<Vec<CvDocument>, AppError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to read CV directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let mut cvs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("Failed to read CV directory entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            match parse_cv(&path) {
                Ok(Some(cv)) => cvs.push(cv),
                Ok(None) => {}
                Err(e) => error!("Failed to parse CV {}: {e}", path.display()),
            }
        }

        // Deterministic order regardless of directory iteration order.
        cvs.sort_by(|a, b| a.filename.cmp(&b.filename));
        debug!("Loaded {} CVs from {}", cvs.len(), self.dir.display());
        Ok(cvs)
    }

    /// Returns the `limit` CVs most relevant to the vacancy description,
    /// best match first.
    pub fn find_top_candidates(
        &self,
        vacancy_description: &str,
        limit: usize,
    ) -> Result<Vec<CvDocument>, AppError> {
        let keywords = extract_keywords(vacancy_description);
        let mut cvs = self.load_all()?;

        cvs.sort_by_key(|cv| std::cmp::Reverse(match_score(cv, &keywords)));
        cvs.truncate(limit);
        Ok(cvs)
    }
}

fn parse_cv(path: &Path) -> anyhow::Result<Option<CvDocument>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let content = match extension.as_deref() {
        Some("txt") => std::fs::read_to_string(path)?,
        Some("pdf") => pdf_extract::extract_text(path)?,
        _ => return Ok(None),
    };

    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("Unknown")
        .to_string();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_string();

    Ok(Some(CvDocument {
        name,
        filename,
        content,
    }))
}

/// Lowercased word tokens of the vacancy description.
fn extract_keywords(vacancy_description: &str) -> Vec<String> {
    vacancy_description
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of vacancy keywords that occur in the CV content.
fn match_score(cv: &CvDocument, keywords: &[String]) -> usize {
    let content = cv.content.to_lowercase();
    keywords.iter().filter(|k| content.contains(k.as_str())).count()
}
