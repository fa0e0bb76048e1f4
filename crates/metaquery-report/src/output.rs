//! Artifact writing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::audit::AuditRecord;
use crate::error::{ReportError, Result};

pub const AUDIT_FILE_NAME: &str = "audit.json";
pub const EXPLAIN_FILE_NAME: &str = "explain.txt";
pub const QUERY_FILE_NAME: &str = "query.sql";

/// Paths of the artifacts written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub audit: PathBuf,
    pub explanation: PathBuf,
    pub query: Option<PathBuf>,
}

/// Write `audit.json` and `explain.txt`, plus `query.sql` when SQL is given.
///
/// A `query.sql` left over from an earlier run is removed when no SQL is
/// given, so the directory never pairs a blocked audit with a stale query.
pub fn write_artifacts(
    output_dir: &Path,
    audit: &AuditRecord,
    explanation: &str,
    sql: Option<&str>,
) -> Result<ArtifactPaths> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::io(output_dir, source))?;

    let audit_path = output_dir.join(AUDIT_FILE_NAME);
    write_file(&audit_path, &audit.to_json()?)?;

    let explanation_path = output_dir.join(EXPLAIN_FILE_NAME);
    write_file(&explanation_path, explanation)?;

    let query_path = output_dir.join(QUERY_FILE_NAME);
    let query = match sql {
        Some(sql) => {
            write_file(&query_path, sql)?;
            Some(query_path)
        }
        None => {
            if query_path.is_file() {
                fs::remove_file(&query_path)
                    .map_err(|source| ReportError::io(&query_path, source))?;
                debug!(path = %query_path.display(), "removed stale query");
            }
            None
        }
    };

    info!(
        output_dir = %output_dir.display(),
        query_written = query.is_some(),
        "artifacts written"
    );
    Ok(ArtifactPaths {
        audit: audit_path,
        explanation: explanation_path,
        query,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ReportError::io(path, source))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
