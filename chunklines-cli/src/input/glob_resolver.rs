//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Files are returned in argument order; within one pattern, in glob order.
/// A file matched by several patterns is processed once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| CliError::BadPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;

        for path_result in paths {
            let path = match path_result {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("skipping unreadable match for {pattern}: {e}");
                    continue;
                }
            };

            if path.is_file() && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.to_vec()).into());
    }

    log::debug!("resolved {} file(s)", files.len());
    Ok(files)
}
