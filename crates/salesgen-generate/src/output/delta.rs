//! Delta Lake table output.
//!
//! A table is written into a hidden staging directory next to its
//! destination and only renamed into place once the version 0 commit has
//! landed. A crash mid-write therefore leaves the previous table (or no
//! table) at the destination, never a half-written one.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use deltalake::DeltaOps;
use deltalake::arrow::record_batch::RecordBatch;
use deltalake::protocol::SaveMode;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::GenerationError;

const DELTA_LOG_DIR: &str = "_delta_log";

/// State of a committed table as recorded in its transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCommit {
    pub path: PathBuf,
    /// Latest committed version.
    pub version: i64,
    /// Every version found in the log, ascending.
    pub versions: Vec<i64>,
    /// Live data files after replaying the log.
    pub files: Vec<String>,
    /// Rows across live files, from add-action statistics.
    pub rows: u64,
    /// Whether a table previously existed at `path` and was replaced.
    pub replaced_existing: bool,
}

/// Write `batch` as a fresh Delta table at `dest`, replacing any table
/// already there.
///
/// The new table always starts at version 0.
pub async fn write_table(dest: &Path, batch: RecordBatch) -> Result<TableCommit, GenerationError> {
    let name = table_name(dest)?;
    let parent = parent_dir(dest);
    fs::create_dir_all(&parent)?;

    let staging = parent.join(format!(".{name}.staging-{}", Uuid::new_v4()));
    fs::create_dir_all(&staging)?;
    info!(table = %name, rows = batch.num_rows(), path = %staging.display(), "staging table");

    if let Err(err) = stage_table(&staging, &name, batch).await {
        discard(&staging);
        return Err(err);
    }

    let replaced_existing = swap_into_place(&staging, dest, &name)?;
    let mut commit = inspect_table(dest)?;
    commit.replaced_existing = replaced_existing;
    info!(
        table = %name,
        version = commit.version,
        files = commit.files.len(),
        rows = commit.rows,
        replaced_existing,
        "table committed"
    );
    Ok(commit)
}

async fn stage_table(staging: &Path, name: &str, batch: RecordBatch) -> Result<(), GenerationError> {
    let uri = staging.canonicalize()?;
    let ops = DeltaOps::try_from_uri(uri.to_string_lossy()).await?;
    ops.write(vec![batch])
        .with_save_mode(SaveMode::ErrorIfExists)
        .with_table_name(name)
        .await?;
    Ok(())
}

/// Move the staged table onto `dest`. Returns whether a prior table was
/// replaced.
fn swap_into_place(staging: &Path, dest: &Path, name: &str) -> Result<bool, GenerationError> {
    let retired = if dest.exists() {
        let retired = parent_dir(dest).join(format!(".{name}.retired-{}", Uuid::new_v4()));
        fs::rename(dest, &retired)?;
        Some(retired)
    } else {
        None
    };

    if let Err(err) = fs::rename(staging, dest) {
        if let Some(retired) = &retired
            && let Err(restore) = fs::rename(retired, dest)
        {
            warn!(table = %name, error = %restore, "failed to restore previous table");
        }
        discard(staging);
        return Err(err.into());
    }

    match retired {
        Some(retired) => {
            info!(table = %name, path = %dest.display(), "removed existing table");
            discard(&retired);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn discard(path: &Path) {
    if let Err(err) = fs::remove_dir_all(path) {
        warn!(path = %path.display(), error = %err, "failed to remove directory");
    }
}

/// Read the JSON commits under `<path>/_delta_log` and summarize the table.
///
/// Checkpoints are not consulted; every commit from version 0 is replayed.
pub fn inspect_table(path: &Path) -> Result<TableCommit, GenerationError> {
    let log_dir = path.join(DELTA_LOG_DIR);
    if !log_dir.is_dir() {
        return Err(GenerationError::InvalidTable(format!(
            "{} has no {DELTA_LOG_DIR} directory",
            path.display()
        )));
    }

    let mut versions = Vec::new();
    for entry in fs::read_dir(&log_dir)? {
        let file_name = entry?.file_name();
        if let Some(version) = commit_version(&file_name.to_string_lossy()) {
            versions.push(version);
        }
    }
    versions.sort_unstable();

    let Some(&version) = versions.last() else {
        return Err(GenerationError::InvalidTable(format!(
            "{} has no committed versions",
            path.display()
        )));
    };

    let mut live: BTreeSet<String> = BTreeSet::new();
    let mut rows_by_file: Vec<(String, u64)> = Vec::new();
    for v in &versions {
        let content = fs::read_to_string(log_dir.join(commit_file_name(*v)))?;
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            let action: LogAction = serde_json::from_str(line)?;
            if let Some(add) = action.add {
                let rows = match add.stats.as_deref() {
                    Some(stats) => serde_json::from_str::<FileStats>(stats)?.num_records,
                    None => 0,
                };
                live.insert(add.path.clone());
                rows_by_file.push((add.path, rows));
            }
            if let Some(remove) = action.remove {
                live.remove(&remove.path);
            }
        }
    }

    let rows = rows_by_file
        .iter()
        .filter(|(file, _)| live.contains(file))
        .map(|(_, rows)| rows)
        .sum();

    Ok(TableCommit {
        path: path.to_path_buf(),
        version,
        versions,
        files: live.into_iter().collect(),
        rows,
        replaced_existing: false,
    })
}

#[derive(Debug, Deserialize)]
struct LogAction {
    add: Option<AddAction>,
    remove: Option<RemoveAction>,
}

#[derive(Debug, Deserialize)]
struct AddAction {
    path: String,
    stats: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoveAction {
    path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileStats {
    num_records: u64,
}

fn commit_version(file_name: &str) -> Option<i64> {
    let stem = file_name.strip_suffix(".json")?;
    if stem.len() != 20 || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

fn commit_file_name(version: i64) -> String {
    format!("{version:020}.json")
}

fn table_name(dest: &Path) -> Result<String, GenerationError> {
    dest.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            GenerationError::InvalidTable(format!("invalid table path {}", dest.display()))
        })
}

fn parent_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
