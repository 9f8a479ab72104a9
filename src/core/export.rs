//! CSV export of the processed league.
//!
//! Rows go to a temporary file next to the destination, which is renamed
//! into place only once every row has been written. A failed export leaves
//! any existing file at the destination untouched.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{clublog::ProcessedRow, LeagueError, Result};

/// Write the header and one row per league entry to any writer.
pub fn write_league<W: Write>(league: &[ProcessedRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(ProcessedRow::header())?;
    league
        .iter()
        .try_for_each(|row| writer.write_record(row.record()))?;
    writer.flush()?;
    Ok(())
}

/// Write `league` as CSV to `path`.
///
/// An empty league is an error and creates no file.
pub fn write_csv(league: &[ProcessedRow], path: &Path) -> Result<()> {
    if league.is_empty() {
        return Err(LeagueError::EmptyResult);
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&dir)?;
    write_league(league, file.as_file_mut())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| LeagueError::Io(e.error))?;

    tracing::info!(rows = league.len(), path = %path.display(), "league written");
    Ok(())
}
