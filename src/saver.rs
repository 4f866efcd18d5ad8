use crate::constant::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a directory: {0}")]
    InvalidDirectory(PathBuf),
}

/// Write a report into `dir` under a timestamped name, never overwriting
pub fn save_report(dir: &Path, report: &str) -> Result<PathBuf, SaveError> {
    save_report_at(dir, report, Local::now())
}

pub fn save_report_at(
    dir: &Path,
    report: &str,
    timestamp: DateTime<Local>,
) -> Result<PathBuf, SaveError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SaveError::InvalidDirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;

    let stem = format!(
        "{}-{}",
        REPORT_FILE_PREFIX,
        timestamp.format(REPORT_TIMESTAMP_FORMAT)
    );

    let mut suffix = 0usize;
    loop {
        let filename = if suffix == 0 {
            format!("{}.txt", stem)
        } else {
            format!("{}-{}.txt", stem, suffix)
        };
        let file_path = dir.join(filename);

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
        {
            Ok(mut file) => {
                file.write_all(report.as_bytes())?;
                info!("Report saved to {:?}", file_path);
                return Ok(file_path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{:?} exists, trying next name", file_path);
                suffix += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
