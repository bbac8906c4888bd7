// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File persistence: open reads the whole export into memory, save writes the
//! raw buffer back verbatim. Nothing else is persisted.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Reads a whole export file as UTF-8 text.
pub fn read_export(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

/// Writes the raw buffer verbatim to `path`.
pub fn write_export(path: &Path, text: &str) -> Result<(), StoreError> {
    fs::write(path, text).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::{read_export, write_export, StoreError};

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("iris-store-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn write_then_read_round_trips() {
        let path = scratch_path("roundtrip.json");
        write_export(&path, "[{\"digest\":{}}]").expect("write");
        let text = read_export(&path).expect("read");
        assert_eq!(text, "[{\"digest\":{}}]");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn read_missing_file_reports_the_path() {
        let path = scratch_path("does-not-exist.json");
        let err = read_export(&path).expect_err("must fail");
        let StoreError::Io { path: reported, .. } = err;
        assert_eq!(reported, path);
    }
}
