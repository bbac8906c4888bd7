// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Explicit viewer state shared between the core and the presentation layer.
//!
//! [`ViewerState`] owns everything the original kept as widget instance fields:
//! the dataset, the selection cursor, the raw buffer, the dirty flag, and the
//! cached derived body and static highlight tokens. Every user-visible
//! operation is a method that either commits a whole new state or returns a
//! recoverable error leaving the previous state untouched. A wrapping revision
//! counter lets the presentation layer detect change cheaply.

use std::fmt;

use crate::format::{load_dataset, DatasetParseError};
use crate::model::Dataset;
use crate::query::{find_matches, scan_static_tokens, MatchSpan, Token};
use crate::render::render_record;

/// Header line of the derived pane while the raw buffer and the parsed view agree.
pub const DERIVED_HEADER_CLEAN: &str = "Parsed view — read only";
/// Header line of the derived pane once the raw buffer has diverged.
pub const DERIVED_HEADER_DIRTY: &str = "⚠ Parsed view outdated — press r to re-parse.";

#[derive(Debug)]
pub enum ReparseError {
    /// Re-parse requested on an empty or whitespace-only buffer. A warning, not
    /// a state change.
    EmptyInput,
    /// The buffer does not parse; the previous dataset and derived view stay.
    Parse(DatasetParseError),
}

impl fmt::Display for ReparseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("nothing to parse: the raw buffer is empty"),
            Self::Parse(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ReparseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::Parse(source) => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    rev: u64,
    dataset: Dataset,
    selected: usize,
    raw_text: String,
    dirty: bool,
    derived_body: String,
    static_tokens: Vec<Token>,
    query: String,
}

impl ViewerState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cached lexer output for the raw pane. Valid as of the last load or
    /// successful re-parse, by design not per keystroke.
    pub fn static_tokens(&self) -> &[Token] {
        &self.static_tokens
    }

    pub fn record_labels(&self) -> Vec<String> {
        self.dataset.labels()
    }

    /// Parses `raw` and, on success, atomically replaces the whole state:
    /// dataset, buffer, selection (reset to the first record), cached tokens
    /// and derived body. On failure nothing changes.
    pub fn load(&mut self, raw: String) -> Result<(), DatasetParseError> {
        let dataset = load_dataset(&raw)?;
        self.install(dataset, raw, 0);
        Ok(())
    }

    /// Re-parses the current buffer. Success behaves like [`Self::load`] except
    /// the selection is clamped into the new dataset rather than reset.
    pub fn reparse(&mut self) -> Result<(), ReparseError> {
        if self.raw_text.trim().is_empty() {
            return Err(ReparseError::EmptyInput);
        }
        let dataset = load_dataset(&self.raw_text).map_err(ReparseError::Parse)?;
        let selected = self.selected.min(dataset.len().saturating_sub(1));
        let raw = std::mem::take(&mut self.raw_text);
        self.install(dataset, raw, selected);
        Ok(())
    }

    fn install(&mut self, dataset: Dataset, raw: String, selected: usize) {
        self.dataset = dataset;
        self.raw_text = raw;
        self.selected = selected;
        self.dirty = false;
        self.static_tokens = scan_static_tokens(&self.raw_text);
        self.derived_body = self.render_selected();
        self.bump();
    }

    /// The raw pane changed. Marks the parsed view stale; the derived body and
    /// static tokens deliberately keep their last-parsed content.
    pub fn edit_raw(&mut self, text: String) {
        self.raw_text = text;
        self.dirty = true;
        self.bump();
    }

    /// Moves the selection cursor and re-renders the derived body. Out-of-range
    /// indices render an empty body rather than failing.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.derived_body = self.render_selected();
        self.bump();
    }

    pub fn set_query(&mut self, query: &str) {
        let query = query.trim();
        if self.query != query {
            self.query = query.to_owned();
            self.bump();
        }
    }

    /// Full derived pane contents: staleness header, blank line, cached body.
    /// Entirely empty while no dataset is loaded.
    pub fn derived_text(&self) -> String {
        if self.dataset.is_empty() {
            return String::new();
        }
        format!("{}\n\n{}", self.derived_header(), self.derived_body)
    }

    pub fn derived_header(&self) -> &'static str {
        if self.dirty {
            DERIVED_HEADER_DIRTY
        } else {
            DERIVED_HEADER_CLEAN
        }
    }

    pub fn raw_matches(&self) -> Vec<MatchSpan> {
        find_matches(&self.raw_text, &self.query)
    }

    pub fn derived_matches(&self) -> Vec<MatchSpan> {
        find_matches(&self.derived_text(), &self.query)
    }

    fn render_selected(&self) -> String {
        match self.dataset.get(self.selected) {
            Some(record) => render_record(record),
            None => String::new(),
        }
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
