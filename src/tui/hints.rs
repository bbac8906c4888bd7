// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::InputMode;

/// Footer key hints for the current mode, as `(key, label)` pairs in display
/// order.
pub(crate) fn footer_hints(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Normal => vec![
            ("q", "quit"),
            ("Tab", "focus"),
            ("[ ]", "record"),
            ("g", "pick"),
            ("/", "search"),
            ("n/N", "match"),
            ("e", "edit"),
            ("r", "re-parse"),
            ("o", "reload"),
            ("s", "save"),
            ("?", "help"),
        ],
        InputMode::EditRaw => vec![("Esc", "done"), ("arrows", "move"), ("Enter", "newline")],
        InputMode::Search => {
            vec![("Esc", "clear"), ("Enter", "keep"), ("type", "refine query")]
        }
        InputMode::Picker => {
            vec![("Esc", "close"), ("Enter", "open record"), ("type", "filter")]
        }
        InputMode::SavePath => vec![("Esc", "cancel"), ("Enter", "write file")],
    }
}
