// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Colors and styles for the panes and highlight categories.

use ratatui::prelude::{Color, Modifier, Style};

use crate::query::TokenCategory;

/// Search hits: warm yellow, dark text, both panes.
pub(crate) const SEARCH_BG: Color = Color::Rgb(255, 235, 120);
/// Key-ish tokens: JSON keys, XML name/nil attribute keywords.
pub(crate) const KEY_BG: Color = Color::Rgb(190, 235, 255);
/// Value-ish tokens: literals in JSON and XML positions.
pub(crate) const VALUE_BG: Color = Color::Rgb(210, 245, 210);
/// Stale derived-view header.
pub(crate) const DIRTY_BG: Color = Color::Rgb(255, 210, 210);

pub(crate) const FOCUS_BORDER: Color = Color::LightGreen;
pub(crate) const IDLE_BORDER: Color = Color::DarkGray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;

pub(crate) fn search_style() -> Style {
    Style::default().bg(SEARCH_BG).fg(Color::Black)
}

pub(crate) fn dirty_header_style() -> Style {
    Style::default().bg(DIRTY_BG).fg(Color::Black).add_modifier(Modifier::BOLD)
}

pub(crate) fn token_style(category: TokenCategory) -> Style {
    let bg = match category {
        TokenCategory::JsonKey | TokenCategory::XmlNameAttr | TokenCategory::XmlNilAttr => KEY_BG,
        TokenCategory::JsonLiteral
        | TokenCategory::XmlNilValue
        | TokenCategory::XmlTextLiteral => VALUE_BG,
    };
    Style::default().bg(bg).fg(Color::Black)
}

#[cfg(test)]
mod tests {
    use super::{search_style, token_style, KEY_BG, VALUE_BG};
    use crate::query::TokenCategory;

    #[test]
    fn key_and_value_categories_map_to_their_palettes() {
        assert_eq!(token_style(TokenCategory::JsonKey).bg, Some(KEY_BG));
        assert_eq!(token_style(TokenCategory::XmlNilAttr).bg, Some(KEY_BG));
        assert_eq!(token_style(TokenCategory::JsonLiteral).bg, Some(VALUE_BG));
        assert_eq!(token_style(TokenCategory::XmlTextLiteral).bg, Some(VALUE_BG));
    }

    #[test]
    fn search_style_keeps_text_readable() {
        assert_eq!(search_style().fg, Some(ratatui::prelude::Color::Black));
    }
}
