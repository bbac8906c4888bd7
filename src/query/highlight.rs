// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static syntax-highlight lexer for the raw pane.
//!
//! One left-to-right pass over the raw export text produces `(span, category)`
//! tokens for JSON keys, JSON literals, and the XML attribute/text tokens that
//! appear inside the JSON-escaped `xml` payload. The scan is recomputed on load
//! and on successful re-parse only, never per keystroke, and is bounded by
//! per-category caps plus an overall cap.

use super::MatchSpan;

pub const JSON_KEY_TOKEN_CAP: usize = 1500;
pub const JSON_LITERAL_TOKEN_CAP: usize = 1500;
pub const XML_NAME_TOKEN_CAP: usize = 1500;
/// Cap on `nil="…"` occurrences; each occurrence yields two tokens.
pub const XML_NIL_TOKEN_CAP: usize = 1200;
pub const XML_TEXT_TOKEN_CAP: usize = 1200;
/// Overall bound across every category; scanning stops once reached.
pub const STATIC_TOKEN_CAP: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Content of a JSON object key (the chars between the quotes).
    JsonKey,
    /// `true`/`false`/`null` in JSON value position.
    JsonLiteral,
    /// Value of a `name=\"…\"` attribute inside the escaped XML payload.
    XmlNameAttr,
    /// The `nil` keyword of a `nil=\"…\"` attribute.
    XmlNilAttr,
    /// The `true`/`false` value of a `nil=\"…\"` attribute.
    XmlNilValue,
    /// `true`/`false`/`null` as XML element text.
    XmlTextLiteral,
}

/// One highlight token: a char-offset span plus what kind of thing it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub span: MatchSpan,
}

/// Scans the raw text. Tokens come back in document order.
pub fn scan_static_tokens(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut scanner = Scanner::new(&chars);

    let mut at = 0;
    while at < chars.len() && !scanner.full() {
        at = match chars[at] {
            '"' => scanner.scan_json_key(at),
            ':' => scanner.scan_json_literal(at),
            'n' => scanner.scan_xml_attr(at),
            '>' => scanner.scan_xml_text_literal(at),
            _ => at + 1,
        };
    }

    scanner.tokens
}

struct Scanner<'a> {
    chars: &'a [char],
    tokens: Vec<Token>,
    json_keys: usize,
    json_literals: usize,
    name_attrs: usize,
    nil_attrs: usize,
    text_literals: usize,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            tokens: Vec::new(),
            json_keys: 0,
            json_literals: 0,
            name_attrs: 0,
            nil_attrs: 0,
            text_literals: 0,
        }
    }

    fn full(&self) -> bool {
        self.tokens.len() >= STATIC_TOKEN_CAP
    }

    fn push(&mut self, category: TokenCategory, start: usize, end: usize) {
        if end > start && !self.full() {
            self.tokens.push(Token { category, span: MatchSpan::new(start, end) });
        }
    }

    /// `"key"` followed by optional whitespace and `:`. Non-key strings are NOT
    /// skipped as a whole: the XML payload lives inside a JSON string value, so
    /// its tokens must remain scannable.
    fn scan_json_key(&mut self, at: usize) -> usize {
        let mut close = at + 1;
        loop {
            match self.chars.get(close) {
                None => return at + 1,
                Some('\\') => close += 2,
                Some('"') => break,
                Some(_) => close += 1,
            }
        }

        let mut after = close + 1;
        while self.chars.get(after).is_some_and(|ch| ch.is_whitespace()) {
            after += 1;
        }
        if self.chars.get(after) != Some(&':') {
            return at + 1;
        }

        if self.json_keys < JSON_KEY_TOKEN_CAP {
            self.json_keys += 1;
            self.push(TokenCategory::JsonKey, at + 1, close);
        }
        close + 1
    }

    /// `:` followed by optional whitespace and a bare `true`/`false`/`null`.
    fn scan_json_literal(&mut self, at: usize) -> usize {
        let mut start = at + 1;
        while self.chars.get(start).is_some_and(|ch| ch.is_whitespace()) {
            start += 1;
        }
        let Some(end) = self.literal_word_end(start) else {
            return at + 1;
        };

        if self.json_literals < JSON_LITERAL_TOKEN_CAP {
            self.json_literals += 1;
            self.push(TokenCategory::JsonLiteral, start, end);
        }
        end
    }

    /// `name=\"…\"` or `nil=\"true|false\"` inside the escaped XML payload.
    fn scan_xml_attr(&mut self, at: usize) -> usize {
        if self.matches_at(at, &['n', 'a', 'm', 'e', '=', '\\', '"']) {
            let start = at + 7;
            let mut end = start;
            while end < self.chars.len() && self.chars[end] != '\\' && self.chars[end] != '"' {
                end += 1;
            }
            if end > start
                && self.chars.get(end) == Some(&'\\')
                && self.chars.get(end + 1) == Some(&'"')
            {
                if self.name_attrs < XML_NAME_TOKEN_CAP {
                    self.name_attrs += 1;
                    self.push(TokenCategory::XmlNameAttr, start, end);
                }
                return end + 2;
            }
            return at + 1;
        }

        if self.matches_at(at, &['n', 'i', 'l', '=', '\\', '"'])
            && (at == 0 || !is_word_char(self.chars[at - 1]))
        {
            let start = at + 6;
            for word in [&['t', 'r', 'u', 'e'][..], &['f', 'a', 'l', 's', 'e'][..]] {
                if self.matches_at(start, word)
                    && self.matches_at(start + word.len(), &['\\', '"'])
                {
                    if self.nil_attrs < XML_NIL_TOKEN_CAP {
                        self.nil_attrs += 1;
                        self.push(TokenCategory::XmlNilAttr, at, at + 3);
                        self.push(TokenCategory::XmlNilValue, start, start + word.len());
                    }
                    return start + word.len() + 2;
                }
            }
        }

        at + 1
    }

    /// `>` whitespace? `true|false|null` whitespace? `<`: literals in XML text.
    fn scan_xml_text_literal(&mut self, at: usize) -> usize {
        let mut start = at + 1;
        while self.chars.get(start).is_some_and(|ch| ch.is_whitespace()) {
            start += 1;
        }
        let Some(end) = self.literal_word_end(start) else {
            return at + 1;
        };

        let mut after = end;
        while self.chars.get(after).is_some_and(|ch| ch.is_whitespace()) {
            after += 1;
        }
        if self.chars.get(after) != Some(&'<') {
            return at + 1;
        }

        if self.text_literals < XML_TEXT_TOKEN_CAP {
            self.text_literals += 1;
            self.push(TokenCategory::XmlTextLiteral, start, end);
        }
        end
    }

    /// End offset of a `true`/`false`/`null` word starting at `start`, provided
    /// the word ends at a boundary.
    fn literal_word_end(&self, start: usize) -> Option<usize> {
        for word in [&['t', 'r', 'u', 'e'][..], &['f', 'a', 'l', 's', 'e'][..], &['n', 'u', 'l', 'l'][..]]
        {
            if self.matches_at(start, word) {
                let end = start + word.len();
                let at_boundary = match self.chars.get(end) {
                    Some(next) => !is_word_char(*next),
                    None => true,
                };
                if at_boundary {
                    return Some(end);
                }
            }
        }
        None
    }

    fn matches_at(&self, at: usize, expected: &[char]) -> bool {
        self.chars.len() >= at + expected.len()
            && &self.chars[at..at + expected.len()] == expected
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
