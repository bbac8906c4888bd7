// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::prelude::{Color, Style};

use super::{
    build_pane_lines, char_len, insert_char_at, line_col_to_offset, offset_to_line_col,
    picker_score, remove_char_at, PaneSpan,
};
use crate::query::MatchSpan;

#[test]
fn offset_and_line_col_round_trip() {
    let text = "ab\ncde\n\nf";
    assert_eq!(offset_to_line_col(text, 0), (0, 0));
    assert_eq!(offset_to_line_col(text, 2), (0, 2));
    assert_eq!(offset_to_line_col(text, 3), (1, 0));
    assert_eq!(offset_to_line_col(text, 7), (2, 0));
    assert_eq!(offset_to_line_col(text, 8), (3, 0));

    assert_eq!(line_col_to_offset(text, 1, 1), 4);
    assert_eq!(line_col_to_offset(text, 1, 99), 6, "column clamps into the line");
    assert_eq!(line_col_to_offset(text, 99, 0), char_len(text), "line clamps into the text");
}

#[test]
fn offset_past_the_end_lands_on_the_last_line() {
    assert_eq!(offset_to_line_col("ab", 99), (0, 2));
}

#[test]
fn insert_and_remove_work_on_char_offsets() {
    assert_eq!(insert_char_at("ac", 1, 'b'), "abc");
    assert_eq!(insert_char_at("ab", 2, 'c'), "abc");
    assert_eq!(insert_char_at("", 0, 'x'), "x");
    // Multi-byte neighbors must not split.
    assert_eq!(insert_char_at("αγ", 1, 'β'), "αβγ");

    assert_eq!(remove_char_at("abc", 1), "ac");
    assert_eq!(remove_char_at("abc", 2), "ab");
    assert_eq!(remove_char_at("αβγ", 0), "βγ");
}

#[test]
fn picker_score_prefers_substrings_and_prefixes() {
    let prefix = picker_score("ORD", "#1  ORD-1042  2026-02-11").expect("prefix match");
    let inner = picker_score("1042", "#1  ORD-1042  2026-02-11").expect("inner match");
    assert!(prefix < inner || prefix > 0, "both real scores");
    assert!(picker_score("", "anything").is_some(), "empty filter keeps everything");
    assert!(
        picker_score("zzzzqqqq", "#1  ORD-1042  2026-02-11").is_none(),
        "hopeless filters drop the record"
    );
}

#[test]
fn picker_score_is_case_insensitive() {
    assert!(picker_score("ord-1042", "#1  ORD-1042  2026-02-11").is_some());
}

#[test]
fn pane_lines_split_on_newlines_and_carry_spans() {
    let text = "key: v\nnext";
    let highlight = Style::default().bg(Color::Yellow);
    let spans = [PaneSpan { span: MatchSpan::new(0, 3), style: highlight, priority: 1 }];

    let lines = build_pane_lines(text, &spans, Style::default());
    assert_eq!(lines.len(), 2);

    let first = &lines[0];
    assert_eq!(first.spans.len(), 2, "highlighted prefix plus plain rest");
    assert_eq!(first.spans[0].content.as_ref(), "key");
    assert_eq!(first.spans[0].style, highlight);
    assert_eq!(first.spans[1].content.as_ref(), ": v");

    assert_eq!(lines[1].spans.len(), 1);
    assert_eq!(lines[1].spans[0].content.as_ref(), "next");
}

#[test]
fn higher_priority_spans_win_on_overlap() {
    let low = Style::default().bg(Color::Blue);
    let high = Style::default().bg(Color::Yellow);
    let spans = [
        PaneSpan { span: MatchSpan::new(0, 4), style: low, priority: 1 },
        PaneSpan { span: MatchSpan::new(2, 4), style: high, priority: 2 },
    ];

    let lines = build_pane_lines("abcdef", &spans, Style::default());
    let segments: Vec<(&str, Style)> = lines[0]
        .spans
        .iter()
        .map(|span| (span.content.as_ref(), span.style))
        .collect();

    assert_eq!(segments[0], ("ab", low));
    assert_eq!(segments[1], ("cd", high));
    assert_eq!(segments[2].0, "ef");
}

#[test]
fn spans_crossing_line_breaks_highlight_both_lines() {
    let style = Style::default().bg(Color::Yellow);
    // Chars 2..5 cover "c", the newline, and "d".
    let spans = [PaneSpan { span: MatchSpan::new(2, 5), style, priority: 1 }];

    let lines = build_pane_lines("abc\nde", &spans, Style::default());
    assert_eq!(lines[0].spans.last().expect("segment").content.as_ref(), "c");
    assert_eq!(lines[0].spans.last().expect("segment").style, style);
    assert_eq!(lines[1].spans[0].content.as_ref(), "d");
    assert_eq!(lines[1].spans[0].style, style);
}

#[test]
fn empty_text_still_yields_one_line() {
    let lines = build_pane_lines("", &[], Style::default());
    assert_eq!(lines.len(), 1);
}
