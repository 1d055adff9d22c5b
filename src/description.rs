// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turning card rules text into render segments.
//!
//! Descriptions mix prose with two kinds of markup:
//!
//! - Bracketed directives. `[REACTION]` or `[SHIELD 2]` become keyword tags
//!   when the leading word is a known keyword; anything else, like
//!   `[EXHAUST]`, is taken as the name of an icon.
//!
//! - Inline tokens in the prose. `MIGHT` and the rune names become icons, a
//!   number directly before a rune name is its magnitude, and `AND` joins two
//!   rune costs without being printed.

pub mod keyword;
pub mod lexer;

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::description::keyword::Keyword;
use crate::description::keyword::KeywordStyle;
use crate::description::lexer::Token;
use crate::description::lexer::lex;

/// Tokens rendered as a bare icon.
const STATS: [&str; 1] = ["MIGHT"];

/// Rune tokens. The ones without an underscore take the preceding number as
/// part of their icon name.
const NUMERICS: [&str; 8] = [
    "RUNES",
    "RUNE",
    "RUNE_BODY",
    "RUNE_VIGOR",
    "RUNE_CALM",
    "RUNE_MIND",
    "RUNE_CHAOS",
    "RUNE_FURY",
];

/// Repeated once per unit of the preceding number.
const RAINBOW: &str = "RUNE_RAINBOW";

/// Upper limit on `RUNE_RAINBOW` repeats.
pub const MAX_REPEAT: u32 = 20;

/// Joins rune costs in prose; never printed.
const CONJUNCTION: &str = "AND";

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    PlainText { text: String },
    Icon { name: String, repeat: u32 },
    KeywordTag { label: String, style: KeywordStyle },
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::PlainText { text: text.into() }
    }

    pub fn icon(name: impl Into<String>, repeat: u32) -> Self {
        Segment::Icon {
            name: name.into(),
            repeat,
        }
    }

    pub fn keyword(label: impl Into<String>, style: KeywordStyle) -> Self {
        Segment::KeywordTag {
            label: label.into(),
            style,
        }
    }
}

/// The image an icon name refers to.
pub fn icon_image(name: &str) -> String {
    name.to_lowercase()
}

/// A plain-text rendering: icons as `:name:` (once per repeat), keyword tags
/// in brackets.
impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::PlainText { text } => write!(f, "{text}"),
            Segment::Icon { name, repeat } => {
                for _ in 0..*repeat {
                    write!(f, ":{}:", icon_image(name))?;
                }
                Ok(())
            }
            Segment::KeywordTag { label, .. } => write!(f, "[{label}]"),
        }
    }
}

/// Collects segments, merging adjacent plain text.
struct Segments {
    inner: Vec<Segment>,
}

impl Segments {
    fn new() -> Self {
        Self { inner: Vec::new() }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::PlainText { text: last }) = self.inner.last_mut() {
            last.push_str(text);
        } else {
            self.inner.push(Segment::text(text));
        }
    }

    fn push(&mut self, segment: Segment) {
        self.inner.push(segment);
    }
}

/// Splits a description into plain text, icons, and keyword tags.
pub fn tokenize(description: &str) -> Vec<Segment> {
    let tokens = lex(description);
    let mut segments = Segments::new();
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        if let Token::Directive { interior, .. } = token {
            prose(&tokens[start..index], &mut segments);
            directive(interior, &mut segments);
            start = index + 1;
        }
    }
    prose(&tokens[start..], &mut segments);
    segments.inner
}

/// A keyword head becomes a tag labelled with the whole interior. Any other
/// head, including an empty one, names an icon.
fn directive(interior: &str, segments: &mut Segments) {
    let head_len = interior
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    let head = &interior[..head_len];
    match Keyword::from_head(head) {
        Some(keyword) => segments.push(Segment::keyword(interior, keyword.style())),
        None => segments.push(Segment::icon(head, 1)),
    }
}

/// Handles a run of prose between directives. Words and separators alternate
/// in a run, so the neighbouring word is always two tokens away.
fn prose(run: &[Token<'_>], segments: &mut Segments) {
    for (index, token) in run.iter().enumerate() {
        let ahead = run.get(index + 2).and_then(|t| t.word());
        let behind = index.checked_sub(2).and_then(|i| run.get(i));
        match *token {
            Token::Number { text, .. } => {
                let is_magnitude = ahead.is_some_and(|w| NUMERICS.contains(&w) || w == RAINBOW);
                if !is_magnitude {
                    segments.push_text(text);
                }
            }
            Token::Word(CONJUNCTION) => {}
            Token::Word(RAINBOW) => match behind {
                Some(Token::Number { value, .. }) if *value > 0 => {
                    let repeat = (*value).min(MAX_REPEAT);
                    if repeat < *value {
                        log::warn!("Clamping {RAINBOW} count {value} to {MAX_REPEAT}.");
                    }
                    segments.push(Segment::icon(RAINBOW, repeat));
                }
                _ => log::debug!("Dropping {RAINBOW} without a count."),
            },
            Token::Word(word) if STATS.contains(&word) => {
                segments.push(Segment::icon(word, 1));
            }
            Token::Word(word) if NUMERICS.contains(&word) => {
                let name = match behind {
                    Some(Token::Number { text, .. }) if !word.contains('_') => {
                        format!("{text}{word}")
                    }
                    _ => word.to_string(),
                };
                segments.push(Segment::icon(name, 1));
            }
            other => segments.push_text(other.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_plain_text_round_trip() {
        let inputs = [
            "Draw a card.",
            "  leading and trailing  ",
            "Deal 2 damage to a unit, then 3 more.",
            "Punctuation!? (parens) 'quotes' -- dashes; colons: ok",
            "Unmatched [ bracket",
            "An empty [] pair",
            "Ünïcödé prose",
            "Lower-case rune and might are not tokens",
        ];
        for input in inputs {
            let segments = tokenize(input);
            assert_eq!(segments, vec![Segment::text(input)], "{input}");
            assert_eq!(joined(&segments), input);
        }
    }

    #[test]
    fn test_keyword_tag() {
        assert_eq!(
            tokenize("Deal 2 damage. [REACTION] Draw a card."),
            vec![
                Segment::text("Deal 2 damage. "),
                Segment::keyword("REACTION", KeywordStyle::Group1),
                Segment::text(" Draw a card."),
            ]
        );
    }

    #[test]
    fn test_keyword_label_keeps_trailing_text() {
        assert_eq!(
            tokenize("[SHIELD 2]"),
            vec![Segment::keyword("SHIELD 2", KeywordStyle::Primary)]
        );
        assert_eq!(
            tokenize("[ACTION: draw a card]"),
            vec![Segment::keyword("ACTION: draw a card", KeywordStyle::Group1)]
        );
    }

    #[test]
    fn test_unknown_directive_is_icon() {
        assert_eq!(
            tokenize("[EXHAUST] me."),
            vec![Segment::icon("EXHAUST", 1), Segment::text(" me.")]
        );
        // Only the head token names the icon.
        assert_eq!(
            tokenize("[tap: twice]"),
            vec![Segment::icon("tap", 1)]
        );
        // Keywords are case-sensitive.
        assert_eq!(tokenize("[Tank]"), vec![Segment::icon("Tank", 1)]);
    }

    #[test]
    fn test_directive_without_head_is_empty_icon() {
        assert_eq!(
            tokenize("a [ b ] c"),
            vec![
                Segment::text("a "),
                Segment::icon("", 1),
                Segment::text(" c"),
            ]
        );
    }

    #[test]
    fn test_underscore_rune_has_no_prefix() {
        assert_eq!(
            tokenize("Pay 3 RUNE_BODY to draw"),
            vec![
                Segment::text("Pay  "),
                Segment::icon("RUNE_BODY", 1),
                Segment::text(" to draw"),
            ]
        );
    }

    #[test]
    fn test_plain_rune_takes_prefix() {
        assert_eq!(
            tokenize("Pay 3 RUNES to draw"),
            vec![
                Segment::text("Pay  "),
                Segment::icon("3RUNES", 1),
                Segment::text(" to draw"),
            ]
        );
        assert_eq!(icon_image("3RUNES"), "3runes");
    }

    #[test]
    fn test_rune_without_number() {
        assert_eq!(
            tokenize("Pay RUNE."),
            vec![
                Segment::text("Pay "),
                Segment::icon("RUNE", 1),
                Segment::text("."),
            ]
        );
    }

    #[test]
    fn test_might() {
        assert_eq!(
            tokenize("+2 MIGHT"),
            vec![
                Segment::text("+2 "),
                Segment::icon("MIGHT", 1),
            ]
        );
    }

    #[test]
    fn test_and_is_dropped() {
        assert_eq!(
            tokenize("1 RUNE_MIND AND 1 RUNE_CHAOS"),
            vec![
                Segment::text(" "),
                Segment::icon("RUNE_MIND", 1),
                Segment::text("   "),
                Segment::icon("RUNE_CHAOS", 1),
            ]
        );
    }

    #[test]
    fn test_rainbow_repeats() {
        assert_eq!(
            tokenize("Spend 2 RUNE_RAINBOW now"),
            vec![
                Segment::text("Spend  "),
                Segment::icon("RUNE_RAINBOW", 2),
                Segment::text(" now"),
            ]
        );
    }

    #[test]
    fn test_rainbow_without_count_is_dropped() {
        assert_eq!(
            tokenize("Spend RUNE_RAINBOW now"),
            vec![Segment::text("Spend  now")]
        );
        assert_eq!(tokenize("RUNE_RAINBOW"), vec![]);
        // Zero repeats is no icon at all.
        assert_eq!(tokenize("0 RUNE_RAINBOW"), vec![Segment::text(" ")]);
    }

    #[test]
    fn test_oversized_number_is_a_magnitude() {
        assert_eq!(
            tokenize("Pay 4294967296 RUNES"),
            vec![Segment::text("Pay  "), Segment::icon("4294967296RUNES", 1)]
        );
    }

    #[test]
    fn test_rainbow_repeats_are_capped() {
        assert_eq!(
            tokenize("4000000000 RUNE_RAINBOW"),
            vec![Segment::text(" "), Segment::icon("RUNE_RAINBOW", MAX_REPEAT)]
        );
        assert_eq!(
            tokenize("99999999999 RUNE_RAINBOW"),
            vec![Segment::text(" "), Segment::icon("RUNE_RAINBOW", MAX_REPEAT)]
        );
    }

    #[test]
    fn test_number_before_other_word_is_kept() {
        assert_eq!(
            tokenize("Draw 2 cards"),
            vec![Segment::text("Draw 2 cards")]
        );
    }

    #[test]
    fn test_lookahead_does_not_cross_directives() {
        assert_eq!(
            tokenize("Pay 3 [RUNES]"),
            vec![Segment::text("Pay 3 "), Segment::icon("RUNES", 1)]
        );
    }

    #[test]
    fn test_numbers_inside_words_are_not_magnitudes() {
        assert_eq!(
            tokenize("x3 RUNES"),
            vec![Segment::text("x3 "), Segment::icon("RUNES", 1)]
        );
    }

    #[test]
    fn test_full_description() {
        let segments =
            tokenize("[ACCELERATE] (You may pay 1 RUNE_FURY as an additional cost.)");
        assert_eq!(
            segments,
            vec![
                Segment::keyword("ACCELERATE", KeywordStyle::Group1),
                Segment::text(" (You may pay  "),
                Segment::icon("RUNE_FURY", 1),
                Segment::text(" as an additional cost.)"),
            ]
        );
        assert_eq!(
            joined(&segments),
            "[ACCELERATE] (You may pay  :rune_fury: as an additional cost.)"
        );
    }

    #[test]
    fn test_display_repeats_icons() {
        assert_eq!(
            Segment::icon("RUNE_RAINBOW", 3).to_string(),
            ":rune_rainbow::rune_rainbow::rune_rainbow:"
        );
    }

    #[test]
    fn test_serialize() -> Fallible<()> {
        let json = serde_json::to_string(&tokenize("[TANK] 2 RUNES"))?;
        assert_eq!(
            json,
            r#"[{"kind":"keywordTag","label":"TANK","style":"primary"},{"kind":"plainText","text":"  "},{"kind":"icon","name":"2RUNES","repeat":1}]"#
        );
        Ok(())
    }
}
