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

/// A lexical token of a card description. Every token borrows from the input,
/// and the tokens of an input concatenate back to it exactly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token<'a> {
    /// A word made only of ASCII digits. `value` saturates at `u32::MAX`.
    Number { text: &'a str, value: u32 },
    /// A maximal run of ASCII word characters (`[A-Za-z0-9_]`).
    Word(&'a str),
    /// A maximal run of anything else.
    Separator(&'a str),
    /// A bracketed directive such as `[ACTION]`. Never nested.
    Directive { raw: &'a str, interior: &'a str },
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Number { text, .. } => text,
            Token::Word(text) => text,
            Token::Separator(text) => text,
            Token::Directive { raw, .. } => raw,
        }
    }

    /// The text of a word or number token.
    pub fn word(&self) -> Option<&'a str> {
        match *self {
            Token::Number { text, .. } | Token::Word(text) => Some(text),
            _ => None,
        }
    }
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// If a directive opens at `start`, the index of its closing bracket. A
/// directive needs at least one character between the brackets.
fn directive_end(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'[') {
        return None;
    }
    let close = bytes[start + 1..].iter().position(|b| *b == b']')?;
    if close == 0 {
        None
    } else {
        Some(start + 1 + close)
    }
}

pub fn lex(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = directive_end(bytes, i) {
            tokens.push(Token::Directive {
                raw: &input[i..=end],
                interior: &input[i + 1..end],
            });
            i = end + 1;
        } else if is_word(bytes[i]) {
            let start = i;
            while i < bytes.len() && is_word(bytes[i]) {
                i += 1;
            }
            let text = &input[start..i];
            if text.bytes().all(|b| b.is_ascii_digit()) {
                let value = text.parse::<u32>().unwrap_or(u32::MAX);
                tokens.push(Token::Number { text, value });
            } else {
                tokens.push(Token::Word(text));
            }
        } else {
            let start = i;
            i += 1;
            while i < bytes.len() && !is_word(bytes[i]) && directive_end(bytes, i).is_none() {
                i += 1;
            }
            tokens.push(Token::Separator(&input[start..i]));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_words_and_separators() {
        assert_eq!(
            lex("Pay 3 RUNES."),
            vec![
                Token::Word("Pay"),
                Token::Separator(" "),
                Token::Number {
                    text: "3",
                    value: 3
                },
                Token::Separator(" "),
                Token::Word("RUNES"),
                Token::Separator("."),
            ]
        );
    }

    #[test]
    fn test_directive() {
        assert_eq!(
            lex("[ACTION: draw] go"),
            vec![
                Token::Directive {
                    raw: "[ACTION: draw]",
                    interior: "ACTION: draw"
                },
                Token::Separator(" "),
                Token::Word("go"),
            ]
        );
    }

    #[test]
    fn test_empty_and_unterminated_brackets_are_separators() {
        assert_eq!(
            lex("a [] b [c"),
            vec![
                Token::Word("a"),
                Token::Separator(" [] "),
                Token::Word("b"),
                Token::Separator(" ["),
                Token::Word("c"),
            ]
        );
    }

    #[test]
    fn test_directive_interrupts_separator() {
        assert_eq!(
            lex(". [X]"),
            vec![
                Token::Separator(". "),
                Token::Directive {
                    raw: "[X]",
                    interior: "X"
                },
            ]
        );
    }

    #[test]
    fn test_inner_open_bracket_belongs_to_directive() {
        assert_eq!(
            lex("[a[b]"),
            vec![Token::Directive {
                raw: "[a[b]",
                interior: "a[b"
            }]
        );
    }

    #[test]
    fn test_mixed_alphanumerics_are_words() {
        assert_eq!(
            lex("2nd 007"),
            vec![
                Token::Word("2nd"),
                Token::Separator(" "),
                Token::Number {
                    text: "007",
                    value: 7
                },
            ]
        );
    }

    #[test]
    fn test_oversized_numbers_saturate() {
        assert_eq!(
            lex("4294967296"),
            vec![Token::Number {
                text: "4294967296",
                value: u32::MAX
            }]
        );
    }

    #[test]
    fn test_non_ascii_is_separator() {
        let tokens = lex("café au lait");
        assert_eq!(tokens[0], Token::Word("caf"));
        assert_eq!(tokens[1], Token::Separator("é "));
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let input = "[SHIELD 2] Spend 2 RUNE_RAINBOW, then [ ok ] ~ [done";
        let joined: String = lex(input).iter().map(|t| t.text()).collect();
        assert_eq!(joined, input);
    }
}
