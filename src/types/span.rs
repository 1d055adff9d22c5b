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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// An inclusive range of values for a numeric facet.
///
/// A span with `min > max` is allowed and contains nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Span {
    pub min: u32,
    pub max: u32,
}

impl Span {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// The span `0..=max`.
    pub fn up_to(max: u32) -> Self {
        Self { min: 0, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Parses `A..B`, `A-B`, or a single `N` (meaning `N..N`).
impl FromStr for Span {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (min, max) = if let Some((a, b)) = s.split_once("..") {
            (a, b)
        } else if let Some((a, b)) = s.split_once('-') {
            (a, b)
        } else {
            (s, s)
        };
        match (min.trim().parse::<u32>(), max.trim().parse::<u32>()) {
            (Ok(min), Ok(max)) => Ok(Span { min, max }),
            _ => fail(format!("invalid range: {s:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let span = Span::new(2, 4);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let span = Span::new(5, 1);
        assert!((0..10).all(|v| !span.contains(v)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2..5".parse::<Span>(), Ok(Span::new(2, 5)));
        assert_eq!("2-5".parse::<Span>(), Ok(Span::new(2, 5)));
        assert_eq!(" 3 ".parse::<Span>(), Ok(Span::new(3, 3)));
        assert!("a..b".parse::<Span>().is_err());
        assert!("-1".parse::<Span>().is_err());
        assert!("".parse::<Span>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::up_to(12).to_string(), "0..12");
    }
}
