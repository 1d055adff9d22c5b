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

use serde::Serialize;

/// Rules keywords that render as styled tags when they head a directive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keyword {
    Accelerate,
    Action,
    Assault,
    Deathknell,
    Deflect,
    Ganking,
    Hidden,
    Legion,
    Mighty,
    Reaction,
    Shield,
    Tank,
    Temporary,
    Vision,
    Add,
}

/// The colour group of a keyword tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStyle {
    Group1,
    Secondary,
    Primary,
    Group2,
    /// No colour group.
    Unstyled,
}

impl Keyword {
    pub const ALL: [Keyword; 15] = [
        Keyword::Accelerate,
        Keyword::Action,
        Keyword::Assault,
        Keyword::Deathknell,
        Keyword::Deflect,
        Keyword::Ganking,
        Keyword::Hidden,
        Keyword::Legion,
        Keyword::Mighty,
        Keyword::Reaction,
        Keyword::Shield,
        Keyword::Tank,
        Keyword::Temporary,
        Keyword::Vision,
        Keyword::Add,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Accelerate => "ACCELERATE",
            Keyword::Action => "ACTION",
            Keyword::Assault => "ASSAULT",
            Keyword::Deathknell => "DEATHKNELL",
            Keyword::Deflect => "DEFLECT",
            Keyword::Ganking => "GANKING",
            Keyword::Hidden => "HIDDEN",
            Keyword::Legion => "LEGION",
            Keyword::Mighty => "MIGHTY",
            Keyword::Reaction => "REACTION",
            Keyword::Shield => "SHIELD",
            Keyword::Tank => "TANK",
            Keyword::Temporary => "TEMPORARY",
            Keyword::Vision => "VISION",
            Keyword::Add => "ADD",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_head(head: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|k| k.as_str() == head)
    }

    pub fn style(&self) -> KeywordStyle {
        match self {
            Keyword::Reaction
            | Keyword::Action
            | Keyword::Accelerate
            | Keyword::Legion
            | Keyword::Hidden => KeywordStyle::Group1,
            Keyword::Add | Keyword::Vision | Keyword::Mighty => KeywordStyle::Secondary,
            Keyword::Shield | Keyword::Assault | Keyword::Tank => KeywordStyle::Primary,
            Keyword::Ganking | Keyword::Deflect | Keyword::Temporary | Keyword::Deathknell => {
                KeywordStyle::Group2
            }
        }
    }
}

impl KeywordStyle {
    /// The style for any tag name; names outside the keyword table are
    /// unstyled.
    pub fn lookup(name: &str) -> KeywordStyle {
        Keyword::from_head(name)
            .map(|keyword| keyword.style())
            .unwrap_or(KeywordStyle::Unstyled)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            KeywordStyle::Group1 => "tag-g1",
            KeywordStyle::Secondary => "tag-s",
            KeywordStyle::Primary => "tag-p",
            KeywordStyle::Group2 => "tag-g2",
            KeywordStyle::Unstyled => "tag-plain",
        }
    }
}
