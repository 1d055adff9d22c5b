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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::types::domain::FALLBACK_COLOR;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Showcase,
    /// Any other rarity name, stored lower-cased.
    Other(String),
}

impl Rarity {
    /// The canonical rarities, in display order.
    pub const CANONICAL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Showcase,
    ];

    /// Parses a rarity name, ignoring case. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "showcase" => Rarity::Showcase,
            other => Rarity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Showcase => "showcase",
            Rarity::Other(name) => name,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#a9bac6",
            Rarity::Uncommon => "#a6f1eb",
            Rarity::Rare => "#cc27f5",
            Rarity::Epic => "#ff9532",
            Rarity::Showcase => "#ffd000",
            Rarity::Other(_) => FALLBACK_COLOR,
        }
    }

    /// Rare and above are printed with a foil finish.
    pub fn is_foil(&self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Epic | Rarity::Showcase)
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Rarity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rarity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Rarity::parse(&s))
    }
}
