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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::types::domain::Domain;
use crate::types::domain::DomainTag;
use crate::types::domain::FALLBACK_COLOR;
use crate::types::rarity::Rarity;

/// The tag that marks a promotional printing.
pub const PROMO_TAG: &str = "PROMO";

/// A card as it appears in the catalog file.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub card_type: String,
    pub rune_cost: u32,
    #[serde(default)]
    pub might: u32,
    #[serde(default)]
    pub power_cost: u32,
    /// Rules text. May contain `[...]` directives and rune tokens.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub domain: Vec<DomainTag>,
    pub set: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Derived when the catalog is loaded; never read from the input.
    #[serde(default, skip_deserializing)]
    pub is_foil: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default())
}

impl Card {
    pub fn is_promo(&self) -> bool {
        self.tags.iter().any(|tag| tag == PROMO_TAG)
    }

    /// Whether this card should be shown with a foil finish.
    pub fn derive_foil(&self) -> bool {
        self.rarity.is_foil() || self.is_promo()
    }

    pub fn has_wildcard_domain(&self) -> bool {
        self.domain.contains(&DomainTag::All)
    }

    /// The card's known domains, skipping the wildcard and unknown names.
    pub fn known_domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.domain.iter().filter_map(|tag| match tag {
            DomainTag::Known(domain) => Some(*domain),
            _ => None,
        })
    }

    /// Colours for the two-tone card frame. Single-domain cards use the same
    /// colour twice.
    pub fn domain_colors(&self) -> (&'static str, &'static str) {
        let first = self.domain.first().map(|tag| tag.color());
        let second = self.domain.get(1).map(|tag| tag.color());
        match (first, second) {
            (Some(a), Some(b)) => (a, b),
            (Some(a), None) => (a, a),
            _ => (FALLBACK_COLOR, FALLBACK_COLOR),
        }
    }
}
