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

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::config::FilterBounds;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;
use crate::types::domain::DomainTag;
use crate::types::rarity::Rarity;

/// The full, read-only list of cards.
pub struct Catalog {
    /// The file the catalog was loaded from, if any.
    path: Option<PathBuf>,
    cards: Vec<Card>,
}

impl Catalog {
    /// Loads a catalog from a JSON file containing an array of cards.
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("catalog file {} does not exist.", path.display()));
        }
        log::debug!("Loading catalog...");
        let start = Instant::now();
        let content = read_to_string(path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        let mut catalog = Self::from_cards(cards)?;
        catalog.path = Some(path.to_path_buf());
        let duration = start.elapsed().as_millis();
        log::debug!("Loaded {} cards in {duration}ms.", catalog.len());
        Ok(catalog)
    }

    /// Builds a catalog from already-parsed cards: validates them and derives
    /// their foil status.
    pub fn from_cards(cards: Vec<Card>) -> Fallible<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for card in &cards {
            if !seen.insert(&card.id) {
                return fail(format!("duplicate card id: {}", card.id));
            }
            if card.domain.is_empty() {
                return fail(format!("card {} has no domain.", card.id));
            }
            let real = card
                .domain
                .iter()
                .filter(|tag| !matches!(tag, DomainTag::All))
                .count();
            if real > 2 {
                return fail(format!("card {} has more than two domains.", card.id));
            }
            for tag in &card.domain {
                if let DomainTag::Unknown(name) = tag {
                    log::warn!("Card {} has unknown domain {name:?}.", card.id);
                }
            }
        }
        let cards = cards
            .into_iter()
            .map(|mut card| {
                card.is_foil = card.derive_foil();
                card
            })
            .collect();
        Ok(Self { path: None, cards })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Distinct set codes, in the order they first appear.
    pub fn sets(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .filter(|card| seen.insert(card.set.as_str()))
            .map(|card| card.set.clone())
            .collect()
    }

    /// Distinct card types, lower-cased, in the order they first appear.
    pub fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for card in &self.cards {
            let lower = card.card_type.to_lowercase();
            if !types.contains(&lower) {
                types.push(lower);
            }
        }
        types
    }

    /// The rarities offered as filter choices. This is a fixed list so that
    /// the order does not depend on the catalog.
    pub fn rarities() -> Vec<Rarity> {
        Rarity::CANONICAL.to_vec()
    }

    /// The full span of each numeric facet: the nominal bounds, widened to
    /// cover the largest value actually present.
    pub fn bounds(&self, nominal: &FilterBounds) -> FilterBounds {
        let mut bounds = *nominal;
        for card in &self.cards {
            bounds.rune_cost_max = bounds.rune_cost_max.max(card.rune_cost);
            bounds.might_max = bounds.might_max.max(card.might);
            bounds.power_max = bounds.power_max.max(card.power_cost);
        }
        bounds
    }

    pub fn stats(&self) -> CatalogStats {
        let mut rarities: Vec<String> = Vec::new();
        for card in &self.cards {
            let rarity = card.rarity.as_str().to_string();
            if !rarities.contains(&rarity) {
                rarities.push(rarity);
            }
        }
        CatalogStats {
            total_cards: self.cards.len(),
            sets: self.sets(),
            rarities,
            foil_cards: self.cards.iter().filter(|card| card.is_foil).count(),
            promo_cards: self.cards.iter().filter(|card| card.is_promo()).count(),
        }
    }
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_cards: usize,
    pub sets: Vec<String>,
    /// Rarities present in the catalog, in first-seen order.
    pub rarities: Vec<String>,
    pub foil_cards: usize,
    pub promo_cards: usize,
}

/// The cards before and after the card with the given id in `cards`.
pub fn neighbours<'a>(cards: &[&'a Card], id: &str) -> (Option<&'a Card>, Option<&'a Card>) {
    match cards.iter().position(|card| card.id == id) {
        Some(index) => {
            let previous = index.checked_sub(1).map(|i| cards[i]);
            let next = cards.get(index + 1).copied();
            (previous, next)
        }
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;
    use crate::helper::card;
    use crate::helper::fixture_catalog_path;

    #[test]
    fn test_load_fixture() -> Fallible<()> {
        let catalog = Catalog::load(&fixture_catalog_path())?;
        assert!(!catalog.is_empty());
        assert!(catalog.path().is_some());
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("./derpherp.json"));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(
            err.to_string(),
            "error: catalog file ./derpherp.json does not exist."
        );
    }

    #[test]
    fn test_load_invalid_json() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        write(&path, "{ not json")?;
        assert!(Catalog::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_empty_array() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        write(&path, "[]")?;
        let catalog = Catalog::load(&path)?;
        assert!(catalog.is_empty());
        assert!(catalog.sets().is_empty());
        Ok(())
    }

    #[test]
    fn test_foil_is_derived() -> Fallible<()> {
        let mut promo = card("B");
        promo.tags = vec!["PROMO".to_string()];
        let mut rare = card("C");
        rare.rarity = Rarity::parse("Rare");
        let mut stale = card("D");
        stale.is_foil = true;
        let catalog = Catalog::from_cards(vec![card("A"), promo, rare, stale])?;
        let foils: Vec<bool> = catalog.cards().iter().map(|c| c.is_foil).collect();
        assert_eq!(foils, vec![false, true, true, false]);
        Ok(())
    }

    #[test]
    fn test_duplicate_id() {
        let result = Catalog::from_cards(vec![card("A"), card("A")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_domain() {
        let mut c = card("A");
        c.domain.clear();
        assert!(Catalog::from_cards(vec![c]).is_err());
    }

    #[test]
    fn test_too_many_domains() {
        let mut c = card("A");
        c.domain = vec![
            DomainTag::parse("fury"),
            DomainTag::parse("calm"),
            DomainTag::parse("mind"),
        ];
        assert!(Catalog::from_cards(vec![c]).is_err());
    }

    #[test]
    fn test_vocabularies() -> Fallible<()> {
        let mut a = card("A");
        a.set = "OGN".to_string();
        a.card_type = "Unit".to_string();
        let mut b = card("B");
        b.set = "SFD".to_string();
        b.card_type = "spell".to_string();
        let mut c = card("C");
        c.set = "OGN".to_string();
        c.card_type = "UNIT".to_string();
        let catalog = Catalog::from_cards(vec![a, b, c])?;
        assert_eq!(catalog.sets(), vec!["OGN", "SFD"]);
        assert_eq!(catalog.types(), vec!["unit", "spell"]);
        assert_eq!(
            Catalog::rarities(),
            vec![
                Rarity::Common,
                Rarity::Uncommon,
                Rarity::Rare,
                Rarity::Epic,
                Rarity::Showcase
            ]
        );
        Ok(())
    }

    #[test]
    fn test_bounds_widen_to_catalog() -> Fallible<()> {
        let mut big = card("A");
        big.rune_cost = 15;
        let catalog = Catalog::from_cards(vec![big, card("B")])?;
        let bounds = catalog.bounds(&FilterBounds::default());
        assert_eq!(bounds.rune_cost_max, 15);
        assert_eq!(bounds.might_max, 10);
        assert_eq!(bounds.power_max, 4);
        Ok(())
    }

    #[test]
    fn test_stats() -> Fallible<()> {
        let mut b = card("B");
        b.rarity = Rarity::Epic;
        let mut c = card("C");
        c.tags = vec!["PROMO".to_string()];
        let catalog = Catalog::from_cards(vec![card("A"), b, c])?;
        let stats = catalog.stats();
        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.sets, vec!["OGN"]);
        assert_eq!(stats.rarities, vec!["common", "epic"]);
        assert_eq!(stats.foil_cards, 2);
        assert_eq!(stats.promo_cards, 1);
        Ok(())
    }

    #[test]
    fn test_find_and_neighbours() -> Fallible<()> {
        let catalog = Catalog::from_cards(vec![card("A"), card("B"), card("C")])?;
        assert_eq!(catalog.find("B").map(|c| c.id.as_str()), Some("B"));
        assert!(catalog.find("Z").is_none());
        let list: Vec<&Card> = catalog.cards().iter().collect();
        let (prev, next) = neighbours(&list, "A");
        assert!(prev.is_none());
        assert_eq!(next.map(|c| c.id.as_str()), Some("B"));
        let (prev, next) = neighbours(&list, "C");
        assert_eq!(prev.map(|c| c.id.as_str()), Some("B"));
        assert!(next.is_none());
        assert_eq!(neighbours(&list, "Z"), (None, None));
        Ok(())
    }
}
