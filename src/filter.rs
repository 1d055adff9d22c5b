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

//! Narrowing a catalog against a set of facet constraints.
//!
//! Everything here is pure: criteria are plain values, and filtering returns
//! a new list of references into the input without touching it.

pub mod query;

use std::collections::BTreeSet;

use crate::config::FilterBounds;
use crate::types::card::Card;
use crate::types::domain::Domain;
use crate::types::domain::DomainTag;
use crate::types::rarity::Rarity;
use crate::types::span::Span;

/// A categorical facet: either unconstrained, or a single value.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Selection::All => Selection::All,
            Selection::Only(value) => Selection::Only(f(value)),
        }
    }
}

/// The current filter state. Replaced wholesale on every change.
#[derive(Clone, PartialEq, Debug)]
pub struct FilterCriteria {
    /// Case-insensitive substring query. Empty means no text filter.
    pub search_text: String,
    /// Selected domains. An empty selection matches nothing.
    pub domains: BTreeSet<Domain>,
    pub rarity: Selection<Rarity>,
    /// Set codes are compared exactly.
    pub set: Selection<String>,
    /// Card types are compared ignoring case.
    pub card_type: Selection<String>,
    pub rune_cost: Span,
    pub might: Span,
    pub power: Span,
    pub hide_promos: bool,
    /// Independent of `hide_promos`: setting both excludes every card.
    pub show_only_promos: bool,
}

impl FilterCriteria {
    /// Criteria that let through every card whose numbers fall within
    /// `bounds`.
    pub fn new(bounds: &FilterBounds) -> Self {
        Self {
            search_text: String::new(),
            domains: Domain::ALL.into_iter().collect(),
            rarity: Selection::All,
            set: Selection::All,
            card_type: Selection::All,
            rune_cost: bounds.rune_cost(),
            might: bounds.might(),
            power: bounds.power(),
            hide_promos: false,
            show_only_promos: false,
        }
    }

    /// Whether a card satisfies every facet.
    pub fn matches(&self, card: &Card) -> bool {
        matches_search(card, &self.search_text)
            && matches_domains(card, &self.domains)
            && matches_rarity(card, &self.rarity)
            && matches_set(card, &self.set)
            && matches_type(card, &self.card_type)
            && self.rune_cost.contains(card.rune_cost)
            && self.might.contains(card.might)
            && self.power.contains(card.power_cost)
            && matches_promo(card, self.hide_promos, self.show_only_promos)
    }

    /// How many facets deviate from the "show everything" state. Each
    /// deselected domain counts as one.
    pub fn active_count(&self, bounds: &FilterBounds) -> usize {
        let mut count = 0;
        if !self.search_text.is_empty() {
            count += 1;
        }
        count += Domain::ALL
            .iter()
            .filter(|domain| !self.domains.contains(*domain))
            .count();
        count += [
            self.rarity.is_all(),
            self.set.is_all(),
            self.card_type.is_all(),
        ]
        .iter()
        .filter(|all| !**all)
        .count();
        count += [
            (self.rune_cost, bounds.rune_cost()),
            (self.might, bounds.might()),
            (self.power, bounds.power()),
        ]
        .iter()
        .filter(|(span, full)| span != full)
        .count();
        count += [self.hide_promos, self.show_only_promos]
            .iter()
            .filter(|flag| **flag)
            .count();
        count
    }
}

/// Criteria that let every card through, whatever its numbers.
impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(&FilterBounds {
            rune_cost_max: u32::MAX,
            might_max: u32::MAX,
            power_max: u32::MAX,
        })
    }
}

/// Returns the cards that satisfy `criteria`, in their original order.
pub fn filter_catalog<'a, I>(cards: I, criteria: &FilterCriteria) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .filter(|card| criteria.matches(card))
        .collect()
}

/// Checks the card's name, description, artist, id, and tags for the query.
pub fn matches_search(card: &Card, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query);
    contains(&card.name)
        || contains(&card.description)
        || contains(&card.artist)
        || contains(&card.id)
        || card.tags.iter().any(|tag| contains(tag))
}

/// The `all` wildcard passes as long as something is selected; otherwise the
/// card needs at least one selected domain.
pub fn matches_domains(card: &Card, selected: &BTreeSet<Domain>) -> bool {
    if selected.is_empty() {
        return false;
    }
    card.domain.iter().any(|tag| match tag {
        DomainTag::All => true,
        DomainTag::Known(domain) => selected.contains(domain),
        DomainTag::Unknown(_) => false,
    })
}

pub fn matches_rarity(card: &Card, rarity: &Selection<Rarity>) -> bool {
    match rarity {
        Selection::All => true,
        Selection::Only(rarity) => card.rarity == *rarity,
    }
}

pub fn matches_set(card: &Card, set: &Selection<String>) -> bool {
    match set {
        Selection::All => true,
        Selection::Only(set) => card.set == *set,
    }
}

pub fn matches_type(card: &Card, card_type: &Selection<String>) -> bool {
    match card_type {
        Selection::All => true,
        Selection::Only(card_type) => card.card_type.to_lowercase() == card_type.to_lowercase(),
    }
}

pub fn matches_promo(card: &Card, hide_promos: bool, show_only_promos: bool) -> bool {
    let promo = card.is_promo();
    !(hide_promos && promo) && !(show_only_promos && !promo)
}
