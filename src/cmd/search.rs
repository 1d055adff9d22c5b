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
use std::path::Path;

use clap::ValueEnum;

use crate::catalog::Catalog;
use crate::config::FilterBounds;
use crate::error::Fallible;
use crate::filter::FilterCriteria;
use crate::filter::Selection;
use crate::filter::filter_catalog;
use crate::types::card::Card;
use crate::types::domain::Domain;
use crate::types::rarity::Rarity;
use crate::types::span::Span;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum SearchFormat {
    /// One `id  name` line per card.
    Text,
    /// The matching cards as a JSON array.
    Json,
}

impl Display for SearchFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchFormat::Text => write!(f, "text"),
            SearchFormat::Json => write!(f, "json"),
        }
    }
}

/// Filter options as given on the command line. Anything left out does not
/// constrain the search.
#[derive(Default)]
pub struct SearchOptions {
    pub query: Option<String>,
    /// Empty means every domain.
    pub domains: Vec<Domain>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub card_type: Option<String>,
    pub rune_cost: Option<Span>,
    pub might: Option<Span>,
    pub power: Option<Span>,
    pub hide_promos: bool,
    pub only_promos: bool,
}

impl SearchOptions {
    pub fn criteria(&self, bounds: &FilterBounds) -> FilterCriteria {
        let mut criteria = FilterCriteria::new(bounds);
        if let Some(query) = &self.query {
            criteria.search_text = query.clone();
        }
        if !self.domains.is_empty() {
            criteria.domains = self.domains.iter().copied().collect();
        }
        criteria.rarity = selection(self.rarity.as_deref()).map(Rarity::parse);
        criteria.set = selection(self.set.as_deref()).map(str::to_string);
        criteria.card_type = selection(self.card_type.as_deref()).map(str::to_string);
        if let Some(span) = self.rune_cost {
            criteria.rune_cost = span;
        }
        if let Some(span) = self.might {
            criteria.might = span;
        }
        if let Some(span) = self.power {
            criteria.power = span;
        }
        criteria.hide_promos = self.hide_promos;
        criteria.show_only_promos = self.only_promos;
        criteria
    }
}

fn selection(value: Option<&str>) -> Selection<&str> {
    match value {
        None => Selection::All,
        Some(v) if v.eq_ignore_ascii_case("all") => Selection::All,
        Some(v) => Selection::Only(v),
    }
}

pub fn search<'a>(catalog: &'a Catalog, options: &SearchOptions) -> Vec<&'a Card> {
    let bounds = catalog.bounds(&FilterBounds::default());
    let criteria = options.criteria(&bounds);
    log::info!("{} active filters.", criteria.active_count(&bounds));
    filter_catalog(catalog.cards(), &criteria)
}

pub fn print_search(path: &Path, options: &SearchOptions, format: SearchFormat) -> Fallible<()> {
    let catalog = Catalog::load(path)?;
    let cards = search(&catalog, options);
    match format {
        SearchFormat::Text => {
            for card in cards {
                println!("{}  {}", card.id, card.name);
            }
        }
        SearchFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
    }
    Ok(())
}
