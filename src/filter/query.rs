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

//! Filter criteria as URL query pairs, so the gallery can carry the current
//! filter state in its links.

use std::collections::BTreeSet;

use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

use crate::config::FilterBounds;
use crate::filter::FilterCriteria;
use crate::filter::Selection;
use crate::types::domain::Domain;
use crate::types::rarity::Rarity;
use crate::types::span::Span;

/// Present when the domain list is explicit, so that "nothing selected" can
/// be told apart from "no domain parameters at all".
const FILTERED_KEY: &str = "filtered";

/// Builds criteria from already-decoded query pairs. Missing or unparseable
/// values leave the facet at its default.
pub fn criteria_from_pairs(pairs: &[(String, String)], bounds: &FilterBounds) -> FilterCriteria {
    let mut criteria = FilterCriteria::new(bounds);
    let explicit_domains = pairs
        .iter()
        .any(|(key, _)| key == FILTERED_KEY || key == "domain");
    if explicit_domains {
        criteria.domains = BTreeSet::new();
    }
    for (key, value) in pairs {
        match key.as_str() {
            "q" => criteria.search_text = value.clone(),
            "domain" => match value.parse::<Domain>() {
                Ok(domain) => {
                    criteria.domains.insert(domain);
                }
                Err(_) => log::warn!("Ignoring unknown domain {value:?}."),
            },
            "rarity" => criteria.rarity = selection(value).map(Rarity::parse),
            "set" => criteria.set = selection(value).map(str::to_string),
            "type" => criteria.card_type = selection(value).map(str::to_string),
            "rune_min" => set_bound(&mut criteria.rune_cost.min, key, value),
            "rune_max" => set_bound(&mut criteria.rune_cost.max, key, value),
            "might_min" => set_bound(&mut criteria.might.min, key, value),
            "might_max" => set_bound(&mut criteria.might.max, key, value),
            "power_min" => set_bound(&mut criteria.power.min, key, value),
            "power_max" => set_bound(&mut criteria.power.max, key, value),
            "hide_promos" => criteria.hide_promos = flag(value),
            "only_promos" => criteria.show_only_promos = flag(value),
            FILTERED_KEY => {}
            _ => log::debug!("Ignoring query parameter {key:?}."),
        }
    }
    criteria
}

/// Encodes the criteria as a query string (without the leading `?`). Facets
/// at their default are left out, so default criteria encode to "".
pub fn criteria_to_query(criteria: &FilterCriteria, bounds: &FilterBounds) -> String {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();
    if !criteria.search_text.is_empty() {
        pairs.push(("q", criteria.search_text.clone()));
    }
    if criteria.domains.len() != Domain::ALL.len() {
        pairs.push((FILTERED_KEY, "1".to_string()));
        for domain in &criteria.domains {
            pairs.push(("domain", domain.as_str().to_string()));
        }
    }
    if let Some(rarity) = criteria.rarity.value() {
        pairs.push(("rarity", rarity.as_str().to_string()));
    }
    if let Some(set) = criteria.set.value() {
        pairs.push(("set", set.clone()));
    }
    if let Some(card_type) = criteria.card_type.value() {
        pairs.push(("type", card_type.clone()));
    }
    push_span(&mut pairs, ("rune_min", "rune_max"), criteria.rune_cost, bounds.rune_cost());
    push_span(&mut pairs, ("might_min", "might_max"), criteria.might, bounds.might());
    push_span(&mut pairs, ("power_min", "power_max"), criteria.power, bounds.power());
    if criteria.hide_promos {
        pairs.push(("hide_promos", "1".to_string()));
    }
    if criteria.show_only_promos {
        pairs.push(("only_promos", "1".to_string()));
    }
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

fn push_span(
    pairs: &mut Vec<(&'static str, String)>,
    (min_key, max_key): (&'static str, &'static str),
    span: Span,
    full: Span,
) {
    if span.min != full.min {
        pairs.push((min_key, span.min.to_string()));
    }
    if span.max != full.max {
        pairs.push((max_key, span.max.to_string()));
    }
}

/// `""` and `"all"` mean no constraint.
fn selection(value: &str) -> Selection<&str> {
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        Selection::All
    } else {
        Selection::Only(value)
    }
}

fn set_bound(target: &mut u32, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    match value.trim().parse::<u32>() {
        Ok(n) => *target = n,
        Err(_) => log::warn!("Ignoring invalid value {value:?} for {key}."),
    }
}

/// HTML checkboxes submit "on".
fn flag(value: &str) -> bool {
    matches!(value, "1" | "on" | "true")
}
