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

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::catalog::Catalog;
use crate::catalog::neighbours;
use crate::config::FilterBounds;
use crate::filter::FilterCriteria;
use crate::filter::filter_catalog;
use crate::filter::query::criteria_to_query;
use crate::gallery::state::ServerState;
use crate::gallery::template::page_template;
use crate::render::card_detail;
use crate::render::card_href;
use crate::render::card_tile;
use crate::types::domain::Domain;
use crate::types::span::Span;

pub async fn root(
    State(state): State<ServerState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let criteria = state.criteria(&pairs);
    let query = criteria_to_query(&criteria, &state.bounds);
    let cards = filter_catalog(state.catalog.cards(), &criteria);
    log::debug!(
        "Showing {} of {} cards.",
        cards.len(),
        state.catalog.len()
    );
    let body = html! {
        div.root {
            (header())
            (stats(&state.catalog))
            (filter_form(&state.catalog, &criteria, &state.bounds))
            section.grid {
                @if cards.is_empty() {
                    p.empty { "No cards to display" }
                } @else {
                    h2 { "All Cards (" (cards.len()) " cards)" }
                    div.card-grid {
                        @for card in &cards {
                            (card_tile(card, &query))
                        }
                    }
                }
            }
        }
    };
    let html = page_template("Gallery", body);
    (StatusCode::OK, Html(html.into_string()))
}

pub async fn card_page(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let Some(card) = state.catalog.find(&id) else {
        log::warn!("No card with id {id:?}.");
        return (StatusCode::NOT_FOUND, Html("Not Found".to_string()));
    };
    let criteria = state.criteria(&pairs);
    let query = criteria_to_query(&criteria, &state.bounds);
    let cards = filter_catalog(state.catalog.cards(), &criteria);
    let (previous, next) = neighbours(&cards, &card.id);
    let close = if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    };
    let body = html! {
        div.root {
            (header())
            nav.detail-nav {
                @if let Some(previous) = previous {
                    a.previous href=(card_href(&previous.id, &query)) { "← " (previous.name) }
                }
                a.close href=(close) { "Close" }
                @if let Some(next) = next {
                    a.next href=(card_href(&next.id, &query)) { (next.name) " →" }
                }
            }
            (card_detail(card, state.config.icon_prefix()))
        }
    };
    let html = page_template(&card.name, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn header() -> Markup {
    html! {
        header.header {
            a href="/" { h1 { "Card Gallery" } }
        }
    }
}

fn stats(catalog: &Catalog) -> Markup {
    let stats = catalog.stats();
    html! {
        section.stats {
            h2 { "Collection Statistics" }
            dl {
                dt { "Total cards" }
                dd.total-cards { (stats.total_cards) }
                dt { "Sets" }
                dd { (stats.sets.join(", ")) }
                dt { "Rarities" }
                dd { (stats.rarities.join(", ")) }
            }
        }
    }
}

fn filter_form(catalog: &Catalog, criteria: &FilterCriteria, bounds: &FilterBounds) -> Markup {
    let active = criteria.active_count(bounds);
    let rarity = criteria.rarity.value().map(|r| r.as_str().to_string());
    html! {
        form.filters action="/" method="get" {
            input type="search" name="q" placeholder="Search cards" value=(criteria.search_text);
            input type="hidden" name="filtered" value="1";
            fieldset.domains {
                legend { "Domains" }
                @for domain in Domain::ALL {
                    label style={ "--domain: " (domain.color()) } {
                        input type="checkbox" name="domain" value=(domain.as_str())
                            checked[criteria.domains.contains(&domain)];
                        (domain.label())
                    }
                }
            }
            (select("set", "All sets", &catalog.sets(), criteria.set.value()))
            (select("type", "All types", &catalog.types(), criteria.card_type.value()))
            (select(
                "rarity",
                "All rarities",
                &Catalog::rarities().iter().map(|r| r.as_str().to_string()).collect::<Vec<_>>(),
                rarity.as_ref(),
            ))
            (range("Rune cost", "rune", criteria.rune_cost, bounds.rune_cost()))
            (range("Might", "might", criteria.might, bounds.might()))
            (range("Power", "power", criteria.power, bounds.power()))
            label {
                input type="checkbox" name="hide_promos" value="1" checked[criteria.hide_promos];
                "Hide promos"
            }
            label {
                input type="checkbox" name="only_promos" value="1" checked[criteria.show_only_promos];
                "Only promos"
            }
            button type="submit" { "Apply" }
            a.reset href="/" { "Reset filters (" (active) ")" }
        }
    }
}

fn select(name: &str, all_label: &str, options: &[String], selected: Option<&String>) -> Markup {
    html! {
        select name=(name) {
            option value="all" selected[selected.is_none()] { (all_label) }
            @for option in options {
                option value=(option) selected[selected.is_some_and(|s| s.eq_ignore_ascii_case(option))] {
                    (option)
                }
            }
        }
    }
}

fn range(label: &str, prefix: &str, span: Span, full: Span) -> Markup {
    html! {
        fieldset.range {
            legend { (label) }
            input type="number" name={ (prefix) "_min" } min=(full.min) max=(full.max) value=(span.min);
            input type="number" name={ (prefix) "_max" } min=(full.min) max=(full.max) value=(span.max);
        }
    }
}
