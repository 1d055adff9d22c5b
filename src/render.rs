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

use maud::Markup;
use maud::html;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

use crate::description::Segment;
use crate::description::icon_image;
use crate::description::tokenize;
use crate::types::card::Card;

/// Characters escaped in a card id path segment.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Renders description segments. `icon_prefix` is the URL directory holding
/// the icon images, without a trailing slash.
pub fn segments_to_html(segments: &[Segment], icon_prefix: &str) -> Markup {
    html! {
        @for segment in segments {
            @match segment {
                Segment::PlainText { text } => (text),
                Segment::Icon { name, repeat } => {
                    @let src = format!("{icon_prefix}/{}.svg", icon_image(name));
                    @for _ in 0..*repeat {
                        img.stat-icon src=(src) alt=(name);
                    }
                }
                Segment::KeywordTag { label, style } => {
                    span class={ "keyword-tag " (style.css_class()) } { (label) }
                }
            }
        }
    }
}

pub fn description_to_html(description: &str, icon_prefix: &str) -> Markup {
    segments_to_html(&tokenize(description), icon_prefix)
}

fn frame_style(card: &Card) -> String {
    let (first, second) = card.domain_colors();
    format!(
        "--domain-a: {first}; --domain-b: {second}; --rarity: {};",
        card.rarity.color()
    )
}

/// A grid tile linking to the card's detail view. `query` is the current
/// filter query string, carried into the link.
pub fn card_tile(card: &Card, query: &str) -> Markup {
    let href = card_href(&card.id, query);
    html! {
        a.card-tile .foil[card.is_foil] href=(href) style=(frame_style(card)) {
            @if card.image_url.is_empty() {
                div.card-placeholder { (card.name) }
            } @else {
                img.card-image src=(card.image_url) alt=(card.name) loading="lazy";
            }
            div.card-caption {
                span.card-name { (card.name) }
                @if card.is_foil {
                    span.foil-marker title="Foil" { "✦" }
                }
            }
        }
    }
}

pub fn card_detail(card: &Card, icon_prefix: &str) -> Markup {
    html! {
        div.card-detail .foil[card.is_foil] style=(frame_style(card)) {
            div.detail-image {
                @if !card.image_url.is_empty() {
                    img src=(card.image_url) alt=(card.name);
                }
            }
            div.detail-body {
                h2.detail-name { (card.name) }
                div.detail-type { (card.card_type) }
                dl.detail-costs {
                    dt { "Rune cost" }
                    dd { (card.rune_cost) }
                    dt { "Might" }
                    dd { (card.might) }
                    dt { "Power" }
                    dd { (card.power_cost) }
                }
                div.detail-rarity style={ "color: " (card.rarity.color()) } {
                    (card.rarity.as_str())
                }
                div.domain-chips {
                    @for tag in &card.domain {
                        span.domain-chip style={ "background: " (tag.color()) } {
                            (tag.as_str())
                        }
                    }
                }
                @if !card.tags.is_empty() {
                    ul.detail-tags {
                        @for tag in &card.tags {
                            li { (tag) }
                        }
                    }
                }
                div.description {
                    (description_to_html(&card.description, icon_prefix))
                }
                div.detail-credits {
                    @if !card.card_number.is_empty() {
                        span.card-number { (card.set) " " (card.card_number) }
                    }
                    @if !card.artist.is_empty() {
                        span.artist { "Illustrated by " (card.artist) }
                    }
                }
            }
        }
    }
}

pub fn card_href(id: &str, query: &str) -> String {
    let id = utf8_percent_encode(id, ID_SEGMENT);
    if query.is_empty() {
        format!("/card/{id}")
    } else {
        format!("/card/{id}?{query}")
    }
}
