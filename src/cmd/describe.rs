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
use crate::config::GalleryConfig;
use crate::description::tokenize;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::render::segments_to_html;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum DescribeFormat {
    /// Plain text, with icons as `:name:`.
    Text,
    /// The segments as JSON.
    Json,
    /// An HTML fragment.
    Html,
}

impl Display for DescribeFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DescribeFormat::Text => write!(f, "text"),
            DescribeFormat::Json => write!(f, "json"),
            DescribeFormat::Html => write!(f, "html"),
        }
    }
}

pub fn describe_card(path: &Path, id: &str, format: DescribeFormat) -> Fallible<()> {
    let catalog = Catalog::load(path)?;
    println!("{}", render_description(&catalog, id, format)?);
    Ok(())
}

fn render_description(catalog: &Catalog, id: &str, format: DescribeFormat) -> Fallible<String> {
    let card = catalog
        .find(id)
        .ok_or_else(|| ErrorReport::new(format!("no card with id {id}.")))?;
    let segments = tokenize(&card.description);
    match format {
        DescribeFormat::Text => Ok(segments.iter().map(|s| s.to_string()).collect()),
        DescribeFormat::Json => Ok(serde_json::to_string_pretty(&segments)?),
        DescribeFormat::Html => {
            let config = GalleryConfig::default();
            Ok(segments_to_html(&segments, config.icon_prefix()).into_string())
        }
    }
}
