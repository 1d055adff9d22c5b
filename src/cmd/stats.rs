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
use crate::catalog::CatalogStats;
use crate::error::Fallible;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_catalog_stats(path: &Path, format: StatsFormat) -> Fallible<()> {
    let catalog = Catalog::load(path)?;
    let stats = catalog.stats();
    println!("{}", format_stats(&stats, format)?);
    Ok(())
}

fn format_stats(stats: &CatalogStats, format: StatsFormat) -> Fallible<String> {
    match format {
        StatsFormat::Text => {
            let lines = [
                format!("Total cards: {}", stats.total_cards),
                format!("Sets: {}", stats.sets.join(", ")),
                format!("Rarities: {}", stats.rarities.join(", ")),
                format!("Foil cards: {}", stats.foil_cards),
                format!("Promo cards: {}", stats.promo_cards),
            ];
            Ok(lines.join("\n"))
        }
        StatsFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::fixture_catalog_path;

    #[test]
    fn test_text() -> Fallible<()> {
        let catalog = Catalog::load(&fixture_catalog_path())?;
        let text = format_stats(&catalog.stats(), StatsFormat::Text)?;
        assert_eq!(
            text,
            "Total cards: 8\n\
             Sets: OGN, PRM, SFD\n\
             Rarities: common, uncommon, rare, epic, showcase\n\
             Foil cards: 4\n\
             Promo cards: 1"
        );
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let catalog = Catalog::load(&fixture_catalog_path())?;
        let json = format_stats(&catalog.stats(), StatsFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["totalCards"], 8);
        assert_eq!(value["promoCards"], 1);
        Ok(())
    }

    #[test]
    fn test_missing_catalog() {
        let result = print_catalog_stats(Path::new("./derpherp.json"), StatsFormat::Text);
        assert!(result.is_err());
    }
}
