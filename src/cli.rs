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

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;
use crate::cmd::check::check_catalog;
use crate::cmd::describe::DescribeFormat;
use crate::cmd::describe::describe_card;
use crate::cmd::search::SearchFormat;
use crate::cmd::search::SearchOptions;
use crate::cmd::search::print_search;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_catalog_stats;
use crate::config::GalleryConfig;
use crate::error::Fallible;
use crate::gallery::server::start_server;
use crate::types::domain::Domain;
use crate::types::span::Span;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Browse a catalog in the web gallery.
    Serve {
        /// Path to the catalog JSON file.
        catalog: PathBuf,
        /// Optional path to a TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Port to listen on, overriding the configuration.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Filter a catalog and print the matching cards.
    Search {
        /// Path to the catalog JSON file.
        catalog: PathBuf,
        /// Text to look for in names, descriptions, artists, ids, and tags.
        query: Option<String>,
        /// Only show cards of this domain. Can be repeated.
        #[arg(long = "domain")]
        domains: Vec<Domain>,
        #[arg(long)]
        rarity: Option<String>,
        #[arg(long)]
        set: Option<String>,
        #[arg(long = "type")]
        card_type: Option<String>,
        /// Rune cost range, e.g. `2..4`.
        #[arg(long)]
        rune_cost: Option<Span>,
        /// Might range.
        #[arg(long)]
        might: Option<Span>,
        /// Power cost range.
        #[arg(long)]
        power: Option<Span>,
        #[arg(long)]
        hide_promos: bool,
        #[arg(long)]
        only_promos: bool,
        #[arg(long, default_value_t = SearchFormat::Text)]
        format: SearchFormat,
    },
    /// Print a card's description, tokenized.
    Describe {
        /// Path to the catalog JSON file.
        catalog: PathBuf,
        /// The card's id.
        id: String,
        #[arg(long, default_value_t = DescribeFormat::Text)]
        format: DescribeFormat,
    },
    /// Check the integrity of a catalog.
    Check {
        /// Path to the catalog JSON file.
        catalog: PathBuf,
    },
    /// Print collection statistics.
    Stats {
        /// Path to the catalog JSON file.
        catalog: PathBuf,
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            catalog,
            config,
            port,
            no_open,
        } => {
            let mut config = GalleryConfig::load(config.as_deref())?;
            if let Some(port) = port {
                config.port = port;
            }
            if no_open {
                config.open_browser = false;
            }
            let catalog = Catalog::load(&catalog)?;
            start_server(catalog, config).await
        }
        Command::Search {
            catalog,
            query,
            domains,
            rarity,
            set,
            card_type,
            rune_cost,
            might,
            power,
            hide_promos,
            only_promos,
            format,
        } => {
            let options = SearchOptions {
                query,
                domains,
                rarity,
                set,
                card_type,
                rune_cost,
                might,
                power,
                hide_promos,
                only_promos,
            };
            print_search(&catalog, &options, format)
        }
        Command::Describe {
            catalog,
            id,
            format,
        } => describe_card(&catalog, &id, format),
        Command::Check { catalog } => check_catalog(&catalog),
        Command::Stats { catalog, format } => print_catalog_stats(&catalog, format),
    }
}
