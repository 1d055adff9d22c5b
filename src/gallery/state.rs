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

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::FilterBounds;
use crate::config::GalleryConfig;
use crate::filter::FilterCriteria;
use crate::filter::query::criteria_from_pairs;

/// Shared, read-only state. Every request derives its own filtered view.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<GalleryConfig>,
    /// The configured bounds, widened to fit the catalog.
    pub bounds: FilterBounds,
}

impl ServerState {
    pub fn new(catalog: Catalog, config: GalleryConfig) -> Self {
        let bounds = catalog.bounds(&config.bounds);
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            bounds,
        }
    }

    pub fn criteria(&self, pairs: &[(String, String)]) -> FilterCriteria {
        criteria_from_pairs(pairs, &self.bounds)
    }
}
