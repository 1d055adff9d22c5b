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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::span::Span;

/// Gallery configuration, read from an optional TOML file.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// The address the server binds to.
    pub bind: String,
    /// The port the server listens on.
    pub port: u16,
    /// Whether to open a browser once the server is up.
    pub open_browser: bool,
    /// URL prefix under which icon images are served.
    pub icon_path: String,
    pub bounds: FilterBounds,
}

/// The nominal upper limit of each numeric facet. All lower limits are zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterBounds {
    pub rune_cost_max: u32,
    pub might_max: u32,
    pub power_max: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
            open_browser: true,
            icon_path: "/assets/icons".to_string(),
            bounds: FilterBounds::default(),
        }
    }
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            rune_cost_max: 12,
            might_max: 10,
            power_max: 4,
        }
    }
}

impl FilterBounds {
    pub fn rune_cost(&self) -> Span {
        Span::up_to(self.rune_cost_max)
    }

    pub fn might(&self) -> Span {
        Span::up_to(self.might_max)
    }

    pub fn power(&self) -> Span {
        Span::up_to(self.power_max)
    }
}

impl GalleryConfig {
    /// Loads the configuration file, or the defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                if !path.exists() {
                    return fail(format!("config file {} does not exist.", path.display()));
                }
                let content = read_to_string(path)?;
                let config: GalleryConfig = toml::from_str(&content)?;
                log::debug!("Loaded configuration from {}.", path.display());
                Ok(config)
            }
        }
    }

    /// The URL prefix for icons, without a trailing slash.
    pub fn icon_prefix(&self) -> &str {
        self.icon_path.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults_without_file() -> Fallible<()> {
        let config = GalleryConfig::load(None)?;
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.bounds.rune_cost(), Span::new(0, 12));
        assert_eq!(config.bounds.might(), Span::new(0, 10));
        assert_eq!(config.bounds.power(), Span::new(0, 4));
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("gallery.toml");
        write(
            &path,
            "port = 9000\nicon_path = \"/icons/\"\n\n[bounds]\nmight_max = 20\n",
        )?;
        let config = GalleryConfig::load(Some(&path))?;
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.icon_prefix(), "/icons");
        assert_eq!(config.bounds.might_max, 20);
        assert_eq!(config.bounds.rune_cost_max, 12);
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("gallery.toml");
        write(&path, "colour = \"red\"\n")?;
        assert!(GalleryConfig::load(Some(&path)).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = GalleryConfig::load(Some(Path::new("./derpherp.toml")));
        assert!(result.is_err());
    }
}
