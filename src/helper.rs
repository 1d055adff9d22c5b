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

use std::fs::copy;
use std::path::PathBuf;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::domain::DomainTag;
use crate::types::rarity::Rarity;

/// A plain common fury unit with the given id.
pub fn card(id: &str) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Card {id}"),
        rarity: Rarity::Common,
        card_type: "unit".to_string(),
        rune_cost: 2,
        might: 2,
        power_cost: 0,
        description: String::new(),
        image_url: String::new(),
        domain: vec![DomainTag::parse("fury")],
        set: "OGN".to_string(),
        card_number: String::new(),
        artist: String::new(),
        tags: Vec::new(),
        is_foil: false,
    }
}

pub fn fixture_catalog_path() -> PathBuf {
    PathBuf::from("./test/cards.json")
}

/// Copies the fixture catalog into a fresh temporary directory. The directory
/// is deleted when the returned guard is dropped.
pub fn create_tmp_copy_of_fixture() -> Fallible<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let target = dir.path().join("cards.json");
    copy(fixture_catalog_path(), &target)?;
    Ok((dir, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_copy_of_fixture() -> Fallible<()> {
        let (_dir, path) = create_tmp_copy_of_fixture()?;
        assert!(path.exists());
        Ok(())
    }
}
