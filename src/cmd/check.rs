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

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Fallible;

pub fn check_catalog(path: &Path) -> Fallible<()> {
    let _ = Catalog::load(path)?;
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::path::PathBuf;

    use super::check_catalog;
    use crate::error::Fallible;
    use crate::helper::create_tmp_copy_of_fixture;
    use crate::helper::fixture_catalog_path;

    #[test]
    fn test_non_existent_catalog() {
        assert!(check_catalog(&PathBuf::from("./derpherp.json")).is_err());
    }

    #[test]
    fn test_fixture() {
        assert!(check_catalog(&fixture_catalog_path()).is_ok());
    }

    #[test]
    fn test_invalid_catalog() -> Fallible<()> {
        let (_dir, path) = create_tmp_copy_of_fixture()?;
        write(&path, r#"[{"id": "A"}]"#)?;
        assert!(check_catalog(&path).is_err());
        Ok(())
    }
}
