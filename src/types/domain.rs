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
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ErrorReport;
use crate::error::fail;

/// Colour used for anything that has no entry in a colour table.
pub const FALLBACK_COLOR: &str = "#667eea";

/// The six card domains.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Domain {
    Fury,
    Calm,
    Mind,
    Body,
    Chaos,
    Order,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Fury,
        Domain::Calm,
        Domain::Mind,
        Domain::Body,
        Domain::Chaos,
        Domain::Order,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Fury => "fury",
            Domain::Calm => "calm",
            Domain::Mind => "mind",
            Domain::Body => "body",
            Domain::Chaos => "chaos",
            Domain::Order => "order",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Fury => "Fury",
            Domain::Calm => "Calm",
            Domain::Mind => "Mind",
            Domain::Body => "Body",
            Domain::Chaos => "Chaos",
            Domain::Order => "Order",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Domain::Fury => "#ff000b",
            Domain::Calm => "#25c300",
            Domain::Mind => "#00a2ff",
            Domain::Body => "#ff8100",
            Domain::Chaos => "#8100ff",
            Domain::Order => "#ffd600",
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match Domain::ALL.iter().find(|d| d.as_str() == lower) {
            Some(domain) => Ok(*domain),
            None => fail(format!("unknown domain: {s:?}")),
        }
    }
}

/// One entry of a card's `domain` list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DomainTag {
    Known(Domain),
    /// The `all` sentinel: the card matches every domain selection.
    All,
    /// A name outside the known set. It never matches a domain filter.
    Unknown(String),
}

impl DomainTag {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            DomainTag::All
        } else {
            match s.parse::<Domain>() {
                Ok(domain) => DomainTag::Known(domain),
                Err(_) => DomainTag::Unknown(s.to_string()),
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DomainTag::Known(domain) => domain.as_str(),
            DomainTag::All => "all",
            DomainTag::Unknown(name) => name,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DomainTag::Known(domain) => domain.color(),
            DomainTag::All | DomainTag::Unknown(_) => FALLBACK_COLOR,
        }
    }
}

impl Display for DomainTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DomainTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DomainTag::parse(&s))
    }
}
