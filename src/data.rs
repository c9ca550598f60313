// src/data.rs
//
// Gem records and the set they accumulate into during one run.
//
// - Gem:     one output record. Everything but `categories` is fixed when the
//            gem is first seen; later sightings only add a category.
// - GemSet:  id → Gem, kept in first-seen order so the JSON array follows
//            the page.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownValue;

/// Coarse colour/kind of a gem, taken from the class on the icon cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GemType {
    #[serde(rename = "gem_red")]
    Red,
    #[serde(rename = "gem_green")]
    Green,
    #[serde(rename = "gem_blue")]
    Blue,
    /// Hybrid or item-granted
    #[serde(rename = "gemitem")]
    Special,
}

impl GemType {
    pub const ALL: [GemType; 4] = [GemType::Red, GemType::Green, GemType::Blue, GemType::Special];

    pub fn as_str(&self) -> &'static str {
        match self {
            GemType::Red => "gem_red",
            GemType::Green => "gem_green",
            GemType::Blue => "gem_blue",
            GemType::Special => "gemitem",
        }
    }
}

impl FromStr for GemType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "gem type", value: s!(s) })
    }
}

impl fmt::Display for GemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which section of the page a gem was listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemCategory {
    Skill,
    Support,
    /// Declared for consumers; no section is scraped for it yet.
    Meta,
    Spirit,
}

impl GemCategory {
    pub const ALL: [GemCategory; 4] = [
        GemCategory::Skill,
        GemCategory::Support,
        GemCategory::Meta,
        GemCategory::Spirit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GemCategory::Skill => "skill",
            GemCategory::Support => "support",
            GemCategory::Meta => "meta",
            GemCategory::Spirit => "spirit",
        }
    }
}

impl FromStr for GemCategory {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GemCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "gem category", value: s!(s) })
    }
}

impl fmt::Display for GemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gem {
    pub id: u32,
    pub name: String,
    pub icon_url: String,
    pub level: u32,
    pub tags: BTreeSet<String>,
    pub categories: BTreeSet<GemCategory>,
    pub type_basic: GemType,
}

impl Gem {
    /// A support gem must not be listed under any other section.
    pub fn is_bad_support(&self) -> bool {
        self.categories.contains(&GemCategory::Support) && self.categories.len() != 1
    }
}

/// Gems accumulated over one extraction, keyed by id, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct GemSet {
    gems: Vec<Gem>,
    index: HashMap<u32, usize>,
}

impl GemSet {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.gems.len() }
    pub fn is_empty(&self) -> bool { self.gems.is_empty() }

    pub fn get(&self, id: u32) -> Option<&Gem> {
        self.index.get(&id).map(|&i| &self.gems[i])
    }

    /// Insert a first sighting. Returns false (and keeps the existing record)
    /// if the id is already present.
    pub fn insert(&mut self, gem: Gem) -> bool {
        if self.index.contains_key(&gem.id) {
            return false;
        }
        self.index.insert(gem.id, self.gems.len());
        self.gems.push(gem);
        true
    }

    /// Record another sighting of a known gem. Only the category set grows.
    pub fn add_category(&mut self, id: u32, category: GemCategory) -> bool {
        match self.index.get(&id) {
            Some(&i) => {
                self.gems[i].categories.insert(category);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gem> { self.gems.iter() }

    pub fn as_slice(&self) -> &[Gem] { &self.gems }

    /// Support gems that also carry another category.
    pub fn support_violations(&self) -> Vec<&Gem> {
        self.gems.iter().filter(|g| g.is_bad_support()).collect()
    }
}
