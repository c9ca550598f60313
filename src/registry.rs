// src/registry.rs
//
// Persistent name → id mapping. Ids are what downstream consumers hold on
// to, so they must survive the page adding, removing, or reordering gems.
//
// On disk it is a flat JSON object: { "Fireball": 1, "SUPPORT:Fireball": 2 }

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::consts::SUPPORT_KEY_PREFIX;
use crate::data::GemCategory;
use crate::error::{Error, IdsExhausted, Result};
use crate::file::ensure_parent;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GemIds {
    gems: BTreeMap<String, u32>,
}

impl GemIds {
    pub fn new() -> Self { Self::default() }

    /// Registry key for a gem: support gems get their own namespace, every
    /// other category shares the bare name.
    pub fn key(name: &str, category: GemCategory) -> Cow<'_, str> {
        match category {
            GemCategory::Support => Cow::Owned(format!("{SUPPORT_KEY_PREFIX}{name}")),
            _ => Cow::Borrowed(name),
        }
    }

    pub fn get(&self, name: &str, category: GemCategory) -> Option<u32> {
        self.gems.get(Self::key(name, category).as_ref()).copied()
    }

    /// Existing id for the key, or the next one after the current maximum.
    /// Fails without touching the registry once `u32::MAX` is in use.
    pub fn get_or_create_id(&mut self, name: &str, category: GemCategory) -> Result<u32, IdsExhausted> {
        let key = Self::key(name, category);
        if let Some(&id) = self.gems.get(key.as_ref()) {
            return Ok(id);
        }
        let id = match self.gems.values().max() {
            None => 1,
            Some(&max) => max
                .checked_add(1)
                .ok_or_else(|| IdsExhausted { key: key.clone().into_owned(), max })?,
        };
        logd!("new gem id {id} for {key:?}");
        self.gems.insert(key.into_owned(), id);
        Ok(id)
    }

    pub fn len(&self) -> usize { self.gems.len() }
    pub fn is_empty(&self) -> bool { self.gems.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.gems.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let ids: GemIds = serde_json::from_str(&text)
            .map_err(|source| Error::Registry { path: path.to_path_buf(), source })?;
        ids.validate()
            .map_err(|reason| Error::RegistryInvalid { path: path.to_path_buf(), reason })?;
        for id in ids.shared_ids() {
            logw!("{}: id {id} is used by more than one gem", path.display());
        }
        Ok(ids)
    }

    /// First run: no file yet, start empty.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            logf!("no registry at {}, starting empty", path.display());
            Ok(Self::new())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text).map_err(|e| Error::io(path, e))
    }

    /// Every id must be positive.
    fn validate(&self) -> std::result::Result<(), String> {
        match self.gems.iter().find(|&(_, &id)| id == 0) {
            Some((key, _)) => Err(format!("id for {key:?} must be positive")),
            None => Ok(()),
        }
    }

    /// Ids held by more than one key. Only a hand-edited file gets here; the
    /// gems behind them collapse into one record on extraction.
    pub fn shared_ids(&self) -> Vec<u32> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(self.gems.len());
        let mut shared: Vec<u32> = self.gems.values().copied().filter(|&id| !seen.insert(id)).collect();
        shared.sort_unstable();
        shared.dedup();
        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use GemCategory::*;

    fn tmp(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("poe2_gems_registry_{name}"));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn first_id_is_one_then_monotonic() {
        let mut ids = GemIds::new();
        assert_eq!(ids.get_or_create_id("Fireball", Skill).unwrap(), 1);
        assert_eq!(ids.get_or_create_id("Ice Nova", Skill).unwrap(), 2);
        assert_eq!(ids.get_or_create_id("Fireball", Skill).unwrap(), 1);
        assert_eq!(ids.get_or_create_id("Spark", Skill).unwrap(), 3);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn support_is_namespaced_spirit_is_not() {
        let mut ids = GemIds::new();
        let skill = ids.get_or_create_id("Fireball", Skill).unwrap();
        let support = ids.get_or_create_id("Fireball", Support).unwrap();
        let spirit = ids.get_or_create_id("Fireball", Spirit).unwrap();
        let meta = ids.get_or_create_id("Fireball", Meta).unwrap();

        assert_ne!(skill, support);
        assert_eq!(skill, spirit);
        assert_eq!(skill, meta);
        assert_eq!(ids.get("Fireball", Support), Some(support));
        assert!(ids.iter().any(|(k, v)| k == "SUPPORT:Fireball" && v == support));
    }

    #[test]
    fn allocates_after_max_not_after_len() {
        let mut ids: GemIds = serde_json::from_str(r#"{"A": 3, "B": 10}"#).unwrap();
        assert_eq!(ids.get_or_create_id("C", Skill).unwrap(), 11);
        assert_eq!(ids.get_or_create_id("A", Spirit).unwrap(), 3);
    }

    #[test]
    fn ids_stay_unique_over_many_keys() {
        let mut ids = GemIds::new();
        let mut last = 0;
        for i in 0..200 {
            let cat = if i % 3 == 0 { Support } else { Skill };
            let fresh = ids.get(&format!("gem {}", i % 150), cat).is_none();
            let id = ids.get_or_create_id(&format!("gem {}", i % 150), cat).unwrap();
            assert!(id > 0);
            if fresh {
                assert!(id > last);
                last = id;
            }
        }
        let distinct_ids: HashSet<u32> = ids.iter().map(|(_, v)| v).collect();
        assert_eq!(distinct_ids.len(), ids.len());
    }

    #[test]
    fn save_then_load_is_flat_object() {
        let dir = tmp("save_load");
        let path = dir.join("gem_ids.json");

        let mut ids = GemIds::new();
        ids.get_or_create_id("Fireball", Skill).unwrap();
        ids.get_or_create_id("Fireball", Support).unwrap();
        ids.save(&path).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"Fireball": 1, "SUPPORT:Fireball": 2}));

        let back = GemIds::load(&path).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn load_or_default_starts_empty_without_file() {
        let dir = tmp("missing");
        let ids = GemIds::load_or_default(&dir.join("nope.json")).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tmp("malformed");
        let path = dir.join("gem_ids.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GemIds::load(&path), Err(Error::Registry { .. })));

        fs::write(&path, r#"{"Fireball": "one"}"#).unwrap();
        assert!(matches!(GemIds::load(&path), Err(Error::Registry { .. })));

        fs::write(&path, r#"[1, 2]"#).unwrap();
        assert!(matches!(GemIds::load(&path), Err(Error::Registry { .. })));

        fs::write(&path, r#"{"Fireball": -1}"#).unwrap();
        assert!(matches!(GemIds::load(&path), Err(Error::Registry { .. })));
    }

    #[test]
    fn load_rejects_zero_id() {
        let dir = tmp("invalid");
        let path = dir.join("gem_ids.json");

        fs::write(&path, r#"{"Spark": 2, "Fireball": 0}"#).unwrap();
        assert!(matches!(GemIds::load(&path), Err(Error::RegistryInvalid { .. })));
    }

    #[test]
    fn allocation_past_u32_max_fails_and_leaves_registry_alone() {
        let dir = tmp("exhausted");
        let path = dir.join("gem_ids.json");
        fs::write(&path, r#"{"Old": 4294967295}"#).unwrap();

        let mut ids = GemIds::load(&path).unwrap();
        let err = ids.get_or_create_id("Fireball", Skill).unwrap_err();
        assert_eq!(err, IdsExhausted { key: s!("Fireball"), max: u32::MAX });
        assert_eq!(ids.get_or_create_id("Old", Spirit).unwrap(), u32::MAX);
        assert_eq!(ids.len(), 1);
        assert!(ids.get("Fireball", Skill).is_none());
    }

    #[test]
    fn load_tolerates_shared_ids_but_reports_them() {
        let dir = tmp("shared");
        let path = dir.join("gem_ids.json");

        fs::write(&path, r#"{"Fireball": 4, "SUPPORT:Fireball": 4, "Spark": 5}"#).unwrap();
        let mut ids = GemIds::load(&path).unwrap();
        assert_eq!(ids.shared_ids(), vec![4]);
        assert_eq!(ids.get_or_create_id("Ice Nova", Skill).unwrap(), 6);
    }
}
