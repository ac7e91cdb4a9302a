//! Unified key model merging usages and declarations.
//!
//! One [`KeyRecord`] exists per key path in the union of used and declared
//! keys. The index performs no classification; see [`crate::rules`].

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
};

use crate::{
    config::RulesConfig,
    core::data::{AllLanguages, LanguageEntry, MalformedUsage, UsageSet},
};

/// Everything known about one key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub key: String,
    /// Declaring languages and their values.
    pub languages: BTreeMap<String, LanguageEntry>,
    /// Source units referencing the key, directly or through a namespace.
    pub used_in: BTreeSet<String>,
    /// Listed in `ignoredKeys`.
    pub ignored: bool,
}

impl KeyRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            languages: BTreeMap::new(),
            used_in: BTreeSet::new(),
            ignored: false,
        }
    }

    pub fn is_used(&self) -> bool {
        !self.used_in.is_empty()
    }

    pub fn is_declared(&self) -> bool {
        !self.languages.is_empty()
    }

    pub fn declared_languages(&self) -> impl Iterator<Item = &String> {
        self.languages.keys()
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    pub records: BTreeMap<String, KeyRecord>,
    /// Every loaded language, including languages declaring nothing.
    pub languages: Vec<String>,
    pub malformed: Vec<MalformedUsage>,
}

impl KeyIndex {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&KeyRecord> {
        self.records.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyRecord> {
        self.records.values()
    }
}

/// Merge usages and declared keys into a [`KeyIndex`].
///
/// With deep search enabled, namespace usages mark every declared key under
/// the prefix as used, and a plain literal that is undeclared but has
/// declared children (`t('welcome')` with `welcome.title`) counts as the
/// namespace `welcome.`. Without it, namespaces are dropped.
pub fn build_key_index(usages: &UsageSet, languages: &AllLanguages, rules: &RulesConfig) -> KeyIndex {
    let mut records: BTreeMap<String, KeyRecord> = BTreeMap::new();

    for (language, messages) in languages {
        for (key, entry) in &messages.entries {
            records
                .entry(key.clone())
                .or_insert_with(|| KeyRecord::new(key))
                .languages
                .insert(language.clone(), entry.clone());
        }
    }

    // Decide namespaces while `records` only holds declared keys.
    let deep_search = rules.is_deep_search();
    let mut namespaces: Vec<(String, &BTreeSet<String>)> = Vec::new();
    let mut plain: Vec<(&String, &BTreeSet<String>)> = Vec::new();

    for (key, sources) in &usages.keys {
        let parent_prefix = format!("{}.", key);
        if deep_search && !records.contains_key(key) && has_prefix(&records, &parent_prefix) {
            namespaces.push((parent_prefix, sources));
        } else {
            plain.push((key, sources));
        }
    }

    if deep_search {
        namespaces.extend(
            usages
                .namespaces
                .iter()
                .map(|(prefix, sources)| (prefix.clone(), sources)),
        );
    }

    for (prefix, sources) in &namespaces {
        for (_, record) in prefix_range_mut(&mut records, prefix) {
            record.used_in.extend(sources.iter().cloned());
        }
    }

    for (key, sources) in plain {
        records
            .entry(key.clone())
            .or_insert_with(|| KeyRecord::new(key))
            .used_in
            .extend(sources.iter().cloned());
    }

    for record in records.values_mut() {
        record.ignored = rules.is_ignored(&record.key);
    }

    KeyIndex {
        records,
        languages: languages.keys().cloned().collect(),
        malformed: usages.malformed.iter().cloned().collect(),
    }
}

fn has_prefix(records: &BTreeMap<String, KeyRecord>, prefix: &str) -> bool {
    records
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .next()
        .is_some_and(|(key, _)| key.starts_with(prefix))
}

fn prefix_range_mut<'a>(
    records: &'a mut BTreeMap<String, KeyRecord>,
    prefix: &'a str,
) -> impl Iterator<Item = (&'a String, &'a mut KeyRecord)> {
    records
        .range_mut::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(move |(key, _)| key.starts_with(prefix))
}
