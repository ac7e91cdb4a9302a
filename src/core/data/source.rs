use std::collections::{BTreeMap, BTreeSet};

/// A source view loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Stable identifier used in findings (absolute file path).
    pub id: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A blank key literal, e.g. `t('  ')`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MalformedUsage {
    pub literal: String,
    pub source: String,
}

/// Usages extracted from one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUsages {
    pub source: String,
    /// Literal key paths.
    pub keys: BTreeSet<String>,
    /// Namespace prefixes, always ending with `.` (e.g. `errors.`).
    pub namespaces: BTreeSet<String>,
    /// Blank literals.
    pub malformed: BTreeSet<String>,
}

impl FileUsages {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }
}

/// Usages across every source unit, keyed by key path or namespace prefix.
///
/// Each key maps to the sorted set of source units referencing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSet {
    pub keys: BTreeMap<String, BTreeSet<String>>,
    pub namespaces: BTreeMap<String, BTreeSet<String>>,
    pub malformed: BTreeSet<MalformedUsage>,
}

impl UsageSet {
    pub fn add_file(&mut self, usages: FileUsages) {
        let FileUsages {
            source,
            keys,
            namespaces,
            malformed,
        } = usages;

        for key in keys {
            self.keys.entry(key).or_default().insert(source.clone());
        }
        for prefix in namespaces {
            self.namespaces
                .entry(prefix)
                .or_default()
                .insert(source.clone());
        }
        self.malformed
            .extend(malformed.into_iter().map(|literal| MalformedUsage {
                literal,
                source: source.clone(),
            }));
    }
}

impl FromIterator<FileUsages> for UsageSet {
    fn from_iter<I: IntoIterator<Item = FileUsages>>(iter: I) -> Self {
        let mut set = UsageSet::default();
        for usages in iter {
            set.add_file(usages);
        }
        set
    }
}
