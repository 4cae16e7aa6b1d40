//! Run-wide usage statistics.
//!
//! `UsageStats` is the single piece of state shared across all per-file
//! analyses. Per-file work produces pure event lists (see
//! `crate::core::analyzer`) that are folded in here; folding is commutative
//! on counts and a set union on provenance files, so the final totals do not
//! depend on file discovery order.

use std::collections::HashMap;

use indexmap::IndexSet;

/// Identifies one exported component of a tracked library.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKey {
    pub library: String,
    pub component: String,
}

impl ComponentKey {
    pub fn new(library: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            component: component.into(),
        }
    }
}

/// Accumulated counters and provenance for one component.
///
/// `files` holds the distinct paths that imported the component, in first
/// insertion order. Files that only render (never import) a component cannot
/// reach here, since usage resolution requires an import binding in the same
/// file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentStat {
    pub import_count: u32,
    pub usage_count: u32,
    pub files: IndexSet<String>,
}

/// Run-scoped aggregate keyed by (library, component).
///
/// Entries are created lazily on first import and never removed.
#[derive(Debug, Default)]
pub struct UsageStats {
    stats: HashMap<ComponentKey, ComponentStat>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one matched named-import specifier found in `file`.
    pub fn record_import(&mut self, key: ComponentKey, file: &str) {
        let stat = self.stats.entry(key).or_default();
        stat.import_count += 1;
        stat.files.insert(file.to_string());
    }

    /// Record one resolved JSX usage.
    ///
    /// A resolved usage implies an import binding in the same file, so the
    /// entry normally already exists; creating it here keeps the fold total
    /// instead of panicking on a malformed event stream.
    pub fn record_usage(&mut self, key: ComponentKey) {
        self.stats.entry(key).or_default().usage_count += 1;
    }

    /// Fold another aggregate into this one.
    ///
    /// Counts add and file sets union, so merging partial aggregates from a
    /// parallel run yields the same totals in any order.
    pub fn merge(&mut self, other: UsageStats) {
        for (key, stat) in other.stats {
            let entry = self.stats.entry(key).or_default();
            entry.import_count += stat.import_count;
            entry.usage_count += stat.usage_count;
            entry.files.extend(stat.files);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn get(&self, key: &ComponentKey) -> Option<&ComponentStat> {
        self.stats.get(key)
    }

    /// Finalize into the immutable report consumed by emitters.
    ///
    /// Rows are sorted by (library, component) and each file list by path,
    /// making the report identical across runs regardless of file discovery
    /// or worker scheduling order.
    pub fn into_report(self) -> UsageReport {
        let mut rows: Vec<ComponentRow> = self
            .stats
            .into_iter()
            .map(|(key, stat)| {
                let mut files: Vec<String> = stat.files.into_iter().collect();
                files.sort();
                ComponentRow {
                    library: key.library,
                    component: key.component,
                    import_count: stat.import_count,
                    usage_count: stat.usage_count,
                    files,
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            (a.library.as_str(), a.component.as_str()).cmp(&(b.library.as_str(), b.component.as_str()))
        });
        UsageReport { rows }
    }
}

/// One finalized report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRow {
    pub library: String,
    pub component: String,
    pub import_count: u32,
    pub usage_count: u32,
    pub files: Vec<String>,
}

impl ComponentRow {
    pub fn is_used(&self) -> bool {
        self.usage_count > 0
    }
}

/// Immutable snapshot of all component statistics for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReport {
    pub rows: Vec<ComponentRow>,
}

impl UsageReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with at least one resolved usage.
    pub fn used_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_used()).count()
    }
}
