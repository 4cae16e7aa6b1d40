//! Project manifest (package.json) metadata.
//!
//! Independent of the AST scan: reports which declared dependencies are
//! adjacent to the tracked libraries, so the report can say what the project
//! claims to depend on even when nothing is imported. A missing or unreadable
//! manifest degrades to an "unknown project" sentinel rather than failing
//! the run.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::TrackedLibraries;

pub const MANIFEST_FILE_NAME: &str = "package.json";

const UNKNOWN_PROJECT: &str = "unknown project";

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// One declared dependency relevant to the audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedDependency {
    pub name: String,
    pub version: String,
}

/// Manifest-derived project metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Declared dependencies that are tracked or share a tracked scope.
    pub tracked_dependencies: Vec<TrackedDependency>,
}

impl ProjectInfo {
    /// Sentinel used when the manifest cannot be read or parsed.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_PROJECT.to_string(),
            version: None,
            tracked_dependencies: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_PROJECT
    }
}

/// Read `<root>/package.json` and extract tracked-adjacent dependencies.
///
/// Never fails: read and parse errors substitute the unknown-project
/// sentinel, matching the per-file failure isolation of the scan itself.
pub fn read_project_info(root: &Path, tracked: &TrackedLibraries) -> ProjectInfo {
    let path = root.join(MANIFEST_FILE_NAME);
    let Ok(content) = fs::read_to_string(&path) else {
        return ProjectInfo::unknown();
    };
    let Ok(manifest) = serde_json::from_str::<PackageJson>(&content) else {
        return ProjectInfo::unknown();
    };

    // One row per package; a `dependencies` entry shadows a devDependencies
    // one for the same name.
    let mut by_name: BTreeMap<&String, &String> = BTreeMap::new();
    for (name, version) in manifest
        .dev_dependencies
        .iter()
        .chain(manifest.dependencies.iter())
        .filter(|(name, _)| is_tracked_adjacent(name, tracked))
    {
        by_name.insert(name, version);
    }
    let tracked_dependencies: Vec<TrackedDependency> = by_name
        .into_iter()
        .map(|(name, version)| TrackedDependency {
            name: name.clone(),
            version: version.clone(),
        })
        .collect();

    ProjectInfo {
        name: manifest.name.unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
        version: manifest.version,
        tracked_dependencies,
    }
}

/// A dependency counts as tracked-adjacent when it is a tracked library
/// itself or shares the npm scope of one (`@scope/...`).
fn is_tracked_adjacent(name: &str, tracked: &TrackedLibraries) -> bool {
    if tracked.contains(name) {
        return true;
    }
    tracked.iter().any(|lib| {
        lib.starts_with('@')
            && lib
                .split_once('/')
                .is_some_and(|(scope, _)| name.starts_with(scope) && name[scope.len()..].starts_with('/'))
    })
}
