//! Purpose: Define the fixed registry file table shared by the CLI and tests.
//! Exports: `RegistryFile`, `REGISTRY_FILES`, `DEFAULT_REGISTRY_DIR`.
//! Role: Keep the converted file set auditable in one place instead of scattered literals.
//! Invariants: Table order is the processing and report order.
//! Invariants: Source and destination filenames share one stem per entry.

use std::path::{Path, PathBuf};

pub const DEFAULT_REGISTRY_DIR: &str = "registry";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegistryFile {
    pub name: &'static str,
    pub source: &'static str,
    pub dest: &'static str,
}

impl RegistryFile {
    pub fn source_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.source)
    }

    pub fn dest_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.dest)
    }
}

pub const REGISTRY_FILES: &[RegistryFile] = &[
    RegistryFile {
        name: "adapters",
        source: "adapters.yaml",
        dest: "adapters.json",
    },
    RegistryFile {
        name: "capabilities",
        source: "capabilities.yaml",
        dest: "capabilities.json",
    },
    RegistryFile {
        name: "policy",
        source: "policy.yaml",
        dest: "policy.json",
    },
    RegistryFile {
        name: "result_profiles",
        source: "result_profiles.yaml",
        dest: "result_profiles.json",
    },
    RegistryFile {
        name: "ui",
        source: "ui.yaml",
        dest: "ui.json",
    },
];

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{REGISTRY_FILES, RegistryFile};

    #[test]
    fn table_order_is_stable() {
        let names = REGISTRY_FILES
            .iter()
            .map(|file| file.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            ["adapters", "capabilities", "policy", "result_profiles", "ui"]
        );
    }

    #[test]
    fn filenames_share_one_stem_per_entry() {
        for file in REGISTRY_FILES {
            assert_eq!(file.source, format!("{}.yaml", file.name));
            assert_eq!(file.dest, format!("{}.json", file.name));
        }
    }

    #[test]
    fn paths_join_under_the_registry_dir() {
        let file = RegistryFile {
            name: "policy",
            source: "policy.yaml",
            dest: "policy.json",
        };
        let dir = Path::new("registry");
        assert_eq!(file.source_path(dir), Path::new("registry/policy.yaml"));
        assert_eq!(file.dest_path(dir), Path::new("registry/policy.json"));
    }
}
