use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::progress::ProgressReporter;

/// Extensions recognised as graph description files
const GRAPH_EXTENSIONS: &[&str] = &["toml", "json"];

/// Finds graph description files below a set of paths
pub struct GraphDiscovery {
    found: BTreeSet<PathBuf>,
}

impl Default for GraphDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDiscovery {
    pub fn new() -> Self {
        Self {
            found: BTreeSet::new(),
        }
    }

    /// Collect graph files from files, directories and glob patterns.
    ///
    /// Explicit files are kept whatever their extension. Missing paths and
    /// bad patterns produce a warning and are skipped. The result is sorted
    /// and free of duplicates.
    pub fn discover_all(
        mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        for path in paths {
            if path.is_file() {
                self.found.insert(path.clone());
            } else if path.is_dir() {
                self.discover_in_dir(path, progress);
            } else if is_glob(path) {
                self.discover_glob(path, progress);
            } else {
                eprintln!(
                    "{} Path '{}' does not exist",
                    style("⚠").yellow(),
                    path.display()
                );
            }
        }

        self.found.into_iter().collect()
    }

    fn discover_in_dir(&mut self, dir: &Path, progress: Option<&ProgressReporter>) {
        let files = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                name != "target" && name != ".git" && name != "node_modules"
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && has_graph_extension(e.path()))
            .map(|e| e.into_path());

        for file in files {
            if let Some(p) = progress {
                p.checking_file(&file);
            }
            self.found.insert(file);
        }
    }

    fn discover_glob(&mut self, pattern: &Path, progress: Option<&ProgressReporter>) {
        let pattern = pattern.to_string_lossy();
        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    style("⚠").yellow(),
                    pattern,
                    e
                );
                return;
            }
        };

        let mut matched = false;
        for path in entries.flatten() {
            matched = true;
            if path.is_dir() {
                self.discover_in_dir(&path, progress);
            } else if has_graph_extension(&path) {
                if let Some(p) = progress {
                    p.checking_file(&path);
                }
                self.found.insert(path);
            }
        }

        if !matched {
            eprintln!(
                "{} Pattern '{}' matched nothing",
                style("⚠").yellow(),
                pattern
            );
        }
    }
}

fn is_glob(path: &Path) -> bool {
    path.to_string_lossy()
        .contains(|c| matches!(c, '*' | '?' | '['))
}

fn has_graph_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            GRAPH_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
