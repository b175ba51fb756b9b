//! Seed-file discovery and priority scheduling.
//!
//! Discovery scans a fixed set of project-relative directories for files
//! whose names match the seed patterns (`seed_*.sql` / `*seed*.sql` — the
//! second subsumes the first, so matches are deduplicated by full path),
//! plus three explicitly named root-level curriculum files. The result is
//! sorted by filename, then ordered for execution: a fixed priority list
//! first, remaining files after, each file scheduled exactly once.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::SeedResult;

/// Project-relative directories scanned for seed files, in scan order.
/// The project root itself is scanned last.
pub const SEARCH_DIRS: &[&str] = &["project/supabase", "project"];

/// Root-level files always included when present, regardless of pattern.
pub const EXPLICIT_FILES: &[&str] = &[
    "FULL_CURRICULUM.sql",
    "CURRICULUM_FIXED.sql",
    "FIXED_LESSONS.sql",
];

/// Files executed before everything else, in exactly this order.
pub const PRIORITY_ORDER: &[&str] = &[
    "database_schema.sql",
    "FULL_CURRICULUM.sql",
    "seed_beginner_lessons.sql",
    "seed_code_challenges.sql",
    "seed_algorithm_problems.sql",
    "seed_project_templates.sql",
    "seed_all_lessons.sql",
    "seed_enhanced_lessons.sql",
];

/// A discovered seed file: full path plus derived filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SeedFile {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// True when a filename matches either seed glob pattern.
///
/// `*seed*.sql` subsumes `seed_*.sql`, so the union reduces to a single
/// substring check.
fn matches_seed_pattern(name: &str) -> bool {
    name.ends_with(".sql") && name.contains("seed")
}

/// Discover all seed files under `root`, sorted ascending by filename.
pub fn discover_seed_files(root: &Path) -> SeedResult<Vec<SeedFile>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files: Vec<SeedFile> = Vec::new();

    let mut dirs: Vec<PathBuf> = SEARCH_DIRS.iter().map(|d| root.join(d)).collect();
    dirs.push(root.to_path_buf());

    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if matches_seed_pattern(&name) && seen.insert(path.clone()) {
                files.push(SeedFile::new(path));
            }
        }
    }

    for name in EXPLICIT_FILES {
        let path = root.join(name);
        if path.is_file() && seen.insert(path.clone()) {
            files.push(SeedFile::new(path));
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Order discovered files for execution: priority names first (in the
/// fixed order of [`PRIORITY_ORDER`]), then all remaining files in their
/// sorted order. Every input file appears exactly once in the output.
pub fn schedule(files: Vec<SeedFile>) -> Vec<SeedFile> {
    let mut taken = vec![false; files.len()];
    let mut ordered: Vec<SeedFile> = Vec::with_capacity(files.len());

    for priority in PRIORITY_ORDER {
        let found = files
            .iter()
            .enumerate()
            .find(|(i, f)| !taken[*i] && f.name == *priority)
            .map(|(i, _)| i);

        if let Some(i) = found {
            taken[i] = true;
            ordered.push(files[i].clone());
        }
    }

    for (i, file) in files.into_iter().enumerate() {
        if !taken[i] {
            ordered.push(file);
        }
    }

    ordered
}
