use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use pirenea_core::error::PireneaError;
use pirenea_core::setup::{SetupCode, PREFIX_MARKER};

pub mod notice;
pub mod report;

pub use notice::{ConsoleSink, NoticeSink, RenameNotice};
pub use report::{PrefixReport, TaggedCount};

/// Renames acquisition files under a PIRENEA data tree, adding or stripping
/// the `<code>_` setup tag. Holds the validated root for its lifetime; the
/// tree itself is the only state, re-read on every pass.
#[derive(Debug)]
pub struct PrefixManager {
    root: PathBuf,
}

impl PrefixManager {
    /// Opens a manager over an existing data tree. The resolved path must
    /// mention both PIRENEA and DATA, a guard against pointing the renamer
    /// at an unrelated tree.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(PireneaError::InvalidDataRoot(format!(
                "{} is not a directory",
                root.display()
            ))
            .into());
        }
        let root = fs::canonicalize(root)
            .with_context(|| format!("resolve data root {}", root.display()))?;
        let text = root.to_string_lossy().to_uppercase();
        if !text.contains("PIRENEA") || !text.contains("DATA") {
            return Err(PireneaError::InvalidDataRoot(format!(
                "{} does not look like a PIRENEA data directory",
                root.display()
            ))
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Prepends `<code>_` to every untagged file under the root,
    /// recursively. Directory names are never touched.
    pub fn add_prefix(&self, code: SetupCode, sink: &mut dyn NoticeSink) -> Result<()> {
        let prefix = code.file_prefix();
        for path in self.collect_files()? {
            let name = leaf_name(&path);
            // Coarse check: any name starting with the marker letter counts
            // as tagged, even when the tag is a different setup code.
            if name.starts_with(PREFIX_MARKER) {
                sink.notice(RenameNotice::AlreadyTagged { name });
            } else {
                let target = path.with_file_name(format!("{prefix}{name}"));
                fs::rename(&path, &target)
                    .with_context(|| format!("rename {}", path.display()))?;
            }
        }
        Ok(())
    }

    /// Strips the leading `<code>_` tag from every file that carries it.
    /// Only the leading occurrence is removed; a code string recurring later
    /// in the name stays in place.
    pub fn remove_prefix(&self, code: SetupCode, sink: &mut dyn NoticeSink) -> Result<()> {
        let prefix = code.file_prefix();
        for path in self.collect_files()? {
            let name = leaf_name(&path);
            match name.strip_prefix(&prefix) {
                Some(rest) => {
                    let target = path.with_file_name(rest);
                    fs::rename(&path, &target)
                        .with_context(|| format!("rename {}", path.display()))?;
                }
                None => sink.notice(RenameNotice::NotTagged { name, code }),
            }
        }
        Ok(())
    }

    /// Walks the tree without mutating and reports how many files carry
    /// each setup tag.
    pub fn scan(&self) -> Result<PrefixReport> {
        let mut report = PrefixReport::new(self.root.clone());
        for path in self.collect_files()? {
            report.record(&leaf_name(&path));
        }
        Ok(report)
    }

    /// Collects every file up front so renamed entries are not revisited by
    /// the walker mid-pass.
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        Ok(files)
    }
}

fn leaf_name(path: &Path) -> String {
    path.file_name()
        .map(|value| value.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_data_tree() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("PIRENEA").join("DATA_1");
        fs::create_dir_all(root.join("2017_12_13")).unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("2017_12_13").join("b.dat"), "b").unwrap();
        (temp, root)
    }

    #[test]
    fn test_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = PrefixManager::new(temp.path().join("PIRENEA/DATA_1")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PireneaError>(),
            Some(PireneaError::InvalidDataRoot(_))
        ));
    }

    #[test]
    fn test_rejects_root_without_marker_tokens() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("somewhere_else");
        fs::create_dir_all(&root).unwrap();
        let err = PrefixManager::new(&root).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PireneaError>(),
            Some(PireneaError::InvalidDataRoot(_))
        ));
    }

    #[test]
    fn test_add_prefix_tags_files_recursively() {
        let (_temp, root) = create_data_tree();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.add_prefix(SetupCode::P0, &mut notices).unwrap();

        assert!(root.join("P0_a.txt").is_file());
        assert!(root.join("2017_12_13").join("P0_b.dat").is_file());
        assert!(!root.join("a.txt").exists());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let (_temp, root) = create_data_tree();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.add_prefix(SetupCode::P1, &mut notices).unwrap();
        manager.remove_prefix(SetupCode::P1, &mut notices).unwrap();

        assert!(root.join("a.txt").is_file());
        assert!(root.join("2017_12_13").join("b.dat").is_file());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_add_skips_marker_named_file() {
        let (_temp, root) = create_data_tree();
        fs::write(root.join("P9weird.txt"), "w").unwrap();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.add_prefix(SetupCode::P0, &mut notices).unwrap();

        // Marker letter alone is enough to skip, even with an unknown code.
        assert!(root.join("P9weird.txt").is_file());
        assert!(!root.join("P0_P9weird.txt").exists());
        assert_eq!(
            notices,
            vec![RenameNotice::AlreadyTagged {
                name: "P9weird.txt".to_string()
            }]
        );
    }

    #[test]
    fn test_remove_reports_untagged_file() {
        let (_temp, root) = create_data_tree();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.remove_prefix(SetupCode::P2, &mut notices).unwrap();

        assert!(root.join("a.txt").is_file());
        assert!(notices.contains(&RenameNotice::NotTagged {
            name: "a.txt".to_string(),
            code: SetupCode::P2,
        }));
        assert_eq!(notices.len(), 2);
    }

    #[test]
    fn test_add_twice_is_idempotent() {
        let (_temp, root) = create_data_tree();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.add_prefix(SetupCode::P0, &mut notices).unwrap();
        manager.add_prefix(SetupCode::P0, &mut notices).unwrap();

        assert!(root.join("P0_a.txt").is_file());
        assert!(!root.join("P0_P0_a.txt").exists());
        // Second pass only reports, one notice per file.
        assert_eq!(notices.len(), 2);
        assert!(notices
            .iter()
            .all(|notice| matches!(notice, RenameNotice::AlreadyTagged { .. })));
    }

    #[test]
    fn test_remove_keeps_recurring_code_in_name() {
        let (_temp, root) = create_data_tree();
        fs::write(root.join("P0_run_P0_cold.dat"), "r").unwrap();
        let manager = PrefixManager::new(&root).unwrap();
        let mut notices = Vec::new();

        manager.remove_prefix(SetupCode::P0, &mut notices).unwrap();

        assert!(root.join("run_P0_cold.dat").is_file());
        assert!(!root.join("P0_run_P0_cold.dat").exists());
    }

    #[test]
    fn test_scan_counts_tagged_and_untagged() {
        let (_temp, root) = create_data_tree();
        fs::write(root.join("P1_cold.dat"), "c").unwrap();
        fs::write(root.join("P9weird.txt"), "w").unwrap();
        let manager = PrefixManager::new(&root).unwrap();

        let report = manager.scan().unwrap();

        assert_eq!(report.total_files, 4);
        let p1 = report
            .tagged
            .iter()
            .find(|entry| entry.code == SetupCode::P1)
            .unwrap();
        assert_eq!(p1.files, 1);
        assert_eq!(report.marker_only, 1);
        assert_eq!(report.untagged, 2);
    }
}
