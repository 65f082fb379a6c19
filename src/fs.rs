use crate::config::Config;
use crate::name::parse_directory_name;
use crate::types::{DirectoryNameFeatures, Outcome, RelocateError, Summary};
use eyre::{Result, WrapErr};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Files experiment directories under a single destination root.
#[derive(Debug, Clone)]
pub struct Relocator {
    destination_root: PathBuf,
    dry_run: bool,
}

impl Relocator {
    pub fn new<P: Into<PathBuf>>(destination_root: P, dry_run: bool) -> Self {
        Self {
            destination_root: destination_root.into(),
            dry_run,
        }
    }

    pub fn from_config(config: &Config, dry_run: bool) -> Self {
        Self::new(config.home_directory.clone(), dry_run)
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Work out where `source` should go and check that nothing is there yet.
    ///
    /// Fails with `MissingIdentifier` before looking at the filesystem when the
    /// name had no id. Never moves anything.
    pub fn plan_move(
        &self,
        source: &Path,
        features: &DirectoryNameFeatures,
    ) -> Result<PathBuf, RelocateError> {
        if features.id().is_empty() {
            return Err(RelocateError::MissingIdentifier {
                name: basename(source),
            });
        }

        let destination = self.destination_root.join(features.canonical_name());
        // symlink_metadata so that a dangling link still blocks the move
        match fs::symlink_metadata(&destination) {
            Ok(_) => return Err(RelocateError::DestinationExists(destination)),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(RelocateError::MoveFailed {
                    from: source.to_path_buf(),
                    to: destination,
                    source: e,
                });
            }
        }

        tracing::debug!(source = %source.display(), destination = %destination.display(), "planned move");
        Ok(destination)
    }

    /// Check, parse, plan and (unless dry-run) rename a single directory.
    pub fn relocate(&self, source: &Path) -> Result<Outcome, RelocateError> {
        if !source.is_dir() {
            return Err(RelocateError::NotADirectory(source.to_path_buf()));
        }

        let features = parse_directory_name(&basename(source));
        let destination = self.plan_move(source, &features)?;

        if self.dry_run {
            return Ok(Outcome::Planned {
                from: source.to_path_buf(),
                to: destination,
            });
        }

        fs::rename(source, &destination).map_err(|e| RelocateError::MoveFailed {
            from: source.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        Ok(Outcome::Moved {
            from: source.to_path_buf(),
            to: destination,
        })
    }
}

/// Run every path through `relocator`, logging each decision.
///
/// A failed item is logged and skipped; it never stops the rest of the batch.
/// Two inputs that normalize to the same name are not detected up front: the
/// first one wins and the second reports `DestinationExists`. Dry-run keeps
/// track of what it has already planned so it reports the same thing.
pub fn process_all<I, P>(relocator: &Relocator, paths: I) -> Summary
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut summary = Summary::default();
    let mut planned: HashSet<PathBuf> = HashSet::new();
    for path in paths {
        let path = path.as_ref();
        let result = relocator.relocate(path).and_then(|outcome| match outcome {
            Outcome::Planned { to, .. } if planned.contains(&to) => {
                Err(RelocateError::DestinationExists(to))
            }
            Outcome::Planned { from, to } => {
                planned.insert(to.clone());
                Ok(Outcome::Planned { from, to })
            }
            moved => Ok(moved),
        });
        match result {
            Ok(Outcome::Moved { from, to }) => {
                summary.moved += 1;
                tracing::info!(source = %from.display(), destination = %to.display(), "moved directory");
            }
            Ok(Outcome::Planned { from, to }) => {
                summary.planned += 1;
                tracing::info!(source = %from.display(), destination = %to.display(), "dry run: would move directory");
            }
            Err(e) => {
                summary.skipped += 1;
                tracing::error!(source = %path.display(), reason = e.kind(), "skipping: {e}");
            }
        }
    }
    summary
}

/// Read a list of directory paths, one per line.
///
/// Blank lines and lines starting with `#` are ignored; surrounding
/// whitespace is trimmed.
pub fn read_path_list(list_file: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(list_file)
        .wrap_err_with(|| format!("failed to read path list {}", list_file.display()))?;
    let paths: Vec<PathBuf> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect();
    tracing::debug!(file = %list_file.display(), count = paths.len(), "read path list");
    Ok(paths)
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
