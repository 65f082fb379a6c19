use std::fmt;
use std::path::{Path, PathBuf};

/// The pieces recognized in an experiment directory name.
///
/// Every field is always a string; a piece that was not found is the empty
/// string rather than `None`. Instances are produced by
/// [`parse_directory_name`](crate::name::parse_directory_name) and are read-only
/// afterwards.
///
/// # Examples
///
/// ```rust
/// use scpbal_janitor::parse_directory_name;
///
/// let features = parse_directory_name("PX1234_20200101_extra-info");
/// assert_eq!(features.id(), "px1234");
/// assert_eq!(features.date(), "20200101");
/// assert_eq!(features.extra(), "extra-info");
/// assert_eq!(features.canonical_name(), "px1234_20200101_extra-info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNameFeatures {
    id: String,
    date: String,
    extra: String,
}

impl DirectoryNameFeatures {
    /// Build a feature record from already-normalized parts.
    ///
    /// No validation is performed; this exists so callers can construct
    /// records directly (mostly useful in tests).
    pub fn new(id: impl Into<String>, date: impl Into<String>, extra: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            extra: extra.into(),
        }
    }

    /// Lowercased experiment ID (`px` + digits), or `""`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Eight digit date, or `""`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whatever was left of the name once ID and date were removed, or `""`.
    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Join the non-empty parts with `_` in the order id, date, extra.
    ///
    /// Empty parts are omitted entirely, so `{px1234, "", foo}` becomes
    /// `px1234_foo`.
    pub fn canonical_name(&self) -> String {
        [self.id.as_str(), self.date.as_str(), self.extra.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// How a single directory was dealt with when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The directory was renamed to `to`.
    Moved { from: PathBuf, to: PathBuf },
    /// Dry-run: the directory would have been renamed to `to`.
    Planned { from: PathBuf, to: PathBuf },
}

impl Outcome {
    /// Destination the directory ended up at (or would have).
    pub fn destination(&self) -> &Path {
        match self {
            Outcome::Moved { to, .. } | Outcome::Planned { to, .. } => to,
        }
    }
}

/// Reasons a single directory is skipped.
///
/// None of these are fatal for a batch; the caller logs them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum RelocateError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no experiment id found in directory name {name:?}")]
    MissingIdentifier { name: String },

    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to move {} to {}: {source}", .from.display(), .to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RelocateError {
    /// Short machine-friendly label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            RelocateError::NotADirectory(_) => "not_a_directory",
            RelocateError::MissingIdentifier { .. } => "missing_identifier",
            RelocateError::DestinationExists(_) => "destination_exists",
            RelocateError::MoveFailed { .. } => "move_failed",
        }
    }
}

/// Tally of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub moved: usize,
    pub planned: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.moved + self.planned + self.skipped
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moved, {} planned, {} skipped",
            self.moved, self.planned, self.skipped
        )
    }
}
