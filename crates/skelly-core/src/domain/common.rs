use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative** and to stay below the
/// directory it is joined onto.
///
/// Folder lists come from strategies and, for custom architectures, straight
/// from the user. Every entry goes through this type before materialization so
/// that a stray `/etc` or `../..` can never leave the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Try to create a relative path.
    ///
    /// Rejects empty input, absolute paths and any `..` component.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(DomainError::PathEscapesRoot { path: display });
        }

        Ok(Self(path))
    }

    /// Wrap a literal folder known to be valid (strategy constants).
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert!(Self::try_new(path).is_ok(), "invalid folder literal: {path}");
        Self(PathBuf::from(path))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
