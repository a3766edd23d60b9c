//! Folder materialization: directories plus `.gitkeep` markers.

use std::path::Path;
use tracing::{debug, warn};

use crate::application::ports::Filesystem;
use crate::application::report::{BuildIssue, BuildStage};
use crate::domain::RelativePath;

/// Marker that keeps otherwise empty directories under version control.
pub const KEEP_FILE: &str = ".gitkeep";

/// Create every folder below `root`, each with an empty marker file.
///
/// Existing folders are fine. A failing folder is recorded and the rest are
/// still attempted. Returns how many folders ended up in place.
pub(crate) fn materialize_folders(
    filesystem: &dyn Filesystem,
    root: &Path,
    folders: &[RelativePath],
    issues: &mut Vec<BuildIssue>,
) -> usize {
    let mut created = 0;

    for folder in folders {
        let dir = root.join(folder);
        let result = filesystem
            .create_dir_all(&dir)
            .and_then(|()| filesystem.write_file(&dir.join(KEEP_FILE), ""));

        match result {
            Ok(()) => {
                debug!(folder = %folder, "Materialized folder");
                created += 1;
            }
            Err(error) => {
                warn!(folder = %folder, %error, "Failed to materialize folder");
                issues.push(BuildIssue {
                    stage: BuildStage::Folders,
                    error,
                });
            }
        }
    }

    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use std::path::PathBuf;

    #[test]
    fn continues_after_a_failing_folder() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("locked") {
                Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_write_file()
            .withf(|path, content| path.ends_with(KEEP_FILE) && content.is_empty())
            .times(2)
            .returning(|_, _| Ok(()));

        let folders: Vec<_> = ["a", "locked", "b"]
            .into_iter()
            .map(|f| RelativePath::try_new(f).unwrap())
            .collect();
        let mut issues = Vec::new();

        let created = materialize_folders(&fs, &PathBuf::from("/p"), &folders, &mut issues);

        assert_eq!(created, 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].stage, BuildStage::Folders);
    }
}
