use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::maybe::Maybe;

/// Per-application directories for data, local data, and caches. Directories are [`Absent`](crate::Absent) when
/// the platform does not provide a home directory.
#[derive(Default, Clone, Debug)]
pub struct Storage {
  project_directories: Maybe<ProjectDirs>,
}
impl Storage {
  pub fn new(application: &str) -> Self {
    let project_directories = ProjectDirs::from("", "perhaps", application).into();
    Self { project_directories }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DirectoryKind {
  Data,
  LocalData,
  Cache,
}
impl Storage {
  pub fn directory(&self, kind: DirectoryKind) -> Maybe<&Path> {
    self.project_directories.as_ref().map(|project_directories| match kind {
      DirectoryKind::Data => project_directories.data_dir(),
      DirectoryKind::LocalData => project_directories.data_local_dir(),
      DirectoryKind::Cache => project_directories.cache_dir(),
    })
  }

  pub fn file(&self, kind: DirectoryKind, file_path: impl AsRef<Path>) -> Maybe<PathBuf> {
    self.directory(kind).map(|directory| directory.join(file_path))
  }
  #[inline]
  pub fn local_data_file(&self, file_path: impl AsRef<Path>) -> Maybe<PathBuf> {
    self.file(DirectoryKind::LocalData, file_path)
  }
}
