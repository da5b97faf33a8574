use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ProductctlError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Produces the backup location for a file about to be overwritten.
pub type BackupNamer = fn(&Path) -> PathBuf;

/// `<unix-seconds>.<basename>` next to the original file.
pub fn timestamped_backup_path(path: &Path) -> PathBuf {
    let basename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{}.{}", chrono::Utc::now().timestamp(), basename);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// LazyOverwriter adapter for rewriting an input file in place
///
/// The destination is left alone until `present` is called, which commands
/// only do once every remote call has succeeded. With backups enabled the
/// current content is copied aside before the file is truncated.
pub struct LazyOverwriter {
    path: PathBuf,
    backup: bool,
    backup_namer: BackupNamer,
}

impl LazyOverwriter {
    pub fn new(path: PathBuf, backup: bool) -> Self {
        Self {
            path,
            backup,
            backup_namer: timestamped_backup_path,
        }
    }

    pub fn with_backup_namer(mut self, namer: BackupNamer) -> Self {
        self.backup_namer = namer;
        self
    }

    fn write_error(&self, details: impl Into<String>) -> ProductctlError {
        ProductctlError::FileWriteError {
            path: self.path.clone(),
            details: details.into(),
        }
    }

    fn backup_current(&self) -> Result<()> {
        let backup_path = (self.backup_namer)(&self.path);
        tracing::debug!(
            path = %self.path.display(),
            backup = %backup_path.display(),
            "backing up declaration before overwrite"
        );
        fs::copy(&self.path, &backup_path).map_err(|e| ProductctlError::BackupError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

impl OutputPresenter for LazyOverwriter {
    fn present(&self, content: &str) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write").map_err(|e| self.write_error(e.to_string()))?;
            if self.backup {
                self.backup_current()?;
            }
        } else {
            validate_parent_directory(&self.path)?;
        }

        fs::write(&self.path, content).map_err(|e| self.write_error(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "declaration written");
        Ok(())
    }
}

/// NewFileWriter adapter for scaffolding files
///
/// Refuses to replace anything that already exists at the destination.
pub struct NewFileWriter {
    path: PathBuf,
}

impl NewFileWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputPresenter for NewFileWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_parent_directory(&self.path)?;

        let write_file = || -> io::Result<()> {
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&self.path)?;
            file.write_all(content.as_bytes())?;
            file.flush()
        };
        write_file().map_err(|e| ProductctlError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Output complete: {}", self.path.display());
        Ok(())
    }
}

fn validate_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(ProductctlError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }
    Ok(())
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixed_backup(path: &Path) -> PathBuf {
        path.with_file_name("backup.product.yaml")
    }

    #[test]
    fn test_overwrite_without_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.yaml");
        fs::write(&path, "old").unwrap();

        LazyOverwriter::new(path.clone(), false)
            .with_backup_namer(fixed_backup)
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_dir.path().join("backup.product.yaml").exists());
    }

    #[test]
    fn test_overwrite_with_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.yaml");
        fs::write(&path, "old").unwrap();

        LazyOverwriter::new(path.clone(), true)
            .with_backup_namer(fixed_backup)
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("backup.product.yaml")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_backup_failure_leaves_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.yaml");
        fs::write(&path, "old").unwrap();

        fn unreachable_backup(path: &Path) -> PathBuf {
            path.with_file_name("missing-dir").join("backup.yaml")
        }

        let err = LazyOverwriter::new(path.clone(), true)
            .with_backup_namer(unreachable_backup)
            .present("new")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProductctlError>(),
            Some(ProductctlError::BackupError { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.yaml");
        fs::write(&target, "old").unwrap();
        let link = temp_dir.path().join("product.yaml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = LazyOverwriter::new(link, false).present("new");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    }

    #[test]
    fn test_timestamped_backup_path() {
        let backup = timestamped_backup_path(Path::new("/work/product.yaml"));

        assert_eq!(backup.parent(), Some(Path::new("/work")));
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        let (seconds, rest) = name.split_once('.').unwrap();
        assert!(seconds.parse::<i64>().unwrap() > 0);
        assert_eq!(rest, "product.yaml");
    }

    #[test]
    fn test_new_file_writer_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.yaml");

        NewFileWriter::new(path.clone()).present("kind: ProductListing\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kind: ProductListing\n");
    }

    #[test]
    fn test_new_file_writer_refuses_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product.yaml");
        fs::write(&path, "keep me").unwrap();

        let err = NewFileWriter::new(path.clone()).present("new").unwrap_err();

        assert!(err.to_string().contains("Failed to write to file"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_new_file_writer_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("product.yaml");

        let err = NewFileWriter::new(path).present("x").unwrap_err();

        assert!(err.to_string().contains("Parent directory does not exist"));
    }
}
