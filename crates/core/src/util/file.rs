//! Path helpers shared by pipes and host programs

use crate::config::constants::{HOME_ENV, YES_WORDS};
use crate::error::{DataProcError, Result};
use std::io::{BufRead, Write};
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` and make the path absolute
///
/// Relative paths are resolved against the current directory and `.`/`..`
/// components are folded lexically, without touching the filesystem.
pub fn path_expand(path: impl AsRef<Path>) -> Result<PathBuf> {
    let expanded = expand_home(path.as_ref())?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };
    Ok(normalize(&absolute))
}

/// Expanded path of an existing regular file
pub fn check_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path_expand(path)?;
    if !path.exists() {
        return Err(DataProcError::path(format!(
            "File '{}' does not exist",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(DataProcError::path(format!(
            "{} is not a file but a directory",
            path.display()
        )));
    }
    Ok(path)
}

/// Expanded path of an existing directory
pub fn check_directory(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path_expand(path)?;
    if !path.exists() {
        return Err(DataProcError::path(format!(
            "Directory '{}' does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(DataProcError::path(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(path)
}

/// Expanded path of a directory, created when missing
///
/// Unless `silent`, asks on stdin before creating anything.
pub fn get_directory(path: impl AsRef<Path>, silent: bool) -> Result<PathBuf> {
    let stdin = std::io::stdin();
    get_directory_with(path, silent, &mut stdin.lock(), &mut std::io::stderr())
}

/// [`get_directory`] with explicit prompt streams
pub fn get_directory_with<R: BufRead, W: Write>(
    path: impl AsRef<Path>,
    silent: bool,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    let dir_path = path_expand(path)?;
    if dir_path.is_dir() {
        return Ok(dir_path);
    }
    if dir_path.exists() {
        return Err(DataProcError::path(format!(
            "Another file already exists in {}",
            dir_path.display()
        )));
    }
    if !silent {
        write!(output, "Create directory({})? [y/N]", dir_path.display())?;
        output.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !YES_WORDS.contains(&answer.trim()) {
            return Err(DataProcError::path("Directory cannot be created."));
        }
    }
    std::fs::create_dir_all(&dir_path)?;
    Ok(dir_path)
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = std::env::var_os(HOME_ENV).ok_or_else(|| {
                DataProcError::path(format!("cannot expand '~': {HOME_ENV} is not set"))
            })?;
            Ok(PathBuf::from(home).join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // popping past the root leaves the root in place
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c/")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_path_expand_relative() {
        let expanded = path_expand("some/dir/..").unwrap();
        assert!(expanded.is_absolute());
        assert_eq!(expanded, std::env::current_dir().unwrap().join("some"));
    }

    #[test]
    fn test_path_expand_home() {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            let expanded = path_expand("~/data").unwrap();
            assert_eq!(expanded, normalize(&PathBuf::from(home).join("data")));
        }
    }

    #[test]
    fn test_check_file_and_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.conf");
        std::fs::write(&file, "").unwrap();

        assert_eq!(check_file(&file).unwrap(), file);
        assert!(check_file(tmp.path()).is_err());
        assert!(check_file(tmp.path().join("missing")).is_err());

        assert_eq!(check_directory(tmp.path()).unwrap(), tmp.path());
        assert!(check_directory(&file).is_err());
        assert!(check_directory(tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_get_directory_silent_creates() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("x/y");
        let created = get_directory(&target, true).unwrap();
        assert_eq!(created, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_get_directory_prompt() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("asked");
        let mut out = Vec::new();

        let refused = get_directory_with(&target, false, &mut Cursor::new("N\n"), &mut out);
        assert!(matches!(refused, Err(DataProcError::Path(_))));
        assert!(!target.exists());
        assert!(String::from_utf8_lossy(&out).contains("Create directory("));

        let accepted = get_directory_with(&target, false, &mut Cursor::new("y\n"), &mut out);
        assert!(accepted.is_ok());
        assert!(target.is_dir());
    }

    #[test]
    fn test_get_directory_rejects_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "").unwrap();
        assert!(get_directory(&file, true).is_err());
    }
}
