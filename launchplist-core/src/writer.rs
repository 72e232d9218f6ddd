//! Reading and writing plist files on disk.
//!
//! Writes are atomic: serialize → `<name>.plist.tmp` sibling → `chmod 0644`
//! → `rename`. The temp file always lives next to the target, so the rename
//! never crosses filesystems.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::builder::LaunchPlist;
use crate::error::{io_err, LaunchError};

/// `<home>/Library/LaunchAgents` — pure, no I/O.
pub fn launch_agents_dir(home: &Path) -> PathBuf {
    home.join("Library").join("LaunchAgents")
}

/// `<dir>/<label>.plist` — pure, no I/O.
pub fn plist_path_at(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("{label}.plist"))
}

/// Write `plist` to exactly `path`, creating parent directories as needed.
pub fn write_plist_to(path: &Path, plist: &LaunchPlist) -> Result<(), LaunchError> {
    let xml = plist.build()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let mut tmp_name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, xml).map_err(|e| io_err(&tmp, e))?;
    set_file_permissions(&tmp)?;
    fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    tracing::info!(path = %path.display(), "wrote plist");
    Ok(())
}

/// Write `plist` to `<dir>/<Label>.plist` and return the path.
///
/// Returns [`LaunchError::MissingLabel`] when no `Label` is set.
pub fn write_plist_at(dir: &Path, plist: &LaunchPlist) -> Result<PathBuf, LaunchError> {
    let label = plist.label().ok_or(LaunchError::MissingLabel)?;
    let path = plist_path_at(dir, label);
    write_plist_to(&path, plist)?;
    Ok(path)
}

/// `write_plist_at` into the current user's `~/Library/LaunchAgents`.
pub fn write_launch_agent(plist: &LaunchPlist) -> Result<PathBuf, LaunchError> {
    write_plist_at(&launch_agents_dir(&home()?), plist)
}

/// Load an existing plist (XML or binary) as a pre-seeded builder.
pub fn read_plist(path: &Path) -> Result<LaunchPlist, LaunchError> {
    let bytes = fs::read(path).map_err(|e| io_err(path, e))?;
    let value = plist::Value::from_reader(Cursor::new(bytes))?;
    let record = value
        .into_dictionary()
        .ok_or_else(|| LaunchError::NotADictionary {
            path: path.to_path_buf(),
        })?;
    tracing::debug!(path = %path.display(), keys = record.len(), "read existing plist");
    Ok(LaunchPlist::with_record(record))
}

fn home() -> Result<PathBuf, LaunchError> {
    dirs::home_dir().ok_or(LaunchError::HomeNotFound)
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), LaunchError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), LaunchError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn labelled(label: &str) -> LaunchPlist {
        let mut p = LaunchPlist::new();
        p.set_label(label).expect("label");
        p
    }

    #[test]
    fn launch_agents_dir_is_under_library() {
        let home = Path::new("/Users/tester");
        assert_eq!(
            launch_agents_dir(home),
            PathBuf::from("/Users/tester/Library/LaunchAgents")
        );
    }

    #[test]
    fn write_uses_label_as_file_name() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_plist_at(dir.path(), &labelled("com.example.job")).expect("write");
        assert!(path.ends_with("com.example.job.plist"));
        assert!(path.exists());
    }

    #[test]
    fn write_cleans_up_tmp() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_plist_at(dir.path(), &labelled("com.example.job")).expect("write");
        assert!(!path.with_file_name("com.example.job.plist.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().expect("tempdir");
        let path = write_plist_at(dir.path(), &labelled("com.example.perm")).expect("write");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn write_without_label_fails() {
        let dir = TempDir::new().expect("tempdir");
        let err = write_plist_at(dir.path(), &LaunchPlist::new()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingLabel));
    }

    #[test]
    fn read_back_what_was_written() {
        let dir = TempDir::new().expect("tempdir");
        let mut p = labelled("com.example.rt");
        p.set_run_at_load(true).expect("bool");
        let path = write_plist_at(dir.path(), &p).expect("write");
        let back = read_plist(&path).expect("read");
        assert_eq!(back, p);
    }

    #[test]
    fn read_rejects_non_dictionary_root() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("array.plist");
        let mut buf = Vec::new();
        plist::to_writer_xml(&mut buf, &vec!["a", "b"]).expect("serialize");
        fs::write(&path, buf).expect("write");
        let err = read_plist(&path).unwrap_err();
        assert!(matches!(err, LaunchError::NotADictionary { .. }), "got: {err}");
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = read_plist(&dir.path().join("nope.plist")).unwrap_err();
        assert!(matches!(err, LaunchError::Io { .. }));
    }
}
