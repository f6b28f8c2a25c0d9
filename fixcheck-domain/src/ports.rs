use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;

/// Location of the layout component relative to the tool's own directory.
pub const DEFAULT_TARGET_REL: &str = "../../src/components/layout/LayoutManager.ts";

/// Read-only access to the single file under inspection.
///
/// Validation goes through this so tests can substitute an in-memory target.
pub trait TargetSource {
    fn path(&self) -> &Utf8Path;

    fn exists(&self) -> bool;

    /// Full contents as text. Invalid UTF-8 is decoded lossily, never rejected.
    fn read_to_string(&self) -> std::io::Result<String>;
}

/// File-system backed `TargetSource`.
#[derive(Debug, Clone)]
pub struct FsTarget {
    path: Utf8PathBuf,
}

impl FsTarget {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl TargetSource for FsTarget {
    fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read_to_string(&self) -> std::io::Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Join `rel` onto `anchor`. Absolute paths are returned unchanged; nothing is canonicalized.
pub fn resolve_target(anchor: &Utf8Path, rel: &Utf8Path) -> Utf8PathBuf {
    if rel.is_absolute() {
        rel.to_path_buf()
    } else {
        anchor.join(rel)
    }
}
