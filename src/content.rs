use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Source of raw item content referenced by code block placeholders.
pub trait ContentLookup {
    /// Returns `Ok(None)` when no item exists at `path`.
    fn raw_content(&self, path: &str) -> Result<Option<String>>;
}

/// Items stored as files beneath a content root, addressed by `/`-rooted paths.
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    root: PathBuf,
}

impl DirectoryContent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

impl ContentLookup for DirectoryContent {
    fn raw_content(&self, path: &str) -> Result<Option<String>> {
        let Some(resolved) = self.resolve(path) else {
            return Ok(None);
        };
        if !resolved.is_file() {
            return Ok(None);
        }

        match fs::read_to_string(&resolved) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read content item {}", resolved.display())),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryContent {
    items: HashMap<String, String>,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.items.insert(path.into(), content.into());
    }
}

impl ContentLookup for MemoryContent {
    fn raw_content(&self, path: &str) -> Result<Option<String>> {
        Ok(self.items.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_content_reads_rooted_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("code")).expect("mkdir");
        fs::write(dir.path().join("code").join("main.rs"), "fn main() {}\n").expect("write");

        let lookup = DirectoryContent::new(dir.path());
        let content = lookup
            .raw_content("/code/main.rs")
            .expect("lookup should not fail");
        assert_eq!(content.as_deref(), Some("fn main() {}\n"));
    }

    #[test]
    fn directory_content_reports_missing_items_as_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        let lookup = DirectoryContent::new(dir.path());

        assert!(lookup.raw_content("/missing.rs").expect("lookup").is_none());
        assert!(lookup.raw_content("/").expect("lookup").is_none());
    }

    #[test]
    fn directory_content_refuses_parent_components() {
        let dir = tempfile::tempdir().expect("temp dir");
        let inner = dir.path().join("site");
        fs::create_dir_all(&inner).expect("mkdir");
        fs::write(dir.path().join("secret.txt"), "hidden").expect("write");

        let lookup = DirectoryContent::new(&inner);
        assert!(
            lookup
                .raw_content("/../secret.txt")
                .expect("lookup")
                .is_none()
        );
    }

    #[test]
    fn memory_content_returns_registered_items() {
        let lookup = MemoryContent::new().with_item("/a.txt", "alpha");
        assert_eq!(
            lookup.raw_content("/a.txt").expect("lookup").as_deref(),
            Some("alpha")
        );
        assert!(lookup.raw_content("/b.txt").expect("lookup").is_none());
    }
}
