//! Template stores.
//!
//! A store maps a stub key (`"form-open"`, `"text"`, ...) to its text. Stores
//! are read on every render call; nothing is cached.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Well-known stub keys.
pub mod names {
    pub const FORM_OPEN: &str = "form-open";
    pub const FORM_CLOSE: &str = "form-close";
    pub const TEXT: &str = "text";
    pub const SUBMIT: &str = "submit";
    pub const CSRF: &str = "_csrf";

    /// Every key the renderer loads.
    pub const ALL: [&str; 5] = [FORM_OPEN, FORM_CLOSE, TEXT, SUBMIT, CSRF];
}

/// Default stub extension for file-backed stores.
pub const DEFAULT_EXTENSION: &str = "stub";

/// Source of stub templates keyed by name.
pub trait TemplateStore: Send + Sync {
    /// Load the stub stored under `name`.
    ///
    /// Fails with [`TemplateError::NotFound`] when the key is absent.
    fn get(&self, name: &str) -> TemplateResult<String>;

    /// Keys this store can serve, sorted.
    fn names(&self) -> TemplateResult<Vec<String>>;
}

/// Stubs read from `<dir>/<name>.<extension>`.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    stubs_path: PathBuf,
    extension: String,
}

impl FileTemplateStore {
    /// Create a store over a stubs directory using the `.stub` extension.
    pub fn new(stubs_path: impl Into<PathBuf>) -> Self {
        Self {
            stubs_path: stubs_path.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn stubs_path(&self) -> &Path {
        &self.stubs_path
    }

    /// Path a stub key resolves to.
    pub fn stub_path(&self, name: &str) -> PathBuf {
        self.stubs_path.join(format!("{}.{}", name, self.extension))
    }
}

impl TemplateStore for FileTemplateStore {
    fn get(&self, name: &str) -> TemplateResult<String> {
        let path = self.stub_path(name);
        debug!("Loading stub {} from {:?}", name, path);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TemplateError::NotFound(name.to_string()))
            }
            Err(e) => Err(TemplateError::Io(e)),
        }
    }

    fn names(&self) -> TemplateResult<Vec<String>> {
        if !self.stubs_path.exists() {
            warn!("Stubs directory does not exist: {:?}", self.stubs_path);
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.stubs_path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches_ext = path
                .extension()
                .map_or(false, |ext| ext.to_string_lossy() == self.extension);
            if let (true, Some(stem)) = (matches_ext, path.file_stem()) {
                names.push(stem.to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Stubs held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    stubs: HashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the stubs shipped with this crate.
    pub fn builtin() -> Self {
        Self::new()
            .with(names::FORM_OPEN, include_str!("../stubs/form-open.stub"))
            .with(names::FORM_CLOSE, include_str!("../stubs/form-close.stub"))
            .with(names::CSRF, include_str!("../stubs/_csrf.stub"))
            .with(names::TEXT, include_str!("../stubs/text.stub"))
            .with(names::SUBMIT, include_str!("../stubs/submit.stub"))
    }

    /// Insert or replace a stub.
    pub fn insert(&mut self, name: impl Into<String>, stub: impl Into<String>) {
        self.stubs.insert(name.into(), stub.into());
    }

    pub fn with(mut self, name: impl Into<String>, stub: impl Into<String>) -> Self {
        self.insert(name, stub);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.stubs.remove(name)
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn get(&self, name: &str) -> TemplateResult<String> {
        self.stubs
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    fn names(&self) -> TemplateResult<Vec<String>> {
        let mut names: Vec<String> = self.stubs.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Two stores layered: `primary` wins, `fallback` serves keys it lacks.
///
/// Only [`TemplateError::NotFound`] falls through; any other primary error is
/// returned as is.
pub struct FallbackTemplateStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: TemplateStore, F: TemplateStore> FallbackTemplateStore<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: TemplateStore, F: TemplateStore> TemplateStore for FallbackTemplateStore<P, F> {
    fn get(&self, name: &str) -> TemplateResult<String> {
        match self.primary.get(name) {
            Err(e) if e.is_not_found() => {
                debug!("Stub {} not in primary store, using fallback", name);
                self.fallback.get(name)
            }
            other => other,
        }
    }

    fn names(&self) -> TemplateResult<Vec<String>> {
        let mut names = self.primary.names()?;
        names.extend(self.fallback.names()?);
        names.sort();
        names.dedup();
        Ok(names)
    }
}
