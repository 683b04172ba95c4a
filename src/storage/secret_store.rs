//! Storage for the persisted signing secret.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{Error, Result};
use crate::infra::config::{self, KeyConfig};

/// Where the keypair's numeric array lives between runs.
pub trait SecretStore: Send + Sync {
    /// The raw `[b0,...,b63]` record, or `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<String>>;

    /// Persists the raw record. Called at most once per run, only after generation.
    fn persist(&self, raw: &str) -> Result<()>;
}

/// Process environment first, then the `.env` file itself.
///
/// Reading the file loads its entries into the process environment; variables already set
/// are not overridden.
///
/// New records are appended to the file as `PRIVATE_KEY=[...]`, creating it if absent.
pub struct EnvFileSecretStore {
    config: KeyConfig,
}

impl EnvFileSecretStore {
    pub fn new(config: KeyConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.env_file
    }

    fn load_from_file(&self) -> Result<Option<String>> {
        if !self.config.env_file.exists() {
            return Ok(None);
        }
        dotenv::from_path(&self.config.env_file)
            .map_err(|e| Error::deserialization(format!("{:?}: {}", self.config.env_file, e)))?;
        Ok(config::private_key(&self.config.var_name))
    }
}

impl SecretStore for EnvFileSecretStore {
    fn load(&self) -> Result<Option<String>> {
        match config::private_key(&self.config.var_name) {
            Some(raw) => Ok(Some(raw)),
            None => self.load_from_file(),
        }
    }

    fn persist(&self, raw: &str) -> Result<()> {
        let needs_newline = match std::fs::read(&self.config.env_file) {
            Ok(existing) => !existing.is_empty() && !existing.ends_with(b"\n"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.env_file)?;
        if needs_newline {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{}={}", self.config.var_name, raw)?;
        Ok(())
    }
}

/// In-memory store; counts writes so tests can assert on persistence.
#[derive(Default)]
pub struct MemorySecretStore {
    secret: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(raw: impl Into<String>) -> Self {
        Self {
            secret: Mutex::new(Some(raw.into())),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current record; `None` also when the lock is poisoned (see `load` for the error).
    pub fn secret(&self) -> Option<String> {
        self.load().ok().flatten()
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.secret
            .lock()
            .map_err(|_| Error::Io(std::io::Error::other("secret store lock poisoned")))
    }
}

impl SecretStore for MemorySecretStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot()?.clone())
    }

    fn persist(&self, raw: &str) -> Result<()> {
        let mut slot = self.slot()?;
        *slot = Some(raw.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
