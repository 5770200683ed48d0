use crate::knowledge::docs::Domain;
use anyhow::Context;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainFileError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid domain document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only catalog of domain documentation, bulk-loaded once at startup.
///
/// Domains keep the order their files were loaded in (file name order), which
/// is what downstream tie-breaking relies on. Nothing mutates the store after
/// `load`, so shared references can be read concurrently without locking.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    domains: IndexMap<String, Domain>,
}

impl KnowledgeStore {
    /// Load every `*.json` domain document in `dir`.
    ///
    /// A file that fails to read or parse is logged and skipped; the rest of
    /// the directory still loads. A missing directory yields an empty store.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut store = Self::default();

        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "domain data directory not found");
            return Ok(store);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("read domain data directory: {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            match load_domain_file(&path) {
                Ok(domain) => {
                    tracing::info!(domain = %domain.name, "loaded domain");
                    store.domains.insert(domain.name.clone(), domain);
                }
                Err(err) => {
                    tracing::warn!(file = %path.display(), error = %err, "skipping malformed domain file");
                }
            }
        }

        Ok(store)
    }

    pub fn from_domains(domains: Vec<Domain>) -> Self {
        Self {
            domains: domains.into_iter().map(|d| (d.name.clone(), d)).collect(),
        }
    }

    /// Domain names in declaration (load) order.
    pub fn domain_names(&self) -> Vec<String> {
        self.domains.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Domain> {
        self.domains.get(name)
    }

    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.values()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// `"domain.table"` identifiers whose table name or description contains
    /// `query`, case-insensitive.
    pub fn search_tables(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for domain in self.domains.values() {
            for table in &domain.tables {
                if table.name.to_lowercase().contains(&needle)
                    || table.description.to_lowercase().contains(&needle)
                {
                    results.push(format!("{}.{}", domain.name, table.name));
                }
            }
        }

        results
    }
}

fn load_domain_file(path: &Path) -> Result<Domain, DomainFileError> {
    let raw = std::fs::read_to_string(path)?;
    let domain: Domain = serde_json::from_str(&raw)?;
    Ok(domain)
}
