//! Global config snapshot.
//!
//! Uses `arc-swap` for lock-free reads. The snapshot is written once at
//! startup and, optionally, once more when CLI overrides are applied;
//! both happen before any conversion begins.

use crate::config::Tex2AnyConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<Tex2AnyConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(Tex2AnyConfig::default()));

#[inline]
pub fn cfg() -> Arc<Tex2AnyConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: Tex2AnyConfig) -> Arc<Tex2AnyConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// In-memory overrides from the command line (never persisted).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub copyright_year: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.author_name.is_none() && self.author_email.is_none() && self.copyright_year.is_none()
    }

    /// Apply to a config value.
    pub fn apply_to(&self, config: &mut Tex2AnyConfig) {
        if let Some(name) = &self.author_name {
            config.author.name.clone_from(name);
        }
        if let Some(email) = &self.author_email {
            config.author.email.clone_from(email);
        }
        if let Some(year) = &self.copyright_year {
            config.footer.copyright_year.clone_from(year);
        }
    }
}

/// Replace the global snapshot with one carrying `overrides`.
pub fn apply_overrides(overrides: &ConfigOverrides) -> Arc<Tex2AnyConfig> {
    if overrides.is_empty() {
        return cfg();
    }
    let mut config = (*cfg()).clone();
    overrides.apply_to(&mut config);
    init_config(config)
}
