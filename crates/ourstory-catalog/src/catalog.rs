//! Catalog: the configured packages and agent registry, loaded together

use crate::agents::AgentRegistry;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::package::FilePackage;
use ourstory_domain::{traits::DataPackage, Timeline};
use tracing::info;

/// Load every package in order, stopping at the first failure
pub fn load_packages<P>(packages: &[P]) -> std::result::Result<Vec<Timeline>, P::Error>
where
    P: DataPackage,
{
    packages.iter().map(|package| package.load()).collect()
}

/// Loaded timelines plus the optional agent registry
#[derive(Debug, Clone)]
pub struct Catalog {
    timelines: Vec<Timeline>,
    agents: Option<AgentRegistry>,
}

impl Catalog {
    /// Load everything named by the configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let packages: Vec<FilePackage> = config.packages.iter().map(FilePackage::new).collect();
        let timelines = load_packages(&packages)?;

        let agents = match &config.agents {
            Some(path) => Some(AgentRegistry::from_file(path)?),
            None => None,
        };

        info!(
            packages = timelines.len(),
            agents = agents.as_ref().map_or(0, |registry| registry.agents().len()),
            "Catalog loaded"
        );

        Ok(Self { timelines, agents })
    }

    /// Timelines, in configuration order
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// Take the timelines
    pub fn into_timelines(self) -> Vec<Timeline> {
        self.timelines
    }

    /// Agent registry, if one was configured
    pub fn agents(&self) -> Option<&AgentRegistry> {
        self.agents.as_ref()
    }
}
