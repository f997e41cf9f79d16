//! OurStory Catalog
//!
//! Loads hand-authored data packages and the research-agent registry.
//!
//! - Packages are `.json` or `.toml` files. Events cite sources by id and
//!   are checked on load (unique ids, resolvable sources, sane confidence).
//! - [`FilePackage`] implements [`ourstory_domain::traits::DataPackage`].
//! - [`AgentRegistry`] is built once and answers lookups by id, codename
//!   and specialization.
//!
//! # Examples
//!
//! ```no_run
//! use ourstory_catalog::{Catalog, CatalogConfig};
//!
//! let config = CatalogConfig {
//!     packages: vec!["data/ancient-civilizations.json".into()],
//!     agents: None,
//! };
//! let catalog = Catalog::from_config(&config)?;
//! println!("{} timelines", catalog.timelines().len());
//! # Ok::<(), ourstory_catalog::CatalogError>(())
//! ```

#![warn(missing_docs)]

pub mod agents;
mod catalog;
mod config;
pub mod error;
pub mod package;

pub use agents::{AgentRegistry, AgentSpecialization, AgentTopic, InvestigationStatus, ResearchTopic, StoryAgent};
pub use catalog::{load_packages, Catalog};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use package::{FilePackage, PackageDocument, PackageFormat};
