//! File-backed data packages
//!
//! A package file holds one topic's sources and events. Events cite sources
//! by id; loading resolves those ids to shared [`Source`] handles and checks
//! the package before it reaches the engine.

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use ourstory_domain::{
    traits::DataPackage, Contradiction, ContradictionType, DateRange, HistoricalEvent, Location,
    Severity, Source, Timeline, MAX_CONFIDENCE,
};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// On-disk encoding of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl PackageFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(PackageFormat::Json),
            "toml" => Some(PackageFormat::Toml),
            _ => None,
        }
    }
}

/// A package document as written by data authors
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDocument {
    /// Timeline id
    pub id: String,

    /// Timeline name
    pub name: String,

    /// Timeline description
    #[serde(default)]
    pub description: String,

    /// Creation time; load time when absent
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update; creation time when absent
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Source records
    #[serde(default)]
    pub sources: Vec<Source>,

    /// Event records
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

/// An event whose sources are named by id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Event id
    pub id: String,

    /// Title
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Dating
    pub date_range: DateRange,

    /// Ids of cited sources
    pub sources: Vec<String>,

    /// Location
    #[serde(default)]
    pub location: Option<Location>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Related event ids
    #[serde(default)]
    pub related_events: Option<Vec<String>>,

    /// Author-embedded contradictions
    #[serde(default)]
    pub contradictions: Option<Vec<ContradictionRecord>>,
}

/// An embedded contradiction whose sources are named by id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionRecord {
    /// Contradiction id
    pub id: String,

    /// Event concerned; defaults to the enclosing event
    #[serde(default)]
    pub event_id: Option<String>,

    /// Conflicting event
    #[serde(default)]
    pub conflicting_event_id: Option<String>,

    /// Description
    pub description: String,

    /// Ids of cited sources
    #[serde(default)]
    pub sources: Vec<String>,

    /// Kind of inconsistency
    #[serde(rename = "type")]
    pub contradiction_type: ContradictionType,

    /// Severity
    pub severity: Severity,
}

impl PackageDocument {
    /// Parse a document from text in the given format
    pub fn parse(contents: &str, format: PackageFormat) -> Result<Self> {
        let document = match format {
            PackageFormat::Json => serde_json::from_str(contents)?,
            PackageFormat::Toml => toml::from_str(contents)?,
        };
        Ok(document)
    }

    /// Read and parse a document, picking the format from the extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = PackageFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, format)
    }

    /// Validate the document and resolve source references
    ///
    /// Rejects duplicate source or event ids, events with no sources,
    /// unresolved source ids and confidences above 100. Related-event ids
    /// are not checked.
    pub fn into_timeline(self) -> Result<Timeline> {
        let mut sources: Vec<Arc<Source>> = Vec::with_capacity(self.sources.len());
        let mut by_id: HashMap<String, Arc<Source>> = HashMap::new();

        for source in self.sources {
            if by_id.contains_key(&source.id) {
                return Err(CatalogError::DuplicateSource {
                    package: self.id,
                    id: source.id,
                });
            }
            let source = Arc::new(source);
            by_id.insert(source.id.clone(), Arc::clone(&source));
            sources.push(source);
        }

        let mut event_ids: HashSet<String> = HashSet::new();
        let mut events = Vec::with_capacity(self.events.len());

        for record in self.events {
            if !event_ids.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateEvent {
                    package: self.id,
                    id: record.id,
                });
            }
            events.push(record.resolve(&by_id)?);
        }

        for event in &events {
            if !event.start().is_valid() {
                warn!(
                    "Event '{}' in '{}' has an unparseable start date: {}",
                    event.id, self.id, event.date_range.start
                );
            }
            for related in event.related_events.iter().flatten() {
                if !event_ids.contains(related) {
                    debug!("Event '{}' links to '{}' outside package '{}'", event.id, related, self.id);
                }
            }
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let updated_at = self.updated_at.unwrap_or(created_at);

        debug!(
            "Resolved package '{}': {} events, {} sources",
            self.id,
            events.len(),
            sources.len()
        );

        Ok(Timeline {
            id: self.id,
            name: self.name,
            description: self.description,
            events,
            sources,
            created_at,
            updated_at,
        })
    }
}

impl EventRecord {
    fn resolve(self, sources: &HashMap<String, Arc<Source>>) -> Result<HistoricalEvent> {
        if self.sources.is_empty() {
            return Err(CatalogError::NoSources { event: self.id });
        }
        if self.date_range.confidence > MAX_CONFIDENCE {
            return Err(CatalogError::InvalidConfidence {
                event: self.id,
                confidence: self.date_range.confidence,
            });
        }

        let cited = resolve_sources(&self.id, &self.sources, sources)?;

        let contradictions = match self.contradictions {
            Some(records) => Some(
                records
                    .into_iter()
                    .map(|record| record.resolve(&self.id, sources))
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(HistoricalEvent {
            id: self.id,
            title: self.title,
            description: self.description,
            date_range: self.date_range,
            sources: cited,
            location: self.location,
            tags: self.tags,
            related_events: self.related_events,
            contradictions,
        })
    }
}

impl ContradictionRecord {
    fn resolve(self, event: &str, sources: &HashMap<String, Arc<Source>>) -> Result<Contradiction> {
        Ok(Contradiction {
            sources: resolve_sources(event, &self.sources, sources)?,
            id: self.id,
            event_id: self.event_id.unwrap_or_else(|| event.to_string()),
            conflicting_event_id: self.conflicting_event_id,
            description: self.description,
            contradiction_type: self.contradiction_type,
            severity: self.severity,
        })
    }
}

fn resolve_sources(
    event: &str,
    ids: &[String],
    sources: &HashMap<String, Arc<Source>>,
) -> Result<Vec<Arc<Source>>> {
    ids.iter()
        .map(|id| {
            sources.get(id).cloned().ok_or_else(|| CatalogError::UnknownSource {
                event: event.to_string(),
                source_id: id.clone(),
            })
        })
        .collect()
}

/// A data package stored in a single `.json` or `.toml` file
///
/// The package id is the file stem.
#[derive(Debug, Clone)]
pub struct FilePackage {
    id: String,
    path: PathBuf,
}

impl FilePackage {
    /// Create a package handle for a file (nothing is read yet)
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { id, path }
    }

    /// Path of the package file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataPackage for FilePackage {
    type Error = CatalogError;

    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Timeline> {
        let timeline = PackageDocument::from_file(&self.path)?.into_timeline()?;
        info!(
            package = %self.id,
            timeline = %timeline.id,
            events = timeline.events.len(),
            sources = timeline.sources.len(),
            "Package loaded"
        );
        Ok(timeline)
    }
}
