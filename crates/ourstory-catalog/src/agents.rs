//! Research agents and their registry
//!
//! Agents are curated profiles: a specialization, preferred source kinds and
//! a list of research topics. The registry is built once and read-only.

use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use ourstory_domain::{DateRange, SourceReliability, SourceType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Area an agent specializes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentSpecialization {
    /// Intelligence agencies and covert programs
    IntelligenceOperations,
    /// Banking and monetary systems
    FinancialSystems,
    /// Lost civilizations and forbidden archaeology
    AncientMysteries,
    /// Religious institutions and texts
    ReligiousSecrets,
    /// Fraternal orders and secret societies
    SecretSocieties,
    /// UFO programs and disclosure
    UfoDisclosure,
    /// Political assassinations
    PoliticalAssassinations,
    /// Staged or provoked incidents
    FalseFlagOperations,
    /// Medical and pharmaceutical cover-ups
    MedicalCoverups,
    /// Military incidents
    MilitaryIncidents,
}

impl AgentSpecialization {
    /// All specializations, in declaration order
    pub const ALL: [AgentSpecialization; 10] = [
        AgentSpecialization::IntelligenceOperations,
        AgentSpecialization::FinancialSystems,
        AgentSpecialization::AncientMysteries,
        AgentSpecialization::ReligiousSecrets,
        AgentSpecialization::SecretSocieties,
        AgentSpecialization::UfoDisclosure,
        AgentSpecialization::PoliticalAssassinations,
        AgentSpecialization::FalseFlagOperations,
        AgentSpecialization::MedicalCoverups,
        AgentSpecialization::MilitaryIncidents,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentSpecialization::IntelligenceOperations => "intelligence_operations",
            AgentSpecialization::FinancialSystems => "financial_systems",
            AgentSpecialization::AncientMysteries => "ancient_mysteries",
            AgentSpecialization::ReligiousSecrets => "religious_secrets",
            AgentSpecialization::SecretSocieties => "secret_societies",
            AgentSpecialization::UfoDisclosure => "ufo_disclosure",
            AgentSpecialization::PoliticalAssassinations => "political_assassinations",
            AgentSpecialization::FalseFlagOperations => "false_flag_operations",
            AgentSpecialization::MedicalCoverups => "medical_coverups",
            AgentSpecialization::MilitaryIncidents => "military_incidents",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|spec| spec.as_str() == s)
    }
}

impl FromStr for AgentSpecialization {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid specialization: {}", s))
    }
}

/// Research methods an agent applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchMethodology {
    /// Close reading of documents
    DocumentAnalysis,
    /// Witness interviews and testimony
    WitnessTestimony,
    /// Cross-case pattern finding
    PatternRecognition,
    /// Rebuilding the order of events
    TimelineReconstruction,
    /// Confirming claims across independent sources
    SourceTriangulation,
    /// Following declassification releases
    DeclassificationTracking,
    /// Physical evidence analysis
    ForensicAnalysis,
    /// Mapping people and organizations
    NetworkMapping,
}

/// State of an investigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestigationStatus {
    /// Actively researched
    Active,
    /// Open with no recent progress
    Ongoing,
    /// Some questions answered
    PartiallyResolved,
    /// Evidence suppressed
    CoveredUp,
    /// Records released
    Declassified,
    /// Officially denied
    OfficiallyDenied,
}

impl InvestigationStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Active => "active",
            InvestigationStatus::Ongoing => "ongoing",
            InvestigationStatus::PartiallyResolved => "partially_resolved",
            InvestigationStatus::CoveredUp => "covered_up",
            InvestigationStatus::Declassified => "declassified",
            InvestigationStatus::OfficiallyDenied => "officially_denied",
        }
    }
}

/// Kind of a referenced document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Released by the originating agency
    Declassified,
    /// Released without authorization
    Leaked,
    /// Official publication
    Official,
    /// Sworn or recorded testimony
    Testimony,
    /// Scholarly work
    Academic,
    /// Journalistic investigation
    Investigative,
}

/// A person involved in a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFigure {
    /// Identifier
    pub id: String,
    /// Name
    pub name: String,
    /// Role in the events
    pub role: String,
    /// Affiliated organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Nationality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Period of activity, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_active: Option<String>,
    /// Notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A document cited by a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    /// Identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Kind of document
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Classification level at release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_level: Option<String>,
    /// Release date, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Where the document comes from
    pub source: String,
    /// Link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Key findings
    #[serde(default)]
    pub key_findings: Vec<String>,
}

/// A subject an agent investigates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchTopic {
    /// Identifier
    pub id: String,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Period covered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// Investigation status
    pub status: InvestigationStatus,
    /// The accepted account
    pub official_narrative: String,
    /// Competing accounts
    #[serde(default)]
    pub alternative_theories: Vec<String>,
    /// Evidence items
    #[serde(default)]
    pub key_evidence: Vec<String>,
    /// Documents
    #[serde(default)]
    pub documents: Vec<DocumentReference>,
    /// People involved
    #[serde(default)]
    pub key_figures: Vec<KeyFigure>,
    /// Related topic ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_topics: Option<Vec<String>>,
    /// Known contradictions, free text
    #[serde(default)]
    pub contradictions: Vec<String>,
    /// Open questions
    #[serde(default)]
    pub unanswered_questions: Vec<String>,
}

/// A research agent profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryAgent {
    /// Identifier
    pub id: String,
    /// Name
    pub name: String,
    /// Codename (matched case-insensitively)
    pub codename: String,
    /// Description
    pub description: String,
    /// Specialization
    pub specialization: AgentSpecialization,
    /// Methods used
    #[serde(default)]
    pub methodologies: Vec<ResearchMethodology>,
    /// Source kinds consulted first
    #[serde(default)]
    pub primary_sources: Vec<SourceType>,
    /// Reliability tiers preferred
    #[serde(default)]
    pub preferred_reliability: Vec<SourceReliability>,
    /// Areas of expertise
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Topics under investigation
    #[serde(default)]
    pub research_topics: Vec<ResearchTopic>,
    /// Questions driving the agent
    #[serde(default)]
    pub key_questions: Vec<String>,
    /// Motto
    #[serde(default)]
    pub motto: String,
    /// Avatar reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A research topic paired with the agent investigating it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTopic<'a> {
    /// Owning agent id
    pub agent_id: &'a str,
    /// Owning agent codename
    pub agent_codename: &'a str,
    /// The topic
    #[serde(flatten)]
    pub topic: &'a ResearchTopic,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryDocument {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    agents: Vec<StoryAgent>,
}

/// Read-only collection of agents, indexed by id and codename
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRegistry {
    id: String,
    name: String,
    description: String,
    agents: Vec<StoryAgent>,
    total_topics: usize,
    #[serde(skip)]
    by_id: HashMap<String, usize>,
    #[serde(skip)]
    by_codename: HashMap<String, usize>,
}

impl AgentRegistry {
    /// Build a registry; agent ids must be unique
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        agents: Vec<StoryAgent>,
    ) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(agents.len());
        let mut by_codename = HashMap::with_capacity(agents.len());
        for (index, agent) in agents.iter().enumerate() {
            if by_id.insert(agent.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateAgent(agent.id.clone()));
            }
            // Codenames differing only in case resolve to the first agent
            by_codename.entry(agent.codename.to_lowercase()).or_insert(index);
        }

        let total_topics = agents.iter().map(|agent| agent.research_topics.len()).sum();

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            agents,
            total_topics,
            by_id,
            by_codename,
        })
    }

    /// Parse a registry from JSON text
    pub fn from_json(contents: &str) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_str(contents)?;
        Self::new(document.id, document.name, document.description, document.agents)
    }

    /// Load a registry from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&contents)?;
        info!(
            registry = %registry.id,
            agents = registry.agents.len(),
            topics = registry.total_topics,
            "Agent registry loaded"
        );
        Ok(registry)
    }

    /// Registry id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All agents, in registry order
    pub fn agents(&self) -> &[StoryAgent] {
        &self.agents
    }

    /// Look up an agent by exact id
    pub fn get_by_id(&self, id: &str) -> Option<&StoryAgent> {
        self.by_id.get(id).map(|&index| &self.agents[index])
    }

    /// Look up an agent by codename, ignoring case
    pub fn get_by_codename(&self, codename: &str) -> Option<&StoryAgent> {
        self.by_codename
            .get(&codename.to_lowercase())
            .map(|&index| &self.agents[index])
    }

    /// Agents with the given specialization
    pub fn by_specialization(&self, specialization: AgentSpecialization) -> Vec<&StoryAgent> {
        self.agents
            .iter()
            .filter(|agent| agent.specialization == specialization)
            .collect()
    }

    /// Every topic of every agent, tagged with its agent
    pub fn all_research_topics(&self) -> Vec<AgentTopic<'_>> {
        self.agents
            .iter()
            .flat_map(|agent| {
                agent.research_topics.iter().map(move |topic| AgentTopic {
                    agent_id: &agent.id,
                    agent_codename: &agent.codename,
                    topic,
                })
            })
            .collect()
    }

    /// Number of topics across all agents
    pub fn total_topics(&self) -> usize {
        self.total_topics
    }
}
