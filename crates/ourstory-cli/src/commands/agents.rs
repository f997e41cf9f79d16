//! Agents command implementation.

use crate::cli::AgentsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ourstory_catalog::AgentRegistry;

/// Render the agents command output.
pub fn run_agents(args: &AgentsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let path = args
        .registry
        .as_ref()
        .or(config.catalog.agents.as_ref())
        .ok_or_else(|| {
            CliError::InvalidInput(
                "No agent registry. Pass --registry or set [catalog] agents in ourstory.toml".to_string(),
            )
        })?;
    let registry = AgentRegistry::from_file(path)?;

    let agents = if let Some(id) = &args.id {
        let agent = registry
            .get_by_id(id)
            .ok_or_else(|| CliError::NotFound(format!("agent '{}'", id)))?;
        vec![agent]
    } else if let Some(codename) = &args.codename {
        let agent = registry
            .get_by_codename(codename)
            .ok_or_else(|| CliError::NotFound(format!("agent with codename '{}'", codename)))?;
        vec![agent]
    } else if let Some(specialization) = args.specialization {
        registry.by_specialization(specialization)
    } else {
        registry.agents().iter().collect()
    };

    if args.topics {
        let topics: Vec<_> = registry
            .all_research_topics()
            .into_iter()
            .filter(|entry| agents.iter().any(|agent| agent.id == entry.agent_id))
            .collect();
        formatter.format_topics(&topics)
    } else {
        formatter.format_agents(&agents)
    }
}

/// Execute the agents command.
pub fn execute_agents(args: AgentsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", run_agents(&args, config, formatter)?);
    Ok(())
}
