//! Session assembly: content, scheduler state, and runtime.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use aim_content::{ActionCatalogLoader, ConfigLoader, Content, RosterBinding, RosterLoader};
use aim_core::{ActionCatalog, GameConfig, Scheduler, SchedulerState};
use aim_runtime::{RosterActionProvider, Runtime, RuntimeConfig, RuntimeHandle, StepOutcome};

use crate::config::ClientConfig;
use crate::render::Renderer;

/// Loads content, honoring any path overrides in `config`.
pub fn load_content(config: &ClientConfig) -> Result<Content> {
    let game_config = match &config.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::embedded()?,
    };

    let catalog = match &config.actions {
        Some(path) => load_catalog(path, &game_config)?,
        None => ActionCatalogLoader::embedded(game_config.cost_rules)?,
    };

    let roster = match &config.roster {
        Some(path) => RosterLoader::load(path)?,
        None => RosterLoader::embedded()?,
    };

    Ok(Content {
        config: game_config,
        catalog,
        roster,
    })
}

fn load_catalog(path: &Path, config: &GameConfig) -> Result<ActionCatalog> {
    if path.is_dir() {
        ActionCatalogLoader::load_dir(path, config.cost_rules)
    } else {
        ActionCatalogLoader::load(path, config.cost_rules)
    }
}

/// Totals reported after [`Session::play`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub steps: u64,
    pub actions: u64,
    pub ticks_advanced: u64,
}

/// A running runtime whose actors are played by their roster defaults.
pub struct Session {
    runtime: Runtime,
    binding: RosterBinding,
}

impl Session {
    /// Registers the roster and starts the runtime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(content: Content) -> Result<Self> {
        let mut state = SchedulerState::new();
        let binding = content
            .roster
            .register_all(
                &mut Scheduler::new(&mut state),
                content.config.default_stagger,
            )
            .context("failed to register roster")?;

        info!(
            actors = content.roster.len(),
            actions = content.catalog.len(),
            "session assembled"
        );

        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                game_config: content.config,
                ..RuntimeConfig::default()
            })
            .catalog(content.catalog)
            .initial_state(state)
            .provider(RosterActionProvider::new(binding.clone()))
            .build()?;

        Ok(Self { runtime, binding })
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn binding(&self) -> &RosterBinding {
        &self.binding
    }

    /// Auto-plays up to `max_steps` steps, rendering each one to `out`.
    pub async fn play(
        &mut self,
        max_steps: u64,
        renderer: &mut Renderer<impl std::io::Write>,
    ) -> Result<PlaySummary> {
        let handle = self.runtime.handle();
        let mut summary = PlaySummary::default();

        renderer.header(&handle.snapshot().await?, &self.binding)?;

        for step in 1..=max_steps {
            let outcome = self.runtime.step().await?;
            match &outcome {
                StepOutcome::Acted { .. } => summary.actions += 1,
                StepOutcome::Advanced(_) => summary.ticks_advanced += 1,
            }
            summary.steps = step;

            let snapshot = handle.snapshot().await?;
            renderer.step(step, &outcome, &snapshot, &self.binding)?;
        }

        info!(
            steps = summary.steps,
            actions = summary.actions,
            ticks = summary.ticks_advanced,
            "session finished"
        );
        Ok(summary)
    }

    pub async fn shutdown(self) -> Result<()> {
        Ok(self.runtime.shutdown().await?)
    }
}
