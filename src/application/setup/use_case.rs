//! Setup Use Case
//!
//! Orchestrates a setup run:
//! 1. Check the engine and orchestrator are installed
//! 2. Ask the operator how the stack is reached
//! 3. Build the deployment configuration with fresh secrets
//! 4. Render every artifact in memory, then write them
//! 5. Start the primary stack, then the sub-stack when enabled

use crate::domain::entities::{Access, DeploymentConfig, SubstackConfig};
use crate::domain::ports::{AddressProbe, ContainerEngine, FileSystem, Prompter, StatusSink};
use crate::domain::services::{
    detect_host_address, generate_stack_secrets, generate_substack_secrets,
};
use crate::domain::value_objects::AccessMode;
use crate::error::StatstackResult;
use crate::infrastructure::lock::RunLock;
use crate::infrastructure::manifest::write_missing;
use crate::render::{has_marker, render_all, Stamp};

use super::super::invocation::{primary_invocation, substack_invocation};
use super::answers::{gather_answers, SetupAnswers};
use super::options::SetupOptions;
use super::result::SetupResult;

/// Setup use case
pub struct SetupUseCase<E, FS>
where
    E: ContainerEngine,
    FS: FileSystem,
{
    engine: E,
    fs: FS,
    probes: Vec<Box<dyn AddressProbe>>,
}

impl<E, FS> SetupUseCase<E, FS>
where
    E: ContainerEngine,
    FS: FileSystem,
{
    /// `probes` are tried in order when the host address must be detected
    pub fn new(engine: E, fs: FS, probes: Vec<Box<dyn AddressProbe>>) -> Self {
        Self { engine, fs, probes }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn execute(
        &self,
        options: &SetupOptions,
        prompter: &dyn Prompter,
        sink: &dyn StatusSink,
    ) -> StatstackResult<SetupResult> {
        self.engine.preflight()?;
        let _lock = match &options.lock_path {
            Some(path) => Some(RunLock::acquire(path)?),
            None => None,
        };

        let answers = gather_answers(prompter, sink)?;
        let config = self.build_config(options, answers, sink);

        let stamp = options.stamp.unwrap_or_else(Stamp::now);
        let artifacts = render_all(&config, &stamp)?;
        let layout = &options.layout;

        let bundled = write_missing(&self.fs, layout).map_err(std::io::Error::from)?;
        for path in &bundled {
            sink.info(&format!("Wrote bundled {}", path.display()));
        }

        let mut written = Vec::new();
        for artifact in &artifacts.files {
            let path = layout.path(artifact.path);
            if artifact.private {
                self.fs.write_private(&path, &artifact.content)
            } else {
                self.fs.write(&path, &artifact.content)
            }
            .map_err(std::io::Error::from)?;
            sink.info(&format!("Wrote {}", artifact.path));
            written.push(path);
        }

        let mut removed_stale = Vec::new();
        let mut kept = Vec::new();
        for stale in &artifacts.stale {
            let path = layout.path(stale);
            if !self.fs.exists(&path) {
                continue;
            }
            let ours = self
                .fs
                .read(&path)
                .map(|content| has_marker(&content))
                .unwrap_or(false);
            if ours {
                self.fs.remove(&path).map_err(std::io::Error::from)?;
                sink.info(&format!("Removed {} from a previous run", stale));
                removed_stale.push(path);
            } else {
                sink.warn(&format!(
                    "{} was not generated by statstack; leaving it in place",
                    stale
                ));
                kept.push(path);
            }
        }

        let project = config.project();
        let primary = primary_invocation(&self.fs, layout, project, config.mode().uses_proxy());
        sink.info("Starting the analytics stack");
        self.engine.compose_up(&primary)?;
        let mut stacks_started = 1;

        if config.substack_enabled() {
            let substack = substack_invocation(&self.fs, layout, project);
            sink.info("Starting the session-replay stack");
            self.engine.compose_up(&substack)?;
            stacks_started += 1;
        }

        Ok(SetupResult {
            config,
            bundled,
            written,
            removed_stale,
            kept,
            stacks_started,
        })
    }

    fn build_config(
        &self,
        options: &SetupOptions,
        answers: SetupAnswers,
        sink: &dyn StatusSink,
    ) -> DeploymentConfig {
        let access = match answers.mode {
            AccessMode::Domain => Access::Domain {
                hostnames: answers.hostnames,
                email: answers.email,
            },
            AccessMode::DirectAddress => {
                let probes: Vec<&dyn AddressProbe> = self.probes.iter().map(|p| p.as_ref()).collect();
                Access::DirectAddress {
                    address: detect_host_address(&probes, sink),
                }
            }
            AccessMode::Tunnel => Access::Tunnel,
        };

        let substack = answers.substack.then(|| SubstackConfig {
            secrets: generate_substack_secrets(),
        });

        DeploymentConfig::new(
            options.settings.clone(),
            access,
            substack,
            generate_stack_secrets(),
        )
    }
}
