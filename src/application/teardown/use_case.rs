//! Teardown Use Case
//!
//! Steps, each best-effort:
//! 1. `compose down --volumes --remove-orphans` for every manifest on disk,
//!    sub-stack first
//! 2. Stop and remove the stack's containers
//! 3. Remove the stack's volumes and networks
//! 4. Delete generated files that carry the statstack marker
//! 5. Prune dangling images, networks, volumes and build cache
//! 6. Re-query and report whatever is left

use std::path::Path;

use crate::domain::entities::layout::{substack_project, GENERATED_FILES};
use crate::domain::entities::ComposeManifest;
use crate::domain::ports::{
    ContainerEngine, FileSystem, PromptError, Prompter, PruneTarget, ResourceKind, StatusSink,
};
use crate::domain::services::ResourceInventory;
use crate::error::StatstackResult;
use crate::infrastructure::lock::RunLock;
use crate::infrastructure::manifest::{load_manifest, parse_manifest, BUNDLED};
use crate::render::has_marker;

use super::super::invocation::{primary_invocation, substack_invocation};
use super::options::TeardownOptions;
use super::result::{TeardownOutcome, TeardownReport};

/// The only answer that confirms a teardown
pub const CONFIRM_WORD: &str = "yes";

/// Teardown use case
pub struct TeardownUseCase<E, FS>
where
    E: ContainerEngine,
    FS: FileSystem,
{
    engine: E,
    fs: FS,
}

impl<E, FS> TeardownUseCase<E, FS>
where
    E: ContainerEngine,
    FS: FileSystem,
{
    pub fn new(engine: E, fs: FS) -> Self {
        Self { engine, fs }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn execute(
        &self,
        options: &TeardownOptions,
        prompter: &dyn Prompter,
        sink: &dyn StatusSink,
    ) -> StatstackResult<TeardownOutcome> {
        self.engine.preflight()?;

        if !options.assume_yes && !confirmed(prompter)? {
            sink.info("Teardown cancelled; nothing was changed");
            return Ok(TeardownOutcome::Cancelled);
        }

        let _lock = match &options.lock_path {
            Some(path) => Some(RunLock::acquire(path)?),
            None => None,
        };

        let layout = &options.layout;
        let project = options.project.as_str();
        let inventory = self.inventory(options)?;
        let mut report = TeardownReport::default();

        // The sub-stack goes first: it is still attached to the primary's edge network.
        if self.fs.exists(&layout.substack_manifest()) {
            sink.info("Stopping the session-replay stack");
            let invocation = substack_invocation(&self.fs, layout, project);
            if let Err(e) = self.engine.compose_down(&invocation, true) {
                sink.warn(&e.to_string());
                report.record_failure(invocation.project, e.to_string());
            }
        }
        if self.fs.exists(&layout.primary_manifest()) {
            sink.info("Stopping the analytics stack");
            let invocation = primary_invocation(&self.fs, layout, project, true);
            if let Err(e) = self.engine.compose_down(&invocation, true) {
                sink.warn(&e.to_string());
                report.record_failure(project, e.to_string());
            }
        }

        for kind in ResourceKind::ALL {
            self.remove_kind(&inventory, kind, &mut report, sink);
        }

        for file in GENERATED_FILES {
            self.remove_file(&layout.path(file), &mut report, sink);
        }

        for target in PruneTarget::ALL {
            if let Err(e) = self.engine.prune(target) {
                sink.warn(&format!("Could not prune {}: {}", target.as_str(), e));
                report.record_failure(format!("prune {}", target.as_str()), e.to_string());
            }
        }

        for kind in ResourceKind::ALL {
            let left = self.present(&inventory, kind, sink);
            if !left.is_empty() {
                sink.warn(&format!("{} {}(s) still present: {}", left.len(), kind, left.join(", ")));
                report.remaining.insert(kind, left);
            }
        }

        Ok(TeardownOutcome::Completed(report))
    }

    /// Resources declared by the manifests on disk, or the bundled ones when absent
    fn inventory(&self, options: &TeardownOptions) -> StatstackResult<ResourceInventory> {
        let layout = &options.layout;
        let project = options.project.as_str();
        let mut inventory = ResourceInventory::new(project);

        let primary = self.manifest_or_bundled(&layout.primary_manifest(), BUNDLED[0].content)?;
        inventory.add_manifest(project, &primary);
        let sub = self.manifest_or_bundled(&layout.substack_manifest(), BUNDLED[1].content)?;
        inventory.add_manifest(&substack_project(project), &sub);

        Ok(inventory)
    }

    fn manifest_or_bundled(&self, path: &Path, bundled: &str) -> StatstackResult<ComposeManifest> {
        match load_manifest(&self.fs, path)? {
            Some(manifest) => Ok(manifest),
            None => parse_manifest(path, bundled),
        }
    }

    /// Names of `kind` currently known to the engine that belong to the stack
    fn present(
        &self,
        inventory: &ResourceInventory,
        kind: ResourceKind,
        sink: &dyn StatusSink,
    ) -> Vec<String> {
        match self.engine.list(kind) {
            Ok(names) => inventory
                .select(kind, &names)
                .into_iter()
                .map(str::to_string)
                .collect(),
            Err(e) => {
                sink.warn(&format!("Could not list {}s: {}", kind, e));
                Vec::new()
            }
        }
    }

    fn remove_kind(
        &self,
        inventory: &ResourceInventory,
        kind: ResourceKind,
        report: &mut TeardownReport,
        sink: &dyn StatusSink,
    ) {
        for name in self.present(inventory, kind, sink) {
            if kind == ResourceKind::Container {
                // A failed stop still leaves the forced removal to try.
                if let Err(e) = self.engine.stop_container(&name) {
                    sink.warn(&format!("Could not stop {}: {}", name, e));
                }
            }
            match self.engine.remove(kind, &name) {
                Ok(()) => {
                    sink.info(&format!("Removed {} {}", kind, name));
                    report.record_removed(kind, &name);
                }
                Err(e) => {
                    sink.warn(&format!("Could not remove {} {}: {}", kind, name, e));
                    report.record_failure(format!("{} {}", kind, name), e.to_string());
                }
            }
        }
    }

    fn remove_file(&self, path: &Path, report: &mut TeardownReport, sink: &dyn StatusSink) {
        if !self.fs.exists(path) {
            return;
        }
        let ours = self
            .fs
            .read(path)
            .map(|content| has_marker(&content))
            .unwrap_or(false);
        if !ours {
            sink.warn(&format!(
                "{} was not generated by statstack; leaving it in place",
                path.display()
            ));
            report.files_kept.push(path.to_path_buf());
            return;
        }
        match self.fs.remove(path) {
            Ok(()) => {
                sink.info(&format!("Deleted {}", path.display()));
                report.files_removed.push(path.to_path_buf());
            }
            Err(e) => {
                sink.warn(&format!("Could not delete {}: {}", path.display(), e));
                report.record_failure(path.display().to_string(), e.to_string());
            }
        }
    }
}

/// Ask for the confirmation word; closed input counts as a refusal
fn confirmed(prompter: &dyn Prompter) -> Result<bool, PromptError> {
    let prompt = format!(
        "This removes every statstack container, volume, network and generated file. Type '{}' to continue",
        CONFIRM_WORD
    );
    match prompter.input(&prompt, None) {
        Ok(answer) => Ok(answer.trim() == CONFIRM_WORD),
        Err(PromptError::Eof) => Ok(false),
        Err(e) => Err(e),
    }
}
