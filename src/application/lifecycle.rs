//! `down` and `status`
//!
//! Both address the same invocations `setup` started: the primary stack and,
//! when `openreplay.env` exists, the session-replay stack.

use crate::domain::entities::StackLayout;
use crate::domain::ports::{ComposeInvocation, ContainerEngine, FileSystem, StatusSink};
use crate::error::StatstackResult;
use crate::infrastructure::lock::RunLock;

use super::invocation::{primary_invocation, substack_invocation};

/// `ps` output of one compose project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackStatus {
    pub project: String,
    pub output: String,
}

pub struct LifecycleUseCase<E, FS>
where
    E: ContainerEngine,
    FS: FileSystem,
{
    engine: E,
    fs: FS,
}

impl<E, FS> LifecycleUseCase<E, FS>
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

    /// Stop and remove the containers; volumes are kept
    pub fn down(
        &self,
        layout: &StackLayout,
        project: &str,
        sink: &dyn StatusSink,
    ) -> StatstackResult<usize> {
        self.engine.preflight()?;
        let _lock = RunLock::acquire(&layout.lock_file())?;

        let stacks = self.invocations(layout, project);
        for invocation in &stacks {
            sink.info(&format!("Stopping {}", invocation.project));
            self.engine.compose_down(invocation, false)?;
        }
        Ok(stacks.len())
    }

    pub fn status(&self, layout: &StackLayout, project: &str) -> StatstackResult<Vec<StackStatus>> {
        self.engine.preflight()?;

        let mut statuses = Vec::new();
        for invocation in self.invocations(layout, project) {
            let output = self.engine.compose_ps(&invocation)?;
            statuses.push(StackStatus {
                project: invocation.project,
                output,
            });
        }
        Ok(statuses)
    }

    fn invocations(&self, layout: &StackLayout, project: &str) -> Vec<ComposeInvocation> {
        // The proxy profile is always named so a stopped Caddy is included.
        let mut stacks = vec![primary_invocation(&self.fs, layout, project, true)];
        if self.fs.exists(&layout.substack_env_file()) {
            stacks.push(substack_invocation(&self.fs, layout, project));
        }
        stacks
    }
}
