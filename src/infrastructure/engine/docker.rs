//! Docker CLI engine
//!
//! Drives `docker` and the compose plugin as child processes. The compose
//! command is resolved once: `docker compose` first, standalone
//! `docker-compose` as fallback.

use std::cell::OnceCell;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::domain::ports::{
    ComposeInvocation, ContainerEngine, EngineError, EngineResult, PruneTarget, ResourceKind,
};

const DOCKER_HINT: &str = "Install Docker Engine (https://docs.docker.com/engine/install/) and make sure `docker` is on PATH.";
const COMPOSE_HINT: &str = "Install the Docker Compose plugin (`docker compose`) or the standalone `docker-compose` binary.";

/// How the orchestrator is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeCommand {
    /// `docker compose ...`
    Plugin,
    /// `docker-compose ...`
    Standalone,
}

/// Whether a child's stdout reaches the terminal or is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Inherit,
    Capture,
}

pub struct DockerCli {
    docker: String,
    compose: OnceCell<ComposeCommand>,
    echo: bool,
}

impl DockerCli {
    /// `docker` is the engine executable (name on PATH or absolute path)
    pub fn new(docker: impl Into<String>) -> Self {
        Self {
            docker: docker.into(),
            compose: OnceCell::new(),
            echo: false,
        }
    }

    /// Print every command before running it
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Check whether `program args...` runs and exits successfully
    fn probe(&self, program: &str, args: &[&str]) -> Result<bool, std::io::Error> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
    }

    fn resolve_compose(&self) -> EngineResult<ComposeCommand> {
        if let Some(found) = self.compose.get() {
            return Ok(found.clone());
        }

        let found = if self
            .probe(&self.docker, &["compose", "version"])
            .unwrap_or(false)
        {
            ComposeCommand::Plugin
        } else if self
            .probe("docker-compose", &["version"])
            .unwrap_or(false)
        {
            ComposeCommand::Standalone
        } else {
            return Err(EngineError::MissingDependency {
                name: "docker compose".to_string(),
                hint: COMPOSE_HINT.to_string(),
            });
        };

        let _ = self.compose.set(found.clone());
        Ok(found)
    }

    fn compose(&self, invocation: &ComposeInvocation, verb: &[&str], output: Output) -> EngineResult<String> {
        let (program, mut args) = match self.resolve_compose()? {
            ComposeCommand::Plugin => (self.docker.as_str(), vec!["compose".to_string()]),
            ComposeCommand::Standalone => ("docker-compose", Vec::new()),
        };
        args.extend(invocation.base_args());
        args.extend(verb.iter().map(|s| s.to_string()));
        self.run(program, &args, output)
    }

    fn docker(&self, args: &[&str], output: Output) -> EngineResult<String> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.run(&self.docker, &args, output)
    }

    fn run(&self, program: &str, args: &[String], output: Output) -> EngineResult<String> {
        let command = display_command(program, args);
        if self.echo {
            eprintln!("  $ {}", command);
        }

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        // Compose reports pull/start progress on stderr
        match output {
            Output::Inherit => cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit()),
            Output::Capture => cmd.stdout(Stdio::piped()).stderr(Stdio::piped()),
        };

        let out = cmd.output().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                EngineError::MissingDependency {
                    name: program.to_string(),
                    hint: DOCKER_HINT.to_string(),
                }
            } else {
                EngineError::Spawn {
                    command: command.clone(),
                    source,
                }
            }
        })?;

        if !out.status.success() {
            return Err(EngineError::CommandFailed {
                command,
                code: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

fn lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

impl ContainerEngine for DockerCli {
    fn preflight(&self) -> EngineResult<()> {
        match self.probe(&self.docker, &["--version"]) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                return Err(EngineError::MissingDependency {
                    name: self.docker.clone(),
                    hint: DOCKER_HINT.to_string(),
                })
            }
        }
        self.resolve_compose().map(|_| ())
    }

    fn compose_up(&self, invocation: &ComposeInvocation) -> EngineResult<()> {
        self.compose(invocation, &["up", "-d"], Output::Inherit)
            .map(|_| ())
    }

    fn compose_down(&self, invocation: &ComposeInvocation, purge: bool) -> EngineResult<()> {
        let verb: &[&str] = if purge {
            &["down", "--volumes", "--remove-orphans"]
        } else {
            &["down"]
        };
        self.compose(invocation, verb, Output::Inherit).map(|_| ())
    }

    fn compose_ps(&self, invocation: &ComposeInvocation) -> EngineResult<String> {
        self.compose(invocation, &["ps", "--all"], Output::Capture)
    }

    fn list(&self, kind: ResourceKind) -> EngineResult<Vec<String>> {
        let args: &[&str] = match kind {
            ResourceKind::Container => &["ps", "--all", "--format", "{{.Names}}"],
            ResourceKind::Volume => &["volume", "ls", "--format", "{{.Name}}"],
            ResourceKind::Network => &["network", "ls", "--format", "{{.Name}}"],
        };
        self.docker(args, Output::Capture).map(|out| lines(&out))
    }

    fn stop_container(&self, name: &str) -> EngineResult<()> {
        self.docker(&["stop", name], Output::Capture).map(|_| ())
    }

    fn remove(&self, kind: ResourceKind, name: &str) -> EngineResult<()> {
        let args: &[&str] = match kind {
            ResourceKind::Container => &["rm", "--force", name],
            ResourceKind::Volume => &["volume", "rm", "--force", name],
            ResourceKind::Network => &["network", "rm", name],
        };
        self.docker(args, Output::Capture).map(|_| ())
    }

    fn prune(&self, target: PruneTarget) -> EngineResult<()> {
        let args: &[&str] = match target {
            PruneTarget::Images => &["image", "prune", "--force"],
            PruneTarget::Networks => &["network", "prune", "--force"],
            PruneTarget::Volumes => &["volume", "prune", "--force"],
            PruneTarget::BuildCache => &["builder", "prune", "--force"],
        };
        self.docker(args, Output::Capture).map(|_| ())
    }
}
