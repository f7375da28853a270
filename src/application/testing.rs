//! Test doubles for the application use cases

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::net::IpAddr;

use crate::domain::ports::{
    AddressProbe, ComposeInvocation, ContainerEngine, EngineError, EngineResult, ProbeError,
    PromptError, Prompter, PruneTarget, ResourceKind, Severity, StatusSink,
};

/// Every call the use cases made, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Preflight,
    Up(ComposeInvocation),
    Down(ComposeInvocation, bool),
    Ps(ComposeInvocation),
    List(ResourceKind),
    Stop(String),
    Remove(ResourceKind, String),
    Prune(PruneTarget),
}

/// In-memory engine holding named resources
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: RefCell<Vec<EngineCall>>,
    pub resources: RefCell<BTreeMap<ResourceKind, Vec<String>>>,
    pub missing: Option<&'static str>,
    pub fail_up: bool,
    /// Resources whose removal fails
    pub stuck: Vec<String>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(name: &'static str) -> Self {
        Self {
            missing: Some(name),
            ..Self::default()
        }
    }

    pub fn with_resources(self, kind: ResourceKind, names: &[&str]) -> Self {
        self.resources
            .borrow_mut()
            .insert(kind, names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn ups(&self) -> Vec<ComposeInvocation> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                EngineCall::Up(inv) => Some(inv),
                _ => None,
            })
            .collect()
    }

    pub fn remaining(&self, kind: ResourceKind) -> Vec<String> {
        self.resources
            .borrow()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ContainerEngine for RecordingEngine {
    fn preflight(&self) -> EngineResult<()> {
        self.record(EngineCall::Preflight);
        match self.missing {
            Some(name) => Err(EngineError::MissingDependency {
                name: name.to_string(),
                hint: "install it".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn compose_up(&self, invocation: &ComposeInvocation) -> EngineResult<()> {
        self.record(EngineCall::Up(invocation.clone()));
        if self.fail_up {
            return Err(EngineError::CommandFailed {
                command: "docker compose up -d".to_string(),
                code: Some(1),
                stderr: "pull access denied".to_string(),
            });
        }
        Ok(())
    }

    fn compose_down(&self, invocation: &ComposeInvocation, purge: bool) -> EngineResult<()> {
        self.record(EngineCall::Down(invocation.clone(), purge));
        Ok(())
    }

    fn compose_ps(&self, invocation: &ComposeInvocation) -> EngineResult<String> {
        self.record(EngineCall::Ps(invocation.clone()));
        Ok(format!("NAME STATUS\n{}-umami-1 running\n", invocation.project))
    }

    fn list(&self, kind: ResourceKind) -> EngineResult<Vec<String>> {
        self.record(EngineCall::List(kind));
        Ok(self.remaining(kind))
    }

    fn stop_container(&self, name: &str) -> EngineResult<()> {
        self.record(EngineCall::Stop(name.to_string()));
        Ok(())
    }

    fn remove(&self, kind: ResourceKind, name: &str) -> EngineResult<()> {
        self.record(EngineCall::Remove(kind, name.to_string()));
        if self.stuck.iter().any(|s| s == name) {
            return Err(EngineError::CommandFailed {
                command: format!("docker {} rm {}", kind, name),
                code: Some(1),
                stderr: "resource is in use".to_string(),
            });
        }
        if let Some(list) = self.resources.borrow_mut().get_mut(&kind) {
            list.retain(|n| n != name);
        }
        Ok(())
    }

    fn prune(&self, target: PruneTarget) -> EngineResult<()> {
        self.record(EngineCall::Prune(target));
        Ok(())
    }
}

/// Answers queued in order; running out behaves like closed stdin
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: RefCell::default(),
        }
    }

    fn next(&self, prompt: &str) -> Result<String, PromptError> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(PromptError::Eof)
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        let answer = self.next(prompt)?;
        match default {
            Some(d) if answer.trim().is_empty() => Ok(d.to_string()),
            _ => Ok(answer.trim().to_string()),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.next(prompt)?;
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

pub struct FixedProbe(pub Result<IpAddr, &'static str>);

impl AddressProbe for FixedProbe {
    fn name(&self) -> &str {
        "fixed"
    }

    fn probe(&self) -> Result<IpAddr, ProbeError> {
        self.0.map_err(|e| ProbeError::Request(e.to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub lines: RefCell<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, severity: Severity) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn all_text(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|(_, m)| m.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.lines
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
