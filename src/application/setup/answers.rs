//! Interactive answers for `setup`
//!
//! Mode input never fails: anything unrecognized falls back to direct-address
//! access with a warning. Hostnames and the contact email are re-asked until
//! they validate; a hostname already given to another service is re-asked too.

use std::collections::BTreeMap;

use crate::domain::entities::ServiceId;
use crate::domain::ports::{PromptError, Prompter, StatusSink};
use crate::domain::value_objects::{AccessMode, ContactEmail, Hostname};

/// What the operator chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub mode: AccessMode,
    pub substack: bool,
    /// Domain mode only
    pub hostnames: BTreeMap<ServiceId, Hostname>,
    pub email: Option<ContactEmail>,
}

pub fn gather_answers(
    prompter: &dyn Prompter,
    sink: &dyn StatusSink,
) -> Result<SetupAnswers, PromptError> {
    sink.info("How should the services be reached?");
    for mode in AccessMode::ALL {
        sink.info(&format!("  [{}] {}", mode.menu_index(), mode.description()));
    }

    let default = AccessMode::default().menu_index().to_string();
    let raw = prompter.input("Access method", Some(&default))?;
    let choice = AccessMode::choose(&raw);
    if choice.fell_back {
        sink.warn(&format!(
            "Unrecognized access method '{}'; using {}",
            raw.trim(),
            choice.mode.description()
        ));
    }

    let substack = prompter.confirm(
        "Enable OpenReplay session replay? (needs several GB of RAM)",
        false,
    )?;

    let mut hostnames = BTreeMap::new();
    let mut email = None;
    if choice.mode == AccessMode::Domain {
        let mut services = ServiceId::CORE.to_vec();
        if substack {
            services.push(ServiceId::OpenReplay);
        }
        for service in services {
            let host = ask_hostname(prompter, sink, service, &hostnames)?;
            hostnames.insert(service, host);
        }
        email = ask_email(prompter, sink)?;
    }

    Ok(SetupAnswers {
        mode: choice.mode,
        substack,
        hostnames,
        email,
    })
}

fn ask_hostname(
    prompter: &dyn Prompter,
    sink: &dyn StatusSink,
    service: ServiceId,
    taken: &BTreeMap<ServiceId, Hostname>,
) -> Result<Hostname, PromptError> {
    let prompt = format!(
        "Hostname for {} (e.g. {})",
        service.label(),
        service.example_hostname()
    );
    loop {
        let raw = prompter.input(&prompt, None)?;
        match Hostname::parse(&raw) {
            Ok(host) => match taken
                .iter()
                .find(|(_, other)| other.as_str().eq_ignore_ascii_case(host.as_str()))
            {
                // Caddy refuses two site blocks with the same address.
                Some((owner, _)) => sink.warn(&format!(
                    "{} is already used for {}; each service needs its own hostname",
                    host,
                    owner.label()
                )),
                None => return Ok(host),
            },
            Err(e) => sink.warn(&e.to_string()),
        }
    }
}

fn ask_email(
    prompter: &dyn Prompter,
    sink: &dyn StatusSink,
) -> Result<Option<ContactEmail>, PromptError> {
    loop {
        let raw = prompter.input(
            "Contact email for certificate notices (leave empty to skip)",
            Some(""),
        )?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match ContactEmail::parse(&raw) {
            Ok(email) => return Ok(Some(email)),
            Err(e) => sink.warn(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{RecordingSink, ScriptedPrompter};
    use crate::domain::ports::Severity;

    #[test]
    fn empty_mode_uses_default_direct_address() {
        let prompter = ScriptedPrompter::new(&["", "n"]);
        let sink = RecordingSink::new();
        let answers = gather_answers(&prompter, &sink).unwrap();
        assert_eq!(answers.mode, AccessMode::DirectAddress);
        assert!(!answers.substack);
        assert!(sink.at(Severity::Warn).is_empty());
    }

    #[test]
    fn out_of_range_mode_falls_back_with_warning() {
        for input in ["7", "0", "banana", "-1"] {
            let prompter = ScriptedPrompter::new(&[input, "n"]);
            let sink = RecordingSink::new();
            let answers = gather_answers(&prompter, &sink).unwrap();
            assert_eq!(answers.mode, AccessMode::DirectAddress, "input {}", input);
            assert_eq!(sink.at(Severity::Warn).len(), 1);
        }
    }

    #[test]
    fn domain_mode_asks_every_hostname_and_retries_invalid() {
        let prompter = ScriptedPrompter::new(&[
            "1",
            "y",
            "https://bad/",
            "analytics.example.com",
            "status.example.com",
            "grafana.example.com",
            "replay.example.com",
            "not-an-email",
            "ops@example.com",
        ]);
        let sink = RecordingSink::new();
        let answers = gather_answers(&prompter, &sink).unwrap();

        assert_eq!(answers.mode, AccessMode::Domain);
        assert_eq!(answers.hostnames.len(), 4);
        assert_eq!(
            answers.hostnames[&ServiceId::OpenReplay].as_str(),
            "replay.example.com"
        );
        assert_eq!(answers.email.unwrap().as_str(), "ops@example.com");
        assert_eq!(sink.at(Severity::Warn).len(), 2);
    }

    #[test]
    fn domain_mode_reasks_a_hostname_already_in_use() {
        let prompter = ScriptedPrompter::new(&[
            "1",
            "n",
            "same.example.com",
            "same.example.com",
            "SAME.example.com",
            "status.example.com",
            "same.example.com",
            "grafana.example.com",
            "",
        ]);
        let sink = RecordingSink::new();
        let answers = gather_answers(&prompter, &sink).unwrap();

        let hosts: Vec<_> = answers.hostnames.values().map(|h| h.as_str()).collect();
        assert_eq!(hosts.len(), 3);
        assert_eq!(answers.hostnames[&ServiceId::Umami].as_str(), "same.example.com");
        assert_eq!(answers.hostnames[&ServiceId::UptimeKuma].as_str(), "status.example.com");
        assert_eq!(answers.hostnames[&ServiceId::Grafana].as_str(), "grafana.example.com");
        let warnings = sink.at(Severity::Warn);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.contains("already used for")));
    }

    #[test]
    fn email_may_be_skipped() {
        let prompter = ScriptedPrompter::new(&["domain", "n", "a.example.com", "b.example.com", "c.example.com", ""]);
        let answers = gather_answers(&prompter, &RecordingSink::new()).unwrap();
        assert_eq!(answers.hostnames.len(), 3);
        assert!(answers.email.is_none());
    }

    #[test]
    fn tunnel_mode_asks_nothing_else() {
        let prompter = ScriptedPrompter::new(&["3", "y"]);
        let answers = gather_answers(&prompter, &RecordingSink::new()).unwrap();
        assert_eq!(answers.mode, AccessMode::Tunnel);
        assert!(answers.substack);
        assert_eq!(prompter.asked.borrow().len(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let prompter = ScriptedPrompter::new(&["1", "n", "a.example.com"]);
        let err = gather_answers(&prompter, &RecordingSink::new()).unwrap_err();
        assert!(matches!(err, PromptError::Eof));
    }
}
