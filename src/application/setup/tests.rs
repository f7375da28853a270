//! Tests for SetupUseCase

use std::net::{IpAddr, Ipv4Addr};

use tempfile::{tempdir, TempDir};

use super::*;
use crate::application::testing::{
    EngineCall, FixedProbe, RecordingEngine, RecordingSink, ScriptedPrompter,
};
use crate::domain::entities::layout::{
    CADDYFILE, ENV_FILE, PRIMARY_OVERRIDE, SUBSTACK_ENV_FILE, SUBSTACK_OVERRIDE,
};
use crate::domain::entities::{StackLayout, StackSettings};
use crate::domain::ports::{AddressProbe, Severity};
use crate::domain::value_objects::AccessMode;
use crate::error::StatstackError;
use crate::infrastructure::fs::LocalFs;
use crate::render::tests::stamp;

const PUBLIC_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

struct Harness {
    dir: TempDir,
    layout: StackLayout,
}

impl Harness {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let layout = StackLayout::new(dir.path());
        Self { dir, layout }
    }

    fn options(&self) -> SetupOptions {
        SetupOptions::new(self.layout.clone(), StackSettings::default()).with_stamp(stamp())
    }

    fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.layout.path(file)).unwrap()
    }

    fn exists(&self, file: &str) -> bool {
        self.layout.path(file).exists()
    }

    fn run(
        &self,
        engine: RecordingEngine,
        answers: &[&str],
    ) -> (SetupUseCase<RecordingEngine, LocalFs>, Result<SetupResult, StatstackError>, RecordingSink) {
        let probes: Vec<Box<dyn AddressProbe>> = vec![Box::new(FixedProbe(Ok(PUBLIC_IP)))];
        let use_case = SetupUseCase::new(engine, LocalFs::new(), probes);
        let sink = RecordingSink::new();
        let result = use_case.execute(&self.options(), &ScriptedPrompter::new(answers), &sink);
        (use_case, result, sink)
    }
}

fn env_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(&format!("{}=", key)))
        .map(|v| v.trim_matches('\'').to_string())
}

#[test]
fn direct_address_without_substack_starts_one_stack() {
    let h = Harness::new();
    let (use_case, result, _) = h.run(RecordingEngine::new(), &["2", "n"]);
    let result = result.unwrap();

    let env = h.read(ENV_FILE);
    for key in ["GRAFANA_ADMIN_PASSWORD", "UMAMI_APP_SECRET", "POSTGRES_PASSWORD"] {
        let value = env_value(&env, key).unwrap();
        assert!(!value.is_empty(), "{} is empty", key);
    }
    assert_eq!(env_value(&env, "STATSTACK_ACCESS_MODE").as_deref(), Some("direct-address"));

    let override_file = h.read(PRIMARY_OVERRIDE);
    for port in ["3000:3000", "3001:3001", "3002:3002"] {
        assert!(override_file.contains(port), "missing {}", port);
    }
    assert!(!override_file.contains("3003"));
    assert!(h.read(CADDYFILE).contains("http://203.0.113.7:3000"));

    assert!(!h.exists(SUBSTACK_ENV_FILE));
    let ups = use_case.engine().ups();
    assert_eq!(ups.len(), 1);
    assert_eq!(ups[0].primary_manifest(), Some(&h.layout.primary_manifest()));
    assert_eq!(ups[0].profiles, vec!["proxy"]);
    assert_eq!(ups[0].env_file, Some(h.layout.env_file()));
    assert_eq!(result.stacks_started, 1);
    assert_eq!(result.config.mode(), AccessMode::DirectAddress);
}

#[test]
fn substack_gets_its_own_env_file_and_invocation() {
    let h = Harness::new();
    let (use_case, result, _) = h.run(RecordingEngine::new(), &["ip", "y"]);
    let result = result.unwrap();

    let sub_env = h.read(SUBSTACK_ENV_FILE);
    assert_eq!(env_value(&sub_env, "OPENREPLAY_DOMAIN").as_deref(), Some("203.0.113.7"));
    assert!(!env_value(&sub_env, "OPENREPLAY_JWT_SECRET").unwrap().is_empty());

    let ups = use_case.engine().ups();
    assert_eq!(ups.len(), 2);
    assert_eq!(ups[1].project, "statstack-openreplay");
    assert_eq!(ups[1].env_file, Some(h.layout.substack_env_file()));
    assert_eq!(result.stacks_started, 2);
    assert!(h.read(PRIMARY_OVERRIDE).contains("3003:3003"));
}

#[test]
fn domain_mode_writes_caddyfile_and_no_override() {
    let h = Harness::new();
    let (use_case, result, _) = h.run(
        RecordingEngine::new(),
        &[
            "1",
            "n",
            "analytics.example.com",
            "status.example.com",
            "grafana.example.com",
            "ops@example.com",
        ],
    );
    result.unwrap();

    let caddyfile = h.read(CADDYFILE);
    assert!(caddyfile.contains("email ops@example.com"));
    assert!(caddyfile.contains("analytics.example.com {"));
    assert!(!h.exists(PRIMARY_OVERRIDE));

    let ups = use_case.engine().ups();
    assert_eq!(ups[0].manifests, vec![h.layout.primary_manifest()]);
    assert_eq!(ups[0].profiles, vec!["proxy"]);
}

#[test]
fn tunnel_mode_binds_loopback_without_proxy() {
    let h = Harness::new();
    let (use_case, result, _) = h.run(RecordingEngine::new(), &["3", "y"]);
    result.unwrap();

    assert!(!h.exists(CADDYFILE));
    let override_file = h.read(PRIMARY_OVERRIDE);
    assert!(override_file.contains("127.0.0.1:3000:3000"));
    assert!(override_file.contains("127.0.0.1:3002:3000"));
    assert!(h.read(SUBSTACK_OVERRIDE).contains("127.0.0.1:3003:8080"));

    let ups = use_case.engine().ups();
    assert!(ups[0].profiles.is_empty());
    assert_eq!(
        ups[1].manifests,
        vec![h.layout.substack_manifest(), h.layout.substack_override()]
    );
}

#[test]
fn rerun_generates_fresh_secrets() {
    let h = Harness::new();
    let (_, first, _) = h.run(RecordingEngine::new(), &["3", "n"]);
    let first_env = h.read(ENV_FILE);
    let (_, second, _) = h.run(RecordingEngine::new(), &["3", "n"]);
    let second_env = h.read(ENV_FILE);

    for key in ["GRAFANA_ADMIN_PASSWORD", "UMAMI_APP_SECRET", "POSTGRES_PASSWORD"] {
        assert_ne!(env_value(&first_env, key), env_value(&second_env, key), "{}", key);
    }
    assert_ne!(first.unwrap().config.secrets, second.unwrap().config.secrets);
}

#[test]
fn unrecognized_mode_falls_back_to_direct_address() {
    let h = Harness::new();
    let (_, result, sink) = h.run(RecordingEngine::new(), &["9", "n"]);
    assert_eq!(result.unwrap().config.mode(), AccessMode::DirectAddress);
    assert!(sink
        .at(Severity::Warn)
        .iter()
        .any(|w| w.contains("Unrecognized access method")));
}

#[test]
fn missing_dependency_writes_nothing_and_asks_nothing() {
    let h = Harness::new();
    let probes: Vec<Box<dyn AddressProbe>> = Vec::new();
    let use_case = SetupUseCase::new(RecordingEngine::missing("docker"), LocalFs::new(), probes);
    let prompter = ScriptedPrompter::new(&["2", "n"]);

    let err = use_case
        .execute(&h.options(), &prompter, &RecordingSink::new())
        .unwrap_err();

    assert!(err.is_missing_dependency());
    assert!(prompter.asked.borrow().is_empty());
    assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 0);
    assert_eq!(use_case.engine().calls(), vec![EngineCall::Preflight]);
}

#[test]
fn failed_up_keeps_written_files() {
    let h = Harness::new();
    let engine = RecordingEngine {
        fail_up: true,
        ..RecordingEngine::new()
    };
    let (_, result, _) = h.run(engine, &["2", "y"]);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("pull access denied"));
    assert!(h.exists(ENV_FILE));
    assert!(h.exists(SUBSTACK_ENV_FILE));
    assert!(h.exists(PRIMARY_OVERRIDE));
}

#[test]
fn switching_modes_removes_stale_generated_files() {
    let h = Harness::new();
    let (_, first, _) = h.run(RecordingEngine::new(), &["2", "y"]);
    first.unwrap();
    assert!(h.exists(CADDYFILE));

    let (_, second, _) = h.run(RecordingEngine::new(), &["3", "n"]);
    let second = second.unwrap();

    assert!(!h.exists(CADDYFILE));
    assert!(!h.exists(SUBSTACK_ENV_FILE));
    assert!(second.removed_stale.contains(&h.layout.path(CADDYFILE)));
    assert!(second.kept.is_empty());
}

#[test]
fn hand_written_files_are_left_alone() {
    let h = Harness::new();
    std::fs::write(h.layout.path(CADDYFILE), ":80 {\n\trespond \"hi\"\n}\n").unwrap();

    let (_, result, sink) = h.run(RecordingEngine::new(), &["3", "n"]);
    let result = result.unwrap();

    assert!(h.exists(CADDYFILE));
    assert_eq!(result.kept, vec![h.layout.path(CADDYFILE)]);
    assert!(sink.at(Severity::Warn).iter().any(|w| w.contains("Caddyfile")));
}

#[test]
fn bundled_manifests_are_written_once() {
    let h = Harness::new();
    let (_, first, _) = h.run(RecordingEngine::new(), &["3", "n"]);
    assert_eq!(first.unwrap().bundled.len(), 4);
    assert!(h.exists("docker-compose.yml"));

    let (_, second, _) = h.run(RecordingEngine::new(), &["3", "n"]);
    assert!(second.unwrap().bundled.is_empty());
}

#[test]
fn detection_failure_falls_back_to_localhost() {
    let h = Harness::new();
    let probes: Vec<Box<dyn AddressProbe>> = vec![Box::new(FixedProbe(Err("timed out")))];
    let use_case = SetupUseCase::new(RecordingEngine::new(), LocalFs::new(), probes);
    let sink = RecordingSink::new();

    let result = use_case
        .execute(&h.options(), &ScriptedPrompter::new(&["2", "n"]), &sink)
        .unwrap();

    assert!(h.read(CADDYFILE).contains("http://localhost:3000"));
    assert_eq!(result.endpoints()[0].1, "http://localhost:3000");
    assert!(sink.at(Severity::Warn).len() >= 2);
}

#[test]
fn secrets_never_reach_the_sink() {
    let h = Harness::new();
    let (_, result, sink) = h.run(RecordingEngine::new(), &["2", "y"]);
    let result = result.unwrap();

    let text = sink.all_text();
    for secret in result.config.secrets.all() {
        assert!(!text.contains(secret.expose()));
    }
}

#[cfg(unix)]
#[test]
fn env_files_are_private() {
    use std::os::unix::fs::PermissionsExt;

    let h = Harness::new();
    let (_, result, _) = h.run(RecordingEngine::new(), &["3", "y"]);
    result.unwrap();

    for file in [ENV_FILE, SUBSTACK_ENV_FILE] {
        let mode = std::fs::metadata(h.layout.path(file)).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "{}", file);
    }
}
