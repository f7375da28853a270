//! Test environment for running the statstack binary in isolation.
//!
//! Each `TestEnv` owns a temporary stack directory, a temporary home (so no
//! user config leaks in) and, on unix, a fake `docker` script whose state
//! lives in plain text files.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Result of running a statstack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Fake `docker` executable.
///
/// Every invocation is appended to `$FAKE_DOCKER_STATE/calls`. Containers,
/// volumes and networks are listed from (and removed from) files of the same
/// name in the state directory.
const FAKE_DOCKER: &str = r#"#!/bin/sh
state="$FAKE_DOCKER_STATE"
echo "$*" >> "$state/calls"
drop() {
    f="$state/$1"
    [ -f "$f" ] || return 0
    grep -vx "$2" "$f" > "$f.tmp"
    mv "$f.tmp" "$f"
}
case "$1" in
    --version) echo "Docker version 27.3.1, build fake"; exit 0 ;;
    compose)
        shift
        if [ "$1" = version ]; then echo "Docker Compose version v2.29.7"; exit 0; fi
        case " $* " in
            *" ps "*) echo "NAME STATUS"; cat "$state/containers" 2>/dev/null ;;
        esac
        if [ -n "$FAKE_COMPOSE_ERROR" ]; then echo "$FAKE_COMPOSE_ERROR" >&2; exit 1; fi
        exit 0 ;;
    ps) cat "$state/containers" 2>/dev/null ;;
    rm) drop containers "$3" ;;
    volume)
        case "$2" in
            ls) cat "$state/volumes" 2>/dev/null ;;
            rm) drop volumes "$4" ;;
        esac ;;
    network)
        case "$2" in
            ls) cat "$state/networks" 2>/dev/null ;;
            rm) drop networks "$3" ;;
        esac ;;
esac
exit 0
"#;

/// Isolated environment for one test
pub struct TestEnv {
    /// Stack directory the binary runs in
    pub stack_dir: TempDir,
    /// HOME and XDG_CONFIG_HOME for the child
    pub home_dir: TempDir,
    /// Fake docker script and its state files
    pub docker_dir: TempDir,
    bin: PathBuf,
    extra_env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let docker_dir = tempfile::tempdir().expect("create docker dir");
        let script = docker_dir.path().join("docker");
        std::fs::write(&script, FAKE_DOCKER).expect("write fake docker");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
                .expect("make fake docker executable");
        }

        Self {
            stack_dir: tempfile::tempdir().expect("create stack dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
            docker_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_statstack")),
            extra_env: Vec::new(),
        }
    }

    /// Use `docker` as the engine executable instead of the fake
    pub fn with_docker(mut self, docker: &str) -> Self {
        self.extra_env
            .push(("STATSTACK_DOCKER".to_string(), docker.to_string()));
        self
    }

    /// Extra environment variable for the child
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.extra_env.push((key.to_string(), value.to_string()));
        self
    }

    /// Make every `docker compose` call except `version` fail with `message`
    pub fn with_compose_error(mut self, message: &str) -> Self {
        self.extra_env
            .push(("FAKE_COMPOSE_ERROR".to_string(), message.to_string()));
        self
    }

    /// Seed the fake engine with resources of one kind (`containers`, `volumes`, `networks`)
    pub fn with_resources(self, kind: &str, names: &[&str]) -> Self {
        let mut content = names.join("\n");
        content.push('\n');
        std::fs::write(self.docker_dir.path().join(kind), content).expect("seed resources");
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.stack_dir.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Resources of `kind` the fake engine still knows about
    pub fn resources(&self, kind: &str) -> Vec<String> {
        std::fs::read_to_string(self.docker_dir.path().join(kind))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Every fake docker invocation so far, one argument string per call
    pub fn docker_calls(&self) -> Vec<String> {
        self.resources("calls")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, "")
    }

    /// Run with `input` piped to stdin; stdin is closed afterwards
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.stack_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env(
                "STATSTACK_DOCKER",
                self.docker_dir.path().join("docker").display().to_string(),
            )
            .env("FAKE_DOCKER_STATE", self.docker_dir.path())
            .env_remove("STATSTACK_PROJECT")
            .env_remove("STATSTACK_IP_PROBE_URL")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.extra_env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute statstack");
        if let Some(mut stdin) = child.stdin.take() {
            // The child may exit before reading everything.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for statstack");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Files directly inside the stack directory, sorted
    pub fn stack_files(&self) -> Vec<String> {
        list_files(self.stack_dir.path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
