//! Re-running setup in another access mode

use crate::common::TestEnv;
use crate::{assert_exit_code, assert_generated, assert_not_generated};

fn env_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(&format!("{}=", key)))
        .map(|v| v.trim_matches('\'').to_string())
}

#[test]
fn switching_from_domain_to_tunnel_drops_the_caddyfile() {
    let env = TestEnv::new();

    let domain = env.run_with_input(
        &["setup"],
        "domain\nn\nanalytics.example.com\nstatus.example.com\ngrafana.example.com\n\n",
    );
    assert_exit_code!(domain, 0);
    assert_generated!(env, "Caddyfile");
    let first_secret = env_value(&env.read(".env"), "UMAMI_APP_SECRET");

    let tunnel = env.run_with_input(&["setup"], "3\nn\n");
    assert_exit_code!(tunnel, 0);
    assert_not_generated!(env, "Caddyfile");
    assert_generated!(env, "docker-compose.override.yml");

    let second_secret = env_value(&env.read(".env"), "UMAMI_APP_SECRET");
    assert!(first_secret.is_some());
    assert_ne!(first_secret, second_secret);
}

#[test]
fn declining_the_substack_later_removes_its_env_file() {
    let env = TestEnv::new();

    assert_exit_code!(env.run_with_input(&["setup"], "3\ny\n"), 0);
    assert_generated!(env, "openreplay.env");

    assert_exit_code!(env.run_with_input(&["setup"], "3\nn\n"), 0);
    assert_not_generated!(env, "openreplay.env");
    assert_not_generated!(env, "docker-compose.openreplay.override.yml");
}
