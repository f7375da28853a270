//! setup → status → down → teardown → teardown

use crate::common::TestEnv;
use crate::{assert_exit_code, assert_generated, assert_not_generated, assert_output_contains};

const GENERATED: [&str; 5] = [
    ".env",
    "openreplay.env",
    "docker-compose.override.yml",
    "grafana/provisioning/datasources/statstack.yml",
    "prometheus/prometheus.yml",
];

#[test]
fn operator_sets_up_inspects_and_removes_the_stack() {
    let env = TestEnv::new();

    let setup = env.run_with_input(&["setup"], "tunnel\ny\n");
    assert_exit_code!(setup, 0);
    for file in GENERATED {
        assert_generated!(env, file);
    }

    // What compose would have created
    let env = env
        .with_resources(
            "containers",
            &[
                "statstack-umami-1",
                "statstack-uptime-kuma-1",
                "statstack-openreplay-openreplay-frontend-1",
            ],
        )
        .with_resources("volumes", &["statstack_umami-db", "statstack-openreplay_minio-data"])
        .with_resources("networks", &["bridge", "statstack_edge"]);

    let status = env.run(&["status"]);
    assert_exit_code!(status, 0);
    assert!(status.stdout.contains("statstack-uptime-kuma-1"));
    assert!(status.stdout.contains("statstack-openreplay"));

    let down = env.run(&["down"]);
    assert_exit_code!(down, 0);
    assert_output_contains!(down, "Stopped 2 compose project(s)");

    let teardown = env.run_with_input(&["teardown"], "yes\n");
    assert_exit_code!(teardown, 0);
    assert_output_contains!(teardown, "Teardown Complete");
    for file in GENERATED {
        assert_not_generated!(env, file);
    }
    assert_generated!(env, "docker-compose.yml");
    assert!(env.resources("containers").is_empty());
    assert!(env.resources("volumes").is_empty());
    assert_eq!(env.resources("networks"), ["bridge"]);

    let purges: Vec<String> = env
        .docker_calls()
        .into_iter()
        .filter(|c| c.ends_with("down --volumes --remove-orphans"))
        .collect();
    assert_eq!(purges.len(), 2);
    assert!(purges[0].contains("-p statstack-openreplay "), "{:?}", purges);
    assert!(purges[1].contains("-p statstack "), "{:?}", purges);

    let again = env.run(&["teardown", "--yes"]);
    assert_exit_code!(again, 0);
    assert_output_contains!(again, "Nothing to remove");
}
