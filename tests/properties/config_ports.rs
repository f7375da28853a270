//! Property tests for port validation.

use std::path::Path;

use proptest::prelude::*;

use statstack::Config;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a configuration validates exactly when its ports are non-zero, distinct
    /// and clear of the proxy's 80/443.
    #[test]
    fn property_ports_valid_iff_nonzero_distinct_and_unreserved(
        ports in proptest::array::uniform4(prop_oneof![0u16..8, Just(80u16), Just(443u16)])
    ) {
        let mut config = Config::default();
        config.ports.umami = ports[0];
        config.ports.uptime_kuma = ports[1];
        config.ports.grafana = ports[2];
        config.ports.openreplay = ports[3];

        let mut sorted = ports.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let expected = !ports.iter().any(|p| [0, 80, 443].contains(p)) && sorted.len() == ports.len();

        prop_assert_eq!(config.validate(Path::new("statstack.toml")).is_ok(), expected);
    }
}
