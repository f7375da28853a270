//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{LifecycleUseCase, SetupUseCase, TeardownUseCase};
use crate::config::Config;
use crate::domain::ports::AddressProbe;
use crate::infrastructure::{DockerCli, HttpIpProbe, LocalFs, LocalInterfaceProbe};

/// Type alias for the concrete SetupUseCase with all dependencies
pub type ConcreteSetupUseCase = SetupUseCase<DockerCli, LocalFs>;

/// Type alias for the concrete TeardownUseCase with all dependencies
pub type ConcreteTeardownUseCase = TeardownUseCase<DockerCli, LocalFs>;

/// Type alias for the concrete LifecycleUseCase with all dependencies
pub type ConcreteLifecycleUseCase = LifecycleUseCase<DockerCli, LocalFs>;

/// Docker adapter for `config`; `echo` prints every command before it runs
pub fn create_engine(config: &Config, echo: bool) -> DockerCli {
    DockerCli::new(config.engine.docker.as_str()).with_echo(echo)
}

/// Address probes in the order they are tried: public HTTP endpoint, then local interface
pub fn create_probes(config: &Config) -> Vec<Box<dyn AddressProbe>> {
    vec![
        Box::new(HttpIpProbe::new(
            config.network.ip_probe_url.as_str(),
            config.probe_timeout(),
        )),
        Box::new(LocalInterfaceProbe::new()),
    ]
}

pub fn create_setup_use_case(config: &Config, echo: bool) -> ConcreteSetupUseCase {
    SetupUseCase::new(create_engine(config, echo), LocalFs::new(), create_probes(config))
}

pub fn create_teardown_use_case(config: &Config, echo: bool) -> ConcreteTeardownUseCase {
    TeardownUseCase::new(create_engine(config, echo), LocalFs::new())
}

pub fn create_lifecycle_use_case(config: &Config, echo: bool) -> ConcreteLifecycleUseCase {
    LifecycleUseCase::new(create_engine(config, echo), LocalFs::new())
}
