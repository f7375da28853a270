//! Container engine implementations

mod docker;

pub use docker::{ComposeCommand, DockerCli};
