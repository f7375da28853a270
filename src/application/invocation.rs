//! Orchestrator invocations for the two manifests
//!
//! Optional pieces (override, env file) are included when they exist on disk,
//! so `setup`, `down`, `status` and `teardown` address the same services.

use crate::domain::entities::layout::{substack_project, PROXY_PROFILE};
use crate::domain::entities::StackLayout;
use crate::domain::ports::{ComposeInvocation, FileSystem};

/// Primary manifest; the proxy profile is included when `with_proxy` is set
pub fn primary_invocation<FS: FileSystem + ?Sized>(
    fs: &FS,
    layout: &StackLayout,
    project: &str,
    with_proxy: bool,
) -> ComposeInvocation {
    let mut invocation = ComposeInvocation::new(project, layout.primary_manifest());
    if fs.exists(&layout.primary_override()) {
        invocation = invocation.with_manifest(layout.primary_override());
    }
    if fs.exists(&layout.env_file()) {
        invocation = invocation.with_env_file(layout.env_file());
    }
    if with_proxy {
        invocation = invocation.with_profile(PROXY_PROFILE);
    }
    invocation
}

pub fn substack_invocation<FS: FileSystem + ?Sized>(
    fs: &FS,
    layout: &StackLayout,
    project: &str,
) -> ComposeInvocation {
    let mut invocation =
        ComposeInvocation::new(substack_project(project), layout.substack_manifest());
    if fs.exists(&layout.substack_override()) {
        invocation = invocation.with_manifest(layout.substack_override());
    }
    if fs.exists(&layout.substack_env_file()) {
        invocation = invocation.with_env_file(layout.substack_env_file());
    }
    invocation
}
