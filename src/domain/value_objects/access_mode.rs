//! Access Mode Value Object
//!
//! How the stack is reached from the outside. Selected once per setup run.

use serde::{Deserialize, Serialize};

/// Access method chosen by the operator
///
/// - `Domain`: one hostname per service, certificates issued automatically
/// - `DirectAddress`: the host's IP address plus a fixed port per service
/// - `Tunnel`: loopback-only ports, exposed by an external tunnel agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    Domain,
    #[default]
    DirectAddress,
    Tunnel,
}

/// Outcome of interpreting the operator's free-form mode answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChoice {
    pub mode: AccessMode,
    /// The answer was not recognized and the default mode was used instead
    pub fell_back: bool,
}

impl AccessMode {
    pub const ALL: [AccessMode; 3] = [
        AccessMode::Domain,
        AccessMode::DirectAddress,
        AccessMode::Tunnel,
    ];

    /// Parse a menu answer: the 1-based index or the mode's name.
    pub fn parse_choice(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "domain" | "domains" | "ssl" => Some(Self::Domain),
            "2" | "ip" | "direct" | "direct-address" | "address" => Some(Self::DirectAddress),
            "3" | "tunnel" | "cloudflare" | "cloudflared" => Some(Self::Tunnel),
            _ => None,
        }
    }

    /// Interpret an answer, falling back to `DirectAddress` when unrecognized.
    pub fn choose(input: &str) -> ModeChoice {
        match Self::parse_choice(input) {
            Some(mode) => ModeChoice {
                mode,
                fell_back: false,
            },
            None => ModeChoice {
                mode: Self::default(),
                fell_back: true,
            },
        }
    }

    /// Menu position (1-based) used in prompts
    pub fn menu_index(&self) -> usize {
        match self {
            Self::Domain => 1,
            Self::DirectAddress => 2,
            Self::Tunnel => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::DirectAddress => "direct-address",
            Self::Tunnel => "tunnel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Domain => "Domain names with automatic HTTPS",
            Self::DirectAddress => "Server IP address with one port per service",
            Self::Tunnel => "Secure tunnel (services bound to localhost only)",
        }
    }

    /// A Caddyfile is rendered and the proxy container started
    pub fn uses_proxy(&self) -> bool {
        matches!(self, Self::Domain | Self::DirectAddress)
    }

    /// A compose override publishing ports is rendered
    pub fn uses_port_override(&self) -> bool {
        matches!(self, Self::DirectAddress | Self::Tunnel)
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
