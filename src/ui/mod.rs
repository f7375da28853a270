//! Terminal output for the statstack binary
//!
//! - `theme` - colors, icons and borders (with ASCII fallbacks)
//! - `primitives` / `widgets` / `blocks` - building blocks
//! - `views` - per-command rendering
//! - `sink` - console implementation of the status port

pub mod context;
pub mod error;
pub mod sink;
pub mod terminal;
pub mod theme;

pub mod primitives {
    pub mod icon;
    pub mod text;
}

pub mod widgets {
    pub mod r#box;
}

pub mod blocks {
    pub mod error;
    pub mod header;
    pub mod summary;
    pub mod warning;
}

pub mod views {
    pub mod setup;
    pub mod status;
    pub mod teardown;
}
