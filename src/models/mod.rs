mod registry;
mod session;
mod stats;
mod undo;

pub use registry::{Registry, RegistrySnapshot};
pub use session::{
    Session, SessionConfig, TeamTile, DEFAULT_MEMBERS_PER_TEAM, MAX_MEMBERS_PER_TEAM,
};
