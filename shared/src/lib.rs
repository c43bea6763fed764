pub mod models {
    pub mod torneo;
}

pub mod dto {
    pub mod common;
    pub mod outcome;
    pub mod torneo;
}

pub mod error;
pub mod filter;
pub mod locations;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use models::torneo::{Torneo, KNOWN_GAMES};

pub use dto::{
    common::{ErrorResponse, MessageResponse},
    outcome::MutationOutcome,
    torneo::TorneoPayload,
};

pub use filter::{FilterOutcome, TorneoFilter};
pub use locations::LocationSet;
