//! Type-safe identifiers, enums and parsers for basketball stat records.

pub mod date;
pub mod ids;
pub mod stat_category;

pub use ids::{GameId, PlayerId, StatId, TeamId};
pub use stat_category::StatCategory;
