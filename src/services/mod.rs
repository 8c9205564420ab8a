// Service exports
pub mod roster;

pub use roster::{load_roster, parse_json_roster, parse_toml_roster, RosterError};
