// Model exports
pub mod domain;
pub mod roster;

pub use domain::{
    CompatibilityReport, Gender, GenderComposition, GenderShare, NameParts, PersonRecord,
};
pub use roster::sample_roster;
