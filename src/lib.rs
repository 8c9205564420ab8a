//! FIO Toolkit - Russian full-name utilities
//!
//! Splits and joins "surname given-name patronymic" names, infers gender from
//! name endings, summarises the gender composition of a roster and picks a
//! random opposite-gender partner with a decorative compatibility score.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod showcase;

// Re-export commonly used types
pub use crate::core::{
    describe_gender_composition, find_compatible_partner, infer_gender, join_name_parts,
    shorten_name, split_full_name, PartnerMatcher, ToolkitError,
};
pub use crate::models::{
    sample_roster, CompatibilityReport, Gender, GenderComposition, NameParts, PersonRecord,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let full_name = join_name_parts("Иванов", "Иван", "Иванович");
        assert_eq!(infer_gender(&full_name).unwrap(), Gender::Male);
    }
}
