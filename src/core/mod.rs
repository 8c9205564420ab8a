// Core algorithm exports
pub mod composition;
pub mod error;
pub mod gender;
pub mod matcher;
pub mod names;

pub use composition::describe_gender_composition;
pub use error::{Result, ToolkitError};
pub use gender::{gender_score, infer_gender};
pub use matcher::{find_compatible_partner, PartnerMatcher};
pub use names::{join_name_parts, shorten_name, split_full_name, title_case};
