use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PersonRecord {
    #[validate(length(min = 1))]
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub job: String,
}

impl PersonRecord {
    pub fn new(full_name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            job: job.into(),
        }
    }
}

/// Surname, given name and patronymic of a full name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub surname: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    pub patronymic: String,
}

/// Gender inferred from name endings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Undetermined,
}

impl Gender {
    /// Map a heuristic score onto a gender by its sign
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Gender::Male,
            s if s < 0 => Gender::Female,
            _ => Gender::Undetermined,
        }
    }

    /// Tri-state encoding: +1 male, -1 female, 0 undetermined
    pub fn score(self) -> i8 {
        match self {
            Gender::Male => 1,
            Gender::Female => -1,
            Gender::Undetermined => 0,
        }
    }

    pub fn is_determined(self) -> bool {
        self != Gender::Undetermined
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Мужчины",
            Gender::Female => "Женщины",
            Gender::Undetermined => "Не удалось определить",
        }
    }
}

/// Count and rounded percentage of one gender within a roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderShare {
    pub count: usize,
    pub percentage: f64,
}

/// Gender breakdown of a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderComposition {
    pub total: usize,
    pub male: GenderShare,
    pub female: GenderShare,
    pub undetermined: GenderShare,
}

impl GenderComposition {
    pub fn share(&self, gender: Gender) -> GenderShare {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Undetermined => self.undetermined,
        }
    }
}

impl fmt::Display for GenderComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Гендерный состав аудитории:")?;
        writeln!(f, "---------------------------")?;
        for gender in [Gender::Male, Gender::Female, Gender::Undetermined] {
            writeln!(f, "{} - {}%", gender.label(), self.share(gender).percentage)?;
        }
        Ok(())
    }
}

/// Result of a partner search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    #[serde(rename = "personA")]
    pub person_a: String,
    #[serde(rename = "personB")]
    pub person_b: String,
    pub score: f64,
}

impl fmt::Display for CompatibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = \n♡ Идеально на {}% ♡",
            self.person_a, self.person_b, self.score
        )
    }
}
