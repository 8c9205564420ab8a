use crate::core::{error::Result, names::split_full_name};
use crate::models::Gender;

/// Infer gender from the endings of a full name
///
/// Each female marker subtracts one, each male marker adds one; the sign
/// of the total decides. Equal signals cancel out to `Undetermined`.
///
/// `str::ends_with` compares whole UTF-8 sequences, so the Cyrillic
/// suffix checks below are code-point exact.
pub fn infer_gender(full_name: &str) -> Result<Gender> {
    let parts = split_full_name(full_name)?;
    Ok(Gender::from_score(gender_score(
        &parts.surname,
        &parts.given_name,
        &parts.patronymic,
    )))
}

/// Raw heuristic score for already split name parts
pub fn gender_score(surname: &str, given_name: &str, patronymic: &str) -> i32 {
    let mut score = 0;

    // Female markers
    if patronymic.ends_with("вна") {
        score -= 1;
    }
    if given_name.ends_with('а') {
        score -= 1;
    }
    if surname.ends_with("ва") {
        score -= 1;
    }

    // Male markers
    if patronymic.ends_with("ич") {
        score += 1;
    }
    if matches!(given_name.chars().last(), Some('й' | 'н')) {
        score += 1;
    }
    if surname.ends_with('в') {
        score += 1;
    }

    score
}
