use crate::core::error::{Result, ToolkitError};
use crate::models::NameParts;

/// Join surname, given name and patronymic with single spaces
///
/// No validation is done; empty parts produce doubled spaces.
pub fn join_name_parts(surname: &str, given_name: &str, patronymic: &str) -> String {
    format!("{} {} {}", surname, given_name, patronymic)
}

/// Split a full name into its three parts
///
/// Tokens past the third are dropped. Fewer than three tokens is an error.
pub fn split_full_name(full_name: &str) -> Result<NameParts> {
    let mut tokens = full_name.split_whitespace();

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(surname), Some(given_name), Some(patronymic)) => Ok(NameParts {
            surname: surname.to_string(),
            given_name: given_name.to_string(),
            patronymic: patronymic.to_string(),
        }),
        _ => Err(ToolkitError::MalformedName {
            name: full_name.to_string(),
            tokens: full_name.split_whitespace().count(),
        }),
    }
}

/// Shorten a full name to "<given name> <surname initial>."
pub fn shorten_name(full_name: &str) -> Result<String> {
    let parts = split_full_name(full_name)?;
    // split_whitespace never yields empty tokens
    let initial: String = parts.surname.chars().take(1).collect();

    Ok(format!("{} {}.", parts.given_name, initial))
}

/// Title-case a name part
///
/// The first character and every character after a hyphen are upper-cased,
/// the rest lower-cased: "аль-хорезми" becomes "Аль-Хорезми".
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut capitalize = true;

    for c in word.chars() {
        if capitalize {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        capitalize = c == '-';
    }

    out
}
