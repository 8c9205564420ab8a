//! Plain-text rendering of the sample invocations.

use rand::Rng;

use crate::core::{
    describe_gender_composition, infer_gender, join_name_parts, shorten_name, split_full_name,
    PartnerMatcher, Result,
};
use crate::models::PersonRecord;

const SAMPLE_NAME: &str = "Иванов Иван Иванович";

/// Render the numbered sample calls against `roster`
pub fn render_showcase<R: Rng + ?Sized>(
    roster: &[PersonRecord],
    matcher: &PartnerMatcher,
    rng: &mut R,
) -> Result<String> {
    let parts = split_full_name(SAMPLE_NAME)?;

    let mut lines = vec![
        "Примеры вызова функций".to_string(),
        String::new(),
        format!("1. join_name_parts: {}", join_name_parts("Иванов", "Иван", "Иванович")),
        format!("2. split_full_name: {}", SAMPLE_NAME),
        format!(
            "3. surname => {}, given_name => {}, patronymic => {}",
            parts.surname, parts.given_name, parts.patronymic
        ),
        format!("4. shorten_name: {}", shorten_name(SAMPLE_NAME)?),
    ];

    for (index, name) in ["Иванова Алина Ивановна", SAMPLE_NAME, "Яковлев Яков Яковлевич"]
        .into_iter()
        .enumerate()
    {
        let gender = infer_gender(name)?;
        lines.push(format!(
            "{}. infer_gender({}): {} ({:?})",
            index + 5,
            name,
            gender.score(),
            gender
        ));
    }

    let composition = describe_gender_composition(roster)?;
    lines.push("8. describe_gender_composition:".to_string());
    lines.push(composition.to_string().trim_end().to_string());

    let report = matcher.find_compatible_partner("иванов", "иван", "иванович", roster, rng)?;
    lines.push("9. find_compatible_partner:".to_string());
    lines.push(report.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
