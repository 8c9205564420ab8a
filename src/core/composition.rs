use crate::core::{
    error::{Result, ToolkitError},
    gender::infer_gender,
};
use crate::models::{Gender, GenderComposition, GenderShare, PersonRecord};

/// Compute the gender breakdown of a roster
///
/// Percentages are rounded to one decimal place, half away from zero.
/// An empty roster is rejected before any division happens.
pub fn describe_gender_composition(roster: &[PersonRecord]) -> Result<GenderComposition> {
    if roster.is_empty() {
        return Err(ToolkitError::EmptyRoster);
    }

    let (mut male, mut female, mut undetermined) = (0usize, 0usize, 0usize);
    for person in roster {
        match infer_gender(&person.full_name)? {
            Gender::Male => male += 1,
            Gender::Female => female += 1,
            Gender::Undetermined => undetermined += 1,
        }
    }

    let total = roster.len();
    tracing::debug!(
        "Gender composition of {} records: male={}, female={}, undetermined={}",
        total,
        male,
        female,
        undetermined
    );

    Ok(GenderComposition {
        total,
        male: share(male, total),
        female: share(female, total),
        undetermined: share(undetermined, total),
    })
}

#[inline]
fn share(count: usize, total: usize) -> GenderShare {
    GenderShare {
        count,
        percentage: percentage_tenths(count, total) as f64 / 10.0,
    }
}

/// `count / total * 100` in tenths of a percent, rounded half up
///
/// Exact halves round up: 23/80 = 28.75% gives 288. `total` must be non-zero.
#[inline]
fn percentage_tenths(count: usize, total: usize) -> u64 {
    let (count, total) = (count as u64, total as u64);
    (count * 2000 + total) / (2 * total)
}
