use rand::Rng;

use crate::config::MatchingSettings;
use crate::core::{
    error::{Result, ToolkitError},
    gender::infer_gender,
    names::{join_name_parts, shorten_name, title_case},
};
use crate::models::{CompatibilityReport, Gender, PersonRecord};

/// Random partner matching over a roster
///
/// # Pipeline Stages
/// 1. Title-case and join the subject's name parts
/// 2. Infer the subject's gender
/// 3. Draw random roster records until one has the opposite, determined gender
/// 4. Roll a compatibility score
///
/// Stage 3 is bounded by `attempts_per_record * roster.len()` draws.
#[derive(Debug, Clone, Copy)]
pub struct PartnerMatcher {
    attempts_per_record: u32,
    min_score_hundredths: u32,
    max_score_hundredths: u32,
}

impl PartnerMatcher {
    pub fn new(
        attempts_per_record: u32,
        min_score_hundredths: u32,
        max_score_hundredths: u32,
    ) -> Self {
        let (min, max) = if min_score_hundredths <= max_score_hundredths {
            (min_score_hundredths, max_score_hundredths)
        } else {
            (max_score_hundredths, min_score_hundredths)
        };

        Self {
            attempts_per_record: attempts_per_record.max(1),
            min_score_hundredths: min,
            max_score_hundredths: max,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(10, 5000, 10000)
    }

    pub fn from_settings(settings: &MatchingSettings) -> Self {
        Self::new(
            settings.attempts_per_record,
            settings.min_score_hundredths,
            settings.max_score_hundredths,
        )
    }

    /// Maximum number of draws for a roster of `roster_len` records
    pub fn attempt_budget(&self, roster_len: usize) -> usize {
        (self.attempts_per_record as usize).saturating_mul(roster_len)
    }

    /// Pick a random partner of the opposite gender for the given name
    ///
    /// # Arguments
    /// * `surname`, `given_name`, `patronymic` - Subject name parts, any casing
    /// * `roster` - Candidates to draw from
    /// * `rng` - Random source for both the draw and the score
    ///
    /// # Returns
    /// CompatibilityReport with both short names and a score
    pub fn find_compatible_partner<R: Rng + ?Sized>(
        &self,
        surname: &str,
        given_name: &str,
        patronymic: &str,
        roster: &[PersonRecord],
        rng: &mut R,
    ) -> Result<CompatibilityReport> {
        let full_name = join_name_parts(
            &title_case(surname),
            &title_case(given_name),
            &title_case(patronymic),
        );
        let gender = infer_gender(&full_name)?;

        let partner = self.draw_partner(gender, roster, rng)?;
        let score = self.roll_score(rng);

        tracing::debug!("Matched {} with {} at {}%", full_name, partner.full_name, score);

        Ok(CompatibilityReport {
            person_a: shorten_name(&full_name)?,
            person_b: shorten_name(&partner.full_name)?,
            score,
        })
    }

    fn draw_partner<'a, R: Rng + ?Sized>(
        &self,
        gender: Gender,
        roster: &'a [PersonRecord],
        rng: &mut R,
    ) -> Result<&'a PersonRecord> {
        if roster.is_empty() {
            return Err(ToolkitError::EmptyRoster);
        }

        let budget = self.attempt_budget(roster.len());

        for attempt in 1..=budget {
            let candidate = &roster[rng.random_range(0..roster.len())];
            let candidate_gender = infer_gender(&candidate.full_name)?;

            if candidate_gender != gender && candidate_gender.is_determined() {
                tracing::trace!("Partner found on attempt {}", attempt);
                return Ok(candidate);
            }
        }

        tracing::warn!(
            "No {:?}-compatible partner among {} records after {} attempts",
            gender,
            roster.len(),
            budget
        );
        Err(ToolkitError::NoCompatiblePartner { attempts: budget })
    }

    /// Uniform score in the configured range, two decimals
    fn roll_score<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let hundredths = rng.random_range(self.min_score_hundredths..=self.max_score_hundredths);
        hundredths as f64 / 100.0
    }
}

impl Default for PartnerMatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Partner search with default settings and the thread-local RNG
pub fn find_compatible_partner(
    surname: &str,
    given_name: &str,
    patronymic: &str,
    roster: &[PersonRecord],
) -> Result<CompatibilityReport> {
    PartnerMatcher::default().find_compatible_partner(
        surname,
        given_name,
        patronymic,
        roster,
        &mut rand::rng(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_roster;
    use rand::{rngs::StdRng, SeedableRng};

    fn males_only() -> Vec<PersonRecord> {
        vec![
            PersonRecord::new("Иванов Иван Иванович", "tester"),
            PersonRecord::new("Громов Александр Иванович", "analyst"),
        ]
    }

    #[test]
    fn test_finds_female_partner_for_male() {
        let matcher = PartnerMatcher::with_defaults();
        let roster = sample_roster();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let report = matcher
                .find_compatible_partner("иванов", "иван", "иванович", &roster, &mut rng)
                .unwrap();

            assert_eq!(report.person_a, "Иван И.");
            assert!(
                ["Наталья С.", "Юлия Б.", "Антонина Ш."].contains(&report.person_b.as_str()),
                "unexpected partner {}",
                report.person_b
            );
        }
    }

    #[test]
    fn test_finds_male_partner_for_female() {
        let matcher = PartnerMatcher::with_defaults();
        let mut rng = StdRng::seed_from_u64(11);
        let mut roster = males_only();
        roster.push(PersonRecord::new("Быстрая Юлия Сергеевна", "PR-manager"));

        let report = matcher
            .find_compatible_partner("ИВАНОВА", "АЛИНА", "ИВАНОВНА", &roster, &mut rng)
            .unwrap();

        assert_eq!(report.person_a, "Алина И.");
        assert!(report.person_b == "Иван И." || report.person_b == "Александр Г.");
    }

    #[test]
    fn test_single_gender_roster_terminates() {
        let matcher = PartnerMatcher::with_defaults();
        let mut rng = StdRng::seed_from_u64(1);

        let result =
            matcher.find_compatible_partner("Иванов", "Иван", "Иванович", &males_only(), &mut rng);

        assert_eq!(result, Err(ToolkitError::NoCompatiblePartner { attempts: 20 }));
    }

    #[test]
    fn test_undetermined_roster_terminates() {
        let matcher = PartnerMatcher::new(3, 5000, 10000);
        let mut rng = StdRng::seed_from_u64(2);
        let roster = vec![
            PersonRecord::new("аль-Хорезми Мухаммад ибн-Муса", "analyst"),
            PersonRecord::new("Бардо Жаклин Фёдоровна", "android-developer"),
        ];

        let result =
            matcher.find_compatible_partner("Иванов", "Иван", "Иванович", &roster, &mut rng);

        assert_eq!(result, Err(ToolkitError::NoCompatiblePartner { attempts: 6 }));
    }

    #[test]
    fn test_empty_roster() {
        let matcher = PartnerMatcher::with_defaults();
        let mut rng = StdRng::seed_from_u64(3);

        let result = matcher.find_compatible_partner("Иванов", "Иван", "Иванович", &[], &mut rng);

        assert_eq!(result, Err(ToolkitError::EmptyRoster));
    }

    #[test]
    fn test_undetermined_subject_accepts_any_determined_partner() {
        let matcher = PartnerMatcher::with_defaults();
        let mut rng = StdRng::seed_from_u64(4);

        let report = matcher
            .find_compatible_partner("бардо", "жаклин", "фёдоровна", &males_only(), &mut rng)
            .unwrap();

        assert_eq!(report.person_a, "Жаклин Б.");
    }

    #[test]
    fn test_score_within_bounds() {
        let matcher = PartnerMatcher::with_defaults();
        let roster = sample_roster();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let report = matcher
                .find_compatible_partner("Иванов", "Иван", "Иванович", &roster, &mut rng)
                .unwrap();
            assert!((50.0..=100.0).contains(&report.score), "score {}", report.score);
            assert_eq!((report.score * 100.0).round() / 100.0, report.score);
        }
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let matcher = PartnerMatcher::new(0, 9000, 6000);
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(matcher.attempt_budget(4), 4);
        for _ in 0..50 {
            let score = matcher.roll_score(&mut rng);
            assert!((60.0..=90.0).contains(&score));
        }
    }

    #[test]
    fn test_attempt_budget_saturates() {
        let matcher = PartnerMatcher::new(u32::MAX, 5000, 10000);
        assert_eq!(matcher.attempt_budget(usize::MAX), usize::MAX);
        assert_eq!(matcher.attempt_budget(0), 0);
    }

    #[test]
    fn test_hyphenated_subject_name_is_title_cased() {
        let matcher = PartnerMatcher::with_defaults();
        let mut rng = StdRng::seed_from_u64(6);

        let roster = sample_roster();

        let report = matcher
            .find_compatible_partner("аль-хорезми", "мухаммад-али", "ибн-муса", &roster, &mut rng)
            .unwrap();

        assert_eq!(report.person_a, "Мухаммад-Али А.");
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let report =
            find_compatible_partner("иванов", "иван", "иванович", &sample_roster()).unwrap();
        assert_eq!(report.person_a, "Иван И.");
    }
}
