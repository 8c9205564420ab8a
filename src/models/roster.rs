use crate::models::PersonRecord;

/// The built-in demonstration roster
pub fn sample_roster() -> Vec<PersonRecord> {
    [
        ("Иванов Иван Иванович", "tester"),
        ("Степанова Наталья Степановна", "frontend-developer"),
        ("Пащенко Владимир Александрович", "analyst"),
        ("Громов Александр Иванович", "fullstack-developer"),
        ("Славин Семён Сергеевич", "analyst"),
        ("Цой Владимир Антонович", "frontend-developer"),
        ("Быстрая Юлия Сергеевна", "PR-manager"),
        ("Шматко Антонина Сергеевна", "HR-manager"),
        ("аль-Хорезми Мухаммад ибн-Муса", "analyst"),
        ("Бардо Жаклин Фёдоровна", "android-developer"),
        ("Шварцнегер Арнольд Густавович", "babysitter"),
    ]
    .into_iter()
    .map(|(full_name, job)| PersonRecord::new(full_name, job))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roster_order() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 11);
        assert_eq!(roster[0].full_name, "Иванов Иван Иванович");
        assert_eq!(roster[10].job, "babysitter");
    }
}
