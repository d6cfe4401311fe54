use crate::models::{TimelineCategory, TimelineEntry};
use crate::utils::i18n::Language;

fn entry(
    period: &str,
    title: &str,
    place: &str,
    description: &str,
    category: Option<TimelineCategory>,
) -> TimelineEntry {
    TimelineEntry {
        period: period.to_string(),
        title: title.to_string(),
        place: place.to_string(),
        description: description.to_string(),
        category,
    }
}

/// Parcours, del más reciente al más antiguo. La última entrada es un
/// separador vacío que cierra la línea.
pub fn timeline(lang: Language) -> Vec<TimelineEntry> {
    use TimelineCategory::{Education, Work};

    match lang {
        Language::Fr => vec![
            entry("2024 - Aujourd'hui", "Alternant développeur - 3ème année BUT Informatique", "CLERAD", "Développement d'un ERP interne.", Some(Work)),
            entry("2022 - 2024", "BUT Informatique - 1ère et 2ème année", "Université Clermont Auvegne - Aubière", "Spécialisation dans le développement mobile à partir de la 2ème année.", Some(Education)),
            entry("2019 - 2022", "Baccalauréat Général", "Lycée Jeanne d'Arc - Montaigu Vendée", "Mention Bien.", Some(Education)),
            entry("2015 - 2019", "Brevet des Collèges", "Collège Saint Nicolas", "Mention Bien.", Some(Education)),
            entry("", "", "", "", None),
        ],
        Language::En => vec![
            entry("2024 - Present", "Developer Apprentice - 3rd year BUT Computer Science", "CLERAD", "Development of an internal ERP system.", Some(Work)),
            entry("2022 - 2024", "BUT Computer Science - 1st and 2nd year", "Clermont Auvergne University - Aubière", "Specialization in mobile development from the 2nd year onwards.", Some(Education)),
            entry("2019 - 2022", "General Baccalaureate", "Jeanne d'Arc High School - Montaigu Vendée", "Honors degree.", Some(Education)),
            entry("2015 - 2019", "Middle School Diploma", "Saint Nicolas Middle School", "Honors degree.", Some(Education)),
            entry("", "", "", "", None),
        ],
    }
}
