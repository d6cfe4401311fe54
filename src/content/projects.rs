use chrono::NaiveDate;
use crate::models::Project;

fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

fn tags(tech: &[&str]) -> Vec<String> {
    tech.iter().map(|t| t.to_string()).collect()
}

/// Proyectos de la galería, en orden de autoría
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Portfolio".to_string(),
            description_en: "My portfolio website, now rewritten in Rust and WebAssembly. I decided to go for a different style and add some small animations ✨.".to_string(),
            description_fr: "Mon site portfolio, désormais réécrit en Rust et WebAssembly. J'ai décidé de partir sur un style différent et d'ajouter des petites animations ✨.".to_string(),
            tech: tags(&["Rust", "WebAssembly", "Tailwind CSS"]),
            image: "/img/portfolio-preview.png".to_string(),
            link: "https://www.behance.net/".to_string(),
            updated_at: date(2023, 5),
        },
        Project {
            id: 2,
            title: "Bongomino".to_string(),
            description_en: "An app based on the board game Ubongo. It was developed by a team of four developers. It is multi-platform, with single-player and multiplayer modes 🧩.".to_string(),
            description_fr: "Application tirée du jeu de société Ubongo. Elle a été réalisée dans une équipe de 4 développeurs. Multi-plateforme, mode solo et multijoueur 🧩.".to_string(),
            tech: tags(&["React Native", "Zustand"]),
            image: "/img/bongomino-preview.png".to_string(),
            link: "https://www.behance.net/".to_string(),
            updated_at: date(2023, 7),
        },
        Project {
            id: 3,
            title: "Undertalya".to_string(),
            description_en: "Android application that serves as a guide for the game Undertale. Developed in the first year of my degree with another developer ❤️.".to_string(),
            description_fr: "Application android qui permet d'être utilisé en tant que guide du jeu Undertale. Réalisé en 1ère année de BUT avec un autre développeur ❤️.".to_string(),
            tech: tags(&["C#", ".NET", "MAUI"]),
            image: "/img/undertalya-preview.png".to_string(),
            link: "https://www.behance.net/".to_string(),
            updated_at: date(2023, 8),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let all = projects();
        let ids: HashSet<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn every_project_is_fully_described() {
        for p in projects() {
            assert!(!p.title.is_empty());
            assert!(!p.description_en.is_empty(), "{}", p.title);
            assert!(!p.description_fr.is_empty(), "{}", p.title);
            assert!(!p.tech.is_empty(), "{}", p.title);
            assert_ne!(p.updated_at, NaiveDate::default(), "{}", p.title);
        }
    }
}
