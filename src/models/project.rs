use chrono::{Datelike, NaiveDate};
use crate::utils::i18n::{month_name, Language};

/// Proyecto mostrado en la galería (datos estáticos)
#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description_en: String,
    pub description_fr: String,
    pub tech: Vec<String>,
    pub image: String,
    pub link: String,
    pub updated_at: NaiveDate,
}

impl Project {
    pub fn description(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.description_en,
            Language::Fr => &self.description_fr,
        }
    }

    /// Fecha de actualización tal como se muestra ("May 2023" / "mai 2023")
    pub fn updated_label(&self, lang: Language) -> String {
        format!("{} {}", month_name(self.updated_at.month(), lang), self.updated_at.year())
    }

    /// true si algún campo contiene la búsqueda (ya en minúsculas)
    pub fn matches(&self, query_lower: &str, lang: Language) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description(lang).to_lowercase().contains(query_lower)
            || self.tech.iter().any(|tech| tech.to_lowercase().contains(query_lower))
    }
}

/// Orden de la galería
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Más reciente primero
    #[default]
    Updated,
    /// Por título, A-Z
    Alphabetical,
}

impl SortOption {
    pub fn slug(self) -> &'static str {
        match self {
            SortOption::Updated => "updated",
            SortOption::Alphabetical => "alphabetical",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "updated" => Some(SortOption::Updated),
            "alphabetical" => Some(SortOption::Alphabetical),
            _ => None,
        }
    }
}
