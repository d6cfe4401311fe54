/// Categoría de una entrada del parcours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineCategory {
    Education,
    Work,
}

impl TimelineCategory {
    /// Clave i18n y clase CSS
    pub fn key(self) -> &'static str {
        match self {
            TimelineCategory::Education => "education",
            TimelineCategory::Work => "work",
        }
    }
}

/// Entrada de la línea de tiempo, ya localizada.
/// Las entradas sin categoría son separadores vacíos.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub place: String,
    pub description: String,
    pub category: Option<TimelineCategory>,
}

impl TimelineEntry {
    pub fn is_blank(&self) -> bool {
        self.category.is_none() || self.title.trim().is_empty()
    }
}
