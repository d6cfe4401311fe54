// ============================================================================
// SECTION - Identificador cerrado de las vistas de primer nivel
// ============================================================================

/// Sección visible de la aplicación. Exactamente una está activa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Main,
    About,
    Projects,
    Resume,
    Contact,
    Timeline,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Main,
        SectionId::About,
        SectionId::Projects,
        SectionId::Resume,
        SectionId::Contact,
        SectionId::Timeline,
    ];

    /// Slug estable (atributo `data-section`, logs)
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Main => "main",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
            SectionId::Timeline => "timeline",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.slug() == slug)
    }

    /// Clave i18n del enlace en el menú
    pub fn link_key(self) -> &'static str {
        match self {
            SectionId::Main => "homeLink",
            SectionId::About => "aboutLink",
            SectionId::Projects => "projectsLink",
            SectionId::Resume => "cvLink",
            SectionId::Contact => "contactLink",
            SectionId::Timeline => "timelineLink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_main() {
        assert_eq!(SectionId::default(), SectionId::Main);
    }

    #[test]
    fn slug_round_trips_for_every_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_slug(section.slug()), Some(section));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(SectionId::from_slug("blog"), None);
        assert_eq!(SectionId::from_slug("Main"), None);
    }
}
