// ============================================================================
// PROJECTS VIEWMODEL - Búsqueda, orden y paginación de la galería
// ============================================================================

use crate::models::{Project, SortOption};
use crate::utils::i18n::Language;

/// Filtrar por búsqueda (sin distinguir mayúsculas) y ordenar.
/// El orden es estable: en empate se conserva el orden de autoría.
pub fn filter_and_sort<'a>(
    projects: &'a [Project],
    query: &str,
    sort: SortOption,
    lang: Language,
) -> Vec<&'a Project> {
    let query_lower = query.to_lowercase();
    let mut filtered: Vec<&Project> = projects
        .iter()
        .filter(|project| project.matches(&query_lower, lang))
        .collect();

    match sort {
        SortOption::Alphabetical => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOption::Updated => filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }

    filtered
}

/// Los primeros `limit` proyectos; `limit <= 0` no muestra ninguno
pub fn visible_projects<'a>(
    projects: &'a [Project],
    query: &str,
    sort: SortOption,
    lang: Language,
    limit: i64,
) -> Vec<&'a Project> {
    let mut result = filter_and_sort(projects, query, sort, lang);
    result.truncate(usize::try_from(limit).unwrap_or(0));
    result
}

/// Estado de la sección de proyectos
pub struct ProjectsViewModel {
    projects: Vec<Project>,
    query: String,
    sort: SortOption,
    page_size: i64,
    display_count: i64,
    selected: Option<u32>,
}

impl ProjectsViewModel {
    pub fn new(projects: Vec<Project>, page_size: i64) -> Self {
        Self {
            projects,
            query: String::new(),
            sort: SortOption::default(),
            page_size,
            display_count: page_size,
            selected: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn display_count(&self) -> i64 {
        self.display_count
    }

    /// Nueva búsqueda: vuelve a la primera página
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.display_count = self.page_size;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn show_more(&mut self) {
        self.display_count = self.display_count.max(0).saturating_add(self.page_size.max(1));
    }

    pub fn visible(&self, lang: Language) -> Vec<&Project> {
        visible_projects(&self.projects, &self.query, self.sort, lang, self.display_count)
    }

    pub fn match_count(&self, lang: Language) -> usize {
        filter_and_sort(&self.projects, &self.query, self.sort, lang).len()
    }

    pub fn has_more(&self, lang: Language) -> bool {
        self.visible(lang).len() < self.match_count(lang)
    }

    pub fn select(&mut self, id: u32) {
        if self.projects.iter().any(|p| p.id == id) {
            self.selected = Some(id);
        } else {
            log::warn!("⚠️ [PROJECTS] Proyecto {} no existe", id);
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|p| p.id == id)
    }
}
