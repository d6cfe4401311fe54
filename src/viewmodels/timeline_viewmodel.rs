// ============================================================================
// TIMELINE VIEWMODEL - Entradas visibles y alineación alternada
// ============================================================================

use crate::models::TimelineEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Índice par a la derecha, impar a la izquierda
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Side::Left => "timeline-item left",
            Side::Right => "timeline-item right",
        }
    }
}

/// Entradas a pintar, en orden de autoría, sin los separadores vacíos
pub fn layout(entries: &[TimelineEntry]) -> Vec<(Side, &TimelineEntry)> {
    entries
        .iter()
        .filter(|entry| !entry.is_blank())
        .enumerate()
        .map(|(i, entry)| (Side::for_index(i), entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineCategory;

    fn entry(title: &str, category: Option<TimelineCategory>) -> TimelineEntry {
        TimelineEntry {
            period: "2020".to_string(),
            title: title.to_string(),
            place: String::new(),
            description: String::new(),
            category,
        }
    }

    #[test]
    fn alternates_starting_on_the_right() {
        let entries = vec![
            entry("A", Some(TimelineCategory::Education)),
            entry("B", Some(TimelineCategory::Work)),
            entry("C", Some(TimelineCategory::Work)),
        ];
        let sides: Vec<Side> = layout(&entries).into_iter().map(|(side, _)| side).collect();
        assert_eq!(sides, [Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn blank_entries_are_skipped_without_breaking_alternation() {
        let entries = vec![
            entry("A", Some(TimelineCategory::Education)),
            entry("", None),
            entry("B", Some(TimelineCategory::Work)),
            entry("   ", Some(TimelineCategory::Work)),
        ];
        let out = layout(&entries);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].0, Side::Left);
        assert_eq!(out[1].1.title, "B");
    }

    #[test]
    fn shipped_timeline_has_no_blank_rows() {
        let entries = crate::content::timeline(crate::utils::i18n::Language::En);
        assert!(layout(&entries).iter().all(|(_, e)| !e.title.is_empty()));
    }
}
