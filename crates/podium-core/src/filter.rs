//! Placement filtering utilities

use crate::enrich::EnrichedPlacement;

/// Filter configuration for the enriched placement list.
///
/// Used by the listing surface only; aggregation always runs over the
/// unfiltered sequence.
#[derive(Debug, Clone, Default)]
pub struct PlacementFilter<'a> {
    /// Exact-match filter on the placement's category
    pub category: Option<&'a str>,
    /// Case-insensitive substring match against student id, student name,
    /// program name, or category
    pub query: Option<&'a str>,
}

impl<'a> PlacementFilter<'a> {
    /// Create a new filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter
    pub fn with_category(mut self, category: Option<&'a str>) -> Self {
        self.category = category;
        self
    }

    /// Set the search query
    pub fn with_query(mut self, query: Option<&'a str>) -> Self {
        self.query = query;
        self
    }

    /// Check if a placement matches all configured filters
    pub fn matches(&self, placement: &EnrichedPlacement) -> bool {
        self.matches_category(placement) && self.matches_query(placement)
    }

    fn matches_category(&self, placement: &EnrichedPlacement) -> bool {
        match self.category {
            Some(category) => placement.category == category,
            None => true,
        }
    }

    fn matches_query(&self, placement: &EnrichedPlacement) -> bool {
        let Some(query) = self.query else {
            return true;
        };
        let query = query.to_lowercase();

        placement.student_id.to_lowercase().contains(&query)
            || placement.student_name.to_lowercase().contains(&query)
            || placement.program_name.to_lowercase().contains(&query)
            || placement.category.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student_id: &str, name: &str, program: &str, category: &str) -> EnrichedPlacement {
        EnrichedPlacement {
            program_id: "P001".into(),
            program_name: program.into(),
            student_id: student_id.into(),
            student_name: name.into(),
            team: "Hilal".into(),
            class: Some(4),
            position: Some(1),
            grade: Some("A".into()),
            category: category.into(),
            score: 10,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PlacementFilter::new();
        assert!(filter.matches(&row("523", "Ayisha", "Solo Recitation", "Thaniyyah")));
    }

    #[test]
    fn test_category_is_exact_match() {
        let filter = PlacementFilter::new().with_category(Some("Thaniyyah"));
        assert!(filter.matches(&row("523", "Ayisha", "Solo Recitation", "Thaniyyah")));
        assert!(!filter.matches(&row("523", "Ayisha", "Solo Recitation", "Thanawiyyah")));
    }

    #[test]
    fn test_query_matches_across_fields() {
        let row = row("523", "Ayisha Nasrin", "Solo Recitation", "Thaniyyah");
        assert!(PlacementFilter::new().with_query(Some("523")).matches(&row));
        assert!(PlacementFilter::new()
            .with_query(Some("nasrin"))
            .matches(&row));
        assert!(PlacementFilter::new()
            .with_query(Some("RECIT"))
            .matches(&row));
        assert!(PlacementFilter::new()
            .with_query(Some("thaniyyah"))
            .matches(&row));
        assert!(!PlacementFilter::new()
            .with_query(Some("painting"))
            .matches(&row));
    }

    #[test]
    fn test_both_filters_must_match() {
        let filter = PlacementFilter::new()
            .with_category(Some("Thaniyyah"))
            .with_query(Some("ayisha"));
        assert!(filter.matches(&row("523", "Ayisha", "Solo Recitation", "Thaniyyah")));
        assert!(!filter.matches(&row("523", "Ayisha", "Solo Recitation", "Ula")));
        assert!(!filter.matches(&row("345", "Fathima", "Solo Recitation", "Thaniyyah")));
    }
}
