//! The owning in-memory movie collection.
//!
//! [`Catalog`] is the single owner of the process-wide record sequence. It
//! is loaded once from a JSON source; mutations (append, in-place merge,
//! removal) stay in memory and are never written back. All lookups are
//! linear scans over the ordered sequence.

use uuid::Uuid;

use crate::error::CatalogError;
use crate::record::Movie;
use crate::validate::{MoviePatch, ValidMovie};

/// Ordered, process-lifetime collection of movie records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a catalog from an already-parsed record sequence.
    pub fn new(movies: Vec<Movie>) -> Self {
        Catalog { movies }
    }

    /// Parses a JSON array of records into a catalog.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(data)?;
        Ok(Catalog { movies })
    }

    /// The full collection, order preserved.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The subsequence of records carrying a case-insensitive match of
    /// `genre` among their tags. No match yields an empty vec, not an error.
    pub fn with_genre(&self, genre: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.has_genre(genre))
            .cloned()
            .collect()
    }

    /// First record whose id equals `id` exactly.
    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Adopts validated fields as a new record: assigns a fresh UUID v4 id,
    /// appends at the end, and returns the stored record.
    pub fn create(&mut self, fields: ValidMovie) -> Movie {
        let movie = Movie {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            year: fields.year,
            director: fields.director,
            duration: fields.duration,
            poster: fields.poster,
            genre: fields.genre,
            rate: fields.rate,
        };
        self.movies.push(movie.clone());
        movie
    }

    /// Merges a partial update over the record with the given id.
    ///
    /// The id is resolved before the patch is validated, so an unknown id
    /// reports [`CatalogError::MovieNotFound`] even for an invalid body.
    /// Patch fields win; unspecified fields are retained.
    pub fn update(&mut self, id: &str, patch: MoviePatch) -> Result<Movie, CatalogError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CatalogError::MovieNotFound { id: id.to_string() })?;

        patch.validate().map_err(CatalogError::Invalid)?;

        patch.apply(&mut self.movies[index]);
        Ok(self.movies[index].clone())
    }

    /// Removes the record with the given id, preserving the order of the
    /// remaining records.
    pub fn remove(&mut self, id: &str) -> Result<(), CatalogError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CatalogError::MovieNotFound { id: id.to_string() })?;

        self.movies.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::MovieDraft;

    fn movie(id: &str, title: &str, genres: &[&str]) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            year: 2000,
            director: "Someone".to_string(),
            duration: 100,
            poster: "https://example.com/p.jpg".to_string(),
            genre: genres.iter().map(|g| g.to_string()).collect(),
            rate: 5.0,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            movie("a", "First", &["Action"]),
            movie("b", "Second", &["Drama", "Romance"]),
            movie("c", "Third", &["action", "Crime"]),
        ])
    }

    fn valid_fields(title: &str) -> ValidMovie {
        MovieDraft {
            title: Some(title.to_string()),
            year: Some(2010),
            director: Some("New".to_string()),
            duration: Some(90),
            poster: Some("https://example.com/new.jpg".to_string()),
            genre: Some(vec!["Comedy".to_string()]),
            rate: Some(6.5),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn from_json_parses_record_array() {
        let catalog = Catalog::from_json(
            r#"[{
                "id": "x",
                "title": "Parsed",
                "year": 1985,
                "director": "D",
                "duration": 116,
                "poster": "https://example.com/x.jpg",
                "genre": ["Sci-Fi"],
                "rate": 8.5
            }]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].title, "Parsed");
    }

    #[test]
    fn from_json_rejects_malformed_dataset() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Dataset(_)));
    }

    #[test]
    fn movies_preserves_load_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn with_genre_filters_case_insensitively() {
        let catalog = sample_catalog();
        let hits = catalog.with_genre("ACTION");
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn with_genre_no_match_is_empty_not_error() {
        let catalog = sample_catalog();
        assert!(catalog.with_genre("Western").is_empty());
    }

    #[test]
    fn get_finds_by_exact_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("b").unwrap().title, "Second");
        assert!(catalog.get("B").is_none());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn create_appends_with_fresh_unique_id() {
        let mut catalog = sample_catalog();
        let before = catalog.len();

        let first = catalog.create(valid_fields("New One"));
        let second = catalog.create(valid_fields("New Two"));

        assert_eq!(catalog.len(), before + 2);
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_empty());
        // Appended at the end, in creation order.
        assert_eq!(catalog.movies()[before].id, first.id);
        assert_eq!(catalog.movies()[before + 1].id, second.id);
        // Retrievable by the assigned id.
        assert_eq!(catalog.get(&first.id).unwrap().title, "New One");
    }

    #[test]
    fn update_merges_patch_over_existing_record() {
        let mut catalog = sample_catalog();
        let patch = MoviePatch {
            year: Some(1999),
            ..MoviePatch::default()
        };

        let updated = catalog.update("a", patch).unwrap();

        assert_eq!(updated.year, 1999);
        assert_eq!(updated.title, "First");
        assert_eq!(catalog.get("a").unwrap().year, 1999);
    }

    #[test]
    fn update_unknown_id_reports_not_found_before_validation() {
        let mut catalog = sample_catalog();
        // Invalid patch, but the id is resolved first.
        let patch = MoviePatch {
            rate: Some(99.0),
            ..MoviePatch::default()
        };
        let err = catalog.update("missing", patch).unwrap_err();
        assert!(matches!(err, CatalogError::MovieNotFound { .. }));
    }

    #[test]
    fn update_invalid_patch_reports_field_errors() {
        let mut catalog = sample_catalog();
        let patch = MoviePatch {
            rate: Some(99.0),
            ..MoviePatch::default()
        };
        let err = catalog.update("a", patch).unwrap_err();
        match err {
            CatalogError::Invalid(errors) => assert_eq!(errors[0].field, "rate"),
            other => panic!("expected Invalid, got {other:?}"),
        }
        // The record is untouched.
        assert_eq!(catalog.get("a").unwrap().rate, 5.0);
    }

    #[test]
    fn empty_patch_is_a_no_op_update() {
        let mut catalog = sample_catalog();
        let before = catalog.get("b").unwrap().clone();
        let updated = catalog.update("b", MoviePatch::default()).unwrap();
        assert_eq!(updated, before);
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let mut catalog = sample_catalog();
        catalog.remove("b").unwrap();

        let ids: Vec<&str> = catalog.movies().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(catalog.get("b").is_none());
    }

    #[test]
    fn remove_unknown_id_errors() {
        let mut catalog = sample_catalog();
        let err = catalog.remove("missing").unwrap_err();
        assert!(matches!(err, CatalogError::MovieNotFound { .. }));
        assert_eq!(catalog.len(), 3);
    }
}
