//! The movie record type.
//!
//! [`Movie`] is the unit of the catalog: a plain serde-serializable struct
//! whose JSON field names match the wire format exactly.

use serde::{Deserialize, Serialize};

/// One movie entity in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Opaque unique identifier. Generated records carry a UUID v4 in
    /// textual form; seed records keep whatever the dataset shipped.
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Director name.
    pub director: String,
    /// Runtime in minutes.
    pub duration: u32,
    /// Poster image URL.
    pub poster: String,
    /// Ordered genre tags.
    pub genre: Vec<String>,
    /// Score in [0, 10].
    pub rate: f64,
}

impl Movie {
    /// Returns true if any genre tag equals `genre` case-insensitively.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: "abc".to_string(),
            title: "Foo".to_string(),
            year: 1999,
            director: "Bar".to_string(),
            duration: 120,
            poster: "https://example.com/foo.jpg".to_string(),
            genre: vec!["Action".to_string(), "Sci-Fi".to_string()],
            rate: 7.0,
        }
    }

    #[test]
    fn has_genre_is_case_insensitive() {
        let movie = sample();
        assert!(movie.has_genre("Action"));
        assert!(movie.has_genre("action"));
        assert!(movie.has_genre("SCI-FI"));
        assert!(!movie.has_genre("Drama"));
    }

    #[test]
    fn has_genre_matches_whole_tags_only() {
        let movie = sample();
        // Substrings of a tag are not a match.
        assert!(!movie.has_genre("Act"));
        assert!(!movie.has_genre(""));
    }

    #[test]
    fn serde_roundtrip() {
        let movie = sample();
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(movie, back);
    }

    #[test]
    fn json_field_names_match_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in ["id", "title", "year", "director", "duration", "poster", "genre", "rate"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
