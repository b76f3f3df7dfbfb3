//! Catalog query builder
//!
//! Turns optional free-text and genre parameters into a [`Filter`] predicate
//! that a [`DocumentStore`](crate::DocumentStore) evaluates.
//!
//! The two parameters match differently:
//! - free text is an unanchored, case-insensitive substring match against
//!   either of two fields (title/artist for songs, name/genre for channels);
//! - genre is an anchored, case-insensitive full-string match.
//!
//! Both combine with AND. With neither present every document matches.

/// Result count used when the caller does not give one
pub const DEFAULT_LIMIT: usize = 50;

/// A document field that filters may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Name,
    Genre,
}

impl Field {
    /// Key of the field inside a stored document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Name => "name",
            Self::Genre => "genre",
        }
    }
}

/// The pair of fields a free-text term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub primary: Field,
    pub secondary: Field,
}

/// Songs are searched by title or artist
pub const SONG_SEARCH: SearchFields = SearchFields {
    primary: Field::Title,
    secondary: Field::Artist,
};

/// Channels are searched by name or genre
pub const CHANNEL_SEARCH: SearchFields = SearchFields {
    primary: Field::Name,
    secondary: Field::Genre,
};

/// Filter predicate over the documents of one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches every document
    All,
    /// Field contains `term`, ignoring case
    Contains { field: Field, term: String },
    /// Field equals `term` in full, ignoring case
    EqualsIgnoreCase { field: Field, term: String },
    /// At least one predicate matches
    AnyOf(Vec<Filter>),
    /// Every predicate matches
    AllOf(Vec<Filter>),
}

impl Filter {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Combine two predicates with AND. `All` is the identity.
    #[must_use]
    pub fn and(self, other: Filter) -> Filter {
        match (self, other) {
            (Self::All, f) | (f, Self::All) => f,
            (Self::AllOf(mut left), Self::AllOf(right)) => {
                left.extend(right);
                Self::AllOf(left)
            }
            (Self::AllOf(mut left), f) => {
                left.push(f);
                Self::AllOf(left)
            }
            (f, Self::AllOf(mut right)) => {
                right.insert(0, f);
                Self::AllOf(right)
            }
            (left, right) => Self::AllOf(vec![left, right]),
        }
    }
}

/// Search parameters for a catalog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    text: Option<String>,
    genre: Option<String>,
    limit: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            text: None,
            genre: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text term. Blank terms are ignored.
    #[must_use]
    pub fn with_text(mut self, term: Option<impl Into<String>>) -> Self {
        self.text = non_blank(term);
        self
    }

    /// Set the genre term. Blank terms are ignored.
    #[must_use]
    pub fn with_genre(mut self, term: Option<impl Into<String>>) -> Self {
        self.genre = non_blank(term);
        self
    }

    /// Bound the result count. `0` means no limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Build the predicate, matching free text against `fields`
    pub fn filter(&self, fields: SearchFields) -> Filter {
        let text = match &self.text {
            Some(term) => Filter::AnyOf(vec![
                Filter::Contains {
                    field: fields.primary,
                    term: term.clone(),
                },
                Filter::Contains {
                    field: fields.secondary,
                    term: term.clone(),
                },
            ]),
            None => Filter::All,
        };

        let genre = match &self.genre {
            Some(term) => Filter::EqualsIgnoreCase {
                field: Field::Genre,
                term: term.clone(),
            },
            None => Filter::All,
        };

        text.and(genre)
    }
}

fn non_blank(term: Option<impl Into<String>>) -> Option<String> {
    term.map(Into::into).filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(field: Field, term: &str) -> Filter {
        Filter::Contains {
            field,
            term: term.to_string(),
        }
    }

    #[test]
    fn no_parameters_match_everything() {
        let query = CatalogQuery::new();
        assert_eq!(query.filter(SONG_SEARCH), Filter::All);
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn blank_terms_are_treated_as_absent() {
        let query = CatalogQuery::new()
            .with_text(Some(""))
            .with_genre(Some("   "));
        assert_eq!(query.text(), None);
        assert_eq!(query.genre(), None);
        assert!(query.filter(CHANNEL_SEARCH).is_all());
    }

    #[test]
    fn free_text_matches_either_search_field() {
        let query = CatalogQuery::new().with_text(Some("cold"));
        assert_eq!(
            query.filter(SONG_SEARCH),
            Filter::AnyOf(vec![
                contains(Field::Title, "cold"),
                contains(Field::Artist, "cold"),
            ])
        );
    }

    #[test]
    fn channel_text_search_uses_name_and_genre() {
        let query = CatalogQuery::new().with_text(Some("jazz"));
        assert_eq!(
            query.filter(CHANNEL_SEARCH),
            Filter::AnyOf(vec![
                contains(Field::Name, "jazz"),
                contains(Field::Genre, "jazz"),
            ])
        );
    }

    #[test]
    fn genre_is_an_exact_match() {
        let query = CatalogQuery::new().with_genre(Some("Rock"));
        assert_eq!(
            query.filter(SONG_SEARCH),
            Filter::EqualsIgnoreCase {
                field: Field::Genre,
                term: "Rock".to_string(),
            }
        );
    }

    #[test]
    fn text_and_genre_combine_with_and() {
        let query = CatalogQuery::new()
            .with_text(Some("cold"))
            .with_genre(Some("rock"))
            .with_limit(10);

        let Filter::AllOf(parts) = query.filter(SONG_SEARCH) else {
            panic!("expected a conjunction");
        };
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[0], Filter::AnyOf(_)));
        assert!(matches!(parts[1], Filter::EqualsIgnoreCase { .. }));
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn and_flattens_conjunctions() {
        let a = contains(Field::Title, "a");
        let b = contains(Field::Title, "b");
        let c = contains(Field::Title, "c");

        let combined = a.clone().and(b.clone()).and(c.clone());
        assert_eq!(combined, Filter::AllOf(vec![a.clone(), b, c]));
        assert_eq!(Filter::All.and(a.clone()), a);
    }
}
