//! Keyword intent classification for free-text commands
//!
//! A transcript is normalized (trimmed, lowercased) and tested against two
//! fixed keyword sets. The channel test runs first and wins outright, so a
//! transcript that matches both sets is a channel request. Whatever is left
//! after stripping the command words becomes the catalog search phrase.

use crate::query::{CatalogQuery, Filter, SearchFields, CHANNEL_SEARCH, SONG_SEARCH};
use crate::types::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

const CHANNEL_KEYWORDS: [&str; 5] = ["play channel", "open channel", "play radio", "open radio", "fm"];

/// Stripped from channel requests in this order, every occurrence
const CHANNEL_NOISE: [&str; 5] = ["play", "open", "channel", "radio", "fm"];

const SONG_KEYWORDS: [&str; 5] = ["play song", "find song", "play", "find", "search"];

/// Multi-word phrases go before the single words they contain
const SONG_NOISE: [&str; 5] = ["play song", "find song", "search song", "search", "play"];

pub const CHANNEL_RESULT_LIMIT: usize = 5;
pub const SONG_RESULT_LIMIT: usize = 10;

pub const EMPTY_TRANSCRIPT_MESSAGE: &str = "I didn't catch that.";
pub const HELP_MESSAGE: &str = "Try: 'Play channel jazz' or 'Find song by Coldplay'";

/// Action reported back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PlayChannel,
    PlaySong,
    None,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayChannel => "play_channel",
            Self::PlaySong => "play_song",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified purpose of a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Nothing left after trimming
    Empty,
    PlayChannel { phrase: String },
    PlaySong { phrase: String },
    /// No keyword matched
    Unrecognized,
}

impl Intent {
    pub fn classify(transcript: &str) -> Self {
        let normalized = transcript.trim().to_lowercase();
        if normalized.is_empty() {
            return Self::Empty;
        }

        if contains_any(&normalized, &CHANNEL_KEYWORDS) {
            return Self::PlayChannel {
                phrase: residual_phrase(&normalized, &CHANNEL_NOISE),
            };
        }

        if contains_any(&normalized, &SONG_KEYWORDS) {
            return Self::PlaySong {
                phrase: residual_phrase(&normalized, &SONG_NOISE),
            };
        }

        Self::Unrecognized
    }

    pub fn action(&self) -> Action {
        match self {
            Self::PlayChannel { .. } => Action::PlayChannel,
            Self::PlaySong { .. } => Action::PlaySong,
            Self::Empty | Self::Unrecognized => Action::None,
        }
    }

    /// Residual search phrase, for intents that search
    pub fn phrase(&self) -> Option<&str> {
        match self {
            Self::PlayChannel { phrase } | Self::PlaySong { phrase } => Some(phrase),
            Self::Empty | Self::Unrecognized => None,
        }
    }

    /// Catalog search to run, or `None` when no query should touch the store
    pub fn search(&self) -> Option<CatalogSearch> {
        match self {
            Self::PlayChannel { phrase } => Some(CatalogSearch::Channels(
                CatalogQuery::new()
                    .with_text(Some(phrase.as_str()))
                    .with_limit(CHANNEL_RESULT_LIMIT),
            )),
            Self::PlaySong { phrase } => Some(CatalogSearch::Songs(
                CatalogQuery::new()
                    .with_text(Some(phrase.as_str()))
                    .with_limit(SONG_RESULT_LIMIT),
            )),
            Self::Empty | Self::Unrecognized => None,
        }
    }

    /// Guidance for intents that do not search
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_TRANSCRIPT_MESSAGE),
            Self::Unrecognized => Some(HELP_MESSAGE),
            Self::PlayChannel { .. } | Self::PlaySong { .. } => None,
        }
    }
}

/// A search against one collection, with the fields its phrase is matched on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSearch {
    Channels(CatalogQuery),
    Songs(CatalogQuery),
}

impl CatalogSearch {
    pub fn collection(&self) -> Collection {
        match self {
            Self::Channels(_) => Collection::Channels,
            Self::Songs(_) => Collection::Songs,
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        match self {
            Self::Channels(query) | Self::Songs(query) => query,
        }
    }

    pub fn fields(&self) -> SearchFields {
        match self {
            Self::Channels(_) => CHANNEL_SEARCH,
            Self::Songs(_) => SONG_SEARCH,
        }
    }

    pub fn filter(&self) -> Filter {
        self.query().filter(self.fields())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Remove every occurrence of each noise word, in order, then trim
pub fn residual_phrase(transcript: &str, noise: &[&str]) -> String {
    noise
        .iter()
        .fold(transcript.to_string(), |acc, word| acc.replace(word, ""))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_transcripts_do_not_search() {
        for transcript in ["", "   ", "\n\t"] {
            let intent = Intent::classify(transcript);
            assert_eq!(intent, Intent::Empty);
            assert_eq!(intent.action(), Action::None);
            assert!(intent.search().is_none());
            assert_eq!(intent.guidance(), Some(EMPTY_TRANSCRIPT_MESSAGE));
        }
    }

    #[test]
    fn play_channel_strips_command_words() {
        let intent = Intent::classify("Play channel jazz");
        assert_eq!(
            intent,
            Intent::PlayChannel {
                phrase: "jazz".to_string()
            }
        );
    }

    #[test]
    fn fm_alone_is_a_channel_request() {
        let intent = Intent::classify("Lofi FM");
        assert_eq!(intent.action(), Action::PlayChannel);
        assert_eq!(intent.phrase(), Some("lofi"));
    }

    #[test]
    fn channel_keywords_take_priority_over_song_keywords() {
        let intent = Intent::classify("play radio and search for rock");
        assert_eq!(intent.action(), Action::PlayChannel);
        // "search" is not channel noise, so it stays in the phrase
        assert_eq!(intent.phrase(), Some("and search for rock"));
    }

    #[test]
    fn find_song_residual_keeps_rest_of_phrase() {
        let intent = Intent::classify("find song by Coldplay");
        assert_eq!(intent.action(), Action::PlaySong);
        assert_eq!(intent.phrase(), Some("by coldplay"));
    }

    #[test]
    fn multi_word_keywords_are_stripped_first() {
        assert_eq!(
            residual_phrase("play song yellow", &SONG_NOISE),
            "yellow".to_string()
        );
        assert_eq!(
            residual_phrase("search song clocks", &SONG_NOISE),
            "clocks".to_string()
        );
        // stripping the single word first would leave "song" behind
        assert_eq!(
            residual_phrase("play song yellow", &["play", "play song"]),
            "song yellow".to_string()
        );
    }

    #[test]
    fn bare_keyword_searches_everything() {
        let intent = Intent::classify("play");
        assert_eq!(intent.action(), Action::PlaySong);

        let search = intent.search().unwrap();
        assert_eq!(search.collection(), Collection::Songs);
        assert_eq!(search.query().text(), None);
        assert_eq!(search.query().limit(), SONG_RESULT_LIMIT);
        assert_eq!(search.filter(), Filter::All);
    }

    #[test]
    fn channel_search_uses_channel_limit() {
        let intent = Intent::classify("open radio rock");
        let search = intent.search().unwrap();
        assert_eq!(search.collection(), Collection::Channels);
        assert_eq!(search.query().text(), Some("rock"));
        assert_eq!(search.query().limit(), CHANNEL_RESULT_LIMIT);
        assert_eq!(search.fields(), CHANNEL_SEARCH);
        assert!(matches!(search, CatalogSearch::Channels(_)));
    }

    #[test]
    fn unrecognized_transcript_gets_help() {
        let intent = Intent::classify("what's the weather like");
        assert_eq!(intent, Intent::Unrecognized);
        assert_eq!(intent.action(), Action::None);
        assert!(intent.search().is_none());
        assert_eq!(intent.guidance(), Some(HELP_MESSAGE));
    }

    #[test]
    fn action_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Action::PlayChannel).unwrap(),
            "\"play_channel\""
        );
        assert_eq!(serde_json::to_string(&Action::None).unwrap(), "\"none\"");
    }
}
