//! Scripture reference parsing.
//!
//! Accepts the `Book:verse` and `Book:start-end` shapes. The book part is
//! kept verbatim, so `"John 3:16"` parses to book `"John 3"` and the chapter
//! stays unset.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A parsed scripture citation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    book: String,
    chapter: Option<u32>,
    verse_start: u32,
    verse_end: u32,
}

impl Reference {
    /// Build a reference from its parts.
    pub fn new(
        book: impl Into<String>,
        chapter: Option<u32>,
        verse_start: u32,
        verse_end: u32,
    ) -> Result<Self, ParseError> {
        if verse_start > verse_end {
            return Err(ParseError::ReversedRange {
                start: verse_start,
                end: verse_end,
            });
        }
        Ok(Self {
            book: book.into(),
            chapter,
            verse_start,
            verse_end,
        })
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    /// Never populated by [`parse`]; only set through [`Reference::new`].
    pub fn chapter(&self) -> Option<u32> {
        self.chapter
    }

    pub fn verse_start(&self) -> u32 {
        self.verse_start
    }

    pub fn verse_end(&self) -> u32 {
        self.verse_end
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chapter {
            Some(chapter) => write!(
                f,
                "{} {}:{}-{}",
                self.book, chapter, self.verse_start, self.verse_end
            ),
            None => write!(f, "{}:{}-{}", self.book, self.verse_start, self.verse_end),
        }
    }
}

impl FromStr for Reference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a citation such as `"Alma 32:21"` or `"Moroni 10:4-5"`.
pub fn parse(input: &str) -> Result<Reference, ParseError> {
    let Some((book, verses)) = input.split_once(':') else {
        return Err(ParseError::MissingSeparator {
            input: input.to_string(),
        });
    };

    let segments: Vec<&str> = verses.split('-').collect();
    let (start, end) = match segments.as_slice() {
        [single] => {
            let verse = parse_verse(single)?;
            (verse, verse)
        }
        [start, end] => (parse_verse(start)?, parse_verse(end)?),
        _ => {
            return Err(ParseError::InvalidRange {
                input: verses.to_string(),
            })
        }
    };

    Reference::new(book, None, start, end)
}

fn parse_verse(segment: &str) -> Result<u32, ParseError> {
    segment
        .trim()
        .parse()
        .map_err(|source| ParseError::InvalidVerse {
            segment: segment.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_verse() {
        let r = parse("Alma 32:21").unwrap();
        assert_eq!(r.book(), "Alma 32");
        assert_eq!(r.chapter(), None);
        assert_eq!(r.verse_start(), 21);
        assert_eq!(r.verse_end(), 21);
    }

    #[test]
    fn verse_range() {
        let r: Reference = "X:1-3".parse().unwrap();
        assert_eq!(r.book(), "X");
        assert_eq!(r.verse_start(), 1);
        assert_eq!(r.verse_end(), 3);
    }

    #[test]
    fn book_is_kept_verbatim() {
        let r = parse("  1 Nephi 3 :7").unwrap();
        assert_eq!(r.book(), "  1 Nephi 3 ");
    }

    #[test]
    fn segments_are_trimmed() {
        let r = parse("John 3: 16 - 17 ").unwrap();
        assert_eq!(r.verse_start(), 16);
        assert_eq!(r.verse_end(), 17);
    }

    #[test]
    fn only_first_colon_splits() {
        let err = parse("a:1:2").unwrap_err();
        assert!(matches!(err, ParseError::InvalidVerse { ref segment, .. } if segment == "1:2"));
    }

    #[test]
    fn missing_colon() {
        let err = parse("Bad").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                input: "Bad".into()
            }
        );
    }

    #[test]
    fn non_numeric_verse() {
        assert!(matches!(
            parse("John 3:sixteen"),
            Err(ParseError::InvalidVerse { .. })
        ));
        assert!(matches!(
            parse("John 3:"),
            Err(ParseError::InvalidVerse { .. })
        ));
        assert!(matches!(
            parse("John 3:4-"),
            Err(ParseError::InvalidVerse { .. })
        ));
    }

    #[test]
    fn too_many_dashes() {
        assert_eq!(
            parse("X:1-2-3").unwrap_err(),
            ParseError::InvalidRange {
                input: "1-2-3".into()
            }
        );
    }

    #[test]
    fn reversed_range() {
        assert_eq!(
            parse("X:5-2").unwrap_err(),
            ParseError::ReversedRange { start: 5, end: 2 }
        );
    }

    #[test]
    fn display_without_chapter() {
        assert_eq!(parse("John 3:16").unwrap().to_string(), "John 3:16-16");
    }

    #[test]
    fn display_with_chapter() {
        let r = Reference::new("John", Some(3), 16, 17).unwrap();
        assert_eq!(r.to_string(), "John 3:16-17");
    }

    proptest! {
        #[test]
        fn single_form_sets_both_ends(book in "[A-Za-z ]{1,12}", n in 0u32..10_000) {
            let r = parse(&format!("{book}:{n}")).unwrap();
            prop_assert_eq!(r.book(), book.as_str());
            prop_assert_eq!(r.verse_start(), n);
            prop_assert_eq!(r.verse_end(), n);
        }

        #[test]
        fn range_form_keeps_order(book in "[A-Za-z ]{1,12}", n in 0u32..5_000, len in 0u32..5_000) {
            let m = n + len;
            let r = parse(&format!("{book}:{n}-{m}")).unwrap();
            prop_assert_eq!(r.verse_start(), n);
            prop_assert_eq!(r.verse_end(), m);
        }

        #[test]
        fn never_panics(input in ".{0,64}") {
            let _ = parse(&input);
        }
    }
}
