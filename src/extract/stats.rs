//! Community statistics block (rating, votes, have, want)
//!
//! The block comes in two shapes. A release nobody has rated shows
//! "No Rating Yet" and carries have/want in its own text; a rated release
//! has a rating element followed by a text node with every count. The shape
//! is decided once and all four fields are read from that decision.

use crate::extract::document::{adjacent_text, element_text, normalize_whitespace, ListingDocument};
use crate::extract::patterns;
use crate::model::NOT_AVAILABLE;
use crate::StructureError;

const STATS_BLOCK: &str = "div.release_info_buttons > div";
const RATING_VALUE: &str = "span.rating_value_sm";
const UNRATED_MARKER: &str = "No Rating Yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityStats {
    Unrated {
        have: String,
        want: String,
    },
    Rated {
        rating: String,
        votes: String,
        have: String,
        want: String,
    },
}

impl CommunityStats {
    pub fn resolve(doc: &ListingDocument) -> Result<Self, StructureError> {
        let block = normalize_whitespace(&element_text(doc.require(STATS_BLOCK)?));

        if block.contains(UNRATED_MARKER) {
            return Ok(Self::Unrated {
                have: required("have_count", patterns::have_count(&block), &block)?,
                want: required("want_count", patterns::want_count(&block), &block)?,
            });
        }

        let rating_element = doc.require(RATING_VALUE)?;
        let rating = normalize_whitespace(&element_text(rating_element));
        let counts = adjacent_text(rating_element)
            .map(|text| normalize_whitespace(&text))
            .unwrap_or_default();

        Ok(Self::Rated {
            rating,
            votes: required("vote_count", patterns::vote_count(&counts), &counts)?,
            have: required("have_count", patterns::have_count(&counts), &counts)?,
            want: required("want_count", patterns::want_count(&counts), &counts)?,
        })
    }

    pub fn rating(&self) -> &str {
        match self {
            Self::Unrated { .. } => NOT_AVAILABLE,
            Self::Rated { rating, .. } => rating,
        }
    }

    pub fn votes(&self) -> &str {
        match self {
            Self::Unrated { .. } => NOT_AVAILABLE,
            Self::Rated { votes, .. } => votes,
        }
    }

    pub fn have(&self) -> &str {
        match self {
            Self::Unrated { have, .. } | Self::Rated { have, .. } => have,
        }
    }

    pub fn want(&self) -> &str {
        match self {
            Self::Unrated { want, .. } | Self::Rated { want, .. } => want,
        }
    }
}

fn required(field: &'static str, value: Option<&str>, text: &str) -> Result<String, StructureError> {
    value
        .map(str::to_owned)
        .ok_or_else(|| StructureError::PatternMismatch {
            field,
            text: text.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(stats: &str) -> ListingDocument {
        ListingDocument::parse(&format!(
            r#"<html><body><div class="release_info_buttons"><div>{}</div><div>other</div></div></body></html>"#,
            stats
        ))
    }

    #[test]
    fn test_rated_shape() {
        let doc = page(r#"<span class="rating_value_sm">4.67</span> / 5 of 12 votes (140 have, 98 want)"#);
        let stats = CommunityStats::resolve(&doc).unwrap();

        assert_eq!(
            stats,
            CommunityStats::Rated {
                rating: "4.67".to_string(),
                votes: "12".to_string(),
                have: "140".to_string(),
                want: "98".to_string(),
            }
        );
    }

    #[test]
    fn test_unrated_shape_reports_sentinels() {
        let doc = page("<span>No Rating Yet</span>\n   (3 have, 17 want)");
        let stats = CommunityStats::resolve(&doc).unwrap();

        assert_eq!(stats.rating(), "N/A");
        assert_eq!(stats.votes(), "N/A");
        assert_eq!(stats.have(), "3");
        assert_eq!(stats.want(), "17");
    }

    #[test]
    fn test_unrated_marker_wins_over_rating_element() {
        let doc = page(r#"No Rating Yet <span class="rating_value_sm">0</span> (1 have, 2 want)"#);
        let stats = CommunityStats::resolve(&doc).unwrap();
        assert!(matches!(stats, CommunityStats::Unrated { .. }));
    }

    #[test]
    fn test_missing_block() {
        let doc = ListingDocument::parse("<html><body></body></html>");
        assert!(matches!(
            CommunityStats::resolve(&doc),
            Err(StructureError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_rated_without_rating_element() {
        let doc = page("Rating: 5 of 2 votes");
        assert!(matches!(
            CommunityStats::resolve(&doc),
            Err(StructureError::MissingAnchor { .. })
        ));
    }

    #[test]
    fn test_rated_with_drifted_wording() {
        let doc = page(r#"<span class="rating_value_sm">3.00</span> 2 ratings"#);
        assert!(matches!(
            CommunityStats::resolve(&doc),
            Err(StructureError::PatternMismatch { field: "vote_count", .. })
        ));
    }
}
