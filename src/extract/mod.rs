//! Listing page field extraction
//!
//! Turns one marketplace listing page into a [`ListingRecord`]. Every field
//! comes from a fixed markup anchor; when a required anchor is missing the
//! whole extraction fails with a [`StructureError`] instead of returning a
//! partially filled record.

mod document;
mod patterns;
mod stats;

pub use document::{normalize_whitespace, ListingDocument};
pub use patterns::{have_count, inventory_total, release_format, vote_count, want_count};
pub use stats::CommunityStats;

use crate::model::{ListingRecord, NOT_AVAILABLE};
use crate::StructureError;
use document::{adjacent_text, element_text, next_sibling_element};
use url::Url;

const ARTIST: &str = "div.profile > h1 > span > span";
const TITLE: &str = "div.profile > h1 > span";
const METADATA_HEAD: &str = "div.head";
const TRACK_ROW: &str = "tr.tracklist_track";
const PRICE: &str = "span.price";
const CONDITION_LABEL: &str = "strong";
const RELEASE_PAGE_LINK: &str = "a.release-page";

/// Currency glyphs stripped from the price text
const CURRENCY_GLYPHS: &[char] = &['€', '$', '£', '¥'];

/// Normalized text of the "Format" metadata block
///
/// Read once per page; both the edition flag and the release format are
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo(String);

impl ReleaseInfo {
    pub fn new(text: &str) -> Self {
        Self(normalize_whitespace(text))
    }

    pub fn is_limited_edition(&self) -> bool {
        self.0.contains("Limited Edition")
    }

    pub fn release_format(&self) -> Result<String, StructureError> {
        patterns::release_format(&self.0).ok_or_else(|| StructureError::PatternMismatch {
            field: "release_format",
            text: self.0.clone(),
        })
    }
}

/// Extracts listing records, resolving release links against `origin`
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    origin: Url,
}

impl FieldExtractor {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    /// Parses `html` and extracts its record
    ///
    /// The parsed document is dropped before returning, so this is safe to
    /// call between awaits.
    pub fn extract_html(&self, html: &str) -> Result<ListingRecord, StructureError> {
        self.extract(&ListingDocument::parse(html))
    }

    /// Extracts the record from a parsed listing page
    pub fn extract(&self, doc: &ListingDocument) -> Result<ListingRecord, StructureError> {
        let stats = CommunityStats::resolve(doc)?;
        let release_info = ReleaseInfo::new(&metadata_block(doc, "Format")?);

        let record = ListingRecord {
            artist: normalize_whitespace(&element_text(doc.require(ARTIST)?)),
            title: normalize_whitespace(&element_text(doc.require_nth(TITLE, 1)?)),
            label: normalize_whitespace(&metadata_block(doc, "Label")?),
            release_format: release_info.release_format()?,
            track_count: doc.count(TRACK_ROW)?,
            release_date: normalize_whitespace(&metadata_block(doc, "Released")?),
            price: price(doc)?,
            rating: stats.rating().to_owned(),
            vote_count: stats.votes().to_owned(),
            have_count: stats.have().to_owned(),
            want_count: stats.want().to_owned(),
            is_limited_edition: u8::from(release_info.is_limited_edition()),
            media_condition: media_condition(doc)?,
            sleeve_condition: sleeve_condition(doc)?,
            detail_url: self.detail_url(doc)?,
        };

        tracing::trace!(?record, "Extracted listing");
        Ok(record)
    }

    fn detail_url(&self, doc: &ListingDocument) -> Result<String, StructureError> {
        let link = doc.require(RELEASE_PAGE_LINK)?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| StructureError::missing(format!("{}[href]", RELEASE_PAGE_LINK)))?;

        self.origin
            .join(href.trim())
            .map(String::from)
            .map_err(|_| StructureError::PatternMismatch {
                field: "detail_url",
                text: href.to_owned(),
            })
    }
}

/// Text of the `div` following the metadata head that mentions `label`
fn metadata_block(doc: &ListingDocument, label: &str) -> Result<String, StructureError> {
    let head = doc
        .find_containing(METADATA_HEAD, label)?
        .ok_or_else(|| StructureError::missing(format!("{} '{}'", METADATA_HEAD, label)))?;
    let content = next_sibling_element(head, "div")
        .ok_or_else(|| StructureError::missing(format!("content block after '{}'", label)))?;
    Ok(element_text(content))
}

fn price(doc: &ListingDocument) -> Result<String, StructureError> {
    let text = element_text(doc.require(PRICE)?);
    Ok(text.replace(CURRENCY_GLYPHS, "").trim().to_owned())
}

fn media_condition(doc: &ListingDocument) -> Result<String, StructureError> {
    let label = doc
        .find_containing(CONDITION_LABEL, "Media:")?
        .ok_or_else(|| StructureError::missing("strong 'Media:'"))?;
    let value = next_sibling_element(label, "span")
        .ok_or_else(|| StructureError::missing("span after 'Media:'"))?;
    Ok(normalize_whitespace(&element_text(value)))
}

fn sleeve_condition(doc: &ListingDocument) -> Result<String, StructureError> {
    let Some(label) = doc.find_containing(CONDITION_LABEL, "Sleeve:")? else {
        return Ok(NOT_AVAILABLE.to_owned());
    };
    Ok(adjacent_text(label)
        .map(|text| normalize_whitespace(&text))
        .unwrap_or_default())
}
