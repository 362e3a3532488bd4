//! Query surface over a parsed listing page
//!
//! The field extractor only needs a handful of DOM operations: select by CSS
//! selector, find an element by the text it contains, step to the next
//! sibling element of a given tag, and read the text node right after an
//! element. They are collected here so the extraction rules never touch the
//! parser directly.

use crate::StructureError;
use scraper::{ElementRef, Html, Selector};

/// A parsed marketplace page
pub struct ListingDocument {
    html: Html,
}

impl ListingDocument {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns every element matching `css`, in document order
    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>, StructureError> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Returns the first element matching `css`, if any
    pub fn select_first(&self, css: &str) -> Result<Option<ElementRef<'_>>, StructureError> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).next())
    }

    /// Returns the first element matching `css`, failing if there is none
    pub fn require(&self, css: &str) -> Result<ElementRef<'_>, StructureError> {
        self.select_first(css)?
            .ok_or_else(|| StructureError::missing(css))
    }

    /// Returns the `index`-th element matching `css`, failing if there is none
    pub fn require_nth(&self, css: &str, index: usize) -> Result<ElementRef<'_>, StructureError> {
        let selector = parse_selector(css)?;
        self.html
            .select(&selector)
            .nth(index)
            .ok_or_else(|| StructureError::missing(format!("{} (#{})", css, index + 1)))
    }

    /// Counts the elements matching `css`
    pub fn count(&self, css: &str) -> Result<usize, StructureError> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).count())
    }

    /// Returns the first element matching `css` whose text contains `needle`
    pub fn find_containing(
        &self,
        css: &str,
        needle: &str,
    ) -> Result<Option<ElementRef<'_>>, StructureError> {
        let selector = parse_selector(css)?;
        Ok(self
            .html
            .select(&selector)
            .find(|element| element_text(*element).contains(needle)))
    }
}

fn parse_selector(css: &str) -> Result<Selector, StructureError> {
    Selector::parse(css).map_err(|_| StructureError::missing(format!("valid selector `{}`", css)))
}

/// Concatenates all text below `element`
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Returns the next sibling element with tag name `tag`, skipping text nodes
pub fn next_sibling_element<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag)
}

/// Returns the text of the node directly after `element`
///
/// A text node is returned as is; an element sibling contributes all of its
/// text. Whitespace is left untouched.
pub fn adjacent_text(element: ElementRef<'_>) -> Option<String> {
    let node = element.next_sibling()?;
    if let Some(text) = node.value().as_text() {
        let text: &str = &text.text;
        return Some(text.to_owned());
    }
    ElementRef::wrap(node).map(element_text)
}

/// Collapses runs of whitespace (including newlines) to single spaces and trims
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
