//! Pagination planning
//!
//! The listing index only serves a fixed set of page sizes. For a requested
//! item count the planner picks a page size and the number of index pages to
//! read.

use std::fmt;

/// Page sizes accepted by the listing index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageSize {
    TwentyFive = 25,
    Fifty = 50,
    Hundred = 100,
    TwoHundredFifty = 250,
}

impl PageSize {
    /// All buckets, ascending
    pub const ALL: [PageSize; 4] = [
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
        PageSize::TwoHundredFifty,
    ];

    pub const LARGEST: PageSize = PageSize::TwoHundredFifty;

    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Smallest bucket holding `count` items; the largest bucket past that
///
/// `count` must be positive; callers reject zero before planning.
pub fn bucket_for(count: u32) -> PageSize {
    debug_assert!(count > 0, "item count must be positive");
    PageSize::ALL
        .into_iter()
        .find(|bucket| bucket.as_u32() >= count)
        .unwrap_or(PageSize::LARGEST)
}

/// Number of index pages to read for `count` items
///
/// At or above the largest bucket this is `count / 250 + 1`, one page more
/// than an exact multiple needs. The harvester truncates the surplus.
pub fn page_count_for(count: u32) -> u32 {
    let largest = PageSize::LARGEST.as_u32();
    if count < largest {
        1
    } else {
        count / largest + 1
    }
}

/// Page size and page count for one crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub bucket: PageSize,
    pub page_count: u32,
}

impl PagePlan {
    pub fn for_count(count: u32) -> Self {
        Self {
            bucket: bucket_for(count),
            page_count: page_count_for(count),
        }
    }
}
