//! Page counting and cost arithmetic
//!
//! Prices are whole pesos; there is no fractional currency anywhere in the
//! kiosk. The cost of a job is always recomputed from the current
//! configuration when asked for, never cached.

use crate::error::PageRangeError;
use crate::types::{ColorMode, PageMode, PrintJobConfig};

/// The mockup's only document always has 10 pages.
pub const DOCUMENT_PAGES: u32 = 10;

/// Per-page rates in pesos, by color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceList {
    pub black_white: u32,
    pub color: u32,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            black_white: 2,
            color: 5,
        }
    }
}

impl PriceList {
    pub fn per_page(&self, mode: ColorMode) -> u32 {
        match mode {
            ColorMode::BlackWhite => self.black_white,
            ColorMode::Color => self.color,
        }
    }
}

/// Parse a page-range expression into a page count.
///
/// The grammar is comma-separated tokens, each either a single positive
/// integer (`8`) or a `start-end` span (`1-5`). Whitespace around tokens
/// and around the dash is tolerated. A singleton counts 1 page, a span
/// `end - start + 1` pages.
///
/// Parsing is strict: an empty expression, an empty token, a non-numeric
/// token, a page number of 0, or a reversed span rejects the whole
/// expression with a typed error. Page numbers beyond the document's
/// actual length are accepted — the kiosk never cross-checks against the
/// (fake) document.
pub fn parse_page_range(expr: &str) -> Result<u32, PageRangeError> {
    if expr.trim().is_empty() {
        return Err(PageRangeError::Empty);
    }

    let mut count: u32 = 0;
    for token in expr.split(',') {
        let token = token.trim();
        if token.is_empty() {
            return Err(PageRangeError::EmptyToken);
        }

        count = count.saturating_add(match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_page_number(start)?;
                let end = parse_page_number(end)?;
                if end < start {
                    return Err(PageRangeError::ReversedSpan { start, end });
                }
                // Inclusive span; floored at 1 even if arithmetic ever
                // produced 0 (it cannot after the checks above).
                (end - start).saturating_add(1).max(1)
            }
            None => {
                parse_page_number(token)?;
                1
            }
        });
    }

    Ok(count.max(1))
}

fn parse_page_number(token: &str) -> Result<u32, PageRangeError> {
    let token = token.trim();
    let value: u32 = token
        .parse()
        .map_err(|_| PageRangeError::InvalidNumber {
            token: token.to_string(),
        })?;
    if value == 0 {
        return Err(PageRangeError::ZeroPage);
    }
    Ok(value)
}

/// Number of document pages the job will print, per its page selection.
pub fn page_count(job: &PrintJobConfig) -> Result<u32, PageRangeError> {
    match job.page_mode {
        PageMode::All => Ok(DOCUMENT_PAGES),
        PageMode::Range => parse_page_range(&job.page_range),
    }
}

/// A fully computed cost breakdown for the Summary and Payment screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostSummary {
    /// Document pages selected for printing
    pub pages: u32,
    pub copies: u32,
    /// Pesos per page at the job's color mode
    pub price_per_page: u32,
}

impl CostSummary {
    /// Total sheets that come out of the tray.
    pub fn sheets(&self) -> u32 {
        self.pages.saturating_mul(self.copies)
    }

    /// Total cost in pesos.
    pub fn total(&self) -> u32 {
        self.sheets().saturating_mul(self.price_per_page)
    }
}

/// Compute the current cost breakdown for a job.
pub fn cost_summary(job: &PrintJobConfig, prices: PriceList) -> Result<CostSummary, PageRangeError> {
    Ok(CostSummary {
        pages: page_count(job)?,
        copies: job.copies,
        price_per_page: prices.per_page(job.color_mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageMode;

    fn range_job(expr: &str) -> PrintJobConfig {
        PrintJobConfig {
            page_mode: PageMode::Range,
            page_range: expr.to_string(),
            ..PrintJobConfig::default()
        }
    }

    #[test]
    fn test_all_pages_is_document_length() {
        let job = PrintJobConfig::default();
        assert_eq!(page_count(&job), Ok(DOCUMENT_PAGES));
    }

    #[test]
    fn test_mixed_spans_and_singletons() {
        // 5 + 1 + 1
        assert_eq!(parse_page_range("1-5, 8, 10"), Ok(7));
    }

    #[test]
    fn test_single_page() {
        assert_eq!(parse_page_range("3"), Ok(1));
    }

    #[test]
    fn test_single_span() {
        assert_eq!(parse_page_range("2-4"), Ok(3));
        assert_eq!(parse_page_range("7-7"), Ok(1));
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse_page_range("  1 - 3 ,5,  9 "), Ok(4));
    }

    #[test]
    fn test_count_is_at_least_one() {
        assert!(parse_page_range("1").unwrap() >= 1);
        assert!(parse_page_range("1-1").unwrap() >= 1);
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert_eq!(parse_page_range(""), Err(PageRangeError::Empty));
        assert_eq!(parse_page_range("   "), Err(PageRangeError::Empty));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(parse_page_range("1,,3"), Err(PageRangeError::EmptyToken));
        assert_eq!(parse_page_range("1,2,"), Err(PageRangeError::EmptyToken));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(
            parse_page_range("x"),
            Err(PageRangeError::InvalidNumber {
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_page_range("1-five"),
            Err(PageRangeError::InvalidNumber {
                token: "five".to_string()
            })
        );
    }

    #[test]
    fn test_zero_page_rejected() {
        assert_eq!(parse_page_range("0"), Err(PageRangeError::ZeroPage));
        assert_eq!(parse_page_range("0-3"), Err(PageRangeError::ZeroPage));
    }

    #[test]
    fn test_reversed_span_rejected() {
        assert_eq!(
            parse_page_range("3-1"),
            Err(PageRangeError::ReversedSpan { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_black_white_total() {
        // 10 pages × 2 copies × 2 pesos
        let job = PrintJobConfig {
            copies: 2,
            ..PrintJobConfig::default()
        };
        let cost = cost_summary(&job, PriceList::default()).unwrap();
        assert_eq!(cost.total(), 40);
        assert_eq!(cost.sheets(), 20);
    }

    #[test]
    fn test_color_total() {
        // 10 pages × 1 copy × 5 pesos
        let job = PrintJobConfig {
            color_mode: ColorMode::Color,
            ..PrintJobConfig::default()
        };
        let cost = cost_summary(&job, PriceList::default()).unwrap();
        assert_eq!(cost.total(), 50);
    }

    #[test]
    fn test_range_total_uses_parsed_count() {
        let mut job = range_job("1-5, 8, 10");
        job.copies = 3;
        let cost = cost_summary(&job, PriceList::default()).unwrap();
        assert_eq!(cost.pages, 7);
        assert_eq!(cost.total(), 7 * 3 * 2);
    }

    #[test]
    fn test_custom_price_list() {
        let prices = PriceList {
            black_white: 3,
            color: 8,
        };
        assert_eq!(prices.per_page(ColorMode::BlackWhite), 3);
        assert_eq!(prices.per_page(ColorMode::Color), 8);
    }

    #[test]
    fn test_malformed_range_blocks_cost() {
        let job = range_job("3-1");
        assert!(cost_summary(&job, PriceList::default()).is_err());
    }
}
