pub mod faction;
mod row;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::model::MemberRecord;

/// Listing page the member table lives on; relative profile links resolve
/// against it.
pub const BASE_URL: &str = "https://en.dpr.go.id/anggota/";

/// Minimum direct `<td>` children for a row to be parseable at all.
const MIN_CELLS: usize = 4;

/// Parse the listing page into member records, in table order.
///
/// Tolerant by design: an unexpected page yields an empty vector with a
/// diagnostic, and a malformed row is skipped without touching its
/// neighbours.
pub fn extract_members(markup: &str) -> Vec<MemberRecord> {
    let document = Html::parse_document(markup);
    let row_selector = Selector::parse("tbody tr").unwrap();

    let rows: Vec<_> = document.select(&row_selector).collect();
    if rows.is_empty() {
        warn!("No member rows found. Wrong HTML selector?");
        return Vec::new();
    }

    let mut members = Vec::new();
    for tr in rows {
        let cells: Vec<ElementRef> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "td")
            .collect();
        if cells.len() < MIN_CELLS {
            continue;
        }
        match row::extract(&cells) {
            Ok(member) => members.push(member),
            Err(e) => warn!("Error parsing a row: {e} - skipping row"),
        }
    }
    members
}
