use anyhow::Result;
use scraper::{ElementRef, Node, Selector};
use url::Url;

use super::{faction, BASE_URL};
use crate::model::{MemberRecord, NOT_AVAILABLE};

/// Extract one member record from a row's cells (at least 4, checked by the
/// caller). An error here drops the row only, never the batch.
pub fn extract(cells: &[ElementRef]) -> Result<MemberRecord> {
    let id = full_text(&cells[0]);

    // Cell 1: avatar and profile link, both optional.
    let profile_url = match first_attr(&cells[1], "a", "href") {
        Some(href) => resolve(&href)?,
        None => NOT_AVAILABLE.to_string(),
    };
    let image_url =
        first_attr(&cells[1], "img", "src").unwrap_or_else(|| NOT_AVAILABLE.to_string());

    // Cell 2: name anchor followed by faction, district and email as bare
    // text separated by <br>. The mapping is positional: the Nth non-empty
    // text node is the Nth attribute, so a stray text fragment shifts
    // everything after it.
    let name = first_anchor_text(&cells[2]).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let info = direct_text_nodes(&cells[2]);
    let faction = info
        .first()
        .and_then(|label| faction::code(label))
        .map(String::from);
    let district = info
        .get(1)
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let email = info
        .get(2)
        .map(|raw| raw.replace("[at]", "@"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    // Cell 3: committee roles, one text fragment per role.
    let roles = stripped_strings(&cells[3]);

    Ok(MemberRecord {
        id,
        name,
        faction,
        district,
        email,
        roles,
        profile_url,
        image_url,
        socials: Default::default(),
    })
}

fn resolve(href: &str) -> Result<String> {
    let absolute = Url::parse(BASE_URL)?.join(href)?;
    Ok(absolute.to_string())
}

fn full_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn first_attr(cell: &ElementRef, element: &str, attribute: &str) -> Option<String> {
    let selector = Selector::parse(element).unwrap();
    cell.select(&selector)
        .next()?
        .value()
        .attr(attribute)
        .map(String::from)
}

fn first_anchor_text(cell: &ElementRef) -> Option<String> {
    let selector = Selector::parse("a").unwrap();
    let anchor = cell.select(&selector).next()?;
    Some(anchor.text().collect::<String>().trim().to_string())
}

/// Non-empty trimmed text among the cell's direct children, in document
/// order. Child elements (the name anchor, `<br>` separators) are skipped,
/// not descended into.
fn direct_text_nodes(cell: &ElementRef) -> Vec<String> {
    cell.children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        })
        .collect()
}

/// Every non-empty stripped text fragment in the cell, descendants included.
fn stripped_strings(cell: &ElementRef) -> Vec<String> {
    cell.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}
