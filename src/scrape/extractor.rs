//! Record extractor for listing items
//!
//! The listing marks each venue with a `div.item` block containing an `h2`
//! with the name, a `p` with the address, an `img`, an anchor labeled
//! "Detalhes" and an anchor classed `address` with the map link. Name and
//! address are mandatory; everything else extracts to `None` when missing.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::venue::VenueDetails;

const ITEM_SELECTOR: &str = "div.item";
const NAME_SELECTOR: &str = "h2";
const ADDRESS_SELECTOR: &str = "p";
const IMAGE_SELECTOR: &str = "img";
const MAP_LINK_SELECTOR: &str = "a.address";
const DETAILS_LABEL: &str = "Detalhes";

/// Why an item was rejected by the validity gate.
///
/// Rejections are ordinary control flow, not failures: the coordinator logs
/// them at warning level and moves on to the next sibling item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemRejection {
    #[error("no venue name found in item markup")]
    MissingName,

    #[error("no address found in item markup")]
    MissingAddress,
}

/// Extracts one venue from an item fragment
///
/// Each optional field resolves independently; a missing image or link never
/// rejects the item. Name and address are the validity gate: without both,
/// the item yields a rejection instead of a record.
pub fn extract_item(item: &ElementRef<'_>) -> Result<VenueDetails, ItemRejection> {
    let name = first_text(item, NAME_SELECTOR).ok_or(ItemRejection::MissingName)?;
    let address = first_text(item, ADDRESS_SELECTOR).ok_or(ItemRejection::MissingAddress)?;

    let image_url = first_attr(item, IMAGE_SELECTOR, "src");
    let details_url = labeled_link(item, DETAILS_LABEL);
    let map_url = first_attr(item, MAP_LINK_SELECTOR, "href");

    Ok(VenueDetails {
        name,
        address,
        image_url,
        details_url,
        map_url,
    })
}

/// Extracts every item on a listing page, in document order
///
/// One outcome per `div.item` fragment; a rejected fragment never affects
/// its siblings.
///
/// # Example
///
/// ```
/// use buteco_mapa::scrape::extract_venues;
///
/// let html = r#"<div class="item"><h2>Bar do Zé</h2><p>Rua A, 1</p></div>"#;
/// let outcomes = extract_venues(html);
/// assert_eq!(outcomes.len(), 1);
/// assert!(outcomes[0].is_ok());
/// ```
pub fn extract_venues(html: &str) -> Vec<Result<VenueDetails, ItemRejection>> {
    let document = Html::parse_document(html);

    let item_selector = match Selector::parse(ITEM_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&item_selector)
        .map(|item| extract_item(&item))
        .collect()
}

/// First matching element's trimmed text, `None` when empty or absent
fn first_text(item: &ElementRef<'_>, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    item.select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// First matching element's attribute, `None` when absent or empty
fn first_attr(item: &ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    item.select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

/// Href of the anchor whose trimmed visible text equals `label`
fn labeled_link(item: &ElementRef<'_>, label: &str) -> Option<String> {
    let selector = Selector::parse("a[href]").ok()?;
    item.select(&selector)
        .find(|element| element.text().collect::<String>().trim() == label)
        .and_then(|element| element.value().attr("href"))
        .map(str::to_string)
}
