// ABOUTME: Slide grouping module for the deckgen library
// ABOUTME: Partitions the flat element list into slide-sized groups

use crate::elements::{ContentElement, SlideGroup};
use log::debug;

/// Maximum number of elements placed on one slide.
pub const SLIDE_ELEMENT_CAP: usize = 8;

/// Text at or above this size (h1-h3) starts a new slide.
pub const SLIDE_BREAK_FONT_SIZE: u32 = 24;

/// Split `elements` into slide groups.
///
/// Large headings open a new group; a group is closed as soon as it holds
/// `cap` elements. Always returns at least one group, which is empty only
/// when there were no elements.
pub fn group_elements(elements: Vec<ContentElement>, cap: usize) -> Vec<SlideGroup> {
    let mut groups = Vec::new();
    let mut current: SlideGroup = Vec::new();

    for element in elements {
        let breaks_slide = element
            .font_size()
            .is_some_and(|size| size >= SLIDE_BREAK_FONT_SIZE);

        if breaks_slide && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(element);

        if current.len() >= cap {
            groups.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    if groups.is_empty() {
        groups.push(Vec::new());
    }

    debug!("Grouped elements into {} slides", groups.len());
    groups
}
