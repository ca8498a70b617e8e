use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::error::BookingError;

/// Element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn smooth_scroll_to(id: &str) -> Result<(), BookingError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BookingError::Dom("document unavailable".to_string()))?;
    let Some(target) = document.get_element_by_id(id) else {
        debug!("No scroll target #{}", id);
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Click handler for `<a href="#...">` links: animates to the target instead
/// of jumping.
pub fn smooth_scroll_link() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        let href = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|link| link.get_attribute("href"));
        let Some(href) = href.filter(|h| h.starts_with('#')) else {
            return;
        };
        e.prevent_default();
        if let Some(id) = anchor_target(&href) {
            if let Err(err) = smooth_scroll_to(id) {
                warn!("Smooth scroll failed: {}", err);
            }
        }
    })
}
