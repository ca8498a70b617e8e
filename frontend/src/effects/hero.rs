use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config::SiteConfig;
use crate::error::BookingError;

/// Delay before each hero element settles into place.
pub fn hero_delays(count: usize, start_ms: u32, stagger_ms: u32) -> Vec<u32> {
    (0..count as u32).map(|i| start_ms + i * stagger_ms).collect()
}

fn play_hero_entrance(config: &SiteConfig) -> Result<(), BookingError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BookingError::Dom("document unavailable".to_string()))?;
    // One combined query keeps document order across the selectors.
    let nodes = document.query_selector_all(&config.hero_selectors.join(", "))?;
    let elements: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let delays = hero_delays(elements.len(), config.hero_start_ms, config.hero_stagger_ms);
    debug!("Staggering {} hero elements", elements.len());

    for (element, delay) in elements.into_iter().zip(delays) {
        let style = element.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", "translateY(30px)")?;
        style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease")?;
        Timeout::new(delay, move || {
            let style = element.style();
            if style.set_property("opacity", "1").is_err()
                || style.set_property("transform", "translateY(0)").is_err()
            {
                warn!("Failed to settle hero element");
            }
        })
        .forget();
    }
    Ok(())
}

#[hook]
pub fn use_hero_entrance(config: SiteConfig) {
    use_mount(move || {
        if let Err(err) = play_hero_entrance(&config) {
            warn!("Hero entrance skipped: {}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_delays_stagger() {
        assert_eq!(hero_delays(4, 300, 150), vec![300, 450, 600, 750]);
        assert!(hero_delays(0, 300, 150).is_empty());
    }
}
