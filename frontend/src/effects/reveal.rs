use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::error::BookingError;

const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledReveal {
    pub key: String,
    /// Position of the element inside the observer batch.
    pub position: usize,
    pub delay_ms: u32,
}

/// One-shot reveal bookkeeping keyed by element identity. An element leaves
/// the watch set the first time it is seen intersecting and, once revealed,
/// stays revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    watched: HashSet<String>,
    revealed: HashSet<String>,
    stagger_ms: u32,
}

impl RevealTracker {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            stagger_ms,
            ..Self::default()
        }
    }

    /// Returns false when the element is already watched or revealed.
    pub fn watch(&mut self, key: &str) -> bool {
        if self.is_revealed(key) {
            return false;
        }
        self.watched.insert(key.to_string())
    }

    pub fn observe_batch<'a>(
        &mut self,
        batch: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> Vec<ScheduledReveal> {
        let stagger_ms = self.stagger_ms;
        batch
            .into_iter()
            .enumerate()
            .filter(|(_, (key, intersecting))| *intersecting && self.watched.remove(*key))
            .map(|(position, (key, _))| ScheduledReveal {
                key: key.to_string(),
                position,
                delay_ms: position as u32 * stagger_ms,
            })
            .collect()
    }

    pub fn mark_revealed(&mut self, key: &str) {
        self.revealed.insert(key.to_string());
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn reveal_key(element: &Element) -> String {
    element.get_attribute(REVEAL_KEY_ATTR).unwrap_or_default()
}

fn start_reveal_observer(
    config: &SiteConfig,
) -> Result<(IntersectionObserver, ObserverCallback), BookingError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BookingError::Dom("document unavailable".to_string()))?;
    let tracker = Rc::new(RefCell::new(RevealTracker::new(config.reveal_stagger_ms)));

    let callback_tracker = tracker.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries: Vec<(IntersectionObserverEntry, String)> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| {
                let key = reveal_key(&entry.target());
                (entry, key)
            })
            .collect();
        let scheduled = callback_tracker.borrow_mut().observe_batch(
            entries
                .iter()
                .map(|(entry, key)| (key.as_str(), entry.is_intersecting())),
        );
        if !scheduled.is_empty() {
            debug!("Revealing {} of {} observed elements", scheduled.len(), entries.len());
        }

        for reveal in scheduled {
            let target = entries[reveal.position].0.target();
            observer.unobserve(&target);
            let tracker = callback_tracker.clone();
            Timeout::new(reveal.delay_ms, move || {
                if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                    warn!("Failed to reveal element: {:?}", err);
                }
                tracker.borrow_mut().mark_revealed(&reveal.key);
            })
            .forget();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let mut next_key = 0usize;
    for selector in config.reveal_selectors {
        let nodes = document.query_selector_all(selector)?;
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let key = match element.get_attribute(REVEAL_KEY_ATTR) {
                Some(key) => key,
                None => {
                    let key = next_key.to_string();
                    next_key += 1;
                    element.set_attribute(REVEAL_KEY_ATTR, &key)?;
                    key
                }
            };
            if tracker.borrow_mut().watch(&key) {
                observer.observe(&element);
            }
        }
    }
    debug!("Watching {} elements for reveal", next_key);

    Ok((observer, callback))
}

/// Fades in deferred sections the first time they scroll into view. Must run
/// in the component that renders those sections.
#[hook]
pub fn use_reveal_on_scroll(config: SiteConfig) {
    use_effect_with_deps(
        move |config| {
            let wiring = match start_reveal_observer(config) {
                Ok(wiring) => Some(wiring),
                Err(err) => {
                    warn!("Reveal-on-scroll disabled: {}", err);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = wiring {
                    observer.disconnect();
                }
            }
        },
        config,
    );
}
