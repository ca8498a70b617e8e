use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::effects::anchor::smooth_scroll_link;

pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

pub fn glitch_style(hovering: bool) -> &'static str {
    if hovering {
        "animation: glitch 0.3s ease;"
    } else {
        ""
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#tests", "Tests"),
    ("#gallery", "Lab"),
    ("#book", "Book"),
    ("#team", "Team"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct BrandKickerProps {
    pub text: AttrValue,
}

#[function_component(BrandKicker)]
pub fn brand_kicker(props: &BrandKickerProps) -> Html {
    let hovering = use_state_eq(|| false);
    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let onmouseleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    html! {
        <span class="brand-kicker" style={glitch_style(*hovering)} {onmouseenter} {onmouseleave}>
            {props.text.clone()}
        </span>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let window = web_sys::window();
                let listener_window = window.clone();
                let mut last = false;
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = listener_window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or_default();
                    let next = is_scrolled(offset, threshold);
                    if next != last {
                        debug!("Header scrolled state: {}", next);
                        last = next;
                    }
                    scrolled.set(next);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            config.header_threshold_px,
        );
    }

    let on_link = smooth_scroll_link();

    html! {
        <header class={classes!("site-header", (*scrolled).then(|| "scrolled"))}>
            <div class="header-inner">
                <a href="#top" class="brand" onclick={on_link.clone()}>
                    <BrandKicker text="// DIAGNOSTICS" />
                    <span class="brand-name">{"Precision Lab"}</span>
                </a>
                <nav class="site-nav">
                    {
                        NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link" onclick={on_link.clone()}>{*label}</a>
                        }).collect::<Html>()
                    }
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_toggles_both_ways() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
        assert!(!is_scrolled(0.0, 50.0));
    }

    #[test]
    fn test_glitch_only_while_hovering() {
        assert_eq!(glitch_style(true), "animation: glitch 0.3s ease;");
        assert_eq!(glitch_style(false), "");
    }
}
