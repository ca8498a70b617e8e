use log::Level;

/// Page-wide settings, built once in `main` and shared through a context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub messaging_host: &'static str,
    pub recipient_id: &'static str,
    pub phone_prefix: &'static str,
    pub hero_start_ms: u32,
    pub hero_stagger_ms: u32,
    pub hero_selectors: &'static [&'static str],
    pub reveal_selectors: &'static [&'static str],
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: u32,
    pub header_threshold_px: f64,
    pub shake_ms: u32,
    pub submit_latency_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            messaging_host: "wa.me",
            recipient_id: "923367251204",
            phone_prefix: "+92 ",
            hero_start_ms: 300,
            hero_stagger_ms: 150,
            hero_selectors: &[".hero-copy > *", ".hero-metrics", ".hero-panel"],
            reveal_selectors: &[
                ".section-head",
                ".test-category",
                ".gallery-item",
                ".contact-card",
                ".book-copy",
                "form",
                ".manager-card",
            ],
            reveal_threshold: 0.15,
            reveal_stagger_ms: 120,
            header_threshold_px: 50.0,
            shake_ms: 500,
            submit_latency_ms: 1_000,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
