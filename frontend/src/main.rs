use log::info;
use yew::prelude::*;

mod config;
mod error;
mod booking {
    pub mod draft;
    pub mod fields;
    pub mod form;
    pub mod phone;
    pub mod submission;
}
mod effects {
    pub mod anchor;
    pub mod header;
    pub mod hero;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <Landing />
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = SiteConfig::default();
    info!("Starting booking page, messages go to {}", config.messaging_host);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
