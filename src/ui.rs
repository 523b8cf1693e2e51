use dioxus::prelude::*;

use crate::config;
use crate::theme::{theme_definition, theme_from_env};
use crate::views::ChatView;

const FINCH_CSS: Asset = asset!("/assets/finch.css");

#[component]
pub fn App() -> Element {
    rsx! {
        ThemeStyles {}
        AppHeader {}
        ChatView {}
    }
}

#[component]
fn ThemeStyles() -> Element {
    let definition = theme_definition(theme_from_env());
    rsx! {
        document::Link { rel: "stylesheet", href: FINCH_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader() -> Element {
    let endpoint = config::api_config().chat_url();
    rsx! {
        div { class: "header",
            h1 { class: "header-title", "Finch" }
            span { class: "header-endpoint", "{endpoint}" }
        }
    }
}
