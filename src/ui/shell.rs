use dioxus::prelude::*;

use crate::{app::Route, ui::theme, util::version::APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div { class: "brand",
                        span { class: "brand-icon", "🌾" }
                        div {
                            h1 { class: "brand-title", "{APP_NAME}" }
                            p { class: "muted small", "Sell where you earn the most" }
                        }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Analyze {}),
                            onclick: move |_| { nav.push(Route::Analyze {}); },
                            label: "Analyze",
                        }
                        NavButton {
                            active: matches!(current_route, Route::History {}),
                            onclick: move |_| { nav.push(Route::History {}); },
                            label: "History",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙",
                        }
                    }
                }
            }
            main { class: "app-main", {children} }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
