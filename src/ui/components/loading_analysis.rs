use dioxus::prelude::*;

const STEPS: [(&str, &str); 3] = [
    ("📍", "Finding markets near you..."),
    ("📈", "Fetching current prices..."),
    ("🧮", "Calculating best profit..."),
];

#[component]
pub fn LoadingAnalysis() -> Element {
    rsx! {
        div { class: "loading-panel",
            div { class: "spinner" }
            h2 { class: "loading-title", "Analyzing Market Routes..." }
            ul { class: "loading-steps",
                for (icon, text) in STEPS {
                    li { class: "loading-step",
                        span { "{icon}" }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}
