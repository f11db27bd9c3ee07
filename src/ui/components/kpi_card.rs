use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    #[props(!optional)] description: Option<String>,
) -> Element {
    rsx! {
        div { class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
