use dioxus::{document, prelude::*};

use crate::ui::{
    clipboard::copy_text_to_clipboard,
    components::toast::{push_toast, ToastKind, ToastMessage},
    theme,
};

const TRANSPORT_CONTACTS: [(&str, &str, &str); 2] = [
    ("Raju Transport", "+91 98765 43210", "tel:+919876543210"),
    ("Krishna Logistics", "+91 98765 43211", "tel:+919876543211"),
];

#[derive(Clone, Copy, Default, PartialEq)]
struct Progress {
    truck: bool,
    bill: bool,
    navigate: bool,
}

#[component]
pub fn ActionChecklist(#[props(!optional)] maps_url: Option<String>, market_name: String) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut progress = use_signal(Progress::default);
    let mut show_truck_dialog = use_signal(|| false);

    let done = progress();
    let truck_class = theme::checklist_item(done.truck);
    let bill_class = theme::checklist_item(done.bill);
    let navigate_class = theme::checklist_item(done.navigate);

    let on_bill = move |_| {
        progress.with_mut(|p| p.bill = true);
        push_toast(toasts, ToastKind::Info, "Bill Template", "Opening print dialog...");
        let _ = document::eval("window.print();");
    };

    let on_navigate = {
        let market_name = market_name.clone();
        move |_| {
            progress.with_mut(|p| p.navigate = true);
            push_toast(
                toasts,
                ToastKind::Info,
                "Opening Google Maps",
                format!("Navigating to {market_name}..."),
            );
        }
    };

    let on_copy = {
        let maps_url = maps_url.clone();
        move |_| {
            let Some(url) = maps_url.clone() else {
                return;
            };
            spawn(async move {
                if copy_text_to_clipboard(url.clone()).await {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "Link Copied!",
                        "Paste it in your browser or share with your driver.",
                    );
                } else {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Navigation Blocked",
                        format!("Please copy this link manually: {url}"),
                    );
                }
            });
        }
    };

    rsx! {
        section { class: "card",
            h2 { class: "card-title", "📋 Action Plan" }
            div { class: "checklist",
                button {
                    class: "{truck_class}",
                    onclick: move |_| {
                        progress.with_mut(|p| p.truck = true);
                        show_truck_dialog.set(true);
                    },
                    "🚚 Book Mini-Truck (2 Ton capacity)"
                }
                button {
                    class: "{bill_class}",
                    onclick: on_bill,
                    "🧾 Print/Write Bill of Sale"
                }
                match maps_url {
                    Some(url) => rsx! {
                        div { class: "button-row",
                            a {
                                class: "{navigate_class}",
                                href: "{url}",
                                target: "_blank",
                                onclick: on_navigate,
                                "🧭 Navigate to Market"
                            }
                            button {
                                class: "button button-outline",
                                title: "Copy link",
                                onclick: on_copy,
                                "Copy"
                            }
                        }
                    },
                    None => rsx! {
                        button {
                            class: "checklist-item",
                            disabled: true,
                            "🧭 No Navigation (Farm Gate)"
                        }
                    },
                }
            }
        }

        if show_truck_dialog() {
            div { class: "dialog-backdrop", onclick: move |_| show_truck_dialog.set(false),
                div {
                    class: "dialog",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    h3 { class: "card-title", "🚚 Book Transport" }
                    p { class: "muted", "Contact local transport services for crop pickup" }
                    div { class: "contact-box",
                        p { class: "strong", "Local Transport Services:" }
                        for (name, display, href) in TRANSPORT_CONTACTS {
                            a { key: "{href}", class: "contact-link", href: "{href}", "📞 {name}: {display}" }
                        }
                    }
                    p { class: "muted small", "💡 Tip: Book at least 1 day in advance for better rates." }
                    button {
                        class: "button button-outline",
                        onclick: move |_| show_truck_dialog.set(false),
                        "Close"
                    }
                }
            }
        }
    }
}
