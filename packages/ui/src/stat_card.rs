use dioxus::prelude::*;

#[component]
pub fn StatCard(anchor: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        section {
            id: "{anchor}",
            class: "stat-card",
            div { class: "label", "{label}" }
            div { class: "value", "{value}" }
        }
    }
}

/// Format a currency amount the way the dashboards show it.
pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}
