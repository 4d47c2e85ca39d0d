use api::SessionIdentity;
use dioxus::prelude::*;

/// Top bar shown on every page. Anonymous visitors get a login link; signed-in
/// visitors get their dashboard link and a logout button.
#[component]
pub fn Navbar(#[props(!optional)] identity: Option<SessionIdentity>) -> Element {
    let session = identity
        .as_ref()
        .map(|i| (i.display_name().to_string(), i.role().dashboard_path()));

    rsx! {
        nav {
            class: "navbar",
            a { class: "brand", href: "/", "Eventora" }
            div {
                class: "navbar-links",
                a { href: "/", "Events" }
                if let Some((name, dashboard)) = session {
                    a { href: "{dashboard}", "Dashboard" }
                    span { class: "navbar-user", "{name}" }
                    LogoutButton {}
                } else {
                    a { href: "/login", "Log in" }
                }
            }
        }
    }
}

#[component]
pub fn LogoutButton() -> Element {
    rsx! {
        form {
            method: "post",
            action: "/logout",
            button { class: "logout-button", r#type: "submit", "Log out" }
        }
    }
}
