use api::models::Role;
use api::SessionIdentity;
use dioxus::prelude::*;

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

/// Navigation for a role's dashboard. Each role only ever sees its own section.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    const USER: &[NavItem] = &[
        item("Overview", "/user/dashboard"),
        item("My Bookings", "/user/dashboard#bookings"),
        item("Payments", "/user/dashboard#payments"),
        item("Browse Events", "/"),
    ];
    const HOST: &[NavItem] = &[
        item("Overview", "/host/dashboard"),
        item("My Events", "/host/dashboard#events"),
        item("Participants", "/host/dashboard#participants"),
        item("Revenue", "/host/dashboard#revenue"),
    ];
    const ADMIN: &[NavItem] = &[
        item("Overview", "/admin/dashboard"),
        item("Manage Users", "/admin/dashboard#users"),
        item("Manage Events", "/admin/dashboard#events"),
        item("Revenue", "/admin/dashboard#revenue"),
    ];

    match role {
        Role::User => USER,
        Role::Host => HOST,
        Role::Admin => ADMIN,
    }
}

#[component]
pub fn Sidebar(identity: SessionIdentity, active: String) -> Element {
    let role = identity.role();
    let name = identity.display_name().to_string();
    let avatar = identity.profile().and_then(|p| p.profile_image.clone());

    rsx! {
        aside {
            class: "sidebar",
            "data-role": "{role}",

            div {
                class: "sidebar-user",
                if let Some(avatar) = avatar {
                    img { class: "sidebar-user-avatar", src: "{avatar}", alt: "Avatar" }
                }
                span { class: "sidebar-user-name", "{name}" }
                span { class: "role-badge", "{role}" }
            }

            nav {
                for NavItem { label, href } in nav_items(role).iter().copied() {
                    a {
                        key: "{href}",
                        class: if href == active { "nav-link active" } else { "nav-link" },
                        href: "{href}",
                        "{label}"
                    }
                }
            }
        }
    }
}
