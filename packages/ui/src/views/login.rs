//! Login page with an email + password form posting back to `/login`.

use dioxus::prelude::*;

use crate::Navbar;

#[component]
pub fn LoginPage(#[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        Navbar { identity: None }
        div {
            class: "login-container",
            h1 { "Welcome back" }
            p { "Sign in to book events and manage your dashboard." }

            form {
                class: "login-form",
                method: "post",
                action: "/login",
                if let Some(error) = error {
                    p { class: "error", "{error}" }
                }
                input { r#type: "email", name: "email", placeholder: "Email", required: true }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    required: true,
                }
                button { r#type: "submit", "Log in" }
            }
        }
    }
}
