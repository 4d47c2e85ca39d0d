//! Full-page HTML shell around server-rendered Dioxus elements.

use dioxus::prelude::*;

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif;color:#1f2933;background:#f7f7fb}
a{color:inherit}
.navbar{display:flex;align-items:center;justify-content:space-between;padding:.75rem 1.5rem;background:#fff;border-bottom:1px solid #e4e4ec}
.navbar .brand{font-weight:700;font-size:1.25rem;text-decoration:none;color:#5b3cc4}
.navbar-links{display:flex;gap:1rem;align-items:center}
.navbar-links form{margin:0}
.dashboard{display:flex;min-height:calc(100vh - 3.5rem)}
.sidebar{width:15rem;background:#fff;border-right:1px solid #e4e4ec;padding:1rem}
.sidebar-user{display:flex;align-items:center;gap:.5rem;margin-bottom:1rem}
.sidebar-user-avatar{width:2rem;height:2rem;border-radius:50%}
.role-badge{font-size:.7rem;padding:.1rem .4rem;border-radius:4px;background:#ede9fe;color:#5b3cc4}
.nav-link{display:block;padding:.4rem .6rem;border-radius:4px;text-decoration:none}
.nav-link.active{background:#ede9fe;font-weight:600}
.content{flex:1;padding:1.5rem 2rem}
.stats{display:grid;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr));gap:1rem}
.stat-card{background:#fff;border:1px solid #e4e4ec;border-radius:8px;padding:1rem}
.stat-card .value{font-size:1.5rem;font-weight:700}
.notice{background:#fff7e6;border:1px solid #f5c26b;border-radius:6px;padding:.75rem 1rem;margin-bottom:1rem}
.login-container{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:80vh}
.login-form{display:flex;flex-direction:column;gap:.75rem;width:100%;max-width:320px}
.login-form input{padding:.5rem;border:1px solid #cbd2d9;border-radius:4px}
.login-form button,.logout-button{padding:.5rem 1rem;border:none;border-radius:4px;background:#5b3cc4;color:#fff;cursor:pointer}
.error{color:#b42318}
.events{list-style:none;padding:0;display:grid;gap:.75rem}
.event-card{background:#fff;border:1px solid #e4e4ec;border-radius:8px;padding:1rem}
"#;

/// Render `body` into a complete HTML document titled `title`.
pub fn render_page(title: &str, body: Element) -> String {
    let body = dioxus_ssr::render_element(body);
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title} · Eventora</title><style>{STYLES}</style></head>\
         <body>{body}</body></html>"
    )
}
