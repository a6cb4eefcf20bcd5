//! Shared page chrome

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;

const STYLES: &str = r#"
:root { font-family: system-ui, sans-serif; color: #1f2933; background: #f5f7fa; }
body { margin: 0; }
header, footer { padding: 1rem 2rem; }
main { max-width: 28rem; margin: 2rem auto; padding: 2rem; background: #fff; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,.1); }
.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: 600; margin-bottom: .25rem; }
.field input { width: 100%; box-sizing: border-box; padding: .5rem; border: 1px solid #cbd2d9; border-radius: 4px; }
.error { color: #c81e1e; font-size: .875rem; margin: .25rem 0 0; }
.criteria { list-style: none; padding: 0; margin: 0 0 1rem; font-size: .875rem; }
.criteria li::before { display: inline-block; width: 1.25rem; }
.criteria .met { color: #0e7c3a; }
.criteria .met::before { content: "\2713"; }
.criteria .unmet { color: #7b8794; }
.criteria .unmet::before { content: "\2717"; }
button { width: 100%; padding: .75rem; border: 0; border-radius: 4px; background: #2563eb; color: #fff; font-weight: 600; cursor: pointer; }
button:disabled { background: #9aa5b1; cursor: not-allowed; }
small { color: #7b8794; }
"#;

/// Wrap page content in the HTML document
pub fn page(site: &SiteConfig, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (site.title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    strong { (site.title) }
                }
                (content)
                footer {
                    small { (site.title) " v" (env!("CARGO_PKG_VERSION")) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_and_escaping() {
        let site = SiteConfig {
            title: "Acme <Beta>".to_string(),
        };

        let html = page(&site, "Sign Up", html! { p { "hello" } }).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sign Up - Acme &lt;Beta&gt;</title>"));
        assert!(html.contains("<p>hello</p>"));
    }
}
