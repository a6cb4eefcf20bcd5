//! Post-signup dashboard placeholder

use maud::{html, Markup};

use super::layout;
use crate::config::SiteConfig;

pub fn render(site: &SiteConfig) -> Markup {
    layout::page(
        site,
        "Dashboard",
        html! {
            main {
                h1 { "Dashboard" }
                p { "Welcome to " (site.title) "! Your account is ready." }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_welcome() {
        let html = render(&SiteConfig::default()).into_string();

        assert!(html.contains("<h1>Dashboard</h1>"));
        assert!(html.contains("Welcome to Signup Portal!"));
    }
}
