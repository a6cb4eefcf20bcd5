use maud::{html, Markup};

use super::layout;
use crate::config::SiteConfig;
use crate::domain::Route;

/// 404 page for paths outside the route table
pub fn render(site: &SiteConfig) -> Markup {
    layout::page(
        site,
        "Not Found",
        html! {
            main {
                h1 { "404" }
                p { "Page not found" }
                a href=(Route::Signup.path()) { "Go to signup" }
            }
        },
    )
}
