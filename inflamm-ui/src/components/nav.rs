//! Navigation Component
//!
//! Header bar with the brand and the site links.

use leptos::*;
use leptos_router::*;

use crate::content::{NavLink as Link, BRAND, NAV_LINKS};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold text-orange-600">
                        {BRAND}
                    </A>

                    <div class="flex items-center space-x-1">
                        {NAV_LINKS.iter().map(|link| view! { <NavLink link=link /> }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Site-internal paths go through the router; the rest open a new tab
#[component]
fn NavLink(link: &'static Link) -> impl IntoView {
    let class = "px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors";

    if is_internal(link.href) {
        view! {
            <A href=link.href class=class active_class="bg-orange-50 text-orange-700">
                {link.label}
            </A>
        }
        .into_view()
    } else {
        view! {
            <a href=link.href class=class target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
        }
        .into_view()
    }
}

/// Client-routed pages; static files such as the whitepaper are not
fn is_internal(href: &str) -> bool {
    href == "/" || href == "/demo"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_link_is_routed() {
        let demo = NAV_LINKS.iter().find(|l| l.label == "Try the Demo").unwrap();
        assert!(is_internal(demo.href));
        assert!(!is_internal("/Whitepaper.pdf"));
        assert!(!is_internal("https://t.me/InflammAI"));
    }
}
