//! Site footer with the live-stream status

use leptos::*;

use crate::content::{BRAND, COPYRIGHT, FOOTER_BLURB, FOOTER_LEGAL, SOCIAL_LINKS};
use crate::state::global::GlobalState;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-4 py-12 grid gap-8 md:grid-cols-2">
                <div>
                    <h2 class="text-xl font-bold text-white">{BRAND}</h2>
                    <p class="mt-2 text-sm">{FOOTER_BLURB}</p>
                </div>
                <nav class="flex md:justify-end items-start space-x-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    aria-label=link.label
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-white"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div class="border-t border-gray-800">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between text-xs">
                    <p>
                        {COPYRIGHT}
                        {FOOTER_LEGAL.iter().map(|item| format!(" · {}", item)).collect::<String>()}
                    </p>

                    {move || {
                        if state.ws_connected.get() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Live"</span>
                                </span>
                            }
                            .into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-500">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Offline"</span>
                                </span>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}
