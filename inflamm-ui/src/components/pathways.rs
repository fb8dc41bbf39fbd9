//! Audience pathways section

use leptos::*;

use crate::content::{PATHWAYS, PATHWAYS_HEADING};

#[component]
pub fn Pathways() -> impl IntoView {
    view! {
        <section class="bg-gray-50">
            <div class="container mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center">{PATHWAYS_HEADING[0]}</h2>
                <p class="mt-2 text-center text-gray-600">{PATHWAYS_HEADING[1]}</p>
                <ul class="mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {PATHWAYS
                        .iter()
                        .map(|pathway| {
                            view! {
                                <li class="rounded-xl bg-white p-6 shadow-sm">
                                    <span class="text-3xl">{pathway.icon}</span>
                                    <h3 class="mt-3 font-semibold">{pathway.title}</h3>
                                    <p class="mt-2 text-sm text-gray-600">{pathway.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
