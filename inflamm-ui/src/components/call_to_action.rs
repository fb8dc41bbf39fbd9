//! Closing call to action

use leptos::*;

use crate::content::CTA;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20 text-center">
            <h2 class="text-3xl font-bold">
                {CTA.heading[0]}
                <br />
                {CTA.heading[1]}
            </h2>
            <p class="mt-4 max-w-2xl mx-auto text-gray-600">{CTA.body}</p>
            <a
                href=CTA.href
                target="_blank"
                rel="noopener noreferrer"
                class="inline-block mt-8 px-8 py-3 bg-orange-500 hover:bg-orange-600 text-white rounded-full font-semibold transition"
            >
                {CTA.button}
            </a>
        </section>
    }
}
