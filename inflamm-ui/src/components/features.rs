//! "What is" section and the feature grids

use leptos::*;

use crate::content::{Feature, WHAT_IS_BODY, WHAT_IS_HEADING, WHAT_IS_KICKER};

#[component]
pub fn WhatIs() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-20 text-center">
            <p class="text-sm uppercase tracking-widest text-orange-600">{WHAT_IS_KICKER}</p>
            <h2 class="mt-3 text-3xl font-bold">{WHAT_IS_HEADING}</h2>
            <p class="mt-4 max-w-3xl mx-auto text-gray-600">{WHAT_IS_BODY}</p>
        </section>
    }
}

/// A headed grid of feature cards
#[component]
pub fn FeatureGrid(heading: &'static str, features: &'static [Feature]) -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-12">
            <h2 class="text-2xl font-bold text-center mb-8">{heading}</h2>
            <ul class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="rounded-xl border border-gray-200 p-6 shadow-sm hover:shadow-md transition">
                                <h3 class="text-lg font-semibold">{feature.title}</h3>
                                <p class="mt-2 text-gray-600">{feature.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
