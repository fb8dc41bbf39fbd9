//! Hero banner at the top of the landing page

use leptos::*;
use leptos_router::*;

use crate::content::HERO;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-br from-orange-500 to-yellow-400 text-white">
            <div class="container mx-auto px-4 py-24 text-center">
                <h1 class="text-5xl font-extrabold leading-tight">
                    {HERO.headline[0]}
                    <br />
                    {HERO.headline[1]}
                </h1>
                <p class="mt-6 text-lg max-w-2xl mx-auto opacity-90">{HERO.tagline}</p>
                <A
                    href="/demo"
                    class="inline-block mt-10 px-8 py-3 bg-white text-orange-600 rounded-full font-semibold shadow hover:shadow-lg transition"
                >
                    "Try the Demo"
                </A>
            </div>
        </section>
    }
}
