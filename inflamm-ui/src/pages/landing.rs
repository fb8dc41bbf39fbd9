//! Landing Page

use leptos::*;

use crate::components::{CallToAction, FeatureGrid, Hero, Pathways, WhatIs};
use crate::content::{CORE_FEATURES, FEATURES};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Hero />
        <WhatIs />
        <FeatureGrid heading="Features" features=&FEATURES />
        <FeatureGrid heading="Core Features" features=&CORE_FEATURES />
        <Pathways />
        <CallToAction />
    }
}
