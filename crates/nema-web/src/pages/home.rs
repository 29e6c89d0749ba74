//! Home Page

use leptos::prelude::*;

use crate::components::ParticleField;
use crate::sections::{
    Backers, Features, Footer, Hero, HowItWorks, Nav, Pricing, UseCases, WaitlistSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="relative min-h-screen grid-bg">
            <ParticleField />

            // Orbs
            <div class="orb w-96 h-96 bg-purple-600 top-20 -left-48" />
            <div class="orb w-80 h-80 bg-blue-600 top-96 right-0" />
            <div class="orb w-64 h-64 bg-cyan-600 bottom-96 left-1/3" />

            <Nav />
            <Hero />
            <HowItWorks />
            <Features />
            <UseCases />
            <Pricing />
            <Backers />
            <WaitlistSection />
            <Footer />
        </div>
    }
}
