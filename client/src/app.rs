//! Root component: particle background behind the single studio page.

use leptos::prelude::*;

use crate::components::particle_canvas::ParticleCanvas;
use crate::pages::studio::StudioPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ParticleCanvas/>
        <StudioPage/>
    }
}
