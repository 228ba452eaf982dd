//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <SiteNav/>
            <main>
                <HomePage/>
            </main>
            <SiteFooter/>
        </div>
    }
}
