//! Site footer component

use super::VisitorBadge;
use leptos::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer id="contact" class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-10">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <div class="flex items-center">
                        <span class="text-xl mr-2">"\u{1F4D6}"</span>
                        <span class="font-semibold text-white">"My English Online"</span>
                    </div>
                    <p class="text-sm">"Live English lessons for kids and adults, anywhere."</p>
                    <div class="flex items-center gap-2">
                        <span class="text-xs">"Visitors"</span>
                        <VisitorBadge class="ml-1"/>
                    </div>
                </div>
                <div class="mt-8 pt-6 border-t border-gray-800 text-center text-xs">
                    "© 2025 My English Online. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
