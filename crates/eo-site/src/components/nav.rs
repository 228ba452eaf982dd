//! Site navigation component

use leptos::*;

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"\u{1F4D6}"</span>
                            <span class="text-xl font-bold text-gray-900">"My English Online"</span>
                        </a>
                    </div>

                    // Desktop nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="#reviews" class="text-gray-600 hover:text-gray-900 transition">"Reviews"</a>
                        <a href="#contact" class="text-gray-600 hover:text-gray-900 transition">"Contact"</a>
                        <a
                            href="#contact"
                            class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition"
                        >
                            "Book a Trial Lesson"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href="#reviews" class="block text-gray-600 hover:text-gray-900">"Reviews"</a>
                        <a href="#contact" class="block text-gray-600 hover:text-gray-900">"Contact"</a>
                        <a href="#contact" class="block w-full text-center px-4 py-2 bg-indigo-600 text-white font-medium rounded-lg">
                            "Book a Trial Lesson"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
