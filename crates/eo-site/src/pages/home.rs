//! Home page

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero section
            <section class="bg-gradient-to-br from-indigo-900 via-purple-900 to-indigo-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Speak English "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                                "With Confidence"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "One-on-one online lessons with a dedicated teacher, "
                            "tailored to kids, teens, and working adults."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="#contact" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition">
                                "Book a Trial Lesson"
                            </a>
                            <a href="#reviews" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Read the Reviews"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Testimonials
            <ReviewCarousel/>
        </div>
    }
}
