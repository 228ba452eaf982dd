//! Testimonial carousel
//!
//! Loads published reviews from the static JSON endpoint and renders them as
//! a horizontally scrollable, snap-aligned card strip with directional
//! controls. A failed or empty load keeps the built-in placeholders.

use eo_core::reviews::{self, ReviewRecord};
use eo_core::scroll::{ScrollAffordance, SCROLL_STEP};
use gloo_net::http::Request;
use leptos::html::Div;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AbortController, AbortSignal, IntersectionObserver, IntersectionObserverEntry, RequestCache,
    ScrollBehavior, ScrollToOptions,
};

/// Static JSON endpoint holding the published reviews.
const REVIEWS_URL: &str = "/data/reviews.json";

/// Class pair driving the one-shot card entrance transition.
const CARD_CLASS: &str = "review-card";
const CARD_VISIBLE_CLASS: &str = "review-card-visible";

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[component]
pub fn ReviewCarousel() -> impl IntoView {
    let (review_list, set_review_list) = create_signal(reviews::placeholder_reviews());
    let (affordance, set_affordance) = create_signal(ScrollAffordance::default());
    let slider_ref = create_node_ref::<Div>();

    // Load remote reviews once; aborting on cleanup guarantees a late
    // response never touches state after teardown.
    let controller = AbortController::new().ok();
    let abort_signal = controller.as_ref().map(|c| c.signal());
    if let Some(controller) = controller {
        on_cleanup(move || controller.abort());
    }
    create_effect(move |_| {
        let abort_signal = abort_signal.clone();
        spawn_local(async move {
            if let Some(cleaned) = load_reviews(abort_signal.as_ref()).await {
                if !cleaned.is_empty() {
                    set_review_list.set(cleaned);
                }
            }
        });
    });

    let update_affordance = move || {
        if let Some(slider) = slider_ref.get_untracked() {
            set_affordance.set(ScrollAffordance::from_metrics(
                slider.scroll_left(),
                slider.scroll_width(),
                slider.client_width(),
            ));
        }
    };

    let resize_listener = window_event_listener(ev::resize, move |_| update_affordance());
    on_cleanup(move || resize_listener.remove());

    let reveal = match card_observer() {
        Some((observer, callback)) => {
            let handle = observer.clone();
            on_cleanup(move || {
                observer.disconnect();
                drop(callback);
            });
            Some(handle)
        }
        None => None,
    };

    // Re-measure once the rendered card count changes; remote data arriving
    // after the placeholder render changes the content width. Deferred to
    // the next frame so the metrics reflect the updated layout.
    create_effect(move |_| {
        let _count = review_list.with(|list| list.len());
        let reveal = reveal.clone();
        request_animation_frame(move || {
            update_affordance();
            if let Some(slider) = slider_ref.get_untracked() {
                observe_new_cards(&slider, reveal.as_ref());
            }
        });
    });

    let scroll_by = move |delta: f64| {
        if let Some(slider) = slider_ref.get_untracked() {
            let options = ScrollToOptions::new();
            options.set_left(delta);
            options.set_behavior(ScrollBehavior::Smooth);
            slider.scroll_by_with_scroll_to_options(&options);
        }
    };

    view! {
        <section id="reviews" class="py-20 md:py-32 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-end mb-8 gap-6">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "What Our Students Say"
                        </h2>
                        <div class="flex items-center gap-1 text-yellow-500">
                            {(0..5).map(|_| view! { <StarIcon/> }).collect::<Vec<_>>()}
                            <span class="text-gray-500 ml-2 text-sm">"5.0 average rating"</span>
                        </div>
                    </div>

                    <Show when=move || affordance.get().any()>
                        <div class="flex items-center gap-2">
                            <button
                                type="button"
                                aria-label="Scroll reviews left"
                                class="p-2 rounded-lg border border-gray-300 text-gray-600 hover:bg-gray-100 disabled:opacity-40 disabled:cursor-not-allowed transition"
                                disabled=move || !affordance.get().can_scroll_left
                                on:click=move |_| scroll_by(-SCROLL_STEP)
                            >
                                <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/>
                                </svg>
                            </button>
                            <button
                                type="button"
                                aria-label="Scroll reviews right"
                                class="p-2 rounded-lg border border-gray-300 text-gray-600 hover:bg-gray-100 disabled:opacity-40 disabled:cursor-not-allowed transition"
                                disabled=move || !affordance.get().can_scroll_right
                                on:click=move |_| scroll_by(SCROLL_STEP)
                            >
                                <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
                                </svg>
                            </button>
                        </div>
                    </Show>
                </div>

                <div
                    node_ref=slider_ref
                    class="flex gap-6 overflow-x-auto pb-2 scroll-smooth snap-x snap-mandatory"
                    on:scroll=move |_| update_affordance()
                >
                    <For
                        each=move || { review_list.get().into_iter().enumerate().collect::<Vec<_>>() }
                        key=|(index, review)| format!("{}-{}", review.name, index)
                        children=move |(_, review)| view! { <ReviewCard review/> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: ReviewRecord) -> impl IntoView {
    view! {
        <div class=format!(
            "{} bg-white p-6 rounded-2xl shadow-sm border border-gray-200 min-w-[280px] sm:min-w-[320px] lg:min-w-[360px] snap-start",
            CARD_CLASS
        )>
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-3">
                    <div class="h-10 w-10 rounded-full bg-indigo-100 flex items-center justify-center text-indigo-600">
                        <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"/>
                        </svg>
                    </div>
                    <div>
                        <div class="font-bold text-gray-900">{review.name.clone()}</div>
                        <div class="text-xs text-gray-500">{review.role.clone()}</div>
                    </div>
                </div>
                <div class="flex text-yellow-400">
                    {(0..review.rating).map(|_| view! { <StarIcon/> }).collect::<Vec<_>>()}
                </div>
            </div>
            <p class="text-gray-600 italic">"\""{review.text.clone()}"\""</p>
        </div>
    }
}

#[component]
fn StarIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4" viewBox="0 0 20 20" fill="currentColor">
            <path d="M10.868 2.884c-.321-.772-1.415-.772-1.736 0l-1.83 4.401-4.753.381c-.833.067-1.171 1.107-.536 1.651l3.62 3.102-1.106 4.637c-.194.813.691 1.456 1.405 1.02L10 15.591l4.069 2.485c.713.436 1.598-.207 1.404-1.02l-1.106-4.637 3.62-3.102c.635-.544.297-1.584-.536-1.65l-4.752-.382-1.831-4.401z"/>
        </svg>
    }
}

/// Fetch and clean the published reviews. Returns `None` when the request
/// fails or the body is not JSON; the caller keeps its current state.
async fn load_reviews(abort: Option<&AbortSignal>) -> Option<Vec<ReviewRecord>> {
    let response = Request::get(REVIEWS_URL)
        .cache(RequestCache::NoStore)
        .abort_signal(abort)
        .send()
        .await
        .ok()?;
    if !response.ok() {
        return None;
    }
    let payload: serde_json::Value = response.json().await.ok()?;
    Some(reviews::clean_reviews(&payload))
}

/// Observer that reveals a card the first time it scrolls into view, then
/// stops watching it so the transition never repeats.
fn card_observer() -> Option<(IntersectionObserver, RevealCallback)> {
    let callback: RevealCallback = Closure::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let card = entry.target();
                card.class_list().add_1(CARD_VISIBLE_CLASS).ok();
                observer.unobserve(&card);
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    Some((observer, callback))
}

fn observe_new_cards(container: &web_sys::Element, observer: Option<&IntersectionObserver>) {
    let selector = format!(".{CARD_CLASS}:not(.{CARD_VISIBLE_CLASS})");
    let Ok(cards) = container.query_selector_all(&selector) else {
        return;
    };
    for index in 0..cards.length() {
        let Some(node) = cards.item(index) else {
            continue;
        };
        let Ok(card) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        match observer {
            Some(observer) => observer.observe(&card),
            // Without observer support the card shows with no entrance transition.
            None => {
                card.class_list().add_1(CARD_VISIBLE_CLASS).ok();
            }
        }
    }
}
