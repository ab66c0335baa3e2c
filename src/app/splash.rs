use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::config::Timings;
use crate::ui_state::typed_prefix;

use super::use_profile;

#[component]
pub fn Splash() -> impl IntoView {
    let text = use_profile().splash_text.as_str();
    let (ticks, set_ticks) = signal(0usize);
    let max = text.chars().count();
    let tick = Timings::default().type_tick.as_millis() as u64;
    let _typing = use_interval_fn(
        move || set_ticks.update(|n| *n = (*n + 1).min(max)),
        tick,
    );

    view! {
        <div class="fixed inset-0 z-[300] flex items-center justify-center bg-[#0a0c10]">
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-[#5a3bff] border-t-transparent rounded-full mx-auto mb-4 animate-spin"></div>
                <span class="typing-caret text-xl font-black text-white italic">
                    {move || typed_prefix(text, ticks.get()).to_string()}
                </span>
            </div>
        </div>
    }
}
