use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::Skill;

use super::use_profile;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let profile = use_profile();
    view! {
        <section class="py-20 px-6 md:px-[12%]">
            <h2 class="text-4xl md:text-5xl font-black mb-16 italic text-[#d4af37] uppercase tracking-tighter text-center">
                "Master "
                <span class="text-white">"Skills"</span>
            </h2>
            <div class="max-w-5xl mx-auto relative p-10 md:p-16 bg-[#111318] rounded-[3rem] border border-white/5">
                <div class="absolute inset-0 border-2 border-[#d4af37]/20 rounded-[3rem]"></div>
                <div class="animate-orbit absolute -inset-[2px] border-[2px] border-t-[#d4af37] border-l-transparent border-r-transparent border-b-transparent rounded-[3rem] opacity-40 pointer-events-none"></div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-x-20 gap-y-10">
                    {profile
                        .skills
                        .iter()
                        .cloned()
                        .map(|skill| view! { <SkillBar skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Grows from 0 to its percentage the first time it scrolls into view.
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(track);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    let width = skill.width();
    let label = width.clone();
    view! {
        <div>
            <div class="flex justify-between mb-4 font-black uppercase text-[10px] tracking-widest opacity-70 italic">
                <span>{skill.label}</span>
                <span>{label}</span>
            </div>
            <div node_ref=track class="w-full h-[6px] bg-white/5 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-[#d4af37] to-[#5a3bff] transition-[width] duration-[2000ms] ease-out"
                    style:width=move || if seen.get() { width.clone() } else { "0%".to_string() }
                ></div>
            </div>
        </div>
    }
}
