use leptos::prelude::*;

use crate::content::Work;
use crate::nav::Section;

use super::use_profile;

#[component]
pub fn WorksSection() -> impl IntoView {
    let profile = use_profile();
    view! {
        <section id=Section::Portfolio.id() class="py-32 px-6 md:px-[12%] bg-[#0f1115]">
            <h2 class="text-5xl md:text-7xl font-black text-center mb-20 italic uppercase tracking-tighter">
                "My "
                <span class="text-[#5a3bff]">"Works"</span>
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10">
                {profile
                    .works
                    .iter()
                    .cloned()
                    .map(|work| view! { <WorkCard work /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WorkCard(work: Work) -> impl IntoView {
    view! {
        <div class="group relative rounded-[3rem] overflow-hidden h-80 border border-white/5">
            <img
                src=work.image
                class="w-full h-full object-cover group-hover:scale-110 transition-all duration-700"
                alt=work.title.clone()
                loading="lazy"
            />
            <div class="absolute inset-0 bg-black/80 opacity-0 group-hover:opacity-100 transition-all flex flex-col justify-center items-center p-8 text-center">
                <p class="text-[#5a3bff] text-xs font-black uppercase tracking-widest mb-3">
                    {work.category}
                </p>
                <h4 class="text-2xl font-black italic">{work.title}</h4>
            </div>
        </div>
    }
}
