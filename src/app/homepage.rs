use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Experience, InfoItem, InfoRow};
use crate::nav::Section;
use crate::ui_state::PageEvent;

use super::contact::ContactSection;
use super::skills::SkillsSection;
use super::works::WorksSection;
use super::{use_dispatch, use_profile};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Bio" />
        <Hero />
        <PersonalInfo />
        <ExperienceSection />
        <SkillsSection />
        <WorksSection />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let profile = use_profile();
    let dispatch = use_dispatch();
    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex flex-col md:flex-row items-center justify-between px-6 md:px-[12%] pt-32 pb-20 relative overflow-hidden"
        >
            <div class="max-w-3xl z-10 text-center md:text-left">
                <div class="mb-6 inline-block">
                    <span class="fire-text text-xl md:text-2xl font-black italic uppercase tracking-widest">
                        {profile.headline.clone()}
                    </span>
                </div>
                <h1 class="text-6xl md:text-9xl font-black leading-[0.9] tracking-tighter mb-6 uppercase italic">
                    {profile.first_name.clone()}
                    " "
                    <span class="text-[#d4af37]">{profile.last_name.clone()}</span>
                </h1>
                <p class="text-white/40 font-bold mb-10 text-lg md:text-xl">
                    {profile.tagline.clone()}
                </p>
                <div class="flex flex-wrap gap-5 justify-center md:justify-start">
                    <button
                        on:click=move |_| dispatch.send(PageEvent::Navigate(Section::Contact))
                        class="bg-[#5a3bff] text-white px-10 py-5 rounded-2xl font-black hover:scale-110 transition-all shadow-[0_0_30px_rgba(90,59,255,0.4)]"
                    >
                        "Contact Me"
                    </button>
                    <button
                        on:click=move |_| dispatch.send(PageEvent::Navigate(Section::Portfolio))
                        class="border border-white/10 px-10 py-5 rounded-2xl font-black hover:bg-white hover:text-black transition-all"
                    >
                        "Portfolio"
                    </button>
                </div>
            </div>
            <div class="relative mt-20 md:mt-0 z-10">
                <img
                    src=profile.portrait.clone()
                    class="w-72 md:w-[480px] drop-shadow-2xl rounded-[4rem] border-b-8 border-[#5a3bff]"
                    alt=profile.first_name.clone()
                />
            </div>
        </section>
    }
}

#[component]
fn PersonalInfo() -> impl IntoView {
    let profile = use_profile();
    view! {
        <section id=Section::About.id() class="py-20 px-6 md:px-[12%]">
            <div class="max-w-5xl mx-auto bg-[#111318] rounded-[3rem] overflow-hidden border border-white/5 shadow-2xl relative">
                <div class="bg-[#1a1c23] py-5 text-center border-b border-white/5">
                    <h2 class="text-2xl md:text-3xl font-black tracking-widest uppercase italic">
                        <span class="text-white">"PERSONAL"</span>
                        " "
                        <span class="text-[#d4af37]">"INFOS"</span>
                    </h2>
                </div>
                <div class="p-8 md:p-16 grid grid-cols-1 md:grid-cols-2 gap-y-8 gap-x-12">
                    {profile
                        .info_rows()
                        .into_iter()
                        .map(|row| match row {
                            InfoRow::Item(item) => {
                                view! { <InfoLine item=item.clone() /> }.into_any()
                            }
                            InfoRow::Remote(available) => {
                                view! { <RemoteLine available /> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
                {profile
                    .resume
                    .clone()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                download=""
                                class="w-full flex items-center justify-center gap-3 py-6 bg-[#1a1c23] border-t border-white/5 font-black uppercase italic tracking-widest hover:bg-[#5a3bff] transition-all group"
                            >
                                "Download "
                                <span class="text-[#d4af37] group-hover:text-white">"Resume"</span>
                                <i class="extra-download text-sm" />
                            </a>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn RemoteLine(available: bool) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="opacity-50 font-bold">"Remote :"</span>
            {if available {
                view! { <span class="text-[#c1ff00] font-black uppercase">"Available"</span> }
                    .into_any()
            } else {
                view! { <span class="opacity-60 font-black uppercase">"Unavailable"</span> }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn InfoLine(item: InfoItem) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <span class="opacity-50 font-bold min-w-[100px]">{item.label}" :"</span>
            <span class="font-black text-white italic">{item.value}</span>
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    let profile = use_profile();
    view! {
        <section class="py-20 px-6 md:px-[12%] bg-[#0a0c10]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-center text-4xl font-black italic mb-16 uppercase text-[#d4af37]">
                    "Experience & "
                    <span class="text-white">"Education"</span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {profile
                        .experience
                        .iter()
                        .cloned()
                        .map(|entry| view! { <ExpCard entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExpCard(entry: Experience) -> impl IntoView {
    view! {
        <div class="bg-[#111318] p-8 rounded-[2rem] border border-white/5 hover:border-[#d4af37] transition-all">
            <span class="inline-block px-4 py-1 bg-white/5 rounded-full text-[10px] font-black mb-4">
                {entry.date}
            </span>
            <h3 class="text-xl font-black italic text-white uppercase">
                {entry.title}
                " - "
                <span class="text-[#d4af37]">{entry.company}</span>
            </h3>
            <p class="mt-3 opacity-40 text-sm font-bold leading-relaxed">{entry.description}</p>
        </div>
    }
}
