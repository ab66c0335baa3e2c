use leptos::prelude::*;

use crate::nav::Section;
use crate::ui_state::PageEvent;

use super::{use_dispatch, use_profile};

#[component]
pub fn Header() -> impl IntoView {
    let dispatch = use_dispatch();
    view! {
        <header class="fixed top-0 left-0 w-full z-[100] px-6 py-6 flex justify-between items-center pointer-events-none">
            <button
                on:click=move |_| dispatch.send(PageEvent::OpenMenu)
                aria-label="Open menu"
                aria-expanded=move || dispatch.menu_open().to_string()
                class="pointer-events-auto text-4xl text-white bg-black/40 p-2 rounded-xl backdrop-blur-md border border-white/5 hover:text-[#5a3bff] transition-all shadow-xl"
            >
                <i class="extra-menu" />
            </button>
        </header>
        <SideMenu />
    }
}

/// Overlay plus slide-over panel. Both stay mounted so the close animates too.
#[component]
fn SideMenu() -> impl IntoView {
    let profile = use_profile();
    let dispatch = use_dispatch();
    let open = move || dispatch.menu_open();

    view! {
        <div
            on:click=move |_| dispatch.send(PageEvent::OverlayClicked)
            class=move || {
                format!(
                    "fixed inset-0 bg-black/90 backdrop-blur-md z-[101] transition-opacity duration-300 {}",
                    if open() { "opacity-100" } else { "opacity-0 pointer-events-none" },
                )
            }
        ></div>
        <aside
            aria-hidden=move || (!open()).to_string()
            class=move || {
                format!(
                    "fixed top-0 right-0 h-full w-full md:w-[450px] bg-white text-black z-[102] p-12 flex flex-col justify-between shadow-2xl transition-transform duration-500 ease-out {}",
                    if open() { "translate-x-0" } else { "translate-x-full" },
                )
            }
        >
            <div>
                <div class="flex justify-between items-center mb-12">
                    <h2 class="text-4xl font-black text-[#5a3bff] italic">
                        {profile.first_name.clone()}
                    </h2>
                    <button
                        on:click=move |_| dispatch.send(PageEvent::CloseMenu)
                        aria-label="Close menu"
                        class="text-4xl hover:rotate-90 transition-all"
                    >
                        <i class="extra-close" />
                    </button>
                </div>
                <nav class="space-y-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <SidebarLink section /> })
                        .collect_view()}
                </nav>
                <button
                    on:click=move |_| dispatch.send(PageEvent::Navigate(Section::Contact))
                    class="mt-12 w-full bg-[#5a3bff] text-white py-5 rounded-2xl font-black uppercase text-sm shadow-xl hover:scale-105 transition-all"
                >
                    "Get Started →"
                </button>
            </div>
            <div class="mt-10 border-t pt-10 text-center">
                <p class="font-bold opacity-60 mb-4">{profile.contact.display_phone.clone()}</p>
                <div class="flex justify-center gap-4 text-2xl">
                    {profile
                        .menu_socials()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.kind.label()
                                    class="hover:text-[#5a3bff]"
                                >
                                    <i class=social.kind.icon_class() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(section: Section) -> impl IntoView {
    let dispatch = use_dispatch();
    view! {
        <a
            href=section.href()
            on:click=move |ev| {
                ev.prevent_default();
                dispatch.send(PageEvent::Navigate(section));
            }
            class="block text-2xl font-black uppercase tracking-tight cursor-pointer hover:text-[#5a3bff] hover:translate-x-[10px] transition-all"
        >
            {section.label()}
        </a>
    }
}
