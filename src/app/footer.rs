use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{build_year, copyright_span};
use crate::contact::{EMAIL_FIELD, NEWSLETTER_SUBJECT, SUBJECT_FIELD};
use crate::content::Social;
use crate::nav::Section;
use crate::ui_state::PageEvent;

use super::{use_dispatch, use_profile};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = use_profile();
    let dispatch = use_dispatch();
    let contact = &profile.contact;
    let years = copyright_span(profile.footer.copyright_since, build_year());

    view! {
        <footer class="bg-[#f0f4f8] text-black py-20 px-6 md:px-[12%] mt-10">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12">
                <div class="space-y-6">
                    <div class="text-3xl font-black tracking-tighter italic flex items-center gap-2 uppercase">
                        <span class="text-[#5a3bff] border-l-4 border-[#5a3bff] pl-2">
                            {profile.first_name.clone()}
                        </span>
                        {profile.last_name.clone()}
                    </div>
                    <p class="text-sm opacity-70 leading-relaxed font-medium">
                        {profile.footer.bio.clone()}
                    </p>
                    <div class="flex gap-3">
                        {profile
                            .socials
                            .iter()
                            .map(|social| view! { <FooterSocialIcon social /> })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h3 class="text-xl font-black mb-8 uppercase italic">"About Us"</h3>
                    <ul class="space-y-4 font-bold opacity-60 text-sm">
                        <li>"Our Blog"</li>
                        <li
                            class="hover:text-[#5a3bff] cursor-pointer"
                            on:click=move |_| dispatch.send(PageEvent::Navigate(Section::About))
                        >
                            "About Us"
                        </li>
                        <li
                            class="hover:text-[#5a3bff] cursor-pointer"
                            on:click=move |_| dispatch.send(PageEvent::Navigate(Section::Portfolio))
                        >
                            "Services"
                        </li>
                        <li
                            class="hover:text-[#5a3bff] cursor-pointer"
                            on:click=move |_| dispatch.send(PageEvent::Navigate(Section::Contact))
                        >
                            "Contact Us"
                        </li>
                    </ul>
                </div>

                <div>
                    <h3 class="text-xl font-black mb-8 uppercase italic">"Get in touch"</h3>
                    <div class="space-y-5">
                        <FooterContactItem icon="extra-email" text=contact.email.clone() />
                        <FooterContactItem icon="extra-phone" text=contact.phone.clone() />
                        <FooterContactItem icon="extra-location" text=contact.location.clone() />
                    </div>
                </div>

                <div>
                    <h3 class="text-xl font-black mb-8 uppercase italic">"Subscribe Our Newsletter"</h3>
                    <Newsletter endpoint=contact.endpoint.clone() />
                </div>
            </div>

            <div class="mt-20 pt-8 border-t border-black/5 flex flex-col md:flex-row justify-between items-center gap-4 text-[12px] font-bold opacity-50 uppercase tracking-widest">
                <p>
                    {format!(
                        "©Copyright {years} {} . All rights reserved",
                        profile.footer.copyright_holder,
                    )}
                </p>
                <div class="flex gap-8">
                    <A href="/terms" attr:class="hover:text-black">
                        "Terms & Conditions"
                    </A>
                    <A href="/privacy" attr:class="hover:text-black">
                        "Privacy Policy"
                    </A>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterSocialIcon(social: &'static Social) -> impl IntoView {
    view! {
        <a
            href=social.href.clone()
            target="_blank"
            rel="noopener noreferrer"
            aria-label=social.kind.label()
            class="w-12 h-12 bg-black text-white rounded-full flex items-center justify-center text-xl hover:bg-[#5a3bff] transition-all"
        >
            <i class=social.kind.icon_class() />
        </a>
    }
}

#[component]
fn FooterContactItem(icon: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <span class="text-xl text-black mt-1">
                <i class=icon />
            </span>
            <span class="text-sm font-bold opacity-70">{text}</span>
        </div>
    }
}

#[component]
fn Newsletter(endpoint: String) -> impl IntoView {
    view! {
        <form
            action=endpoint
            method="POST"
            class="flex bg-[#e0e7ff] p-2 rounded-full border border-[#5a3bff]/10 max-w-[300px]"
        >
            <input type="hidden" name=SUBJECT_FIELD value=NEWSLETTER_SUBJECT />
            <input
                type="email"
                name=EMAIL_FIELD
                placeholder="Enter Your email"
                required
                class="bg-transparent border-none outline-none px-4 py-2 w-full text-sm font-medium"
            />
            <button
                type="submit"
                class="bg-[#5a3bff] text-white p-3 rounded-full hover:scale-105 transition-all flex items-center justify-center"
            >
                <span class="text-xs font-bold mr-1">"Subscribe"</span>
                <i class="extra-arrow-up-right" />
            </button>
        </form>
    }
}
