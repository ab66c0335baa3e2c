use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::use_profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalKind {
    Privacy,
    Terms,
}

impl LegalKind {
    fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms & Conditions",
        }
    }
}

#[component]
pub fn LegalPage(kind: LegalKind) -> impl IntoView {
    let profile = use_profile();
    let holder = profile.footer.copyright_holder.clone();
    let email = profile.contact.email.clone();
    let body = match kind {
        LegalKind::Privacy => view! {
            <p>
                "This site keeps no accounts and sets no tracking cookies. Messages sent through the contact or newsletter forms are delivered by email through a third-party form relay and are used only to reply to you."
            </p>
            <p>"To have a message deleted, write to " {email} "."</p>
        }
        .into_any(),
        LegalKind::Terms => view! {
            <p>
                "All content on " {holder}
                ", including text, case studies and images, is provided for information and may not be republished without permission."
            </p>
            <p>
                "Results described in the portfolio are from past client work and are not a guarantee of future outcomes."
            </p>
        }
        .into_any(),
    };

    view! {
        <Title text=kind.title() />
        <section class="min-h-screen max-w-3xl mx-auto px-6 pt-40 pb-20">
            <h1 class="text-5xl font-black italic uppercase tracking-tighter mb-12 text-[#d4af37]">
                {kind.title()}
            </h1>
            <div class="space-y-6 font-bold opacity-60 leading-relaxed">{body}</div>
            <A href="/" attr:class="inline-block mt-12 text-[#5a3bff] font-black uppercase">
                "← Back home"
            </A>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center px-6 text-center">
            <h1 class="text-8xl font-black italic text-[#5a3bff]">"404"</h1>
            <p class="font-bold opacity-60 mt-4">"This page doesn't exist."</p>
            <A href="/" attr:class="mt-10 text-[#d4af37] font-black uppercase">
                "← Back home"
            </A>
        </section>
    }
}
