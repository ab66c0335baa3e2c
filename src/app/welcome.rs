use leptos::prelude::*;

use crate::ui_state::PageEvent;

use super::{use_dispatch, use_profile};

#[component]
pub fn WelcomePopup() -> impl IntoView {
    let profile = use_profile();
    let dispatch = use_dispatch();
    view! {
        <Show when=move || dispatch.show_welcome()>
            <div class="animate-rise fixed bottom-10 right-6 md:right-12 z-[200] max-w-[320px]">
                <div class="bg-white text-black p-6 rounded-[2.5rem] shadow-2xl border-t-4 border-[#5a3bff] relative">
                    <button
                        on:click=move |_| dispatch.send(PageEvent::DismissWelcome)
                        aria-label="Dismiss"
                        class="absolute top-4 right-4 text-xl opacity-30 hover:opacity-100"
                    >
                        <i class="extra-close" />
                    </button>
                    <div class="flex items-center gap-3 mb-2 text-[#5a3bff]">
                        <i class="extra-bell animate-bounce" />
                        <span class="font-black text-[10px] uppercase tracking-widest">
                            "New Notification"
                        </span>
                    </div>
                    <h4 class="text-lg font-black italic">{profile.welcome.title.clone()}</h4>
                    <p class="text-xs opacity-70 font-bold mb-4">{profile.welcome.body.clone()}</p>
                    <button
                        on:click=move |_| dispatch.send(PageEvent::GetStarted)
                        class="w-full bg-black text-white py-3 rounded-xl font-black text-[10px] uppercase hover:bg-[#5a3bff] transition-all"
                    >
                        "Get Started"
                    </button>
                </div>
            </div>
        </Show>
    }
}
