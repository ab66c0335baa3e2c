use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::contact::{
    ContactSubmission, CONTACT_SUBJECT, EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD, SUBJECT_FIELD,
};
use crate::nav::Section;

use super::use_profile;

const INPUT_CLASS: &str = "w-full p-6 rounded-2xl bg-black border border-white/5 outline-none focus:border-[#5a3bff] transition-all";

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = use_profile();
    let contact = &profile.contact;
    view! {
        <section id=Section::Contact.id() class="py-32 px-6 md:px-[12%]">
            <div class="max-w-6xl mx-auto bg-[#161a20] p-10 md:p-24 rounded-[4rem] border border-white/5 grid grid-cols-1 lg:grid-cols-2 gap-20">
                <div>
                    <h2 class="text-6xl font-black mb-10 tracking-tighter uppercase italic text-[#d4af37]">
                        "Let's talk."
                    </h2>
                    <p class="font-bold opacity-40 mb-12 text-lg">{contact.pitch.clone()}</p>
                    <div class="space-y-6">
                        <ContactInfo icon="extra-email" value=contact.email.clone() />
                        <ContactInfo icon="extra-phone" value=contact.phone.clone() />
                        <ContactInfo icon="extra-location" value=contact.location.clone() />
                    </div>
                </div>
                <ContactForm endpoint=contact.endpoint.clone() />
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(icon: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-5">
            <div class="p-4 bg-black border border-white/5 rounded-2xl text-[#d4af37] text-2xl">
                <i class=icon />
            </div>
            <p class="font-black italic text-lg">{value}</p>
        </div>
    }
}

/// Plain HTML form posting straight to the relay; the submit handler only
/// steps in to block a post that would fail the required-field checks.
#[component]
fn ContactForm(endpoint: String) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            // not hydrated yet, leave it to the browser
            return;
        };
        let submission = ContactSubmission {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        match submission.validate() {
            Ok(()) => {
                log::info!("posting contact form");
                set_error.set(None);
            }
            Err(e) => {
                ev.prevent_default();
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="space-y-4" action=endpoint method="POST" on:submit=on_submit>
            <input type="hidden" name=SUBJECT_FIELD value=CONTACT_SUBJECT />
            <input
                node_ref=name_ref
                class=INPUT_CLASS
                name=NAME_FIELD
                placeholder="Full Name"
                autocomplete="name"
                required
            />
            <input
                node_ref=email_ref
                class=INPUT_CLASS
                type="email"
                name=EMAIL_FIELD
                placeholder="Email Address"
                autocomplete="email"
                required
            />
            <textarea
                node_ref=message_ref
                class=format!("{INPUT_CLASS} h-40")
                name=MESSAGE_FIELD
                placeholder="Your Project Ideas"
                required
            ></textarea>
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! { <p class="text-red-400 font-bold text-sm" role="alert">{msg}</p> }
                    })
            }}
            <button
                type="submit"
                class="w-full bg-[#d4af37] text-black py-6 rounded-2xl font-black uppercase text-xl shadow-2xl hover:bg-[#5a3bff] hover:text-white transition-all"
            >
                "Send Message"
            </button>
        </form>
    }
}
