mod contact;
mod footer;
mod homepage;
mod legal;
mod menu;
mod skills;
mod splash;
mod welcome;
mod works;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::*,
    hooks::{use_location, use_navigate},
    path, NavigateOptions,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::config::Timings;
use crate::content::{profile, Profile};
use crate::nav::{NavError, ScrollPlan, Section};
use crate::ui_state::{Followup, PageEvent, PageState};

use footer::Footer;
use homepage::HomePage;
use legal::{LegalKind, LegalPage, NotFound};
use menu::Header;
use splash::Splash;
use welcome::WelcomePopup;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/sagor-bio.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Sagor Ahmed - {title}") />
        {match profile() {
            Ok(profile) => {
                provide_context(profile);
                view! {
                    <Meta name="description" content=profile.tagline.clone() />
                    <Router>
                        <Layout />
                    </Router>
                }
                    .into_any()
            }
            Err(e) => {
                log::error!("couldn't load profile: {e}");
                view! {
                    <main class="min-h-screen flex items-center justify-center bg-[#0a0c10] text-white">
                        <p class="font-bold opacity-60">"This page is temporarily unavailable."</p>
                    </main>
                }
                    .into_any()
            }
        }}
    }
}

pub fn use_profile() -> &'static Profile {
    expect_context::<&'static Profile>()
}

/// Handle for sending [`PageEvent`]s from anywhere under the layout.
///
/// Transitions are applied immediately; any follow-up work is queued and
/// carried out by the layout, which owns the router and the timers.
#[derive(Debug, Clone, Copy)]
pub struct PageDispatch {
    state: RwSignal<PageState>,
    followups: RwSignal<Vec<Followup>>,
}

impl PageDispatch {
    fn new() -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
            followups: RwSignal::new(Vec::new()),
        }
    }

    pub fn send(&self, event: PageEvent) {
        let followup = self.state.try_update(|s| s.apply(event)).flatten();
        log::debug!("page event {event:?} -> {followup:?}");
        if let Some(followup) = followup {
            self.followups.update(|q| q.push(followup));
        }
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open)
    }

    pub fn show_welcome(&self) -> bool {
        self.state.with(|s| s.show_welcome)
    }

    fn take_followups(&self) -> Vec<Followup> {
        if self.followups.with_untracked(Vec::is_empty) {
            return Vec::new();
        }
        self.followups
            .try_update(std::mem::take)
            .unwrap_or_default()
    }
}

pub fn use_dispatch() -> PageDispatch {
    expect_context::<PageDispatch>()
}

#[component]
fn Layout() -> impl IntoView {
    let timings = Timings::default();
    let dispatch = PageDispatch::new();
    provide_context(dispatch);

    let UseTimeoutFnReturn {
        start: start_splash,
        ..
    } = use_timeout_fn(
        move |_: ()| dispatch.send(PageEvent::SplashElapsed),
        timings.splash.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_safety,
        ..
    } = use_timeout_fn(
        move |_: ()| dispatch.send(PageEvent::SafetyTimeout),
        timings.safety.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_welcome,
        ..
    } = use_timeout_fn(
        move |_: ()| dispatch.send(PageEvent::WelcomeElapsed),
        timings.welcome.as_millis() as f64,
    );

    // effects only run in the browser, so the server always sends the splash up
    Effect::new(move |_| {
        start_splash(());
        start_safety(());
    });

    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move |_| {
        dispatch.followups.track();
        for followup in dispatch.take_followups() {
            match followup {
                Followup::ScheduleWelcome => {
                    start_welcome(());
                    // honour deep links like /#contact once the sections exist
                    if let Some(section) = Section::from_hash(&location.hash.get_untracked()) {
                        set_timeout(move || scroll_or_warn(section), timings.scroll_after_nav);
                    }
                }
                Followup::ScrollTo(section) => {
                    let pathname = location.pathname.get_untracked();
                    match ScrollPlan::for_path(&pathname, timings.scroll_after_nav) {
                        ScrollPlan::Immediate => scroll_or_warn(section),
                        ScrollPlan::AfterNavigation { to, delay } => {
                            navigate(to, NavigateOptions::default());
                            set_timeout(move || scroll_or_warn(section), delay);
                        }
                    }
                }
            }
        }
    });

    // the page renders underneath the splash so routes, status codes and
    // section ids are all there on first paint
    view! {
        <Show when=move || dispatch.loading()>
            <Splash />
        </Show>
        <div
            aria-hidden=move || dispatch.loading().to_string()
            class="bg-[#0a0c10] text-white font-sans selection:bg-[#5a3bff] selection:text-white overflow-x-hidden"
        >
            <WelcomePopup />
            <Header />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/privacy")
                        view=|| view! { <LegalPage kind=LegalKind::Privacy /> }
                    />
                    <Route
                        path=path!("/terms")
                        view=|| view! { <LegalPage kind=LegalKind::Terms /> }
                    />
                </Routes>
            </main>
            <Footer />
        </div>
    }
}

fn scroll_into_view(section: Section) -> Result<(), NavError> {
    let el = document()
        .get_element_by_id(section.id())
        .ok_or(NavError::MissingSection(section.id()))?;
    // smooth behaviour comes from `scroll-behavior` in input.css
    el.scroll_into_view();
    Ok(())
}

fn scroll_or_warn(section: Section) {
    if let Err(e) = scroll_into_view(section) {
        log::warn!("{e}");
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_router::location::RequestUrl;

    #[test]
    fn test_home_renders_sections_and_contact_form() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new("/"));
            let html = view! { <App /> }.to_html();

            assert!(html.contains(r#"action="https://formsubmit.co/bdsagordm@gmail.com""#));
            for field in ["name", "email", "message"] {
                assert!(html.contains(&format!(r#"name="{field}""#)), "missing field {field}");
            }
            for id in ["home", "about", "portfolio", "contact"] {
                assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
            }
        });
    }
}
