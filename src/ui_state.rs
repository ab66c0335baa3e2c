//! Page-level UI flags and the events that flip them.
//!
//! The view layer owns timers and the DOM; everything that decides *what*
//! changes lives here so it can be tested without a browser.

use crate::nav::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub loading: bool,
    pub menu_open: bool,
    pub show_welcome: bool,
    /// Set once the visitor closes the popup; it never comes back.
    pub welcome_dismissed: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            loading: true,
            menu_open: false,
            show_welcome: false,
            welcome_dismissed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    SplashElapsed,
    SafetyTimeout,
    WelcomeElapsed,
    DismissWelcome,
    GetStarted,
    OpenMenu,
    CloseMenu,
    OverlayClicked,
    Navigate(Section),
}

/// Work the view layer has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    ScheduleWelcome,
    ScrollTo(Section),
}

impl PageState {
    pub fn apply(&mut self, event: PageEvent) -> Option<Followup> {
        match event {
            PageEvent::SplashElapsed | PageEvent::SafetyTimeout => {
                if self.loading {
                    self.loading = false;
                    Some(Followup::ScheduleWelcome)
                } else {
                    None
                }
            }
            PageEvent::WelcomeElapsed => {
                if !self.loading && !self.welcome_dismissed {
                    self.show_welcome = true;
                }
                None
            }
            PageEvent::DismissWelcome => {
                self.dismiss_welcome();
                None
            }
            PageEvent::GetStarted => {
                self.dismiss_welcome();
                self.menu_open = false;
                Some(Followup::ScrollTo(Section::Contact))
            }
            PageEvent::OpenMenu => {
                self.menu_open = true;
                None
            }
            PageEvent::CloseMenu | PageEvent::OverlayClicked => {
                self.menu_open = false;
                None
            }
            PageEvent::Navigate(section) => {
                self.menu_open = false;
                Some(Followup::ScrollTo(section))
            }
        }
    }

    fn dismiss_welcome(&mut self) {
        self.show_welcome = false;
        self.welcome_dismissed = true;
    }
}

/// First `ticks` characters of the splash text, for the typing effect.
pub fn typed_prefix(text: &str, ticks: usize) -> &str {
    match text.char_indices().nth(ticks) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> PageState {
        let mut state = PageState::default();
        state.apply(PageEvent::SplashElapsed);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::default();
        assert!(state.loading);
        assert!(!state.menu_open);
        assert!(!state.show_welcome);
    }

    #[test]
    fn test_splash_clears_loading_and_schedules_welcome() {
        let mut state = PageState::default();
        assert_eq!(
            state.apply(PageEvent::SplashElapsed),
            Some(Followup::ScheduleWelcome)
        );
        assert!(!state.loading);
        // welcome is scheduled, not shown yet
        assert!(!state.show_welcome);
    }

    #[test]
    fn test_safety_timeout_clears_loading() {
        let mut state = PageState::default();
        assert_eq!(
            state.apply(PageEvent::SafetyTimeout),
            Some(Followup::ScheduleWelcome)
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_only_one_welcome_schedule() {
        let mut state = PageState::default();
        assert!(state.apply(PageEvent::SplashElapsed).is_some());
        assert_eq!(state.apply(PageEvent::SafetyTimeout), None);

        let mut state = PageState::default();
        assert!(state.apply(PageEvent::SafetyTimeout).is_some());
        assert_eq!(state.apply(PageEvent::SplashElapsed), None);
    }

    #[test]
    fn test_welcome_never_shows_while_loading() {
        let mut state = PageState::default();
        state.apply(PageEvent::WelcomeElapsed);
        assert!(!state.show_welcome);
        assert!(state.loading);
    }

    #[test]
    fn test_welcome_after_loading() {
        let mut state = loaded();
        state.apply(PageEvent::WelcomeElapsed);
        assert!(state.show_welcome);
    }

    #[test]
    fn test_close_dismisses_welcome_for_good() {
        let mut state = loaded();
        state.apply(PageEvent::WelcomeElapsed);
        assert_eq!(state.apply(PageEvent::DismissWelcome), None);
        assert!(!state.show_welcome);

        state.apply(PageEvent::WelcomeElapsed);
        assert!(!state.show_welcome);
    }

    #[test]
    fn test_get_started_dismisses_and_scrolls_to_contact() {
        let mut state = loaded();
        state.apply(PageEvent::WelcomeElapsed);
        state.apply(PageEvent::OpenMenu);
        assert_eq!(
            state.apply(PageEvent::GetStarted),
            Some(Followup::ScrollTo(Section::Contact))
        );
        assert!(!state.show_welcome);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_menu_open_close() {
        let mut state = loaded();
        state.apply(PageEvent::OpenMenu);
        assert!(state.menu_open);
        state.apply(PageEvent::CloseMenu);
        assert!(!state.menu_open);

        state.apply(PageEvent::OpenMenu);
        state.apply(PageEvent::OverlayClicked);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let mut state = loaded();
        state.apply(PageEvent::OpenMenu);
        for section in Section::ALL {
            state.apply(PageEvent::OpenMenu);
            assert_eq!(
                state.apply(PageEvent::Navigate(section)),
                Some(Followup::ScrollTo(section))
            );
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn test_typed_prefix() {
        assert_eq!(typed_prefix("SAGOR", 0), "");
        assert_eq!(typed_prefix("SAGOR", 3), "SAG");
        assert_eq!(typed_prefix("SAGOR", 99), "SAGOR");
        // multi-byte characters are never split
        assert_eq!(typed_prefix("Ads 🚀!", 5), "Ads 🚀");
    }

    #[test]
    fn test_menu_leaves_welcome_alone() {
        let mut state = loaded();
        state.apply(PageEvent::WelcomeElapsed);
        state.apply(PageEvent::OpenMenu);
        state.apply(PageEvent::OverlayClicked);
        assert!(state.show_welcome);
    }
}
