use std::time::Duration;

use thiserror::Error;

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Home, Self::About, Self::Portfolio, Self::Contact];

    /// DOM id of the section element on the home page.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    /// Resolves a location hash such as `#contact`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("{HOME_PATH}#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPlan {
    Immediate,
    AfterNavigation {
        to: &'static str,
        delay: Duration,
    },
}

impl ScrollPlan {
    /// Sections only exist on the home route, so leave any other route first.
    pub fn for_path(pathname: &str, delay: Duration) -> Self {
        if pathname == HOME_PATH || pathname.is_empty() {
            Self::Immediate
        } else {
            Self::AfterNavigation {
                to: HOME_PATH,
                delay,
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("No element for section #{0}")]
    MissingSection(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_scroll_immediately_on_home() {
        assert_eq!(ScrollPlan::for_path("/", DELAY), ScrollPlan::Immediate);
        assert_eq!(ScrollPlan::for_path("", DELAY), ScrollPlan::Immediate);
    }

    #[test]
    fn test_navigate_home_first_elsewhere() {
        for path in ["/privacy", "/terms", "/does/not/exist"] {
            assert_eq!(
                ScrollPlan::for_path(path, DELAY),
                ScrollPlan::AfterNavigation {
                    to: "/",
                    delay: DELAY
                }
            );
        }
    }

    #[test]
    fn test_section_ids_unique() {
        let mut ids = Section::ALL.map(|s| s.id()).to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_from_hash() {
        assert_eq!(Section::from_hash("#contact"), Some(Section::Contact));
        assert_eq!(Section::from_hash("portfolio"), Some(Section::Portfolio));
        assert_eq!(Section::from_hash("#skills"), None);
        assert_eq!(Section::from_hash(""), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(Section::About.href(), "/#about");
    }
}
