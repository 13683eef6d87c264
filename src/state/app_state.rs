//! Application state definitions

use super::capture_form::CaptureForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Home,
    About,
    HowItWorks,
    Impact,
    GetStarted,
    Contact,
    Metadata,
}

impl View {
    /// Page sections in scroll order, followed by the metadata view
    pub const NAVIGABLE: [View; 7] = [
        View::Home,
        View::About,
        View::HowItWorks,
        View::Impact,
        View::GetStarted,
        View::Contact,
        View::Metadata,
    ];

    /// In-page anchor for this view
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Splash => "#splash",
            Self::Home => "#home",
            Self::About => "#about",
            Self::HowItWorks => "#how-it-works",
            Self::Impact => "#impact",
            Self::GetStarted => "#get-started",
            Self::Contact => "#contact",
            Self::Metadata => "#metadata",
        }
    }

    /// Resolve an anchor such as `#about`. The leading `#` is optional and
    /// `/` maps to the home section.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        if anchor == "/" {
            return Some(Self::Home);
        }
        let anchor = anchor.trim_start_matches('#');
        Self::NAVIGABLE
            .into_iter()
            .find(|view| view.anchor().trim_start_matches('#') == anchor)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Home => "Home",
            Self::About => "About",
            Self::HowItWorks => "How It Works",
            Self::Impact => "Impact",
            Self::GetStarted => "Get Started",
            Self::Contact => "Contact",
            Self::Metadata => "Metadata",
        }
    }

    fn position(&self) -> Option<usize> {
        Self::NAVIGABLE.iter().position(|v| v == self)
    }

    /// Next section down the page (stops at the last one)
    pub fn next(&self) -> Self {
        match self.position() {
            Some(idx) if idx + 1 < Self::NAVIGABLE.len() => Self::NAVIGABLE[idx + 1],
            Some(_) => *self,
            None => Self::Home,
        }
    }

    /// Previous section up the page (stops at the first one)
    pub fn prev(&self) -> Self {
        match self.position() {
            Some(idx) if idx > 0 => Self::NAVIGABLE[idx - 1],
            _ => Self::Home,
        }
    }
}

/// Mobile-style navigation menu shown on narrow terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    pub is_open: bool,
    pub selected_index: usize,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Vertical scroll of the current section
    pub scroll_offset: u16,
    pub nav_menu: NavMenu,
    /// Highlighted hero call to action (0 = primary, 1 = secondary)
    pub selected_cta: usize,
    pub capture_form: CaptureForm,
    pub status_message: Option<String>,
}

impl AppState {
    /// Jump to a section, resetting its scroll position
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            tracing::debug!("Navigating to {}", view.anchor());
        }
        self.current_view = view;
        self.scroll_offset = 0;
        self.selected_cta = 0;
        self.nav_menu.close();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_anchor_round_trip_for_sections() {
            for view in View::NAVIGABLE {
                assert_eq!(View::from_anchor(view.anchor()), Some(view));
            }
        }

        #[test]
        fn test_from_anchor_without_hash() {
            assert_eq!(View::from_anchor("get-started"), Some(View::GetStarted));
        }

        #[test]
        fn test_from_anchor_root() {
            assert_eq!(View::from_anchor("/"), Some(View::Home));
        }

        #[test]
        fn test_from_anchor_unknown() {
            assert_eq!(View::from_anchor("#pricing"), None);
            assert_eq!(View::from_anchor("/privacy"), None);
        }

        #[test]
        fn test_splash_is_not_addressable() {
            assert_eq!(View::from_anchor("#splash"), None);
        }

        #[test]
        fn test_next_and_prev() {
            assert_eq!(View::Home.next(), View::About);
            assert_eq!(View::About.prev(), View::Home);
            assert_eq!(View::Home.prev(), View::Home);
            assert_eq!(View::Metadata.next(), View::Metadata);
            assert_eq!(View::Splash.next(), View::Home);
        }
    }

    mod nav_menu {
        use super::*;

        #[test]
        fn test_toggle() {
            let mut menu = NavMenu::default();
            assert!(!menu.is_open);
            menu.toggle();
            assert!(menu.is_open);
            menu.toggle();
            assert!(!menu.is_open);
        }

        #[test]
        fn test_selection_wraps() {
            let mut menu = NavMenu::default();
            menu.select_prev(4);
            assert_eq!(menu.selected_index, 3);
            menu.select_next(4);
            assert_eq!(menu.selected_index, 0);
        }

        #[test]
        fn test_selection_with_empty_list() {
            let mut menu = NavMenu::default();
            menu.select_next(0);
            menu.select_prev(0);
            assert_eq!(menu.selected_index, 0);
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_navigate_resets_scroll_and_closes_menu() {
            let mut state = AppState::default();
            state.scroll_down(5);
            state.nav_menu.toggle();

            state.navigate(View::Impact);

            assert_eq!(state.current_view, View::Impact);
            assert_eq!(state.scroll_offset, 0);
            assert!(!state.nav_menu.is_open);
        }

        #[test]
        fn test_scroll_up_saturates() {
            let mut state = AppState::default();
            state.scroll_up(3);
            assert_eq!(state.scroll_offset, 0);
        }
    }
}
