//! Application state and core logic

use crate::capture::{CaptureDriver, SubmissionSink};
use crate::config::LandingConfig;
use crate::content::{LandingContent, Link, StructuredData};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, CaptureError, CaptureFocus, SplashState, SubmissionPhase, View};
use crate::ui::{sidebar_item_at, sidebar_visible};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;

/// Lines scrolled per mouse wheel notch
const WHEEL_SCROLL_LINES: u16 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Page copy
    pub content: LandingContent,
    /// JSON-LD descriptors shown in the metadata view
    pub structured_data: StructuredData,
    /// Runs the capture form's timers
    capture: CaptureDriver,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Frame counter for the pending spinner
    pub tick: u64,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &LandingConfig, content: LandingContent, sink: Arc<dyn SubmissionSink>) -> Self {
        let mut state = AppState::default();
        let splash_state = if config.skip_splash() {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        Self {
            state,
            content,
            structured_data: StructuredData::default(),
            capture: CaptureDriver::new(sink, config.auto_reset()),
            quit: false,
            splash_state,
            terminal_size: None,
            tick: 0,
        }
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Home;
                return true;
            }
        }
        false
    }

    /// Advance one UI loop iteration: apply finished timers. Returns true if
    /// the capture form changed.
    pub fn on_tick(&mut self) -> bool {
        self.tick = self.tick.wrapping_add(1);
        self.capture.poll(&mut self.state.capture_form)
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Whether the loop should redraw at animation speed
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.capture_form.is_pending()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the section sidebar fits on screen
    pub fn show_sidebar(&self) -> bool {
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        sidebar_visible(width)
    }

    /// Entries of the navigation menu: home, the nav links, then the
    /// early access call to action
    pub fn nav_menu_items(&self) -> Vec<Link> {
        let mut items = Vec::with_capacity(self.content.navigation.len() + 2);
        items.push(Link {
            name: "Home".to_string(),
            href: "/".to_string(),
        });
        items.extend(self.content.navigation.iter().cloned());
        items.push(self.content.hero.primary_cta.clone());
        items
    }

    /// Follow a link. In-page anchors navigate; anything else is reported in
    /// the status bar.
    pub fn follow_link(&mut self, href: &str) {
        match View::from_anchor(href) {
            Some(view) => self.state.navigate(view),
            None => {
                tracing::debug!("Link {href} leaves the landing page");
                self.state.status_message = Some(format!("{href} is not part of this page"));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.in_splash() {
            self.handle_splash_key(key);
            return Ok(());
        }

        self.state.status_message = None;

        if self.state.nav_menu.is_open {
            self.handle_nav_menu_key(key);
            return Ok(());
        }

        // Section paging works everywhere, including inside the form
        match key.code {
            KeyCode::PageDown => {
                self.state.navigate(self.state.current_view.next());
                return Ok(());
            }
            KeyCode::PageUp => {
                self.state.navigate(self.state.current_view.prev());
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Splash => {}
            View::GetStarted => self.handle_capture_key(key),
            View::Metadata => self.handle_metadata_key(key)?,
            _ => self.handle_section_key(key),
        }

        Ok(())
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_nav_menu_key(&mut self, key: KeyEvent) {
        let len = self.nav_menu_items().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.state.nav_menu.close(),
            KeyCode::Up | KeyCode::Char('k') => self.state.nav_menu.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.state.nav_menu.select_next(len),
            KeyCode::Enter => {
                let items = self.nav_menu_items();
                if let Some(link) = items.get(self.state.nav_menu.selected_index) {
                    self.follow_link(&link.href);
                }
                self.state.nav_menu.close();
            }
            _ => {}
        }
    }

    /// Keys shared by all non-form views. Returns true if handled.
    fn handle_common_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => {
                self.state.nav_menu.selected_index = 0;
                self.state.nav_menu.toggle();
            }
            KeyCode::Char('g') => self.follow_link("#get-started"),
            KeyCode::Tab => self.state.navigate(self.state.current_view.next()),
            KeyCode::BackTab => self.state.navigate(self.state.current_view.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(view) = View::NAVIGABLE.get(idx) {
                    self.state.navigate(*view);
                }
            }
            _ => return false,
        }
        true
    }

    fn handle_section_key(&mut self, key: KeyEvent) {
        if self.handle_common_key(key) {
            return;
        }

        match (self.state.current_view, key.code) {
            (View::Home, KeyCode::Left | KeyCode::Right) => {
                self.state.selected_cta = 1 - self.state.selected_cta.min(1);
            }
            (View::Home, KeyCode::Enter) => {
                let cta = if self.state.selected_cta == 0 {
                    &self.content.hero.primary_cta
                } else {
                    &self.content.hero.secondary_cta
                };
                let href = cta.href.clone();
                self.follow_link(&href);
            }
            (View::About | View::HowItWorks, KeyCode::Enter) => self.follow_link("#get-started"),
            _ => {}
        }
    }

    fn handle_metadata_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('y') && key.modifiers.contains(COPY_MODIFIER) {
            let json = self.structured_data.to_json_ld()?;
            match self.copy_to_clipboard(&json) {
                Ok(()) => {
                    self.state.status_message =
                        Some(format!("Copied {} chars of JSON-LD", json.chars().count()));
                }
                Err(err) => {
                    tracing::warn!("Clipboard unavailable: {err:#}");
                    self.state.status_message = Some("Clipboard unavailable".to_string());
                }
            }
            return Ok(());
        }
        self.handle_common_key(key);
        Ok(())
    }

    fn handle_capture_key(&mut self, key: KeyEvent) {
        let form = &self.state.capture_form;

        if form.is_succeeded() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.reset_capture(),
                _ => {
                    self.handle_common_key(key);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.capture_form.next_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.capture_form.prev_field();
                return;
            }
            KeyCode::Esc => {
                if matches!(form.phase(), SubmissionPhase::Failed(_)) {
                    self.reset_capture();
                } else {
                    self.state.capture_form.focus = CaptureFocus::Submit;
                }
                return;
            }
            KeyCode::Enter => {
                self.submit_capture();
                return;
            }
            _ => {}
        }

        match self.state.capture_form.focus {
            CaptureFocus::Email => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.capture_form.push_char(c);
                }
                KeyCode::Backspace => self.state.capture_form.pop_char(),
                _ => {}
            },
            CaptureFocus::Role => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    self.state.capture_form.toggle_role();
                }
                _ => {
                    self.handle_common_key(key);
                }
            },
            CaptureFocus::Submit => match key.code {
                KeyCode::Char(' ') => self.submit_capture(),
                _ => {
                    self.handle_common_key(key);
                }
            },
        }
    }

    /// Submit the capture form, reporting refusals in the status bar
    pub fn submit_capture(&mut self) {
        match self.capture.submit(&mut self.state.capture_form) {
            Ok(()) => {}
            Err(CaptureError::EmptyEmail) => {
                self.state.capture_form.focus = CaptureFocus::Email;
                self.state.status_message = Some("Enter your email to get started".to_string());
            }
            Err(CaptureError::InvalidEmail) => {
                self.state.capture_form.focus = CaptureFocus::Email;
            }
            // The control is disabled in these phases
            Err(CaptureError::SubmissionInProgress | CaptureError::ConfirmationShowing) => {}
            Err(err @ CaptureError::NothingToReset) => {
                tracing::debug!("Unexpected submit refusal: {err}");
            }
        }
    }

    /// "Join Another Email" from the confirmation, or dismissing an error
    pub fn reset_capture(&mut self) {
        if let Err(err) = self.capture.reset(&mut self.state.capture_form) {
            tracing::debug!("Reset ignored: {err}");
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if let Some(ref mut splash) = self.splash_state {
                    splash.skip();
                }
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::Down(MouseButton::Left) if self.show_sidebar() => {
                if let Some(view) = sidebar_item_at(mouse.row, mouse.column)
                    .and_then(|idx| View::NAVIGABLE.get(idx))
                {
                    self.state.navigate(*view);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{MockSubmissionSink, SimulatedSink, SubmissionReceipt};
    use crate::state::Role;
    use crossterm::event::KeyEventState;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn config() -> LandingConfig {
        LandingConfig {
            skip_splash: Some(true),
            ..Default::default()
        }
    }

    fn create_app() -> App {
        let sink = Arc::new(SimulatedSink::new(Duration::from_millis(1000)));
        let mut app = App::new(&config(), LandingContent::default(), sink);
        app.terminal_size = Some((40, 120));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    mod app_basic_tests {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let app = create_app();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_starts_on_home_when_splash_skipped() {
            let app = create_app();
            assert_eq!(app.state.current_view, View::Home);
            assert!(!app.in_splash());
            assert!(app.splash_state.is_none());
        }

        #[test]
        fn test_starts_in_splash_by_default() {
            let sink = Arc::new(SimulatedSink::new(Duration::ZERO));
            let app = App::new(&LandingConfig::default(), LandingContent::default(), sink);
            assert!(app.in_splash());
            assert!(app.is_animating());
        }

        #[test]
        fn test_key_skips_splash() {
            let sink = Arc::new(SimulatedSink::new(Duration::ZERO));
            let mut app = App::new(&LandingConfig::default(), LandingContent::default(), sink);
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(app.update_splash(24));
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_click_skips_splash() {
            let sink = Arc::new(SimulatedSink::new(Duration::ZERO));
            let mut app = App::new(&LandingConfig::default(), LandingContent::default(), sink);
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5))
                .unwrap();
            assert!(app.update_splash(24));
        }

        #[test]
        fn test_q_quits_from_section() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_sidebar_hidden_on_narrow_terminal() {
            let mut app = create_app();
            assert!(app.show_sidebar());
            app.terminal_size = Some((40, 60));
            assert!(!app.show_sidebar());
        }
    }

    mod navigation_tests {
        use super::*;

        #[test]
        fn test_tab_moves_to_next_section() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.current_view, View::About);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_number_keys_jump() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('4'))).unwrap();
            assert_eq!(app.state.current_view, View::Impact);
            app.handle_key(key(KeyCode::Char('9'))).unwrap();
            assert_eq!(app.state.current_view, View::Impact);
        }

        #[test]
        fn test_g_jumps_to_get_started() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('g'))).unwrap();
            assert_eq!(app.state.current_view, View::GetStarted);
        }

        #[test]
        fn test_hero_primary_cta() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::GetStarted);
        }

        #[test]
        fn test_hero_secondary_cta() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.selected_cta, 1);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::About);
        }

        #[test]
        fn test_follow_external_link_sets_status() {
            let mut app = create_app();
            app.follow_link("/privacy");
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_page_down_leaves_form() {
            let mut app = create_app();
            app.state.navigate(View::GetStarted);
            app.handle_key(key(KeyCode::PageDown)).unwrap();
            assert_eq!(app.state.current_view, View::Contact);
        }

        #[test]
        fn test_scroll_keys() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.scroll_offset, 2);
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.state.scroll_offset, 1);
        }

        #[test]
        fn test_mouse_wheel_scrolls() {
            let mut app = create_app();
            app.handle_mouse(mouse(MouseEventKind::ScrollDown, 50, 10))
                .unwrap();
            assert_eq!(app.state.scroll_offset, WHEEL_SCROLL_LINES);
        }

        #[test]
        fn test_click_on_sidebar_navigates() {
            let mut app = create_app();
            let row = crate::ui::HEADER_HEIGHT + crate::ui::BUTTON_HEIGHT * 2 + 1;
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, row))
                .unwrap();
            assert_eq!(app.state.current_view, View::HowItWorks);
        }

        #[test]
        fn test_click_ignored_without_sidebar() {
            let mut app = create_app();
            app.terminal_size = Some((40, 60));
            let row = crate::ui::HEADER_HEIGHT + 1;
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, row))
                .unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }
    }

    mod nav_menu_tests {
        use super::*;

        #[test]
        fn test_menu_items() {
            let app = create_app();
            let names: Vec<String> = app.nav_menu_items().into_iter().map(|l| l.name).collect();
            assert_eq!(
                names,
                vec!["Home", "About", "How It Works", "Impact", "Contact", "Get Early Access"]
            );
        }

        #[test]
        fn test_toggle_and_close() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            assert!(app.state.nav_menu.is_open);
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.nav_menu.is_open);
        }

        #[test]
        fn test_choosing_item_navigates_and_closes() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::HowItWorks);
            assert!(!app.state.nav_menu.is_open);
        }

        #[test]
        fn test_menu_swallows_section_keys() {
            let mut app = create_app();
            app.handle_key(key(KeyCode::Char('m'))).unwrap();
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(!app.should_quit());
        }
    }

    mod capture_tests {
        use super::*;

        fn app_on_form() -> App {
            let mut app = create_app();
            app.state.navigate(View::GetStarted);
            app
        }

        #[tokio::test(start_paused = true)]
        async fn test_typing_goes_to_email_field() {
            let mut app = app_on_form();
            type_text(&mut app, "qa@b.com");
            assert_eq!(app.state.capture_form.email.as_text(), "qa@b.com");
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.capture_form.email.as_text(), "qa@b.co");
        }

        #[tokio::test(start_paused = true)]
        async fn test_enter_with_empty_email_reports_status() {
            let mut app = app_on_form();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.capture_form.phase(), &SubmissionPhase::Idle);
            assert!(app.state.status_message.is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_role_field_toggles() {
            let mut app = app_on_form();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.capture_form.focus, CaptureFocus::Role);
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(app.state.capture_form.role(), Role::Farmer);
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert_eq!(app.state.capture_form.role(), Role::Investor);
        }

        #[tokio::test(start_paused = true)]
        async fn test_full_cycle_through_keys() {
            let mut app = app_on_form();
            type_text(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.state.capture_form.is_pending());
            assert!(app.is_animating());

            tokio::time::sleep(Duration::from_millis(1100)).await;
            assert!(app.on_tick());
            assert!(app.state.capture_form.is_succeeded());
            assert_eq!(app.state.capture_form.email.as_text(), "");

            // "Join Another Email"
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.capture_form.phase(), &SubmissionPhase::Idle);

            tokio::time::sleep(Duration::from_millis(6000)).await;
            assert!(!app.on_tick());
            assert_eq!(app.state.capture_form.phase(), &SubmissionPhase::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn test_enter_while_pending_is_ignored() {
            let mut app = app_on_form();
            type_text(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            let cycle = app.state.capture_form.cycle();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.capture_form.cycle(), cycle);
            assert!(app.state.capture_form.is_pending());
        }

        #[tokio::test(start_paused = true)]
        async fn test_invalid_email_keeps_form_idle() {
            let mut app = app_on_form();
            type_text(&mut app, "farmer");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.capture_form.phase(), &SubmissionPhase::Idle);
            assert!(app.state.capture_form.validation_message().is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_confirmation_ignores_typing() {
            let mut app = app_on_form();
            type_text(&mut app, "a@b.com");
            app.submit_capture();
            tokio::time::sleep(Duration::from_millis(1100)).await;
            app.on_tick();

            type_text(&mut app, "zz");
            assert!(app.state.capture_form.is_succeeded());
            assert_eq!(app.state.capture_form.email.as_text(), "");
        }

        #[tokio::test]
        async fn test_failure_then_dismiss() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .returning(|_| Err(crate::capture::SubmitError::Rejected("Closed".to_string())));
            let mut app = App::new(&config(), LandingContent::default(), Arc::new(sink));
            app.state.navigate(View::GetStarted);
            type_text(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Enter)).unwrap();

            while !app.on_tick() {
                tokio::task::yield_now().await;
            }
            assert_eq!(
                app.state.capture_form.phase(),
                &SubmissionPhase::Failed("Closed".to_string())
            );

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert_eq!(app.state.capture_form.phase(), &SubmissionPhase::Idle);
            assert_eq!(app.state.capture_form.email.as_text(), "a@b.com");
        }

        #[tokio::test]
        async fn test_submission_uses_selected_role() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|s| s.role == Role::Farmer && s.email == "m@farm.ph")
                .times(1)
                .returning(|s| Ok(SubmissionReceipt::new(s.role)));
            let mut app = App::new(&config(), LandingContent::default(), Arc::new(sink));
            app.state.navigate(View::GetStarted);
            type_text(&mut app, "m@farm.ph");
            app.state.capture_form.select_role(Role::Farmer);
            app.handle_key(key(KeyCode::Enter)).unwrap();

            while !app.on_tick() {
                tokio::task::yield_now().await;
            }
            assert!(app.state.capture_form.is_succeeded());
        }
    }

    mod metadata_tests {
        use super::*;

        #[test]
        fn test_plain_y_does_not_copy() {
            let mut app = create_app();
            app.state.navigate(View::Metadata);
            app.handle_key(key(KeyCode::Char('y'))).unwrap();
            assert!(app.state.status_message.is_none());
        }
    }
}
