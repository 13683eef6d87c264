//! UI module for rendering the TUI

mod about;
mod capture;
mod components;
mod contact;
mod hero;
mod how_it_works;
mod impact;
mod layout;
mod metadata;
mod splash;
mod widgets;

pub use components::BUTTON_HEIGHT;
pub use layout::{sidebar_item_at, sidebar_visible, HEADER_HEIGHT};

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (&app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let page = layout::create_layout(area);

    layout::draw_header(frame, page.header, app);
    if let Some(sidebar) = page.sidebar {
        layout::draw_sidebar(frame, sidebar, app);
    }

    match app.state.current_view {
        View::Splash | View::Home => hero::draw(frame, page.main, app),
        View::About => about::draw(frame, page.main, app),
        View::HowItWorks => how_it_works::draw(frame, page.main, app),
        View::Impact => impact::draw(frame, page.main, app),
        View::GetStarted => capture::draw(frame, page.main, app),
        View::Contact => contact::draw(frame, page.main, app),
        View::Metadata => metadata::draw(frame, page.main, app),
    }

    layout::draw_status_bar(frame, page.status, app);

    if app.state.nav_menu.is_open {
        layout::draw_nav_menu(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SimulatedSink;
    use crate::config::LandingConfig;
    use crate::content::LandingContent;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn create_app(skip_splash: bool) -> App {
        let config = LandingConfig {
            skip_splash: Some(skip_splash),
            ..Default::default()
        };
        let sink = Arc::new(SimulatedSink::new(Duration::from_millis(1000)));
        App::new(&config, LandingContent::default(), sink)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_splash_renders_hint() {
        let app = create_app(false);
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Press any key to skip"));
    }

    fn render_view(app: &mut App, view: View) -> String {
        app.state.navigate(view);
        render(app, 200, 200)
    }

    fn assert_all_shown<'a>(screen: &str, entries: impl IntoIterator<Item = &'a str>) {
        for entry in entries {
            assert!(screen.contains(entry), "missing {entry:?}");
        }
    }

    #[test]
    fn test_every_section_renders() {
        let mut app = create_app(true);
        for view in View::NAVIGABLE {
            app.state.navigate(view);
            for (width, height) in [(120, 40), (60, 24)] {
                let screen = render(&app, width, height);
                assert!(screen.contains(view.anchor()), "{view:?} at {width}x{height}");
            }
            // Tiny terminals must not panic
            let _ = render(&app, 20, 8);
        }
    }

    mod section_content {
        use super::*;
        use crate::content::{Step, Testimonial};
        use crate::state::Role;

        #[test]
        fn test_about_shows_every_audience_feature() {
            let mut app = create_app(true);
            let screen = render_view(&mut app, View::About);
            let content = &app.content;
            for audience in &content.audiences {
                assert_all_shown(&screen, [audience.title.as_str(), audience.badge.as_str()]);
                assert_all_shown(&screen, audience.features.iter().map(String::as_str));
            }
            assert_all_shown(&screen, [content.about_cta.title.as_str()]);
        }

        #[test]
        fn test_how_it_works_shows_every_step() {
            let mut app = create_app(true);
            let screen = render_view(&mut app, View::HowItWorks);
            assert_all_shown(&screen, app.content.steps.iter().map(|s| s.title.as_str()));
            assert_all_shown(&screen, [app.content.steps_cta.title.as_str()]);
        }

        #[test]
        fn test_impact_shows_stats_testimonials_and_badges() {
            let mut app = create_app(true);
            let screen = render_view(&mut app, View::Impact);
            let impact = &app.content.impact;
            assert_all_shown(&screen, impact.stats.iter().map(|s| s.label.as_str()));
            assert_all_shown(&screen, impact.testimonials.iter().map(|t| t.name.as_str()));
            assert_all_shown(&screen, impact.trust_badges.iter().map(String::as_str));
        }

        #[test]
        fn test_contact_shows_every_link() {
            let mut app = create_app(true);
            let screen = render_view(&mut app, View::Contact);
            let footer = &app.content.footer;
            for column in &footer.columns {
                assert_all_shown(&screen, [column.title.as_str()]);
                assert_all_shown(&screen, column.links.iter().map(|l| l.name.as_str()));
            }
            assert_all_shown(&screen, footer.social.iter().map(|l| l.name.as_str()));
            assert_all_shown(&screen, [footer.contact.email.as_str()]);
        }

        #[test]
        fn test_sections_render_overridden_entries() {
            let mut content = LandingContent::default();
            content.impact.testimonials.truncate(1);
            content.impact.testimonials.push(Testimonial {
                name: "Ana Reyes".to_string(),
                role: "Corn Farmer, Isabela".to_string(),
                quote: "Planting season came with capital on time.".to_string(),
                kind: Role::Farmer,
            });
            content.steps.truncate(2);
            content.steps.push(Step {
                number: 3,
                title: "Harvest Together".to_string(),
                description: "Share in the season's results".to_string(),
            });

            let config = LandingConfig {
                skip_splash: Some(true),
                ..Default::default()
            };
            let sink = Arc::new(SimulatedSink::new(Duration::from_millis(1000)));
            let mut app = App::new(&config, content, sink);

            let impact = render_view(&mut app, View::Impact);
            assert!(impact.contains("Maria Santos"));
            assert!(impact.contains("Ana Reyes"));
            assert!(!impact.contains("Jose Cruz"));
            assert!(!impact.contains("Miguel Tan"));

            let steps = render_view(&mut app, View::HowItWorks);
            assert!(steps.contains("Harvest Together"));
            assert!(!steps.contains("Track Impact"));
        }
    }

    #[test]
    fn test_hero_shows_both_ctas() {
        let app = create_app(true);
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Get Early Access"));
        assert!(screen.contains("Learn More"));
        assert!(screen.contains("HEROIC IMPACT"));
    }

    #[test]
    fn test_wide_terminal_shows_sidebar_and_links() {
        let app = create_app(true);
        let screen = render(&app, 120, 40);
        assert!(screen.contains("3 How It Works"));
        assert!(screen.contains("7 Metadata"));
    }

    #[test]
    fn test_narrow_terminal_hides_sidebar() {
        let app = create_app(true);
        let screen = render(&app, 60, 30);
        assert!(!screen.contains("7 Metadata"));
        assert!(screen.contains("[m] Menu"));
    }

    #[test]
    fn test_nav_menu_overlay() {
        let mut app = create_app(true);
        app.state.nav_menu.toggle();
        let screen = render(&app, 60, 30);
        assert!(screen.contains(" Menu "));
        assert!(screen.contains("› Home"));
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut app = create_app(true);
        app.state.status_message = Some("Clipboard unavailable".to_string());
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Clipboard unavailable"));
    }

    #[test]
    fn test_metadata_lists_json_ld() {
        let mut app = create_app(true);
        app.state.navigate(View::Metadata);
        let screen = render(&app, 120, 60);
        assert!(screen.contains("\"@type\": \"Organization\""));
    }
}
