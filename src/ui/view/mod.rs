//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::state::App;
use crate::models::{FACTS, QUOTES};
use components::{render_entertainment, render_stack};
use layouts::centered_rect;

pub const HEADER_TEXT: &str = "Welcome to My First Vibrant Terminal App!";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.styles.background), area);

    if app.splash.is_visible() {
        render_splash(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 标题
            Constraint::Min(10),   // 导航栈 + 娱乐区块
            Constraint::Length(1), // 状态栏
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let content_dim = if app.content_anim.is_dimmed() {
        Modifier::DIM
    } else {
        Modifier::empty()
    };
    let content = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([Constraint::Min(4), Constraint::Length(9)])
        .split(chunks[1]);

    render_stack(frame, content[0], &app.stack, &app.styles.nav, content_dim);
    render_entertainment(
        frame,
        content[1],
        [(&QUOTES, &app.quote), (&FACTS, &app.fact)],
        &app.styles,
        content_dim,
    );

    render_status_bar(frame, app, chunks[2]);
}

fn render_splash(frame: &mut Frame, app: &App, area: Rect) {
    let rect = centered_rect(50, 30, area);
    let splash = Paragraph::new(vec![
        Line::from("vibrant").style(app.styles.header_text),
        Line::from(""),
        Line::from("loading...").style(app.styles.section_text),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(splash, rect);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let anim = &app.header_anim;
    if anim.is_hidden() {
        return;
    }

    let mut style = app.styles.header_text;
    if anim.is_dimmed() {
        style = style.add_modifier(Modifier::DIM);
    }

    let width = (HEADER_TEXT.len() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1,
        width,
        height: area.height.saturating_sub(2).min(3),
    };

    let header = Paragraph::new(HEADER_TEXT)
        .alignment(Alignment::Center)
        .scroll((0, anim.slide_offset(width)))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(header, rect);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.stack.can_go_back() {
        "[b/Esc] 返回  [r] 刷新  [q] 退出"
    } else {
        "[Tab/h/l] 切换标签  [?] 未知页面  [r] 刷新  [q] 退出"
    };

    let text = match app.message.as_deref() {
        Some(message) => format!("{}  |  {}", help_text, message),
        None => help_text.to_string(),
    };

    let status = Paragraph::new(text).style(app.styles.status_bar);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::RngSource;
    use crate::splash::SplashScreen;
    use crate::theme::{ColorScheme, palette};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app(scheme: ColorScheme) -> App {
        App::new(
            scheme,
            SplashScreen::prevent_auto_hide(),
            Box::new(RngSource::seeded(11)),
            false,
        )
    }

    fn draw(app: &App) -> (String, ratatui::buffer::Buffer) {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        (content, buffer)
    }

    #[test]
    fn test_splash_shown_before_mount() {
        let app = test_app(ColorScheme::Light);
        let (content, _) = draw(&app);
        assert!(content.contains("loading..."));
        assert!(!content.contains(HEADER_TEXT));
    }

    #[test]
    fn test_mounted_screen_shows_header_and_selections() {
        let mut app = test_app(ColorScheme::Light);
        app.on_first_paint();
        let (content, _) = draw(&app);

        assert!(content.contains(HEADER_TEXT));
        assert!(content.contains("Quote of the Day:"));
        assert!(content.contains("Did You Know?"));
        assert!(content.contains(app.quote.as_str()));
        assert!(content.contains(app.fact.as_str()));
        assert!(content.contains("Home"));
    }

    #[test]
    fn test_background_follows_color_scheme() {
        for (scheme, expected) in [
            (ColorScheme::Light, palette::CORAL),
            (ColorScheme::Dark, palette::CHARCOAL),
        ] {
            let mut app = test_app(scheme);
            app.on_first_paint();
            let (_, buffer) = draw(&app);
            assert_eq!(buffer[(0, 0)].bg, expected);
        }
    }

    #[test]
    fn test_not_found_route_renders_header() {
        let mut app = test_app(ColorScheme::Dark);
        app.on_first_paint();
        app.dispatch(Action::OpenMissingRoute);
        let (content, _) = draw(&app);

        assert!(content.contains("Oops!"));
        assert!(content.contains("This screen doesn't exist."));
    }

    #[test]
    fn test_remounted_screen_renders_empty_selection() {
        let mut app = test_app(ColorScheme::Dark);
        app.on_first_paint();
        let quote = app.quote.as_str();
        app.dispatch(Action::Remount);
        let (content, _) = draw(&app);

        assert!(content.contains("Quote of the Day:"));
        assert!(!content.contains(quote));
    }
}
