//! 通用 UI 组件
//!
//! 导航栈页面、娱乐区块等组件

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs, Wrap},
};

use crate::models::{ContentList, Selection};
use crate::theme::{NavTheme, StyleSet};
use crate::ui::navigation::{Route, Stack, Tab};

/// [组件] 导航栈当前页面
pub fn render_stack(
    frame: &mut Frame,
    area: Rect,
    stack: &Stack,
    nav: &NavTheme,
    dim: Modifier,
) {
    let route = stack.current();
    let options = route.options();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(nav.border))
        .style(Style::default().bg(nav.card).fg(nav.text).add_modifier(dim));
    if options.header_shown {
        block = block.title(
            Line::from(options.title).style(Style::default().fg(nav.primary)),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match route {
        Route::Tabs => render_tabs_screen(frame, inner, stack.tab, nav),
        Route::NotFound => {
            let body = Paragraph::new(vec![
                Line::from("This screen doesn't exist."),
                Line::from(""),
                Line::from("Press [b] to go to home screen!")
                    .style(Style::default().fg(nav.primary)),
            ])
            .wrap(Wrap { trim: true });
            frame.render_widget(body, inner);
        }
    }
}

fn render_tabs_screen(frame: &mut Frame, area: Rect, tab: Tab, nav: &NavTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.label()))
        .select(tab.index())
        .style(Style::default().bg(nav.background))
        .highlight_style(
            Style::default()
                .fg(nav.primary)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let body = Paragraph::new(tab.body()).wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[1]);
}

/// [组件] 名言 + 冷知识区块
pub fn render_entertainment(
    frame: &mut Frame,
    area: Rect,
    entries: [(&ContentList, &Selection); 2],
    styles: &StyleSet,
    dim: Modifier,
) {
    let mut lines = Vec::new();
    for (list, selection) in entries {
        lines.push(Line::from(list.title).style(styles.section_title));
        lines.push(Line::from(selection.as_str()).style(styles.section_text));
        lines.push(Line::from(""));
    }

    let section = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .style(styles.section.add_modifier(dim))
        .block(Block::default().padding(Padding::uniform(1)));
    frame.render_widget(section, area);
}
