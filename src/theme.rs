//! 主题：配色方案与样式映射
//!
//! 半透明叠加色已预先混合到各自的背景色上

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// 宿主环境提供的配色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// 配置文件中的主题偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// 解析为具体配色；`System` 交给宿主检测
    pub fn resolve(self) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => {
                detect_color_scheme(std::env::var("COLORFGBG").ok().as_deref())
            }
        }
    }
}

/// 根据 `COLORFGBG`（形如 "15;0"）判断终端背景，无法判断时默认为浅色
pub fn detect_color_scheme(colorfgbg: Option<&str>) -> ColorScheme {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

pub mod palette {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const CORAL: Color = Color::Rgb(255, 126, 95); // #ff7e5f
    pub const CHARCOAL: Color = Color::Rgb(51, 51, 51); // #333

    // rgba(0,0,0,0.3) 叠加在 CORAL 上
    pub const HEADER_BG_LIGHT: Color = Color::Rgb(179, 88, 66);
    // rgba(255,255,255,0.2) 叠加在 CHARCOAL 上
    pub const HEADER_BG_DARK: Color = Color::Rgb(92, 92, 92);

    // rgba(255,255,255,0.1)
    pub const SECTION_BG_LIGHT: Color = Color::Rgb(255, 139, 111);
    pub const SECTION_BG_DARK: Color = Color::Rgb(71, 71, 71);

    pub const STATUS_LIGHT_CONTENT: Color = WHITE;
    pub const STATUS_DARK_CONTENT: Color = Color::Rgb(0, 0, 0);

    // 导航栈默认主题
    pub const NAV_LIGHT_PRIMARY: Color = Color::Rgb(0, 122, 255);
    pub const NAV_LIGHT_BACKGROUND: Color = Color::Rgb(242, 242, 242);
    pub const NAV_LIGHT_CARD: Color = Color::Rgb(255, 255, 255);
    pub const NAV_LIGHT_TEXT: Color = Color::Rgb(28, 28, 30);
    pub const NAV_LIGHT_BORDER: Color = Color::Rgb(216, 216, 216);

    // 导航栈暗色主题
    pub const NAV_DARK_PRIMARY: Color = Color::Rgb(10, 132, 255);
    pub const NAV_DARK_BACKGROUND: Color = Color::Rgb(1, 1, 1);
    pub const NAV_DARK_CARD: Color = Color::Rgb(18, 18, 18);
    pub const NAV_DARK_TEXT: Color = Color::Rgb(229, 229, 231);
    pub const NAV_DARK_BORDER: Color = Color::Rgb(39, 39, 41);
}

/// 导航栈使用的主题色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTheme {
    pub primary: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub border: Color,
}

/// 一套完整的屏幕样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    pub background: Style,
    pub header_text: Style,
    pub section: Style,
    pub section_title: Style,
    pub section_text: Style,
    pub status_bar: Style,
    pub nav: NavTheme,
}

/// 配色方案 -> 样式
pub fn style_for(scheme: ColorScheme) -> StyleSet {
    let (background, header_text, section_bg, status_fg, nav) = match scheme {
        ColorScheme::Light => (
            palette::CORAL,
            Style::default().fg(palette::WHITE).bg(palette::HEADER_BG_LIGHT),
            palette::SECTION_BG_LIGHT,
            palette::STATUS_DARK_CONTENT,
            NavTheme {
                primary: palette::NAV_LIGHT_PRIMARY,
                background: palette::NAV_LIGHT_BACKGROUND,
                card: palette::NAV_LIGHT_CARD,
                text: palette::NAV_LIGHT_TEXT,
                border: palette::NAV_LIGHT_BORDER,
            },
        ),
        ColorScheme::Dark => (
            palette::CHARCOAL,
            Style::default().fg(palette::CORAL).bg(palette::HEADER_BG_DARK),
            palette::SECTION_BG_DARK,
            palette::STATUS_LIGHT_CONTENT,
            NavTheme {
                primary: palette::NAV_DARK_PRIMARY,
                background: palette::NAV_DARK_BACKGROUND,
                card: palette::NAV_DARK_CARD,
                text: palette::NAV_DARK_TEXT,
                border: palette::NAV_DARK_BORDER,
            },
        ),
    };

    StyleSet {
        background: Style::default().bg(background),
        header_text: header_text.add_modifier(Modifier::BOLD),
        section: Style::default().bg(section_bg),
        section_title: Style::default()
            .fg(palette::WHITE)
            .add_modifier(Modifier::BOLD),
        section_text: Style::default().fg(palette::WHITE),
        status_bar: Style::default().fg(status_fg).bg(background),
        nav,
    }
}
