mod config;
mod error;
mod logging;
mod models;
mod picker;
mod splash;
mod theme;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Config, config_path, load_config};
use crate::error::{Error, Result};
use crate::picker::RngSource;
use crate::splash::SplashScreen;
use crate::ui::{Action, App, render};

/// 终端在 panic 时也要恢复
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    logging::init()?;

    // 启动画面在首帧绘制后的挂载钩子中隐藏
    let splash = SplashScreen::prevent_auto_hide();

    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };
    let scheme = config.theme.resolve();
    tracing::info!("配色方案: {:?}, 配置: {:?}", scheme, config);

    // 创建应用状态
    let mut app = App::new(
        scheme,
        splash,
        Box::new(RngSource::thread()),
        config.animations,
    );

    // 设置终端
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &config);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("主循环异常退出: {}", e);
    }
    tracing::info!("vibrant 退出, 共挂载 {} 次", app.mount_count);

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    loop {
        terminal
            .draw(|f| render(f, app))
            .map_err(|e| Error::Terminal(e.to_string()))?;

        // 首帧绘制之后挂载
        app.on_first_paint();

        let quit = if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ui::handle_key_event(app, key.code)
                }
                _ => false,
            }
        } else {
            app.dispatch(Action::Tick)
        };

        if quit {
            break;
        }
    }
    Ok(())
}
