pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::assembly;

use self::app::{Page, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Both pages rebuild their state from the network on load.
    tui_app.is_loading = true;
    terminal.draw(|frame| layout::render(frame, &tui_app))?;
    load_feed(&mut tui_app, &ctx).await;
    load_photos(&mut tui_app, &ctx).await;
    tui_app.is_loading = false;

    loop {
        let width = terminal.size()?.width;
        tui_app.vault_columns = layout::grid_columns(width);

        terminal.draw(|frame| layout::render(frame, &tui_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                tui_app.clear_status();
                match Action::from(key) {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::MoveLeft => {
                        tui_app.move_left();
                    }
                    Action::MoveRight => {
                        tui_app.move_right();
                    }
                    Action::SwitchPage => {
                        tui_app.page = tui_app.page.next();
                    }
                    Action::ToggleComments => {
                        if tui_app.page == Page::Feed {
                            tui_app.toggle_selected_comments();
                        }
                    }
                    Action::OpenPhoto => {
                        if tui_app.page == Page::Vault {
                            if let Some(photo) = tui_app.selected_photo() {
                                let url = photo.url.clone();
                                if let Err(e) = open::that(&url) {
                                    tui_app.set_status(format!("Failed to open browser: {}", e));
                                } else {
                                    tui_app.set_status(format!("Opened {}", url));
                                }
                            }
                        }
                    }
                    Action::Refresh => {
                        tui_app.is_loading = true;
                        terminal.draw(|frame| layout::render(frame, &tui_app))?;
                        match tui_app.page {
                            Page::Feed => load_feed(&mut tui_app, &ctx).await,
                            Page::Vault => load_photos(&mut tui_app, &ctx).await,
                        }
                        tui_app.is_loading = false;
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Assemble the feed and publish it. A failure of any fetch clears the feed
/// slot; the page then shows the loading placeholder until the next refresh.
async fn load_feed(tui_app: &mut TuiApp, ctx: &AppContext) {
    match assembly::assemble(&ctx.api).await {
        Ok(feed) => tui_app.publish_feed(Some(feed)),
        Err(e) => {
            tracing::error!(error = %e, "feed load failed");
            tui_app.publish_feed(None);
        }
    }
}

async fn load_photos(tui_app: &mut TuiApp, ctx: &AppContext) {
    match ctx.api.photos(ctx.album_id).await {
        Ok(photos) => tui_app.publish_photos(Some(photos)),
        Err(e) => {
            tracing::error!(error = %e, "vault load failed");
            tui_app.publish_photos(None);
        }
    }
}
