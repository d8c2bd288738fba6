//! ターミナルの初期化と復元

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// rawモードと代替スクリーンに切り替える
///
/// 途中で失敗した場合はrawモードを解除してからエラーを返す。
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(), disable_raw_mode)
}

fn enter_alternate_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn undo_on_error<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err()
        && let Err(e) = undo()
    {
        tracing::warn!(error = %e, "Failed to restore terminal mode");
    }
    result
}

/// 元の画面に戻す
pub fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
