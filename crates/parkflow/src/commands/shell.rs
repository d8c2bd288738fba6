use crate::render;
use crate::session::{Outcome, Session};
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};

/// 標準入力から1行ずつコマンドを読み、実行する
pub fn handle(mut session: Session) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!(
            "{} {} ({} スポット)",
            "駐車場".bold(),
            session.service().name().cyan(),
            session.service().capacity()
        );
        println!("{}", "help でコマンド一覧、quit で終了".dimmed());
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", "parkflow>".blue());
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match session.execute_line(&line) {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(outcome)) => render::print_outcome(&outcome),
            Ok(None) => {}
            Err(e) if e.is_fatal() => {
                eprintln!("{} {}", "✗ システムエラー:".red().bold(), e);
            }
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
            }
        }
    }

    Ok(())
}
