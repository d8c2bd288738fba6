use crate::render;
use crate::session::{Outcome, Session};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// コマンドスクリプトを先頭から実行する
///
/// `strict` の場合は最初のエラーで中断する。内部整合性エラーは常に中断。
pub fn handle(mut session: Session, script: &Path, strict: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(script)
        .with_context(|| format!("スクリプトを読み込めません: {}", script.display()))?;

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        match session.execute_line(line) {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(outcome)) => {
                render::print_outcome(&outcome);
                succeeded += 1;
            }
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                eprintln!("{} {}行目: {}", "✗".red(), line_no, e);
                if strict || e.is_fatal() {
                    return Err(anyhow::anyhow!(
                        "{}行目で中断しました: {}",
                        line_no,
                        line.trim()
                    ));
                }
            }
        }
    }

    println!();
    println!(
        "{} 件成功, {} 件失敗",
        succeeded.to_string().green(),
        failed.to_string().red()
    );
    Ok(())
}
