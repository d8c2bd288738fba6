mod commands;
mod render;
mod session;
mod tui;

use clap::{Parser, Subcommand};
use colored::Colorize;
use parkflow_core::{AllocationService, MAX_CAPACITY};
use session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parkflow")]
#[command(about = "停める。出す。20台の駐車場を、ターミナルから。", long_about = None)]
struct Cli {
    /// 設定ファイル (parking.kdl) のパス
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// スポット数を上書き (1〜1000)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..=MAX_CAPACITY as i64)
    )]
    capacity: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 対話シェルを起動（標準入力からコマンドを読む）
    Shell,
    /// コマンドスクリプトを実行
    Run {
        /// スクリプトファイル
        script: PathBuf,
        /// 最初のエラーで中断する
        #[arg(long)]
        strict: bool,
    },
    /// 駐車場グリッドを全画面表示
    Tui,
    /// 解決済みの設定を表示
    Config,
    /// バージョン情報を表示
    Version,
}

fn init_tracing(command: &Option<Commands>) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();

    // TUIは画面を占有するので、ログはファイルに出力
    if matches!(command, Some(Commands::Tui)) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(std::env::temp_dir().join("parkflow-tui.log"))
            .ok();

        if let Some(file) = log_file {
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_env_filter(filter)
                .with_ansi(false)
                .init();
        }
        return;
    }

    // 通常のコマンドはstderrにログ出力
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.command);

    // Versionコマンドは設定ファイル不要
    if matches!(cli.command, Some(Commands::Version)) {
        println!("parkflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (mut settings, source) = parkflow_config::load_settings(cli.config.as_deref())?;
    if let Some(capacity) = cli.capacity {
        settings.capacity = capacity as usize;
    }
    tracing::debug!(?source, capacity = settings.capacity, "Settings resolved");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let session = Session::new(AllocationService::new(settings));
            commands::shell::handle(session)?;
        }
        Commands::Run { script, strict } => {
            let session = Session::new(AllocationService::new(settings));
            commands::run::handle(session, &script, strict)?;
        }
        Commands::Tui => {
            let session = Session::new(AllocationService::new(settings));
            if let Err(e) = tui::run_lot_view(session) {
                eprintln!("{} {}", "✗ TUIエラー:".red().bold(), e);
                return Err(e.into());
            }
        }
        Commands::Config => {
            commands::config::handle(&settings, source.as_deref());
        }
        Commands::Version => {
            unreachable!("Version is handled before config loading");
        }
    }

    Ok(())
}
