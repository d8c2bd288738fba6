use colored::Colorize;
use parkflow_core::LotSettings;
use std::path::Path;

/// 解決済みの設定を表示
pub fn handle(settings: &LotSettings, source: Option<&Path>) {
    match source {
        Some(path) => println!("📄 設定ファイル: {}", path.display().to_string().cyan()),
        None => println!("📄 設定ファイル: {}", "(なし、既定値を使用)".dimmed()),
    }
    println!("  駐車場名: {}", settings.name);
    println!("  スポット数: {}", settings.capacity);
    println!("  料金:");
    for (category, fee) in settings.fees.entries() {
        println!("    {:<12} ${}", category.label(), fee);
    }
}
