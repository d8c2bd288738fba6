//! シェル・スクリプト実行用の出力整形

use crate::session::{HELP_TEXT, Outcome};
use colored::Colorize;
use parkflow_core::SpotView;

/// 実行結果を標準出力に表示
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Parked(_) | Outcome::Removed(_) => {
            println!("{} {}", "✓".green(), outcome.summary());
        }
        Outcome::Found { spot: Some(spot), .. } => {
            println!("{}", outcome.summary());
            if let (Some(category), Some(fee)) = (spot.category, spot.fee) {
                println!("  {} (${})", category, fee);
            }
        }
        Outcome::Found { spot: None, .. } => {
            println!("{}", outcome.summary().dimmed());
        }
        Outcome::Spots(spots) => print_spots(spots),
        Outcome::Json(json) => println!("{}", json),
        Outcome::Status { lot, occupancy } => {
            println!("駐車場: {}", lot.cyan());
            println!(
                "  使用中: {}/{}  空き: {}",
                occupancy.occupied, occupancy.capacity, occupancy.free
            );
            println!("  駐車中の料金合計: ${}", occupancy.pending_fees);
        }
        Outcome::Fees(fees) => {
            println!("{}", "料金表".bold());
            for (category, fee) in fees {
                println!("  {:<12} ${}", category.label(), fee);
            }
        }
        Outcome::Help => println!("{}", HELP_TEXT),
        Outcome::Quit => {}
    }
}

/// スポット一覧を表形式で表示
pub fn print_spots(spots: &[SpotView]) {
    println!(
        "{}",
        format!(
            "{:<6} {:<8} {:<12} {:<12} {:>8}",
            "SPOT", "STATUS", "VEHICLE", "CATEGORY", "FEE"
        )
        .bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    for spot in spots {
        let status = if spot.occupied {
            format!("{:<8}", "使用中").red()
        } else {
            format!("{:<8}", "空き").green()
        };
        let vehicle = spot
            .vehicle_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let category = spot.category.map(|c| c.label()).unwrap_or("-");
        let fee = spot
            .fee
            .map(|f| format!("${}", f))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<6} {} {:<12} {:<12} {:>8}",
            spot.number,
            status,
            vehicle.cyan(),
            category,
            fee
        );
    }
}
