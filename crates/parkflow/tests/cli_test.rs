#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("parkflow").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("shell"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("--capacity"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("parkflow").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parkflow"));
}

/// 不正なコマンドでエラーになることを確認
#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("parkflow").unwrap();
    cmd.arg("invalid-command").assert().failure();
}

/// 0 スポットの指定は引数エラーになることを確認
#[test]
fn test_zero_capacity_rejected() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["--capacity", "0", "config"])
        .assert()
        .failure();
}

/// 上限を超えるスポット数の指定は引数エラーになることを確認
#[test]
fn test_capacity_above_limit_rejected() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["--capacity", "1001", "config"])
        .assert()
        .failure();

    project
        .parkflow()
        .args(["--capacity", "1000", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("スポット数: 1000"));
}

/// 巨大な capacity を書いた設定ファイルはエラーになることを確認
#[test]
fn test_config_capacity_above_limit() {
    let project = TestProject::new();
    project.write_parking_kdl("capacity 1000000000000000000");

    project
        .parkflow()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));
}

/// 設定ファイルがなければ既定値が使われることを確認
#[test]
fn test_config_defaults() {
    let project = TestProject::new();
    project
        .parkflow()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("既定値"))
        .stdout(predicate::str::contains("スポット数: 20"))
        .stdout(predicate::str::contains("5.00"))
        .stdout(predicate::str::contains("3.00"))
        .stdout(predicate::str::contains("8.00"));
}

/// カレントディレクトリの parking.kdl が読み込まれることを確認
#[test]
fn test_config_from_project_file() {
    let project = TestProject::new();
    project.write_parking_kdl(
        r#"
lot "East Garage"
capacity 6
fees {
    truck 12.50
}
"#,
    );

    project
        .parkflow()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("parking.kdl"))
        .stdout(predicate::str::contains("East Garage"))
        .stdout(predicate::str::contains("スポット数: 6"))
        .stdout(predicate::str::contains("12.50"));
}

/// --capacity が設定ファイルより優先されることを確認
#[test]
fn test_capacity_override() {
    let project = TestProject::new();
    project.write_parking_kdl("capacity 6");

    project
        .parkflow()
        .args(["--capacity", "3", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("スポット数: 3"));
}

/// 壊れた設定ファイルはエラーになることを確認
#[test]
fn test_invalid_config_file() {
    let project = TestProject::new();
    project.write_parking_kdl("capacity 0");

    project
        .parkflow()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));
}

/// --config で指定したファイルが存在しなければエラーになることを確認
#[test]
fn test_missing_explicit_config() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["--config", "nowhere.kdl", "config"])
        .assert()
        .failure();
}

/// シェルで駐車・出庫できることを確認
#[test]
fn test_shell_park_and_remove() {
    let project = TestProject::new();
    project
        .parkflow()
        .arg("shell")
        .write_stdin("park AB12 car\npark XY9 motorcycle\nremove AB12\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "車両 AB12 をスポット 1 に駐車しました (Car, 料金 $5.00)",
        ))
        .stdout(predicate::str::contains(
            "車両 XY9 をスポット 2 に駐車しました (Motorcycle, 料金 $3.00)",
        ))
        .stdout(predicate::str::contains("車両 AB12 をスポット 1 から出庫しました"));
}

/// サブコマンド省略時はシェルとして動作することを確認
#[test]
fn test_default_command_is_shell() {
    let project = TestProject::new();
    project
        .parkflow()
        .write_stdin("park T100 truck\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("料金 $8.00"));
}

/// シェルのエラーは stderr に出て、処理は継続することを確認
#[test]
fn test_shell_errors_do_not_abort() {
    let project = TestProject::new();
    project
        .parkflow()
        .arg("shell")
        .write_stdin("park a car\npark !! car\npark AB12 bus\nremove ZZ99\npark ab car\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("2文字以上の英数字"))
        .stderr(predicate::str::contains("不明な車種"))
        .stderr(predicate::str::contains("ZZ99"))
        .stdout(predicate::str::contains("車両 ab をスポット 1 に駐車しました"));
}

/// 満車時に NoCapacity が報告されることを確認
#[test]
fn test_shell_lot_full() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["--capacity", "2", "shell"])
        .write_stdin("park AA car\npark BB car\npark CC car\nstatus\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("空いている駐車スポットがありません"))
        .stdout(predicate::str::contains("使用中: 2/2"));
}

/// list --json がスポットのスナップショットを出力することを確認
#[test]
fn test_shell_list_json() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["--capacity", "2", "shell"])
        .write_stdin("park AB12 car\nlist --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vehicle_id\": \"AB12\""))
        .stdout(predicate::str::contains("\"occupied\": false"));
}

/// スクリプトを実行し、成功・失敗件数が表示されることを確認
#[test]
fn test_run_script() {
    let project = TestProject::new();
    let script = project.write_script(
        "morning.txt",
        "# 朝の入庫\npark AB12 car\npark AB12 car\n\nfind AB12\nfees\n",
    );

    project
        .parkflow()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("車両 AB12 はスポット 1 に駐車中です"))
        .stdout(predicate::str::contains("3 件成功, 1 件失敗"))
        .stderr(predicate::str::contains("3行目"));
}

/// --strict では最初のエラーで失敗終了することを確認
#[test]
fn test_run_script_strict() {
    let project = TestProject::new();
    let script = project.write_script("strict.txt", "park AB12 car\nremove ZZ99\npark CD34 car\n");

    project
        .parkflow()
        .arg("run")
        .arg(&script)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("2行目"))
        .stdout(predicate::str::contains("CD34").not());
}

/// 存在しないスクリプトはエラーになることを確認
#[test]
fn test_run_missing_script() {
    let project = TestProject::new();
    project
        .parkflow()
        .args(["run", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}
