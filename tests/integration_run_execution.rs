//! バッチ実行の統合テスト
//!
//! スキップ指定と順次実行の副作用（各ディレクトリでの
//! 子プロセス起動）をファイルシステム上で検証する

mod common;

use common::test_fixtures::TestWorkspace;
use std::collections::BTreeSet;

use dirtag::application::use_cases::run_command::{
    DirectoryOutcome, RunCommandConfig, RunCommandError, RunCommandUseCase,
};

#[test]
fn test_skip_first_and_third_executes_only_second() {
    let workspace = TestWorkspace::new();
    let dirs = workspace.seed_tag("default", &["a", "b", "c"]);
    let registry = workspace.reload();

    // スキップ指定 {1, 3} で実行
    let config = RunCommandConfig::new("touch ran.txt", "default")
        .with_skip_indices(BTreeSet::from([1, 3]))
        .with_auto_confirm(true);
    let report = RunCommandUseCase::new(config).execute(&registry).unwrap();

    // 2番目のディレクトリでのみ子プロセスが起動される
    assert!(!dirs[0].join("ran.txt").exists());
    assert!(dirs[1].join("ran.txt").exists());
    assert!(!dirs[2].join("ran.txt").exists());

    assert_eq!(report.skipped_count, 2);
    assert_eq!(report.executed_count, 1);
    assert_eq!(report.records[0].outcome, DirectoryOutcome::Skipped);
    assert_eq!(report.records[2].outcome, DirectoryOutcome::Skipped);
}

#[test]
fn test_all_directories_execute_in_stored_order() {
    let workspace = TestWorkspace::new();
    let dirs = workspace.seed_tag("default", &["first", "second"]);
    let registry = workspace.reload();

    let config = RunCommandConfig::new("touch done.txt", "default").with_auto_confirm(true);
    let report = RunCommandUseCase::new(config).execute(&registry).unwrap();

    assert_eq!(report.executed_count, 2);
    assert!(dirs.iter().all(|d| d.join("done.txt").exists()));

    // 記録は格納順（1始まり）
    let indices: Vec<usize> = report.records.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_unknown_tag_processes_nothing() {
    let workspace = TestWorkspace::new();
    let dirs = workspace.seed_tag("web", &["site"]);
    let registry = workspace.reload();

    let config = RunCommandConfig::new("touch ran.txt", "missing").with_auto_confirm(true);
    let result = RunCommandUseCase::new(config).execute(&registry);

    assert!(matches!(result, Err(RunCommandError::UnknownTag(_))));
    assert!(!dirs[0].join("ran.txt").exists());
}

#[test]
fn test_failing_command_does_not_stop_later_directories() {
    let workspace = TestWorkspace::new();
    let dirs = workspace.seed_tag("default", &["x", "y"]);

    // 1番目のディレクトリにだけ衝突するファイルを置き、
    // mkdir subdir を失敗させる
    std::fs::write(dirs[0].join("subdir"), "collision").unwrap();
    let registry = workspace.reload();

    let config = RunCommandConfig::new("mkdir subdir", "default").with_auto_confirm(true);
    let report = RunCommandUseCase::new(config).execute(&registry).unwrap();

    assert_eq!(report.executed_count, 2);
    assert_eq!(report.failure_count, 1);
    assert!(dirs[1].join("subdir").is_dir());
}
