use std::collections::BTreeSet;

use colored::Colorize;
use thiserror::Error;

use crate::domain::entities::registry::Registry;
use crate::domain::value_objects::resolved_path::ResolvedPath;
use crate::infrastructure::process::command_executor::{
    CommandExecutor, CommandExecutorError, CommandLine, ExecutionOutcome,
};

/// コマンド実行関連のエラー
#[derive(Debug, Error)]
pub enum RunCommandError {
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error(transparent)]
    InvalidCommand(#[from] CommandExecutorError),

    #[error("Confirmation prompt failed: {0}")]
    PromptFailed(#[source] dialoguer::Error),
}

/// 実行の設定
#[derive(Debug, Clone)]
pub struct RunCommandConfig {
    /// 実行するコマンド文字列（空白区切りで分割される）
    pub command: String,

    /// 対象タグ
    pub tag: String,

    /// スキップするディレクトリの1始まり位置
    pub skip_indices: BTreeSet<usize>,

    /// 確認プロンプトを省略するか
    pub auto_confirm: bool,
}

impl RunCommandConfig {
    /// 新しいRunCommandConfigインスタンスを作成
    pub fn new(command: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            tag: tag.into(),
            skip_indices: BTreeSet::new(),
            auto_confirm: false,
        }
    }

    /// スキップ位置を設定
    pub fn with_skip_indices(mut self, skip_indices: BTreeSet<usize>) -> Self {
        self.skip_indices = skip_indices;
        self
    }

    /// 確認プロンプトの省略フラグを設定
    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }
}

/// ディレクトリ1件ごとの終了状態
///
/// 各ディレクトリは Pending から Skipped / Declined / Executed の
/// いずれかの終了状態に遷移する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOutcome {
    /// スキップ指定により対象外（プロンプトも実行も行わない）
    Skipped,

    /// 確認プロンプトで拒否された
    Declined,

    /// コマンドを実行した（終了コードに関わらずExecuted）
    Executed {
        /// 終了コード0で完了したか
        success: bool,
        /// 終了コード（シグナル終了・起動失敗時はNone）
        exit_code: Option<i32>,
    },
}

/// ディレクトリ1件ごとの実行記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// 格納列内の1始まり位置
    pub index: usize,

    /// 対象ディレクトリ
    pub path: ResolvedPath,

    /// 終了状態
    pub outcome: DirectoryOutcome,
}

/// 実行全体の結果
#[derive(Debug, Default)]
pub struct RunReport {
    /// 格納順の実行記録
    pub records: Vec<RunRecord>,

    /// 実行されたディレクトリ数
    pub executed_count: usize,

    /// スキップされたディレクトリ数
    pub skipped_count: usize,

    /// 拒否されたディレクトリ数
    pub declined_count: usize,

    /// 実行されたうち失敗（非ゼロ終了・起動失敗）の数
    pub failure_count: usize,
}

impl RunReport {
    /// 実行記録を追加
    fn add_record(&mut self, record: RunRecord) {
        match record.outcome {
            DirectoryOutcome::Skipped => self.skipped_count += 1,
            DirectoryOutcome::Declined => self.declined_count += 1,
            DirectoryOutcome::Executed { success, .. } => {
                self.executed_count += 1;
                if !success {
                    self.failure_count += 1;
                }
            }
        }
        self.records.push(record);
    }

    /// 合計ディレクトリ数
    pub fn total_count(&self) -> usize {
        self.records.len()
    }
}

/// タグ配下の全ディレクトリでコマンドを順次実行するユースケース
///
/// ディレクトリごとに表示・確認・実行を行い、失敗しても最後まで
/// ループを継続する。並列実行は行わない。
pub struct RunCommandUseCase {
    /// 設定
    config: RunCommandConfig,

    /// 子プロセス実行器
    executor: CommandExecutor,
}

impl RunCommandUseCase {
    /// 新しいRunCommandUseCaseインスタンスを作成
    pub fn new(config: RunCommandConfig) -> Self {
        Self {
            config,
            executor: CommandExecutor::new(),
        }
    }

    /// 実行する
    ///
    /// タグが存在しない場合は何も処理せずエラーを返す。
    /// タグは存在するが空の場合は、プロンプトなしで即座に完了する。
    pub fn execute(&self, registry: &Registry) -> Result<RunReport, RunCommandError> {
        let command = CommandLine::parse(&self.config.command)?;
        let dirs = registry
            .get(&self.config.tag)
            .ok_or_else(|| RunCommandError::UnknownTag(self.config.tag.clone()))?;

        let mut report = RunReport::default();
        for (position, dir) in dirs.iter().enumerate() {
            let index = position + 1;
            let outcome = self.process_directory(index, dir, &command)?;
            report.add_record(RunRecord {
                index,
                path: dir.clone(),
                outcome,
            });
        }

        tracing::debug!(
            tag = %self.config.tag,
            executed = report.executed_count,
            skipped = report.skipped_count,
            declined = report.declined_count,
            "run completed"
        );
        Ok(report)
    }

    /// 1件のディレクトリを処理する
    fn process_directory(
        &self,
        index: usize,
        dir: &ResolvedPath,
        command: &CommandLine,
    ) -> Result<DirectoryOutcome, RunCommandError> {
        if self.config.skip_indices.contains(&index) {
            println!("{}", format!("{}: {}", index, dir).dimmed());
            println!("{}", "  Skipped.".dimmed());
            return Ok(DirectoryOutcome::Skipped);
        }

        println!("{}: {}", index, dir);

        if !self.config.auto_confirm && !self.confirm()? {
            return Ok(DirectoryOutcome::Declined);
        }

        match self.executor.execute(command, dir.as_ref()) {
            ExecutionOutcome::Completed { exit_code } => {
                let success = exit_code == Some(0);
                if !success {
                    let shown = exit_code
                        .map(|code| code.to_string())
                        .unwrap_or_else(|| "signal".to_string());
                    println!(
                        "{}",
                        format!("  Command exited with status {}.", shown).red()
                    );
                }
                Ok(DirectoryOutcome::Executed { success, exit_code })
            }
            ExecutionOutcome::SpawnFailed { error } => {
                println!("{}", format!("  Failed to start command: {}", error).red());
                Ok(DirectoryOutcome::Executed {
                    success: false,
                    exit_code: None,
                })
            }
        }
    }

    /// 実行前の確認プロンプト（空入力は実行する側に倒す）
    fn confirm(&self) -> Result<bool, RunCommandError> {
        dialoguer::Confirm::new()
            .with_prompt(format!(
                "Run the following command?\n  $ {}",
                self.config.command
            ))
            .default(true)
            .interact()
            .map_err(RunCommandError::PromptFailed)
    }
}
