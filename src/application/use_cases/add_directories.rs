use std::path::PathBuf;
use thiserror::Error;

use crate::common::error::DirtagError;
use crate::domain::entities::registry::Registry;
use crate::domain::value_objects::resolved_path::ResolvedPath;
use crate::infrastructure::filesystem::config_store::{ConfigStore, ConfigStoreError};

/// ディレクトリ追加関連のエラー
#[derive(Debug, Error)]
pub enum AddDirectoriesError {
    #[error("Config store error: {0}")]
    Store(#[from] ConfigStoreError),
}

impl From<AddDirectoriesError> for DirtagError {
    fn from(error: AddDirectoriesError) -> Self {
        match error {
            AddDirectoriesError::Store(source) => {
                DirtagError::storage_error_with_source("Failed to persist registry", None, source)
            }
        }
    }
}

/// 追加実行の設定
#[derive(Debug, Clone)]
pub struct AddDirectoriesConfig {
    /// 追加するパスのリスト（入力順）
    pub paths: Vec<PathBuf>,

    /// 追加先のタグ
    pub tag: String,
}

impl AddDirectoriesConfig {
    /// 新しいAddDirectoriesConfigインスタンスを作成
    pub fn new(paths: Vec<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            paths,
            tag: tag.into(),
        }
    }
}

/// 入力パス1件ごとの判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// タグ配下に追加された
    Added {
        /// 入力されたままのパス
        path: PathBuf,
        /// 解決済みの登録パス
        resolved: ResolvedPath,
    },

    /// パスが存在しない
    NotFound { path: PathBuf },

    /// ディレクトリではない
    NotADirectory { path: PathBuf },

    /// 既にタグ配下に存在する
    AlreadyPresent { path: PathBuf },
}

impl AddOutcome {
    /// 追加されたかチェック
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// 追加実行全体の結果
#[derive(Debug, Default)]
pub struct AddReport {
    /// 入力順の判定結果
    pub outcomes: Vec<AddOutcome>,

    /// 追加された件数
    pub added_count: usize,
}

impl AddReport {
    /// 判定結果を追加
    fn add_outcome(&mut self, outcome: AddOutcome) {
        if outcome.is_added() {
            self.added_count += 1;
        }
        self.outcomes.push(outcome);
    }

    /// 1件以上追加されたかチェック
    pub fn any_added(&self) -> bool {
        self.added_count > 0
    }
}

/// ディレクトリ追加のユースケース
pub struct AddDirectoriesUseCase {
    /// 設定
    config: AddDirectoriesConfig,
}

impl AddDirectoriesUseCase {
    /// 新しいAddDirectoriesUseCaseインスタンスを作成
    pub fn new(config: AddDirectoriesConfig) -> Self {
        Self { config }
    }

    /// 追加を実行する
    ///
    /// 各入力パスを入力順に検証・解決し、タグ配下へ追記する。
    /// 検証に失敗したパスはレジストリを変更しない。
    /// 設定ファイルへの保存は全パス処理後に1回だけ行う。
    pub fn execute(
        &self,
        registry: &mut Registry,
        store: &ConfigStore,
    ) -> Result<AddReport, AddDirectoriesError> {
        let mut report = AddReport::default();

        for path in &self.config.paths {
            let outcome = self.evaluate(registry, path);
            tracing::debug!(path = %path.display(), ?outcome, "evaluated add candidate");
            report.add_outcome(outcome);
        }

        store.save(registry)?;
        Ok(report)
    }

    /// 1件のパスを検証し、必要ならタグ配下へ追加する
    fn evaluate(&self, registry: &mut Registry, path: &PathBuf) -> AddOutcome {
        if !path.exists() {
            return AddOutcome::NotFound { path: path.clone() };
        }
        if !path.is_dir() {
            return AddOutcome::NotADirectory { path: path.clone() };
        }

        // exists確認後でも、削除レースや権限により解決は失敗しうる
        let resolved = match ResolvedPath::resolve(path) {
            Ok(resolved) => resolved,
            Err(_) => return AddOutcome::NotFound { path: path.clone() },
        };

        let already_present = registry
            .get(&self.config.tag)
            .is_some_and(|dirs| dirs.contains(&resolved));
        if already_present {
            return AddOutcome::AlreadyPresent { path: path.clone() };
        }

        registry.entry(&self.config.tag).insert(resolved.clone());
        AddOutcome::Added {
            path: path.clone(),
            resolved,
        }
    }
}
