//! テスト用フィクスチャ
//!
//! 一時ディレクトリ上に設定ファイルと登録対象ディレクトリを
//! 用意するヘルパーを提供する。

use std::path::PathBuf;
use tempfile::TempDir;

use dirtag::application::use_cases::add_directories::{
    AddDirectoriesConfig, AddDirectoriesUseCase,
};
use dirtag::domain::entities::registry::Registry;
use dirtag::infrastructure::filesystem::config_store::ConfigStore;

/// 一時領域に構築されたテスト用ワークスペース
pub struct TestWorkspace {
    /// 一時ディレクトリ（drop時に削除される）
    pub temp_dir: TempDir,

    /// 一時領域内の設定ファイルを指すストア
    pub store: ConfigStore,
}

impl TestWorkspace {
    /// 新しいTestWorkspaceを作成
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let store = ConfigStore::new(temp_dir.path().join("config.toml"));
        Self { temp_dir, store }
    }

    /// 設定ファイルのパス
    pub fn config_path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    /// 一時領域内にディレクトリを作成して返す
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let dir = self.temp_dir.path().join(name);
        std::fs::create_dir_all(&dir).expect("failed to create directory");
        dir
    }

    /// 指定ディレクトリ群をタグ配下に登録した状態を作る
    pub fn seed_tag(&self, tag: &str, names: &[&str]) -> Vec<PathBuf> {
        let dirs: Vec<PathBuf> = names.iter().map(|name| self.create_dir(name)).collect();
        let mut registry = self.store.load().expect("failed to load registry");
        let config = AddDirectoriesConfig::new(dirs.clone(), tag);
        AddDirectoriesUseCase::new(config)
            .execute(&mut registry, &self.store)
            .expect("failed to seed tag");
        dirs
    }

    /// 保存済みレジストリを読み直す
    pub fn reload(&self) -> Registry {
        self.store.load().expect("failed to load registry")
    }
}
