use std::collections::BTreeSet;

use crate::domain::entities::registry::{DirectoryList, Registry};
use crate::domain::value_objects::resolved_path::ResolvedPath;

/// 一覧表示の設定
#[derive(Debug, Clone)]
pub struct ListDirectoriesConfig {
    /// 対象タグ
    pub tag: String,

    /// 全タグを対象にするか
    pub all_tags: bool,
}

impl ListDirectoriesConfig {
    /// 新しいListDirectoriesConfigインスタンスを作成
    pub fn new(tag: impl Into<String>, all_tags: bool) -> Self {
        Self {
            tag: tag.into(),
            all_tags,
        }
    }
}

/// 選択された1タグ分の一覧
#[derive(Debug)]
pub struct TagListing<'a> {
    /// タグ名
    pub tag: &'a str,

    /// タグ配下のディレクトリ列（格納順）
    pub directories: &'a DirectoryList,
}

/// 登録ディレクトリ一覧取得のユースケース
pub struct ListDirectoriesUseCase {
    /// 設定
    config: ListDirectoriesConfig,
}

impl ListDirectoriesUseCase {
    /// 新しいListDirectoriesUseCaseインスタンスを作成
    pub fn new(config: ListDirectoriesConfig) -> Self {
        Self { config }
    }

    /// 選択されたタグの(タグ, ディレクトリ列)を反復順で返す
    ///
    /// all_tagsがfalseの場合は対象タグのみ。タグが存在しなければ空。
    pub fn select<'a>(&self, registry: &'a Registry) -> Vec<TagListing<'a>> {
        registry
            .iter()
            .filter(|(tag, _)| self.config.all_tags || *tag == self.config.tag)
            .map(|(tag, directories)| TagListing { tag, directories })
            .collect()
    }

    /// 選択されたタグ全体のディレクトリ集合を返す
    ///
    /// 重複を除去し、パス文字列の辞書順に並べる。
    pub fn flat_union<'a>(&self, registry: &'a Registry) -> Vec<&'a ResolvedPath> {
        let set: BTreeSet<&ResolvedPath> = self
            .select(registry)
            .iter()
            .flat_map(|listing| listing.directories.iter())
            .collect();
        set.into_iter().collect()
    }
}
