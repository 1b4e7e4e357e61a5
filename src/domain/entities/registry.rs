use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::resolved_path::ResolvedPath;

/// タグが指定されなかった場合に使用される既定のタグ名
pub const DEFAULT_TAG: &str = "default";

/// タグ配下の順序付きディレクトリ列
///
/// 挿入順を保持し、同一の解決済みパスの重複を拒否する。
/// 列内の位置（1始まり）が一覧表示とスキップ指定の番号になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryList(Vec<ResolvedPath>);

impl DirectoryList {
    /// 空のDirectoryListを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 末尾にパスを追加する
    ///
    /// 既に含まれている場合は変更せずfalseを返す。
    pub fn insert(&mut self, path: ResolvedPath) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.0.push(path);
        true
    }

    /// 指定パスが含まれているかチェック
    pub fn contains(&self, path: &ResolvedPath) -> bool {
        self.0.contains(path)
    }

    /// 挿入順でパスを反復する
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedPath> {
        self.0.iter()
    }

    /// 登録されているパス数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 空かどうかチェック
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a DirectoryList {
    type Item = &'a ResolvedPath;
    type IntoIter = std::slice::Iter<'a, ResolvedPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// タグ→ディレクトリ列の対応表
///
/// タグの反復順は設定ファイル内の出現順（挿入順）を保持する。
/// 1つのディレクトリは複数のタグに同時に所属できる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    tags: IndexMap<String, DirectoryList>,
}

impl Registry {
    /// 空のRegistryを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定タグのディレクトリ列を取得
    pub fn get(&self, tag: &str) -> Option<&DirectoryList> {
        self.tags.get(tag)
    }

    /// タグが存在するかチェック
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// 指定タグのディレクトリ列を取得する（存在しなければ空で作成）
    pub fn entry(&mut self, tag: &str) -> &mut DirectoryList {
        self.tags.entry(tag.to_string()).or_default()
    }

    /// 指定パスが所属する全タグを反復順で返す
    pub fn tags_for(&self, path: &ResolvedPath) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|(_, dirs)| dirs.contains(path))
            .map(|(tag, _)| tag.as_str())
            .collect()
    }

    /// (タグ, ディレクトリ列)を反復順で返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryList)> {
        self.tags.iter().map(|(tag, dirs)| (tag.as_str(), dirs))
    }

    /// 登録されているタグ数
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// タグが1つも無いかチェック
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
