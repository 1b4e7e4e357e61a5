use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// 解決済みパスの値オブジェクト
///
/// シンボリックリンクと相対パス成分をファイルシステム上で解決した
/// 絶対パスを保持する。タグ配下での重複判定の同一性キーとして使用される。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// ファイルシステム上のパスを解決して新しいResolvedPathを作成
    ///
    /// パスが存在しない場合はエラーを返す。
    pub fn resolve(path: &Path) -> io::Result<Self> {
        let canonical = path.canonicalize()?;
        Ok(Self(canonical.to_string_lossy().into_owned()))
    }

    /// 設定ファイルに保存済みの文字列からResolvedPathを復元
    ///
    /// 保存時に解決済みであることを前提とし、再解決は行わない。
    pub fn from_stored(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// 文字列表現を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PathBufに変換
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
