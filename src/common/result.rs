use crate::common::error::DirtagError;

/// dirtagプロジェクト全体で使用するResult型のエイリアス
///
/// このエイリアスにより、プロジェクト全体で一貫したエラーハンドリングが可能になる。
///
/// # Examples
///
/// ```
/// use dirtag::common::result::DirtagResult;
/// use dirtag::common::error::DirtagError;
///
/// fn example_function() -> DirtagResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> DirtagResult<()> {
///     Err(DirtagError::unknown_tag("missing"))
/// }
/// ```
pub type DirtagResult<T> = Result<T, DirtagError>;
