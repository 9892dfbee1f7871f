use crate::common::error::BootstrapError;
use std::path::Path;

/// jsboot全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use jsboot::common::result::BootstrapResult;
/// use jsboot::common::error::BootstrapError;
///
/// fn example_function() -> BootstrapResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> BootstrapResult<()> {
///     Err(BootstrapError::manifest_missing("/tmp/proj/package.json"))
/// }
/// ```
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// I/Oエラーを`BootstrapError`に変換するヘルパー
pub trait ResultExt<T> {
    /// ファイルシステムエラーとしてBootstrapResultに変換
    ///
    /// # Examples
    ///
    /// ```
    /// use jsboot::common::result::{BootstrapResult, ResultExt};
    /// use std::path::Path;
    ///
    /// let result: Result<(), std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::PermissionDenied, "denied"
    /// ));
    /// let converted: BootstrapResult<()> =
    ///     result.with_filesystem_error("Failed to create directory", Path::new("/tmp/proj"));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(self, message: impl Into<String>, path: &Path) -> BootstrapResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_filesystem_error(self, message: impl Into<String>, path: &Path) -> BootstrapResult<T> {
        self.map_err(|e| {
            BootstrapError::filesystem_error_with_source(message, Some(path.to_path_buf()), e)
        })
    }
}
