use std::fmt;
use thiserror::Error;
use url::Url;

/// Clone URL of the upstream JavaScript template
pub const TEMPLATE_REPOSITORY_URL: &str = "https://github.com/templ-project/javascript.git";

/// テンプレート取得元URL関連のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateSourceError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing repository path")]
    MissingRepoPath,
}

/// テンプレートリポジトリの取得元を表す値オブジェクト
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateSource {
    /// `git clone`に渡すURL
    clone_url: String,

    /// ブラウザで開けるURL（`.git`を除いたもの）
    web_url: String,
}

impl TemplateSource {
    /// 任意のURLからTemplateSourceを作成
    pub fn new(url: &str) -> Result<Self, TemplateSourceError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(TemplateSourceError::InvalidFormat("Empty URL".to_string()));
        }

        let parsed =
            Url::parse(trimmed).map_err(|e| TemplateSourceError::InvalidFormat(e.to_string()))?;

        match parsed.scheme() {
            "https" | "http" | "ssh" | "git" | "file" => {}
            other => return Err(TemplateSourceError::UnsupportedScheme(other.to_string())),
        }

        if parsed.path().trim_matches('/').is_empty() {
            return Err(TemplateSourceError::MissingRepoPath);
        }

        let clone_url = parsed.to_string();
        let web_url = Self::derive_web_url(&clone_url);
        Ok(Self { clone_url, web_url })
    }

    /// 固定のアップストリームテンプレート
    ///
    /// 定数も任意のURLと同じ検証を通す。
    pub fn upstream() -> Result<Self, TemplateSourceError> {
        Self::new(TEMPLATE_REPOSITORY_URL)
    }

    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    fn derive_web_url(clone_url: &str) -> String {
        let without_slash = clone_url.trim_end_matches('/');
        without_slash
            .strip_suffix(".git")
            .unwrap_or(without_slash)
            .to_string()
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clone_url)
    }
}
