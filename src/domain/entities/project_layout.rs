use std::path::{Path, PathBuf};

/// プロジェクトマニフェストのファイル名
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// バージョン管理メタデータのディレクトリ
pub const GIT_METADATA_DIR: &str = ".git";

/// テンプレート自身のインストーラディレクトリ
pub const INSTALLER_DIR: &str = ".npx-install";

/// Gitフックマネージャのディレクトリ
pub const HOOK_MANAGER_DIR: &str = ".husky";

/// CI設定のディレクトリ
pub const CI_CONFIG_DIR: &str = ".github";

/// 展開先ディレクトリ内の既知のパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// 展開先ディレクトリのルート
    pub root_path: PathBuf,
}

impl ProjectLayout {
    /// 新しいProjectLayoutインスタンスを作成
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root_path.join(MANIFEST_FILE_NAME)
    }

    pub fn git_metadata_dir(&self) -> PathBuf {
        self.root_path.join(GIT_METADATA_DIR)
    }

    pub fn installer_dir(&self) -> PathBuf {
        self.root_path.join(INSTALLER_DIR)
    }

    /// モノレポモードで削除するディレクトリ（フックマネージャ、CI設定の順）
    pub fn monorepo_tooling_dirs(&self) -> [PathBuf; 2] {
        [
            self.root_path.join(HOOK_MANAGER_DIR),
            self.root_path.join(CI_CONFIG_DIR),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("/tmp/proj");

        assert_eq!(layout.root(), Path::new("/tmp/proj"));
        assert_eq!(layout.manifest_path(), PathBuf::from("/tmp/proj/package.json"));
        assert_eq!(layout.git_metadata_dir(), PathBuf::from("/tmp/proj/.git"));
        assert_eq!(layout.installer_dir(), PathBuf::from("/tmp/proj/.npx-install"));
        assert_eq!(
            layout.monorepo_tooling_dirs(),
            [
                PathBuf::from("/tmp/proj/.husky"),
                PathBuf::from("/tmp/proj/.github")
            ]
        );
    }
}
