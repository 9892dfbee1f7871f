use crate::domain::value_objects::build_target::BuildTarget;
use std::path::{Path, PathBuf};

/// `--target`を指定しない場合のビルドターゲット
pub const DEFAULT_BUILD_TARGET: &str = "all";

/// ブートストラップ1回分の設定
///
/// 引数から一度だけ組み立てられ、以降は変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// テンプレートを展開する絶対パス
    target_path: PathBuf,

    /// モノレポの一部として展開するか
    part_of_multi_repo: bool,

    /// 指定順のビルドターゲット（重複・未知の値もそのまま保持）
    build_targets: Vec<String>,

    /// ヘルプ表示のみを行うか
    help: bool,
}

impl BootstrapConfig {
    /// デフォルト値で新しいBootstrapConfigを作成
    pub fn new(target_path: impl Into<PathBuf>) -> Self {
        Self {
            target_path: target_path.into(),
            part_of_multi_repo: false,
            build_targets: vec![DEFAULT_BUILD_TARGET.to_string()],
            help: false,
        }
    }

    /// 展開先パスを設定
    pub fn with_target_path(mut self, target_path: impl Into<PathBuf>) -> Self {
        self.target_path = target_path.into();
        self
    }

    /// モノレポモードを設定
    pub fn with_multi_repo(mut self, part_of_multi_repo: bool) -> Self {
        self.part_of_multi_repo = part_of_multi_repo;
        self
    }

    /// ビルドターゲットを設定
    pub fn with_build_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// ヘルプ表示を設定
    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn is_part_of_multi_repo(&self) -> bool {
        self.part_of_multi_repo
    }

    pub fn build_targets(&self) -> &[String] {
        &self.build_targets
    }

    pub fn help_requested(&self) -> bool {
        self.help
    }

    /// `all`が含まれていれば全てのビルドスクリプトを残す
    pub fn keeps_all_build_scripts(&self) -> bool {
        self.build_targets
            .iter()
            .any(|target| target == BuildTarget::All.as_str())
    }

    /// 残すべきビルドスクリプトのキー（未知のターゲットは何も残さない）
    pub fn retained_build_scripts(&self) -> Vec<String> {
        self.build_targets
            .iter()
            .filter_map(|target| BuildTarget::script_key_for(target))
            .collect()
    }
}
