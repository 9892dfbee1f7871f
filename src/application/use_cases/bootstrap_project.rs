use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

use crate::application::services::manifest_transformer::{
    ManifestChange, ManifestPipeline, Transformed,
};
use crate::common::error::BootstrapError;
use crate::common::result::{BootstrapResult, ResultExt};
use crate::domain::entities::bootstrap_config::BootstrapConfig;
use crate::domain::entities::project_layout::ProjectLayout;
use crate::domain::value_objects::template_source::TemplateSource;
use crate::infrastructure::filesystem::manifest_store::ManifestStore;
use crate::infrastructure::filesystem::path_cleaner::{PathCleaner, Removal};
use crate::infrastructure::scm::template_fetcher::TemplateFetcher;

/// ブートストラップの処理段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    /// 展開先の検査とテンプレートの取得
    Acquiring,
    /// 取得結果にpackage.jsonがあるかの確認
    ValidatingAcquisition,
    /// `.git`の削除
    CleaningGitMetadata,
    /// `.husky`と`.github`の削除（モノレポモードのみ）
    MonorepoCleanup,
    /// package.jsonの読み込みと変換
    TransformingManifest,
    /// package.jsonの書き戻し
    Persisting,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapStep::Acquiring => "Template acquisition",
            BootstrapStep::ValidatingAcquisition => "Template validation",
            BootstrapStep::CleaningGitMetadata => "Git metadata cleanup",
            BootstrapStep::MonorepoCleanup => "Monorepo cleanup",
            BootstrapStep::TransformingManifest => "Manifest transformation",
            BootstrapStep::Persisting => "Manifest write",
        };
        f.write_str(name)
    }
}

/// 失敗した段階とその原因
#[derive(Debug, Error)]
#[error("{step} failed: {error}")]
pub struct StepFailure {
    pub step: BootstrapStep,
    #[source]
    pub error: BootstrapError,
}

impl StepFailure {
    pub fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }
}

trait InStep<T> {
    fn in_step(self, step: BootstrapStep) -> Result<T, StepFailure>;
}

impl<T, E> InStep<T> for Result<T, E>
where
    E: Into<BootstrapError>,
{
    fn in_step(self, step: BootstrapStep) -> Result<T, StepFailure> {
        self.map_err(|error| StepFailure {
            step,
            error: error.into(),
        })
    }
}

/// 進捗通知イベント
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapEvent {
    Started { target: PathBuf },
    FetchStarted { source: String },
    FetchCompleted { target: PathBuf },
    CleanupStarted,
    PathRemoved { path: PathBuf },
    MonorepoCleanupStarted,
    ManifestUpdateStarted,
    ManifestChanged(ManifestChange),
    Completed { manifest_path: PathBuf },
}

/// 進捗イベントの受け手
#[cfg_attr(test, mockall::automock)]
pub trait BootstrapReporter: Send + Sync {
    fn report(&self, event: &BootstrapEvent);
}

/// 何も出力しないレポーター
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl BootstrapReporter for SilentReporter {
    fn report(&self, _event: &BootstrapEvent) {}
}

/// ブートストラップの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapReport {
    /// 実際に削除されたパス（削除順）
    pub removed_paths: Vec<PathBuf>,

    /// package.jsonに適用された変更（適用順）
    pub changes: Vec<ManifestChange>,

    /// 書き戻したpackage.jsonのパス
    pub manifest_path: PathBuf,

    /// 完了した段階
    pub steps: Vec<BootstrapStep>,
}

impl BootstrapReport {
    fn new(manifest_path: PathBuf) -> Self {
        Self {
            removed_paths: Vec::new(),
            changes: Vec::new(),
            manifest_path,
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// ヘルプ表示のみ（ファイルシステムには触れていない）
    HelpRequested,
    Completed(BootstrapReport),
}

/// プロジェクトブートストラップのユースケース
pub struct BootstrapProjectUseCase {
    /// 実行設定
    config: BootstrapConfig,

    /// テンプレートの取得元
    source: TemplateSource,

    cleaner: PathCleaner,
    store: ManifestStore,
}

impl BootstrapProjectUseCase {
    /// 新しいBootstrapProjectUseCaseインスタンスを作成
    pub fn new(config: BootstrapConfig, source: TemplateSource) -> Self {
        Self {
            config,
            source,
            cleaner: PathCleaner::new(),
            store: ManifestStore::new(),
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// ブートストラップを実行
    pub async fn execute(
        &self,
        fetcher: &dyn TemplateFetcher,
        reporter: &dyn BootstrapReporter,
    ) -> Result<BootstrapOutcome, StepFailure> {
        // ヘルプ指定時はファイルシステムに一切触れない
        if self.config.help_requested() {
            return Ok(BootstrapOutcome::HelpRequested);
        }

        let layout = ProjectLayout::new(self.config.target_path());
        let mut report = BootstrapReport::new(layout.manifest_path());

        tracing::info!(
            target_path = %layout.root().display(),
            multi_repo = self.config.is_part_of_multi_repo(),
            build_targets = ?self.config.build_targets(),
            "starting bootstrap"
        );
        reporter.report(&BootstrapEvent::Started {
            target: layout.root().to_path_buf(),
        });

        // 1. 展開先の検査とテンプレート取得
        self.acquire(&layout, fetcher, reporter)
            .await
            .in_step(BootstrapStep::Acquiring)?;
        report.steps.push(BootstrapStep::Acquiring);

        // 2. package.jsonの存在確認
        self.validate_acquisition(&layout)
            .await
            .in_step(BootstrapStep::ValidatingAcquisition)?;
        report.steps.push(BootstrapStep::ValidatingAcquisition);

        // 3. テンプレートの履歴を削除
        reporter.report(&BootstrapEvent::CleanupStarted);
        self.remove_path(&layout.git_metadata_dir(), reporter, &mut report)
            .await
            .in_step(BootstrapStep::CleaningGitMetadata)?;
        report.steps.push(BootstrapStep::CleaningGitMetadata);

        // 4. モノレポ側が持つフックとCI設定を削除
        if self.config.is_part_of_multi_repo() {
            reporter.report(&BootstrapEvent::MonorepoCleanupStarted);
            for dir in layout.monorepo_tooling_dirs() {
                self.remove_path(&dir, reporter, &mut report)
                    .await
                    .in_step(BootstrapStep::MonorepoCleanup)?;
            }
            report.steps.push(BootstrapStep::MonorepoCleanup);
        }

        // 5. package.jsonの変換
        reporter.report(&BootstrapEvent::ManifestUpdateStarted);
        let transformed = self
            .transform_manifest(&layout, reporter, &mut report)
            .await
            .in_step(BootstrapStep::TransformingManifest)?;
        report.steps.push(BootstrapStep::TransformingManifest);

        // 6. 書き戻し
        self.store
            .write_manifest(&report.manifest_path, &transformed.manifest)
            .await
            .in_step(BootstrapStep::Persisting)?;
        report.steps.push(BootstrapStep::Persisting);

        tracing::info!(
            removed = report.removed_paths.len(),
            changes = report.changes.len(),
            "bootstrap complete"
        );
        reporter.report(&BootstrapEvent::Completed {
            manifest_path: report.manifest_path.clone(),
        });

        Ok(BootstrapOutcome::Completed(report))
    }

    /// 展開先を用意してテンプレートを取得
    async fn acquire(
        &self,
        layout: &ProjectLayout,
        fetcher: &dyn TemplateFetcher,
        reporter: &dyn BootstrapReporter,
    ) -> BootstrapResult<()> {
        prepare_target(layout.root()).await?;

        reporter.report(&BootstrapEvent::FetchStarted {
            source: self.source.web_url().to_string(),
        });
        fetcher
            .fetch(&self.source, layout.root())
            .await
            .map_err(|e| e.into_bootstrap_error(&self.source))?;
        reporter.report(&BootstrapEvent::FetchCompleted {
            target: layout.root().to_path_buf(),
        });

        Ok(())
    }

    async fn validate_acquisition(&self, layout: &ProjectLayout) -> BootstrapResult<()> {
        let manifest_path = layout.manifest_path();
        if !self.store.manifest_exists(&manifest_path).await {
            return Err(BootstrapError::manifest_missing(manifest_path));
        }
        Ok(())
    }

    /// パスが存在すれば削除して報告する
    async fn remove_path(
        &self,
        path: &Path,
        reporter: &dyn BootstrapReporter,
        report: &mut BootstrapReport,
    ) -> BootstrapResult<()> {
        if self.cleaner.remove_if_exists(path).await? == Removal::Removed {
            reporter.report(&BootstrapEvent::PathRemoved {
                path: path.to_path_buf(),
            });
            report.removed_paths.push(path.to_path_buf());
        }
        Ok(())
    }

    /// package.jsonを読み込み、インストーラを削除してから変換パイプラインを通す
    async fn transform_manifest(
        &self,
        layout: &ProjectLayout,
        reporter: &dyn BootstrapReporter,
        report: &mut BootstrapReport,
    ) -> BootstrapResult<Transformed> {
        let manifest = self.store.read_manifest(layout.manifest_path()).await?;

        self.remove_path(&layout.installer_dir(), reporter, report)
            .await?;

        let pipeline = ManifestPipeline::for_config(&self.config);
        tracing::debug!(stages = ?pipeline.stage_names(), "running manifest pipeline");
        let transformed = pipeline.run(manifest);

        for change in &transformed.changes {
            reporter.report(&BootstrapEvent::ManifestChanged(change.clone()));
        }
        report.changes.extend(transformed.changes.iter().cloned());

        Ok(transformed)
    }
}

/// 展開先ディレクトリを用意する
///
/// 存在しなければ中間ディレクトリごと作成し、存在する場合は空のディレクトリで
/// あることを確認する。
pub async fn prepare_target(path: &Path) -> BootstrapResult<()> {
    match async_fs::metadata(path).await {
        Ok(metadata) if !metadata.is_dir() => {
            return Err(BootstrapError::TargetNotDirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "creating target directory");
            return async_fs::create_dir_all(path)
                .await
                .with_filesystem_error("Failed to create target directory", path);
        }
        Err(e) => {
            return Err(e).with_filesystem_error("Failed to inspect target directory", path);
        }
    }

    let mut entries = async_fs::read_dir(path)
        .await
        .with_filesystem_error("Failed to read target directory", path)?;
    if let Some(entry) = entries
        .next_entry()
        .await
        .with_filesystem_error("Failed to read target directory", path)?
    {
        tracing::debug!(
            path = %path.display(),
            first_entry = %entry.file_name().to_string_lossy(),
            "target directory is not empty"
        );
        return Err(BootstrapError::target_not_empty(path));
    }

    Ok(())
}
