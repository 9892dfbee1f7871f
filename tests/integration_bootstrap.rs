//! ブートストラップ全体の統合テスト
//!
//! BootstrapProjectUseCaseをテンプレートのフィクスチャと組み合わせ、
//! 展開先ディレクトリとpackage.jsonの最終状態を検証する

mod common;

use common::assertion_helpers::{assert_dir_empty, assert_key_order};
use common::test_fixtures::{FakeFetcher, OfflineFetcher, TemplateFixture};
use common::test_helpers::{
    read_manifest, read_manifest_text, upstream_use_case, RecordingReporter,
};
use jsboot::application::services::argument_interpreter::ArgumentInterpreter;
use jsboot::application::services::manifest_transformer::ManifestChange;
use jsboot::application::use_cases::bootstrap_project::{
    BootstrapEvent, BootstrapOutcome, BootstrapStep, SilentReporter,
};
use jsboot::common::error::{BootstrapError, ErrorCategory, FetchFailureKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_standalone_bootstrap_from_arguments() {
    // テスト環境の準備
    let temp_dir = TempDir::new().unwrap();
    let interpreter = ArgumentInterpreter::new(temp_dir.path());
    let config = interpreter.interpret(["--target", "esm,cjs", "./my-lib"]);
    let target = temp_dir.path().join("my-lib");
    assert_eq!(config.target_path(), target.as_path());

    let fetcher = FakeFetcher::new(TemplateFixture::upstream());
    let reporter = RecordingReporter::default();

    // 1. 実行
    let outcome = upstream_use_case(config)
        .execute(&fetcher, &reporter)
        .await
        .unwrap();
    assert_eq!(fetcher.calls(), 1);

    // 2. ディレクトリの最終状態
    assert_file_not_exists!(target.join(".git"));
    assert_file_not_exists!(target.join(".npx-install"));
    assert_dir_exists!(target.join(".husky"));
    assert_dir_exists!(target.join(".github"));
    assert_file_exists!(target.join("src/index.js"));

    // 3. package.jsonの最終状態
    let manifest = read_manifest(&target);
    assert_eq!(
        manifest,
        json!({
            "name": "my-javascript-project",
            "version": "0.1.0",
            "description": "JavaScript template",
            "type": "module",
            "scripts": {
                "build": "npm run build:all",
                "build:esm": "esbuild --format=esm",
                "build:cjs": "esbuild --format=cjs",
                "prepare": "husky",
                "test": "vitest run"
            },
            "repository": { "type": "git", "url": "" },
            "bugs": { "url": "" },
            "homepage": "",
            "devDependencies": {
                "esbuild": "^0.20.0",
                "husky": "^9.0.0",
                "lint-staged": "^15.0.0",
                "vitest": "^1.0.0"
            },
            "lint-staged": { "*.js": ["eslint --fix", "prettier --write"] }
        })
    );
    assert_key_order(
        &manifest,
        &[
            "name",
            "version",
            "description",
            "type",
            "scripts",
            "repository",
            "bugs",
            "homepage",
            "devDependencies",
            "lint-staged",
        ],
    );
    assert_key_order(
        &manifest["scripts"],
        &["build", "build:esm", "build:cjs", "prepare", "test"],
    );

    // 4. 書き出し形式（2スペースインデント、末尾改行1つ）
    let text = read_manifest_text(&target);
    assert!(text.starts_with("{\n  \"name\": \"my-javascript-project\",\n"));
    assert!(text.ends_with("}\n"));
    assert!(!text.ends_with("}\n\n"));

    // 5. レポート
    let BootstrapOutcome::Completed(report) = outcome else {
        panic!("expected a completed bootstrap");
    };
    assert_eq!(
        report.changes,
        vec![
            ManifestChange::ScriptRemoved("build:all".to_string()),
            ManifestChange::ScriptRemoved("build:browser".to_string()),
            ManifestChange::ScriptRemoved("build:iife".to_string()),
            ManifestChange::BinRemoved,
            ManifestChange::MetadataReset,
        ]
    );
    assert_eq!(report.manifest_path, target.join("package.json"));

    let events = reporter.events();
    assert!(events.contains(&BootstrapEvent::FetchStarted {
        source: "https://github.com/templ-project/javascript".to_string()
    }));
    assert!(events.contains(&BootstrapEvent::PathRemoved {
        path: target.join(".git")
    }));
}

#[tokio::test]
async fn test_monorepo_bootstrap_removes_tooling() {
    let temp_dir = TempDir::new().unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(["--part-of-monorepo"]);
    let fetcher = FakeFetcher::new(TemplateFixture::upstream());

    let outcome = upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap();

    let root = temp_dir.path();
    assert_file_not_exists!(root.join(".husky"));
    assert_file_not_exists!(root.join(".github"));
    assert_file_not_exists!(root.join(".git"));
    assert_file_not_exists!(root.join(".npx-install"));

    let manifest = read_manifest(root);
    assert_eq!(
        manifest["devDependencies"],
        json!({ "esbuild": "^0.20.0", "vitest": "^1.0.0" })
    );
    assert!(manifest.get("lint-staged").is_none());
    assert!(manifest["scripts"].get("prepare").is_none());
    assert_eq!(
        manifest["scripts"]["build:all"],
        json!("npm run build:esm && npm run build:cjs")
    );

    let BootstrapOutcome::Completed(report) = outcome else {
        panic!("expected a completed bootstrap");
    };
    assert!(report.steps.contains(&BootstrapStep::MonorepoCleanup));
    assert_eq!(
        report.removed_paths,
        vec![
            root.join(".git"),
            root.join(".husky"),
            root.join(".github"),
            root.join(".npx-install"),
        ]
    );
}

#[tokio::test]
async fn test_spec_example_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(["--target", "esm"]);
    let fetcher = FakeFetcher::new(TemplateFixture::with_manifest(json!({
        "name": "tpl",
        "version": "9.9.9",
        "scripts": { "build:all": "x", "build:esm": "y" },
        "bin": "./cli.js"
    })));

    upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap();

    assert_eq!(
        read_manifest(temp_dir.path()),
        json!({
            "name": "my-javascript-project",
            "version": "0.1.0",
            "scripts": { "build:esm": "y" }
        })
    );
}

#[tokio::test]
async fn test_non_empty_target_is_not_fetched() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "keep me").unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(Vec::<String>::new());
    let fetcher = FakeFetcher::new(TemplateFixture::upstream());

    let failure = upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap_err();

    assert_eq!(fetcher.calls(), 0);
    assert_eq!(failure.step, BootstrapStep::Acquiring);
    assert_eq!(failure.error.category(), ErrorCategory::Usage);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(),
        "keep me"
    );
}

#[tokio::test]
async fn test_help_does_not_create_target() {
    let temp_dir = TempDir::new().unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(["new-project", "--help"]);
    let fetcher = FakeFetcher::new(TemplateFixture::upstream());

    let outcome = upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap();

    assert_eq!(outcome, BootstrapOutcome::HelpRequested);
    assert_eq!(fetcher.calls(), 0);
    assert_dir_empty(temp_dir.path());
}

#[tokio::test]
async fn test_fetch_failure_leaves_target_created() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested/project");
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(["nested/project"]);

    let failure = upstream_use_case(config)
        .execute(&OfflineFetcher, &SilentReporter)
        .await
        .unwrap_err();

    assert_dir_exists!(target);
    match &failure.error {
        BootstrapError::FetchFailed { kind, message, .. } => {
            assert_eq!(*kind, FetchFailureKind::Network);
            assert!(message.contains("Could not resolve host"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(failure.exit_code(), 1);
}

#[tokio::test]
async fn test_missing_manifest_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(Vec::<String>::new());
    let fetcher = FakeFetcher::new(TemplateFixture::without_manifest());

    let failure = upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap_err();

    assert_eq!(failure.step, BootstrapStep::ValidatingAcquisition);
    assert!(matches!(failure.error, BootstrapError::ManifestMissing { .. }));
    assert!(failure.error.to_string().contains("package.json"));
}

#[tokio::test]
async fn test_invalid_manifest_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = ArgumentInterpreter::new(temp_dir.path()).interpret(Vec::<String>::new());
    let fetcher = FakeFetcher::new(TemplateFixture::with_raw_manifest("[\"not\", \"an object\"]"));

    let failure = upstream_use_case(config)
        .execute(&fetcher, &SilentReporter)
        .await
        .unwrap_err();

    assert_eq!(failure.step, BootstrapStep::TransformingManifest);
    assert_eq!(failure.error.category(), ErrorCategory::Integrity);
    assert_eq!(
        read_manifest_text(temp_dir.path()),
        "[\"not\", \"an object\"]"
    );
}
