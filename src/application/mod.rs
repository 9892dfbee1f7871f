/// アプリケーション層
///
/// 引数解釈とpackage.json変換のサービス、およびブートストラップ全体を
/// 駆動するユースケースを提供する。
pub mod services;
pub mod use_cases;

pub use services::{ArgumentInterpreter, ManifestPipeline};
pub use use_cases::{
    BootstrapEvent, BootstrapOutcome, BootstrapProjectUseCase, BootstrapReport, BootstrapReporter,
    BootstrapStep, StepFailure,
};
