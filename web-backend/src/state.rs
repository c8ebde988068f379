use std::path::PathBuf;

use gitanalyzer_core::{ArtifactStore, StoreConfig, TemplateService};

#[derive(Clone)]
pub struct AppState {
    pub service: TemplateService,
    pub store: ArtifactStore,
}

impl AppState {
    /// 存储目录显式配置，不再隐式依赖进程工作目录
    pub fn from_env() -> Self {
        let template_dir = std::env::var("GITANALYZER_TEMPLATE_DIR")
            .unwrap_or_else(|_| "../templates".to_string());
        let result_dir = std::env::var("GITANALYZER_RESULT_DIR")
            .unwrap_or_else(|_| "../results".to_string());

        tracing::info!(
            template_dir = %template_dir,
            result_dir = %result_dir,
            "artifact store configured"
        );

        Self::with_dirs(PathBuf::from(template_dir), PathBuf::from(result_dir))
    }

    pub fn with_dirs(template_dir: PathBuf, result_dir: PathBuf) -> Self {
        let store = ArtifactStore::new(StoreConfig {
            template_dir,
            result_dir,
        });
        Self {
            service: TemplateService::new(store.clone()),
            store,
        }
    }
}
