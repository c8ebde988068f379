//! 模板服务：组合根。列表/读取走制品存储，保存前先过文件名策略门。

use serde::Serialize;
use thiserror::Error;

use super::validate::{self, ValidationError};
use crate::store::{ArtifactEntry, ArtifactKind, ArtifactStore, StoreError};

/// 不允许的保存名：编辑器用它表示"未保存的新模板"占位状态
const RESERVED_FILE_NAME: &str = "template.yaml";

/// 文件名最少要多于6个字符（恰好6个也拒绝）
const MIN_FILE_NAME_LEN: usize = 6;

const FILE_NAME_SUFFIX: &str = ".yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub file_name: String,
}

#[derive(Error, Debug)]
pub enum SaveError {
    /// 文件名策略违规，字段级错误（property恒为"fileName"）
    #[error("invalid file name")]
    Policy(Vec<ValidationError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct TemplateService {
    store: ArtifactStore,
}

impl TemplateService {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<ArtifactEntry>, StoreError> {
        self.store.list(ArtifactKind::Template)
    }

    pub fn fetch(&self, name: &str) -> Result<String, StoreError> {
        self.store.fetch_text(ArtifactKind::Template, name)
    }

    /// 两段式校验；空列表即合法
    pub fn validate_document(&self, text: &str) -> Vec<ValidationError> {
        validate::validate_document(text)
    }

    /// 文件名策略：三条规则彼此独立，全部评估并一次性返回
    pub fn check_file_name(name: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if name.chars().count() <= MIN_FILE_NAME_LEN {
            errors.push(policy_error("must be >6 character!"));
        }
        if name == RESERVED_FILE_NAME {
            errors.push(policy_error(&format!(
                "Filename {} is not allowed!",
                RESERVED_FILE_NAME
            )));
        }
        if !name.ends_with(FILE_NAME_SUFFIX) {
            errors.push(policy_error(&format!(
                "Filename must end with {}",
                FILE_NAME_SUFFIX
            )));
        }
        errors
    }

    /// 保存：策略门通过后覆盖写入。
    /// 按契约，调用方应当先拿到空的校验结果；这里不重跑Schema校验。
    pub fn save(&self, name: &str, content: &str) -> Result<SavedTemplate, SaveError> {
        let policy_errors = Self::check_file_name(name);
        if !policy_errors.is_empty() {
            tracing::warn!(name = name, count = policy_errors.len(), "save rejected by filename policy");
            return Err(SaveError::Policy(policy_errors));
        }

        self.store.write_text(name, content)?;
        Ok(SavedTemplate {
            file_name: name.to_string(),
        })
    }
}

fn policy_error(message: &str) -> ValidationError {
    ValidationError {
        property: "fileName".to_string(),
        message: message.to_string(),
    }
}
