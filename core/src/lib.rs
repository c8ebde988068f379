// GitAnalyzer Dashboard Core Library
// 核心功能库，包含模板Schema、两段式校验管线、制品存储和监控统计模型

mod monitor;
mod store;
mod templates;

// 重新导出常用类型
pub use monitor::{MonitorPatch, MonitorStat};
pub use store::{ArtifactEntry, ArtifactKind, ArtifactStore, ResultRow, StoreConfig, StoreError};

// 模板系统
pub use templates::model::{
    Match, Output, RegexRule, Requirements, Script, Template, TestCase, Validation,
};
pub use templates::schema::{self, FieldSpec, FieldType, ObjectSpec, SchemaDocument};
pub use templates::service::{SaveError, SavedTemplate, TemplateService};
pub use templates::validate::{
    parse, validate_document, validate_value, SyntaxError, ValidationError,
};
