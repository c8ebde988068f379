//! 文件系统制品存储：模板目录和结果目录各是一个平铺目录，
//! 文件名即唯一标识，没有索引文件。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// 存储的制品种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Template,
    Result,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Template => write!(f, "Template"),
            ArtifactKind::Result => write!(f, "Result"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// 后备目录不存在——可恢复，调用方呈现为"目录未找到"
    #[error("{kind} dir not found")]
    Unavailable { kind: ArtifactKind },

    /// 指定文件不存在——预期内的每请求错误，不是崩溃
    #[error("File not found: {name}")]
    NotFound { name: String },

    #[error("Malformed result file: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 存储路径显式传入，而不是依赖进程工作目录
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub template_dir: PathBuf,
    pub result_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    pub file: String,
    pub size: u64,
}

/// 结果行：列按文件顺序保留，外加合成的1-based id
pub type ResultRow = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    config: StoreConfig,
}

impl ArtifactStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn dir(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Template => &self.config.template_dir,
            ArtifactKind::Result => &self.config.result_dir,
        }
    }

    /// 制品名必须是单层文件名，路径分隔符和".."一律按不存在处理
    fn artifact_path(&self, kind: ArtifactKind, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty()
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(self.dir(kind).join(name))
    }

    /// 列出目录下的制品。零字节文件视为不存在（隐藏写到一半的占位文件）。
    pub fn list(&self, kind: ArtifactKind) -> Result<Vec<ArtifactEntry>, StoreError> {
        let dir = self.dir(kind);
        if !dir.is_dir() {
            return Err(StoreError::Unavailable { kind });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let size = entry.metadata()?.len();
            if size == 0 {
                continue;
            }
            if let Ok(file) = entry.file_name().into_string() {
                entries.push(ArtifactEntry { file, size });
            }
        }
        entries.sort_by(|a, b| a.file.cmp(&b.file));
        tracing::debug!(kind = %kind, count = entries.len(), "listed artifacts");
        Ok(entries)
    }

    /// 读取制品原始文本
    pub fn fetch_text(&self, kind: ArtifactKind, name: &str) -> Result<String, StoreError> {
        let path = self.artifact_path(kind, name)?;
        fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound {
                    name: name.to_string(),
                }
            } else {
                StoreError::Io(err)
            }
        })
    }

    /// 把结果文件（CSV）转成行对象，id按文件顺序从1开始，每次取数重算
    pub fn fetch_rows(&self, name: &str) -> Result<Vec<ResultRow>, StoreError> {
        let text = self.fetch_text(ArtifactKind::Result, name)?;
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = ResultRow::new();
            row.insert(
                "id".to_string(),
                serde_json::Value::from(index as u64 + 1),
            );
            for (header, value) in headers.iter().zip(record.iter()) {
                row.insert(
                    header.to_string(),
                    serde_json::Value::String(value.to_string()),
                );
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// 覆盖写入模板（create-or-truncate）。除文件系统自身外不提供原子性。
    pub fn write_text(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.artifact_path(ArtifactKind::Template, name)?;
        fs::write(&path, content)?;
        tracing::info!(name = name, bytes = content.len(), "template written");
        Ok(())
    }
}
