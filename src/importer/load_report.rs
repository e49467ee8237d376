// ==========================================
// 绿色燃料展望 - 加载报告
// ==========================================
// 记录一次加载的批次信息与跳过明细（跳过并告警策略）
// ==========================================

use crate::domain::DatasetKind;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// 被跳过的文件或行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedItem {
    /// 文件名或 "文件名:行号"
    pub location: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub load_id: String,
    pub dataset: DatasetKind,
    pub source: PathBuf,
    pub files_read: usize,
    pub rows_loaded: usize,
    /// 剔除的 "Overall Demand" 预聚合行数
    pub subtotal_rows_dropped: usize,
    pub skipped: Vec<SkippedItem>,
    pub loaded_at: DateTime<Local>,
}

impl LoadReport {
    pub fn new(dataset: DatasetKind, source: &Path) -> Self {
        Self {
            load_id: Uuid::new_v4().to_string(),
            dataset,
            source: source.to_path_buf(),
            files_read: 0,
            rows_loaded: 0,
            subtotal_rows_dropped: 0,
            skipped: Vec::new(),
            loaded_at: Local::now(),
        }
    }

    /// 记录跳过项并输出告警日志
    pub fn skip(&mut self, location: impl Into<String>, reason: impl Into<String>) {
        let item = SkippedItem {
            location: location.into(),
            reason: reason.into(),
        };
        tracing::warn!(
            dataset = %self.dataset,
            location = %item.location,
            reason = %item.reason,
            "跳过无法解析的数据"
        );
        self.skipped.push(item);
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}
