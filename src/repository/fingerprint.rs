// ==========================================
// 绿色燃料展望 - 数据源指纹
// ==========================================
// 缓存键 = (数据集, 源路径) + 内容指纹
// 指纹覆盖文件名与文件内容, 源文件变化后缓存必然失效
// ==========================================

use crate::importer::directory::{file_label, list_source_files};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFingerprint(String);

impl SourceFingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 计算单个文件或目录（按扩展名过滤）的内容指纹
///
/// 路径不存在或读取失败时返回 None（调用方不得缓存该次结果）
pub fn fingerprint_source(path: &Path, extensions: &[&str]) -> Option<SourceFingerprint> {
    let mut hasher = Sha256::new();

    if path.is_file() {
        hasher.update(fs::read(path).ok()?);
    } else if path.is_dir() {
        let files = list_source_files(path, extensions).ok()?;
        for file in files {
            hasher.update(file_label(&file).as_bytes());
            hasher.update([0u8]);
            hasher.update(fs::read(&file).ok()?);
            hasher.update([0u8]);
        }
    } else {
        return None;
    }

    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    Some(SourceFingerprint(hex))
}
