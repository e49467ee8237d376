// ==========================================
// 绿色燃料展望 - 源目录枚举
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_name::has_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// 列出目录下指定扩展名的文件（按文件名排序, 保证加载顺序确定）
///
/// # 返回
/// - Ok(Vec<PathBuf>): 可能为空（空目录不是错误）
/// - Err(DirectoryNotFound): 路径不存在或不是目录
pub fn list_source_files(dir: &Path, extensions: &[&str]) -> ImportResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ImportError::DirectoryNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// 取路径的文件名（用于日志与报告）
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
