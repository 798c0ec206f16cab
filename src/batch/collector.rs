//! # 输入文件收集器
//!
//! 根据输入路径和模式收集待解释的语句文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索
//! - 读取语句：每行一句，跳过空行和 `#` 注释
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{ChatmatError, Result};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件中的一句用户输入
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// 行号（从 1 开始）
    pub line: usize,
    pub text: String,
}

/// 文件收集器
pub struct FileCollector {
    input: PathBuf,
    patterns: Vec<glob::Pattern>,
    recursive: bool,
}

impl FileCollector {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    ChatmatError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（已排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(ChatmatError::PathNotFound {
                path: self.input.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 无模式时匹配所有文件
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(filename))
    }
}

/// 读取语句文件
pub fn read_utterances(path: &Path) -> Result<Vec<Utterance>> {
    let content = fs::read_to_string(path).map_err(|e| ChatmatError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(split_utterances(&content))
}

/// 按行切分语句
pub fn split_utterances(content: &str) -> Vec<Utterance> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| Utterance {
            line,
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_utterances() {
        let content = "# requests\nsilicon 2x2x2\n\n  NaCl rock salt  \n#skip\nmp-149\n";
        let utterances = split_utterances(content);
        assert_eq!(utterances.len(), 3);
        assert_eq!(utterances[0].line, 2);
        assert_eq!(utterances[1].text, "NaCl rock salt");
        assert_eq!(utterances[2].line, 6);
    }

    #[test]
    fn test_collect_with_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "gold").unwrap();
        fs::write(dir.path().join("b.prompts"), "iron").unwrap();
        fs::write(dir.path().join("c.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("d.txt"), "copper").unwrap();

        let flat = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.txt, *.prompts")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(flat.len(), 2);

        let deep = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.txt")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_collect_single_file_and_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "silicon").unwrap();

        let files = FileCollector::new(file.clone()).collect().unwrap();
        assert_eq!(files, vec![file]);

        let missing = FileCollector::new(dir.path().join("nope")).collect();
        assert!(matches!(missing, Err(ChatmatError::PathNotFound { .. })));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new(PathBuf::from("."))
            .with_pattern("[")
            .is_err());
    }
}
