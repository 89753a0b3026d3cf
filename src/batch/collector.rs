//! # 文件收集器
//!
//! 将 glob 模式展开为候选路径列表。
//!
//! ## 功能
//! - 支持 `*`, `?`, `[...]` 通配符
//! - `**` 作为独立路径分量时跨越任意层目录（含零层）
//! - 末尾的 `**` 同时匹配其下所有文件
//! - 分量内部的 `**` 等同于 `*`，未闭合的 `[` 按字面处理
//! - 通配符不匹配以 `.` 开头的名称
//! - 不含通配符的模式原样返回
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `glob` 进行模式展开

use crate::error::{LinefixError, Result};

use glob::MatchOptions;
use std::path::{is_separator, Path, PathBuf};

/// 模式展开器
pub struct PatternCollector {
    options: MatchOptions,
}

impl Default for PatternCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCollector {
    /// 创建新的模式展开器
    pub fn new() -> Self {
        Self {
            options: MatchOptions {
                case_sensitive: !cfg!(windows),
                require_literal_separator: true,
                require_literal_leading_dot: true,
            },
        }
    }

    /// 展开模式，返回所有候选路径（未过滤文件类型）
    ///
    /// 无法读取的目录项直接忽略。
    pub fn collect(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        if !has_wildcard(pattern) {
            return Ok(self.collect_literal(pattern));
        }

        let translated = translate_pattern(pattern);
        let paths = glob::glob_with(&translated, self.options).map_err(|e| {
            LinefixError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            }
        })?;

        Ok(paths.filter_map(|entry| entry.ok()).collect())
    }

    /// 将模式视为字面路径（保留原始写法）
    pub fn collect_literal(&self, pattern: &str) -> Vec<PathBuf> {
        let path = PathBuf::from(pattern);
        // 悬空符号链接也返回，由调用方按非普通文件跳过
        if Path::new(pattern).symlink_metadata().is_ok() {
            vec![path]
        } else {
            vec![]
        }
    }
}

/// 是否含有通配符
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// 改写模式，使其可被 `glob` 接受
///
/// - 连续的 `**` 分量合并为一个
/// - 末尾的 `**` 改写为 `**/*`
/// - 分量内的连续 `*` 合并为一个
/// - 未闭合的 `[` 转义为 `[[]`
pub fn translate_pattern(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() + 2);
    let mut component = String::new();
    let mut previous_recursive = false;

    for c in pattern.chars() {
        if is_separator(c) {
            let recursive = component == "**";
            if !(recursive && previous_recursive) {
                result.push_str(&translate_component(&component));
                result.push(c);
            }
            previous_recursive = recursive;
            component.clear();
        } else {
            component.push(c);
        }
    }

    if component == "**" {
        if !previous_recursive {
            result.push_str("**/");
        }
        result.push('*');
    } else {
        result.push_str(&translate_component(&component));
    }

    result
}

fn translate_component(component: &str) -> String {
    if component == "**" {
        return component.to_string();
    }

    let chars: Vec<char> = component.chars().collect();
    let mut result = String::with_capacity(component.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                result.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match closing_bracket(&chars, i) {
                Some(end) => {
                    result.extend(&chars[i..=end]);
                    i = end;
                }
                None => result.push_str("[[]"),
            },
            c => result.push(c),
        }
        i += 1;
    }

    result
}

/// 查找字符集的闭合 `]`（紧跟 `[` 或 `[!` 的 `]` 属于字符集本身）
fn closing_bracket(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j..].iter().position(|&c| c == ']').map(|p| j + p)
}
