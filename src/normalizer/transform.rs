//! # 文本变换
//!
//! 按通用换行边界 (`\n`, `\r\n`, 单独的 `\r`) 拆分行，
//! 去除每行末尾空白后追加 CRLF。
//!
//! ## 依赖关系
//! - 被 `normalizer/file.rs` 使用
//! - 使用 `memchr` 查找换行符

use memchr::memchr2;

/// 统一使用的行结束符
pub const LINE_TERMINATOR: &str = "\r\n";

/// 判断字符是否属于需去除的行尾空白
///
/// Unicode `White_Space` 之外，还包含 U+001C..=U+001F 四个信息分隔符。
pub fn is_trailing_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// 保留原始行结束符的行迭代器
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        let end = match memchr2(b'\n', b'\r', bytes) {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// 拆分文本为行（每行带原结束符，最后一行可能没有）
pub fn lines(content: &str) -> Lines<'_> {
    Lines { rest: content }
}

/// 去除单行末尾的空白和结束符
pub fn trim_line(line: &str) -> &str {
    line.trim_end_matches(is_trailing_whitespace)
}

/// 规范化整段文本
pub fn normalize_content(content: &str) -> String {
    let mut result = String::with_capacity(content.len() + content.len() / 16);
    for line in lines(content) {
        result.push_str(trim_line(line));
        result.push_str(LINE_TERMINATOR);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_original_terminators() {
        let split: Vec<&str> = lines("a\nb\r\nc\rd").collect();
        assert_eq!(split, vec!["a\n", "b\r\n", "c\r", "d"]);
    }

    #[test]
    fn test_lines_empty_input() {
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_lines_cr_before_crlf() {
        let split: Vec<&str> = lines("a\r\r\n").collect();
        assert_eq!(split, vec!["a\r", "\r\n"]);
    }

    #[test]
    fn test_trailing_spaces_without_terminator() {
        assert_eq!(normalize_content("hello   "), "hello\r\n");
    }

    #[test]
    fn test_mixed_endings() {
        assert_eq!(normalize_content("a \nb\t\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_lone_cr_is_a_line_boundary() {
        assert_eq!(normalize_content("a\rb"), "a\r\nb\r\n");
    }

    #[test]
    fn test_empty_content_stays_empty() {
        assert_eq!(normalize_content(""), "");
    }

    #[test]
    fn test_blank_lines_survive_as_bare_terminators() {
        assert_eq!(normalize_content("\n \n\t\t\n"), "\r\n\r\n\r\n");
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        assert_eq!(normalize_content("    indented  \n"), "    indented\r\n");
    }

    #[test]
    fn test_unicode_trailing_whitespace() {
        assert_eq!(
            normalize_content("x\u{a0}\u{3000}\u{2003}\n"),
            "x\r\n"
        );
        assert_eq!(normalize_content("y\u{0b}\u{0c}\u{1f}"), "y\r\n");
    }

    #[test]
    fn test_non_whitespace_tail_untouched() {
        assert_eq!(normalize_content("end\u{200b}\n"), "end\u{200b}\r\n");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "plain",
            "a \nb\t\r\n",
            "x\r\r\ny\r",
            "\n\n\n",
            "tab\t\r\nunicode\u{2028}",
        ];
        for input in inputs {
            let once = normalize_content(input);
            assert_eq!(normalize_content(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_every_line_ends_with_crlf() {
        let out = normalize_content("one  \ntwo\t\rthree\r\nfour ");
        for line in lines(&out) {
            assert!(line.ends_with(LINE_TERMINATOR));
            let body = &line[..line.len() - LINE_TERMINATOR.len()];
            assert!(!body.ends_with(' ') && !body.ends_with('\t'));
        }
        assert_eq!(lines(&out).count(), 4);
    }
}
