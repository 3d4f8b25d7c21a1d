//! Code editor buffer with lightweight diagnostics.
//!
//! The code is never evaluated. Diagnostics only flag unbalanced brackets
//! so the editor can mark the offending lines.

/// One diagnostic, 1-based line number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeEditorState {
    code: String,
    language: String,
    errors: Vec<LineError>,
}

impl Default for CodeEditorState {
    fn default() -> Self {
        Self::new("", "rust")
    }
}

impl CodeEditorState {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        let code = code.into();
        let errors = check_brackets(&code);
        Self {
            code,
            language: language.into(),
            errors,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn errors(&self) -> &[LineError] {
        &self.errors
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count().max(1)
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.errors = check_brackets(&self.code);
    }
}

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Index of the quote closing a char literal that opens at `start`, or
/// `None` when the quote starts a lifetime or label
fn char_literal_end(chars: &[char], start: usize) -> Option<usize> {
    match chars.get(start + 1) {
        Some('\\') => chars
            .iter()
            .enumerate()
            .skip(start + 3)
            .take(10)
            .take_while(|(_, c)| **c != '\n')
            .find(|(_, c)| **c == '\'')
            .map(|(i, _)| i),
        Some('\n') | None => None,
        Some(_) => (chars.get(start + 2) == Some(&'\'')).then_some(start + 2),
    }
}

/// Report unmatched or mismatched brackets.
///
/// Brackets inside string and char literals, `//` comments and (nested)
/// `/* */` comments are ignored.
pub fn check_brackets(code: &str) -> Vec<LineError> {
    let mut errors = Vec::new();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let chars: Vec<char> = code.chars().collect();
    let mut line_no = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match c {
            '\n' => line_no += 1,
            '/' if next == Some('/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if next == Some('*') => {
                let mut depth = 0usize;
                while i < chars.len() {
                    match (chars[i], chars.get(i + 1).copied()) {
                        ('/', Some('*')) => {
                            depth += 1;
                            i += 2;
                        }
                        ('*', Some('/')) => {
                            depth -= 1;
                            i += 2;
                            if depth == 0 {
                                break;
                            }
                        }
                        ('\n', _) => {
                            line_no += 1;
                            i += 1;
                        }
                        _ => i += 1,
                    }
                }
                continue;
            }
            '"' => {
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    if chars.get(i) == Some(&'\n') {
                        line_no += 1;
                    }
                    i += 1;
                }
            }
            '\'' => {
                if let Some(end) = char_literal_end(&chars, i) {
                    i = end;
                }
            }
            '(' | '[' | '{' => stack.push((c, line_no)),
            ')' | ']' | '}' => match stack.pop() {
                Some((open, _)) if closer_for(open) == c => {}
                Some((open, open_line)) => errors.push(LineError {
                    line: line_no,
                    message: format!(
                        "Expected '{}' to close '{open}' from line {open_line}, found '{c}'",
                        closer_for(open)
                    ),
                }),
                None => errors.push(LineError {
                    line: line_no,
                    message: format!("Unexpected '{c}'"),
                }),
            },
            _ => {}
        }
        i += 1;
    }

    for (open, line) in stack {
        errors.push(LineError {
            line,
            message: format!("Unclosed '{open}'"),
        });
    }
    errors.sort_by_key(|e| e.line);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_snippet_has_no_errors() {
        let code = "rsx! {\n    Button { variant: \"}\", \"Go\" }\n}";
        assert!(check_brackets(code).is_empty());
    }

    #[test]
    fn test_unclosed_brace_reports_opening_line() {
        let errors = check_brackets("rsx! {\n    Chip {\n}");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn test_mismatch_and_stray_closer() {
        let errors = check_brackets("foo(]");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
        assert!(errors[0].message.contains("Expected ')'"));

        let errors = check_brackets("}\n// { ignored");
        assert_eq!(
            errors,
            vec![LineError {
                line: 1,
                message: "Unexpected '}'".into()
            }]
        );
    }

    #[test]
    fn test_char_literals_and_block_comments_are_skipped() {
        assert!(check_brackets("let c = '{';").is_empty());
        assert!(check_brackets("let c = '\\'';\nlet d = '\\u{7b}';").is_empty());
        assert!(check_brackets("/* ( [\n { */ fn f() {}").is_empty());
        assert!(check_brackets("/* outer /* inner { */ still ( */").is_empty());
    }

    #[test]
    fn test_lifetimes_are_not_char_literals() {
        assert!(check_brackets("fn f<'a>(x: &'a str) -> &'a str { x }").is_empty());

        let errors = check_brackets("fn f<'a>(x: &'a str) {");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unclosed '{'");
    }

    #[test]
    fn test_lines_are_counted_inside_multiline_comments_and_strings() {
        let errors = check_brackets("/*\n\n*/ let s = \"a\nb\";\n)");
        assert_eq!(errors[0].line, 5);
    }

    #[test]
    fn test_set_code_refreshes_errors() {
        let mut editor = CodeEditorState::new("{", "rust");
        assert_eq!(editor.errors().len(), 1);
        editor.set_code("{}");
        assert!(editor.errors().is_empty());
        assert_eq!(editor.language(), "rust");
        assert_eq!(editor.line_count(), 1);
    }
}
