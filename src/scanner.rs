//! The character-level word scanner (`getword`, §4.1).
//!
//! Treats whitespace and `.` as word separators, folds uppercase to
//! lowercase, maps digits onto their cmavo spellings, discards `/.../`
//! comments, and honors `\`-escapes (which swallow the following character,
//! or swallow a following newline while still advancing the line counter).
//! Column is 1-based within a line; line is 1-based from the start of
//! input. Once the input is exhausted, every subsequent call returns `None`
//! without re-examining the source (§4.1's "remembers EOF").

const DIGIT_CMAVO: [&str; 10] = ["no", "pa", "re", "ci", "vo", "mu", "xa", "ze", "bi", "so"];

/// A scanned word together with the line/column of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedWord {
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// Pulls raw words off a source string, one `getword()` call at a time.
///
/// Owns its own cursor and EOF flag rather than relying on a hidden
/// static, so independent scans over independent inputs never interfere
/// with each other (§9's "no hidden global state" requirement).
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    eof: bool,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            eof: false,
        }
    }

    fn read(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    /// Returns the next whitespace/`.`-delimited word, or `None` at
    /// end-of-input. Comments and escapes are consumed silently; a word
    /// boundary is only reported once at least one character has been
    /// buffered.
    pub fn getword(&mut self) -> Option<ScannedWord> {
        if self.eof {
            return None;
        }
        let mut buffer = String::new();
        let mut start_line = None;
        let mut start_column = None;
        let mut oldch: Option<char> = None;
        loop {
            let ch = match oldch.take() {
                Some(ch) => Some(ch),
                None => self.read(),
            };
            self.column += 1;
            let Some(ch) = ch else {
                self.eof = true;
                return Self::finish(buffer, start_line, start_column);
            };
            if ch == '\n' {
                self.column = 0;
                self.line += 1;
            }
            if ch.is_whitespace() || ch == '.' {
                if !buffer.is_empty() {
                    return Self::finish(buffer, start_line, start_column);
                }
                continue;
            }
            if ch.is_uppercase() {
                for lower in ch.to_lowercase() {
                    Self::push(&mut buffer, &mut start_line, &mut start_column, self.line, self.column, lower);
                }
            } else if ch.is_lowercase() || ch == '\'' {
                Self::push(&mut buffer, &mut start_line, &mut start_column, self.line, self.column, ch);
            } else if ch == '/' {
                loop {
                    match self.read() {
                        None => {
                            self.eof = true;
                            return Self::finish(buffer, start_line, start_column);
                        }
                        Some('/') => break,
                        Some(_) => {}
                    }
                }
            } else if ch == '\\' {
                match self.read() {
                    None => {
                        self.eof = true;
                        return Self::finish(buffer, start_line, start_column);
                    }
                    Some('\n') => {
                        self.column = 0;
                        self.line += 1;
                    }
                    Some(escaped) => oldch = Some(escaped),
                }
            } else if ch.is_ascii_digit() {
                let spelling = DIGIT_CMAVO[(ch as u8 - b'0') as usize];
                if start_line.is_none() {
                    start_line = Some(self.line);
                    start_column = Some(self.column);
                }
                buffer.push_str(spelling);
            }
            // Any other character is blown away, matching the reference's
            // implicit fallthrough.
        }
    }

    fn push(buffer: &mut String, start_line: &mut Option<u32>, start_column: &mut Option<u32>, line: u32, column: u32, ch: char) {
        if start_line.is_none() {
            *start_line = Some(line);
            *start_column = Some(column);
        }
        buffer.push(ch);
    }

    fn finish(buffer: String, line: Option<u32>, column: Option<u32>) -> Option<ScannedWord> {
        if buffer.is_empty() {
            None
        } else {
            Some(ScannedWord {
                text: buffer,
                line: line.unwrap_or(1),
                column: column.unwrap_or(0),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(source: &str) -> Vec<String> {
        let mut scanner = Scanner::new(source);
        let mut out = Vec::new();
        while let Some(word) = scanner.getword() {
            out.push(word.text);
        }
        out
    }

    #[test]
    fn splits_on_whitespace_and_dot() {
        assert_eq!(words("mi klama le zarci"), vec!["mi", "klama", "le", "zarci"]);
        assert_eq!(words(".i mi klama"), vec!["i", "mi", "klama"]);
    }

    #[test]
    fn folds_uppercase_to_lowercase() {
        assert_eq!(words("MI KLAMA"), vec!["mi", "klama"]);
    }

    #[test]
    fn maps_digits_to_cmavo_spellings() {
        assert_eq!(words("2"), vec!["re"]);
        assert_eq!(words("1 0"), vec!["pa", "no"]);
    }

    #[test]
    fn discards_slash_comments() {
        assert_eq!(words("mi /this is english/ klama"), vec!["mi", "klama"]);
    }

    #[test]
    fn an_unterminated_slash_comment_is_silently_consumed_to_end_of_input() {
        assert_eq!(words("mi /this never closes"), vec!["mi"]);
    }

    #[test]
    fn backslash_before_newline_continues_the_word_silently() {
        assert_eq!(words("mi\\\nklama zarci"), vec!["miklama", "zarci"]);
    }

    #[test]
    fn eof_is_remembered_after_first_none() {
        let mut scanner = Scanner::new("mi");
        assert!(scanner.getword().is_some());
        assert_eq!(scanner.getword(), None);
        assert_eq!(scanner.getword(), None);
    }

    #[test]
    fn tracks_line_and_column() {
        let mut scanner = Scanner::new("mi\nklama");
        let first = scanner.getword().unwrap();
        assert_eq!(first.line, 1);
        let second = scanner.getword().unwrap();
        assert_eq!(second.line, 2);
    }
}
