//! Directive Splitter
//!
//! Finds where the leading import declarations of a script fragment end and
//! its executable body begins. Recognition is purely syntactic: it knows the
//! shape of `using` / `global using` / `extern alias` declarations and the
//! trivia (whitespace, comments, preprocessor lines) that may sit between
//! them, nothing more.
//!
//! The header never ends inside an open `#if` block: declarations guarded by
//! a conditional only count once its `#endif` has been consumed.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{MergeError, MergeResult};

/// A fragment cut at its header/body boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSource<'a> {
    /// Import declarations with their leading trivia, trailing whitespace trimmed
    pub header: &'a str,
    /// Everything after the last import declaration
    pub body: &'a str,
    /// Line breaks consumed by the header; the body starts on original
    /// line `header_line_count + 1`
    pub header_line_count: usize,
    /// Characters of the body's first line taken by the header, non-zero
    /// when code follows the last declaration on the same line
    pub body_column: usize,
}

impl<'a> SplitSource<'a> {
    pub fn header_lines(&self) -> Vec<&'a str> {
        self.header.lines().collect()
    }

    pub fn body_lines(&self) -> Vec<&'a str> {
        self.body.lines().collect()
    }

    /// Body lines with the first one indented back to its original column
    pub fn aligned_body_lines(&self) -> Vec<Cow<'a, str>> {
        let mut lines: Vec<Cow<'a, str>> = self.body.lines().map(Cow::Borrowed).collect();
        if let Some(first) = lines.first_mut().filter(|_| self.body_column > 0) {
            *first = Cow::Owned(format!("{}{}", " ".repeat(self.body_column), first));
        }
        lines
    }
}

/// Split `text` into its import header and body.
///
/// A fragment without import declarations yields an empty header and the
/// full text as body. Unterminated comments or declarations are reported as
/// [`MergeError::Parse`] naming `file`.
pub fn split<'a>(text: &'a str, file: &Path) -> MergeResult<SplitSource<'a>> {
    let mut scanner = Scanner::new(text, file);
    let mut boundary = 0;
    let mut depth = 0usize;
    let mut guarded = false;

    loop {
        scanner.skip_blank()?;
        if scanner.peek() == Some('#') && scanner.at_line_start() {
            match scanner.preprocessor_line() {
                Conditional::Open => depth += 1,
                Conditional::Close => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && guarded {
                        boundary = scanner.pos;
                        guarded = false;
                    }
                }
                Conditional::Other => {}
            }
            continue;
        }
        if scanner.at_end() || !scanner.directive()? {
            break;
        }
        scanner.skip_trailing_trivia()?;
        if depth == 0 {
            boundary = scanner.pos;
        } else {
            guarded = true;
        }
    }

    let consumed = &text[..boundary];
    let body_column = consumed
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count());
    Ok(SplitSource {
        header: consumed.trim_end(),
        body: &text[boundary..],
        header_line_count: consumed.matches('\n').count(),
        body_column,
    })
}

/// How a preprocessor line affects conditional nesting
enum Conditional {
    Open,
    Close,
    Other,
}

struct Scanner<'a> {
    text: &'a str,
    file: &'a Path,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, file: &'a Path) -> Self {
        Self { text, file, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn at_line_start(&self) -> bool {
        self.text[..self.pos]
            .rsplit('\n')
            .next()
            .map_or(true, |line| line.chars().all(is_space))
    }

    /// Skip whitespace and comments.
    fn skip_blank(&mut self) -> MergeResult<()> {
        loop {
            match self.peek() {
                Some(c) if is_space(c) => self.bump(),
                Some('/') if self.rest().starts_with("//") => self.skip_line(),
                Some('/') if self.rest().starts_with("/*") => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skip whitespace, comments and preprocessor lines.
    fn skip_trivia(&mut self) -> MergeResult<()> {
        loop {
            self.skip_blank()?;
            if self.peek() == Some('#') && self.at_line_start() {
                self.skip_line();
            } else {
                return Ok(());
            }
        }
    }

    /// Consume a `#` line including its line break.
    fn preprocessor_line(&mut self) -> Conditional {
        let start = self.pos;
        self.bump();
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.bump();
        }
        let kind = match self.ident() {
            Some("if") => Conditional::Open,
            Some("endif") => Conditional::Close,
            _ => Conditional::Other,
        };
        self.pos = start;
        self.skip_line();
        if self.peek() == Some('\n') {
            self.bump();
        }
        kind
    }

    /// Skip trivia on the current line, including its line break.
    fn skip_trailing_trivia(&mut self) -> MergeResult<()> {
        loop {
            match self.peek() {
                Some('\n') => {
                    self.bump();
                    return Ok(());
                }
                Some(c) if is_space(c) => self.bump(),
                Some('/') if self.rest().starts_with("//") => self.skip_line(),
                Some('/') if self.rest().starts_with("/*") => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Advance to (not past) the next line break
    fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.pos += i,
            None => self.pos = self.text.len(),
        }
    }

    fn skip_block_comment(&mut self) -> MergeResult<()> {
        let start = self.pos;
        match self.rest()[2..].find("*/") {
            Some(i) => {
                self.pos += 2 + i + 2;
                Ok(())
            }
            None => Err(self.error_at(start, "unterminated block comment")),
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let name = rest.strip_prefix('@').unwrap_or(rest);
        let prefix = rest.len() - name.len();
        let first = name.chars().next()?;
        if !(first.is_alphabetic() || first == '_') {
            return None;
        }
        let len = name
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(name.len());
        self.pos += prefix + len;
        Some(&rest[..prefix + len])
    }

    fn keyword(&mut self, kw: &str) -> bool {
        let start = self.pos;
        if self.ident() == Some(kw) {
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// Consume one import declaration. Returns `false` and leaves the
    /// position untouched when the next token starts anything else.
    fn directive(&mut self) -> MergeResult<bool> {
        let start = self.pos;
        let matched = match self.ident() {
            Some("global") => {
                self.skip_trivia()?;
                self.keyword("using") && self.using_tail()?
            }
            Some("using") => self.using_tail()?,
            Some("extern") => self.extern_alias_tail()?,
            _ => false,
        };
        if !matched {
            self.pos = start;
        }
        Ok(matched)
    }

    fn using_tail(&mut self) -> MergeResult<bool> {
        self.skip_trivia()?;
        if self.peek() == Some('(') {
            // using statement
            return Ok(false);
        }
        if self.keyword("static") {
            self.skip_trivia()?;
        }
        if self.ident().is_none() {
            if self.at_end() {
                return Err(self.error_here("expected a namespace after 'using'"));
            }
            return Ok(false);
        }

        self.skip_trivia()?;
        if self.peek() == Some('=') {
            self.bump();
            return self.alias_target();
        }

        self.qualified_rest()?;
        self.skip_trivia()?;
        match self.peek() {
            Some(';') => {
                self.bump();
                Ok(true)
            }
            None => Err(self.error_here("expected ';' after using directive")),
            // `using var x = ...` and friends
            Some(_) => Ok(false),
        }
    }

    fn alias_target(&mut self) -> MergeResult<bool> {
        match self.rest().find(';') {
            Some(i) => {
                self.pos += i + 1;
                Ok(true)
            }
            None => Err(self.error_here("expected ';' after using alias")),
        }
    }

    fn extern_alias_tail(&mut self) -> MergeResult<bool> {
        self.skip_trivia()?;
        if !self.keyword("alias") {
            return Ok(false);
        }
        self.skip_trivia()?;
        if self.ident().is_none() {
            if self.at_end() {
                return Err(self.error_here("expected an alias name"));
            }
            return Ok(false);
        }
        self.skip_trivia()?;
        match self.peek() {
            Some(';') => {
                self.bump();
                Ok(true)
            }
            None => Err(self.error_here("expected ';' after extern alias")),
            Some(_) => Ok(false),
        }
    }

    /// Remaining `.Name`, `::Name` and `<...>` parts of a qualified name
    fn qualified_rest(&mut self) -> MergeResult<()> {
        loop {
            self.skip_trivia()?;
            if self.rest().starts_with("::") {
                self.pos += 2;
            } else if self.peek() == Some('.') {
                self.bump();
            } else if self.peek() == Some('<') {
                self.type_arguments()?;
                continue;
            } else {
                return Ok(());
            }
            self.skip_trivia()?;
            if self.ident().is_none() {
                return Ok(());
            }
        }
    }

    fn type_arguments(&mut self) -> MergeResult<()> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '<' => depth += 1,
                '>' => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return Ok(());
                    }
                }
                ';' => return Ok(()),
                _ => {}
            }
            self.bump();
        }
        Err(self.error_at(start, "unterminated type argument list"))
    }

    fn error_here(&self, message: &str) -> MergeError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, pos: usize, message: &str) -> MergeError {
        let before = &self.text[..pos];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |l| l.chars().count())
            + 1;
        MergeError::Parse {
            file: self.file.to_path_buf(),
            line,
            column,
            message: message.to_string(),
        }
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
