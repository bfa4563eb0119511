//! SQL tokenizer implementation.

use super::{Keyword, LexError, Lexeme, LexemeKind};

/// Operators made of three characters, matched before shorter ones.
const THREE_CHAR_OPERATORS: [&str; 1] = ["->>"];

/// Operators made of two characters.
const TWO_CHAR_OPERATORS: [&str; 9] = ["<>", "<=", ">=", "!=", "||", "::", "<<", ">>", "->"];

/// A lexer that turns SQL text into lexemes.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current lexeme.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn text(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    fn lexeme(&self, kind: LexemeKind, text: impl Into<String>) -> Lexeme {
        Lexeme::new(kind, text, self.start)
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(message, self.start)
    }

    fn is_word_start(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Scans `-- ...` up to (not including) the end of line.
    fn scan_line_comment(&mut self) -> Lexeme {
        self.advance(); // -
        self.advance(); // -
        let body_start = self.pos;
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        let body = self.input[body_start..self.pos].trim();
        self.lexeme(LexemeKind::Comment, body)
    }

    /// Scans a flat `/* ... */` comment.
    fn scan_block_comment(&mut self) -> Result<Lexeme, LexError> {
        self.advance(); // /
        self.advance(); // *
        let body_start = self.pos;
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    let body = self.input[body_start..self.pos - 1].trim();
                    self.advance();
                    return Ok(self.lexeme(LexemeKind::Comment, body));
                }
                Some(_) => {}
                None => return Err(self.error("Unterminated block comment")),
            }
        }
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> Lexeme {
        while self.peek().is_some_and(Self::is_word_char) {
            self.advance();
        }
        let text = self.text();
        match Keyword::from_str(text) {
            Some(keyword) => self.lexeme(LexemeKind::Keyword(keyword), text),
            None => self.lexeme(LexemeKind::Identifier, text),
        }
    }

    /// Scans text enclosed by `open`/`close`, where a doubled `close`
    /// stands for itself.
    fn scan_enclosed(&mut self, close: char, what: &str) -> Result<String, LexError> {
        self.advance(); // opening delimiter
        let mut value = String::new();
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if self.peek() == Some(close) {
                        value.push(close);
                        self.advance();
                    } else {
                        return Ok(value);
                    }
                }
                Some(c) => value.push(c),
                None => return Err(self.error(format!("Unterminated {what}"))),
            }
        }
    }

    /// Scans an integer or decimal literal, keeping its source spelling.
    fn scan_number(&mut self) -> Lexeme {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // `1.5`, and `1.` unless a word follows the dot
        if self.peek() == Some('.')
            && !self
                .peek_next()
                .is_some_and(|c| c == '.' || Self::is_word_start(c))
        {
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let rest = &self.input[self.pos + 1..];
            let mut chars = rest.chars();
            let has_exponent = match chars.next() {
                Some('+' | '-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if has_exponent {
                self.advance(); // e/E
                if self.peek().is_some_and(|c| c == '+' || c == '-') {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        self.lexeme(LexemeKind::NumericLiteral, self.text())
    }

    /// Scans what follows a `$`: a positional parameter (`$1`), a
    /// dollar-quoted string (`$$..$$`, `$tag$..$tag$`) or a named
    /// parameter (`$name`).
    fn scan_dollar(&mut self) -> Result<Lexeme, LexError> {
        self.advance(); // $
        match self.peek() {
            Some(c) if c.is_ascii_digit() => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                Ok(self.lexeme(LexemeKind::Parameter, self.text()))
            }
            Some('$') => {
                self.advance();
                self.scan_dollar_body("$$")
            }
            Some(c) if Self::is_word_start(c) => {
                while self
                    .peek()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
                {
                    self.advance();
                }
                if self.peek() == Some('$') {
                    self.advance();
                    let delimiter = self.text().to_string();
                    self.scan_dollar_body(&delimiter)
                } else {
                    Ok(self.lexeme(LexemeKind::Parameter, self.text()))
                }
            }
            _ => Err(self.error("Unexpected character: $")),
        }
    }

    fn scan_dollar_body(&mut self, delimiter: &str) -> Result<Lexeme, LexError> {
        let rest = &self.input[self.pos..];
        match rest.find(delimiter) {
            Some(offset) => {
                let body = &rest[..offset];
                self.pos += offset + delimiter.len();
                Ok(self.lexeme(LexemeKind::StringLiteral, body))
            }
            None => Err(self.error("Unterminated dollar-quoted string")),
        }
    }

    /// Scans `:name` or `@name`.
    fn scan_prefixed_parameter(&mut self) -> Result<Lexeme, LexError> {
        let Some(prefix) = self.advance() else {
            return Err(self.error("Unexpected end of input"));
        };
        if !self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(self.error(format!("Unexpected character: {prefix}")));
        }
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }
        Ok(self.lexeme(LexemeKind::Parameter, self.text()))
    }

    /// Scans an operator, preferring the longest match.
    fn scan_operator(&mut self) -> Result<Lexeme, LexError> {
        let rest = &self.input[self.pos..];
        let matched = THREE_CHAR_OPERATORS
            .iter()
            .chain(TWO_CHAR_OPERATORS.iter())
            .find(|op| rest.starts_with(**op));
        if let Some(op) = matched {
            self.pos += op.len();
            return Ok(self.lexeme(LexemeKind::Operator, *op));
        }

        match self.advance() {
            Some(c @ ('+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '&' | '|' | '~' | '^')) => {
                Ok(self.lexeme(LexemeKind::Operator, c.to_string()))
            }
            Some(c) => Err(self.error(format!("Unexpected character: {c}"))),
            None => Err(self.error("Unexpected end of input")),
        }
    }

    /// Scans the next lexeme, returning `None` at end of input.
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme>, LexError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let lexeme = match c {
            '-' if self.peek_next() == Some('-') => self.scan_line_comment(),
            '/' if self.peek_next() == Some('*') => self.scan_block_comment()?,

            '(' | ')' | ',' | ';' | '.'
                if !(c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit())) =>
            {
                self.advance();
                self.lexeme(LexemeKind::Punctuation, c.to_string())
            }

            '\'' => {
                let value = self.scan_enclosed('\'', "string literal")?;
                self.lexeme(LexemeKind::StringLiteral, value)
            }
            '"' => {
                let value = self.scan_enclosed('"', "quoted identifier")?;
                self.lexeme(LexemeKind::Identifier, value)
            }
            '`' => {
                let value = self.scan_enclosed('`', "quoted identifier")?;
                self.lexeme(LexemeKind::Identifier, value)
            }
            '[' => {
                let value = self.scan_enclosed(']', "bracketed identifier")?;
                self.lexeme(LexemeKind::Identifier, value)
            }

            '?' => {
                self.advance();
                self.lexeme(LexemeKind::Parameter, "?")
            }
            '$' => self.scan_dollar()?,
            ':' if self.peek_next() == Some(':') => self.scan_operator()?,
            ':' | '@' => self.scan_prefixed_parameter()?,

            c if c.is_ascii_digit() || c == '.' => self.scan_number(),
            c if Self::is_word_start(c) => self.scan_word(),

            _ => self.scan_operator()?,
        };

        Ok(Some(lexeme))
    }

    /// Tokenizes the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();
        while let Some(lexeme) = self.next_lexeme()? {
            lexemes.push(lexeme);
        }
        tracing::trace!(count = lexemes.len(), "tokenized sql");
        Ok(lexemes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Lexeme> {
        Lexer::new(input)
            .tokenize()
            .unwrap_or_else(|e| panic!("tokenize failed: {e}"))
    }

    fn kinds(input: &str) -> Vec<LexemeKind> {
        tokenize(input).into_iter().map(|l| l.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            kinds("select FROM wHeRe"),
            vec![
                LexemeKind::Keyword(Keyword::Select),
                LexemeKind::Keyword(Keyword::From),
                LexemeKind::Keyword(Keyword::Where),
            ]
        );
        assert_eq!(texts("wHeRe"), vec!["wHeRe"]);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("foo bar_baz _qux"),
            vec![LexemeKind::Identifier; 3]
        );
    }

    #[test]
    fn test_quoted_identifiers() {
        let lexemes = tokenize("\"column name\" `another` [third] \"say \"\"hi\"\"\"");
        assert!(lexemes.iter().all(|l| l.kind == LexemeKind::Identifier));
        assert_eq!(
            lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["column name", "another", "third", "say \"hi\""]
        );
    }

    #[test]
    fn test_quoted_keyword_is_identifier() {
        assert_eq!(kinds("\"select\""), vec![LexemeKind::Identifier]);
    }

    #[test]
    fn test_numbers() {
        let lexemes = tokenize("42 3.14 .5 1e10 2.5e-3");
        assert!(lexemes.iter().all(|l| l.kind == LexemeKind::NumericLiteral));
        assert_eq!(
            lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["42", "3.14", ".5", "1e10", "2.5e-3"]
        );
    }

    #[test]
    fn test_trailing_dot_decimal() {
        assert_eq!(texts("1. 2.)"), vec!["1.", "2.", ")"]);
        assert_eq!(kinds("1.")[0], LexemeKind::NumericLiteral);
        assert_eq!(texts("1.x"), vec!["1", ".", "x"]);
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(texts("1end"), vec!["1", "end"]);
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let lexemes = tokenize("'it''s'");
        assert_eq!(lexemes.len(), 1);
        assert_eq!(lexemes[0].kind, LexemeKind::StringLiteral);
        assert_eq!(lexemes[0].text, "it's");
    }

    #[test]
    fn test_dollar_quoted_strings() {
        let lexemes = tokenize("$$a 'b'$$ $fn$x$y$fn$");
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[0].kind, LexemeKind::StringLiteral);
        assert_eq!(lexemes[0].text, "a 'b'");
        assert_eq!(lexemes[1].text, "x$y");
    }

    #[test]
    fn test_comments() {
        let lexemes = tokenize("SELECT -- trailing note\n/* block\n body */ 1");
        assert_eq!(lexemes.len(), 4);
        assert_eq!(lexemes[1].kind, LexemeKind::Comment);
        assert_eq!(lexemes[1].text, "trailing note");
        assert_eq!(lexemes[2].kind, LexemeKind::Comment);
        assert_eq!(lexemes[2].text, "block\n body");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            texts("+ - * / % = != <> < <= > >= || :: -> ->> ^ ~ & | << >>"),
            vec![
                "+", "-", "*", "/", "%", "=", "!=", "<>", "<", "<=", ">", ">=", "||", "::", "->",
                "->>", "^", "~", "&", "|", "<<", ">>",
            ]
        );
        assert!(kinds("<= ::").iter().all(|k| *k == LexemeKind::Operator));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(kinds("( ) , ; ."), vec![LexemeKind::Punctuation; 5]);
    }

    #[test]
    fn test_parameters() {
        let lexemes = tokenize("? $1 :name @p_2 $named");
        assert!(lexemes.iter().all(|l| l.kind == LexemeKind::Parameter));
        assert_eq!(
            lexemes.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["?", "$1", ":name", "@p_2", "$named"]
        );
    }

    #[test]
    fn test_cast_is_not_a_parameter() {
        assert_eq!(texts("a::int"), vec!["a", "::", "int"]);
    }

    #[test]
    fn test_positions() {
        let lexemes = tokenize("SELECT id");
        assert_eq!(lexemes[0].position, 0);
        assert_eq!(lexemes[1].position, 7);
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("SELECT 'abc").tokenize().unwrap_err();
        assert_eq!(err.message, "Unterminated string literal");
        assert_eq!(err.position, 7);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("SELECT /* open").tokenize().unwrap_err();
        assert_eq!(err.message, "Unterminated block comment");
        assert_eq!(err.position, 7);
    }

    #[test]
    fn test_invalid_character() {
        let err = Lexer::new("SELECT #").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character: # at position 7");
    }
}
