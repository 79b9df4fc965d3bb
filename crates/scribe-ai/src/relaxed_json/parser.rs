//! Recursive-descent parser for the relaxed JSON subset.
//!
//! Accepted on top of strict JSON:
//! - unquoted identifier and numeric keys (`{value: 1}`, `{2019: 1}`)
//! - single-quoted strings (`'A'`)
//! - trailing commas in objects and arrays
//! - `//` line and `/* */` block comments
//! - leading `+`, leading or trailing decimal point, hex integers

use serde_json::{Map, Number, Value};

use super::RelaxedJsonError;

const MAX_DEPTH: usize = 128;

/// Parse relaxed JSON text into a value. The whole input must be consumed.
pub fn parse(text: &str) -> Result<Value, RelaxedJsonError> {
    let mut parser = Parser::new(text);
    parser.skip_trivia()?;
    let value = parser.parse_value(0)?;
    parser.skip_trivia()?;
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(parser.error(format!("unexpected trailing character {c:?}"))),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> RelaxedJsonError {
        RelaxedJsonError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), RelaxedJsonError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected {expected:?}, found {c:?}"))),
            None => Err(self.error(format!("expected {expected:?}, found end of input"))),
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), RelaxedJsonError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() || c == '\u{feff}' => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error("unterminated block comment")),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, RelaxedJsonError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        match self.peek() {
            Some('{') => self.parse_object(depth),
            Some('[') => self.parse_array(depth),
            Some(q @ ('"' | '\'')) => self.parse_string(q).map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number()
            }
            Some(c) if is_ident_start(c) => {
                let word = self.parse_identifier();
                match word.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    "Infinity" | "NaN" => Err(self.error("non-finite numbers are not supported")),
                    _ => Err(self.error(format!("unexpected bare word `{word}`"))),
                }
            }
            Some(c) => Err(self.error(format!("unexpected character {c:?}"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, RelaxedJsonError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }

            let key = match self.peek() {
                Some(q @ ('"' | '\'')) => self.parse_string(q)?,
                Some(c) if is_ident_start(c) || c.is_ascii_digit() => self.parse_identifier(),
                Some(c) => return Err(self.error(format!("expected object key, found {c:?}"))),
                None => return Err(self.error("unterminated object")),
            };

            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                Some(c) => return Err(self.error(format!("expected ',' or '}}', found {c:?}"))),
                None => return Err(self.error("unterminated object")),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, RelaxedJsonError> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Value::Array(items));
            }

            items.push(self.parse_value(depth + 1)?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                Some(c) => return Err(self.error(format!("expected ',' or ']', found {c:?}"))),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    fn parse_identifier(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            word.push(c);
            self.bump();
        }
        word
    }

    fn parse_string(&mut self, quote: char) -> Result<String, RelaxedJsonError> {
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), RelaxedJsonError> {
        match self.bump() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            // Line continuation.
            Some('\n') => {}
            Some('u') => out.push(self.parse_unicode_escape()?),
            Some(c) => out.push(c),
            None => return Err(self.error("unterminated escape sequence")),
        }
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u32, RelaxedJsonError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid \\u escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_unicode_escape(&mut self) -> Result<char, RelaxedJsonError> {
        let high = self.parse_hex4()?;
        let code = if (0xD800..0xDC00).contains(&high) {
            if self.bump() != Some('\\') || self.bump() != Some('u') {
                return Err(self.error("unpaired surrogate in \\u escape"));
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(self.error("invalid low surrogate in \\u escape"));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };
        char::from_u32(code).ok_or_else(|| self.error("invalid \\u escape"))
    }

    fn parse_number(&mut self) -> Result<Value, RelaxedJsonError> {
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };

        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x' | 'X')) {
            return self.parse_hex(negative);
        }
        if matches!(self.peek(), Some('I' | 'N')) {
            return Err(self.error("non-finite numbers are not supported"));
        }

        let int_part = self.take_digits();
        let mut frac_part = String::new();
        if self.peek() == Some('.') {
            self.bump();
            frac_part = self.take_digits();
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(self.error("invalid number"));
        }

        let mut exponent = String::new();
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.bump();
                exponent.push(sign);
            }
            let digits = self.take_digits();
            if digits.is_empty() {
                return Err(self.error("invalid number exponent"));
            }
            exponent.push_str(&digits);
        }

        let mut literal = String::new();
        if negative {
            literal.push('-');
        }
        literal.push_str(if int_part.is_empty() { "0" } else { &int_part });

        if frac_part.is_empty() && exponent.is_empty() {
            if let Ok(n) = literal.parse::<i64>() {
                return Ok(Value::from(n));
            }
            if let Ok(n) = literal.parse::<u64>() {
                return Ok(Value::from(n));
            }
        }

        if !frac_part.is_empty() {
            literal.push('.');
            literal.push_str(&frac_part);
        }
        if !exponent.is_empty() {
            literal.push('e');
            literal.push_str(&exponent);
        }

        literal
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.error(format!("number out of range: {literal}")))
    }

    fn parse_hex(&mut self, negative: bool) -> Result<Value, RelaxedJsonError> {
        self.bump();
        self.bump();
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_hexdigit() {
                break;
            }
            digits.push(c);
            self.bump();
        }
        let magnitude = i64::from_str_radix(&digits, 16)
            .map_err(|_| self.error("invalid hexadecimal number"))?;
        Ok(Value::from(if negative { -magnitude } else { magnitude }))
    }

    fn take_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.bump();
        }
        digits
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
