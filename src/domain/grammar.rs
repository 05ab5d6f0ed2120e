//! Character cursor shared by the fixed-width FIX grammars.

use crate::domain::error::ParseError;

pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    pub(crate) fn consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_char(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(ParseError::new(
                format!("expected '{}', found '{}'", expected, ch),
                self.pos,
            )),
            None => Err(ParseError::new(
                format!("expected '{}', found end of input", expected),
                self.pos,
            )),
        }
    }

    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(ch) => Err(ParseError::new(
                format!("unexpected trailing '{}'", ch),
                self.pos,
            )),
        }
    }

    /// Read exactly `width` ASCII digits.
    pub(crate) fn fixed_digits(&mut self, width: usize, what: &str) -> Result<u32, ParseError> {
        let start = self.pos;
        let mut value: u32 = 0;
        for _ in 0..width {
            match self.peek() {
                Some(ch) if ch.is_ascii_digit() => {
                    value = value * 10 + ch.to_digit(10).unwrap_or(0);
                    self.advance();
                }
                Some(ch) => {
                    return Err(ParseError::new(
                        format!("expected {width}-digit {what}, found '{ch}'"),
                        self.pos,
                    ));
                }
                None => {
                    return Err(ParseError::new(
                        format!("expected {width}-digit {what}, found end of input"),
                        start,
                    ));
                }
            }
        }
        Ok(value)
    }

    /// Read between `min` and `max` ASCII digits, returning the digits read.
    pub(crate) fn digit_run(
        &mut self,
        min: usize,
        max: usize,
        what: &str,
    ) -> Result<&'a str, ParseError> {
        let start = self.pos;
        while self.pos - start < max && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.input[start..self.pos];
        if digits.len() < min {
            return Err(ParseError::new(format!("expected {what}"), start));
        }
        Ok(digits)
    }
}
