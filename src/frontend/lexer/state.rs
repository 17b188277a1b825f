//! Lexer state management
//! States, character classes and closing expectations for the tokenizer

use crate::frontend::lexer::tokens::TokenKind;

/// Lexer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Start of input, after an operator, `(` or `,`
    ExpectValue,
    /// A leading `-` was read where a value was expected
    AfterSign,
    /// Accumulating a variable or function name
    InIdentifier,
    /// Accumulating the integer part of a number
    InInteger,
    /// Accumulating the digits after a decimal point
    InDecimal,
    /// A complete value (or closed group) was read
    AfterValue,
}

/// Classification of a single input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Space,
    Digit,
    Letter,
    Underscore,
    Dot,
    Comma,
    Minus,
    /// `+ * / ^`
    Operator,
    OpenParen,
    CloseParen,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            ' ' | '\t' => CharClass::Space,
            '0'..='9' => CharClass::Digit,
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '_' => CharClass::Underscore,
            '.' => CharClass::Dot,
            ',' => CharClass::Comma,
            '-' => CharClass::Minus,
            '+' | '*' | '/' | '^' => CharClass::Operator,
            '(' => CharClass::OpenParen,
            ')' => CharClass::CloseParen,
            _ => CharClass::Other,
        }
    }

    /// Characters that may continue an identifier after its first letter
    #[inline]
    pub fn continues_identifier(self) -> bool {
        matches!(
            self,
            CharClass::Letter | CharClass::Digit | CharClass::Underscore
        )
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(self, CharClass::Operator | CharClass::Minus)
    }
}

/// What a `)` closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    Parenthesis,
    FunctionArgs,
}

impl Closing {
    /// Token emitted when this group closes
    pub fn token_kind(self) -> TokenKind {
        match self {
            Closing::Parenthesis => TokenKind::ParenthesisClose,
            Closing::FunctionArgs => TokenKind::FunctionArgsEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classes() {
        assert_eq!(CharClass::of(' '), CharClass::Space);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('Q'), CharClass::Letter);
        assert_eq!(CharClass::of('-'), CharClass::Minus);
        assert_eq!(CharClass::of('^'), CharClass::Operator);
        assert_eq!(CharClass::of('%'), CharClass::Other);
        assert_eq!(CharClass::of('é'), CharClass::Other);
    }

    #[test]
    fn test_closing_token_kind() {
        assert_eq!(
            Closing::Parenthesis.token_kind(),
            TokenKind::ParenthesisClose
        );
        assert_eq!(
            Closing::FunctionArgs.token_kind(),
            TokenKind::FunctionArgsEnd
        );
    }
}
