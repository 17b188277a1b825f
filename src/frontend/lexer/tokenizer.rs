//! Tokenizer implementation
//! A character-at-a-time state machine over (LexState, CharClass)

use super::state::{CharClass, Closing, LexState};
use crate::frontend::lexer::tokens::*;
use crate::util::span::Span;

/// Main lexer structure
pub struct Lexer<'a> {
    source: &'a str,
    state: LexState,
    /// What each currently open group expects to be closed by
    closing: Vec<Closing>,
    /// Text of the NUMBER/SYMBOL token being accumulated
    buffer: String,
    buffer_start: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            state: LexState::ExpectValue,
            closing: Vec::new(),
            buffer: String::new(),
            buffer_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Number of groups still waiting for their `)`
    pub fn open_groups(&self) -> usize {
        self.closing.len()
    }

    /// Consume the whole input
    pub fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut length = 0;
        for (index, c) in self.source.chars().enumerate() {
            self.step(index, c)?;
            length = index + 1;
        }
        self.finish(length)?;
        Ok(self.tokens)
    }

    /// Feed a single character
    pub fn step(
        &mut self,
        index: usize,
        c: char,
    ) -> Result<(), LexError> {
        use CharClass as C;
        use LexState::*;

        let class = CharClass::of(c);
        let fail = |reason| LexError::new(Some(c), index, reason);

        match class {
            C::CloseParen if self.closing.is_empty() => {
                return Err(fail(LexErrorReason::UnmatchedClosingParenthesis));
            }
            C::Comma if self.closing.last() != Some(&Closing::FunctionArgs) => {
                return Err(fail(LexErrorReason::CommaOutsideArgumentList));
            }
            _ => {}
        }

        self.state = match (self.state, class) {
            // whitespace only terminates tokens
            (ExpectValue | AfterValue, C::Space) => self.state,
            (InInteger | InDecimal, C::Space) => {
                self.flush(TokenKind::Number, index);
                AfterValue
            }
            (InIdentifier, C::Space) => {
                self.flush(TokenKind::Symbol, index);
                AfterValue
            }

            (ExpectValue, C::Digit) => {
                self.begin(index, c);
                InInteger
            }
            (AfterSign | InInteger, C::Digit) => {
                self.buffer.push(c);
                InInteger
            }
            (InDecimal, C::Digit) => {
                self.buffer.push(c);
                InDecimal
            }
            (InIdentifier, C::Digit | C::Letter | C::Underscore) => {
                self.buffer.push(c);
                InIdentifier
            }
            (AfterValue, C::Digit) => return Err(fail(LexErrorReason::InvalidAfterValue)),

            (ExpectValue, C::Letter) => {
                self.begin(index, c);
                InIdentifier
            }
            (InInteger | InDecimal, C::Letter) => {
                self.flush(TokenKind::Number, index);
                self.implicit_multiply(index);
                self.begin(index, c);
                InIdentifier
            }
            (AfterValue, C::Letter) => {
                self.implicit_multiply(index);
                self.begin(index, c);
                InIdentifier
            }

            (InInteger, C::Dot) => {
                self.buffer.push(c);
                InDecimal
            }
            (ExpectValue | InDecimal | InIdentifier | AfterValue, C::Dot) => {
                return Err(fail(LexErrorReason::MisplacedDecimalPoint));
            }

            // the innermost group is known to be an argument list here
            (ExpectValue, C::Comma) => return Err(fail(LexErrorReason::IncompleteArgument)),
            (InInteger | InDecimal, C::Comma) => {
                self.flush(TokenKind::Number, index);
                self.push(TokenKind::ArgSeparator, ",", Span::at(index));
                ExpectValue
            }
            (InIdentifier, C::Comma) => {
                self.flush(TokenKind::Symbol, index);
                self.push(TokenKind::ArgSeparator, ",", Span::at(index));
                ExpectValue
            }
            (AfterValue, C::Comma) => {
                self.push(TokenKind::ArgSeparator, ",", Span::at(index));
                ExpectValue
            }

            // a minus where a value is expected is the sign of a literal
            (ExpectValue, C::Minus) => {
                self.begin(index, c);
                AfterSign
            }
            (ExpectValue, C::Operator) => return Err(fail(LexErrorReason::ExpectedValue)),
            (InInteger | InDecimal, C::Minus | C::Operator) => {
                self.flush(TokenKind::Number, index);
                self.push(TokenKind::Operator, c.to_string(), Span::at(index));
                ExpectValue
            }
            (InIdentifier, C::Minus | C::Operator) => {
                self.flush(TokenKind::Symbol, index);
                self.push(TokenKind::Operator, c.to_string(), Span::at(index));
                ExpectValue
            }
            (AfterValue, C::Minus | C::Operator) => {
                self.push(TokenKind::Operator, c.to_string(), Span::at(index));
                ExpectValue
            }

            (ExpectValue, C::OpenParen) => {
                self.open(Closing::Parenthesis, index);
                ExpectValue
            }
            (InInteger | InDecimal, C::OpenParen) => {
                self.flush(TokenKind::Number, index);
                self.implicit_multiply(index);
                self.open(Closing::Parenthesis, index);
                ExpectValue
            }
            (InIdentifier, C::OpenParen) => {
                self.flush(TokenKind::FunctionName, index);
                self.open(Closing::FunctionArgs, index);
                ExpectValue
            }
            (AfterValue, C::OpenParen) => {
                self.implicit_multiply(index);
                self.open(Closing::Parenthesis, index);
                ExpectValue
            }

            (ExpectValue, C::CloseParen) => return Err(fail(LexErrorReason::ExpectedValue)),
            (InInteger | InDecimal, C::CloseParen) => {
                self.flush(TokenKind::Number, index);
                self.close(index, c)?;
                AfterValue
            }
            (InIdentifier, C::CloseParen) => {
                self.flush(TokenKind::Symbol, index);
                self.close(index, c)?;
                AfterValue
            }
            (AfterValue, C::CloseParen) => {
                self.close(index, c)?;
                AfterValue
            }

            (AfterSign, _) => return Err(fail(LexErrorReason::DanglingSign)),
            (ExpectValue, C::Underscore | C::Other) => {
                return Err(fail(LexErrorReason::ExpectedValue));
            }
            (InInteger | InDecimal, C::Underscore | C::Other) => {
                return Err(fail(LexErrorReason::InvalidInNumber));
            }
            (InIdentifier, C::Other) => return Err(fail(LexErrorReason::InvalidInIdentifier)),
            (AfterValue, C::Underscore | C::Other) => {
                return Err(fail(LexErrorReason::InvalidAfterValue));
            }
        };
        Ok(())
    }

    /// End-of-input finalization
    pub fn finish(
        &mut self,
        length: usize,
    ) -> Result<(), LexError> {
        match self.state {
            LexState::ExpectValue => {
                return Err(LexError::new(
                    None,
                    length,
                    LexErrorReason::IncompleteExpression,
                ));
            }
            LexState::AfterSign => {
                return Err(LexError::new(None, length, LexErrorReason::DanglingSign));
            }
            LexState::InInteger | LexState::InDecimal => self.flush(TokenKind::Number, length),
            LexState::InIdentifier => self.flush(TokenKind::Symbol, length),
            LexState::AfterValue => {}
        }
        self.state = LexState::AfterValue;

        if !self.closing.is_empty() {
            return Err(LexError::new(
                None,
                length,
                LexErrorReason::UnclosedGroup(self.closing.len()),
            ));
        }
        Ok(())
    }

    fn begin(
        &mut self,
        index: usize,
        c: char,
    ) {
        self.buffer.clear();
        self.buffer.push(c);
        self.buffer_start = index;
    }

    /// Emit the accumulated buffer as a token ending at `end`
    fn flush(
        &mut self,
        kind: TokenKind,
        end: usize,
    ) {
        let text = std::mem::take(&mut self.buffer);
        let span = Span::new(self.buffer_start, end);
        self.push(kind, text, span);
    }

    fn implicit_multiply(&mut self, index: usize) {
        self.push(TokenKind::ImplicitMultiply, "", Span::empty(index));
    }

    fn open(
        &mut self,
        closing: Closing,
        index: usize,
    ) {
        self.closing.push(closing);
        let kind = match closing {
            Closing::Parenthesis => TokenKind::ParenthesisOpen,
            Closing::FunctionArgs => TokenKind::FunctionArgsStart,
        };
        self.push(kind, "(", Span::at(index));
    }

    fn close(
        &mut self,
        index: usize,
        c: char,
    ) -> Result<(), LexError> {
        let Some(closing) = self.closing.pop() else {
            return Err(LexError::new(
                Some(c),
                index,
                LexErrorReason::UnmatchedClosingParenthesis,
            ));
        };
        self.push(closing.token_kind(), ")", Span::at(index));
        Ok(())
    }

    fn push(
        &mut self,
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) {
        let token = Token::new(kind, text, span);
        tracing::trace!("token {} at {}", token.describe(), token.span);
        self.tokens.push(token);
    }
}
