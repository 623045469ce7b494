use std::fmt;

/// Top-level error for the termynus pipeline. Each stage contributes its
/// own kind; errors bubble to the entry point without recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum TermynusError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

/// Errors produced while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A string or date literal was opened but never closed.
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A numeric lexeme could not be converted to an integer or float.
    BadNumber {
        /// The offending lexeme.
        lexeme: String,
    },
}

/// Errors produced while turning tokens into a parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A parenthesis or bracket was left open, or closed without a match.
    UnbalancedDelimiters,
    /// The source contained no tokens at all.
    EmptyExpression,
    /// The token stream does not form a well-shaped expression.
    MalformedExpression(String),
}

/// Errors produced while evaluating a parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An identifier was not bound in the environment, the constants
    /// table, or the built-in registry.
    UndefinedIdentifier { name: String },
    /// An operator was applied to operand kinds it does not support.
    InvalidOperation { message: String },
    /// A built-in received an operand of the wrong kind.
    TypeError { message: String },
    /// A function was called with the wrong number of arguments.
    InvalidArgumentCount {
        name: String,
        expected: String,
        found: usize,
    },
    /// Integer or float division (or modulo) by zero.
    DivisionByZero,
    /// A list or string index fell outside the valid range.
    IndexOutOfRange { index: i64, len: usize },
}

impl fmt::Display for TermynusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermynusError::Lex(err) => write!(f, "Lex error: {}", err),
            TermynusError::Parse(err) => write!(f, "Parse error: {}", err),
            TermynusError::Eval(err) => write!(f, "Evaluation error: {}", err),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString { position } => {
                write!(f, "unterminated string literal starting at byte {}", position)
            }
            LexError::BadNumber { lexeme } => write!(f, "malformed number '{}'", lexeme),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnbalancedDelimiters => {
                write!(f, "unbalanced parentheses or brackets")
            }
            ParseError::EmptyExpression => write!(f, "empty expression"),
            ParseError::MalformedExpression(detail) => {
                write!(f, "malformed expression: {}", detail)
            }
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedIdentifier { name } => {
                write!(f, "undefined identifier '{}'", name)
            }
            EvalError::InvalidOperation { message } => {
                write!(f, "invalid operation: {}", message)
            }
            EvalError::TypeError { message } => write!(f, "type error: {}", message),
            EvalError::InvalidArgumentCount {
                name,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} argument(s), got {}",
                name, expected, found
            ),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for TermynusError {}
impl std::error::Error for LexError {}
impl std::error::Error for ParseError {}
impl std::error::Error for EvalError {}

impl From<LexError> for TermynusError {
    fn from(err: LexError) -> Self {
        TermynusError::Lex(err)
    }
}

impl From<ParseError> for TermynusError {
    fn from(err: ParseError) -> Self {
        TermynusError::Parse(err)
    }
}

impl From<EvalError> for TermynusError {
    fn from(err: EvalError) -> Self {
        TermynusError::Eval(err)
    }
}
