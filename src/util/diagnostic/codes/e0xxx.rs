//! E0xxx: 词法分析阶段的错误码

use super::{ErrorCategory, ErrorCodeDefinition};

pub static E0XXX: &[ErrorCodeDefinition] = &[
    ErrorCodeDefinition {
        code: "E0001",
        category: ErrorCategory::Lexer,
        title: "unmatched closing parenthesis",
        explanation: "A `)` appeared with no open `(` or argument list to close.\nRemove it or add the missing `(`.",
    },
    ErrorCodeDefinition {
        code: "E0002",
        category: ErrorCategory::Lexer,
        title: "misplaced decimal point",
        explanation: "A `.` must sit between digits of a single number, as in `2.5`.\nForms like `.5`, `z.` or `1.2.3` are rejected.",
    },
    ErrorCodeDefinition {
        code: "E0003",
        category: ErrorCategory::Lexer,
        title: "comma outside argument list",
        explanation: "Commas only separate function arguments, as in `log(z, 2)`.\nA comma inside plain parentheses or at the top level is an error.",
    },
    ErrorCodeDefinition {
        code: "E0004",
        category: ErrorCategory::Lexer,
        title: "incomplete argument",
        explanation: "The argument before a comma ends in an operator or a sign, as in `log(2*, 3)`.",
    },
    ErrorCodeDefinition {
        code: "E0005",
        category: ErrorCategory::Lexer,
        title: "dangling minus sign",
        explanation: "A `-` where a value is expected starts a negative number and must be followed by a digit.\nWrite `-1*z` instead of `-z`.",
    },
    ErrorCodeDefinition {
        code: "E0006",
        category: ErrorCategory::Lexer,
        title: "unexpected character",
        explanation: "The character is not valid at this position: only digits, `.`, ASCII letters, `_`,\n`+ - * / ^`, parentheses, commas and spaces are accepted, each in specific places.",
    },
    ErrorCodeDefinition {
        code: "E0007",
        category: ErrorCategory::Lexer,
        title: "incomplete expression",
        explanation: "The formula ended where a number, variable or function name was expected,\nfor example after a trailing operator (`2+`) or in an empty formula.",
    },
    ErrorCodeDefinition {
        code: "E0008",
        category: ErrorCategory::Lexer,
        title: "unclosed group",
        explanation: "The formula ended while a `(` or a function argument list was still open.",
    },
];
