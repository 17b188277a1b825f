//! E1xxx: 语法分析阶段的错误码

use super::{ErrorCategory, ErrorCodeDefinition};

pub static E1XXX: &[ErrorCodeDefinition] = &[
    ErrorCodeDefinition {
        code: "E1001",
        category: ErrorCategory::Parser,
        title: "unexpected token",
        explanation: "The token cannot follow what came before it, for example two operators\nin a row or a value directly after another value.",
    },
    ErrorCodeDefinition {
        code: "E1002",
        category: ErrorCategory::Parser,
        title: "unknown operator",
        explanation: "Only `+ - * / ^` are binary operators.",
    },
    ErrorCodeDefinition {
        code: "E1003",
        category: ErrorCategory::Parser,
        title: "unexpected end of tokens",
        explanation: "The token stream ended before the expression was complete.",
    },
    ErrorCodeDefinition {
        code: "E1004",
        category: ErrorCategory::Parser,
        title: "unclosed scope",
        explanation: "The token stream ended with a group or argument list still open.",
    },
];
