//! E2xxx: 代码生成阶段的错误码

use super::{ErrorCategory, ErrorCodeDefinition};

pub static E2XXX: &[ErrorCodeDefinition] = &[
    ErrorCodeDefinition {
        code: "E2001",
        category: ErrorCategory::Codegen,
        title: "wrong number of top-level expressions",
        explanation: "A formula must contain exactly one expression.",
    },
    ErrorCodeDefinition {
        code: "E2002",
        category: ErrorCategory::Codegen,
        title: "unknown symbol",
        explanation: "Available symbols: `z` (the plane coordinate), `i`, `pi`, `tau` and `e`.",
    },
    ErrorCodeDefinition {
        code: "E2003",
        category: ErrorCategory::Codegen,
        title: "unknown function",
        explanation: "Available functions: sqrt, cbrt, exp, ln, log, log2, log10, sin, cos, tan,\nsinh, cosh, tanh, asin, acos, atan, asinh, acosh, atanh, abs, arg, Re, Im.",
    },
    ErrorCodeDefinition {
        code: "E2004",
        category: ErrorCategory::Codegen,
        title: "wrong number of arguments",
        explanation: "Every function takes one argument except `log(value, base)`, which takes two.",
    },
    ErrorCodeDefinition {
        code: "E2005",
        category: ErrorCategory::Codegen,
        title: "malformed expression tree",
        explanation: "The tree handed to the code generator contains a root marker below its top.\nThis indicates a bug in the tool producing the tree.",
    },
];
