//! 错误码注册表
//!
//! Every error the compiler can report has a stable code here. The CLI's
//! `explain` command prints the entry.

pub mod e0xxx;
pub mod e1xxx;
pub mod e2xxx;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Lexer,   // E0xxx
    Parser,  // E1xxx
    Codegen, // E2xxx
}

impl fmt::Display for ErrorCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::Codegen => write!(f, "Code generation"),
        }
    }
}

/// 错误码定义
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorCodeDefinition {
    /// e.g. "E1001"
    pub code: &'static str,
    pub category: ErrorCategory,
    /// One-line summary
    pub title: &'static str,
    /// What triggers it and how to fix the formula
    pub explanation: &'static str,
}

static ERROR_CODES: Lazy<Vec<ErrorCodeDefinition>> = Lazy::new(|| {
    let mut codes: Vec<ErrorCodeDefinition> = Vec::new();
    codes.extend_from_slice(e0xxx::E0XXX);
    codes.extend_from_slice(e1xxx::E1XXX);
    codes.extend_from_slice(e2xxx::E2XXX);
    codes
});

impl ErrorCodeDefinition {
    /// Case-insensitive lookup
    pub fn find(code: &str) -> Option<&'static Self> {
        ERROR_CODES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn all() -> &'static [Self] {
        &ERROR_CODES
    }

    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = &'static Self> {
        ERROR_CODES.iter().filter(move |c| c.category == category)
    }
}

impl fmt::Display for ErrorCodeDefinition {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{} ({}): {}", self.code, self.category, self.title)?;
        write!(f, "\n{}", self.explanation)
    }
}
