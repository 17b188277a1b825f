//! 诊断渲染器

use crate::util::config::DiagnosticsConfig;
use crate::util::diagnostic::{Diagnostic, Severity};
use owo_colors::OwoColorize;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否启用颜色输出
    pub use_colors: bool,
    /// 是否显示源码片段
    pub show_source: bool,
    /// 是否显示帮助信息
    pub show_help: bool,
    /// 指示字符 (默认: "^")
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_source: true,
            show_help: true,
            indicator: '^',
        }
    }
}

impl From<&DiagnosticsConfig> for EmitterConfig {
    fn from(config: &DiagnosticsConfig) -> Self {
        Self {
            use_colors: config.colors,
            show_source: config.show_source,
            ..Default::default()
        }
    }
}

/// 文本诊断渲染器
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Render a diagnostic, echoing `source` under it when available
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source: Option<&str>,
    ) -> String {
        let mut output = self.render_header(diagnostic);

        if self.config.show_source {
            if let Some(snippet) = self.render_snippet(diagnostic, source) {
                output.push_str(&snippet);
            }
        }

        if self.config.show_help {
            if let Some(help) = &diagnostic.help {
                output.push_str(&self.paint_help("help"));
                output.push_str(": ");
                output.push_str(help);
                output.push('\n');
            }
        }

        output
    }

    fn render_header(
        &self,
        diagnostic: &Diagnostic,
    ) -> String {
        let label = format!("{}[{}]", diagnostic.severity.label(), diagnostic.code);
        let label = if self.config.use_colors {
            match diagnostic.severity {
                Severity::Error => label.red().bold().to_string(),
                Severity::Warning => label.yellow().bold().to_string(),
            }
        } else {
            label
        };
        format!("{}: {}\n", label, diagnostic.message)
    }

    fn render_snippet(
        &self,
        diagnostic: &Diagnostic,
        source: Option<&str>,
    ) -> Option<String> {
        let span = diagnostic.span?;
        let source = source?;

        let width = span.len().max(1);
        let marker = self.config.indicator.to_string().repeat(width);
        let marker = if self.config.use_colors {
            marker.red().bold().to_string()
        } else {
            marker
        };
        let gutter = self.paint_help("|");

        Some(format!(
            "  {} {}\n  {} {}{}\n",
            gutter,
            source,
            gutter,
            " ".repeat(span.start),
            marker
        ))
    }

    fn paint_help(
        &self,
        text: &str,
    ) -> String {
        if self.config.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
