use crate::core::matcher::format_connection_result;
use crate::domain::model::ConnectionReport;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;

pub const PLAYED_TOGETHER_BANNER: &str = "✓ PLAYED TOGETHER AT:";
pub const NEVER_PLAYED_TOGETHER: &str = "✗ Never played together at the same club";

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[1;32m";
const BLUE: &str = "\x1b[1;34m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn renderer(self, color: bool) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer::new(color)),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// 純文字輸出；`color` 為真時加上 ANSI 樣式
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn render_block(&self, block: &str) -> String {
        let mut out = String::new();
        // 區塊第一行為球會名稱，第二行為重疊期間
        for (index, line) in block.lines().enumerate() {
            let line = match index {
                0 => self.paint(BLUE, line),
                1 => self.paint(GREEN, line),
                _ => line.to_string(),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &ConnectionReport) -> Result<String> {
        let mut out = self.paint(
            BOLD,
            &format!("{} and {}", report.player1, report.player2),
        );
        out.push_str("\n\n");

        if report.played_together() {
            out.push_str(&self.paint(GREEN, PLAYED_TOGETHER_BANNER));
            out.push_str("\n\n");

            for connection in &report.connections {
                let block = format_connection_result(connection, &report.player1, &report.player2);
                out.push_str(&self.render_block(&block));
                out.push('\n');
            }
        } else {
            out.push_str(&self.paint(RED, NEVER_PLAYED_TOGETHER));
            out.push('\n');
        }

        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &ConnectionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
