use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{Result, SkillmapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled text for terminals
    Human,
    /// Pretty-printed JSON on stdout
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = SkillmapError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" | "robot" => Ok(Self::Json),
            _ => Err(SkillmapError::Config(format!(
                "invalid output format {value} (expected human|json)"
            ))),
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| SkillmapError::Serialization(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.chars().count().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        self.lines.push(format!(
            "{} {value}",
            style(format!("{key:width$}", width = self.key_width)).dim()
        ));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.push_indented(0, text)
    }

    /// A bullet nested `depth` levels below the top.
    pub fn push_indented(&mut self, depth: usize, text: &str) -> &mut Self {
        self.lines.push(format!("{}- {text}", "  ".repeat(depth)));
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}
