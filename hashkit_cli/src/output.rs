//! Rendering of hash results for the terminal

use anyhow::Result;
use colored::Colorize;
use hashkit_core::HashResult;
use serde::Serialize;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// One hashed input and its result
#[derive(Debug, Clone, Serialize)]
pub struct HashEntry {
    /// Label of the input: the text itself, a file path or `-` for stdin
    pub input: String,
    #[serde(flatten)]
    pub result: HashResult,
}

/// Render entries in the requested format
pub fn render(entries: &[HashEntry], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

fn render_text(entries: &[HashEntry], color: bool) -> String {
    let grouped = entries
        .iter()
        .any(|entry| entry.input != entries[0].input);
    let mut output = String::new();
    let mut current_input: Option<&str> = None;

    for entry in entries {
        if grouped && current_input != Some(entry.input.as_str()) {
            let header = format!("{}:", entry.input);
            if color {
                output.push_str(&format!("{}\n", header.bold()));
            } else {
                output.push_str(&format!("{header}\n"));
            }
            current_input = Some(entry.input.as_str());
        }

        let indent = if grouped { "  " } else { "" };
        let name = entry.result.algorithm.name();
        if color {
            output.push_str(&format!("{indent}{}: {}\n", name.cyan(), entry.result.hash));
        } else {
            output.push_str(&format!("{indent}{name}: {}\n", entry.result.hash));
        }
    }

    output
}
