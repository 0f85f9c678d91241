use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_CELL_PADDING;

/// Terminator written after every line of a rendered table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    #[value(name = "crlf")]
    CrLf,
    /// The convention of the platform this binary was built for.
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native => "\n",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct RenderConfig {
    pub line_ending: LineEnding,
    /// Spaces on each side of the cell text.
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Native,
            padding: DEFAULT_CELL_PADDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ending_terminators() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        if cfg!(windows) {
            assert_eq!(LineEnding::Native.as_str(), "\r\n");
        } else {
            assert_eq!(LineEnding::Native.as_str(), "\n");
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = RenderConfigBuilder::default().build().unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.padding, 1);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RenderConfigBuilder::default()
            .line_ending(LineEnding::CrLf)
            .padding(2)
            .build()
            .unwrap();
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert_eq!(config.padding, 2);
    }
}
