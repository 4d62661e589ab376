//! Terminal rendering for markdown output
//!
//! Headings keep their hash marks and are colored by level; other lines go
//! through termimad's inline styling. Plain mode prints the markdown as is.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Formats markdown for the terminal without printing it.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut output = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            let styled = match heading_level(line) {
                Some(1) => line.blue().bold().to_string(),
                Some(2) => line.cyan().bold().to_string(),
                Some(_) => line.green().to_string(),
                None => self.skin.inline(line).to_string(),
            };
            output.push_str(&styled);
            output.push('\n');
        }
        output
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        print!("{}", self.format(markdown));
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|c| *c == '#').count();
    (level > 0 && line[level..].starts_with(' ')).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_passes_markdown_through() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Trip\n\n- **Item** `abc`\n";
        assert_eq!(renderer.format(markdown), markdown);
    }

    #[test]
    fn test_rich_renderer_keeps_heading_text() {
        let renderer = TerminalRenderer::default();
        let output = renderer.format("## Day 1\nplain\n");
        assert!(output.contains("## Day 1"));
        assert!(output.contains("plain"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# Trip"), Some(1));
        assert_eq!(heading_level("### Morning"), Some(3));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("- item"), None);
    }
}
