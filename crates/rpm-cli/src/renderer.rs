//! Terminal rendering for generated lesson plans and toolbox content.
//!
//! Rich output goes through termimad; plain output prints the markdown
//! unchanged so it can be piped or redirected.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            println!("{}", markdown.trim_end());
        }
    }

    /// Render a markdown bullet list under a heading
    pub fn render_list<I, S>(&self, heading: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.render(&list_markdown(heading, items));
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn list_markdown<I, S>(heading: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut markdown = format!("## {heading}\n\n");
    for item in items {
        markdown.push_str("- ");
        markdown.push_str(item.as_ref());
        markdown.push('\n');
    }
    markdown
}
