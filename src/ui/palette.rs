use console::Style;

/// Terminal color capability, decided once at startup and passed down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Colors on when stdout is a terminal and `NO_COLOR` is unset or empty.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Palette::new(!no_color && console::Term::stdout().is_term())
    }

    pub fn plain() -> Self {
        Palette::new(false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.enabled).apply_to(text).to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    pub fn bold_red(&self, text: &str) -> String {
        self.paint(Style::new().red().bold(), text)
    }

    pub fn bold_yellow(&self, text: &str) -> String {
        self.paint(Style::new().yellow().bold(), text)
    }

    pub fn bold_cyan(&self, text: &str) -> String {
        self.paint(Style::new().cyan().bold(), text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::plain()
    }
}
