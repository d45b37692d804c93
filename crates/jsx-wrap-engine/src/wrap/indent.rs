use jsx_wrap_config::IndentSetting;

/// Indentation style used for the one extra level inside the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Spaces(usize), // Number of spaces per indent level
    Tabs,          // Tab characters
}

impl IndentStyle {
    /// Apply the configured setting, detecting from `text` when it says `auto`.
    pub fn resolve(setting: &IndentSetting, text: &str) -> Self {
        match setting {
            IndentSetting::Auto => detect_indent_style(text),
            IndentSetting::Tab => IndentStyle::Tabs,
            IndentSetting::Spaces(n) => IndentStyle::Spaces((*n).max(1)),
        }
    }

    /// The text of one indentation level.
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(n),
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

/// Detect the indent style (tabs vs spaces and size) by finding the first non-zero indentation
/// of a code line. Comment lines are skipped, since JSDoc continuation lines (` * ...`) are
/// aligned to the `/**` rather than indented.
pub fn detect_indent_style(text: &str) -> IndentStyle {
    for line in text.lines() {
        let trimmed = line.trim_start();
        // Skip empty and comment lines
        if trimmed.is_empty()
            || trimmed.starts_with('*')
            || trimmed.starts_with("//")
            || trimmed.starts_with("/*")
        {
            continue;
        }

        if line.starts_with('\t') {
            return IndentStyle::Tabs;
        }

        if line.starts_with(' ') {
            let spaces = line.chars().take_while(|&c| c == ' ').count();
            return IndentStyle::Spaces(spaces);
        }
    }

    // Default to 2 spaces if we couldn't detect
    IndentStyle::default()
}
