//! Table parsing options

/// Options for splitting table text into cells
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// A run of at least this many spaces separates two cells (default: 2)
    pub min_space_run: usize,
    /// Whether a tab separates two cells (default: true)
    pub split_on_tab: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_space_run: 2,
            split_on_tab: true,
        }
    }
}

impl ParseOptions {
    /// Regex pattern matching one cell separator
    pub(crate) fn separator_pattern(&self) -> String {
        let spaces = format!(" {{{},}}", self.min_space_run);
        if self.split_on_tab {
            format!(r"\t|{}", spaces)
        } else {
            spaces
        }
    }
}
