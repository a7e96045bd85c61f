//! Lowering options

/// What happens to comment trivia of transformed nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriviaPolicy {
    /// Drop source trivia; emitted meta-code gets its own layout.
    #[default]
    Normalize,
    /// Keep comments attached to tokens and rebuild them in the output.
    PreserveComments,
}

/// Options for a lowering pass
#[derive(Debug, Clone)]
pub struct LowerOptions {
    /// Number of spaces per indentation level (or tab width if using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Maximum nesting of visited nodes before lowering gives up
    pub max_depth: usize,
    pub trivia: TriviaPolicy,
    /// Path prefix of emitted factory calls (`make::if_stmt(...)`)
    pub factory_module: String,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            max_depth: 256,
            trivia: TriviaPolicy::Normalize,
            factory_module: "make".to_string(),
        }
    }
}

impl LowerOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }

    /// Leading trivia of an argument placed at `level`.
    pub fn line_break(&self, level: usize) -> String {
        format!("\n{}", self.indent(level))
    }

    pub fn preserves_comments(&self) -> bool {
        self.trivia == TriviaPolicy::PreserveComments
    }
}
