//! Shared types for the Model

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Gallery pane that has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Folders,
    Images,
}

/// Image waiting on the delete confirmation dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    /// Folder the image lives in (display name)
    pub folder_name: String,
    pub file_name: String,
}

/// Digits typed into the go-to-page prompt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PagePrompt {
    pub input: String,
    pub total_pages: usize,
}

impl PagePrompt {
    /// Longest input accepted; more digits than any real page count
    const MAX_DIGITS: usize = 6;

    pub fn new(total_pages: usize) -> Self {
        Self {
            input: String::new(),
            total_pages,
        }
    }

    /// Append a digit; anything else is ignored
    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.input.len() < Self::MAX_DIGITS {
            self.input.push(c);
        }
    }

    pub fn target(&self) -> Option<usize> {
        crate::logic::pagination::parse_page_input(&self.input, self.total_pages)
    }
}


/// Text input for choosing the root folder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootPrompt {
    pub input: String,
}

impl RootPrompt {
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
