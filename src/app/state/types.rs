#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    #[default]
    Pool,
    Teams,
}

impl FocusPanel {
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Pool => FocusPanel::Teams,
            FocusPanel::Teams => FocusPanel::Pool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    AddName,
    AddTeam,
    RenameWheel,
    ImportToken,
    Help,
}

impl InputMode {
    pub fn is_text_entry(self) -> bool {
        matches!(
            self,
            InputMode::AddName | InputMode::AddTeam | InputMode::RenameWheel | InputMode::ImportToken
        )
    }

    pub fn prompt(self) -> &'static str {
        match self {
            InputMode::AddName => "Add name",
            InputMode::AddTeam => "Add team",
            InputMode::RenameWheel => "Rename wheel",
            InputMode::ImportToken => "Paste share token",
            InputMode::Normal | InputMode::Help => "",
        }
    }
}

/// Wheel removal waiting for a second keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub session_id: u64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}
