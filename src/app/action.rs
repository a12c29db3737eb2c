#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Tick,
    /// Advance spinning wheels by this many physics frames
    Frames(u32),
    Resize(u16, u16),
    Quit,

    // Spinning
    Spin,
    Undo,
    DismissResult,

    // Navigation
    ToggleFocus,
    MoveUp,
    MoveDown,

    // Pool and teams of the active wheel
    RemoveSelected,
    IncreaseCapacity,
    DecreaseCapacity,
    ResetTeams,
    ClearTeams,

    // Wheels
    NewWheel,
    NextWheel,
    PrevWheel,
    SelectWheel(usize),
    InitiateRemoveWheel, // first 'w' press
    ConfirmRemoveWheel,  // second 'w' press
    CancelPending,
    LockAll,
    UnlockAll,
    CopyShareToken,
    ImportToken(String),

    // Input modes
    EnterAddNameMode,
    EnterAddTeamMode,
    EnterRenameMode,
    EnterImportMode,
    EnterHelpMode,
    ExitMode,
    InputChar(char),
    InputBackspace,
    SubmitInput,
    Paste(String),
}
