/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard, paste, resize).
    Input(crossterm::event::Event),
    /// A resolved action to execute.
    Action(Action),
}

/// High-level actions dispatched by the input mapper and the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Analysis page navigation
    ShowClauses,
    ShowChat,
    ToggleView,
    FocusChatInput,

    // Slide-over menu
    OpenMenu,
    CloseMenu,
    SwitchDocument(usize),
    UploadAnother,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Quit,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
