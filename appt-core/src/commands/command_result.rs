/// Outcome of a command, handed back to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback_to_user: String,
    /// Help should be shown.
    pub show_help: bool,
    /// The application should exit.
    pub exit: bool,
    /// The appointment list should be shown.
    pub show_appointments: bool,
    /// The property list should be shown.
    pub show_properties: bool,
}

impl CommandResult {
    pub fn new(
        feedback_to_user: impl Into<String>,
        show_help: bool,
        exit: bool,
        show_appointments: bool,
        show_properties: bool,
    ) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help,
            exit,
            show_appointments,
            show_properties,
        }
    }
}
