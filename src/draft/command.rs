//! Commands applied to a draft.

/// A single state transition request produced by the event interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftCommand {
    SetDayNumber(u32),
    AppendContent(String),
    SetTitle(String),
    SetExcerpt(String),
    Finalize,
    Abort(String),
    /// Unknown or malformed event; nothing changes
    Ignore,
}

impl DraftCommand {
    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            DraftCommand::SetDayNumber(_) => "set_day_number",
            DraftCommand::AppendContent(_) => "append_content",
            DraftCommand::SetTitle(_) => "set_title",
            DraftCommand::SetExcerpt(_) => "set_excerpt",
            DraftCommand::Finalize => "finalize",
            DraftCommand::Abort(_) => "abort",
            DraftCommand::Ignore => "ignore",
        }
    }
}
