use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SendCoinIntent {
    /// Character typed into the focused field.
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Transaction request issued.
    Submitted,
    /// Backend accepted the transaction.
    SubmitSucceeded,
    /// Request failed; the entered values stay for another attempt.
    SubmitFailed,
}

impl Intent for SendCoinIntent {}
