use serde::{Deserialize, Serialize};

/// One completed exchange: what the user said and what was shown in reply.
///
/// A turn is immutable once appended to a [`History`](crate::History). The
/// reply text is whatever the session displayed for the turn, so a failed
/// call's error description is recorded the same way a successful reply is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    /// The user's input for this exchange.
    pub user_text: String,

    /// The reply that was displayed for this exchange.
    pub reply_text: String,
}

impl Turn {
    /// Creates a new turn from a user input and its displayed reply.
    pub fn new<U: Into<String>, R: Into<String>>(user_text: U, reply_text: R) -> Self {
        Self {
            user_text: user_text.into(),
            reply_text: reply_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let turn = Turn::new("hi", "hello");
        assert_eq!(turn.user_text, "hi");
        assert_eq!(turn.reply_text, "hello");
    }
}
