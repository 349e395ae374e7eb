use serde::Serialize;

/// Whether new orders are accepted right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderAvailability {
    pub open: bool,
    pub message: Option<String>,
}

impl OrderAvailability {
    /// The message is only carried while ordering is closed.
    pub fn from_switch(closed: bool, closed_message: &str) -> Self {
        Self {
            open: !closed,
            message: closed.then(|| closed_message.to_owned()),
        }
    }
}
