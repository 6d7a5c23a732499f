use serde::{Deserialize, Serialize};

/// What happens when a button or image is tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Open a URL
    Uri {
        uri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// Send a text message on the user's behalf
    Message {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl Action {
    pub fn uri(uri: impl Into<String>) -> Self {
        Action::Uri {
            uri: uri.into(),
            label: None,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Action::Message {
            text: text.into(),
            label: None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Action::Uri { label, .. } | Action::Message { label, .. } => label.as_deref(),
        }
    }

    pub fn with_label(mut self, new_label: impl Into<String>) -> Self {
        match &mut self {
            Action::Uri { label, .. } | Action::Message { label, .. } => {
                *label = Some(new_label.into());
            }
        }
        self
    }

    pub fn into_unlabeled(self) -> Self {
        match self {
            Action::Uri { uri, .. } => Action::uri(uri),
            Action::Message { text, .. } => Action::message(text),
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::uri("")
    }
}
