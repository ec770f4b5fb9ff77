//! Print call input

use super::stream::StreamHandle;

/// Structured print input with optional per-call overrides
#[derive(Debug, Clone, Default)]
pub struct MessageRecord {
    pub message: String,
    pub label: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Replaces the configured streams for this call only
    pub stream: Option<StreamHandle>,
    /// Add `stream` to the configured streams instead of replacing them
    pub append_stream: bool,
}

impl MessageRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn stream(mut self, stream: StreamHandle) -> Self {
        self.stream = Some(stream);
        self
    }

    #[must_use]
    pub fn append_stream(mut self, append: bool) -> Self {
        self.append_stream = append;
        self
    }
}

/// Either a bare message body or a full record
#[derive(Debug, Clone)]
pub enum MessageInput {
    Text(String),
    Record(MessageRecord),
}

impl MessageInput {
    pub fn message(&self) -> &str {
        match self {
            MessageInput::Text(text) => text,
            MessageInput::Record(record) => &record.message,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.record().and_then(|r| r.label.as_deref())
    }

    pub fn prefix(&self) -> Option<&str> {
        self.record().and_then(|r| r.prefix.as_deref())
    }

    pub fn suffix(&self) -> Option<&str> {
        self.record().and_then(|r| r.suffix.as_deref())
    }

    pub fn stream(&self) -> Option<&StreamHandle> {
        self.record().and_then(|r| r.stream.as_ref())
    }

    pub fn append_stream(&self) -> bool {
        self.record().is_some_and(|r| r.append_stream)
    }

    fn record(&self) -> Option<&MessageRecord> {
        match self {
            MessageInput::Text(_) => None,
            MessageInput::Record(record) => Some(record),
        }
    }
}

impl From<&str> for MessageInput {
    fn from(text: &str) -> Self {
        MessageInput::Text(text.to_string())
    }
}

impl From<String> for MessageInput {
    fn from(text: String) -> Self {
        MessageInput::Text(text)
    }
}

impl From<&String> for MessageInput {
    fn from(text: &String) -> Self {
        MessageInput::Text(text.clone())
    }
}

impl From<MessageRecord> for MessageInput {
    fn from(record: MessageRecord) -> Self {
        MessageInput::Record(record)
    }
}
