//! Transient on-screen messages ("toasts").

/// Default text of the step-completed toast.
pub const STEP_SUCCESS_TEXT: &str = "✅ Отлично! Переходим к следующему шагу.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Success,
}

impl MessageKind {
    /// Kind named by a page script. Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> MessageKind {
        match name.trim() {
            "warning" => MessageKind::Warning,
            "error" => MessageKind::Error,
            "success" => MessageKind::Success,
            _ => MessageKind::Info,
        }
    }

    pub fn class_suffix(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
            MessageKind::Success => "success",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            MessageKind::Info => "linear-gradient(45deg, #74b9ff, #0984e3)",
            MessageKind::Warning => "linear-gradient(45deg, #fdcb6e, #f39c12)",
            MessageKind::Error => "linear-gradient(45deg, #e17055, #d63031)",
            MessageKind::Success => "linear-gradient(45deg, #00b894, #00cec9)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Dead centre, larger type. Used for step completion.
    Center,
    /// Upper fifth of the screen.
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub kind: MessageKind,
    placement: Placement,
}

impl Toast {
    /// Big centred toast shown when a step is done.
    pub fn step_success() -> Self {
        Self {
            text: STEP_SUCCESS_TEXT.to_string(),
            kind: MessageKind::Success,
            placement: Placement::Center,
        }
    }

    pub fn message(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            placement: Placement::Top,
        }
    }

    pub fn class_name(&self) -> String {
        match self.placement {
            Placement::Center => "success-message".to_string(),
            Placement::Top => format!("message message-{}", self.kind.class_suffix()),
        }
    }

    /// How long the toast stays on the page.
    pub fn lifetime_ms(&self) -> i32 {
        match self.placement {
            Placement::Center => 2000,
            Placement::Top => 3000,
        }
    }

    /// Inline style for the toast element.
    pub fn css(&self) -> String {
        let background = self.kind.background();
        match self.placement {
            Placement::Center => format!(
                "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
                 background: {background}; color: white; padding: 20px 40px; \
                 border-radius: 15px; font-size: 1.2rem; z-index: 1000; \
                 animation: fadeInUp 0.5s ease-out;"
            ),
            Placement::Top => format!(
                "position: fixed; top: 20%; left: 50%; transform: translateX(-50%); \
                 background: {background}; color: white; padding: 15px 30px; \
                 border-radius: 10px; font-size: 1rem; z-index: 1000; \
                 animation: fadeInUp 0.5s ease-out; box-shadow: 0 5px 15px rgba(0,0,0,0.3);"
            ),
        }
    }
}
