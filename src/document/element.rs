/// How an input renders its value: masked like a password field,
/// or as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Masked,
    Plaintext,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Masked => InputMode::Plaintext,
            InputMode::Plaintext => InputMode::Masked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Masked => "masked",
            InputMode::Plaintext => "plaintext",
        }
    }
}

/// The slice of element state this page actually touches: the class
/// attribute, the input value, the text content and the display mode.
/// Everything else the real markup carries is none of our business.
#[derive(Debug)]
pub struct Element {
    id: String,
    class_attribute: String,
    value: String,
    text: String,
    mode: InputMode,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_attribute: String::new(),
            value: String::new(),
            text: String::new(),
            mode: InputMode::Plaintext,
        }
    }

    /// An input that starts out with its value hidden, i.e. a password field.
    pub fn masked(id: impl Into<String>) -> Self {
        let mut element = Self::new(id);
        element.mode = InputMode::Masked;
        element
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw, space-separated class attribute.
    pub fn class_attribute(&self) -> &str {
        &self.class_attribute
    }

    pub fn set_class_attribute(&mut self, classes: String) {
        self.class_attribute = classes;
    }

    /// Exact-token membership check, not a substring search.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_attribute
            .split_whitespace()
            .any(|token| token == class)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }
}
