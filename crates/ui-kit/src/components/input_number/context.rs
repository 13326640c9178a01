use dioxus::prelude::*;
use ui_core::number::{parse_input, NumberBounds, ParsedInput, StepDirection};
use ui_core::{ContextError, Family, Marker};

use crate::primitives::use_required_context;

pub(crate) const INPUT_NUMBER: Family = Family {
    root: "InputNumber",
    markers: &[Marker::Prefix("InputNumber")],
    replacement: "InputNumberField and InputNumberButton components",
    parts: "InputNumberField, InputNumberButton",
};

#[derive(Clone, Copy, PartialEq)]
pub struct InputNumberContext {
    /// Committed value. `None` is an empty field.
    pub value: Memo<Option<f64>>,
    pub bounds: Memo<NumberBounds>,
    pub step: ReadSignal<f64>,
    pub disabled: ReadSignal<bool>,
    /// Raw text while the field has focus.
    pub(crate) draft: Signal<Option<String>>,
    pub(crate) commit: Callback<Option<f64>>,
}

impl InputNumberContext {
    /// Text shown in the field.
    pub fn display(&self) -> String {
        match self.draft.read().as_ref() {
            Some(text) => text.clone(),
            None => self.bounds.read().format((self.value)()),
        }
    }

    pub fn focus(&self) {
        let text = (self.value)().map(|v| v.to_string()).unwrap_or_default();
        let mut draft = self.draft;
        draft.set(Some(text));
    }

    /// Keystroke in the field. Parsable text commits immediately.
    pub fn input(&self, raw: String) {
        let parsed = parse_input(&raw);
        let mut draft = self.draft;
        draft.set(Some(raw));
        if let ParsedInput::Value(v) = parsed {
            self.commit.call(Some(v));
        }
    }

    /// Focus left: an empty field commits `None`, anything else is clamped.
    pub fn blur(&self) {
        let mut draft = self.draft;
        let text = draft.write().take().unwrap_or_default();
        match parse_input(&text) {
            ParsedInput::Empty | ParsedInput::Incomplete => self.commit.call(None),
            ParsedInput::Value(v) => self.commit.call(Some(v)),
            ParsedInput::Invalid => {}
        }
    }

    pub fn can_step(&self, direction: StepDirection) -> bool {
        if (self.disabled)() {
            return false;
        }
        let bounds = self.bounds.read();
        match direction {
            StepDirection::Up => bounds.can_increment((self.value)()),
            StepDirection::Down => bounds.can_decrement((self.value)()),
        }
    }

    pub fn step(&self, direction: StepDirection) {
        if (self.disabled)() {
            return;
        }
        let next = self
            .bounds
            .read()
            .step((self.value)(), (self.step)(), direction);
        let mut draft = self.draft;
        if draft.peek().is_some() {
            draft.set(Some(next.to_string()));
        }
        self.commit.call(Some(next));
    }
}

pub fn use_input_number_context(part: &'static str) -> Result<InputNumberContext, ContextError> {
    use_required_context(part, INPUT_NUMBER.root)
}
