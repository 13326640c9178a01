use dioxus::prelude::*;
use ui_core::{ContextError, Family, Marker};

use crate::primitives::use_required_context;

pub(crate) const MODAL: Family = Family {
    root: "Modal",
    markers: &[Marker::Prefix("Modal")],
    replacement: "ModalHeader, ModalTitle and ModalFooter components inside ModalContent",
    parts: "ModalTrigger, ModalContent, ModalHeader, ModalTitle, ModalDescription, ModalBody, ModalFooter, ModalClose",
};

#[derive(Clone, Copy, PartialEq)]
pub struct ModalContext {
    pub open: Memo<bool>,
    pub closable: ReadSignal<bool>,
    pub mask_closable: ReadSignal<bool>,
    /// Final CSS width of the content box.
    pub width: Memo<String>,
    pub(crate) instance: usize,
    pub(crate) set_open: Callback<bool>,
}

impl ModalContext {
    pub fn set_open(&self, open: bool) {
        self.set_open.call(open);
    }

    /// Close unless the modal was made non-closable.
    pub fn request_close(&self) {
        if (self.closable)() {
            self.set_open(false);
        }
    }

    /// Keyboard dismissal: Escape closes a closable modal.
    pub fn key_down(&self, key: &Key) {
        if *key == Key::Escape {
            self.request_close();
        }
    }

    pub fn title_id(&self) -> String {
        format!("modal-{}-title", self.instance)
    }

    pub fn description_id(&self) -> String {
        format!("modal-{}-description", self.instance)
    }
}

pub fn use_modal_context(part: &'static str) -> Result<ModalContext, ContextError> {
    use_required_context(part, MODAL.root)
}
