//! Resume Analysis - View Model

use super::state::AnalysisForm;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AnalysisFormVm {
    /// The pure form state; every transition goes through its methods.
    pub form: RwSignal<AnalysisForm>,
    /// The picked file handle. Kept apart from `form` because a
    /// `web_sys::File` cannot live in the pure state.
    pub selected_file: RwSignal<Option<web_sys::File>, LocalStorage>,
}

impl AnalysisFormVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AnalysisForm::new()),
            selected_file: RwSignal::new_local(None),
        }
    }
}
