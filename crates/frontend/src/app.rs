use crate::analysis::AnalysisPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AnalysisPage />
    }
}
