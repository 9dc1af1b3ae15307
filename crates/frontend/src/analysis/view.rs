//! Resume Analysis - View Component

use super::model::analyze_resume;
use super::view_model::AnalysisFormVm;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::text_utils::truncate_file_name;
use contracts::analysis::AnalysisReport;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// The one user-visible failure line. Causes are not distinguished.
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let vm = AnalysisFormVm::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    vm.form.update(|f| f.set_file(file.name()));
                    vm.selected_file.set(Some(file));
                }
            }
        }
    };

    let handle_description = Callback::new(move |text: String| {
        vm.form.update(|f| f.set_job_description(text));
    });

    let handle_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(file) = vm.selected_file.get_untracked() else {
            return;
        };
        let description = vm.form.with_untracked(|f| f.job_description.clone());
        let started = vm.form.try_update(|f| f.begin_submit()).unwrap_or(false);
        if !started {
            return;
        }

        log::debug!("submitting {} for analysis", file.name());
        leptos::task::spawn_local(async move {
            let result = analyze_resume(&file, &description).await;
            if let Err(e) = &result {
                log::warn!("analysis request failed: {e}");
            }
            vm.form.update(|f| f.settle(result));
        });
    });

    view! {
        <div class="analysis-page">
            <div class="analysis-page__inner">
                <h1 class="analysis-page__title">"AI Resume Analyzer"</h1>
                <p class="analysis-page__tagline">
                    "Upload your PDF resume and compare it against a job description to get actionable feedback."
                </p>

                <div class="analysis-form__filebar">
                    <label class="button button--primary analysis-form__file-btn" for="resume-file-input">
                        {move || match vm.form.with(|f| f.file_name.clone()) {
                            Some(name) => format!("Selected: {}", truncate_file_name(&name)),
                            None => "Choose PDF File".to_string(),
                        }}
                    </label>
                    <input
                        id="resume-file-input"
                        type="file"
                        accept="application/pdf"
                        on:change=handle_file_select
                        class="hidden"
                    />
                </div>

                <Textarea
                    value=Signal::derive(move || vm.form.with(|f| f.job_description.clone()))
                    on_input=handle_description
                    placeholder="Paste the job description here...".to_string()
                    rows=12
                    id="job-description".to_string()
                    class="analysis-form__description".to_string()
                />

                <Button
                    class="analysis-form__submit".to_string()
                    disabled=Signal::derive(move || !vm.form.with(|f| f.can_submit()))
                    on_click=handle_submit
                >
                    {move || if vm.form.with(|f| f.in_flight()) {
                        "Analyzing PDF..."
                    } else {
                        "Analyze PDF"
                    }}
                </Button>

                {move || vm.form.with(|f| f.failed()).then(|| view! {
                    <p class="analysis-form__error">{GENERIC_ERROR}</p>
                })}

                {move || vm.form.with(|f| f.report().cloned()).map(|report| view! {
                    <ReportCard report=report />
                })}
            </div>
        </div>
    }
}

#[component]
fn ReportCard(report: AnalysisReport) -> impl IntoView {
    let score = report.match_score;

    view! {
        <div class="report-card">
            <div class="report-card__header">
                <h2 class="report-card__heading">"Results"</h2>
                <div class="report-card__score">
                    <div class="score-bar">
                        <div class="score-bar__fill" style=format!("width: {}%", score)></div>
                    </div>
                    <span class="score-bar__label">{format!("{}% Match", score)}</span>
                </div>
            </div>

            <div class="report-card__sections">
                <Section title="Strengths" items=report.strengths />
                <Section title="Missing Skills" items=report.missing_skills />
                <Section title="Suggestions" items=report.suggestions />
            </div>
        </div>
    }
}

#[component]
fn Section(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="report-card__section">
            <h3 class="report-card__section-title">{title}</h3>
            <ul class="report-card__list">
                {items.into_iter().map(|item| view! {
                    <li class="report-card__list-item">{item}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}
