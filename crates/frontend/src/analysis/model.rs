//! Resume Analysis - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::analysis::AnalysisReport;

/// Path of the analysis endpoint on the service.
const ANALYZE_PATH: &str = "/analyze-pdf";

/// Submit the resume and job description for analysis.
///
/// One multipart POST with exactly two fields: the file under `file` and the
/// text under `job_description`. Every failure mode (request construction,
/// transport, non-2xx status, body parse) comes back as `Err`; how that is
/// shown to the user is the view's decision.
pub async fn analyze_resume(
    file: &web_sys::File,
    job_description: &str,
) -> Result<AnalysisReport, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_str("job_description", job_description)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(ANALYZE_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: AnalysisReport = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
