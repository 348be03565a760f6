//! Request handlers for the upload form

use crate::error::{Result, ScreenerError};
use crate::input::DocumentSource;
use crate::processing::ScreeningReport;
use crate::web::{flash, AppState};
use askama::Template;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use log::{debug, info};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flash: Option<String>,
    result: Option<ResultView>,
}

/// Display-ready screening result.
struct ResultView {
    score_percent: String,
    jd_keywords: Vec<String>,
    resume_sample: Vec<String>,
    present_keywords: Vec<String>,
    missing_keywords: Vec<String>,
}

impl From<ScreeningReport> for ResultView {
    fn from(report: ScreeningReport) -> Self {
        Self {
            score_percent: format!("{:.1}", report.score_percent()),
            resume_sample: report.resume_sample().to_vec(),
            jd_keywords: report.jd_keywords,
            present_keywords: report.present_keywords,
            missing_keywords: report.missing_keywords,
        }
    }
}

/// GET /: render the empty form, consuming any pending flash message.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let message = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| flash::from_cookie_header(&state.config.session_secret, v));

    let page = IndexTemplate {
        flash: message.clone(),
        result: None,
    }
    .render()?;

    if message.is_some() {
        let clear = AppendHeaders([(header::SET_COOKIE, flash::clear_cookie())]);
        Ok((clear, Html(page)).into_response())
    } else {
        Ok(Html(page).into_response())
    }
}

/// POST /: screen the two uploaded documents and render the results.
pub async fn screen(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let (resume, jd) = match read_uploads(multipart).await {
        Ok(uploads) => uploads,
        Err(ScreenerError::MissingUpload(_)) => {
            return Ok(flash_redirect(
                &state,
                "Please upload both Resume and Job Description files \
                 (plain text; PDF and DOCX are not parsed).",
            ));
        }
        Err(e) => return Err(e),
    };

    let resume_text = DocumentSource::Bytes(resume).read().await?;
    let jd_text = DocumentSource::Bytes(jd).read().await?;
    debug!(
        "screening resume ({} chars) against job description ({} chars)",
        resume_text.len(),
        jd_text.len()
    );

    let report = match state.screener.screen(&resume_text, &jd_text) {
        Ok(report) => report,
        Err(ScreenerError::EmptyCorpus) => {
            return Ok(flash_redirect(
                &state,
                "Neither document contains any scorable text after cleaning.",
            ));
        }
        Err(e) => return Err(e),
    };
    info!("screened upload pair: score {:.1}%", report.score_percent());

    let page = IndexTemplate {
        flash: None,
        result: Some(report.into()),
    }
    .render()?;
    Ok(Html(page).into_response())
}

/// Collect the `resume` and `jd` multipart fields.
async fn read_uploads(mut multipart: Multipart) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut resume: Option<Vec<u8>> = None;
    let mut jd: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ScreenerError::InvalidInput(format!("malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ScreenerError::InvalidInput(format!("unreadable upload: {e}")))?;
        match name.as_str() {
            "resume" => resume = Some(bytes.to_vec()),
            "jd" => jd = Some(bytes.to_vec()),
            _ => {}
        }
    }

    match (resume, jd) {
        (Some(r), Some(j)) if !r.is_empty() && !j.is_empty() => Ok((r, j)),
        _ => Err(ScreenerError::MissingUpload(
            "both 'resume' and 'jd' files are required".to_string(),
        )),
    }
}

fn flash_redirect(state: &AppState, message: &str) -> Response {
    let cookie = flash::set_cookie(&state.config.session_secret, message);
    let headers = AppendHeaders([(header::SET_COOKIE, cookie)]);
    (headers, Redirect::to("/")).into_response()
}
