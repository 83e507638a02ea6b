use std::path::Path;

use axum::{extract::Multipart, Json};

use crate::conf::settings;
use crate::pkg::internal::evaluate::{evaluate, Evaluation};
use crate::prelude::{EvalError, Result};

/// `POST /evaluate`: multipart form with a `resume` file and a
/// `desired_skills` comma-separated text field. The upload only ever
/// lives in this request's memory.
pub async fn evaluate_resume(mut multipart: Multipart) -> Result<Json<Evaluation>> {
    let mut desired_skills = String::new();
    let mut resume: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| EvalError::BadUpload(e.to_string()))?
    {
        match field.name().unwrap_or("") {
            "desired_skills" => {
                desired_skills = field
                    .text()
                    .await
                    .map_err(|e| EvalError::BadUpload(e.to_string()))?;
            }
            "resume" => {
                let file_name = field.file_name().unwrap_or("unknown").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| EvalError::BadUpload(e.to_string()))?;
                if data.len() > settings.max_upload_bytes {
                    return Err(EvalError::BadUpload(format!(
                        "file too large, maximum size is {} bytes",
                        settings.max_upload_bytes
                    )));
                }
                resume = Some((file_name, data.into()));
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| EvalError::BadUpload(e.to_string()))?;
            }
        }
    }

    let (file_name, data) =
        resume.ok_or_else(|| EvalError::BadUpload("missing resume file".to_string()))?;
    let format_tag = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_string();
    tracing::debug!("evaluating {} ({} bytes)", &file_name, data.len());

    // extraction is pure CPU work, keep it off the async worker
    let evaluation = tokio::task::spawn_blocking(move || {
        evaluate(&data, &format_tag, &desired_skills)
    })
    .await
    .map_err(|e| EvalError::Extraction(e.to_string()))??;

    Ok(Json(evaluation))
}
