//! Axum route handlers for the Skills API.
//!
//! Documents are processed one after another in upload order. A failing document
//! is reported in its own result entry and never aborts its siblings.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::documents::extract_upload;
use crate::errors::AppError;
use crate::skills::extractor::{extract_profile, SkillProfile};
use crate::skills::matcher::{match_profiles, MatchResult};
use crate::skills::source::SkillSource;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NamedText {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchTextRequest {
    pub job_description: String,
    pub resumes: Vec<NamedText>,
}

#[derive(Debug, Serialize)]
pub struct DocumentFailure {
    pub code: &'static str,
    pub message: String,
}

/// Outcome for one uploaded document: a profile or an isolated error.
#[derive(Debug, Serialize)]
pub struct DocumentProfile {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SkillProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DocumentFailure>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub documents: Vec<DocumentProfile>,
}

#[derive(Debug, Serialize)]
pub struct ResumeMatch {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SkillProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DocumentFailure>,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionProfile {
    pub file_name: String,
    pub profile: SkillProfile,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_description: JobDescriptionProfile,
    pub resumes: Vec<ResumeMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/extract
///
/// Multipart upload of one or more files. Returns one profile (or error) per file.
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let uploads = read_uploads(multipart).await?;
    if uploads.is_empty() {
        return Err(AppError::Validation("at least one file is required".to_string()));
    }
    info!("Extracting skills from {} uploaded documents", uploads.len());

    let mut documents = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let file_name = upload.file_name.clone();
        let document = match profile_upload(upload, state.skill_source()).await {
            Ok(profile) => DocumentProfile {
                file_name,
                profile: Some(profile),
                error: None,
            },
            Err(e) => DocumentProfile {
                error: Some(failure(&file_name, e)),
                file_name,
                profile: None,
            },
        };
        documents.push(document);
    }

    Ok(Json(ExtractResponse { documents }))
}

/// POST /api/v1/skills/extract-text
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<SkillProfile>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(extract_profile(&request.text, state.skill_source()).await))
}

/// POST /api/v1/skills/match
///
/// Multipart upload of exactly one `job_description` file and one or more `resumes`
/// files. A job description that cannot be read fails the whole request; a resume
/// that cannot be read only fails its own entry.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let uploads = read_uploads(multipart).await?;

    let mut job_descriptions = Vec::new();
    let mut resumes = Vec::new();
    for upload in uploads {
        match upload.field.as_str() {
            JOB_DESCRIPTION_FIELD => job_descriptions.push(upload),
            RESUMES_FIELD => resumes.push(upload),
            other => {
                return Err(AppError::Validation(format!(
                    "unexpected file field '{other}'; use '{JOB_DESCRIPTION_FIELD}' or '{RESUMES_FIELD}'"
                )))
            }
        }
    }

    if job_descriptions.len() != 1 {
        return Err(AppError::Validation(format!(
            "exactly one '{JOB_DESCRIPTION_FIELD}' file is required"
        )));
    }
    if resumes.is_empty() {
        return Err(AppError::Validation(format!(
            "at least one '{RESUMES_FIELD}' file is required"
        )));
    }

    let source = state.skill_source();
    let jd_upload = job_descriptions.remove(0);
    let jd_file_name = jd_upload.file_name.clone();
    let reference = profile_upload(jd_upload, source).await?;
    info!(
        "Job description '{}' requires {} skills; matching {} resumes",
        jd_file_name,
        reference.all_skills.len(),
        resumes.len()
    );

    let mut results = Vec::with_capacity(resumes.len());
    for upload in resumes {
        let file_name = upload.file_name.clone();
        let entry = match profile_upload(upload, source).await {
            Ok(profile) => matched_entry(file_name, &reference, profile),
            Err(e) => ResumeMatch {
                error: Some(failure(&file_name, e)),
                file_name,
                profile: None,
                result: None,
            },
        };
        results.push(entry);
    }

    Ok(Json(MatchResponse {
        job_description: JobDescriptionProfile {
            file_name: jd_file_name,
            profile: reference,
        },
        resumes: results,
    }))
}

/// POST /api/v1/skills/match-text
pub async fn handle_match_text(
    State(state): State<AppState>,
    Json(request): Json<MatchTextRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation(
            "at least one resume is required".to_string(),
        ));
    }

    let source = state.skill_source();
    let reference = extract_profile(&request.job_description, source).await;

    let mut results = Vec::with_capacity(request.resumes.len());
    for resume in request.resumes {
        let profile = extract_profile(&resume.text, source).await;
        results.push(matched_entry(resume.name, &reference, profile));
    }

    Ok(Json(MatchResponse {
        job_description: JobDescriptionProfile {
            file_name: JOB_DESCRIPTION_FIELD.to_string(),
            profile: reference,
        },
        resumes: results,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

struct Upload {
    field: String,
    file_name: String,
    data: Bytes,
}

/// Collects every file part of a multipart body. Non-file parts are ignored.
async fn read_uploads(mut multipart: Multipart) -> Result<Vec<Upload>, AppError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let field_name = field.name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read '{file_name}': {e}")))?;
        uploads.push(Upload {
            field: field_name,
            file_name,
            data,
        });
    }
    Ok(uploads)
}

/// Extracts text off the async runtime, then builds the document's profile.
async fn profile_upload(
    upload: Upload,
    source: Option<&dyn SkillSource>,
) -> Result<SkillProfile, AppError> {
    let Upload {
        file_name, data, ..
    } = upload;
    let text = tokio::task::spawn_blocking(move || extract_upload(&file_name, &data))
        .await
        .map_err(|e| AppError::Extraction(format!("text extraction aborted: {e}")))??;

    Ok(extract_profile(&text, source).await)
}

fn matched_entry(file_name: String, reference: &SkillProfile, profile: SkillProfile) -> ResumeMatch {
    let result = match_profiles(reference, &profile);
    ResumeMatch {
        file_name,
        profile: Some(profile),
        result: Some(result),
        error: None,
    }
}

fn failure(file_name: &str, err: AppError) -> DocumentFailure {
    warn!("Skipping document '{file_name}': {err}");
    DocumentFailure {
        code: err.code(),
        message: err.public_message(),
    }
}
