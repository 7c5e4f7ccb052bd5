use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::upload::{SelectedFile, FILES_FIELD};
use crate::wire::{ErrorBody, ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse};
use crate::AnalysisBackend;

pub const GENERATE_PATH: &str = "/api/generate";
pub const EXPLAIN_PATH: &str = "/api/explain_charts";

/// [`AnalysisBackend`] over HTTP. One request per call: no retries and no
/// client-side timeout.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    /// `base` is the origin serving the API, e.g. `https://plan.example.com`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!(%url, "posting multipart request");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(%url, status, bytes = body.len(), "response received");

        decode_body(status, &body)
    }
}

impl AnalysisBackend for HttpBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let form = attach_files(Form::new(), &request.files)?
            .text("analysis_type", request.analysis_type.clone())
            .text("context", request.context.clone());
        self.post(GENERATE_PATH, form).await
    }

    async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ApiError> {
        let charts = request
            .charts_payload()
            .map_err(|err| ApiError::Transport(format!("unable to encode charts: {err}")))?;
        let form = attach_files(Form::new(), &request.files)?.text("charts_data", charts);
        self.post(EXPLAIN_PATH, form).await
    }
}

fn attach_files(form: Form, files: &[SelectedFile]) -> Result<Form, ApiError> {
    files
        .iter()
        .try_fold(form, |form, file| -> Result<Form, ApiError> {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.name.clone())
                .mime_str(&file.mime)?;
            Ok(form.part(FILES_FIELD, part))
        })
}

/// Interpret a response body. Both success and failure bodies are JSON; a
/// failure without an `error` string degrades to [`ApiError::Status`].
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()));
    }

    let reported = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty());

    Err(match reported {
        Some(message) => ApiError::Backend { status, message },
        None => ApiError::Status(status),
    })
}
