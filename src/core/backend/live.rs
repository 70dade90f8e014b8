// src/core/backend/live.rs

use async_trait::async_trait;
use color_eyre::eyre::{Result, WrapErr};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use super::AnalysisBackend;
use crate::core::error::{ScanError, Stage};
use crate::core::models::{MatchJobsResponse, ParsedResume, UploadedFile};

const UPLOAD_PATH: &str = "upload_resume";
const MATCH_JOBS_PATH: &str = "match-jobs";

/// Talks to the external analysis service over HTTP. No request timeout is
/// set: a hung backend keeps the scan running until the user quits.
pub struct LiveBackend {
    client: Client,
    base_url: Url,
    upload_url: Url,
    match_jobs_url: Url,
}

impl LiveBackend {
    pub fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ResumeScope/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.clone(),
            upload_url: endpoint(base_url, UPLOAD_PATH)?,
            match_jobs_url: endpoint(base_url, MATCH_JOBS_PATH)?,
        })
    }
}

/// Joins `path` under `base`, keeping any path prefix the base already has
/// (`http://host/api` + `match-jobs` -> `http://host/api/match-jobs`).
pub fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path).wrap_err_with(|| format!("Invalid endpoint {path} under {base}"))
}

#[async_trait]
impl AnalysisBackend for LiveBackend {
    fn describe(&self) -> String {
        format!("live · {}", self.base_url)
    }

    async fn upload_resume(&self, file: &UploadedFile) -> Result<ParsedResume, ScanError> {
        let stage = Stage::Upload;
        info!(url = %self.upload_url, file = %file.name, bytes = file.size(), "Uploading résumé.");

        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|source| ScanError::Transport { stage, source })?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|source| transport(stage, source))?;

        let body = read_success(stage, response).await?;
        let parsed = ParsedResume::from_json(body).map_err(|reason| malformed(stage, reason))?;
        debug!(skills = ?parsed.technical_skills, "Upload parsed.");
        Ok(parsed)
    }

    async fn match_jobs(&self, resume: &ParsedResume) -> Result<MatchJobsResponse, ScanError> {
        let stage = Stage::MatchJobs;
        info!(url = %self.match_jobs_url, "Requesting job matches.");

        let response = self
            .client
            .post(self.match_jobs_url.clone())
            .json(&resume.raw)
            .send()
            .await
            .map_err(|source| transport(stage, source))?;

        let body = read_success(stage, response).await?;
        let matches: MatchJobsResponse =
            serde_json::from_value(body).map_err(|e| malformed(stage, e.to_string()))?;
        debug!(matches = matches.matches.len(), "Job matches received.");
        Ok(matches)
    }
}

/// Returns the decoded JSON body of a 2xx response, or the status error
/// carrying whatever text the backend sent.
async fn read_success(stage: Stage, response: Response) -> Result<Value, ScanError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(%stage, status = status.as_u16(), body = %body, "Backend returned an error status.");
        return Err(ScanError::status(stage, status, body));
    }

    let bytes = response.bytes().await.map_err(|source| transport(stage, source))?;
    serde_json::from_slice(&bytes).map_err(|e| malformed(stage, e.to_string()))
}

fn transport(stage: Stage, source: reqwest::Error) -> ScanError {
    error!(%stage, error = %source, "Backend request failed.");
    ScanError::Transport { stage, source }
}

fn malformed(stage: Stage, reason: String) -> ScanError {
    error!(%stage, %reason, "Backend response could not be decoded.");
    ScanError::Malformed { stage, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PDF_MEDIA_TYPE;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// A request captured by `serve_once`: header block and raw body bytes.
    struct Captured {
        head: String,
        body: Vec<u8>,
    }

    /// Accepts a single connection on a local port, reads one full request
    /// and answers with `status` and `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let captured = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed before sending a full request");
                buf.extend_from_slice(&chunk[..n]);

                let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&buf[..end]).to_string();
                let length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break Captured { head, body: buf[end + 4..end + 4 + length].to_vec() };
                }
            };

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            captured
        });
        (url, handle)
    }

    fn sample_pdf() -> UploadedFile {
        UploadedFile::new("cv.pdf", PDF_MEDIA_TYPE, b"%PDF-1.4 sample".to_vec())
    }

    #[tokio::test]
    async fn upload_sends_the_pdf_as_multipart_file_field() {
        let (url, server) = serve_once("200 OK", r#"{"technical_skills":["Go","SQL"]}"#).await;
        let backend = LiveBackend::new(&url).unwrap();

        let parsed = backend.upload_resume(&sample_pdf()).await.unwrap();
        assert_eq!(parsed.technical_skills, vec!["Go", "SQL"]);

        let request = server.await.unwrap();
        assert!(request.head.starts_with("POST /upload_resume "), "{}", request.head);
        let body = String::from_utf8_lossy(&request.body).to_lowercase();
        assert!(body.contains(r#"name="file"; filename="cv.pdf""#), "{body}");
        assert!(body.contains("content-type: application/pdf"), "{body}");
        assert!(body.contains("%pdf-1.4 sample"), "{body}");
    }

    #[tokio::test]
    async fn match_jobs_forwards_the_parsed_resume_unchanged() {
        let (url, server) =
            serve_once("200 OK", r#"{"matches":[{"title":"X","company":"Y","score":0.8}]}"#).await;
        let backend = LiveBackend::new(&url).unwrap();
        let resume = ParsedResume::from_json(json!({
            "technical_skills": ["Go"],
            "name": "Ada",
            "parsed_resume": { "education": "Not found" },
        }))
        .unwrap();

        let response = backend.match_jobs(&resume).await.unwrap();
        assert_eq!(response.matches.len(), 1);

        let request = server.await.unwrap();
        assert!(request.head.starts_with("POST /match-jobs "), "{}", request.head);
        assert!(request.head.to_lowercase().contains("content-type: application/json"));
        assert_eq!(request.body, serde_json::to_vec(&resume.raw).unwrap());
    }

    #[tokio::test]
    async fn error_status_keeps_code_reason_and_body() {
        let (url, server) = serve_once("503 Service Unavailable", "parser offline").await;
        let backend = LiveBackend::new(&url).unwrap();

        let err = backend.upload_resume(&sample_pdf()).await.unwrap_err();
        assert!(matches!(err, ScanError::Status { stage: Stage::Upload, status: 503, .. }));
        assert_eq!(err.to_string(), "Upload failed: 503 Service Unavailable - parser offline");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed() {
        let (url, server) = serve_once("200 OK", "<html>oops</html>").await;
        let backend = LiveBackend::new(&url).unwrap();
        let resume = ParsedResume::from_json(json!({ "technical_skills": [] })).unwrap();

        let err = backend.match_jobs(&resume).await.unwrap_err();
        assert!(matches!(err, ScanError::Malformed { stage: Stage::MatchJobs, .. }), "{err}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
        drop(listener);
        let backend = LiveBackend::new(&url).unwrap();

        let err = backend.upload_resume(&sample_pdf()).await.unwrap_err();
        assert!(matches!(err, ScanError::Transport { stage: Stage::Upload, .. }), "{err}");
        assert!(err.to_string().starts_with("Upload request failed: "));
    }

    #[test]
    fn endpoints_join_onto_bare_host() {
        let base = Url::parse("http://localhost:5001").unwrap();
        assert_eq!(endpoint(&base, UPLOAD_PATH).unwrap().as_str(), "http://localhost:5001/upload_resume");
        assert_eq!(endpoint(&base, MATCH_JOBS_PATH).unwrap().as_str(), "http://localhost:5001/match-jobs");
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let base = Url::parse("https://scan.example.com/api").unwrap();
        assert_eq!(endpoint(&base, MATCH_JOBS_PATH).unwrap().as_str(), "https://scan.example.com/api/match-jobs");

        let base = Url::parse("https://scan.example.com/api/").unwrap();
        assert_eq!(endpoint(&base, UPLOAD_PATH).unwrap().as_str(), "https://scan.example.com/api/upload_resume");
    }

    #[test]
    fn backend_describes_its_base_url() {
        let backend = LiveBackend::new(&Url::parse("http://localhost:5001").unwrap()).unwrap();
        assert_eq!(backend.describe(), "live · http://localhost:5001/");
    }
}
