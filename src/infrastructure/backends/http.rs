#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Response;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendError;
use crate::domain::models::Document;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContinueRequest {
    answer: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct QuestionResponse {
    #[serde(default)]
    question: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ReviewResponse {
    #[serde(default)]
    review: String,
}

/// Talks to the interview backend over HTTP. Requests are sent once, with no
/// timeout and no retries.
pub struct HttpBackend {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpBackend {
    fn default() -> HttpBackend {
        return HttpBackend::new(&Config::get(ConfigKey::BackendURL));
    }
}

impl HttpBackend {
    pub fn new(url: &str) -> HttpBackend {
        return HttpBackend {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}/api/{path}", url = self.url);
    }

    async fn check_status(res: Response, endpoint: &str) -> Result<Response, BackendError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await?;
        tracing::error!(
            endpoint = endpoint,
            status = status.as_u16(),
            body = body,
            "Backend request failed"
        );

        return Err(BackendError::Server {
            status: status.as_u16(),
            body,
        });
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[allow(clippy::implicit_return)]
    async fn upload(&self, document: Document) -> Result<String, BackendError> {
        let content_type = document.content_type();
        let part = multipart::Part::bytes(document.bytes)
            .file_name(document.name)
            .mime_str(content_type)?;
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        let body = HttpBackend::check_status(res, "upload")
            .await?
            .json::<QuestionResponse>()
            .await?;
        tracing::debug!(body = ?body, "Upload response");

        return Ok(body.question);
    }

    #[allow(clippy::implicit_return)]
    async fn continue_interview(&self, answer: &str) -> Result<String, BackendError> {
        let req = ContinueRequest {
            answer: answer.to_string(),
        };

        let res = self
            .client
            .post(self.endpoint("continue"))
            .json(&req)
            .send()
            .await?;

        let body = HttpBackend::check_status(res, "continue")
            .await?
            .json::<QuestionResponse>()
            .await?;
        tracing::debug!(body = ?body, "Continue response");

        return Ok(body.question);
    }

    #[allow(clippy::implicit_return)]
    async fn finish(&self) -> Result<String, BackendError> {
        let res = self.client.post(self.endpoint("finish")).send().await?;

        let body = HttpBackend::check_status(res, "finish")
            .await?
            .json::<ReviewResponse>()
            .await?;
        tracing::debug!(body = ?body, "Finish response");

        return Ok(body.review);
    }
}
