#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Attachment;
use crate::domain::models::Classifier;
use crate::domain::models::ImageClassification;
use crate::domain::models::TextClassification;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TextRequest {
    message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TextResponse {
    prediction: String,
    confidence: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ImageResponse {
    prediction: String,
}

/// Talks to the classification service over plain HTTP. Text goes to
/// `/predict-text` as JSON, files go to `/predict-image` as a multipart form.
pub struct HttpClassifier {
    url: String,
}

impl Default for HttpClassifier {
    fn default() -> HttpClassifier {
        return HttpClassifier::new(&Config::get(ConfigKey::ClassifierURL));
    }
}

impl HttpClassifier {
    pub fn new(url: &str) -> HttpClassifier {
        return HttpClassifier {
            url: url.trim_end_matches('/').to_string(),
        };
    }

    async fn send(&self, req: reqwest::RequestBuilder, endpoint: &str) -> Result<reqwest::Response> {
        let res = match req.send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(kind = "transport", endpoint, error = ?err, "Classifier is not reachable");
                bail!("Classifier is not reachable");
            }
        };

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::error!(kind = "status", endpoint, status, "Classifier request failed");
            bail!("Classifier request failed with status {status}");
        }

        return Ok(res);
    }

    async fn read<T: DeserializeOwned>(res: reqwest::Response, endpoint: &str) -> Result<T> {
        match res.json::<T>().await {
            Ok(body) => return Ok(body),
            Err(err) => {
                tracing::error!(kind = "payload", endpoint, error = ?err, "Classifier returned an unreadable response");
                bail!("Classifier returned an unreadable response");
            }
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    #[allow(clippy::implicit_return)]
    async fn classify_text(&self, text: &str) -> Result<TextClassification> {
        let endpoint = "/predict-text";
        let req = reqwest::Client::new()
            .post(format!("{url}{endpoint}", url = self.url))
            .json(&TextRequest {
                message: text.to_string(),
            });

        let res = self.send(req, endpoint).await?;
        let body = HttpClassifier::read::<TextResponse>(res, endpoint).await?;

        return Ok(TextClassification {
            prediction: body.prediction,
            confidence: body.confidence,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn classify_image(&self, attachment: &Attachment) -> Result<ImageClassification> {
        let endpoint = "/predict-image";
        let part = multipart::Part::stream_with_length(
            attachment.bytes().clone(),
            u64::try_from(attachment.len())?,
        )
        .file_name(attachment.file_name().to_string())
        .mime_str(attachment.mime())?;
        let form = multipart::Form::new().part("file", part);

        let req = reqwest::Client::new()
            .post(format!("{url}{endpoint}", url = self.url))
            .multipart(form);

        let res = self.send(req, endpoint).await?;
        let body = HttpClassifier::read::<ImageResponse>(res, endpoint).await?;

        return Ok(ImageClassification {
            prediction: body.prediction,
        });
    }
}
