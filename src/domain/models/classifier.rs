use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::Attachment;
use super::ImageClassification;
use super::TextClassification;

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
}

/// The single request produced by a submission. A staged file always wins over
/// text, so there is no combined variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Text(String),
    Image(Attachment),
}

impl Submission {
    pub fn modality(&self) -> Modality {
        match self {
            Submission::Text(_) => return Modality::Text,
            Submission::Image(_) => return Modality::Image,
        }
    }
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Text(Result<TextClassification>),
    Image(Result<ImageClassification>),
}

impl SubmissionOutcome {
    pub fn modality(&self) -> Modality {
        match self {
            SubmissionOutcome::Text(_) => return Modality::Text,
            SubmissionOutcome::Image(_) => return Modality::Image,
        }
    }
}

#[async_trait]
pub trait Classifier {
    /// Classifies a trimmed, non-empty text message.
    async fn classify_text(&self, text: &str) -> Result<TextClassification>;

    /// Uploads the raw bytes of an attachment for classification.
    async fn classify_image(&self, attachment: &Attachment) -> Result<ImageClassification>;
}

pub type SharedClassifier = Arc<dyn Classifier + Send + Sync>;

/// Performs exactly one round trip for the submission. Errors are carried in
/// the outcome rather than returned so callers always get something to render.
pub async fn classify(
    classifier: &(dyn Classifier + Send + Sync),
    submission: Submission,
) -> SubmissionOutcome {
    match submission {
        Submission::Text(text) => {
            return SubmissionOutcome::Text(classifier.classify_text(&text).await);
        }
        Submission::Image(attachment) => {
            return SubmissionOutcome::Image(classifier.classify_image(&attachment).await);
        }
    }
}
