use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Attachment;
use crate::domain::models::Classifier;
use crate::domain::models::ImageClassification;
use crate::domain::models::TextClassification;

/// In-memory classifier for tests. Answers with fixed labels, or fails every
/// call when built with `failing`.
pub struct FakeClassifier {
    text_label: String,
    confidence: f64,
    image_label: String,
    fail: bool,
    pub text_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub last_text: Mutex<Option<String>>,
    pub last_image: Mutex<Option<Attachment>>,
}

impl Default for FakeClassifier {
    fn default() -> FakeClassifier {
        return FakeClassifier::new("Safe", 0.8675, "Safe");
    }
}

impl FakeClassifier {
    pub fn new(text_label: &str, confidence: f64, image_label: &str) -> FakeClassifier {
        return FakeClassifier {
            text_label: text_label.to_string(),
            confidence,
            image_label: image_label.to_string(),
            fail: false,
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
            last_image: Mutex::new(None),
        };
    }

    pub fn failing() -> FakeClassifier {
        let mut classifier = FakeClassifier::default();
        classifier.fail = true;
        return classifier;
    }

    pub fn calls(&self) -> usize {
        return self.text_calls.load(Ordering::SeqCst) + self.image_calls.load(Ordering::SeqCst);
    }
}

#[async_trait]
impl Classifier for FakeClassifier {
    async fn classify_text(&self, text: &str) -> Result<TextClassification> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        if self.fail {
            bail!("connection refused");
        }

        return Ok(TextClassification {
            prediction: self.text_label.to_string(),
            confidence: self.confidence,
        });
    }

    async fn classify_image(&self, attachment: &Attachment) -> Result<ImageClassification> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_image.lock().unwrap() = Some(attachment.clone());
        if self.fail {
            bail!("connection refused");
        }

        return Ok(ImageClassification {
            prediction: self.image_label.to_string(),
        });
    }
}
