#[cfg(test)]
#[path = "classification_test.rs"]
mod tests;

/// Label the classifier uses for content it considers dangerous.
pub const UNSAFE_LABEL: &str = "Unsafe";

pub const UNSAFE_WARNING: &str = "⚠️ Warning: Potential security threat detected!";

#[derive(Clone, Debug, PartialEq)]
pub struct TextClassification {
    pub prediction: String,
    /// Between 0 and 1.
    pub confidence: f64,
}

impl TextClassification {
    pub fn confidence_percentage(&self) -> String {
        return format!("{:.2}%", self.confidence * 100.0);
    }

    pub fn summary(&self) -> String {
        return format!(
            "Analysis Result: {}\nConfidence: {}",
            self.prediction,
            self.confidence_percentage()
        );
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageClassification {
    pub prediction: String,
}

impl ImageClassification {
    pub fn is_unsafe(&self) -> bool {
        return self.prediction == UNSAFE_LABEL;
    }

    pub fn summary(&self) -> String {
        let mut text = format!("Image Analysis Result: {}", self.prediction);
        if self.is_unsafe() {
            text = format!("{text}\n{UNSAFE_WARNING}");
        }

        return text;
    }
}
