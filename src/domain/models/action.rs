use super::Submission;

pub enum Action {
    Classify(Submission),
    CopyText(String),
}
