use super::ImageClassification;
use super::TextClassification;
use super::UNSAFE_WARNING;

#[test]
fn it_formats_confidence_to_two_decimals() {
    let res = TextClassification {
        prediction: "Safe".to_string(),
        confidence: 0.8675,
    };
    assert_eq!(res.confidence_percentage(), "86.75%");
}

#[test]
fn it_rounds_confidence() {
    let res = TextClassification {
        prediction: "Safe".to_string(),
        confidence: 0.99999,
    };
    assert_eq!(res.confidence_percentage(), "100.00%");

    let res = TextClassification {
        prediction: "Safe".to_string(),
        confidence: 0.0,
    };
    assert_eq!(res.confidence_percentage(), "0.00%");
}

#[test]
fn it_summarizes_text() {
    let res = TextClassification {
        prediction: "Safe".to_string(),
        confidence: 0.8675,
    };
    insta::assert_snapshot!(res.summary(), @r###"
    Analysis Result: Safe
    Confidence: 86.75%
    "###);
}

#[test]
fn it_annotates_unsafe_images() {
    let res = ImageClassification {
        prediction: "Unsafe".to_string(),
    };
    assert!(res.is_unsafe());
    assert!(res.summary().contains("Image Analysis Result: Unsafe"));
    assert!(res.summary().contains(UNSAFE_WARNING));
}

#[test]
fn it_does_not_annotate_other_labels() {
    for label in ["Safe", "unsafe", "Unsafe ", ""] {
        let res = ImageClassification {
            prediction: label.to_string(),
        };
        assert!(!res.is_unsafe());
        assert!(!res.summary().contains(UNSAFE_WARNING));
    }
}
