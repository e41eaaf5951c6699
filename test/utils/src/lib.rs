use std::env;
use std::fs;
use std::path::PathBuf;

/// Bytes standing in for an uploaded image. Kept ASCII so request bodies can be
/// matched with regexes in mocked servers.
pub fn image_fixture() -> &'static [u8] {
    return b"not-really-a-png-but-close-enough";
}

pub fn text_response_fixture(prediction: &str, confidence: f64) -> String {
    return format!(r#"{{"prediction":"{prediction}","confidence":{confidence}}}"#);
}

pub fn image_response_fixture(prediction: &str) -> String {
    return format!(r#"{{"prediction":"{prediction}"}}"#);
}

/// Writes a fixture into a per-test temp directory and returns its path.
pub fn write_temp_file(test_name: &str, file_name: &str, contents: &[u8]) -> PathBuf {
    let dir = env::temp_dir().join("safechat-tests").join(test_name);
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join(file_name);
    fs::write(&path, contents).unwrap();

    return path;
}
