use anyhow::Result;
use test_utils::image_fixture;
use test_utils::write_temp_file;

use super::Attachment;

#[test]
fn it_guesses_image_mime_types() {
    assert_eq!(Attachment::new("cat.png", image_fixture()).mime(), "image/png");
    assert_eq!(Attachment::new("CAT.JPG", image_fixture()).mime(), "image/jpeg");
    assert_eq!(Attachment::new("a.b.webp", image_fixture()).mime(), "image/webp");
    assert_eq!(Attachment::new("photo.avif", image_fixture()).mime(), "image/avif");
    assert!(Attachment::new("photo.avif", image_fixture()).is_image());
    assert!(Attachment::new("favicon.ico", image_fixture()).is_image());
}

#[test]
fn it_falls_back_to_octet_stream() {
    let attachment = Attachment::new("archive", image_fixture());
    assert_eq!(attachment.mime(), "application/octet-stream");
    assert!(!attachment.is_image());
}

#[test]
fn it_shares_bytes_between_clones() {
    let attachment = Attachment::new("cat.png", image_fixture());
    let cloned = attachment.clone();

    assert_eq!(attachment.bytes().as_ptr(), cloned.bytes().as_ptr());
}

#[test]
fn it_formats_sizes() {
    assert_eq!(Attachment::new("a.png", vec![0; 512]).human_size(), "512 B");
    assert_eq!(Attachment::new("a.png", vec![0; 2048]).human_size(), "2.0 KB");
    assert_eq!(
        Attachment::new("a.png", vec![0; 3 * 1024 * 1024]).human_size(),
        "3.0 MB"
    );
}

#[test]
fn it_describes_itself() {
    let attachment = Attachment::new("cat.png", vec![0; 10]);
    assert_eq!(attachment.describe(), "cat.png (image/png, 10 B)");
}

#[tokio::test]
async fn it_loads_from_path() -> Result<()> {
    let path = write_temp_file("it_loads_from_path", "dog.gif", image_fixture());
    let attachment = Attachment::from_path(&path).await?;

    assert_eq!(attachment.file_name(), "dog.gif");
    assert_eq!(attachment.mime(), "image/gif");
    assert_eq!(attachment.bytes().as_ref(), image_fixture());

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_missing_path() {
    let path = std::env::temp_dir().join("safechat-tests/does-not-exist.png");
    let res = Attachment::from_path(&path).await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_to_load_directories() {
    let path = write_temp_file("it_fails_to_load_directories", "x.png", image_fixture());
    let res = Attachment::from_path(path.parent().unwrap()).await;
    assert!(res.is_err());
}
