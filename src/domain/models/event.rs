use tui_textarea::Input;

use super::SubmissionOutcome;

pub enum Event {
    ClassifierResponse(SubmissionOutcome),
    Notice(String),
    UploadProgress { generation: u64, percent: u8 },
    UploadProgressHidden(u64),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
