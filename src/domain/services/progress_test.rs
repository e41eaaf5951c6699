use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::ProgressTicker;
use crate::domain::models::Event;

impl ProgressTicker {
    fn is_finished(&self) -> bool {
        return self.handle.is_finished();
    }
}

async fn collect_until_hidden(rx: &mut mpsc::UnboundedReceiver<Event>) -> Result<Vec<u8>> {
    let mut percents = vec![];
    loop {
        match rx.recv().await {
            Some(Event::UploadProgress { percent, .. }) => percents.push(percent),
            Some(Event::UploadProgressHidden(_)) => return Ok(percents),
            Some(_) => bail!("Unexpected event"),
            None => bail!("Ticker stopped without hiding"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn it_reaches_one_hundred_and_hides_on_its_own() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let start = Instant::now();
    let _ticker = ProgressTicker::spawn(1, tx);

    let percents = collect_until_hidden(&mut rx).await?;

    assert_eq!(percents.len(), 20);
    assert_eq!(percents.first(), Some(&5));
    assert_eq!(percents.last(), Some(&100));
    assert!(percents.windows(2).all(|pair| return pair[1] == pair[0] + 5));
    assert!(start.elapsed() <= Duration::from_millis(2500));
    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_jumps_to_one_hundred_when_the_request_finishes_first() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let ticker = ProgressTicker::spawn(7, tx);

    match rx.recv().await {
        Some(Event::UploadProgress { generation, percent }) => {
            assert_eq!(generation, 7);
            assert_eq!(percent, 5);
        }
        _ => bail!("Expected a progress update"),
    }

    let start = Instant::now();
    ticker.finish();
    let percents = collect_until_hidden(&mut rx).await?;

    assert_eq!(percents, vec![100]);
    assert!(start.elapsed() <= Duration::from_millis(600));
    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_handles_finish_before_the_first_tick() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let ticker = ProgressTicker::spawn(1, tx);
    ticker.finish();

    let percents = collect_until_hidden(&mut rx).await?;

    assert_eq!(percents, vec![100]);
    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_stops_once_hidden() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let ticker = ProgressTicker::spawn(3, tx);

    collect_until_hidden(&mut rx).await?;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(ticker.is_finished());
    assert!(rx.recv().await.is_none());
    return Ok(());
}
