//! One terminal upload: drives `uploader::Uploader` end to end.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use futures::Stream;
use uploader::{GENERIC_FAILURE_MESSAGE, NoPreview, UploadConfig, UploadResult, Uploader, with_simulated_progress};

use crate::error::CliError;
use crate::local_file::LocalFile;
use crate::transport;

/// Tick stream for the progress simulation; the first tick fires after one
/// full period.
pub fn timer_ticks(period: Duration) -> impl Stream<Item = ()> {
    futures::stream::unfold((), move |()| async move {
        tokio::time::sleep(period).await;
        Some(((), ()))
    })
}

pub fn progress_line(percent: u8) -> String {
    format!("Upload progress: {percent}%")
}

/// Validate and upload `file`, reporting each progress change to
/// `on_progress`. Returns the shareable URL.
pub async fn upload<S>(
    client: &reqwest::Client,
    config: &UploadConfig,
    file: LocalFile,
    ticks: S,
    mut on_progress: impl FnMut(u8),
) -> Result<String, CliError>
where
    S: Stream,
{
    let mut uploader = Uploader::new(NoPreview);
    uploader.select(file)?;
    let ticket = uploader.begin_upload()?;

    let outcome = with_simulated_progress(transport::send(client, config, ticket.file()), ticks, |percent| {
        uploader.record_progress(percent);
        on_progress(uploader.progress());
    })
    .await;
    uploader.finish(outcome);

    match uploader.result() {
        Some(UploadResult::Uploaded { url }) => {
            on_progress(uploader.progress());
            Ok(url.clone())
        }
        Some(UploadResult::Failed { message }) => Err(CliError::Upload(message.clone())),
        None => Err(CliError::Upload(GENERIC_FAILURE_MESSAGE.to_owned())),
    }
}
