/*
[INPUT]:  Feed client, UI event channel, view-lifetime cancellation token
[OUTPUT]: One-shot blog feed fetch delivered into the event loop
[POS]:    TUI feed fetch side effect
[UPDATE]: When fetch delivery or cancellation semantics change
*/

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use taskdeck_feed::FeedClient;

use super::runtime::UiEvent;

/// Spawn the single startup fetch of the blog feed.
///
/// The request races the view-lifetime token: quitting the TUI cancels an
/// in-flight fetch, and a completion that loses the race (or lands after the
/// event loop dropped its receiver) is discarded. Failures are logged and the
/// feed panel simply stays empty; there is no retry.
pub(super) fn spawn_feed_fetch(
    client: FeedClient,
    event_tx: mpsc::UnboundedSender<UiEvent>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("feed fetch cancelled before completion");
            }
            result = client.fetch_posts() => match result {
                Ok(posts) => {
                    info!(count = posts.len(), "blog feed loaded");
                    let _ = event_tx.send(UiEvent::FeedLoaded(posts));
                }
                Err(err) => {
                    warn!(error = %err, "blog feed fetch failed; feed panel stays empty");
                }
            },
        }
    });
}
