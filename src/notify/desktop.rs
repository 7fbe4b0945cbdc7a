//! Desktop notification channel.

use notify_rust::Notification;
use tracing::debug;

use super::{Channel, ChannelFuture, DesktopNotifier};
use crate::config::Options;
use crate::error::NotifyError;

/// Title shown on every desktop notification.
pub const NOTIFICATION_TITLE: &str = "chime";

/// Freedesktop icon name attached to every desktop notification.
const NOTIFICATION_ICON: &str = "dialog-information";

/// Shows the configured message as a desktop notification.
///
/// Does nothing when the message is empty. Returns
/// `"Failed to show notification: <cause>"` when the popup fails.
pub async fn notify_desktop<N>(notifier: &N, options: &Options) -> Option<String>
where
    N: DesktopNotifier + ?Sized,
{
    let message = options.message_text();
    if message.is_empty() {
        debug!("empty message; skipping desktop notification");
        return None;
    }

    match notifier.notify(NOTIFICATION_TITLE, message).await {
        Ok(()) => None,
        Err(e) => {
            debug!(channel = %Channel::Desktop, error = %e, "channel failed");
            Some(format!("Failed to show notification: {e}"))
        }
    }
}

/// Raises notifications through the platform notification service.
///
/// `notify-rust` blocks while talking to the service, so the call runs on
/// tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNotifier;

impl DesktopNotifier for SystemNotifier {
    fn notify(&self, title: &str, message: &str) -> ChannelFuture<'_> {
        let title_owned = title.to_owned();
        let message_owned = message.to_owned();

        Box::pin(async move {
            let shown = tokio::task::spawn_blocking(move || {
                build_notification(&title_owned, &message_owned)
                    .show()
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .await
            .map_err(|e| NotifyError::DesktopFailed {
                message: e.to_string(),
            })?;

            shown.map_err(|message| NotifyError::DesktopFailed { message })
        })
    }
}

/// Builds the popup shown for `message`.
///
/// The icon is a themed name rather than a bundled image, so it resolves
/// wherever the notification service has an icon theme.
fn build_notification(title: &str, message: &str) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname(NOTIFICATION_TITLE)
        .summary(title)
        .body(message)
        .icon(NOTIFICATION_ICON);
    // The sound channel provides the audible cue.
    #[cfg(all(unix, not(target_os = "macos")))]
    notification.hint(notify_rust::Hint::SuppressSound(true));
    notification
}
