//! Queueing of UI interactions for dispatch at the end of the frame.

use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::ListEvent;

pub fn queue_list_event(event_tx: &Sender<ListEvent>, event: ListEvent, status: &mut String) {
    match event_tx.try_send(event) {
        Ok(()) => tracing::debug!(%event, "queued ui->model event"),
        Err(TrySendError::Full(_)) => {
            *status = "UI event queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "List event queue disconnected; restart the app".to_string();
        }
    }
}
