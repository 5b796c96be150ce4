use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use photodeck::gallery::{self, GalleryError, PickTicket, RenderRequest};
use photodeck::host::{FolderHost, FolderRef};

use crate::messages::AppMessage;

pub type MessageSender<H> = UnboundedSender<AppMessage<H>>;

/// Resolve the user's root choice on the host
pub fn spawn_pick_root<F: FolderHost>(
    host: Arc<F>,
    request: String,
    ticket: PickTicket,
    tx: MessageSender<F::Handle>,
) {
    tokio::spawn(async move {
        log::debug!("Picking root {:?}", request);
        let result = gallery::choose_root(host.as_ref(), &request).await;
        let _ = tx.send(AppMessage::RootPicked { ticket, result });
    });
}

/// List, paginate and load one page
pub fn spawn_render<F: FolderHost>(
    host: Arc<F>,
    request: RenderRequest<F::Handle>,
    tx: MessageSender<F::Handle>,
) {
    tokio::spawn(async move {
        let generation = request.generation;
        let start = std::time::Instant::now();
        let outcome = gallery::render(host.as_ref(), request).await;
        log::debug!(
            "Render {} finished in {:.2}s",
            generation,
            start.elapsed().as_secs_f32()
        );
        let _ = tx.send(AppMessage::Rendered(outcome));
    });
}

pub fn spawn_delete<F: FolderHost>(
    host: Arc<F>,
    folder: FolderRef<F::Handle>,
    name: String,
    tx: MessageSender<F::Handle>,
) {
    tokio::spawn(async move {
        let result = host
            .delete_file(&folder, &name)
            .await
            .map_err(GalleryError::from);
        let _ = tx.send(AppMessage::Deleted { name, result });
    });
}
