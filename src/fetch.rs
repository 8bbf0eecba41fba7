//! Catalog request plumbing between the UI thread and fetch workers.
//!
//! The app never talks to the network itself. It queues [`CatalogRequest`]s in
//! its outbox; [`Dispatcher::pump`] hands each one to a worker thread and feeds
//! finished [`CatalogReply`]s back into the app on the UI thread.

use crate::app::AppState;
use crate::catalog::{CatalogError, CatalogSource, CategorySelector, PlantDetail, PlantId, PlantSummary};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Plants(CategorySelector),
    PlantDetail(PlantId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRequest {
    pub kind: RequestKind,
    /// Position of this request among those for the same screen surface.
    pub generation: u64,
}

#[derive(Debug)]
pub enum ReplyPayload {
    Plants(Result<Vec<PlantSummary>, CatalogError>),
    PlantDetail(Result<Option<PlantDetail>, CatalogError>),
}

#[derive(Debug)]
pub struct CatalogReply {
    pub request: CatalogRequest,
    pub payload: ReplyPayload,
}

impl CatalogReply {
    pub fn failed(request: CatalogRequest, err: CatalogError) -> Self {
        let payload = match request.kind {
            RequestKind::Plants(_) => ReplyPayload::Plants(Err(err)),
            RequestKind::PlantDetail(_) => ReplyPayload::PlantDetail(Err(err)),
        };
        Self { request, payload }
    }
}

/// Runs one request to completion on the calling thread.
pub fn perform(catalog: &dyn CatalogSource, request: CatalogRequest) -> CatalogReply {
    debug!(?request, "performing catalog request");
    let payload = match request.kind {
        RequestKind::Plants(selector) => ReplyPayload::Plants(catalog.plants(selector)),
        RequestKind::PlantDetail(id) => ReplyPayload::PlantDetail(catalog.plant(id)),
    };
    CatalogReply { request, payload }
}

pub struct Dispatcher {
    catalog: Arc<dyn CatalogSource>,
    tx: Sender<CatalogReply>,
    rx: Receiver<CatalogReply>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { catalog, tx, rx }
    }

    /// Starts `request` on its own worker. Nothing cancels it once started.
    pub fn dispatch(&self, request: CatalogRequest) -> Result<(), CatalogError> {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        thread::Builder::new()
            .name("catalog-fetch".to_string())
            .spawn(move || {
                let reply = perform(catalog.as_ref(), request);
                // The receiver only goes away when the app is shutting down.
                let _ = tx.send(reply);
            })?;
        Ok(())
    }

    /// Replies that have arrived since the last call, in arrival order.
    pub fn drain(&self) -> Vec<CatalogReply> {
        self.rx.try_iter().collect()
    }

    /// Sends queued requests out and applies whatever replies are ready.
    pub fn pump(&self, app: &mut AppState) {
        for request in app.take_outbox() {
            if let Err(err) = self.dispatch(request) {
                error!(?request, %err, "could not start catalog request");
                app.apply_reply(CatalogReply::failed(request, err));
            }
        }

        for reply in self.drain() {
            app.apply_reply(reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use std::time::Duration;

    struct TwoPlants;

    impl CatalogSource for TwoPlants {
        fn plants(&self, selector: CategorySelector) -> Result<Vec<PlantSummary>, CatalogError> {
            match selector {
                CategorySelector::All => Ok(vec![
                    PlantSummary::new(1, "Mango Tree"),
                    PlantSummary::new(2, "Neem"),
                ]),
                CategorySelector::Id(_) => Err(CatalogError::Status(404)),
            }
        }

        fn plant(&self, id: PlantId) -> Result<Option<PlantDetail>, CatalogError> {
            Ok((id == PlantId(1)).then(|| PlantSummary::new(1, "Mango Tree").into()))
        }
    }

    fn request(kind: RequestKind) -> CatalogRequest {
        CatalogRequest {
            kind,
            generation: 1,
        }
    }

    #[test]
    fn test_perform_inline() {
        let reply = perform(&TwoPlants, request(RequestKind::Plants(CategorySelector::All)));
        match reply.payload {
            ReplyPayload::Plants(Ok(plants)) => assert_eq!(plants.len(), 2),
            other => panic!("unexpected payload: {:?}", other),
        }

        let reply = perform(&TwoPlants, request(RequestKind::PlantDetail(PlantId(3))));
        assert!(matches!(reply.payload, ReplyPayload::PlantDetail(Ok(None))));
    }

    #[test]
    fn test_dispatch_delivers_reply() {
        let dispatcher = Dispatcher::new(Arc::new(TwoPlants));
        let req = request(RequestKind::Plants(CategorySelector::Id(3)));
        dispatcher.dispatch(req).unwrap();

        let reply = dispatcher
            .rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should reply");
        assert_eq!(reply.request, req);
        assert!(matches!(
            reply.payload,
            ReplyPayload::Plants(Err(CatalogError::Status(404)))
        ));
    }

    #[test]
    fn test_failed_reply_matches_kind() {
        let req = request(RequestKind::PlantDetail(PlantId(1)));
        let reply = CatalogReply::failed(req, CatalogError::Status(500));
        assert!(matches!(reply.payload, ReplyPayload::PlantDetail(Err(_))));
    }
}
