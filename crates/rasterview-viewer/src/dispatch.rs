//! Commands posted to the viewer from other threads.
//!
//! The viewer itself is only mutated on its owning thread. Background work
//! sends a [`ViewerCommand`] through a [`CommandSender`]; the owner applies
//! queued commands with `Viewer::process_pending`.

use crate::codec::LoadedImage;
use crate::raster::Image;
use rasterview_core::CodecError;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum ViewerCommand {
    /// Result of a background load.
    Loaded {
        path: PathBuf,
        result: Result<LoadedImage, CodecError>,
    },
    SetImage(Option<Image>),
    SetScale(f64),
    Clear,
}

/// Cloneable handle for posting commands to a viewer.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ViewerCommand>,
}

impl CommandSender {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ViewerCommand>) -> Self {
        Self { tx }
    }

    /// Queues a command; returns false once the viewer has been dropped.
    pub fn send(&self, command: ViewerCommand) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Viewer is gone, dropping command {:?}", e.0);
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

pub(crate) fn channel() -> (CommandSender, mpsc::UnboundedReceiver<ViewerCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSender::new(tx), rx)
}
