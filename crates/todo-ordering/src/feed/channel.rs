//! Single-producer, single-consumer snapshot channel
//!
//! A bounded queue that never makes the producer wait. When the buffer is
//! full the newest snapshot is parked in an overflow slot, replacing any
//! snapshot already parked there. The consumer drains the buffer first and
//! then the slot, so versions arrive in ascending order and the newest one
//! is never lost.

use super::snapshot::ListSnapshot;
use crate::domain::errors::FeedError;
use std::future::poll_fn;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_stream::Stream;
use tracing::debug;

/// Buffered snapshots before publishes start coalescing
pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 16;

type Overflow = Arc<Mutex<Option<Arc<ListSnapshot>>>>;

fn lock_slot(slot: &Mutex<Option<Arc<ListSnapshot>>>) -> MutexGuard<'_, Option<Arc<ListSnapshot>>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Create a connected publisher/subscription pair.
///
/// A capacity of zero is raised to one.
pub fn snapshot_channel(capacity: usize) -> (SnapshotPublisher, SnapshotSubscription) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    let overflow: Overflow = Arc::new(Mutex::new(None));
    (
        SnapshotPublisher {
            sender,
            overflow: Arc::clone(&overflow),
        },
        SnapshotSubscription { receiver, overflow },
    )
}

/// Producing half. Owned by the store.
#[derive(Debug)]
pub struct SnapshotPublisher {
    sender: mpsc::Sender<Arc<ListSnapshot>>,
    overflow: Overflow,
}

impl SnapshotPublisher {
    /// Deliver a snapshot without waiting.
    ///
    /// Fails only when the consumer has been dropped.
    pub fn publish(&self, snapshot: ListSnapshot) -> Result<(), FeedError> {
        if self.sender.is_closed() {
            return Err(FeedError::Closed);
        }

        let version = snapshot.version;
        let snapshot = Arc::new(snapshot);
        let mut parked = lock_slot(&self.overflow);

        // Once something is parked, the buffer only holds older versions
        if parked.is_some() {
            debug!(version, "Consumer behind, coalescing snapshot");
            *parked = Some(snapshot);
            return Ok(());
        }

        match self.sender.try_send(snapshot) {
            Ok(()) => {
                debug!(version, "Snapshot published");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(snapshot)) => {
                debug!(version, "Snapshot buffer full, parking snapshot");
                *parked = Some(snapshot);
                Ok(())
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(FeedError::Closed),
        }
    }

    /// Consumer has gone away
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Consuming half.
///
/// Also usable as a `Stream` of snapshots.
#[derive(Debug)]
pub struct SnapshotSubscription {
    receiver: mpsc::Receiver<Arc<ListSnapshot>>,
    overflow: Overflow,
}

impl SnapshotSubscription {
    /// Next snapshot, or `None` once the publisher is dropped and
    /// everything delivered.
    pub async fn recv(&mut self) -> Option<Arc<ListSnapshot>> {
        poll_fn(|cx| self.poll_snapshot(cx)).await
    }

    /// Next snapshot if one is waiting.
    pub fn try_recv(&mut self) -> Result<Option<Arc<ListSnapshot>>, FeedError> {
        let mut parked = lock_slot(&self.overflow);
        match self.receiver.try_recv() {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(parked.take()),
            Err(mpsc::error::TryRecvError::Disconnected) => match parked.take() {
                Some(snapshot) => Ok(Some(snapshot)),
                None => Err(FeedError::Closed),
            },
        }
    }

    /// Drain everything waiting and keep only the newest snapshot.
    pub fn latest(&mut self) -> Result<Option<Arc<ListSnapshot>>, FeedError> {
        let mut newest = None;
        loop {
            match self.try_recv() {
                Ok(Some(snapshot)) => newest = Some(snapshot),
                Ok(None) => return Ok(newest),
                Err(err) if newest.is_none() => return Err(err),
                Err(_) => return Ok(newest),
            }
        }
    }

    fn poll_snapshot(&mut self, cx: &mut Context<'_>) -> Poll<Option<Arc<ListSnapshot>>> {
        // Held across the poll so a publish cannot slip in between the
        // checks and the waker registration
        let mut parked = lock_slot(&self.overflow);
        if let Ok(snapshot) = self.receiver.try_recv() {
            return Poll::Ready(Some(snapshot));
        }
        if let Some(snapshot) = parked.take() {
            return Poll::Ready(Some(snapshot));
        }
        self.receiver.poll_recv(cx)
    }
}

impl Stream for SnapshotSubscription {
    type Item = Arc<ListSnapshot>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_snapshot(cx)
    }
}
