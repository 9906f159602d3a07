//! A zero-capacity channel between one producer and one consumer.
//!
//! `send` does not return until the receiver has taken the item, so the
//! producer can never run ahead of the consumer by more than the item it is
//! currently handing over. Dropping the sender closes the channel.

use tokio::sync::{mpsc, oneshot};

/// The receiving half went away before taking the item. The item is dropped.
#[derive(Debug, thiserror::Error)]
#[error("handoff receiver dropped")]
pub struct HandoffClosed;

pub struct HandoffSender<T> {
    slot: mpsc::Sender<(T, oneshot::Sender<()>)>,
}

pub struct HandoffReceiver<T> {
    slot: mpsc::Receiver<(T, oneshot::Sender<()>)>,
}

pub fn handoff<T>() -> (HandoffSender<T>, HandoffReceiver<T>) {
    // tokio refuses a zero sized buffer; the ack below makes the single slot act like none
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { slot: tx }, HandoffReceiver { slot: rx })
}

impl<T> HandoffSender<T> {
    /// Wait until the receiver takes `item`.
    pub async fn send(&self, item: T) -> Result<(), HandoffClosed> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.slot
            .send((item, ack_tx))
            .await
            .map_err(|_| HandoffClosed)?;
        // The ack is dropped unsent when the receiver goes away with the item still queued
        ack_rx.await.map_err(|_| HandoffClosed)
    }
}

impl<T> HandoffReceiver<T> {
    /// Next item, or `None` once the sender is dropped and nothing is pending.
    pub async fn recv(&mut self) -> Option<T> {
        let (item, ack) = self.slot.recv().await?;
        let _ = ack.send(());
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Give every other task on the current-thread test runtime a chance to run
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_items_arrive_in_order_then_close() {
        let (tx, mut rx) = handoff();
        let producer = tokio::spawn(async move {
            for i in 0..5 {
                tx.send(i).await.unwrap();
            }
        });

        let mut received = Vec::new();
        while let Some(i) = rx.recv().await {
            received.push(i);
        }
        producer.await.unwrap();

        assert_eq!(received, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_sender_waits_for_receiver() {
        let (tx, mut rx) = handoff();
        let sent = Arc::new(AtomicUsize::new(0));
        let sent_by_producer = sent.clone();
        let producer = tokio::spawn(async move {
            for i in 0..3 {
                tx.send(i).await.unwrap();
                sent_by_producer.fetch_add(1, Ordering::SeqCst);
            }
        });

        // Nobody is receiving, so the first send can't complete
        settle().await;
        assert_eq!(sent.load(Ordering::SeqCst), 0);

        for expected in 0..3 {
            assert_eq!(rx.recv().await, Some(expected));
            settle().await;
            // Only the items taken so far have completed their send
            assert_eq!(sent.load(Ordering::SeqCst), expected + 1);
        }

        producer.await.unwrap();
        assert_eq!(sent.load(Ordering::SeqCst), 3);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        let (tx, rx) = handoff();
        drop(rx);

        assert!(tx.send("lost").await.is_err());
    }

    #[tokio::test]
    async fn test_receiver_dropped_with_item_queued() {
        let (tx, rx) = handoff::<&str>();
        let sender = tokio::spawn(async move { tx.send("queued").await });

        // The item sits in the slot waiting for an ack
        settle().await;
        assert!(!sender.is_finished());
        drop(rx);

        assert!(sender.await.unwrap().is_err());
    }
}
