//! One-shot host readiness signal
//!
//! The host runtime owns the [`ReadyTrigger`] and fires it from its "ready"
//! lifecycle event. The launcher awaits the matching [`ReadySignal`] before
//! it builds any window.

use crate::{Error, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::debug;

/// Create a connected trigger/signal pair
pub fn channel() -> (ReadyTrigger, ReadySignal) {
    let (tx, rx) = oneshot::channel();
    (ReadyTrigger { tx }, ReadySignal { rx })
}

/// Host side of the readiness signal. Consumed on fire.
#[derive(Debug)]
pub struct ReadyTrigger {
    tx: oneshot::Sender<()>,
}

impl ReadyTrigger {
    /// Signal that the host can create windows
    pub fn fire(self) {
        debug!("Host runtime ready");
        // The launcher may already be gone; nothing is waiting then.
        let _ = self.tx.send(());
    }
}

/// Launcher side of the readiness signal
#[derive(Debug)]
pub struct ReadySignal {
    rx: oneshot::Receiver<()>,
}

impl Future for ReadySignal {
    type Output = Result<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|fired| fired.map_err(|_| Error::ReadinessLost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[test]
    fn test_pending_until_fired() {
        let (trigger, signal) = channel();
        let mut signal = task::spawn(signal);

        assert_pending!(signal.poll());
        trigger.fire();
        assert!(signal.is_woken());
        assert!(assert_ready!(signal.poll()).is_ok());
    }

    #[test]
    fn test_dropped_trigger_is_lost() {
        let (trigger, signal) = channel();
        let mut signal = task::spawn(signal);

        drop(trigger);
        assert!(matches!(
            assert_ready!(signal.poll()),
            Err(Error::ReadinessLost)
        ));
    }
}
