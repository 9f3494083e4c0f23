//! Host bridge seam
//!
//! The Mini App runs either inside Telegram (where `Telegram.WebApp` can
//! receive the selection and close the page) or standalone in a plain
//! browser tab. Both capabilities sit behind one trait; the picker picks an
//! implementation at initialization and holds it for its whole life.

use crate::error::Result;
use std::sync::mpsc::Sender;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// A host the widget can hand its selection to
pub trait HostBridge: Send {
    /// Whether a real host is on the other side
    fn is_connected(&self) -> bool;

    /// Tell the host the widget finished initializing
    fn notify_ready(&self);

    /// Deliver the serialized selection
    fn deliver(&self, payload: &str) -> Result<()>;

    /// Ask the host to close the widget
    fn dismiss(&self);
}

/// Host-connected bridge: forwards payloads over a channel
///
/// The native counterpart of `Telegram.WebApp.sendData`; whatever owns the
/// receiving end plays the part of the chat application.
pub struct ChannelBridge {
    tx: Sender<String>,
    dismissed: AtomicBool,
}

impl ChannelBridge {
    pub fn new(tx: Sender<String>) -> Self {
        Self {
            tx,
            dismissed: AtomicBool::new(false),
        }
    }

    /// Whether the host was asked to close the widget
    pub fn dismissed(&self) -> bool {
        self.dismissed.load(Ordering::SeqCst)
    }
}

impl HostBridge for ChannelBridge {
    fn is_connected(&self) -> bool {
        true
    }

    fn notify_ready(&self) {}

    fn deliver(&self, payload: &str) -> Result<()> {
        self.tx
            .send(payload.to_string())
            .map_err(|_| crate::error::Error::Bridge("Host hung up".to_string()))
    }

    fn dismiss(&self) {
        self.dismissed.store(true, Ordering::SeqCst);
    }
}

/// Standalone fallback: no host, selections surface as user-visible alerts
#[derive(Debug, Default)]
pub struct StandaloneBridge {
    alerts: Mutex<Vec<String>>,
}

impl StandaloneBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown to the user so far
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl HostBridge for StandaloneBridge {
    fn is_connected(&self) -> bool {
        false
    }

    fn notify_ready(&self) {}

    fn deliver(&self, payload: &str) -> Result<()> {
        self.alerts
            .lock()
            .unwrap()
            .push(format!("Host bridge unavailable. Selection: {}", payload));
        Ok(())
    }

    fn dismiss(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_channel_bridge_delivers() {
        let (tx, rx) = mpsc::channel();
        let bridge = ChannelBridge::new(tx);

        assert!(bridge.is_connected());
        bridge.deliver(r#"{"lat":55,"lng":37}"#).unwrap();
        assert_eq!(rx.recv().unwrap(), r#"{"lat":55,"lng":37}"#);

        assert!(!bridge.dismissed());
        bridge.dismiss();
        assert!(bridge.dismissed());
    }

    #[test]
    fn test_channel_bridge_host_gone() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let bridge = ChannelBridge::new(tx);
        assert!(bridge.deliver("{}").is_err());
    }

    #[test]
    fn test_standalone_bridge_alerts() {
        let bridge = StandaloneBridge::new();
        assert!(!bridge.is_connected());

        bridge.deliver(r#"{"lat":1.5,"lng":2.5}"#).unwrap();
        let alerts = bridge.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains(r#"{"lat":1.5,"lng":2.5}"#));
    }
}
