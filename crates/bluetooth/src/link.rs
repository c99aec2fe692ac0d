//! Accessory link state tracker.
//!
//! The transport only exposes a level (`is_connected`). The polling loop
//! samples it once per tick and feeds it here so that connects and drops are
//! reported exactly once each.

/// Edge detected between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkTransition {
    /// Link came up.
    Connected,
    /// Link went down.
    Disconnected,
}

/// Edge detector over the sampled link level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkMonitor {
    connected: bool,
}

impl LinkMonitor {
    /// Create a monitor that assumes the link starts down.
    pub const fn new() -> Self {
        Self { connected: false }
    }

    /// Record a sample; returns the edge, if any.
    pub fn observe(&mut self, connected: bool) -> Option<LinkTransition> {
        if connected == self.connected {
            return None;
        }
        self.connected = connected;
        if connected {
            platform::info!("Accessory connected.");
            Some(LinkTransition::Connected)
        } else {
            platform::info!("Accessory disconnected.");
            Some(LinkTransition::Disconnected)
        }
    }

    /// Last sampled level.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkMonitor, LinkTransition};

    #[test]
    fn test_link_starts_disconnected() {
        let monitor = LinkMonitor::new();
        assert!(!monitor.connected());
    }

    #[test]
    fn test_link_connect_reported_once() {
        let mut monitor = LinkMonitor::new();
        assert_eq!(monitor.observe(true), Some(LinkTransition::Connected));
        assert_eq!(monitor.observe(true), None);
        assert!(monitor.connected());
    }

    #[test]
    fn test_link_drop_reported_once() {
        let mut monitor = LinkMonitor::new();
        monitor.observe(true);
        assert_eq!(monitor.observe(false), Some(LinkTransition::Disconnected));
        assert_eq!(monitor.observe(false), None);
        assert!(!monitor.connected());
    }

    #[test]
    fn test_link_initial_down_sample_is_silent() {
        let mut monitor = LinkMonitor::new();
        assert_eq!(monitor.observe(false), None);
    }
}
