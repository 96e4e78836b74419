//! Periodic ping in the background.
//!
//! # Responsibilities
//! - Run the relay on a fixed interval when enabled
//! - Log each rendered outcome
//! - Exit promptly on shutdown

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::config::PingConfig;
use crate::ping::relay::PingRelay;

pub struct PingScheduler {
    relay: PingRelay,
    enabled: bool,
    interval: Duration,
}

impl PingScheduler {
    pub fn new(relay: PingRelay, config: &PingConfig) -> Self {
        Self {
            relay,
            enabled: config.schedule_enabled,
            interval: Duration::from_secs(config.schedule_interval_secs),
        }
    }

    /// Override the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.enabled {
            tracing::info!("Scheduled ping disabled");
            return;
        }

        tracing::info!(
            interval = ?self.interval,
            target_url = %self.relay.target(),
            "Ping scheduler starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => {
                    tracing::info!("Ping scheduler received shutdown signal, exiting loop");
                    break;
                }
            }

            // A ping in flight must not hold up shutdown for its whole deadline.
            tokio::select! {
                outcome = self.relay.ping() => {
                    tracing::info!(result = %outcome.render(), "Scheduled ping");
                }
                _ = shutdown.recv() => {
                    tracing::info!("Ping scheduler received shutdown signal, abandoning in-flight ping");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test]
    async fn test_disabled_scheduler_returns_immediately() {
        let config = PingConfig::default();
        let scheduler = PingScheduler::new(PingRelay::new(&config).unwrap(), &config);
        assert!(!scheduler.is_enabled());

        let shutdown = Shutdown::new();
        time::timeout(Duration::from_secs(1), scheduler.run(shutdown.subscribe()))
            .await
            .expect("disabled scheduler should not loop");
    }

    #[tokio::test]
    async fn test_enabled_scheduler_stops_on_shutdown() {
        let mut config = PingConfig::default();
        config.schedule_enabled = true;
        config.target_url = "not a uri".into();
        let scheduler = PingScheduler::new(PingRelay::new(&config).unwrap(), &config)
            .with_interval(Duration::from_millis(50));

        let shutdown = Shutdown::new();
        let handle = tokio::spawn(scheduler.run(shutdown.subscribe()));

        time::sleep(Duration::from_millis(120)).await;
        shutdown.trigger();

        time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("scheduler should exit after shutdown")
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_interrupts_in_flight_ping() {
        // Accepted into the backlog, never answered.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut config = PingConfig::default();
        config.schedule_enabled = true;
        config.target_url = format!("http://{}/ping", addr);
        config.timeout_secs = 30;
        let scheduler = PingScheduler::new(PingRelay::new(&config).unwrap(), &config);

        let shutdown = Shutdown::new();
        let handle = tokio::spawn(scheduler.run(shutdown.subscribe()));

        // First tick fires immediately; the ping is now waiting on the upstream.
        time::sleep(Duration::from_millis(200)).await;
        shutdown.trigger();

        time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("scheduler should not wait out the ping deadline")
            .unwrap();
        drop(listener);
    }
}
