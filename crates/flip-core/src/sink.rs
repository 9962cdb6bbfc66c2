//! Destinations for emitted velocity commands.

use crate::command::VelocityCommand;
use eyre::{Result, eyre};

/// Accepts the commands emitted by the controller.
///
/// Delivery is fire-and-forget. An error is reported back to the
/// controller, which logs it and moves on; the command is never retried.
pub trait CommandSink: Send {
    fn send(&self, command: VelocityCommand) -> Result<()>;
}

impl<S> CommandSink for Box<S>
where
    S: CommandSink + ?Sized,
{
    fn send(&self, command: VelocityCommand) -> Result<()> {
        (**self).send(command)
    }
}

/// A sink that queues commands on a [`flume`] channel.
///
/// The receiving half can live on another thread or task and drain the
/// queue at its own pace.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: flume::Sender<VelocityCommand>,
}

impl ChannelSink {
    pub fn new(tx: flume::Sender<VelocityCommand>) -> Self {
        Self { tx }
    }

    /// Create a sink over a fresh unbounded channel.
    pub fn unbounded() -> (Self, flume::Receiver<VelocityCommand>) {
        let (tx, rx) = flume::unbounded();
        (Self::new(tx), rx)
    }

    /// Create a sink over a fresh bounded channel. Sending to a full
    /// channel fails instead of blocking the tick.
    pub fn bounded(capacity: usize) -> (Self, flume::Receiver<VelocityCommand>) {
        let (tx, rx) = flume::bounded(capacity);
        (Self::new(tx), rx)
    }
}

impl CommandSink for ChannelSink {
    fn send(&self, command: VelocityCommand) -> Result<()> {
        self.tx.try_send(command).map_err(|err| match err {
            flume::TrySendError::Full(_) => eyre!("command queue is full"),
            flume::TrySendError::Disconnected(_) => eyre!("command queue receiver was dropped"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_sink_delivers_in_order() {
        let (sink, rx) = ChannelSink::unbounded();
        sink.send(VelocityCommand::linear_x(1.0)).unwrap();
        sink.send(VelocityCommand::linear_x(-1.0)).unwrap();

        let received: Vec<f64> = rx.try_iter().map(|cmd| cmd.linear.x).collect();
        assert_eq!(received, [1.0, -1.0]);
    }

    #[test]
    fn test_bounded_sink_rejects_when_full() {
        let (sink, rx) = ChannelSink::bounded(1);
        sink.send(VelocityCommand::linear_x(1.0)).unwrap();

        let err = sink.send(VelocityCommand::linear_x(1.0)).unwrap_err();
        assert!(err.to_string().contains("full"));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_sink_reports_dropped_receiver() {
        let (sink, rx) = ChannelSink::unbounded();
        drop(rx);

        let err = sink.send(VelocityCommand::default()).unwrap_err();
        assert!(err.to_string().contains("dropped"));
    }

    #[test]
    fn test_boxed_sink_delegates() {
        let (sink, rx) = ChannelSink::unbounded();
        let boxed: Box<dyn CommandSink> = Box::new(sink);
        boxed.send(VelocityCommand::linear_x(0.5)).unwrap();
        assert_eq!(rx.recv().unwrap().linear.x, 0.5);
    }
}
