use flip_core::{ChannelSink, FlipConfig, FlipController, TICK_PERIOD, TokioClock, ticker};
use std::time::Duration;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = FlipConfig {
        speed: 0.5,
        flip_interval: 1.0,
        ..FlipConfig::default()
    };

    // Print every command from a separate task, the way a downstream
    // motion controller would consume them.
    let (sink, commands) = ChannelSink::unbounded();
    let printer = tokio::spawn(async move {
        while let Ok(cmd) = commands.recv_async().await {
            println!("linear.x = {:+.2}", cmd.linear.x);
        }
    });

    let mut controller = FlipController::new(&config, TokioClock::new(), sink);
    let stats = ticker::run(
        &mut controller,
        TICK_PERIOD,
        tokio::time::sleep(Duration::from_millis(3050)),
    )
    .await;

    drop(controller);
    printer.await?;

    println!("{stats:#?}");
    Ok(())
}
