//! Fixed-timestep game loop
//!
//! Based on the "fix your timestep" accumulator: the simulation advances in
//! constant steps no matter how fast frames are drawn, and every pass ends
//! with one render call carrying an interpolation alpha.
//!
//! The loop runs on its own thread and owns both the handler and the state.
//! All mutation happens inside `integrate` on that thread, so the state needs
//! no locking.

pub mod handler;
pub mod timestep;

pub use handler::GameHandler;
pub use timestep::{FixedTimestep, MAX_FRAME_TIME};

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info};
use tokio::sync::mpsc::{self, error::TryRecvError, Sender};

/// Owner's side of a running loop.
///
/// Dropping the handle also stops the loop, at the start of its next pass.
pub struct LoopHandle<H: GameHandler> {
    stop: Sender<()>,
    worker: JoinHandle<(H, H::State)>,
}

impl<H: GameHandler> LoopHandle<H> {
    /// Ask the loop to exit before its next pass. Safe to call any number
    /// of times; calls in flight are not interrupted.
    pub fn stop(&self) {
        if self.stop.try_send(()).is_ok() {
            debug!("stop signal sent");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Stop the loop and wait for it, getting the handler and final state
    /// back. A panic raised by the handler is returned as the error.
    pub fn join(self) -> thread::Result<(H, H::State)> {
        self.stop();
        self.worker.join()
    }
}

/// Start running `handler` on a new thread, stepping the simulation every
/// `update_rate` and rendering as often as the handler allows.
pub fn start_loop<H>(handler: H, update_rate: Duration, state: H::State) -> io::Result<LoopHandle<H>>
where
    H: GameHandler + Send + 'static,
    H::State: Send + 'static,
{
    let (stop, mut stop_rx) = mpsc::channel::<()>(1);
    let mut timestep = FixedTimestep::new(update_rate);

    let worker = thread::Builder::new()
        .name("gameloop".to_string())
        .spawn(move || {
            let mut handler = handler;
            let mut state = state;
            let mut current = Instant::now();
            info!("game loop started, {:.4}s per step", timestep.delta());

            loop {
                match stop_rx.try_recv() {
                    Err(TryRecvError::Empty) => {}
                    Ok(()) | Err(TryRecvError::Disconnected) => break,
                }

                let now = Instant::now();
                let frame_time = now.duration_since(current).as_secs_f64();
                current = now;

                state = timestep.advance(frame_time, &mut handler, state);
            }

            info!(
                "stopping loop after {} steps and {} frames",
                timestep.update_count(),
                timestep.frame_count()
            );
            (handler, state)
        })?;

    Ok(LoopHandle { stop, worker })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        integrations: u64,
        renders: u64,
        render_before_integrate: bool,
    }

    impl GameHandler for Counter {
        type State = u64;

        fn integrate(&mut self, state: u64, _t: f64, _delta: f64) -> u64 {
            self.integrations += 1;
            state + 1
        }

        fn render(&mut self, state: &u64, _t: f64, _alpha: f64) {
            if *state != self.integrations {
                self.render_before_integrate = true;
            }
            self.renders += 1;
            thread::sleep(Duration::from_millis(1));
        }
    }

    struct Exploding;

    impl GameHandler for Exploding {
        type State = ();

        fn integrate(&mut self, _state: (), _t: f64, _delta: f64) {
            panic!("integrate blew up");
        }

        fn render(&mut self, _state: &(), _t: f64, _alpha: f64) {}
    }

    #[test]
    fn test_loop_steps_and_renders() {
        let handle = start_loop(Counter::default(), Duration::from_millis(2), 0).unwrap();
        thread::sleep(Duration::from_millis(60));
        let (counter, state) = handle.join().unwrap();

        assert!(counter.integrations > 0);
        assert!(counter.renders > 0);
        assert_eq!(state, counter.integrations);
        assert!(!counter.render_before_integrate);
    }

    #[test]
    fn test_stop_twice_is_harmless() {
        let handle = start_loop(Counter::default(), Duration::from_millis(5), 0).unwrap();
        handle.stop();
        handle.stop();
        while !handle.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }

        // The loop is gone; signalling again must not fail either
        handle.stop();
        let (counter, state) = handle.join().unwrap();
        assert_eq!(state, counter.integrations);
    }

    #[test]
    fn test_handler_panic_reaches_owner() {
        let handle = start_loop(Exploding, Duration::from_millis(1), ()).unwrap();
        thread::sleep(Duration::from_millis(20));

        assert!(handle.join().is_err());
    }
}
