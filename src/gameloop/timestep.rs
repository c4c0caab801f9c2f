use std::time::Duration;

use log::{debug, warn};

use super::handler::GameHandler;

/// Longest frame time fed into the accumulator, in seconds. Anything longer
/// is dropped rather than caught up on.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Step length used when the requested period is zero
pub const DEFAULT_DELTA: f64 = 1.0 / 60.0;

/// Accumulates real time and spends it in fixed simulation steps.
///
/// Each call to [`advance`](Self::advance) is one pass of the loop: zero or
/// more `integrate` calls followed by exactly one `render`.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    delta: f64,
    accumulator: f64,
    t: f64,
    updates: u64,
    frames: u64,
}

impl FixedTimestep {
    pub fn new(period: Duration) -> Self {
        let mut delta = period.as_secs_f64();
        if delta <= 0.0 {
            warn!("update period must be positive, using {DEFAULT_DELTA}s");
            delta = DEFAULT_DELTA;
        }
        Self {
            delta,
            accumulator: 0.0,
            t: 0.0,
            updates: 0,
            frames: 0,
        }
    }

    /// Run one pass with `frame_time` seconds of real time elapsed since the
    /// previous pass.
    pub fn advance<H: GameHandler>(
        &mut self,
        frame_time: f64,
        handler: &mut H,
        state: H::State,
    ) -> H::State {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            debug!(
                "frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        let mut state = state;
        while self.accumulator >= self.delta {
            state = handler.integrate(state, self.t, self.delta);
            self.t += self.delta;
            self.accumulator -= self.delta;
            self.updates += 1;
        }

        handler.render(&state, self.t, self.alpha());
        self.frames += 1;

        state
    }

    /// `1 - remaining / delta`: how far into the next step real time sits
    pub fn alpha(&self) -> f64 {
        1.0 - self.accumulator / self.delta
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Simulated time in seconds
    pub fn simulated_time(&self) -> f64 {
        self.t
    }

    pub fn update_count(&self) -> u64 {
        self.updates
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Integrate { t: f64, delta: f64 },
        Render { state: u32, alpha: f64 },
    }

    /// Counts steps in its state and records every call
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl GameHandler for Recorder {
        type State = u32;

        fn integrate(&mut self, state: u32, t: f64, delta: f64) -> u32 {
            self.calls.push(Call::Integrate { t, delta });
            state + 1
        }

        fn render(&mut self, state: &u32, _t: f64, alpha: f64) {
            self.calls.push(Call::Render {
                state: *state,
                alpha,
            });
        }
    }

    impl Recorder {
        fn integrations(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Integrate { .. }))
                .count()
        }
    }

    fn timestep() -> FixedTimestep {
        FixedTimestep::new(Duration::from_millis(100))
    }

    #[test]
    fn test_no_time_renders_once() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();
        let state = ts.advance(0.0, &mut recorder, 0);

        assert_eq!(state, 0);
        assert_eq!(recorder.calls, vec![Call::Render { state: 0, alpha: 1.0 }]);
    }

    #[test]
    fn test_steps_then_render() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();
        let state = ts.advance(0.25, &mut recorder, 0);

        assert_eq!(state, 2);
        assert_eq!(recorder.calls.len(), 3);
        assert!(matches!(recorder.calls[0], Call::Integrate { t, .. } if t == 0.0));
        assert!(matches!(recorder.calls[1], Call::Integrate { t, .. } if (t - 0.1).abs() < 1e-9));
        match recorder.calls[2] {
            Call::Render { state, alpha } => {
                assert_eq!(state, 2);
                assert!((alpha - 0.5).abs() < 1e-9, "alpha was {alpha}");
            }
            ref other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_fixed_delta_is_passed() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();
        ts.advance(0.1, &mut recorder, 0);

        assert!(matches!(
            recorder.calls[0],
            Call::Integrate { delta, .. } if (delta - 0.1).abs() < 1e-12
        ));
    }

    #[test]
    fn test_accumulator_carries_between_passes() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();

        let state = ts.advance(0.06, &mut recorder, 0);
        assert_eq!(recorder.integrations(), 0);

        let state = ts.advance(0.06, &mut recorder, state);
        assert_eq!(recorder.integrations(), 1);
        assert_eq!(state, 1);
        assert!((ts.alpha() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();
        let state = ts.advance(10.0, &mut recorder, 0);

        // 0.25s holds two whole 0.1s steps
        assert_eq!(state, 2);
        assert_eq!(ts.update_count(), 2);
        assert!((ts.simulated_time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_simulated_time_tracks_steps() {
        let mut ts = timestep();
        let mut recorder = Recorder::default();
        let mut state = 0;
        for _ in 0..20 {
            state = ts.advance(0.05, &mut recorder, state);
        }

        assert_eq!(ts.frame_count(), 20);
        assert_eq!(ts.update_count(), u64::from(state));
        assert!((ts.simulated_time() - f64::from(state) * 0.1).abs() < 1e-9);
        // One second of real time in 0.1s steps, give or take float drift
        assert!((9..=10).contains(&state));
    }

    #[test]
    fn test_zero_period_uses_default() {
        let ts = FixedTimestep::new(Duration::ZERO);
        assert_eq!(ts.delta(), DEFAULT_DELTA);
    }
}
