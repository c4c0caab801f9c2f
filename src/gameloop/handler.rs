/// The two callbacks a game plugs into the fixed-timestep loop.
pub trait GameHandler {
    /// Whatever the game carries from one step to the next
    type State;

    /// Handle one logical step of the game and return the next state.
    ///
    /// `t` is the simulated time in seconds before this step and `delta` the
    /// fixed step length.
    fn integrate(&mut self, state: Self::State, t: f64, delta: f64) -> Self::State;

    /// Draw the current state. Only display logic belongs here.
    ///
    /// `alpha` tells how far real time sits between the last step and the
    /// next, for renderers that interpolate.
    fn render(&mut self, state: &Self::State, t: f64, alpha: f64);
}
