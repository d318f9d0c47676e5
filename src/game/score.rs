/// A round's score: a monotonic counter, reset only when a round restarts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Score(pub(super) u32);

impl Score {
    pub(super) fn new() -> Score {
        Score(0)
    }

    pub(super) fn add(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    pub(super) fn reset(&mut self) {
        self.0 = 0;
    }

    pub(crate) fn value(self) -> u32 {
        self.0
    }
}
