use std::time::Duration;

/// Idle color-cycling timer.
///
/// While running, `advance` reports once per shuffle interval of
/// accumulated frame time. A spin suspends cycling; the resume delay is
/// counted down by the same `advance` calls, so a torn-down widget simply
/// stops advancing and no detached timer can fire afterward. Suspending
/// again restarts the delay from the top.
#[derive(Clone, Copy, Debug)]
pub struct DemoMode {
    shuffle_interval: Duration,
    resume_delay: Duration,
    state: DemoState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoState {
    Running { until_shuffle: Duration },
    Suspended { remaining: Duration },
}

impl DemoMode {
    pub fn new(shuffle_interval: Duration, resume_delay: Duration) -> Self {
        Self {
            shuffle_interval,
            resume_delay,
            // First advance shuffles immediately, like the initial shuffle
            // on mount.
            state: DemoState::Running {
                until_shuffle: Duration::ZERO,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DemoState::Running { .. })
    }

    /// Stop cycling for the configured delay; restarts the countdown on
    /// every call.
    pub fn suspend(&mut self) {
        self.state = DemoState::Suspended {
            remaining: self.resume_delay,
        };
    }

    /// Advance by one frame's elapsed time. Returns true when the colors
    /// should be reshuffled now.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match &mut self.state {
            DemoState::Running { until_shuffle } => {
                if *until_shuffle <= dt {
                    *until_shuffle = self.shuffle_interval;
                    true
                } else {
                    *until_shuffle -= dt;
                    false
                }
            }
            DemoState::Suspended { remaining } => {
                *remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    self.state = DemoState::Running {
                        until_shuffle: Duration::ZERO,
                    };
                }
                false
            }
        }
    }
}
