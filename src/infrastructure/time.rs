use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock in UTC. Issue dates are derived from this instant's calendar day.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
