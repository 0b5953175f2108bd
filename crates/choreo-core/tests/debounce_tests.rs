use choreo_core::*;

/// Manual clock standing in for browser timeouts.
#[derive(Default)]
struct ManualScheduler {
    now_ms: u64,
    next_id: u32,
    timers: Vec<(u32, u64)>,
    cancelled: Vec<u32>,
}

impl ManualScheduler {
    fn advance(&mut self, ms: u64) -> Vec<u32> {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, rest): (Vec<_>, Vec<_>) = self.timers.iter().partition(|(_, at)| *at <= now);
        self.timers = rest;
        due.into_iter().map(|(id, _)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&mut self, delay_ms: u32) -> u32 {
        self.next_id += 1;
        self.timers.push((self.next_id, self.now_ms + delay_ms as u64));
        self.next_id
    }

    fn cancel(&mut self, handle: u32) {
        self.cancelled.push(handle);
        self.timers.retain(|(id, _)| *id != handle);
    }
}

#[test]
fn burst_of_resizes_runs_once_after_the_last() {
    let mut sched = ManualScheduler::default();
    let mut debounce = Debouncer::new(250);
    let mut runs = 0;

    for _ in 0..5 {
        debounce.trigger(&mut sched);
        for id in sched.advance(50) {
            if debounce.fire(id) {
                runs += 1;
            }
        }
    }
    assert_eq!(runs, 0);
    assert_eq!(sched.cancelled.len(), 4);
    assert!(debounce.is_pending());

    for id in sched.advance(199) {
        assert!(!debounce.fire(id));
    }
    for id in sched.advance(1) {
        if debounce.fire(id) {
            runs += 1;
        }
    }
    assert_eq!(runs, 1);
    assert!(!debounce.is_pending());
}

#[test]
fn stale_handles_are_ignored() {
    let mut sched = ManualScheduler::default();
    let mut debounce = Debouncer::new(250);
    let first = debounce.trigger(&mut sched);
    let second = debounce.trigger(&mut sched);
    assert_ne!(first, second);
    assert!(!debounce.fire(first));
    assert!(debounce.fire(second));
    assert!(!debounce.fire(second));
}

#[test]
fn spaced_triggers_each_run() {
    let mut sched = ManualScheduler::default();
    let mut debounce = Debouncer::new(250);
    let mut runs = 0;
    for _ in 0..3 {
        debounce.trigger(&mut sched);
        for id in sched.advance(300) {
            if debounce.fire(id) {
                runs += 1;
            }
        }
    }
    assert_eq!(runs, 3);
    assert!(sched.cancelled.is_empty());
}
