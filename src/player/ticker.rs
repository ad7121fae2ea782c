use crate::player::TICK_INTERVAL;
use crossbeam_channel::Sender;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// One message per simulated second of playback, tagged with the epoch
/// of the ticker that sent it so a tick still in flight when playback
/// stops can be told apart from a live one.
#[derive(Clone, Copy)]
pub struct Tick {
    pub epoch: u64,
}

/// Recurring pulse behind a playing clip.
///
/// Dropping the handle is the only way to stop it: the thread checks a
/// shared flag after every sleep and exits once the flag clears, so the
/// last tick it can emit lands within one interval of the drop.
pub struct Ticker {
    live: Arc<AtomicBool>,
    _thread: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(ticks: Sender<Tick>, epoch: u64) -> Self {
        Self::spawn_with_interval(ticks, epoch, TICK_INTERVAL)
    }

    fn spawn_with_interval(ticks: Sender<Tick>, epoch: u64, interval: Duration) -> Self {
        let live = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&live);

        let handle = thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                // A full slot means the app is stalled; skip the tick
                // rather than queue a burst for later
                let _ = ticks.try_send(Tick { epoch });
            }
        });

        Ticker {
            live,
            _thread: handle,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn test_drop_clears_live_flag() {
        let (tx, _rx) = bounded(1);
        let ticker = Ticker::spawn_with_interval(tx, 1, Duration::from_millis(5));
        let flag = Arc::clone(&ticker.live);

        drop(ticker);
        assert!(!flag.load(Ordering::Relaxed));
    }

    #[test]
    fn test_ticks_carry_their_epoch() {
        let (tx, rx) = bounded(1);
        let _ticker = Ticker::spawn_with_interval(tx, 7, Duration::from_millis(5));

        let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(tick.epoch, 7);
    }

    #[test]
    fn test_pending_ticks_never_pile_up() {
        let (tx, rx) = bounded(1);
        let _ticker = Ticker::spawn_with_interval(tx, 1, Duration::from_millis(5));

        thread::sleep(Duration::from_millis(100));
        assert!(rx.len() <= 1);
    }

    #[test]
    fn test_no_ticks_after_drop() {
        let (tx, rx) = bounded(1);
        let ticker = Ticker::spawn_with_interval(tx, 1, Duration::from_millis(5));
        drop(ticker);

        // Let the thread notice the flag and exit, then flush anything
        // it managed to send first
        thread::sleep(Duration::from_millis(100));
        while rx.try_recv().is_ok() {}

        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }
}
