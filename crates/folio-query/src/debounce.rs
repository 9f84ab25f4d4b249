//! Debouncing for search input.
//!
//! A [`Debouncer`] forwards only the last value pushed within a quiet
//! period. Each push restarts the timer. Dropping the debouncer cancels a
//! value that has not been delivered yet and closes the output channel.
//!
//! ```no_run
//! # async fn demo() {
//! use folio_query::debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
//!
//! let (search, mut applied) = Debouncer::spawn(DEFAULT_SEARCH_DEBOUNCE);
//! search.push("r".to_string());
//! search.push("ru".to_string());
//! search.push("rust".to_string());
//! assert_eq!(applied.recv().await.as_deref(), Some("rust"));
//! # }
//! ```

use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant};

/// Delay before a search query is applied to a listing.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid input into one value per quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: UnboundedSender<T>,
    delay: Duration,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Start the debounce task and return the input handle plus the
    /// receiver of settled values.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(delay: Duration) -> (Self, UnboundedReceiver<T>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output, output_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(input_rx, output, delay));
        (Self { input, delay }, output_rx)
    }

    /// Push a new value, restarting the quiet period.
    ///
    /// Returns `false` once the debounce task has stopped, which happens
    /// after the receiver of settled values is dropped.
    pub fn push(&self, value: T) -> bool {
        self.input.send(value).is_ok()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

async fn run<T>(mut input: UnboundedReceiver<T>, output: UnboundedSender<T>, delay: Duration) {
    while let Some(first) = input.recv().await {
        let mut pending = first;
        let timer = time::sleep(delay);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                next = input.recv() => match next {
                    Some(value) => {
                        pending = value;
                        timer.as_mut().reset(Instant::now() + delay);
                    }
                    None => {
                        log::trace!("debouncer dropped, discarding pending value");
                        return;
                    }
                },
                () = &mut timer => {
                    if output.send(pending).is_err() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}
