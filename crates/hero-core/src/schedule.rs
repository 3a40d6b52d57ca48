//! Frame scheduling bookkeeping.
//!
//! [`FrameLoop`] is the platform-neutral part of every scheduler: it hands out
//! handles, refuses to start a second driver while one is live, and makes
//! cancellation idempotent. The browser scheduler pairs it with
//! `requestAnimationFrame`; [`ThreadScheduler`] pairs it with a render thread.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    Started(FrameHandle),
    /// A loop was already live; its handle is returned and nothing new runs.
    AlreadyRunning(FrameHandle),
}

impl Start {
    pub fn handle(&self) -> FrameHandle {
        match *self {
            Start::Started(h) | Start::AlreadyRunning(h) => h,
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    next_id: u64,
    active: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Start {
        if let Some(h) = self.active {
            return Start::AlreadyRunning(h);
        }
        self.next_id += 1;
        let h = FrameHandle(self.next_id);
        self.active = Some(h);
        Start::Started(h)
    }

    /// Stop the loop behind `handle`. Returns true only for the call that
    /// actually stopped it; stale or repeated handles are a no-op.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.active == Some(handle) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn is_live(&self, handle: FrameHandle) -> bool {
        self.active == Some(handle)
    }

    pub fn active(&self) -> Option<FrameHandle> {
        self.active
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use thread::ThreadScheduler;

#[cfg(not(target_arch = "wasm32"))]
mod thread {
    use super::{FrameHandle, FrameLoop, Start};
    use crate::constants::{DEFAULT_FPS, MIN_FPS};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread::{self, JoinHandle};
    use std::time::{Duration, Instant};

    struct Running {
        handle: FrameHandle,
        stop: Arc<AtomicBool>,
        join: JoinHandle<()>,
    }

    /// Drives a callback on a dedicated render thread at a fixed cadence until cancelled.
    pub struct ThreadScheduler {
        frame_loop: FrameLoop,
        interval: Duration,
        running: Option<Running>,
    }

    impl ThreadScheduler {
        /// Rates that are not positive fall back to [`DEFAULT_FPS`]; anything
        /// slower than [`MIN_FPS`] is raised to it.
        pub fn new(fps: f32) -> Self {
            let fps = if fps.is_finite() && fps > 0.0 {
                fps.max(MIN_FPS)
            } else {
                DEFAULT_FPS
            };
            Self {
                frame_loop: FrameLoop::new(),
                interval: Duration::from_secs_f32(1.0 / fps),
                running: None,
            }
        }

        pub fn interval(&self) -> Duration {
            self.interval
        }

        pub fn start<F>(&mut self, mut callback: F) -> FrameHandle
        where
            F: FnMut() + Send + 'static,
        {
            self.reap_finished();
            let handle = match self.frame_loop.begin() {
                Start::Started(h) => h,
                Start::AlreadyRunning(h) => {
                    log::warn!("[frame] loop {} already running; ignoring start", h.id());
                    return h;
                }
            };
            let stop = Arc::new(AtomicBool::new(false));
            let stop_thread = stop.clone();
            let interval = self.interval;
            let join = thread::spawn(move || {
                let mut next = Instant::now();
                while !stop_thread.load(Ordering::Acquire) {
                    callback();
                    next += interval;
                    let now = Instant::now();
                    if next > now {
                        thread::sleep(next - now);
                    } else {
                        // fell behind; don't try to catch up with a burst of frames
                        next = now;
                    }
                }
            });
            log::info!("[frame] loop {} started at {:?}/frame", handle.id(), interval);
            self.running = Some(Running { handle, stop, join });
            handle
        }

        /// Stop the loop and wait for the in-flight frame to finish. Idempotent.
        pub fn cancel(&mut self, handle: FrameHandle) {
            if !self.frame_loop.cancel(handle) {
                return;
            }
            if let Some(r) = self.running.take() {
                r.stop.store(true, Ordering::Release);
                if r.join.join().is_err() {
                    log::error!("[frame] render thread for loop {} panicked", r.handle.id());
                }
            }
            log::info!("[frame] loop {} cancelled", handle.id());
        }

        /// True while the render thread is alive. A callback that panicked
        /// ends the loop even though nobody cancelled it.
        pub fn is_running(&self) -> bool {
            self.frame_loop.active().is_some()
                && self.running.as_ref().is_some_and(|r| !r.join.is_finished())
        }

        // a thread that died on its own still holds the loop; release it
        fn reap_finished(&mut self) {
            let finished = self.running.as_ref().is_some_and(|r| r.join.is_finished());
            if let (true, Some(h)) = (finished, self.frame_loop.active()) {
                self.cancel(h);
            }
        }
    }

    impl Drop for ThreadScheduler {
        fn drop(&mut self) {
            if let Some(h) = self.frame_loop.active() {
                self.cancel(h);
            }
        }
    }
}
