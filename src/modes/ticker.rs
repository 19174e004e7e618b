use std::{
    sync::mpsc::{self, RecvTimeoutError, SyncSender},
    thread::{self, JoinHandle},
    time::Duration,
};

/// A registered frame callback. The callback runs once per interval on a
/// dedicated scheduling thread until the ticker is disposed or dropped.
pub struct FrameTicker {
    exit_sender: Option<SyncSender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FrameTicker {
    pub fn register<F>(interval: Duration, mut callback: F) -> std::io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (exit_send, exit_recv) = mpsc::sync_channel::<()>(1);

        let thread = thread::Builder::new()
            .name("frame-ticker".into())
            .spawn(move || loop {
                match exit_recv.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => callback(),
                    _ => break,
                }
            })?;

        log::debug!("frame ticker registered, interval {:?}", interval);

        Ok(Self {
            exit_sender: Some(exit_send),
            thread: Some(thread),
        })
    }

    /// Cancels the registration. Returns once the scheduling thread has
    /// stopped, so the callback never runs after this.
    pub fn dispose(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(sender) = self.exit_sender.take() {
            let _ = sender.send(());
        }

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("frame ticker thread panicked");
            }
            log::debug!("frame ticker disposed");
        }
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
