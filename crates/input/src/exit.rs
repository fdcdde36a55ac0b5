//! Exit watching: SIGINT or the first key press ends the run.
//!
//! Terminal input is read by a detached blocking listener, and SIGINT by a
//! task holding one signal stream for the watcher's whole life. Both report
//! into the same one-slot channel; the first report wins. [`ExitWatcher`]
//! exposes the result both as a future ([`ExitWatcher::cancelled`]) for
//! `tokio::select!` and as a non-blocking flag ([`ExitWatcher::is_cancelled`]).

use std::io;
use std::thread;

use crossterm::event::{self, Event};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

use crate::map::exit_reason;

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// SIGINT, or Ctrl+C typed in raw mode.
    Interrupt,
    KeyPress,
    /// Terminal input failed or reached end of file.
    InputClosed,
}

impl ExitReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitReason::Interrupt => "interrupt",
            ExitReason::KeyPress => "key-press",
            ExitReason::InputClosed => "input-closed",
        }
    }
}

pub struct ExitWatcher {
    exit_rx: mpsc::Receiver<ExitReason>,
    fired: Option<ExitReason>,
}

impl ExitWatcher {
    /// Start listening on the terminal.
    pub fn spawn() -> io::Result<Self> {
        Self::from_source(event::read)
    }

    /// Start listening on an arbitrary event source.
    ///
    /// `read` is called on a dedicated thread until it yields an exit event or
    /// an error. The thread is detached; it may stay blocked in `read` after
    /// the watcher is dropped.
    ///
    /// Must be called inside a tokio runtime. The SIGINT handler is installed
    /// before this returns.
    pub fn from_source<F>(mut read: F) -> io::Result<Self>
    where
        F: FnMut() -> io::Result<Event> + Send + 'static,
    {
        let (exit_tx, exit_rx) = mpsc::channel(1);
        spawn_interrupt_listener(exit_tx.clone())?;

        thread::Builder::new()
            .name("exit-listener".to_string())
            .spawn(move || {
                let reason = wait_for_exit(&mut read);
                debug!(reason = reason.as_str(), "exit listener fired");
                // A full slot already carries an exit; nothing to add.
                let _ = exit_tx.try_send(reason);
            })?;

        Ok(Self {
            exit_rx,
            fired: None,
        })
    }

    /// Resolve on SIGINT or the listener's exit event, whichever comes first.
    ///
    /// Cancel-safe: dropping the future (e.g. when another `select!` branch
    /// wins) loses nothing.
    pub async fn cancelled(&mut self) -> ExitReason {
        if let Some(reason) = self.fired {
            return reason;
        }
        let reason = self
            .exit_rx
            .recv()
            .await
            .unwrap_or(ExitReason::InputClosed);
        self.fired = Some(reason);
        reason
    }

    /// Level-triggered check of both exit sources; never blocks.
    pub fn is_cancelled(&mut self) -> bool {
        if self.fired.is_none() {
            match self.exit_rx.try_recv() {
                Ok(reason) => self.fired = Some(reason),
                Err(TryRecvError::Disconnected) => self.fired = Some(ExitReason::InputClosed),
                Err(TryRecvError::Empty) => {}
            }
        }
        self.fired.is_some()
    }

    /// The exit reason, once one has been observed.
    pub fn reason(&self) -> Option<ExitReason> {
        self.fired
    }
}

fn wait_for_exit<F>(read: &mut F) -> ExitReason
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        match read() {
            Ok(ev) => {
                if let Some(reason) = exit_reason(&ev) {
                    return reason;
                }
            }
            Err(e) => {
                warn!(error = %e, "terminal input failed");
                return ExitReason::InputClosed;
            }
        }
    }
}

/// Install the SIGINT handler now and forward the first signal.
fn spawn_interrupt_listener(exit_tx: mpsc::Sender<ExitReason>) -> io::Result<()> {
    let handle = Handle::try_current().map_err(io::Error::other)?;

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        handle.spawn(async move {
            if sigint.recv().await.is_some() {
                let _ = exit_tx.try_send(ExitReason::Interrupt);
            }
        });
    }

    #[cfg(not(unix))]
    handle.spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = exit_tx.try_send(ExitReason::Interrupt);
            }
            Err(e) => warn!(error = %e, "SIGINT handler unavailable, exiting on key press only"),
        }
    });

    Ok(())
}
