/// Simulated upload/processing pipeline
///
/// A four-phase state machine: Idle -> Uploading -> Processing -> Done.
/// Progress is advanced by ticks the shell feeds in from a periodic timer;
/// the Processing -> Done transition is driven by a one-shot delay. Every
/// selection bumps an epoch, and ticks or delays carrying an older epoch are
/// ignored, so a timer belonging to a superseded upload can never corrupt
/// the state of a newer one.
use super::observe::{Notifier, SubscriberId};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Interval between simulated upload progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Progress added per tick, saturating at 1.0.
pub const PROGRESS_STEP: f32 = 0.02;

/// Length of the post-upload processing phase.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Where the simulation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// No artifact selected yet
    Idle,
    /// Progress ticking towards 1.0
    Uploading,
    /// Upload done, fixed-delay processing pending
    Processing,
    /// Processing finished; the artifact can be displayed
    Done,
}

/// Events delivered to observers, strictly after the mutation they describe.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// A new artifact was selected and the simulation restarted
    Started { artifact: PathBuf },
    /// Progress advanced by one tick (still below 1.0)
    Progressed { progress: f32 },
    /// Progress reached exactly 1.0; processing begins
    UploadFinished,
    /// The processing delay elapsed; the artifact is ready
    ProcessingFinished,
}

/// What the shell should do after feeding in a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep the ticker running
    Continue,
    /// Upload reached 100%: stop the ticker, schedule the processing delay
    ScheduleProcessing,
    /// The tick belonged to a superseded upload (or none is running)
    Stale,
}

/// The upload simulator state machine.
pub struct UploadSimulator {
    selected_artifact: Option<PathBuf>,
    progress: f32,
    upload_complete: bool,
    is_processing: bool,
    epoch: u64,
    notifier: Notifier<UploadEvent>,
}

impl UploadSimulator {
    pub fn new() -> Self {
        UploadSimulator {
            selected_artifact: None,
            progress: 0.0,
            upload_complete: false,
            is_processing: false,
            epoch: 0,
            notifier: Notifier::new(),
        }
    }

    /// Start a simulation for a newly picked artifact.
    ///
    /// `None` means the picker was cancelled: the prior state is kept
    /// untouched and nothing is notified. `Some` restarts the machine and
    /// returns the new epoch the shell must stamp its timers with; bumping
    /// the epoch is what cancels any ticker or delay still pending for a
    /// previous artifact.
    pub fn select_artifact(&mut self, picked: Option<PathBuf>) -> Option<u64> {
        let path = picked?;
        self.epoch += 1;
        self.selected_artifact = Some(path.clone());
        self.progress = 0.0;
        self.upload_complete = false;
        self.is_processing = false;
        self.notifier.notify(&UploadEvent::Started { artifact: path });
        Some(self.epoch)
    }

    /// Advance progress by one tick.
    ///
    /// Stale epochs and ticks outside the Uploading phase are ignored. The
    /// step saturates at 1.0, and the phase transition fires on the tick
    /// whose clamped value compares equal to 1.0.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if epoch != self.epoch || self.phase() != UploadPhase::Uploading {
            return TickOutcome::Stale;
        }

        self.progress = (self.progress + PROGRESS_STEP).min(1.0);

        // Exact comparison is safe: the value was clamped to exactly 1.0.
        if self.progress == 1.0 {
            self.upload_complete = true;
            self.is_processing = true;
            self.notifier.notify(&UploadEvent::UploadFinished);
            TickOutcome::ScheduleProcessing
        } else {
            self.notifier.notify(&UploadEvent::Progressed {
                progress: self.progress,
            });
            TickOutcome::Continue
        }
    }

    /// Complete the processing phase. Called by the shell when the one-shot
    /// delay elapses; stale epochs are ignored.
    pub fn finish_processing(&mut self, epoch: u64) {
        if epoch != self.epoch || !self.is_processing {
            return;
        }
        self.is_processing = false;
        self.notifier.notify(&UploadEvent::ProcessingFinished);
    }

    pub fn phase(&self) -> UploadPhase {
        match (
            self.selected_artifact.is_some(),
            self.upload_complete,
            self.is_processing,
        ) {
            (false, _, _) => UploadPhase::Idle,
            (true, false, _) => UploadPhase::Uploading,
            (true, true, true) => UploadPhase::Processing,
            (true, true, false) => UploadPhase::Done,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn selected_artifact(&self) -> Option<&Path> {
        self.selected_artifact.as_deref()
    }

    /// Current simulation epoch; timers started by the shell must carry it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Register an observer for upload events.
    pub fn subscribe(&mut self, callback: impl Fn(&UploadEvent) + Send + 'static) -> SubscriberId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for UploadSimulator {
    fn default() -> Self {
        Self::new()
    }
}
