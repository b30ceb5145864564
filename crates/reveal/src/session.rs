use mapreveal_kernel::{Host, ModeQuery, PauseControl};
use mapreveal_persist::SnapshotStore;

use crate::engine::{self, RestoreReport, RevealMode, RevealReport};
use crate::error::RevealError;

/// Whether, and how, the loaded map is currently revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    /// Everything exposed, hazards included. The simulation is held paused.
    Revealed,
    /// Exposed except for blocks touching hazardous features.
    SafeRevealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self != RevealState::NotRevealed
    }
}

/// What a toggle ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Revealed(RevealReport),
    Restored(RestoreReport),
}

/// Reveal state and snapshots for one loaded world.
///
/// Owned by whatever manages the world's lifetime; drop it (or make a new one)
/// when a different world is loaded.
#[derive(Debug, Default)]
pub struct RevealSession {
    state: RevealState,
    store: SnapshotStore,
}

impl RevealSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Snapshots held for the current reveal.
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Reveal the map. Only allowed while nothing is revealed.
    pub fn reveal<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        mode: RevealMode,
    ) -> Result<RevealReport, RevealError> {
        if self.state.is_revealed() {
            tracing::warn!(state = ?self.state, "reveal rejected: already revealed");
            return Err(RevealError::AlreadyRevealed);
        }
        let report = engine::reveal(host, &mut self.store, mode).inspect_err(|err| {
            tracing::warn!(%err, "reveal rejected");
        })?;
        self.state = match mode {
            RevealMode::Safe => RevealState::SafeRevealed,
            RevealMode::Full => RevealState::Revealed,
        };
        Ok(report)
    }

    /// Put back the hidden flags saved by the last reveal.
    pub fn unreveal<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<RestoreReport, RevealError> {
        if !self.state.is_revealed() {
            tracing::warn!("unreveal rejected: nothing to revert");
            return Err(RevealError::NothingToRevert);
        }
        let report = engine::restore(host, &mut self.store).inspect_err(|err| {
            tracing::warn!(%err, "unreveal rejected");
        })?;
        self.state = RevealState::NotRevealed;
        Ok(report)
    }

    /// Unreveal if anything is revealed, otherwise do a safe reveal.
    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<ToggleOutcome, RevealError> {
        if self.state.is_revealed() {
            self.unreveal(host).map(ToggleOutcome::Restored)
        } else {
            self.reveal(host, RevealMode::Safe)
                .map(ToggleOutcome::Revealed)
        }
    }

    /// Per-tick hook. While fully revealed in fortress mode, force the
    /// simulation back into pause. Returns whether pause was asserted.
    pub fn on_tick<H: ModeQuery + PauseControl + ?Sized>(&self, host: &mut H) -> bool {
        if self.state != RevealState::Revealed || !host.game_mode().is_interactive() {
            return false;
        }
        host.set_paused(true);
        true
    }
}
