use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::player::player_model::{Player, PlayerId};
use crate::review::review_model::ReviewPage;

// ============================================================================
// Media runtime seam
// ============================================================================

/// A player's source could not be attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot play '{locator}': {reason}")]
pub struct PlaybackError {
    pub locator: String,
    pub reason: String,
}

/// Host media runtime that owns the actual playback resources.
///
/// Each player is scheduled independently; there is no play-all/pause-all.
pub trait MediaRuntime {
    fn attach(&self, id: &PlayerId, player: &Player) -> Result<(), PlaybackError>;
    fn detach(&self, id: &PlayerId);
}

// ============================================================================
// Scoped handles
// ============================================================================

/// Attached playback resource. Dropping it detaches from the runtime.
pub struct PlayerHandle {
    id: PlayerId,
    runtime: Rc<dyn MediaRuntime>,
}

impl PlayerHandle {
    fn acquire(
        id: PlayerId,
        player: &Player,
        runtime: &Rc<dyn MediaRuntime>,
    ) -> Result<Self, PlaybackError> {
        runtime.attach(&id, player)?;
        debug!(player = %id, "attached player");
        Ok(Self {
            id,
            runtime: Rc::clone(runtime),
        })
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        self.runtime.detach(&self.id);
        debug!(player = %self.id, "detached player");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// Source handed to the runtime
    Attached,
    /// Placeholder: nothing to play
    Empty,
    /// Runtime refused the source; only this player is affected
    Failed(String),
}

struct MountedPlayer {
    id: PlayerId,
    state: PlaybackState,
    _handle: Option<PlayerHandle>,
}

// ============================================================================
// Mounted page
// ============================================================================

/// A review page whose players hold live runtime resources.
///
/// Handles are released on `unmount`, on drop, and before every remount.
pub struct MountedPage {
    runtime: Rc<dyn MediaRuntime>,
    fingerprint: String,
    players: Vec<MountedPlayer>,
}

impl MountedPage {
    pub fn mount(page: &ReviewPage, runtime: Rc<dyn MediaRuntime>) -> Self {
        let players = mount_players(page, &runtime);
        Self {
            runtime,
            fingerprint: page.fingerprint(),
            players,
        }
    }

    /// Swap in a new page. Returns `false` when the page is unchanged and
    /// nothing was remounted.
    pub fn update(&mut self, page: &ReviewPage) -> bool {
        let fingerprint = page.fingerprint();
        if fingerprint == self.fingerprint {
            return false;
        }

        // Release everything from the old page before acquiring again.
        self.players.clear();
        self.players = mount_players(page, &self.runtime);
        self.fingerprint = fingerprint;
        true
    }

    pub fn unmount(mut self) {
        self.players.clear();
    }

    pub fn state(&self, id: &PlayerId) -> Option<&PlaybackState> {
        self.players.iter().find(|p| &p.id == id).map(|p| &p.state)
    }

    pub fn states(&self) -> Vec<(PlayerId, PlaybackState)> {
        self.players
            .iter()
            .map(|p| (p.id.clone(), p.state.clone()))
            .collect()
    }

    pub fn attached_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.state == PlaybackState::Attached)
            .count()
    }
}

fn mount_players(page: &ReviewPage, runtime: &Rc<dyn MediaRuntime>) -> Vec<MountedPlayer> {
    let ids = std::iter::once(PlayerId::primary())
        .chain(page.gallery.iter().map(|c| PlayerId::roi(&c.entry.key)));

    ids.zip(page.players())
        .map(|(id, player)| mount_one(id, player, runtime))
        .collect()
}

fn mount_one(id: PlayerId, player: &Player, runtime: &Rc<dyn MediaRuntime>) -> MountedPlayer {
    if player.is_placeholder() {
        return MountedPlayer {
            id,
            state: PlaybackState::Empty,
            _handle: None,
        };
    }

    match PlayerHandle::acquire(id.clone(), player, runtime) {
        Ok(handle) => MountedPlayer {
            id,
            state: PlaybackState::Attached,
            _handle: Some(handle),
        },
        Err(e) => {
            warn!(player = %id, error = %e, "player failed to attach");
            MountedPlayer {
                id,
                state: PlaybackState::Failed(e.to_string()),
                _handle: None,
            }
        }
    }
}

// ============================================================================
// Recording runtime
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    Attach { id: PlayerId, locator: String },
    Detach { id: PlayerId },
}

/// In-memory runtime that records attach/detach calls.
///
/// Locators registered with `failing_on` are refused at attach time.
#[derive(Debug, Default)]
pub struct RecordingRuntime {
    events: RefCell<Vec<RuntimeEvent>>,
    failing: HashSet<String>,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, locator: &str) -> Self {
        self.failing.insert(locator.to_string());
        self
    }

    pub fn events(&self) -> Vec<RuntimeEvent> {
        self.events.borrow().clone()
    }

    /// Players currently attached (attached and not yet detached).
    pub fn live(&self) -> Vec<PlayerId> {
        let mut live: Vec<PlayerId> = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                RuntimeEvent::Attach { id, .. } => live.push(id.clone()),
                RuntimeEvent::Detach { id } => live.retain(|l| l != id),
            }
        }
        live
    }
}

impl MediaRuntime for RecordingRuntime {
    fn attach(&self, id: &PlayerId, player: &Player) -> Result<(), PlaybackError> {
        let locator = player
            .source
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default();

        if self.failing.contains(&locator) {
            return Err(PlaybackError {
                locator,
                reason: "media unavailable".into(),
            });
        }

        self.events.borrow_mut().push(RuntimeEvent::Attach {
            id: id.clone(),
            locator,
        });
        Ok(())
    }

    fn detach(&self, id: &PlayerId) {
        self.events
            .borrow_mut()
            .push(RuntimeEvent::Detach { id: id.clone() });
    }
}

// ============================================================================
// Local file runtime
// ============================================================================

/// Runtime that only checks that local sources exist on disk.
///
/// Locators with a URI scheme (`http://`, `blob:` ...) are accepted as-is;
/// anything else is resolved against `base_dir`.
#[derive(Debug, Clone)]
pub struct LocalFileRuntime {
    base_dir: PathBuf,
}

impl LocalFileRuntime {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl MediaRuntime for LocalFileRuntime {
    fn attach(&self, _id: &PlayerId, player: &Player) -> Result<(), PlaybackError> {
        let Some(source) = &player.source else {
            return Ok(());
        };
        let locator = source.as_str();
        if has_scheme(locator) {
            return Ok(());
        }

        let path = self.base_dir.join(locator);
        if path.is_file() {
            Ok(())
        } else {
            Err(PlaybackError {
                locator: locator.to_string(),
                reason: format!("no file at {}", path.display()),
            })
        }
    }

    fn detach(&self, _id: &PlayerId) {}
}

fn has_scheme(locator: &str) -> bool {
    match locator.split_once(':') {
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}
