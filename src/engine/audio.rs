// Sound clip table
//
// Clips are addressed by name. The bank only resolves names to handles and queues
// them; whatever owns the audio device drains the queue.

use log::warn;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Identifier of a sound clip, derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(u64);

impl SoundId {
    /// Create a new sound ID from a clip path
    pub fn from_path(path: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Clip registered in the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundClip {
    pub id: SoundId,
    pub name: String,
    pub path: String,
}

/// Name -> clip table with a queue of clips waiting to be played
#[derive(Debug)]
pub struct SoundBank {
    clips: HashMap<String, SoundClip>,
    queue: Vec<SoundId>,
    enabled: bool,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            queue: Vec::new(),
            enabled: true,
        }
    }

    /// Bank with the character's clips registered
    pub fn with_character_clips() -> Self {
        let mut bank = Self::new();
        for name in ["jump", "land", "inhale", "capture", "swallow", "exhale"] {
            bank.register(name, &format!("sounds/{}.wav", name));
        }
        bank
    }

    /// Register (or replace) a clip under `name`
    pub fn register(&mut self, name: &str, path: &str) -> SoundId {
        let id = SoundId::from_path(path);
        self.clips.insert(
            name.to_string(),
            SoundClip {
                id,
                name: name.to_string(),
                path: path.to_string(),
            },
        );
        id
    }

    pub fn get(&self, name: &str) -> Option<&SoundClip> {
        self.clips.get(name)
    }

    /// Queue the clip called `name`.
    ///
    /// Silent while disabled; unknown names are reported and dropped.
    pub fn play(&mut self, name: &str) {
        if !self.enabled {
            return;
        }

        match self.clips.get(name) {
            Some(clip) => self.queue.push(clip.id),
            None => warn!("Sound clip not found: {}", name),
        }
    }

    /// Take every clip queued since the last drain
    pub fn drain(&mut self) -> Vec<SoundId> {
        std::mem::take(&mut self.queue)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.queue.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
