//! Audio manager using Kira
//!
//! Owns the audio device for the lifetime of the game and plays sound effects.

use std::collections::{HashMap, HashSet};

use kira::{
    manager::{AudioManager as KiraManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};

use crate::config::AudioConfig;
use crate::game::GameEvent;
use super::sounds::SoundId;

/// Audio manager that handles all sound playback
pub struct AudioManager {
    /// Kira audio manager, `None` when the device could not be opened
    manager: Option<KiraManager>,
    /// Loaded sound data
    sounds: HashMap<SoundId, StaticSoundData>,
    /// Sounds that failed to load; not retried
    missing: HashSet<SoundId>,
    /// Master volume (0.0 - 1.0)
    master_volume: f64,
    /// Whether audio is enabled
    enabled: bool,
}

impl AudioManager {
    /// Open the audio device. Failure disables audio instead of aborting.
    pub fn new(config: &AudioConfig) -> Self {
        let manager = if config.enabled {
            match KiraManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
                Ok(m) => {
                    log::info!("Audio device opened");
                    Some(m)
                }
                Err(e) => {
                    log::warn!("Failed to open audio device: {}. Audio disabled.", e);
                    None
                }
            }
        } else {
            log::info!("Audio disabled by config");
            None
        };

        Self {
            manager,
            sounds: HashMap::new(),
            missing: HashSet::new(),
            master_volume: config.master_volume.clamp(0.0, 1.0),
            enabled: config.enabled,
        }
    }

    /// Load a sound from file
    fn load_sound(sound_id: SoundId) -> Result<StaticSoundData, String> {
        let path = sound_id.file_path();
        if !sound_id.exists() {
            return Err(format!("Sound file not found: {}", path));
        }
        StaticSoundData::from_file(path).map_err(|e| format!("Failed to load sound {}: {:?}", path, e))
    }

    /// Sound data for `sound_id`, loading it on first use
    fn sound_data(&mut self, sound_id: SoundId) -> Option<StaticSoundData> {
        if let Some(data) = self.sounds.get(&sound_id) {
            return Some(data.clone());
        }
        if self.missing.contains(&sound_id) {
            return None;
        }

        match Self::load_sound(sound_id) {
            Ok(data) => {
                self.sounds.insert(sound_id, data.clone());
                Some(data)
            }
            Err(e) => {
                log::debug!("Skipping sound {:?}: {}", sound_id, e);
                self.missing.insert(sound_id);
                None
            }
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, sound_id: SoundId) {
        if !self.is_enabled() {
            return;
        }

        let Some(sound_data) = self.sound_data(sound_id) else {
            return;
        };

        let final_volume = sound_id.default_volume() * self.master_volume;
        let settings = StaticSoundSettings::new().volume(Volume::Amplitude(final_volume));

        if let Some(manager) = &mut self.manager {
            if let Err(e) = manager.play(sound_data.with_settings(settings)) {
                log::debug!("Failed to play sound {:?}: {:?}", sound_id, e);
            }
        }
    }

    /// Play whatever sounds a frame's events call for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(sound_id) = SoundId::for_event(event) {
                self.play(sound_id);
            }
        }
    }

    /// Check if audio is enabled and the device is open
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.manager.is_some()
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        if self.manager.take().is_some() {
            log::info!("Audio device closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent() -> AudioManager {
        AudioManager::new(&AudioConfig {
            enabled: false,
            master_volume: 0.5,
        })
    }

    #[test]
    fn test_disabled_config_skips_device() {
        let audio = silent();
        assert!(!audio.is_enabled());
        assert!(audio.sounds.is_empty());
    }

    #[test]
    fn test_missing_sound_loaded_once() {
        let mut audio = silent();
        let Some(id) = SoundId::ALL.into_iter().find(|id| !id.exists()) else {
            return;
        };

        assert!(audio.sound_data(id).is_none());
        assert!(audio.missing.contains(&id));
        assert!(audio.sound_data(id).is_none());
        assert!(!audio.sounds.contains_key(&id));
    }
}
