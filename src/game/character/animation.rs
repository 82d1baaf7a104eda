// Sprite animation playback driven by the controller's animator parameters

use std::collections::HashMap;

use super::sinks::{AnimationSink, AnimatorParams};
use super::state::AnimState;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// `fps` below 1 is raised to 1 so playback always advances
    pub fn new(frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps.max(1.0),
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(frame_count: usize, fps: f32) -> Self {
        Self::new(frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once, holds the last frame)
    pub fn one_shot(frame_count: usize, fps: f32) -> Self {
        Self::new(frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Plays the clip belonging to the current animation state
#[derive(Debug)]
pub struct AnimationPlayer {
    clips: HashMap<AnimState, AnimationClip>,
    current: AnimState,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
    params: Option<AnimatorParams>,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            current: AnimState::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
            params: None,
        }
    }

    /// Create a player with a clip for every state
    pub fn with_standard_clips() -> Self {
        let mut player = Self::new();
        for state in AnimState::ALL {
            let clip = match state {
                AnimState::Jumping
                | AnimState::InhaleSuccess
                | AnimState::Swallow
                | AnimState::FullExhale
                | AnimState::RunStop => AnimationClip::one_shot(6, 12.0),
                AnimState::Walking | AnimState::Running => AnimationClip::looping(8, 12.0),
                _ => AnimationClip::looping(4, 8.0),
            };
            player.add_clip(state, clip);
        }
        player
    }

    pub fn add_clip(&mut self, state: AnimState, clip: AnimationClip) {
        self.clips.insert(state, clip);
    }

    /// Switch to the clip of `state`; no restart if it is already playing
    pub fn play(&mut self, state: AnimState) {
        if self.current != state {
            self.current = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Advance the current clip (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.clips.get(&self.current) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    pub fn current(&self) -> AnimState {
        self.current
    }

    /// Clip name of the current state, for the sprite atlas
    pub fn current_animation(&self) -> &'static str {
        self.current.animation_name()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Last parameter set received
    pub fn params(&self) -> Option<&AnimatorParams> {
        self.params.as_ref()
    }
}

impl AnimationSink for AnimationPlayer {
    fn set_params(&mut self, params: &AnimatorParams) {
        self.play(params.state);
        self.params = Some(*params);
    }

    fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }
}
