//! Completion chime playback over the default audio output.

use crate::{AppError, AppResult};

use std::{panic::Location, time::Duration};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use error_location::ErrorLocation;
use tracing::{debug, warn};

/// How long the chime rings.
const CHIME_DURATION: Duration = Duration::from_millis(400);

/// Chime pitch in Hz (A5).
const CHIME_FREQUENCY: f32 = 880.0;

/// Peak amplitude, well under full scale to avoid clipping on hot outputs.
const CHIME_AMPLITUDE: f32 = 0.2;

/// Play a named cue without blocking the caller.
///
/// Playback runs on a blocking task; failures are logged and dropped so a
/// missing output device never reaches the caller.
pub(crate) fn play_detached(name: &str) {
    let name = name.to_string();

    let _ = tokio::task::spawn_blocking(move || {
        match play_blocking() {
            Ok(()) => debug!(cue = %name, "Audio cue played"),
            Err(e) => warn!(cue = %name, error = ?e, "Audio cue playback failed"),
        }
    });
}

/// Synthesize the chime and play it, blocking until it finishes.
#[track_caller]
fn play_blocking() -> AppResult<()> {
    let host = cpal::default_host();

    let device = host
        .default_output_device()
        .ok_or_else(|| AppError::AudioCueFailed {
            reason: "No audio output device".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let config = device
        .default_output_config()
        .map_err(|e| AppError::AudioCueFailed {
            reason: format!("Failed to get output config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let channels = config.channels() as usize;
    let stream_config: cpal::StreamConfig = config.into();
    let sample_rate = stream_config.sample_rate as f32;
    let decay_samples = sample_rate * CHIME_DURATION.as_secs_f32();
    let mut clock = 0f32;

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    clock += 1.0;
                    // Linear decay envelope so the chime rings out instead
                    // of cutting off.
                    let envelope = (1.0 - clock / decay_samples).max(0.0);
                    let value = (clock * CHIME_FREQUENCY * 2.0 * std::f32::consts::PI
                        / sample_rate)
                        .sin()
                        * CHIME_AMPLITUDE
                        * envelope;
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| {
                warn!("Audio output stream error: {}", err);
            },
            None,
        )
        .map_err(|e| AppError::AudioCueFailed {
            reason: format!("Failed to build output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    stream.play().map_err(|e| AppError::AudioCueFailed {
        reason: format!("Failed to start output stream: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    std::thread::sleep(CHIME_DURATION);
    drop(stream);

    Ok(())
}
