//! Focus sounds command handler

use anyhow::Result;

use readify_core::focus::{Sound, SoundBoard};

use crate::output::{Output, OutputFormat};

/// List the ambient sounds
pub fn list(output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            let sounds: Vec<_> = Sound::ALL
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.to_string(),
                        "label": s.label(),
                        "audio_id": s.audio_id()
                    })
                })
                .collect();
            output.json(&sounds);
        }
        OutputFormat::Quiet => {
            for sound in Sound::ALL {
                println!("{}", sound);
            }
        }
        OutputFormat::Human => {
            for sound in Sound::ALL {
                println!("{:<8} {}", sound.to_string(), sound.label());
            }
        }
    }
    Ok(())
}

/// Start one sound, stopping any other
pub fn play(board: &mut SoundBoard, sound: Sound, output: &Output) -> Result<()> {
    output.message(&board.play(sound));
    Ok(())
}

pub fn stop(board: &mut SoundBoard, output: &Output) -> Result<()> {
    output.message(&board.stop());
    Ok(())
}
