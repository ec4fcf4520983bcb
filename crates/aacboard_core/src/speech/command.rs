//! System TTS program backend.
//!
//! Spawns the program and returns without waiting for it to exit. A detached
//! thread waits on each child so finished programs do not linger as zombies.

use crate::speech::{SpeechCapability, SpeechError, Utterance};
use log::{debug, warn};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

/// espeak words-per-minute at rate 1.0.
const ESPEAK_BASE_WPM: f32 = 175.0;
/// espeak amplitude at volume 1.0 (accepted range 0..=200).
const ESPEAK_BASE_AMPLITUDE: f32 = 100.0;
/// espeak pitch at pitch 1.0 (accepted range 0..=99).
const ESPEAK_BASE_PITCH: f32 = 50.0;
/// macOS `say` words-per-minute at rate 1.0.
const SAY_BASE_WPM: f32 = 175.0;

/// Argument dialect of the configured program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechProgram {
    /// `espeak` / `espeak-ng`: rate, pitch, amplitude and voice flags.
    Espeak,
    /// macOS `say`: rate and voice flags.
    Say,
    /// Anything else: text is passed as the only argument.
    Plain,
}

impl SpeechProgram {
    /// Classifies a program by its file name.
    pub fn detect(program: &str) -> Self {
        let name = Path::new(program)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(program);
        match name {
            "espeak" | "espeak-ng" => Self::Espeak,
            "say" => Self::Say,
            _ => Self::Plain,
        }
    }
}

/// Backend that shells out to a system TTS program.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
    dialect: SpeechProgram,
    voice: Option<String>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>, voice: Option<String>) -> Self {
        let program = program.into();
        let dialect = SpeechProgram::detect(&program);
        Self {
            program,
            dialect,
            voice: voice.filter(|value| !value.trim().is_empty()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn dialect(&self) -> SpeechProgram {
        self.dialect
    }

    /// Builds the argument list for one utterance.
    pub fn arguments(&self, utterance: &Utterance) -> Vec<String> {
        let mut args = Vec::new();
        match self.dialect {
            SpeechProgram::Espeak => {
                args.push("-s".to_string());
                args.push(scaled(ESPEAK_BASE_WPM, utterance.rate, 80, 450).to_string());
                args.push("-p".to_string());
                args.push(scaled(ESPEAK_BASE_PITCH, utterance.pitch, 0, 99).to_string());
                args.push("-a".to_string());
                args.push(scaled(ESPEAK_BASE_AMPLITUDE, utterance.volume, 0, 200).to_string());
                if let Some(voice) = &self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
            }
            SpeechProgram::Say => {
                args.push("-r".to_string());
                args.push(scaled(SAY_BASE_WPM, utterance.rate, 1, 700).to_string());
                if let Some(voice) = &self.voice {
                    args.push("-v".to_string());
                    args.push(voice.clone());
                }
            }
            SpeechProgram::Plain => {}
        }
        // `--` keeps a sentence that starts with `-` from parsing as a flag.
        if self.dialect != SpeechProgram::Plain {
            args.push("--".to_string());
        }
        args.push(utterance.text.clone());
        args
    }
}

impl SpeechCapability for CommandSpeech {
    fn backend_name(&self) -> &'static str {
        "command"
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if utterance.text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let child = Command::new(&self.program)
            .args(self.arguments(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        debug!(
            "event=speech_spawn module=speech status=ok program={} pid={} chars={}",
            self.program,
            child.id(),
            utterance.text.chars().count()
        );
        reap_in_background(child);
        Ok(())
    }
}

fn reap_in_background(mut child: Child) {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name("speech-reaper".to_string())
        .spawn(move || {
            if let Err(err) = child.wait() {
                warn!("event=speech_reap module=speech status=error pid={pid} error={err}");
            }
        });
    if let Err(err) = spawned {
        warn!("event=speech_reap module=speech status=error pid={pid} error={err}");
    }
}

fn scaled(base: f32, factor: f32, min: u32, max: u32) -> u32 {
    let value = (base * factor).round();
    if !value.is_finite() || value <= min as f32 {
        return min;
    }
    if value >= max as f32 {
        return max;
    }
    value as u32
}
