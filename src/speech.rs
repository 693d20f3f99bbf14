use std::process::{Child, Command, Stdio};

use crate::config::Config;

/// Fire-and-forget text-to-speech. Speaking cancels whatever was still playing.
pub trait SpeechSink {
    fn speak(&mut self, text: &str);
    fn stop(&mut self);
}

/// Speaks by spawning an external program (espeak-ng by default) per utterance.
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
    current: Option<Child>,
    disabled: bool,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current: None,
            disabled: false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl SpeechSink for CommandSpeech {
    fn speak(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        self.stop();
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                tracing::debug!(%text, "speaking");
                self.current = Some(child);
            }
            Err(err) => {
                tracing::warn!(program = %self.program, %err, "speech unavailable, disabling");
                self.disabled = true;
            }
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Already exited is fine; reap either way.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sink used when speech is turned off.
#[derive(Debug, Default)]
pub struct SilentSpeech;

impl SpeechSink for SilentSpeech {
    fn speak(&mut self, text: &str) {
        tracing::trace!(%text, "speech muted");
    }

    fn stop(&mut self) {}
}

pub fn from_config(config: &Config) -> Box<dyn SpeechSink> {
    if config.speech_enabled {
        Box::new(CommandSpeech::new(
            config.speech_command.clone(),
            config.speech_args.clone(),
        ))
    } else {
        Box::new(SilentSpeech)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_disables_speech() {
        let mut speech = CommandSpeech::new("ordena-no-such-speech-binary", Vec::new());
        speech.speak("hola");
        assert!(speech.is_disabled());
        // Further calls are quiet no-ops.
        speech.speak("otra vez");
        speech.stop();
    }

    #[test]
    fn disabled_config_gives_silent_sink() {
        let config = Config {
            speech_enabled: false,
            ..Config::default()
        };
        let mut sink = from_config(&config);
        sink.speak("nada");
        sink.stop();
    }
}
