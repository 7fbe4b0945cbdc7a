//! Given/when steps for notification dispatch scenarios.

use std::fs;
use std::sync::{Arc, Mutex, PoisonError};

use camino::Utf8PathBuf;
use chime::api::{NotifyParams, notify};
use chime::config::{CONFIG_FILE_NAME, Cli, ConfigLoader, Options};
use chime::dispatch::Dispatcher;
use chime::error::NotifyError;
use chime::notify::{ChannelFuture, DesktopNotifier, SoundPlayer, Speaker};
use clap::Parser;
use mockable::MockEnv;
use mockall::mock;
use rstest_bdd_macros::{given, when};
use tempfile::TempDir;

use super::StepResult;
use super::state::DispatchState;

type CallLog = Arc<Mutex<Vec<String>>>;

mock! {
    #[derive(Debug)]
    Player {}

    impl SoundPlayer for Player {
        fn play(&self, path: &str, volume: Option<f64>) -> ChannelFuture<'_>;
    }
}

mock! {
    #[derive(Debug)]
    Voice {}

    impl Speaker for Voice {
        fn speak(&self, text: &str) -> ChannelFuture<'_>;
    }
}

mock! {
    #[derive(Debug)]
    Notifier {}

    impl DesktopNotifier for Notifier {
        fn notify(&self, title: &str, message: &str) -> ChannelFuture<'_>;
    }
}

#[given("no configuration file")]
fn given_no_configuration_file(dispatch_state: &DispatchState) {
    // Absence of `config_json` means no file is written.
    let _ = dispatch_state;
}

#[given("a configuration file containing {json}")]
fn given_configuration_file(dispatch_state: &DispatchState, json: String) {
    dispatch_state.config_json.set(json);
}

#[given("the command line {args}")]
fn given_command_line(dispatch_state: &DispatchState, args: String) {
    let parts: Vec<String> = args.split_whitespace().map(String::from).collect();
    dispatch_state.args.set(parts);
}

#[given("no command-line flags")]
fn given_no_flags(dispatch_state: &DispatchState) {
    dispatch_state.args.set(Vec::new());
}

#[given("the {channel} channel fails")]
fn given_channel_fails(dispatch_state: &DispatchState, channel: String) {
    let mut failing = dispatch_state.failing.get().unwrap_or_default();
    failing.push(channel);
    dispatch_state.failing.set(failing);
}

#[when("chime runs")]
fn when_chime_runs(dispatch_state: &DispatchState) -> StepResult<()> {
    let dir = TempDir::new().map_err(|e| format!("failed to create workspace: {e}"))?;
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf())
        .map_err(|e| format!("workspace path is not UTF-8: {e}"))?;

    let default_sound = root.join("ding.wav");
    fs::write(&default_sound, b"RIFF").map_err(|e| format!("failed to write sound: {e}"))?;

    let config_path = root.join(CONFIG_FILE_NAME);
    if let Some(json) = dispatch_state.config_json.get() {
        fs::write(&config_path, json).map_err(|e| format!("failed to write config: {e}"))?;
    }

    let args = dispatch_state.args.get().unwrap_or_default();
    let cli = Cli::try_parse_from(std::iter::once(String::from("chime")).chain(args))
        .map_err(|e| format!("failed to parse command line: {e}"))?;

    let mut env = MockEnv::new();
    env.expect_string().returning(|_| None);
    let loader = ConfigLoader::new(&env)
        .with_defaults(Options {
            sound_file: default_sound.into_string(),
            ..Options::default()
        })
        .with_start_dir(root.clone());

    let failing = dispatch_state.failing.get().unwrap_or_default();
    let calls = CallLog::default();
    let dispatcher = Dispatcher::new(
        recording_player(&calls, failing.iter().any(|c| c == "sound")),
        recording_voice(&calls, failing.iter().any(|c| c == "voice")),
        recording_notifier(&calls, failing.iter().any(|c| c == "desktop")),
    );

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| format!("failed to create runtime: {e}"))?;
    let outcome = runtime.block_on(notify(NotifyParams {
        loader: &loader,
        config_path: Some(config_path.as_path()),
        overrides: cli.overrides(),
        dispatcher: &dispatcher,
    }));

    let invoked = calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    dispatch_state.invoked.set(invoked);
    dispatch_state.outcome.set(outcome);
    Ok(())
}

fn record(calls: &CallLog, channel: &str) {
    calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(String::from(channel));
}

fn recording_player(calls: &CallLog, fail: bool) -> MockPlayer {
    let log = Arc::clone(calls);
    let mut player = MockPlayer::new();
    player.expect_play().times(0..).returning(move |_, _| {
        record(&log, "sound");
        Box::pin(async move {
            if fail {
                Err(NotifyError::PlaybackFailed {
                    message: String::from("speaker unplugged"),
                })
            } else {
                Ok(())
            }
        })
    });
    player
}

fn recording_voice(calls: &CallLog, fail: bool) -> MockVoice {
    let log = Arc::clone(calls);
    let mut speaker = MockVoice::new();
    speaker.expect_speak().times(0..).returning(move |_| {
        record(&log, "voice");
        Box::pin(async move {
            if fail {
                Err(NotifyError::SpeechFailed {
                    message: String::from("no voices installed"),
                })
            } else {
                Ok(())
            }
        })
    });
    speaker
}

fn recording_notifier(calls: &CallLog, fail: bool) -> MockNotifier {
    let log = Arc::clone(calls);
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(0..).returning(move |_, _| {
        record(&log, "desktop");
        Box::pin(async move {
            if fail {
                Err(NotifyError::DesktopFailed {
                    message: String::from("no notification daemon"),
                })
            } else {
                Ok(())
            }
        })
    });
    notifier
}
