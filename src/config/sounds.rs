//! Built-in fallback sound selection.

use camino::Utf8Path;

use crate::platform::Platform;

/// Candidate system sounds for `platform`, most preferred first.
///
/// Unknown platforms are probed with the macOS list.
#[must_use]
pub const fn sound_candidates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOs | Platform::Other => MACOS_SOUNDS,
        Platform::Windows => WINDOWS_SOUNDS,
        Platform::Linux => LINUX_SOUNDS,
    }
}

const MACOS_SOUNDS: &[&str] = &[
    "/System/Library/Sounds/Glass.aiff",
    "/System/Library/Sounds/Ping.aiff",
    "/System/Library/Sounds/Pop.aiff",
    "/System/Library/Sounds/Tink.aiff",
    "/System/Library/Sounds/Hero.aiff",
    "/System/Library/Sounds/Submarine.aiff",
    "/System/Library/Sounds/Purr.aiff",
    "/System/Library/Sounds/Blow.aiff",
    "/System/Library/Sounds/Bottle.aiff",
    "/System/Library/Sounds/Frog.aiff",
    "/System/Library/Sounds/Funk.aiff",
    "/System/Library/Sounds/Morse.aiff",
    "/System/Library/Sounds/Sosumi.aiff",
    "/System/Library/Sounds/Basso.aiff",
];

const WINDOWS_SOUNDS: &[&str] = &[
    r"C:\Windows\Media\chimes.wav",
    r"C:\Windows\Media\ding.wav",
    r"C:\Windows\Media\notify.wav",
    r"C:\Windows\Media\Windows Notify.wav",
    r"C:\Windows\Media\Windows Notify System Generic.wav",
    r"C:\Windows\Media\Windows Background.wav",
    r"C:\Windows\Media\Windows Balloon.wav",
    r"C:\Windows\Media\chord.wav",
    r"C:\Windows\Media\tada.wav",
    r"C:\Windows\Media\Windows Error.wav",
    r"C:\Windows\Media\Windows Exclamation.wav",
    r"C:\Windows\Media\Windows Information Bar.wav",
    r"C:\Windows\Media\Windows Hardware Insert.wav",
    r"C:\Windows\Media\Windows Hardware Remove.wav",
    r"C:\Windows\Media\Windows Message Nudge.wav",
    r"C:\Windows\Media\Windows Proximity Notification.wav",
];

const LINUX_SOUNDS: &[&str] = &[
    "/usr/share/sounds/freedesktop/stereo/complete.oga",
    "/usr/share/sounds/freedesktop/stereo/message.oga",
    "/usr/share/sounds/freedesktop/stereo/bell.oga",
    "/usr/share/sounds/freedesktop/stereo/dialog-information.oga",
];

/// Picks the first candidate sound for `platform` that `exists` accepts.
///
/// Returns an empty string when no candidate exists, which turns the sound
/// channel into a no-op unless a file is configured explicitly.
#[must_use]
pub fn default_sound_file<F>(platform: Platform, exists: F) -> String
where
    F: Fn(&Utf8Path) -> bool,
{
    sound_candidates(platform)
        .iter()
        .copied()
        .find(|candidate| exists(Utf8Path::new(candidate)))
        .map(str::to_owned)
        .unwrap_or_default()
}
