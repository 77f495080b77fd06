//! Binary entry point: dispatches to the platform backend.

#[cfg(target_os = "macos")]
mod macos_main;

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        eprintln!("No overlay backend for this platform; embed the tactus library and feed it events directly.");
        std::process::exit(1);
    }
}
