//! macOS-specific entry point and application logic.
//!
//! Creates one overlay window per screen, installs the global event
//! monitors, and drives the engine from a ~60 FPS NSTimer.

use tactus::input::{TapStatus, TAP};
use tactus::platform::macos::app::{register_view, with_engine};
use tactus::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring_id, NSApp, YES,
};
use tactus::platform::macos::input::{install_event_monitors, install_screen_observer};
use tactus::platform::macos::storage::load_config;
use tactus::platform::macos::ui::make_window_for_screen;

use objc2::sel;

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|| {
        unsafe {
            let app = NSApp();
            // NSApplicationActivationPolicyAccessory = 1
            let _: bool = msg_send![app, setActivationPolicy: 1i64];

            // Create one transparent overlay window per screen
            let screens: id = msg_send![get_class("NSScreen"), screens];
            let count: usize = msg_send![screens, count];
            if count == 0 {
                eprintln!("No screens available.");
                return;
            }

            let mut windows: Vec<id> = Vec::with_capacity(count);
            let mut host_view: id = nil;
            for i in 0..count {
                let screen: id = msg_send![screens, objectAtIndex: i];
                let (win, view) = make_window_for_screen(screen);
                // Retain window and view so the autorelease pool cannot
                // deallocate them.
                let _: id = msg_send![win, retain];
                let _: id = msg_send![view, retain];
                let _: () = msg_send![win, orderFrontRegardless];
                register_view(view);
                windows.push(win);
                if host_view == nil {
                    host_view = view;
                }
            }
            // Keep windows vector alive for the duration of the app
            std::mem::forget(windows);

            // Load preferences and enable the engine
            let config = load_config();
            let warn_radius = config.shows_touch_radius;
            with_engine(|engine| engine.start_with(config));
            if warn_radius {
                eprintln!("Contact radius is not reported on this platform; markers keep their configured size");
            }

            // Global event monitors (at most once per process)
            let status = TAP.install(|| install_event_monitors());
            if status == TapStatus::Unavailable {
                eprintln!("Input monitoring unavailable; grant Accessibility permission and restart");
            }

            // React to display layout changes
            install_screen_observer();

            // ~60 FPS frame timer, kept running during menus
            create_timer(host_view, sel!(tickFrame), 0.016);

            let _: () = msg_send![app, run];
        }
    });
}

/// Create an AppKit timer that fires even during modal menus.
///
/// # Safety
/// The target must be a valid NSObject that responds to the selector.
unsafe fn create_timer(target: id, selector: objc2::runtime::Sel, interval: f64) {
    let timer_class = get_class("NSTimer");
    // Create timer without auto-scheduling
    let timer: id = msg_send![
        timer_class,
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    // Add to run loop with CommonModes (keeps running during menus)
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
}
