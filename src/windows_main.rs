//! Windows-specific entry point and application logic.
//!
//! Creates one layered, click-through, topmost window spanning the virtual
//! screen, installs the low-level mouse hook, and drives the engine from a
//! 16 ms frame timer.

use std::sync::atomic::Ordering;

use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Direct2D::{D2D1CreateFactory, D2D1_FACTORY_TYPE_SINGLE_THREADED};
use windows::Win32::Graphics::DirectWrite::{DWriteCreateFactory, DWRITE_FACTORY_TYPE_SHARED};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, MOD_CONTROL, MOD_SHIFT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, GetSystemMetrics, LoadCursorW,
    PostQuitMessage, RegisterClassW, SetTimer, SetWindowPos, SetWindowsHookExW, ShowWindow,
    TranslateMessage, UnhookWindowsHookEx, CS_HREDRAW, CS_VREDRAW, HHOOK, HWND_TOPMOST, IDC_ARROW,
    MSG, SM_CXVIRTUALSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
    SWP_NOACTIVATE, SW_SHOW, WH_MOUSE_LL, WM_CREATE, WM_DESTROY, WM_DISPLAYCHANGE, WM_HOTKEY,
    WM_TIMER, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT, WS_POPUP,
};

use std::time::Instant;

use tactus::input::{TapStatus, TAP};
use tactus::platform::windows::app::STATE;
use tactus::platform::windows::input::{
    mouse_hook_proc, HOTKEY_TOGGLE, MOUSE_HOOK, TIMER_FRAME, TIMER_INTERVAL_MS,
};
use tactus::platform::windows::storage::config;
use tactus::platform::windows::ui::overlay::{
    create_label_text_format, update_overlay, D2D_FACTORY, TEXT_FORMAT,
};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        eprintln!("Tactus error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    unsafe {
        // Initialize COM
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;

        // Create Direct2D factory
        let factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
        D2D_FACTORY.with(|f| *f.borrow_mut() = Some(factory));

        // Create DirectWrite factory and the duration-label text format
        let dwrite_factory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)?;
        if let Some(format) = create_label_text_format(&dwrite_factory) {
            TEXT_FORMAT.with(|f| *f.borrow_mut() = Some(format));
        }

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("TactusOverlay");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Get virtual screen dimensions (all monitors)
        let vx = GetSystemMetrics(SM_XVIRTUALSCREEN);
        let vy = GetSystemMetrics(SM_YVIRTUALSCREEN);
        let vw = GetSystemMetrics(SM_CXVIRTUALSCREEN);
        let vh = GetSystemMetrics(SM_CYVIRTUALSCREEN);

        // Create layered, transparent, topmost window
        let ex_style =
            WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW;

        let hwnd = CreateWindowExW(
            ex_style,
            class_name,
            w!("Tactus Overlay"),
            WS_POPUP,
            vx,
            vy,
            vw,
            vh,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        // Store window state, load the config, enable the engine
        STATE.with(|s| {
            let mut state = s.borrow_mut();
            state.hwnd = hwnd;
            state.width = vw;
            state.height = vh;
            state.offset_x = vx;
            state.offset_y = vy;
            state.config = config::load_config();
            let cfg = state.config.clone();
            state.engine.start_with(cfg);
            if state.config.shows_touch_radius {
                eprintln!("Contact radius is not reported on this platform; markers keep their configured size");
            }
        });

        // Install low-level mouse hook (at most once per process)
        let status = TAP.install(|| match SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) {
            Ok(hook) => {
                MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
                true
            }
            Err(e) => {
                eprintln!("Failed to install mouse hook: {}", e);
                false
            }
        });
        if status == TapStatus::Unavailable {
            eprintln!("Input interception unavailable; overlay will not respond to clicks");
        }

        // Global toggle hotkey (Ctrl+Shift+T)
        let _ = RegisterHotKey(Some(hwnd), HOTKEY_TOGGLE, MOD_CONTROL | MOD_SHIFT, 0x54);

        // Start frame timer
        SetTimer(Some(hwnd), TIMER_FRAME, TIMER_INTERVAL_MS, None);

        // Initial draw and show
        update_overlay();
        let _ = ShowWindow(hwnd, SW_SHOW);

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup
        let hook_handle = MOUSE_HOOK.load(Ordering::SeqCst);
        if hook_handle != 0 {
            let _ = UnhookWindowsHookEx(HHOOK(hook_handle as *mut _));
        }

        let _ = UnregisterHotKey(Some(hwnd), HOTKEY_TOGGLE);

        TEXT_FORMAT.with(|f| *f.borrow_mut() = None);
        D2D_FACTORY.with(|f| *f.borrow_mut() = None);

        CoUninitialize();

        Ok(())
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            WM_TIMER => {
                if wparam.0 == TIMER_FRAME {
                    STATE.with(|s| {
                        s.borrow_mut().engine.tick(Instant::now());
                    });
                    update_overlay();
                }
                LRESULT(0)
            }

            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_TOGGLE {
                    let enabled = STATE.with(|s| {
                        let mut state = s.borrow_mut();
                        if state.engine.is_enabled() {
                            state.engine.stop();
                        } else {
                            let cfg = state.config.clone();
                            state.engine.start_with(cfg);
                        }
                        state.engine.is_enabled()
                    });
                    eprintln!("Toggle: overlay {}", if enabled { "on" } else { "off" });
                    update_overlay();
                }
                LRESULT(0)
            }

            WM_DISPLAYCHANGE => {
                // Virtual screen changed: resize the overlay window and
                // drop markers tied to the old geometry.
                let vx = GetSystemMetrics(SM_XVIRTUALSCREEN);
                let vy = GetSystemMetrics(SM_YVIRTUALSCREEN);
                let vw = GetSystemMetrics(SM_CXVIRTUALSCREEN);
                let vh = GetSystemMetrics(SM_CYVIRTUALSCREEN);
                let _ = SetWindowPos(hwnd, Some(HWND_TOPMOST), vx, vy, vw, vh, SWP_NOACTIVATE);
                STATE.with(|s| {
                    let mut state = s.borrow_mut();
                    state.width = vw;
                    state.height = vh;
                    state.offset_x = vx;
                    state.offset_y = vy;
                    state.engine.surface_changed();
                });
                update_overlay();
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
