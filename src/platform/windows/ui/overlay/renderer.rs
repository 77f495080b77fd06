//! Direct2D overlay rendering.
//!
//! GPU-accelerated, anti-aliased rendering with per-pixel alpha
//! transparency via UpdateLayeredWindow. Draws every live marker from the
//! engine's retained store each frame.

use std::cell::RefCell;

use windows::core::w;
use windows::Win32::Foundation::{COLORREF, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_PIXEL_FORMAT, D2D_RECT_F,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1DCRenderTarget, ID2D1Factory, ID2D1RenderTarget, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE,
    D2D1_DRAW_TEXT_OPTIONS_NONE, D2D1_ELLIPSE, D2D1_RENDER_TARGET_PROPERTIES,
    D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::DirectWrite::{
    IDWriteFactory, IDWriteTextFormat, DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL,
    DWRITE_FONT_WEIGHT_BOLD, DWRITE_MEASURING_MODE_NATURAL, DWRITE_TEXT_ALIGNMENT_CENTER,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowPos, UpdateLayeredWindow, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    ULW_ALPHA,
};
use windows_numerics::Vector2;

use crate::model::constants::*;
use crate::model::MarkerShape;
use crate::platform::windows::app::state::{WindowsRuntime, STATE};
use crate::surface::Marker;

const LABEL_FONT_SIZE: f32 = 14.0;
const LABEL_BOX_WIDTH: f32 = 80.0;
const LABEL_BOX_HEIGHT: f32 = 20.0;

thread_local! {
    pub static D2D_FACTORY: RefCell<Option<ID2D1Factory>> = const { RefCell::new(None) };
    pub static TEXT_FORMAT: RefCell<Option<IDWriteTextFormat>> = const { RefCell::new(None) };
}

/// Create the centered bold text format used for duration labels.
pub unsafe fn create_label_text_format(
    dwrite_factory: &IDWriteFactory,
) -> Option<IDWriteTextFormat> {
    let format = dwrite_factory
        .CreateTextFormat(
            w!("Segoe UI"),
            None,
            DWRITE_FONT_WEIGHT_BOLD,
            DWRITE_FONT_STYLE_NORMAL,
            DWRITE_FONT_STRETCH_NORMAL,
            LABEL_FONT_SIZE,
            w!("en-us"),
        )
        .ok()?;
    let _ = format.SetTextAlignment(DWRITE_TEXT_ALIGNMENT_CENTER);
    Some(format)
}

/// Redraw the overlay from the engine's marker store.
pub fn update_overlay() {
    STATE.with(|s| {
        let state = s.borrow();
        D2D_FACTORY.with(|d2d_f| {
            TEXT_FORMAT.with(|tf| {
                if let Some(d2d_factory) = d2d_f.borrow().as_ref() {
                    let text_format = tf.borrow();
                    unsafe {
                        update_layered_window_d2d(&state, d2d_factory, text_format.as_ref());
                    }
                }
            });
        });
    });
}

/// Draw using Direct2D and apply with UpdateLayeredWindow.
unsafe fn update_layered_window_d2d(
    state: &WindowsRuntime,
    factory: &ID2D1Factory,
    text_format: Option<&IDWriteTextFormat>,
) {
    let hwnd = state.hwnd;
    let width = state.width;
    let height = state.height;

    // Create a compatible DC and ARGB bitmap
    let screen_dc = GetDC(None);
    let mem_dc = CreateCompatibleDC(Some(screen_dc));

    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height, // Top-down
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
    let bitmap = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0);

    let bitmap = match bitmap {
        Ok(b) if !bits.is_null() => b,
        _ => {
            ReleaseDC(None, screen_dc);
            let _ = DeleteDC(mem_dc);
            return;
        }
    };
    let old_bitmap = SelectObject(mem_dc, bitmap.into());

    // Create DC render target
    let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
        r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: 96.0,
        dpiY: 96.0,
        usage: D2D1_RENDER_TARGET_USAGE_NONE,
        minLevel: Default::default(),
    };

    let render_target: Result<ID2D1DCRenderTarget, _> = factory.CreateDCRenderTarget(&rt_props);

    if let Ok(dc_rt) = render_target {
        let rect = RECT {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        };

        if dc_rt.BindDC(mem_dc, &rect).is_ok() {
            let rt: ID2D1RenderTarget = dc_rt.into();

            rt.BeginDraw();

            // Clear to transparent
            rt.Clear(Some(&D2D1_COLOR_F {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            }));

            rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);

            for (_, marker) in state.engine.surface().markers() {
                draw_marker(&rt, marker, text_format);
            }

            let _ = rt.EndDraw(None, None);
        }
    }

    // Apply to window
    let pt_src = POINT { x: 0, y: 0 };
    let size = SIZE {
        cx: width,
        cy: height,
    };
    let pt_dst = POINT {
        x: state.offset_x,
        y: state.offset_y,
    };

    let blend = windows::Win32::Graphics::Gdi::BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1,
    };

    let _ = UpdateLayeredWindow(
        hwnd,
        Some(screen_dc),
        Some(&pt_dst),
        Some(&size),
        Some(mem_dc),
        Some(&pt_src),
        COLORREF(0),
        Some(&blend),
        ULW_ALPHA,
    );

    // Keep window above taskbar (re-assert topmost position each frame)
    let _ = SetWindowPos(
        hwnd,
        Some(HWND_TOPMOST),
        0,
        0,
        0,
        0,
        SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
    );

    // Cleanup
    SelectObject(mem_dc, old_bitmap);
    let _ = DeleteObject(bitmap.into());
    let _ = DeleteDC(mem_dc);
    ReleaseDC(None, screen_dc);
}

unsafe fn draw_marker(rt: &ID2D1RenderTarget, marker: &Marker, text_format: Option<&IDWriteTextFormat>) {
    let x = marker.position.x as f32;
    let y = marker.position.y as f32;
    let radius = (marker.style.size / 2.0 * marker.scale) as f32;
    let alpha = (marker.alpha * marker.style.color.a) as f32;

    if alpha <= 0.0 || radius <= 0.0 {
        return;
    }

    let color = D2D1_COLOR_F {
        r: marker.style.color.r as f32,
        g: marker.style.color.g as f32,
        b: marker.style.color.b as f32,
        a: alpha,
    };

    let brush = match rt.CreateSolidColorBrush(&color, None) {
        Ok(b) => b,
        Err(_) => return,
    };

    let ellipse = D2D1_ELLIPSE {
        point: Vector2::new(x, y),
        radiusX: radius,
        radiusY: radius,
    };

    match marker.style.shape {
        MarkerShape::Filled => {
            rt.FillEllipse(&ellipse, &brush);
        }
        MarkerShape::Ring { border_width } => {
            rt.DrawEllipse(&ellipse, &brush, border_width as f32, None);
        }
    }

    if marker.style.shows_label && !marker.label.is_empty() {
        if let Some(format) = text_format {
            let top = y + radius + LABEL_GAP as f32;
            let layout = D2D_RECT_F {
                left: x - LABEL_BOX_WIDTH / 2.0,
                top,
                right: x + LABEL_BOX_WIDTH / 2.0,
                bottom: top + LABEL_BOX_HEIGHT,
            };
            let text: Vec<u16> = marker.label.encode_utf16().collect();
            rt.DrawText(
                &text,
                format,
                &layout,
                &brush,
                D2D1_DRAW_TEXT_OPTIONS_NONE,
                DWRITE_MEASURING_MODE_NATURAL,
            );
        }
    }
}
