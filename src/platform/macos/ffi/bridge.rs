//! Thin bridge over the objc2 ecosystem.
//!
//! Re-exports the pieces of objc2/block2 the backend uses and provides a
//! few helpers (`NSApp`, `nsstring_id`, `get_class`, `autoreleasepool`)
//! for the dynamic messaging style used by the overlay view.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{class, msg_send, sel, ClassType};

/// Objective-C object pointer.
///
/// Prefer typed pointers like `&NSView` or `Retained<NSString>` when the
/// type is known. Use `id` only for truly dynamic/unknown types.
pub type id = *mut AnyObject;

/// Null pointer constant.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES (u8, not Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO (u8, not Rust bool).
pub const NO: Bool = Bool::NO;

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use block2::RcBlock;

pub use objc2::rc::Retained;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![objc2_app_kit::NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and return as raw id pointer.
///
/// The returned pointer is retained, so the caller manages memory.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Get a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
