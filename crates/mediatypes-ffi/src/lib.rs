//! C FFI surface for mediatypes.
//!
//! Pattern: opaque ResolverHandle + C strings + JSON serialization.
//! Every string returned here is owned by the caller and must be released
//! with `mediatypes_string_free`.
//!
//! Resolved media types come back as JSON objects:
//! `{"full_name", "name", "category", "known", "extensions", "template_url"}`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use mediatypes_core::{Category, MediaTypeError, Resolver};

// ---------------------------------------------------------------------------
// Error handling (thread-local last error)
// ---------------------------------------------------------------------------

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(msg: String) {
    log::debug!("mediatypes-ffi: {}", msg);
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(msg));
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Returns the last error message (caller frees with `mediatypes_string_free`).
#[no_mangle]
pub extern "C" fn mediatypes_last_error() -> *mut c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow_mut()
            .take()
            .and_then(|s| CString::new(s).ok())
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut())
    })
}

/// Frees a string returned from mediatypes FFI.
///
/// # Safety
/// Must be a pointer returned from this FFI and not already freed.
#[no_mangle]
pub unsafe extern "C" fn mediatypes_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Returns the FFI API version.
#[no_mangle]
pub extern "C" fn mediatypes_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct ResolverHandle {
    _private: [u8; 0],
}

struct ResolverHandleInner {
    resolver: Resolver,
}

/// Creates a resolver with its own custom-type cache.
/// Release with `mediatypes_resolver_free`.
#[no_mangle]
pub extern "C" fn mediatypes_resolver_new() -> *mut ResolverHandle {
    clear_error();
    let inner = ResolverHandleInner {
        resolver: Resolver::new(),
    };
    Box::into_raw(Box::new(inner)) as *mut ResolverHandle
}

/// Releases a resolver and everything it cached.
#[no_mangle]
pub extern "C" fn mediatypes_resolver_free(handle: *mut ResolverHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle as *mut ResolverHandleInner));
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a media type with the process-wide resolver.
/// Returns JSON (caller frees), or NULL on error.
#[no_mangle]
pub extern "C" fn mediatypes_parse(name: *const c_char) -> *mut c_char {
    clear_error();
    let name_str = match read_name(name) {
        Ok(s) => s,
        Err(e) => return err_null(e),
    };
    json_to_cstr(&mediatypes_core::parse(&name_str).to_value())
}

/// Resolve a media type with the handle's own cache.
/// Returns JSON (caller frees), or NULL on error.
#[no_mangle]
pub extern "C" fn mediatypes_resolver_parse(
    handle: *mut ResolverHandle,
    name: *const c_char,
) -> *mut c_char {
    clear_error();
    let resolver = match resolver_ref(handle) {
        Ok(r) => r,
        Err(e) => return err_null(e),
    };
    let name_str = match read_name(name) {
        Ok(s) => s,
        Err(e) => return err_null(e),
    };
    json_to_cstr(&resolver.parse(&name_str).to_value())
}

/// Number of custom types the handle has cached, or -1 on a null handle.
#[no_mangle]
pub extern "C" fn mediatypes_resolver_cached(handle: *mut ResolverHandle) -> i64 {
    clear_error();
    match resolver_ref(handle) {
        Ok(r) => r.cached_len() as i64,
        Err(e) => {
            set_error(e);
            -1
        }
    }
}

/// Look up a registered type by file extension.
/// Returns JSON (caller frees), or NULL when no registered type claims it.
#[no_mangle]
pub extern "C" fn mediatypes_from_extension(ext: *const c_char) -> *mut c_char {
    clear_error();
    let ext_str = match read_cstr(ext) {
        Ok(s) => s,
        Err(e) => return err_null(e),
    };
    match mediatypes_core::from_extension(&ext_str) {
        Some(media_type) => json_to_cstr(&media_type.to_value()),
        None => ptr::null_mut(),
    }
}

/// 1 if `name` is in the registry, 0 if not, -1 on error.
#[no_mangle]
pub extern "C" fn mediatypes_is_known(name: *const c_char) -> i32 {
    clear_error();
    match read_name(name) {
        Ok(s) => mediatypes_core::parse(&s).is_known() as i32,
        Err(e) => {
            set_error(e);
            -1
        }
    }
}

/// JSON array of category names (caller frees).
#[no_mangle]
pub extern "C" fn mediatypes_categories() -> *mut c_char {
    clear_error();
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    json_to_cstr(&names)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolver_ref<'a>(handle: *mut ResolverHandle) -> Result<&'a Resolver, String> {
    if handle.is_null() {
        return Err("null resolver handle".into());
    }
    let inner = unsafe { &*(handle as *mut ResolverHandleInner) };
    Ok(&inner.resolver)
}

fn read_cstr(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err("null string pointer".into());
    }
    unsafe {
        CStr::from_ptr(ptr)
            .to_str()
            .map(String::from)
            .map_err(|_| "invalid utf-8".into())
    }
}

/// Like `read_cstr`, but blank names are an error.
fn read_name(ptr: *const c_char) -> Result<String, String> {
    let name = read_cstr(ptr)?;
    if name.trim().is_empty() {
        return Err(MediaTypeError::Empty.to_string());
    }
    Ok(name)
}

fn json_to_cstr<T: serde::Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => to_cstr(json),
        Err(e) => err_null(e.to_string()),
    }
}

fn to_cstr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|c| c.into_raw())
        .unwrap_or(ptr::null_mut())
}

fn err_null(msg: String) -> *mut c_char {
    set_error(msg);
    ptr::null_mut()
}

// ---------------------------------------------------------------------------
// FFI Integration Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// Read a *mut c_char into a String and free it.
    fn read_ffi_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null(), "FFI returned null string");
        let s = unsafe { CStr::from_ptr(ptr).to_str().unwrap().to_string() };
        unsafe { mediatypes_string_free(ptr) };
        s
    }

    fn read_ffi_json(ptr: *mut c_char) -> Value {
        serde_json::from_str(&read_ffi_string(ptr)).unwrap()
    }

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    #[test]
    fn ffi_version() {
        assert_eq!(mediatypes_version(), 1);
    }

    #[test]
    fn ffi_resolver_lifecycle() {
        let handle = mediatypes_resolver_new();
        assert!(!handle.is_null());
        assert_eq!(mediatypes_resolver_cached(handle), 0);
        mediatypes_resolver_free(handle);
        mediatypes_resolver_free(ptr::null_mut());
    }

    #[test]
    fn ffi_null_handle_returns_error() {
        let name = c("text/plain");
        let ptr = mediatypes_resolver_parse(ptr::null_mut(), name.as_ptr());
        assert!(ptr.is_null());
        let msg = read_ffi_string(mediatypes_last_error());
        assert!(msg.contains("null"));
        assert_eq!(mediatypes_resolver_cached(ptr::null_mut()), -1);
    }

    #[test]
    fn ffi_string_free_accepts_null() {
        unsafe { mediatypes_string_free(ptr::null_mut()) };
    }

    // -------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------

    #[test]
    fn ffi_parse_known() {
        let name = c("APPLICATION/JSON");
        let value = read_ffi_json(mediatypes_parse(name.as_ptr()));
        assert_eq!(value["full_name"], "application/json");
        assert_eq!(value["name"], "json");
        assert_eq!(value["category"], "application");
        assert_eq!(value["known"], true);
        assert_eq!(value["extensions"][0], "json");
    }

    #[test]
    fn ffi_parse_custom() {
        let name = c("application/x-ffi-made-up");
        let value = read_ffi_json(mediatypes_parse(name.as_ptr()));
        assert_eq!(value["full_name"], "application/x-ffi-made-up");
        assert_eq!(value["name"], "x-ffi-made-up");
        assert_eq!(value["known"], false);
        assert!(value["template_url"].is_null());
    }

    #[test]
    fn ffi_parse_rejects_null_and_blank() {
        assert!(mediatypes_parse(ptr::null()).is_null());
        assert_eq!(read_ffi_string(mediatypes_last_error()), "null string pointer");

        let blank = c("   ");
        assert!(mediatypes_parse(blank.as_ptr()).is_null());
        assert_eq!(read_ffi_string(mediatypes_last_error()), "media type name is empty");
    }

    #[test]
    fn ffi_rejects_invalid_utf8() {
        let bad = CStr::from_bytes_with_nul(b"\xff/x\0").unwrap();

        assert!(mediatypes_parse(bad.as_ptr()).is_null());
        assert_eq!(read_ffi_string(mediatypes_last_error()), "invalid utf-8");

        assert_eq!(mediatypes_is_known(bad.as_ptr()), -1);
        assert_eq!(read_ffi_string(mediatypes_last_error()), "invalid utf-8");

        assert!(mediatypes_from_extension(bad.as_ptr()).is_null());
        assert_eq!(read_ffi_string(mediatypes_last_error()), "invalid utf-8");
    }

    #[test]
    fn ffi_success_clears_previous_error() {
        assert!(mediatypes_parse(ptr::null()).is_null());
        let name = c("text/plain");
        read_ffi_string(mediatypes_parse(name.as_ptr()));
        assert!(mediatypes_last_error().is_null());
    }

    #[test]
    fn ffi_resolver_caches_per_handle() {
        let handle = mediatypes_resolver_new();
        let first = c("Ffi/Handle");
        let second = c("ffi/handle");

        let a = read_ffi_json(mediatypes_resolver_parse(handle, first.as_ptr()));
        let b = read_ffi_json(mediatypes_resolver_parse(handle, second.as_ptr()));
        assert_eq!(a["full_name"], "Ffi/Handle");
        assert_eq!(b["full_name"], "Ffi/Handle");
        assert_eq!(mediatypes_resolver_cached(handle), 1);

        let known = c("image/png");
        read_ffi_string(mediatypes_resolver_parse(handle, known.as_ptr()));
        assert_eq!(mediatypes_resolver_cached(handle), 1);

        mediatypes_resolver_free(handle);
    }

    #[test]
    fn ffi_from_extension() {
        let ext = c(".png");
        let value = read_ffi_json(mediatypes_from_extension(ext.as_ptr()));
        assert_eq!(value["full_name"], "image/png");

        let missing = c("not-an-extension");
        assert!(mediatypes_from_extension(missing.as_ptr()).is_null());
        assert!(mediatypes_last_error().is_null());
    }

    #[test]
    fn ffi_is_known() {
        let known = c("Text/HTML");
        let unknown = c("text/x-ffi-nope");
        assert_eq!(mediatypes_is_known(known.as_ptr()), 1);
        assert_eq!(mediatypes_is_known(unknown.as_ptr()), 0);
        assert_eq!(mediatypes_is_known(ptr::null()), -1);
    }

    #[test]
    fn ffi_categories() {
        let value = read_ffi_json(mediatypes_categories());
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "application");
        assert!(names.contains(&"video"));
        assert!(!names.contains(&""));
    }
}
