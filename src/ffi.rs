//! FFI interface for C++ interop
//!
//! Provides C-compatible functions for extracting Dublin Core metadata from
//! HTML. All structured data crosses the boundary as JSON.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use serde::Serialize;

use crate::document::DublinCore;
use crate::error::{DublinCoreError, Result};
use crate::extractors::{ExtractedValue, ExtractionRequest, ExtractionResult, LookupSpec};

/// Result struct returned to C++
/// Both pointers are owned by Rust and must be freed via free_extraction_result
#[repr(C)]
pub struct ExtractionResultFFI {
    /// JSON-serialized result (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Look up Dublin Core elements in HTML according to the request.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
/// * `request_json` - JSON-serialized ExtractionRequest (null-terminated)
///
/// # Returns
/// ExtractionResultFFI with either json_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `request_json` must be a valid null-terminated C string
/// - Caller must free the result via `free_extraction_result`
#[no_mangle]
pub unsafe extern "C" fn extract_from_html(
    html_ptr: *const c_char,
    html_len: usize,
    request_json: *const c_char,
) -> ExtractionResultFFI {
    let html = match read_html(html_ptr, html_len) {
        Ok(html) => html,
        Err(msg) => return make_error_result(msg),
    };

    let request_str = if request_json.is_null() {
        return make_error_result("Request JSON is null");
    } else {
        match CStr::from_ptr(request_json).to_str() {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in request JSON"),
        }
    };

    let result = parse_request(request_str).and_then(|request| perform_extraction(html, &request));
    match result {
        Ok(result) => make_json_result(&result),
        Err(e) => make_error_result(&e.to_string()),
    }
}

/// Extract every Dublin Core element and diagnostic from HTML.
///
/// Returns `{"elements": [...], "errors": [...]}`.
///
/// # Safety
/// Same as extract_from_html
#[no_mangle]
pub unsafe extern "C" fn extract_dublin_core_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> ExtractionResultFFI {
    let html = match read_html(html_ptr, html_len) {
        Ok(html) => html,
        Err(msg) => return make_error_result(msg),
    };

    match DublinCore::new(html) {
        Ok(dc) => make_json_result(&dc),
        Err(e) => make_error_result(&e.to_string()),
    }
}

/// Free an ExtractionResultFFI returned by this module
///
/// # Safety
/// - `result` must have been returned by one of the extraction functions
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_extraction_result(result: ExtractionResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

// Borrow the HTML buffer as UTF-8; null or zero-length yields ""
unsafe fn read_html<'a>(html_ptr: *const c_char, html_len: usize) -> std::result::Result<&'a str, &'static str> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok("");
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    std::str::from_utf8(slice).map_err(|_| "Invalid UTF-8 in HTML content")
}

fn make_json_result<T: Serialize>(value: &T) -> ExtractionResultFFI {
    match serde_json::to_string(value) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ExtractionResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> ExtractionResultFFI {
    let error_cstr = CString::new(msg.replace('\0', "")).unwrap_or_default();
    ExtractionResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}

fn parse_request(request_json: &str) -> Result<ExtractionRequest> {
    serde_json::from_str(request_json).map_err(|e| {
        DublinCoreError::InvalidRequest(format!("Failed to parse request JSON: {}", e))
    })
}

// Perform the lookups named in the request against one parsed document
fn perform_extraction(html: &str, request: &ExtractionRequest) -> Result<ExtractionResult> {
    let dc = DublinCore::new(html)?;
    let mut result = ExtractionResult::default();

    for spec in &request.specs {
        result.values.push(ExtractedValue {
            alias: spec.alias.clone(),
            value: lookup_value(&dc, spec)?,
        });
    }

    Ok(result)
}

fn lookup_value(dc: &DublinCore, spec: &LookupSpec) -> Result<Option<String>> {
    let matches = dc.elements(&spec.element)?;

    if spec.all {
        let contents: Vec<&str> = matches.iter().filter_map(|e| e.raw_content()).collect();
        Ok(Some(serde_json::Value::from(contents).to_string()))
    } else {
        Ok(matches
            .first()
            .and_then(|e| e.raw_content())
            .map(String::from))
    }
}
