//! C entry points of the UTL external scanner (`libutl_ffi`).
//!
//! A tree-sitter parser generated from the UTL grammar links against five
//! symbols named after the language. This crate exports them and routes
//! each call into [`UtlScanner`] through an adapter over the parser's
//! `TSLexer`.
//!
//! # Build Modes
//!
//! - **rlib**: for Rust consumers and the tests in this crate
//! - **staticlib**: linked next to the generated `parser.c` (`libutl_ffi.a`)
//!
//! # Safety
//!
//! All entry points use `#[no_mangle]` and `extern "C"`. The pointers they
//! receive come from the tree-sitter runtime, which keeps the lexer and the
//! valid-symbol array alive for the duration of the call. Null pointers are
//! tolerated and treated as "no token".

#![allow(
    unsafe_code,
    reason = "C-ABI entry points dereference pointers handed over by the parser runtime"
)]
#![allow(
    clippy::not_unsafe_ptr_arg_deref,
    reason = "entry points receive pointers from the tree-sitter runtime which guarantees validity"
)]

use std::ffi::{c_char, c_void};
use std::ptr::NonNull;

use utl_scanner::{ExternalScanner, Lexer, TokenKind, UtlScanner, ValidTokens, EOF_CHAR};

/// Size of the buffer the tree-sitter runtime passes to `serialize`.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// The lexer interface tree-sitter hands to external scanners.
///
/// Field order and types match `TSLexer` in `tree_sitter/parser.h`.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`Lexer`] over a runtime-owned `TSLexer`.
struct FfiLexer {
    raw: NonNull<TSLexer>,
}

impl Lexer for FfiLexer {
    fn lookahead(&self) -> char {
        // SAFETY: `raw` is valid for the whole scan call.
        let code = unsafe { self.raw.as_ref() }.lookahead;
        match u32::try_from(code) {
            Ok(0) => EOF_CHAR,
            Ok(code) => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
            Err(_) => char::REPLACEMENT_CHARACTER,
        }
    }

    fn advance(&mut self) {
        let ptr = self.raw.as_ptr();
        // SAFETY: `raw` is valid; the callback is installed by the runtime.
        unsafe { ((*ptr).advance)(ptr, false) }
    }

    fn skip(&mut self) {
        let ptr = self.raw.as_ptr();
        // SAFETY: as in `advance`.
        unsafe { ((*ptr).advance)(ptr, true) }
    }

    fn mark_end(&mut self) {
        let ptr = self.raw.as_ptr();
        // SAFETY: as in `advance`.
        unsafe { ((*ptr).mark_end)(ptr) }
    }

    fn eof(&self) -> bool {
        let ptr = self.raw.as_ptr().cast_const();
        // SAFETY: as in `advance`.
        unsafe { ((*ptr).eof)(ptr) }
    }

    fn set_result(&mut self, kind: TokenKind) {
        // SAFETY: `raw` is valid and nothing else borrows it during the call.
        unsafe { self.raw.as_mut() }.result_symbol = kind.symbol();
    }
}

/// Create the scanner payload.
///
/// The scanner keeps no state, so the payload is null.
#[no_mangle]
pub extern "C" fn tree_sitter_utl_external_scanner_create() -> *mut c_void {
    std::ptr::null_mut()
}

/// Release the scanner payload. Nothing was allocated.
#[no_mangle]
pub extern "C" fn tree_sitter_utl_external_scanner_destroy(_payload: *mut c_void) {}

/// Write the scanner state into `buffer`; returns the byte count (always 0).
#[no_mangle]
pub extern "C" fn tree_sitter_utl_external_scanner_serialize(
    _payload: *mut c_void,
    buffer: *mut c_char,
) -> u32 {
    if buffer.is_null() {
        return 0;
    }
    // SAFETY: the runtime passes a buffer of `SERIALIZATION_BUFFER_SIZE` bytes.
    let bytes =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    let written = UtlScanner::create().serialize(bytes);
    u32::try_from(written).unwrap_or(0)
}

/// Restore the scanner state from `length` bytes at `buffer`.
#[no_mangle]
pub extern "C" fn tree_sitter_utl_external_scanner_deserialize(
    _payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    let mut scanner = UtlScanner::create();
    if buffer.is_null() || length == 0 {
        scanner.deserialize(&[]);
        return;
    }
    // SAFETY: the runtime passes `length` readable bytes.
    let bytes = unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) };
    scanner.deserialize(bytes);
}

/// Try to recognize one external token at the lexer's position.
///
/// `valid_symbols` holds one flag per external token, in grammar order
/// (`content`, `comment`). On success the token kind is stored in
/// `lexer.result_symbol` and the token ends at the last `mark_end`.
#[no_mangle]
pub extern "C" fn tree_sitter_utl_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(raw) = NonNull::new(lexer) else {
        return false;
    };
    if valid_symbols.is_null() {
        return false;
    }
    // SAFETY: the runtime passes one flag per external token.
    let flags = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let valid = ValidTokens::from_symbols(flags);
    UtlScanner::create().scan(&mut FfiLexer { raw }, valid)
}
