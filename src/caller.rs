//! Call-stack capture for diagnostics.
//!
//! Nothing else in the crate depends on this module. It exists for callers
//! that want to log where a tag or case conversion was requested from.
//!
//! Frames are resolved with the [`backtrace`](https://docs.rs/backtrace)
//! crate. Inlined functions show up as their own frames, but functions the
//! optimizer removed entirely cannot be recovered, so release builds may
//! report fewer frames than debug builds.
//!
//! ## Examples
//!
//! ```rust
//! use tagcase::caller::split_function_name;
//!
//! assert_eq!(
//!     split_function_name("tagcase::tag::TagString::remove"),
//!     Some(("TagString", "remove"))
//! );
//! assert_eq!(
//!     split_function_name("tagcase::tag::validate_key"),
//!     Some(("tag", "validate_key"))
//! );
//! ```

use backtrace::{Backtrace, BacktraceSymbol};
use std::fmt;

/// One resolved stack frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Source file name without its directory, or `""` when unknown.
    pub file: String,
    /// Source line, or `0` when unknown.
    pub line: u32,
    /// Demangled path of the function, without the symbol hash.
    pub function: String,
}

impl Frame {
    fn from_symbol(symbol: &BacktraceSymbol) -> Self {
        Frame {
            file: symbol
                .filename()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            line: symbol.lineno().unwrap_or_default(),
            function: symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]: {}", self.file, self.line, self.function)
    }
}

const CAPTURE_FN: &str = "caller::capture";

/// Frames above `capture`'s caller, after skipping `skip` more.
#[inline(never)]
fn capture(skip: usize) -> Vec<Frame> {
    let backtrace = Backtrace::new();
    let frames: Vec<Frame> = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .map(Frame::from_symbol)
        .collect();

    // Frames below this function belong to the unwinder.
    let first = frames
        .iter()
        .position(|frame| frame.function.ends_with(CAPTURE_FN))
        .map_or(0, |i| i + 1);
    frames.into_iter().skip(first + 1 + skip).collect()
}

/// Returns the current call stack, innermost frame first.
///
/// `skip == 0` starts at the function calling `call_stack`.
#[inline(never)]
#[must_use]
pub fn call_stack(skip: usize) -> Vec<Frame> {
    capture(skip)
}

/// Returns `Type.method` (or `module.function`) for a function on the stack.
///
/// `skip == 0` names the function calling `caller_name`. Returns `None` when
/// the stack is not that deep or the frame has no symbol.
#[inline(never)]
#[must_use]
pub fn caller_name(skip: usize) -> Option<String> {
    let frame = capture(skip).into_iter().next()?;
    let (owner, function) = split_function_name(&frame.function)?;
    Some(format!("{owner}.{function}"))
}

/// Like [`caller_name`], but returns the owner and the function separately.
#[inline(never)]
#[must_use]
pub fn caller_names(skip: usize) -> Option<(String, String)> {
    let frame = capture(skip).into_iter().next()?;
    let (owner, function) = split_function_name(&frame.function)?;
    Some((owner.to_string(), function.to_string()))
}

/// Logs the stack of the calling function at `info` level.
#[inline(never)]
pub fn print_call_stack() {
    let stack: Vec<String> = capture(0).iter().map(Frame::to_string).collect();
    log::info!("Call stack:\n {}", stack.join("\n "));
}

/// Splits a demangled function path into its owning type (or module) and
/// the function name.
///
/// Closure segments are dropped, and for trait impls the implementing type
/// is the owner: `<tagcase::TagString as core::fmt::Display>::fmt` gives
/// `("TagString", "fmt")`. Returns `None` for a path without `::`.
#[must_use]
pub fn split_function_name(path: &str) -> Option<(&str, &str)> {
    let mut path = path;
    let (prefix, function) = loop {
        let (prefix, last) = split_last_segment(path)?;
        if last.starts_with('{') {
            path = prefix;
            continue;
        }
        break (prefix, last);
    };
    Some((owner_name(prefix), function))
}

fn owner_name(prefix: &str) -> &str {
    let prefix = match prefix.strip_prefix('<').and_then(|p| p.strip_suffix('>')) {
        Some(inner) => inner.split(" as ").next().unwrap_or(inner),
        None => prefix,
    };
    let prefix = prefix.trim_start_matches('&').trim_start_matches("mut ");
    let last = split_last_segment(prefix).map_or(prefix, |(_, last)| last);
    last.split('<').next().unwrap_or(last)
}

/// Splits at the last `::` that is not inside angle brackets.
fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut i = bytes.len();
    while i > 1 {
        i -= 1;
        match bytes[i] {
            b'>' => depth += 1,
            b'<' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes[i - 1] == b':' => {
                return Some((&path[..i - 1], &path[i + 1..]));
            }
            _ => {}
        }
    }
    None
}
