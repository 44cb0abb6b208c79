//! Conditional debug trace.
//!
//! [`debug!`](crate::debug!) writes `FILE: <file>, LINE: <line>: <message>`
//! through the `log` facade when the crate is built with `debug-trace`.
//! Without the feature the macro evaluates nothing, but its format string and
//! arguments are still type-checked.

use std::fmt;

/// Target used for every trace record.
pub const TARGET: &str = "hints";

/// Whether `debug!` emits anything in this build.
pub const TRACE_ENABLED: bool = cfg!(feature = "debug-trace");

pub fn format_trace(file: &str, line: u32, args: fmt::Arguments<'_>) -> String {
    format!("FILE: {file}, LINE: {line}: {args}")
}

#[doc(hidden)]
pub fn emit(file: &'static str, line: u32, args: fmt::Arguments<'_>) {
    if log::log_enabled!(target: TARGET, log::Level::Debug) {
        log::debug!(target: TARGET, "{}", format_trace(file, line, args));
    }
}

#[doc(hidden)]
#[inline(always)]
pub fn discard(_args: fmt::Arguments<'_>) {}

#[cfg(feature = "debug-trace")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::debug::emit(file!(), line!(), format_args!($($arg)+))
    };
}

#[cfg(not(feature = "debug-trace"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        if false {
            $crate::debug::discard(format_args!($($arg)+))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};
    use std::cell::Cell;
    use std::sync::{Mutex, Once};

    struct CaptureLogger {
        records: Mutex<Vec<(String, Level, String)>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let entry = (record.target().to_string(), record.level(), record.args().to_string());
            self.records.lock().unwrap().push(entry);
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };
    static INSTALL: Once = Once::new();

    fn install_logger() {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Debug);
        });
    }

    fn records_containing(needle: &str) -> Vec<(String, Level, String)> {
        LOGGER.records.lock().unwrap().iter().filter(|(_, _, msg)| msg.contains(needle)).cloned().collect()
    }

    #[test]
    fn test_format_trace_layout() {
        let line = format_trace("src/heap.rs", 42, format_args!("size={} cls={}", 128, 3));
        assert_eq!(line, "FILE: src/heap.rs, LINE: 42: size=128 cls=3");
    }

    #[test]
    fn test_emit_writes_debug_record() {
        install_logger();
        emit("src/heap.rs", 7, format_args!("emit-direct size={}", 64));

        let records = records_containing("emit-direct");
        assert_eq!(records, vec![(TARGET.to_string(), Level::Debug, "FILE: src/heap.rs, LINE: 7: emit-direct size=64".to_string())]);
    }

    #[test]
    fn test_macro_accepts_format_args_syntax() {
        let y = "two";
        crate::debug!("plain message");
        crate::debug!("value {} and {:?}", 1, y,);
        crate::debug!("named a={a} captured y={y}", a = 1);
        crate::debug!("width {:>w$}", 5, w = 3);
    }

    #[cfg(not(feature = "debug-trace"))]
    #[test]
    fn test_disabled_macro_does_not_evaluate_args() {
        install_logger();
        let calls = Cell::new(0);
        let bump = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        crate::debug!("disabled-trace calls {}", bump());
        assert_eq!(calls.get(), 0);
        assert!(!TRACE_ENABLED);
        assert!(records_containing("disabled-trace").is_empty());
    }

    #[cfg(feature = "debug-trace")]
    #[test]
    fn test_enabled_macro_evaluates_args() {
        let calls = Cell::new(0);
        crate::debug!("calls {}", {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert_eq!(calls.get(), 1);
        assert!(TRACE_ENABLED);
    }

    #[cfg(feature = "debug-trace")]
    #[test]
    fn test_enabled_macro_emits_file_and_line() {
        install_logger();
        let x = 5;
        let line = line!(); crate::debug!("enabled-trace x={x} y={:?}", "s");

        let expected = format!("FILE: {}, LINE: {}: enabled-trace x=5 y=\"s\"", file!(), line);
        assert_eq!(records_containing("enabled-trace"), vec![(TARGET.to_string(), Level::Debug, expected)]);
    }
}
