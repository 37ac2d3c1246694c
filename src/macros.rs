//! 로깅 편의 매크로
//!
//! 호출 지점 메타데이터(`file!()`, `module_path!()`, `line!()`)를 암묵적으로
//! 캡처하여 로거의 심각도별 진입점에 전달합니다.
//!
//! # 사용 예시
//! ```rust,no_run
//! use rotolog::{Logger, LoggerConfig};
//!
//! # fn run() -> Result<(), rotolog::LogError> {
//! let logger = Logger::new(LoggerConfig::default())?;
//! rotolog::log_info!(logger, "서버 시작: port={}", 50051);
//! rotolog::log_error!(logger, "연결 실패: {}", "timeout");
//! # Ok(())
//! # }
//! ```

/// 내부 공용 매크로
#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($logger:expr, $severity:expr, $($arg:tt)*) => {{
        $logger.log(
            $severity,
            &format!($($arg)*),
            file!(),
            Some(module_path!()),
            line!(),
        );
    }};
}

/// ERROR 레벨 로그 매크로
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__log_at!($logger, $crate::Severity::Error, $($arg)*)
    };
}

/// WARNING 레벨 로그 매크로
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__log_at!($logger, $crate::Severity::Warning, $($arg)*)
    };
}

/// INFO 레벨 로그 매크로
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__log_at!($logger, $crate::Severity::Info, $($arg)*)
    };
}

/// DEBUG 레벨 로그 매크로
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__log_at!($logger, $crate::Severity::Debug, $($arg)*)
    };
}

/// VERBOSE 레벨 로그 매크로
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $crate::__log_at!($logger, $crate::Severity::Verbose, $($arg)*)
    };
}
