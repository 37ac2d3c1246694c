//! 로그 포매터
//!
//! 심각도 레벨 정의와 로그 레코드의 한 줄 형식화를 담당합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// 심각도 레벨 열거형
///
/// 순서가 필터링을 정의합니다: 더 심각한 레벨일수록 낮은 서수를 가지며,
/// 레벨 L로 설정된 싱크는 서수가 L 이하인 레코드만 출력합니다.
/// `Off`와 `All`은 설정 전용 값이며 레코드에는 사용되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// 모든 출력 억제 (설정 전용)
    Off = 0,
    /// 오류 상황 (복구 불가능한 오류)
    Error = 1,
    /// 경고 상황 (복구 가능한 오류)
    Warning = 2,
    /// 일반 정보 (모든 환경)
    Info = 3,
    /// 디버깅 정보 (개발/스테이징)
    Debug = 4,
    /// 상세한 추적 정보 (개발환경)
    Verbose = 5,
    /// 모든 출력 허용 (설정 전용)
    All = 6,
}

impl Severity {
    /// 심각도 레벨을 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Verbose => "VERBOSE",
            Severity::All => "ALL",
        }
    }

    /// 심각도별 출력 마커 반환
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Error => "⛔️",
            Severity::Warning => "⚠️",
            Severity::Info => "💡",
            Severity::Debug => "🐞",
            Severity::Verbose => "💬",
            _ => "?",
        }
    }

    /// 설정 레벨 `self`가 `record` 심각도의 레코드를 허용하는지 판단
    ///
    /// `Off`는 모든 레코드를 억제하고 `All`은 모든 레코드를 허용합니다.
    /// 순수 함수이며 실패 경우가 없습니다.
    pub fn permits(&self, record: Severity) -> bool {
        record <= *self
    }

    /// 문자열에서 심각도 파싱 (레거시 호환성)
    ///
    /// 추천: `s.parse::<Severity>()` 또는 `Severity::from_str()` trait 사용
    pub fn from_string(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Severity::Off),
            "ERROR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "VERBOSE" => Ok(Severity::Verbose),
            "ALL" => Ok(Severity::All),
            _ => Err(()),
        }
    }
}

/// 단일 로그 레코드
///
/// 각 호출 지점에서 생성되어 즉시 소비되며, 형식화 이후에는 보존되지 않습니다.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 심각도 레벨
    pub severity: Severity,

    /// 로그 메시지
    pub message: String,

    /// 타임스탬프 (UTC)
    pub timestamp: DateTime<Utc>,

    /// 호출 지점 소스 파일 경로
    pub source_file: &'static str,

    /// 호출 지점 함수/모듈 이름 (없으면 포매터가 "unknown"으로 대체)
    pub source_function: Option<&'static str>,

    /// 호출 지점 라인 번호
    pub source_line: u32,

    /// 호출 스레드 식별자
    pub thread_id: String,
}

impl LogRecord {
    /// 새 로그 레코드 생성
    ///
    /// 현재 시각과 호출 스레드 ID를 캡처합니다.
    pub fn new(
        severity: Severity,
        message: String,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) -> Self {
        Self {
            severity,
            message,
            timestamp: Utc::now(),
            source_file,
            source_function,
            source_line,
            thread_id: format!("{:?}", std::thread::current().id()),
        }
    }
}

/// 타임스탬프 형식 (로케일 독립, 밀리초 정밀도)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 로그 포매터
///
/// 상태를 갖지 않으므로 모든 싱크가 하나의 인스턴스를 안전하게 공유합니다.
#[derive(Debug, Default, Clone)]
pub struct LogFormatter;

impl LogFormatter {
    /// 새 포매터 생성
    pub fn new() -> Self {
        Self
    }

    /// 로그 레코드를 한 줄 문자열로 형식화
    ///
    /// 필드 순서는 고정: 마커, 타임스탬프, 스레드 ID, 파일명, 함수명, 라인 번호, 메시지.
    /// 동일한 레코드에 대해 항상 동일한 출력을 생성하며 실패하지 않습니다.
    pub fn format(&self, record: &LogRecord) -> String {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT);
        let function = record.source_function.unwrap_or("unknown");
        let file_name = Path::new(record.source_file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(record.source_file);

        format!(
            "{} [{}][{}][{} {}] #{}: {}",
            record.severity.glyph(),
            timestamp,
            record.thread_id,
            file_name,
            function,
            record.source_line,
            record.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(severity: Severity) -> LogRecord {
        LogRecord::new(
            severity,
            "Test message".to_string(),
            "src/formatter.rs",
            Some("rotolog::formatter"),
            42,
        )
    }

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Off.as_str(), "OFF");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Verbose.as_str(), "VERBOSE");
        assert_eq!(Severity::All.as_str(), "ALL");
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("ERROR".parse(), Ok(Severity::Error));
        assert_eq!("error".parse(), Ok(Severity::Error));
        assert_eq!("warn".parse(), Ok(Severity::Warning));
        assert_eq!("VERBOSE".parse(), Ok(Severity::Verbose));
        assert_eq!("INVALID".parse::<Severity>(), Err(()));
        assert_eq!(Severity::from_string("info"), Some(Severity::Info));
        assert_eq!(Severity::from_string("nope"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Off < Severity::Error);
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::Verbose);
        assert!(Severity::Verbose < Severity::All);
    }

    #[test]
    fn test_permits_monotonic_filtering() {
        // Warning 레벨 싱크는 Error/Warning만 허용
        assert!(Severity::Warning.permits(Severity::Error));
        assert!(Severity::Warning.permits(Severity::Warning));
        assert!(!Severity::Warning.permits(Severity::Info));
        assert!(!Severity::Warning.permits(Severity::Verbose));

        // Off는 모든 레코드 억제
        for record in [
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
            Severity::Verbose,
        ] {
            assert!(!Severity::Off.permits(record));
            assert!(Severity::All.permits(record));
        }
    }

    #[test]
    fn test_formatter_field_order() {
        let formatter = LogFormatter::new();
        let record = test_record(Severity::Info);
        let line = formatter.format(&record);

        assert!(line.starts_with("💡 ["));
        assert!(line.contains("[formatter.rs rotolog::formatter]"));
        assert!(line.contains("#42: Test message"));
        assert!(line.contains(&record.thread_id));
    }

    #[test]
    fn test_formatter_deterministic() {
        let formatter = LogFormatter::new();
        let record = test_record(Severity::Error);

        // 동일한 레코드는 반복 호출 시 동일한 출력 생성
        let first = formatter.format(&record);
        let second = formatter.format(&record);
        assert_eq!(first, second);
        assert!(first.starts_with("⛔️"));
    }

    #[test]
    fn test_formatter_unknown_function() {
        let formatter = LogFormatter::new();
        let mut record = test_record(Severity::Debug);
        record.source_function = None;

        let line = formatter.format(&record);
        assert!(line.contains("[formatter.rs unknown]"));
    }

    #[test]
    fn test_formatter_glyph_per_severity() {
        let formatter = LogFormatter::new();
        let cases = [
            (Severity::Error, "⛔️"),
            (Severity::Warning, "⚠️"),
            (Severity::Info, "💡"),
            (Severity::Debug, "🐞"),
            (Severity::Verbose, "💬"),
        ];

        for (severity, glyph) in cases {
            let line = formatter.format(&test_record(severity));
            assert!(line.starts_with(glyph), "잘못된 마커: {}", line);
        }
    }
}
