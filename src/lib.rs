//! 레벨 기반 다중 싱크 로깅 라이브러리
//!
//! 콘솔 싱크와 크기/수명 상한 순환 파일 싱크를 가진 로거를 제공합니다.
//!
//! # 주요 기능
//! - **심각도 기반 필터링**: 싱크별 레벨 설정으로 출력 제어
//! - **순환 파일 관리**: 크기/수명 상한 도달 시 동기적 순환, 보관 개수 상한
//! - **동시 호출 안전**: 싱크별 뮤텍스로 쓰기와 순환을 직렬화
//! - **절대 전파 없음**: 로그 호출은 호출자 관점에서 항상 best-effort
//!
//! # 사용 예시
//! ```rust,no_run
//! use rotolog::{Logger, LoggerConfig};
//!
//! fn main() -> Result<(), rotolog::LogError> {
//!     let logger = Logger::new(LoggerConfig::default())?;
//!
//!     rotolog::log_info!(logger, "서버 시작: port={}", 50051);
//!     rotolog::log_error!(logger, "연결 실패: error={}", "timeout");
//!
//!     logger.shutdown()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod logger;
mod macros;
pub mod rotation;
pub mod sink;

pub use config::{LoggerConfig, RotationPolicy, SinkConfig};
pub use error::LogError;
pub use formatter::{LogFormatter, LogRecord, Severity};
pub use logger::{global, init_global, Logger};
pub use rotation::FileSink;
pub use sink::{ConsoleSink, LogSink, MemorySink};

/// 환경변수 기반 설정으로 전역 로거 초기화
///
/// 각 애플리케이션에서 간편하게 로깅을 초기화할 수 있도록 제공하는 헬퍼
/// 함수입니다. 프로세스 전체에서 한 번만 성공하며, 두 번째 호출은 에러를
/// 반환합니다.
pub fn init_from_env() -> Result<(), LogError> {
    init_global(LoggerConfig::from_env())
}
