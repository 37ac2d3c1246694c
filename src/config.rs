//! 로깅 설정 관리
//!
//! 싱크별 설정과 파일 순환 정책 파라미터를 담당합니다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LogError;
use crate::formatter::Severity;

/// 싱크별 설정
///
/// 생성 이후 불변이며 싱크당 하나의 인스턴스를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    /// 싱크 활성화 여부
    pub enabled: bool,

    /// 이 싱크가 허용하는 최대 심각도 레벨
    pub level: Severity,
}

impl SinkConfig {
    /// 새 싱크 설정 생성
    pub fn new(enabled: bool, level: Severity) -> Self {
        Self { enabled, level }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
        }
    }
}

/// 배포 프로파일에 따른 기본 레벨
///
/// 디버그 빌드에서는 Verbose, 릴리스 빌드에서는 Info.
fn default_level() -> Severity {
    if cfg!(debug_assertions) {
        Severity::Verbose
    } else {
        Severity::Info
    }
}

/// 파일 순환 정책
///
/// 불변 조건: 보관된 파일 수는 `max_file_count`를 초과하지 않으며,
/// 새 순환이 상한을 초과하면 가장 오래된 파일부터 삭제됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// 활성 파일 최대 크기 (바이트 단위, 기본값: 10MiB)
    pub max_file_size: u64,

    /// 활성 파일 최대 수명 (기본값: 24시간)
    pub max_file_age: Duration,

    /// 보관 파일 최대 개수 (기본값: 7개)
    pub max_file_count: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MiB
            max_file_age: Duration::from_secs(24 * 60 * 60),
            max_file_count: 7,
        }
    }
}

/// 로거 전체 설정
///
/// 콘솔/파일 두 싱크의 설정과 파일 싱크의 위치 및 순환 정책을 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// 콘솔 싱크 설정
    pub console: SinkConfig,

    /// 파일 싱크 설정
    pub file: SinkConfig,

    /// 로그 디렉토리 경로 (기본값: "./logs")
    pub log_dir: PathBuf,

    /// 로그 파일 이름 접두사 (기본값: "app")
    pub file_prefix: String,

    /// 파일 순환 정책
    pub rotation: RotationPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: SinkConfig::default(),
            file: SinkConfig::default(),
            log_dir: PathBuf::from("./logs"),
            file_prefix: "app".to_string(),
            rotation: RotationPolicy::default(),
        }
    }
}

impl LoggerConfig {
    /// 환경변수에서 설정 로드
    ///
    /// 기본값 위에 `LOG_*` 환경변수를 덮어씁니다. 파싱 불가능한 값은 무시됩니다.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LOG_CONSOLE_ENABLED") {
            config.console.enabled = val.to_lowercase() == "true";
        }

        if let Ok(val) = std::env::var("LOG_CONSOLE_LEVEL") {
            if let Ok(level) = val.parse() {
                config.console.level = level;
            }
        }

        if let Ok(val) = std::env::var("LOG_FILE_ENABLED") {
            config.file.enabled = val.to_lowercase() == "true";
        }

        if let Ok(val) = std::env::var("LOG_FILE_LEVEL") {
            if let Ok(level) = val.parse() {
                config.file.level = level;
            }
        }

        if let Ok(val) = std::env::var("LOG_DIR") {
            config.log_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("LOG_FILE_PREFIX") {
            if !val.is_empty() {
                config.file_prefix = val;
            }
        }

        if let Ok(val) = std::env::var("LOG_MAX_FILE_SIZE") {
            if let Ok(size) = val.parse() {
                config.rotation.max_file_size = size;
            }
        }

        if let Ok(val) = std::env::var("LOG_MAX_FILE_AGE_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.rotation.max_file_age = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = std::env::var("LOG_MAX_FILE_COUNT") {
            if let Ok(count) = val.parse() {
                config.rotation.max_file_count = count;
            }
        }

        config
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> Result<(), LogError> {
        if self.rotation.max_file_size == 0 {
            return Err(LogError::configuration(
                "max_file_size must be greater than 0",
            ));
        }

        if self.rotation.max_file_age.is_zero() {
            return Err(LogError::configuration(
                "max_file_age must be greater than 0",
            ));
        }

        if self.rotation.max_file_count == 0 {
            return Err(LogError::configuration(
                "max_file_count must be greater than 0",
            ));
        }

        if self.file_prefix.is_empty() {
            return Err(LogError::configuration("file_prefix must not be empty"));
        }

        Ok(())
    }
}
