//! 로깅 에러 타입
//!
//! 로거 수명주기 단계별 에러 구분을 제공합니다.
//!
//! # 설계 원칙
//! - 설정 오류는 생성 시점에 즉시 실패
//! - 싱크 초기화 실패는 비치명적 (해당 싱크만 비활성화)
//! - 초기화 이후의 쓰기 실패는 내부에서 흡수되며 호출자에게 전파되지 않음

use std::path::PathBuf;
use thiserror::Error;

/// 로깅 시스템 통합 에러 타입
#[derive(Error, Debug)]
pub enum LogError {
    /// 잘못된 설정 파라미터 (생성 시점에 즉시 실패)
    #[error("설정 오류: {message}")]
    Configuration { message: String },

    /// 초기 로그 파일/디렉토리 생성 실패 (해당 싱크 비활성화, 비치명적)
    #[error("싱크 초기화 실패: {path}")]
    SinkInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 초기화 이후의 쓰기 또는 순환 실패 (내부에서 흡수됨)
    #[error("로그 쓰기 실패")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// 설정 오류 생성 헬퍼
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        LogError::Configuration {
            message: message.into(),
        }
    }

    /// 쓰기 오류 생성 헬퍼
    pub fn write(source: std::io::Error) -> Self {
        LogError::Write { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogError::configuration("max_file_size must be greater than 0");
        assert!(err.to_string().contains("설정 오류"));

        let err = LogError::write(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().contains("로그 쓰기 실패"));
    }

    #[test]
    fn test_sink_init_preserves_path() {
        let err = LogError::SinkInit {
            path: PathBuf::from("/nonexistent/logs"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nonexistent/logs"));
    }
}
