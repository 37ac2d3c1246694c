//! 로거 파사드
//!
//! 단일 로그 호출을 활성화되고 레벨을 통과한 모든 싱크로 전파하는
//! 메인 진입점입니다.
//!
//! # 주요 기능
//! - **명시적 생성**: 설정 값으로 생성되어 호출자에게 주입되는 일반 값
//! - **부분 실패 허용**: 파일 싱크 초기화 실패 시 나머지 싱크로 계속 동작
//! - **절대 전파 없음**: 쓰기 실패는 내부에서 흡수되며 호출 코드를 중단시키지 않음
//! - **전역 편의 인스턴스**: 필요 시 프로세스 전체에서 하나만 명시적으로 초기화

use once_cell::sync::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{LoggerConfig, SinkConfig};
use crate::error::LogError;
use crate::formatter::{LogFormatter, LogRecord, Severity};
use crate::rotation::FileSink;
use crate::sink::{ConsoleSink, LogSink};

/// 부착된 싱크와 해당 설정
struct SinkEntry {
    config: SinkConfig,
    sink: Box<dyn LogSink>,
}

/// 로거 파사드
///
/// 모든 싱크를 배타적으로 소유하며, 싱크는 자신의 설정을 소유합니다.
/// 생성이 곧 초기화이며 재초기화는 없습니다. 임의의 스레드에서 동시에
/// 호출해도 안전합니다.
pub struct Logger {
    sinks: Vec<SinkEntry>,
    formatter: LogFormatter,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// 설정 값으로 로거 생성
    ///
    /// 설정 검증 실패는 즉시 에러로 반환됩니다. 파일 싱크 초기화 실패는
    /// 비치명적이며, 해당 싱크만 비활성화하고 나머지 싱크로 생성을
    /// 계속합니다.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        config.validate()?;

        let mut logger = Self {
            sinks: Vec::new(),
            formatter: LogFormatter::new(),
            file_path: None,
        };

        if config.console.enabled {
            logger.attach(config.console, Box::new(ConsoleSink::new()));
        }

        if config.file.enabled {
            match FileSink::new(&config.log_dir, &config.file_prefix, config.rotation) {
                Ok(file_sink) => {
                    logger.file_path = Some(file_sink.path().to_path_buf());
                    logger.attach(config.file, Box::new(file_sink));
                }
                Err(e) => {
                    // 파일 싱크 없이 계속 동작 (부분 실패, 비치명적)
                    eprintln!("rotolog: 파일 싱크 초기화 실패, 비활성화됨: {}", e);
                }
            }
        }

        Ok(logger)
    }

    /// 환경변수 기반 설정으로 로거 생성
    pub fn from_env() -> Result<Self, LogError> {
        Self::new(LoggerConfig::from_env())
    }

    /// 싱크 부착 (생성 시 1회)
    pub(crate) fn attach(&mut self, config: SinkConfig, sink: Box<dyn LogSink>) {
        self.sinks.push(SinkEntry { config, sink });
    }

    /// 활성 로그 파일 경로 반환 (파일 싱크가 활성화된 경우)
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// 일반 로그 작성 메서드
    ///
    /// 활성화되고 레벨을 통과한 싱크가 있을 때만 레코드를 생성하고 한 번
    /// 형식화하여 각 싱크에 기록합니다. 쓰기 실패는 stderr에 일회성으로
    /// 보고될 뿐 호출자에게 전파되지 않습니다.
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        let passing: Vec<&SinkEntry> = self
            .sinks
            .iter()
            .filter(|entry| entry.config.enabled && entry.config.level.permits(severity))
            .collect();

        if passing.is_empty() {
            return;
        }

        let record = LogRecord::new(
            severity,
            message.to_string(),
            source_file,
            source_function,
            source_line,
        );
        let line = self.formatter.format(&record);

        for entry in passing {
            if let Err(e) = entry.sink.write(&line) {
                eprintln!("rotolog: 로그 쓰기 실패: {}", e);
            }
        }
    }

    /// ERROR 레벨 로그 작성
    pub fn error(
        &self,
        message: impl fmt::Display,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        self.log(
            Severity::Error,
            &message.to_string(),
            source_file,
            source_function,
            source_line,
        );
    }

    /// WARNING 레벨 로그 작성
    pub fn warning(
        &self,
        message: impl fmt::Display,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        self.log(
            Severity::Warning,
            &message.to_string(),
            source_file,
            source_function,
            source_line,
        );
    }

    /// INFO 레벨 로그 작성
    pub fn info(
        &self,
        message: impl fmt::Display,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        self.log(
            Severity::Info,
            &message.to_string(),
            source_file,
            source_function,
            source_line,
        );
    }

    /// DEBUG 레벨 로그 작성
    pub fn debug(
        &self,
        message: impl fmt::Display,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        self.log(
            Severity::Debug,
            &message.to_string(),
            source_file,
            source_function,
            source_line,
        );
    }

    /// VERBOSE 레벨 로그 작성
    pub fn verbose(
        &self,
        message: impl fmt::Display,
        source_file: &'static str,
        source_function: Option<&'static str>,
        source_line: u32,
    ) {
        self.log(
            Severity::Verbose,
            &message.to_string(),
            source_file,
            source_function,
            source_line,
        );
    }

    /// 모든 싱크의 보류 중인 출력을 강제 기록
    pub fn flush(&self) -> Result<(), LogError> {
        for entry in &self.sinks {
            entry.sink.flush()?;
        }
        Ok(())
    }

    /// 로거 종료
    ///
    /// 보류 중인 출력을 기록한 뒤 로거를 소비합니다. 명시적 해체 규칙:
    /// 종료 이후에는 인스턴스를 사용할 수 없습니다.
    pub fn shutdown(self) -> Result<(), LogError> {
        self.flush()
    }
}

/// 전역 로거 인스턴스
static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// 전역 로거 초기화
///
/// 프로세스 전체에서 정확히 한 번만 성공합니다. 두 번째 호출은 중복 싱크
/// 등록을 피하기 위해 에러를 반환합니다 (암묵적 교체 없음).
pub fn init_global(config: LoggerConfig) -> Result<(), LogError> {
    let logger = Logger::new(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LogError::configuration("전역 로거가 이미 초기화됨"))
}

/// 전역 로거 반환 (초기화되지 않았으면 None)
pub fn global() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}
