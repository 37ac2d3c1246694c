//! 로깅 라이브러리 사용 예제
//!
//! 이 예제는 로거의 다양한 기능과 사용 패턴을 보여줍니다.

use anyhow::Result;
use rotolog::{
    log_debug, log_error, log_info, log_verbose, log_warning, Logger, LoggerConfig,
    RotationPolicy, Severity, SinkConfig,
};
use std::path::PathBuf;
use std::time::Duration;

fn main() -> Result<()> {
    println!("📝 rotolog 로깅 예제 시작");

    // === 예제 1: 기본 사용법 ===
    println!("\n예제 1: 기본 설정으로 로깅");
    basic_logging_example()?;

    // === 예제 2: 커스텀 순환 정책 ===
    println!("\n예제 2: 커스텀 순환 정책으로 로깅");
    custom_rotation_example()?;

    // === 예제 3: 전역 로거 ===
    println!("\n예제 3: 전역 로거 사용");
    global_logger_example()?;

    println!("\n✅ 모든 예제 완료! logs/ 디렉토리에서 생성된 로그를 확인하세요.");
    Ok(())
}

/// 예제 1: 기본적인 로거 사용법
fn basic_logging_example() -> Result<()> {
    let logger = Logger::new(LoggerConfig::default())?;

    // 다양한 심각도 레벨로 메시지 작성
    log_error!(logger, "오류 발생: error_code={}", "E001");
    log_warning!(logger, "메모리 사용량 경고: usage={}%", 85);
    log_info!(logger, "서버 시작: port={}", 50051);
    log_debug!(logger, "요청 처리 단계: step={}", 1);
    log_verbose!(logger, "상세 추적 정보: state={:?}", "idle");

    // 오류 값도 메시지로 직접 전달 가능
    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timeout");
    logger.warning(&io_err, file!(), Some(module_path!()), line!());

    if let Some(path) = logger.file_path() {
        println!("   ✓ 로그 파일 위치: {}", path.display());
    }

    logger.shutdown()?;
    Ok(())
}

/// 예제 2: 커스텀 순환 정책으로 로거 구성
fn custom_rotation_example() -> Result<()> {
    let config = LoggerConfig {
        console: SinkConfig::new(false, Severity::Info),
        file: SinkConfig::new(true, Severity::Debug),
        log_dir: PathBuf::from("./logs/demo"),
        file_prefix: "demo".to_string(),
        rotation: RotationPolicy {
            max_file_size: 4 * 1024, // 4KB로 빠른 순환 관찰
            max_file_age: Duration::from_secs(60 * 60),
            max_file_count: 3,
        },
    };

    let logger = Logger::new(config)?;

    // 순환이 여러 번 발생할 만큼 기록
    for i in 0..200 {
        log_debug!(logger, "순환 테스트 메시지 {} (batch={})", i, i / 50);
    }

    logger.shutdown()?;
    println!("   ✓ logs/demo/ 에 보관 파일 최대 3개 유지됨");
    Ok(())
}

/// 예제 3: 프로세스 전역 로거
fn global_logger_example() -> Result<()> {
    // 환경변수(LOG_*) 기반 설정으로 전역 로거 초기화 (프로세스당 1회)
    rotolog::init_from_env()?;

    if let Some(logger) = rotolog::global() {
        log_info!(logger, "전역 로거로 기록된 메시지");
        log_warning!(logger, "전역 로거 경고: retry={}", 3);
        logger.flush()?;
    }

    println!("   ✓ 전역 로거 초기화 및 기록 완료");
    Ok(())
}
