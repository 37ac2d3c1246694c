//! 로그 싱크
//!
//! 형식화된 로그 라인을 받는 출력 대상의 추상화와 콘솔 싱크 구현을 담당합니다.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

use crate::error::LogError;

/// 로그 싱크 trait
///
/// 형식화된 한 줄을 받아 출력 대상에 기록합니다. 모든 구현은 동시 호출에
/// 안전해야 하며, 단일 싱크 내에서 호출 순서를 보존해야 합니다.
pub trait LogSink: Send + Sync {
    /// 한 줄을 개행 문자와 함께 출력 대상에 추가
    fn write(&self, line: &str) -> Result<(), LogError>;

    /// 보류 중인 출력을 강제 기록
    fn flush(&self) -> Result<(), LogError> {
        Ok(())
    }
}

/// 콘솔 싱크
///
/// 표준 출력에 라인을 추가합니다. 스트림 자체의 잠금이 호출 단위의
/// 라인 원자성을 보장하므로 추가 버퍼링은 없습니다.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// 새 콘솔 싱크 생성
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, line: &str) -> Result<(), LogError> {
        let mut out = std::io::stdout().lock();
        out.write_all(line.as_bytes()).map_err(LogError::write)?;
        out.write_all(b"\n").map_err(LogError::write)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), LogError> {
        std::io::stdout().lock().flush().map_err(LogError::write)
    }
}

/// 메모리 내 싱크 (테스트용)
///
/// 형식화된 라인을 메모리에 수집합니다. 핸들을 복제해도 동일한 저장소를
/// 공유하므로 로거에 부착한 뒤에도 내용을 확인할 수 있습니다.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// 새 메모리 싱크 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 수집된 모든 라인 반환
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// 수집된 라인 개수 반환
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// 수집된 라인이 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// 수집된 라인 비우기
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, line: &str) -> Result<(), LogError> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
