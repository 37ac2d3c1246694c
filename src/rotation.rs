//! 로그 파일 순환 및 보관 관리
//!
//! 크기/수명 상한을 가진 활성 로그 파일과 보관 파일 개수 상한 정책을 구현합니다.
//!
//! 쓰기, 크기 검사, 순환은 모두 인스턴스당 하나의 뮤텍스 범위 안에서
//! 실행되므로 순환 결정과 이어지는 이름 변경/생성이 동시 쓰기와 경합하지
//! 않습니다. 순환은 이를 유발한 쓰기와 동기적으로 완료되며 백그라운드
//! 태스크나 타이머는 사용하지 않습니다.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::RotationPolicy;
use crate::error::LogError;
use crate::sink::LogSink;

/// 활성 파일 상태 (뮤텍스로 보호되는 공유 가변 상태)
struct ActiveFile {
    file: File,
    size: u64,
    opened_at: DateTime<Utc>,
}

/// 순환 파일 싱크
///
/// 활성 파일 `{prefix}.log`에 라인을 추가하고, 크기 또는 수명 상한 도달 시
/// 타임스탬프가 붙은 보관 파일로 순환합니다. 보관 파일 수가 상한을 초과하면
/// 가장 오래된 파일부터 삭제합니다.
pub struct FileSink {
    dir: PathBuf,
    prefix: String,
    policy: RotationPolicy,
    active_path: PathBuf,
    state: Mutex<ActiveFile>,
}

impl FileSink {
    /// 새 파일 싱크 생성
    ///
    /// 로그 디렉토리와 초기 활성 파일을 생성합니다. 실패 시 `SinkInit` 에러를
    /// 반환하며, 로거는 해당 싱크를 비활성화된 것으로 취급합니다.
    /// 기존 활성 파일이 있으면 이어서 추가하고, 기존 보관 파일은 보관 정책에
    /// 포함됩니다.
    pub fn new<P: AsRef<Path>>(
        dir: P,
        prefix: &str,
        policy: RotationPolicy,
    ) -> Result<Self, LogError> {
        let dir = dir.as_ref().to_path_buf();
        let active_path = dir.join(format!("{}.log", prefix));

        fs::create_dir_all(&dir).map_err(|source| LogError::SinkInit {
            path: dir.clone(),
            source,
        })?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&active_path)
            .map_err(|source| LogError::SinkInit {
                path: active_path.clone(),
                source,
            })?;

        let (size, opened_at) = match file.metadata() {
            Ok(meta) => {
                let opened_at = meta
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_else(|_| Utc::now());
                (meta.len(), opened_at)
            }
            Err(_) => (0, Utc::now()),
        };

        let sink = Self {
            dir,
            prefix: prefix.to_string(),
            policy,
            active_path,
            state: Mutex::new(ActiveFile {
                file,
                size,
                opened_at,
            }),
        };

        // 기존 보관 파일도 개수 상한에 포함
        sink.enforce_retention();

        Ok(sink)
    }

    /// 활성 로그 파일 경로 반환 (읽기 전용)
    pub fn path(&self) -> &Path {
        &self.active_path
    }

    /// 현재 보관 파일 목록 반환 (오래된 순서)
    pub fn archived_files(&self) -> Vec<PathBuf> {
        let active_name = format!("{}.log", self.prefix);
        let archive_prefix = format!("{}_", self.prefix);

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut archives: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.file_name().and_then(|n| n.to_str()).is_some_and(|name| {
                        name != active_name
                            && name.starts_with(&archive_prefix)
                            && name.ends_with(".log")
                    })
            })
            .collect();

        // 보관 파일 이름의 타임스탬프는 사전순 정렬이 곧 시간순 정렬
        archives.sort();
        archives
    }

    /// 활성 파일을 보관 세트로 순환
    ///
    /// 활성 파일을 닫고 타임스탬프 이름으로 변경한 뒤 새 활성 파일을 엽니다.
    /// 순환 완료 후 보관 정책을 적용합니다.
    fn rotate(&self, state: &mut ActiveFile) -> Result<(), LogError> {
        state.file.flush().map_err(LogError::write)?;

        let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
        let mut archive_path = self.dir.join(format!("{}_{}.log", self.prefix, timestamp));

        // 같은 초 내 재순환 시 숫자 접미사로 충돌 회피
        let mut suffix = 1;
        while archive_path.exists() {
            archive_path = self
                .dir
                .join(format!("{}_{}_{}.log", self.prefix, timestamp, suffix));
            suffix += 1;
        }

        fs::rename(&self.active_path, &archive_path).map_err(LogError::write)?;

        state.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.active_path)
            .map_err(LogError::write)?;
        state.size = 0;
        state.opened_at = Utc::now();

        self.enforce_retention();

        Ok(())
    }

    /// 보관 정책 적용
    ///
    /// 보관 파일 수가 상한 이내가 될 때까지 가장 오래된 파일부터 삭제합니다.
    /// 삭제 실패는 로깅을 중단시키지 않고 stderr로만 보고합니다.
    fn enforce_retention(&self) {
        let archives = self.archived_files();

        if archives.len() <= self.policy.max_file_count {
            return;
        }

        let excess = archives.len() - self.policy.max_file_count;
        for path in archives.iter().take(excess) {
            if let Err(e) = fs::remove_file(path) {
                eprintln!("rotolog: 보관 로그 파일 삭제 실패 ({}): {}", path.display(), e);
            }
        }
    }

    /// 순환 조건 검사
    fn should_rotate(&self, state: &ActiveFile) -> bool {
        if state.size >= self.policy.max_file_size {
            return true;
        }

        Utc::now()
            .signed_duration_since(state.opened_at)
            .to_std()
            .map(|age| age >= self.policy.max_file_age)
            .unwrap_or(false)
    }
}

impl LogSink for FileSink {
    /// 라인을 활성 파일에 추가하고, 추가 이후 상한 초과 시 즉시 순환
    ///
    /// 추가, 크기 갱신, 순환 검사, 순환 실행이 모두 하나의 잠금 범위에서
    /// 수행되므로 단일 쓰기가 상한을 초과하는 크기는 최대 해당 레코드
    /// 한 건 분량입니다.
    fn write(&self, line: &str) -> Result<(), LogError> {
        let mut state = self.state.lock();

        state.file.write_all(line.as_bytes()).map_err(LogError::write)?;
        state.file.write_all(b"\n").map_err(LogError::write)?;
        state.size += line.len() as u64 + 1;

        if self.should_rotate(&state) {
            self.rotate(&mut state)?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), LogError> {
        self.state.lock().file.flush().map_err(LogError::write)
    }
}
