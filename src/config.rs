//! 키보드 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "HANGUL_KIOSK_CONFIG";

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 가상 키보드 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// 입력창 최대 글자 수
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// 시작 시 한글 모드 여부
    #[serde(default)]
    pub start_in_hangul: bool,
}

fn default_max_length() -> usize {
    100
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            start_in_hangul: false,
        }
    }
}

/// 설정 파일 경로
/// 1. `HANGUL_KIOSK_CONFIG` 환경 변수
/// 2. ~/.config/hangul-kiosk/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("hangul-kiosk").join("config.json")
}

/// 경로에서 설정 읽기
pub fn read_config(path: &std::path::Path) -> Result<KeyboardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KeyboardConfig {
    let path = config_path();
    match read_config(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            KeyboardConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            KeyboardConfig::default()
        }
    }
}

/// 경로에 설정 저장
pub fn write_config(path: &std::path::Path, config: &KeyboardConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &KeyboardConfig) -> Result<(), ConfigError> {
    write_config(&config_path(), config)
}
