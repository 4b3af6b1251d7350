//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Jamodle 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JamodleConfig {
    /// 단어 풀 시드 파일 경로 (JSON 문자열 배열)
    #[serde(default = "default_words_path")]
    pub words_path: String,
    /// 사전 시드 파일 경로 (JSON: 단어 -> 뜻풀이 배열)
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,
}

fn default_words_path() -> String {
    "data/words.json".to_string()
}

fn default_dictionary_path() -> String {
    "data/dictionary.json".to_string()
}

impl Default for JamodleConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
            dictionary_path: default_dictionary_path(),
        }
    }
}

/// 설정 파일 경로: $JAMODLE_CONFIG 또는 ~/.config/jamodle/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("JAMODLE_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jamodle").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JamodleConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| JamodleConfig::default()),
        Err(_) => JamodleConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JamodleConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
