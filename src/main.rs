//! Jamodle - 한글 단어 퀴즈 엔진 CLI
//!
//! 단어 분류, 자모 조합, 난이도 프로필 조회, 퀴즈 후보 선택을
//! 명령행에서 실행한다. 후보 선택은 설정 파일이 가리키는 단어/사전
//! 시드 파일로 메모리 풀을 구성해 동작한다.

use std::collections::HashMap;
use std::fs;
use std::process;

use jamodle::config::load_config;
use jamodle::hangul::assemble;
use jamodle::quiz::difficulty::{profile_for, Difficulty};
use jamodle::word::{MemoryDictionary, MemoryWordPool, WordEntry, WordRepository, WordService};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => {
            usage();
            process::exit(2);
        }
    };

    let result = match command {
        "classify" => cmd_classify(rest),
        "assemble" => cmd_assemble(rest),
        "difficulty" => cmd_difficulty(rest),
        "pick" => cmd_pick(rest),
        _ => {
            usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}

fn usage() {
    eprintln!("사용법: jamodle <명령> [인자...]");
    eprintln!();
    eprintln!("명령:");
    eprintln!("  classify <단어>...        단어의 음운 프로필 출력");
    eprintln!("  assemble <자모열>...      낱자모 입력을 완성형으로 조합");
    eprintln!("  difficulty <단계>         난이도 프로필 출력 (EASY/MEDIUM/HARD/VERYHARD)");
    eprintln!("  pick <단계> [제외단어...]  단어 풀에서 퀴즈 후보 선택");
}

/// 단어별 음운 프로필 출력
fn cmd_classify(words: &[String]) -> Result<(), String> {
    if words.is_empty() {
        return Err("분류할 단어를 지정해주세요".to_string());
    }
    for word in words {
        let entry = WordEntry::from_value(word.as_str());
        let json = serde_json::to_string_pretty(&entry).map_err(|e| e.to_string())?;
        println!("{}", json);
    }
    Ok(())
}

/// 낱자모 입력 조합
fn cmd_assemble(inputs: &[String]) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("조합할 입력을 지정해주세요".to_string());
    }
    for input in inputs {
        println!("{}", assemble(input));
    }
    Ok(())
}

/// 난이도 프로필 출력 (인식 불가 단계는 EASY로 폴백)
fn cmd_difficulty(args: &[String]) -> Result<(), String> {
    let tier = args.first().map(String::as_str).unwrap_or("EASY");
    let difficulty = Difficulty::parse_or_easy(tier);
    if Difficulty::parse(tier).is_none() {
        log::warn!("인식할 수 없는 난이도 '{}', EASY로 처리", tier);
    }
    let profile = profile_for(difficulty);
    let json = serde_json::to_string_pretty(profile).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

/// 단어 풀에서 퀴즈 후보 선택
fn cmd_pick(args: &[String]) -> Result<(), String> {
    let tier = args.first().map(String::as_str).unwrap_or("EASY");
    let difficulty = Difficulty::parse_or_easy(tier);
    let exclude: Vec<String> = args.iter().skip(1).cloned().collect();

    let config = load_config();
    let pool = load_word_pool(&config.words_path)?;
    let dictionary = load_dictionary(&config.dictionary_path);
    log::info!("단어 풀 {}개 항목 로드", pool.len());

    let mut service = WordService::new(pool, dictionary);
    let word = service
        .random_word_for_quiz(difficulty, &exclude)
        .map_err(|e| e.to_string())?;

    let json = serde_json::to_string_pretty(&word).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

/// 단어 시드 파일(JSON 문자열 배열)에서 메모리 풀 구성
fn load_word_pool(path: &str) -> Result<MemoryWordPool, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("단어 파일 읽기 실패 ({}): {}", path, e))?;
    let words: Vec<String> =
        serde_json::from_str(&content).map_err(|e| format!("단어 파일 파싱 실패: {}", e))?;

    let mut pool = MemoryWordPool::new();
    for word in words {
        pool.save(WordEntry::from_value(word));
    }
    Ok(pool)
}

/// 사전 시드 파일(JSON: 단어 -> 뜻풀이 배열)에서 메모리 사전 구성
/// 파일이 없으면 빈 사전 (뜻풀이 보충만 생략됨)
fn load_dictionary(path: &str) -> MemoryDictionary {
    let mut dictionary = MemoryDictionary::new();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("사전 파일 읽기 실패 ({}): {}", path, e);
            return dictionary;
        }
    };
    match serde_json::from_str::<HashMap<String, Vec<String>>>(&content) {
        Ok(entries) => {
            for (word, definitions) in entries {
                dictionary.insert(
                    word,
                    definitions
                        .into_iter()
                        .map(|definition| jamodle::word::Definition {
                            definition,
                            pos: None,
                        })
                        .collect(),
                );
            }
        }
        Err(e) => log::warn!("사전 파일 파싱 실패: {}", e),
    }
    dictionary
}
