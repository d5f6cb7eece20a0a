//! hangul-kiosk - 가상 키보드 입력 재생기
//!
//! 표준 입력의 각 줄을 키 입력 스크립트로 해석해 가상 키보드에 넣고,
//! 줄마다 입력창 내용을 출력합니다.
//!
//! 토큰은 공백으로 구분합니다:
//! - `<han>`: 한/영 전환, `<shift>`: Shift 토글
//! - `<space>`, `<bs>`: 스페이스, 백스페이스
//! - `<clear>`: 입력창 초기화
//! - 그 밖의 토큰은 글자마다 키 하나로 입력

use hangul_kiosk::config::load_config;
use hangul_kiosk::{KeyOutcome, VirtualKeyboard};
use std::io::{self, BufRead, Write};

fn run_token(keyboard: &mut VirtualKeyboard, token: &str) {
    match token {
        "<han>" => {
            keyboard.toggle_mode();
        }
        "<shift>" => {
            keyboard.toggle_shift();
        }
        "<space>" => {
            if keyboard.space() == KeyOutcome::Rejected {
                log::info!("글자 수 제한으로 스페이스 무시");
            }
        }
        "<bs>" => {
            let effect = keyboard.backspace();
            log::debug!("백스페이스: {:?}", effect);
        }
        "<clear>" => keyboard.clear(),
        keys => {
            for key in keys.chars() {
                if keyboard.press_key(key) == KeyOutcome::Rejected {
                    log::info!("글자 수 제한으로 '{}' 입력 무시", key);
                }
            }
        }
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    log::debug!("설정: {:?}", config);

    let mut keyboard = VirtualKeyboard::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        for token in line.split_whitespace() {
            run_token(&mut keyboard, token);
        }
        if let Err(e) = writeln!(stdout, "{}", keyboard.text()) {
            log::error!("출력 실패: {}", e);
            break;
        }
    }
}
