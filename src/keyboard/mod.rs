//! 키오스크 가상 키보드
//!
//! 한/영 모드, Shift, 스페이스, 백스페이스를 처리하며 조합기 출력을
//! 입력창에 반영하는 규약을 담당합니다.

mod field;
mod virtual_keyboard;

pub use field::InputField;
pub use virtual_keyboard::{BackspaceEffect, InputMode, KeyOutcome, VirtualKeyboard};
