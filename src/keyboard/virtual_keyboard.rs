//! 화면 가상 키보드
//!
//! 키 입력을 자모로 바꿔 조합기에 넣고, 조합 결과를 입력창에 반영합니다.
//! 입력창의 마지막 글자가 조합 중인 글자일 때만 그 글자를 대체하고,
//! 확정된 글자는 그 앞에 덧붙입니다.

use crate::config::KeyboardConfig;
use crate::core::composer::{Composition, HangulComposer};
use crate::core::jamo::Jamo;
use crate::core::jamo_mapper::{key_label, map_key};
use crate::core::unicode::{is_complete_hangul, strip_jongseong};
use crate::keyboard::field::InputField;

/// 입력 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Hangul,
    Latin,
}

/// 키 입력 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 자모가 조합기를 거쳐 반영됨
    Composed(Composition),
    /// 문자가 그대로 입력됨
    Inserted(char),
    /// 글자 수 제한으로 거부됨 (상태 변화 없음)
    Rejected,
}

/// 백스페이스 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackspaceEffect {
    /// 입력창이 비어 있음
    Nothing,
    /// 조합 중인 글자를 한 단위 분해
    Decomposed,
    /// 이미 확정된 음절의 받침 제거 또는 음절 삭제
    Committed,
    /// 한글이 아닌 문자 삭제
    RawDelete,
    /// 조합 상태와 입력창이 어긋나 한 글자 삭제 후 조합 초기화
    FellBackToRawDelete,
}

/// 가상 키보드 상태
#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    field: InputField,
    composer: HangulComposer,
    mode: InputMode,
    /// 토글식 Shift
    shift: bool,
}

impl VirtualKeyboard {
    pub fn new(config: &KeyboardConfig) -> Self {
        let mode = if config.start_in_hangul {
            InputMode::Hangul
        } else {
            InputMode::Latin
        };
        Self::with_field(InputField::new(config.max_length), mode)
    }

    pub fn with_field(field: InputField, mode: InputMode) -> Self {
        Self {
            field,
            composer: HangulComposer::new(),
            mode,
            shift: false,
        }
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    /// 입력창을 외부에서 편집할 때 사용
    pub fn field_mut(&mut self) -> &mut InputField {
        &mut self.field
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_shift(&self) -> bool {
        self.shift
    }

    pub fn composer(&self) -> &HangulComposer {
        &self.composer
    }

    /// 문자 키 입력
    pub fn press_key(&mut self, key: char) -> KeyOutcome {
        if self.mode == InputMode::Hangul {
            if let Some(jamo) = map_key(key, self.shift) {
                return self.compose(jamo);
            }
        }
        let c = if self.shift {
            key.to_ascii_uppercase()
        } else {
            key.to_ascii_lowercase()
        };
        self.insert_literal(c)
    }

    /// 스페이스: 조합 상태만 초기화하고 공백 입력
    pub fn space(&mut self) -> KeyOutcome {
        self.insert_literal(' ')
    }

    /// 한/영 전환
    /// 조합 중인 글자는 확정하지 않고 버림 (이미 표시된 글자는 입력창에 남음)
    pub fn toggle_mode(&mut self) -> InputMode {
        self.composer.reset();
        self.mode = match self.mode {
            InputMode::Hangul => InputMode::Latin,
            InputMode::Latin => InputMode::Hangul,
        };
        log::debug!("입력 모드 전환: {:?}", self.mode);
        self.mode
    }

    pub fn toggle_shift(&mut self) -> bool {
        self.shift = !self.shift;
        self.shift
    }

    /// 백스페이스
    pub fn backspace(&mut self) -> BackspaceEffect {
        let last = match self.field.last_char() {
            Some(c) => c,
            None => {
                self.composer.reset();
                return BackspaceEffect::Nothing;
            }
        };

        match self.composer.current() {
            Some(glyph) if glyph == last => {
                let step = self.composer.backspace();
                self.field.pop_char();
                if let Some(c) = step.current {
                    self.field.push_char(c);
                }
                BackspaceEffect::Decomposed
            }
            Some(glyph) => {
                log::warn!(
                    "조합 글자 '{}'와 입력창 마지막 글자 '{}' 불일치, 한 글자 삭제",
                    glyph,
                    last
                );
                self.field.pop_char();
                self.composer.reset();
                BackspaceEffect::FellBackToRawDelete
            }
            None => {
                self.field.pop_char();
                if let Some(stripped) = strip_jongseong(last) {
                    self.field.push_char(stripped);
                    BackspaceEffect::Committed
                } else if is_complete_hangul(last) {
                    BackspaceEffect::Committed
                } else {
                    BackspaceEffect::RawDelete
                }
            }
        }
    }

    /// 입력 대상 입력창 교체, 이전 입력창 반환
    pub fn switch_field(&mut self, field: InputField) -> InputField {
        self.composer.reset();
        std::mem::replace(&mut self.field, field)
    }

    /// 입력창과 조합 상태 모두 초기화
    pub fn clear(&mut self) {
        self.field.clear();
        self.composer.reset();
    }

    /// A~Z 키의 현재 표시 글자
    pub fn key_labels(&self) -> Vec<(char, char)> {
        let hangul = self.mode == InputMode::Hangul;
        ('A'..='Z')
            .map(|key| (key, key_label(key, self.shift, hangul)))
            .collect()
    }

    /// 입력 종료, 입력창 내용 반환
    pub fn finish(self) -> String {
        self.field.into_text()
    }

    fn compose(&mut self, jamo: Jamo) -> KeyOutcome {
        // 입력창이 조합 글자로 끝나지 않으면 (외부 편집 등) 새로 조합 시작
        let shown = self
            .composer
            .current()
            .filter(|&c| self.field.last_char() == Some(c));
        if shown.is_none() && self.composer.is_composing() {
            log::debug!("입력창에 조합 글자가 없어 조합 초기화");
            self.composer.reset();
        }

        let snapshot = self.composer.clone();
        let step = self.composer.add_jamo(jamo);

        let mut text = self.field.text().to_string();
        if shown.is_some() {
            text.pop();
        }
        text.extend(step.committed);
        text.extend(step.current);

        if !self.field.fits(&text) {
            log::debug!("글자 수 제한 {} 초과, 입력 거부", self.field.max_length());
            self.composer = snapshot;
            return KeyOutcome::Rejected;
        }

        self.field.set_text(text);
        KeyOutcome::Composed(step)
    }

    fn insert_literal(&mut self, c: char) -> KeyOutcome {
        if self.field.char_count() >= self.field.max_length() {
            return KeyOutcome::Rejected;
        }
        // 표시 중인 조합 글자는 그대로 확정됨
        self.composer.reset();
        self.field.push_char(c);
        KeyOutcome::Inserted(c)
    }
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new(&KeyboardConfig::default())
    }
}
