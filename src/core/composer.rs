//! 한글 음절 조합기
//!
//! 조합 중인 음절 하나(`Syllable`)를 값 타입으로 두고, 상태 전이는
//! 순수 함수 `push_jamo` / `pop_jamo`로 계산합니다. `HangulComposer`는
//! 이 전이 함수를 감싸 표시용 글자 캐시를 유지합니다.

use crate::core::jamo::{Choseong, Jamo, Jongseong, Jungseong};
use crate::core::unicode::{combine_jongseong, combine_jungseong, compose_syllable, split_jongseong};

/// 조합 중인 음절 (초성/중성/종성 슬롯)
///
/// 종성은 초성과 중성이 모두 있을 때만 존재합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Syllable {
    choseong: Option<Choseong>,
    jungseong: Option<Jungseong>,
    jongseong: Option<Jongseong>,
}

impl Syllable {
    /// 빈 음절
    pub const EMPTY: Syllable = Syllable {
        choseong: None,
        jungseong: None,
        jongseong: None,
    };

    fn with_choseong(cho: Choseong) -> Self {
        Syllable {
            choseong: Some(cho),
            ..Self::EMPTY
        }
    }

    fn with_jungseong(jung: Jungseong) -> Self {
        Syllable {
            jungseong: Some(jung),
            ..Self::EMPTY
        }
    }

    pub fn choseong(&self) -> Option<Choseong> {
        self.choseong
    }

    pub fn jungseong(&self) -> Option<Jungseong> {
        self.jungseong
    }

    pub fn jongseong(&self) -> Option<Jongseong> {
        self.jongseong
    }

    pub fn is_empty(&self) -> bool {
        self.choseong.is_none() && self.jungseong.is_none()
    }

    /// 화면에 표시할 글자
    /// - 초성+중성: 완성형 음절
    /// - 초성만 또는 중성만: 해당 자모
    /// - 비어 있음: None
    pub fn to_char(&self) -> Option<char> {
        match (self.choseong, self.jungseong) {
            (Some(cho), Some(jung)) => compose_syllable(cho, jung, self.jongseong),
            (Some(cho), None) => Some(cho.to_char()),
            (None, Some(jung)) => Some(jung.to_char()),
            (None, None) => None,
        }
    }
}

/// 자모 입력 전이
/// 반환: (새 음절, 확정된 글자)
pub fn push_jamo(syllable: Syllable, jamo: Jamo) -> (Syllable, Option<char>) {
    match jamo {
        Jamo::Consonant(cho) => push_consonant(syllable, cho),
        Jamo::Vowel(jung) => push_vowel(syllable, jung),
    }
}

fn push_consonant(s: Syllable, cho: Choseong) -> (Syllable, Option<char>) {
    match (s.choseong, s.jungseong, s.jongseong) {
        (None, None, _) => (Syllable::with_choseong(cho), None),
        (Some(_), Some(_), None) => match cho.to_jongseong() {
            Some(jong) => (
                Syllable {
                    jongseong: Some(jong),
                    ..s
                },
                None,
            ),
            // 받침 불가 자음 (ㄸ, ㅃ, ㅉ)
            None => (Syllable::with_choseong(cho), s.to_char()),
        },
        (Some(_), Some(_), Some(jong)) => match combine_jongseong(jong, cho) {
            Some(compound) => (
                Syllable {
                    jongseong: Some(compound),
                    ..s
                },
                None,
            ),
            None => (Syllable::with_choseong(cho), s.to_char()),
        },
        // 초성만 또는 중성만 있는 상태
        _ => (Syllable::with_choseong(cho), s.to_char()),
    }
}

fn push_vowel(s: Syllable, jung: Jungseong) -> (Syllable, Option<char>) {
    if let (Some(_), Some(current), None) = (s.choseong, s.jungseong, s.jongseong) {
        if let Some(diphthong) = combine_jungseong(current, jung) {
            return (
                Syllable {
                    jungseong: Some(diphthong),
                    ..s
                },
                None,
            );
        }
    }

    if let Some(jong) = s.jongseong {
        // 종성을 다음 글자의 초성으로 분리
        // 겹받침이면 둘째 자음만, 홑받침이면 전체가 이동
        let split = split_jongseong(jong)
            .map(|(rest, next)| (Some(rest), next))
            .or_else(|| jong.to_choseong().map(|next| (None, next)));

        return match split {
            Some((rest, next)) => {
                let committed = Syllable {
                    jongseong: rest,
                    ..s
                }
                .to_char();
                let next = Syllable {
                    choseong: Some(next),
                    jungseong: Some(jung),
                    jongseong: None,
                };
                (next, committed)
            }
            // 홑받침은 모두 초성 대응이 있으므로 도달하지 않음
            None => (Syllable::with_jungseong(jung), s.to_char()),
        };
    }

    match (s.choseong, s.jungseong) {
        (Some(_), None) => (
            Syllable {
                jungseong: Some(jung),
                ..s
            },
            None,
        ),
        _ => (Syllable::with_jungseong(jung), s.to_char()),
    }
}

/// 백스페이스 전이: 바깥쪽 슬롯부터 한 단위씩 제거
pub fn pop_jamo(s: Syllable) -> Syllable {
    if let Some(jong) = s.jongseong {
        // 겹받침은 첫 자음만 남김
        return Syllable {
            jongseong: split_jongseong(jong).map(|(first, _)| first),
            ..s
        };
    }
    if s.jungseong.is_some() {
        return Syllable {
            jungseong: None,
            ..s
        };
    }
    Syllable::EMPTY
}

/// `add_jamo` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    /// 확정되어 입력창에 덧붙일 글자
    pub committed: Option<char>,
    /// 조합 중인 글자, 이전 조합 글자를 대체함 (None이면 조합 글자 없음)
    pub current: Option<char>,
}

/// `backspace` 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backspace {
    /// 삭제 후 조합 중인 글자
    pub current: Option<char>,
    pub changed: bool,
}

/// 한글 조합기
#[derive(Debug, Clone, Default)]
pub struct HangulComposer {
    syllable: Syllable,
    /// 마지막으로 받은 자모 (진단용)
    last_jamo: Option<Jamo>,
    /// 현재 표시 글자 캐시
    composed: Option<char>,
}

impl HangulComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 자모를 입력하여 상태 전이
    pub fn add_jamo(&mut self, jamo: Jamo) -> Composition {
        let (next, committed) = push_jamo(self.syllable, jamo);
        self.last_jamo = Some(jamo);
        self.apply(next);
        log::trace!(
            "jamo {} -> committed {:?}, current {:?}",
            jamo.to_char(),
            committed,
            self.composed
        );
        Composition {
            committed,
            current: self.composed,
        }
    }

    /// 한 단위 삭제 (종성 -> 중성 -> 초성 순)
    pub fn backspace(&mut self) -> Backspace {
        let next = pop_jamo(self.syllable);
        if next.is_empty() {
            self.last_jamo = None;
        }
        self.apply(next);
        Backspace {
            current: self.composed,
            changed: true,
        }
    }

    /// 조합 중인 글자를 확정하고 상태 초기화
    pub fn commit(&mut self) -> Option<char> {
        let committed = self.composed;
        self.reset();
        committed
    }

    /// 조합 중인 글자를 버리고 상태 초기화
    pub fn reset(&mut self) {
        self.last_jamo = None;
        self.apply(Syllable::EMPTY);
    }

    /// 조합 중인 글자
    pub fn current(&self) -> Option<char> {
        self.composed
    }

    pub fn syllable(&self) -> Syllable {
        self.syllable
    }

    pub fn last_jamo(&self) -> Option<Jamo> {
        self.last_jamo
    }

    pub fn is_composing(&self) -> bool {
        !self.syllable.is_empty()
    }

    fn apply(&mut self, syllable: Syllable) {
        self.syllable = syllable;
        self.composed = syllable.to_char();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jamo(c: char) -> Jamo {
        Jamo::from_char(c).unwrap()
    }

    /// 자모 문자열을 입력하고 (확정 문자열, 조합 중인 글자) 반환
    fn feed(composer: &mut HangulComposer, input: &str) -> (String, Option<char>) {
        let mut committed = String::new();
        let mut current = None;
        for c in input.chars() {
            let step = composer.add_jamo(jamo(c));
            committed.extend(step.committed);
            current = step.current;
        }
        (committed, current)
    }

    fn compose(input: &str) -> String {
        let mut composer = HangulComposer::new();
        let (mut text, _) = feed(&mut composer, input);
        text.extend(composer.commit());
        text
    }

    #[test]
    fn test_basic_syllable() {
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㄱㅏㄴ"), (String::new(), Some('간')));
        assert_eq!(compose("ㄱㅏ"), "가");
    }

    #[test]
    fn test_complex_jongseong() {
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㄱㅏㄱㅅ"), (String::new(), Some('갃')));
        assert_eq!(composer.syllable().jongseong(), Some(Jongseong::GiyeokSiot));
        assert_eq!(compose("ㅇㅣㄹㄱ"), "읽");
    }

    #[test]
    fn test_backspace_decomposition() {
        let mut composer = HangulComposer::new();
        feed(&mut composer, "ㄱㅏㄱㅅ");
        let expected = [Some('각'), Some('가'), Some('ㄱ'), None];
        for want in expected {
            let step = composer.backspace();
            assert!(step.changed);
            assert_eq!(step.current, want);
        }
        assert!(!composer.is_composing());
    }

    #[test]
    fn test_backspace_empty_is_idempotent() {
        let mut composer = HangulComposer::new();
        for _ in 0..3 {
            let step = composer.backspace();
            assert_eq!(step.current, None);
            assert!(step.changed);
        }
        assert_eq!(composer.current(), None);
    }

    #[test]
    fn test_complex_vowel() {
        let mut composer = HangulComposer::new();
        feed(&mut composer, "ㄱㅗ");
        let step = composer.add_jamo(jamo('ㅏ'));
        assert_eq!(step.committed, None);
        assert_eq!(step.current, Some('과'));
        // 표시 캐시도 갱신되어야 함
        assert_eq!(composer.current(), Some('과'));
        assert_eq!(composer.last_jamo(), Some(jamo('ㅏ')));
        assert_eq!(compose("ㅇㅜㅓㄴ"), "원");
        assert_eq!(compose("ㅇㅡㅣ"), "의");
    }

    #[test]
    fn test_no_compound_commits() {
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㄱㅏㄴㄷ"), ("간".to_string(), Some('ㄷ')));
    }

    #[test]
    fn test_jongseong_moves_to_next_syllable() {
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㅎㅏㄴㅏ"), ("하".to_string(), Some('나')));
        assert_eq!(compose("ㄱㅏㄱㅏㄱㅣ"), "가가기");
    }

    #[test]
    fn test_compound_jongseong_split_by_vowel() {
        // ㄺ + ㅓ -> 일 + 거
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㅇㅣㄹㄱㅓ"), ("일".to_string(), Some('거')));
        assert_eq!(compose("ㅇㅓㅂㅅㅓ"), "업서");
    }

    #[test]
    fn test_consonant_without_jongseong_form() {
        // ㄸ는 받침이 될 수 없으므로 새 글자
        let mut composer = HangulComposer::new();
        assert_eq!(feed(&mut composer, "ㄱㅏㄸ"), ("가".to_string(), Some('ㄸ')));
    }

    #[test]
    fn test_consonant_only() {
        assert_eq!(compose("ㄱ"), "ㄱ");
        assert_eq!(compose("ㄱㄴ"), "ㄱㄴ");
    }

    #[test]
    fn test_vowel_only() {
        assert_eq!(compose("ㅏ"), "ㅏ");
        assert_eq!(compose("ㅏㅗ"), "ㅏㅗ");
        // 중성만 있는 상태에서는 복합 모음을 만들지 않음
        assert_eq!(compose("ㅗㅏ"), "ㅗㅏ");
        // 중성 뒤 자음은 새 글자의 초성
        assert_eq!(compose("ㅏㄱㅏ"), "ㅏ가");
    }

    #[test]
    fn test_vowel_after_full_syllable() {
        assert_eq!(compose("ㄱㅏㅏ"), "가ㅏ");
    }

    #[test]
    fn test_commit_and_reset() {
        let mut composer = HangulComposer::new();
        assert_eq!(composer.commit(), None);
        feed(&mut composer, "ㅎㅏㄴ");
        assert_eq!(composer.commit(), Some('한'));
        assert_eq!(composer.current(), None);
        assert_eq!(composer.syllable(), Syllable::EMPTY);

        feed(&mut composer, "ㄱㅏ");
        composer.reset();
        assert_eq!(composer.current(), None);
        assert_eq!(composer.last_jamo(), None);
    }

    #[test]
    fn test_pure_transitions() {
        let (s, committed) = push_jamo(Syllable::EMPTY, jamo('ㅂ'));
        assert_eq!(committed, None);
        assert_eq!(s.choseong(), Some(Choseong::Bieup));
        let (s, _) = push_jamo(s, jamo('ㅏ'));
        let (s, _) = push_jamo(s, jamo('ㄹ'));
        let (s, _) = push_jamo(s, jamo('ㅂ'));
        assert_eq!(s.to_char(), Some('밟'));

        let s = pop_jamo(s);
        assert_eq!(s.to_char(), Some('발'));
        assert_eq!(pop_jamo(Syllable::EMPTY), Syllable::EMPTY);
    }

    #[test]
    fn test_jongseong_requires_choseong_and_jungseong() {
        let inputs = ["ㄱㅏㄴㄷㅏㄹㄱㅅㅗㅏㅣㅂㅅ", "ㅏㄱㄴㅗㅏㄸㅃ", "ㄹㅁㅜㅓㄹㅎㅡㅣ"];
        for input in inputs {
            let mut composer = HangulComposer::new();
            for c in input.chars() {
                composer.add_jamo(jamo(c));
                let s = composer.syllable();
                if s.jongseong().is_some() {
                    assert!(s.choseong().is_some() && s.jungseong().is_some());
                }
            }
        }
    }
}
