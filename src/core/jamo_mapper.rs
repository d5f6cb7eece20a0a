//! 두벌식 가상 키보드 키 -> 한글 자모 매핑
//!
//! 키 식별자는 라틴 문자 A~Z이며 대소문자를 구분하지 않습니다.
//! Shift 상태에서는 ㄱ ㄷ ㅂ ㅅ ㅈ이 된소리(ㄲ ㄸ ㅃ ㅆ ㅉ)로,
//! ㅐ ㅔ가 ㅒ ㅖ로 바뀌고 나머지 키는 그대로입니다.

use crate::core::jamo::{Choseong, Jamo, Jungseong};

/// 키 하나를 자모로 변환
/// 매핑에 없는 키(숫자, 특수문자 등)는 None 반환, 호출자가 문자 그대로 입력
pub fn map_key(key: char, shift: bool) -> Option<Jamo> {
    use Choseong as C;
    use Jungseong as V;

    let key = key.to_ascii_uppercase();

    if shift {
        match key {
            'Q' => return Some(Jamo::Consonant(C::SsangBieup)),  // ㅃ
            'W' => return Some(Jamo::Consonant(C::SsangJieut)),  // ㅉ
            'E' => return Some(Jamo::Consonant(C::SsangDigeut)), // ㄸ
            'R' => return Some(Jamo::Consonant(C::SsangGiyeok)), // ㄲ
            'T' => return Some(Jamo::Consonant(C::SsangSiot)),   // ㅆ
            'O' => return Some(Jamo::Vowel(V::Yae)),             // ㅒ
            'P' => return Some(Jamo::Vowel(V::Ye)),              // ㅖ
            _ => {}
        }
    }

    let jamo = match key {
        // 자음
        'Q' => Jamo::Consonant(C::Bieup),  // ㅂ
        'W' => Jamo::Consonant(C::Jieut),  // ㅈ
        'E' => Jamo::Consonant(C::Digeut), // ㄷ
        'R' => Jamo::Consonant(C::Giyeok), // ㄱ
        'T' => Jamo::Consonant(C::Siot),   // ㅅ
        'A' => Jamo::Consonant(C::Mieum),  // ㅁ
        'S' => Jamo::Consonant(C::Nieun),  // ㄴ
        'D' => Jamo::Consonant(C::Ieung),  // ㅇ
        'F' => Jamo::Consonant(C::Rieul),  // ㄹ
        'G' => Jamo::Consonant(C::Hieut),  // ㅎ
        'Z' => Jamo::Consonant(C::Kieuk),  // ㅋ
        'X' => Jamo::Consonant(C::Tieut),  // ㅌ
        'C' => Jamo::Consonant(C::Chieut), // ㅊ
        'V' => Jamo::Consonant(C::Pieup),  // ㅍ

        // 모음
        'Y' => Jamo::Vowel(V::Yo),  // ㅛ
        'U' => Jamo::Vowel(V::Yeo), // ㅕ
        'I' => Jamo::Vowel(V::Ya),  // ㅑ
        'O' => Jamo::Vowel(V::Ae),  // ㅐ
        'P' => Jamo::Vowel(V::E),   // ㅔ
        'H' => Jamo::Vowel(V::O),   // ㅗ
        'J' => Jamo::Vowel(V::Eo),  // ㅓ
        'K' => Jamo::Vowel(V::A),   // ㅏ
        'L' => Jamo::Vowel(V::I),   // ㅣ
        'B' => Jamo::Vowel(V::Yu),  // ㅠ
        'N' => Jamo::Vowel(V::U),   // ㅜ
        'M' => Jamo::Vowel(V::Eu),  // ㅡ

        _ => return None,
    };
    Some(jamo)
}

/// 버튼에 표시할 글자
/// 한글 모드면 자모, 아니면 Shift에 맞는 대소문자
pub fn key_label(key: char, shift: bool, hangul: bool) -> char {
    if hangul {
        if let Some(jamo) = map_key(key, shift) {
            return jamo.to_char();
        }
    }
    if shift {
        key.to_ascii_uppercase()
    } else {
        key.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_mapping() {
        assert_eq!(map_key('R', false), Some(Jamo::Consonant(Choseong::Giyeok)));
        assert_eq!(map_key('r', false), Some(Jamo::Consonant(Choseong::Giyeok)));
        assert_eq!(map_key('S', false), Some(Jamo::Consonant(Choseong::Nieun)));
        assert_eq!(map_key('G', false), Some(Jamo::Consonant(Choseong::Hieut)));
    }

    #[test]
    fn test_shift_double_consonant() {
        assert_eq!(map_key('R', true), Some(Jamo::Consonant(Choseong::SsangGiyeok)));
        assert_eq!(map_key('E', true), Some(Jamo::Consonant(Choseong::SsangDigeut)));
        assert_eq!(map_key('Q', true), Some(Jamo::Consonant(Choseong::SsangBieup)));
        assert_eq!(map_key('T', true), Some(Jamo::Consonant(Choseong::SsangSiot)));
        assert_eq!(map_key('W', true), Some(Jamo::Consonant(Choseong::SsangJieut)));
    }

    #[test]
    fn test_shift_vowels() {
        assert_eq!(map_key('O', true), Some(Jamo::Vowel(Jungseong::Yae)));
        assert_eq!(map_key('P', true), Some(Jamo::Vowel(Jungseong::Ye)));
        // Shift와 무관한 키
        assert_eq!(map_key('K', true), map_key('K', false));
        assert_eq!(map_key('A', true), map_key('A', false));
        assert_eq!(map_key('M', true), map_key('M', false));
    }

    #[test]
    fn test_all_letters_mapped() {
        for key in 'A'..='Z' {
            assert!(map_key(key, false).is_some(), "{} unmapped", key);
            assert!(map_key(key, true).is_some(), "{} unmapped with shift", key);
        }
    }

    #[test]
    fn test_unmapped_characters() {
        assert!(map_key('1', false).is_none());
        assert!(map_key('!', true).is_none());
        assert!(map_key(' ', false).is_none());
    }

    #[test]
    fn test_key_label() {
        assert_eq!(key_label('R', false, true), 'ㄱ');
        assert_eq!(key_label('R', true, true), 'ㄲ');
        assert_eq!(key_label('R', false, false), 'r');
        assert_eq!(key_label('r', true, false), 'R');
        assert_eq!(key_label('1', false, true), '1');
    }
}
