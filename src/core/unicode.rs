//! 유니코드 한글 조합/분해 유틸리티

use crate::core::jamo::{Choseong, Jongseong, Jungseong};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성/중성/종성으로 완성된 한글 음절 생성
/// 코드포인트 = 0xAC00 + 초성*588 + 중성*28 + 종성
pub fn compose_syllable(
    choseong: Choseong,
    jungseong: Jungseong,
    jongseong: Option<Jongseong>,
) -> Option<char> {
    let jong = jongseong.map_or(0, Jongseong::index);
    let code = HANGUL_SYLLABLE_BASE
        + (choseong.index() * JUNGSEONG_COUNT + jungseong.index()) * JONGSEONG_COUNT
        + jong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성으로 분해
pub fn decompose_syllable(c: char) -> Option<(Choseong, Jungseong, Option<Jongseong>)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jong = offset % JONGSEONG_COUNT;
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((
        Choseong::from_index(cho)?,
        Jungseong::from_index(jung)?,
        Jongseong::from_index(jong),
    ))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자가 호환용 자모(ㄱ-ㅣ)인지 확인
pub fn is_compat_jamo(c: char) -> bool {
    (0x3131..=0x3163).contains(&(c as u32))
}

/// 완성형 음절에서 받침을 통째로 제거
/// 받침이 없거나 한글 음절이 아니면 None
pub fn strip_jongseong(c: char) -> Option<char> {
    match decompose_syllable(c)? {
        (cho, jung, Some(_)) => compose_syllable(cho, jung, None),
        (_, _, None) => None,
    }
}

/// 두 중성을 복합 모음으로 조합
pub fn combine_jungseong(first: Jungseong, second: Jungseong) -> Option<Jungseong> {
    use Jungseong::*;
    match (first, second) {
        (O, A) => Some(Wa),  // ㅗ + ㅏ = ㅘ
        (O, Ae) => Some(Wae), // ㅗ + ㅐ = ㅙ
        (O, I) => Some(Oe),  // ㅗ + ㅣ = ㅚ
        (U, Eo) => Some(Wo), // ㅜ + ㅓ = ㅝ
        (U, E) => Some(We),  // ㅜ + ㅔ = ㅞ
        (U, I) => Some(Wi),  // ㅜ + ㅣ = ㅟ
        (Eu, I) => Some(Ui), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 기존 종성과 새로 들어온 자음을 겹받침으로 조합
pub fn combine_jongseong(first: Jongseong, next: Choseong) -> Option<Jongseong> {
    match (first, next) {
        (Jongseong::Giyeok, Choseong::Siot) => Some(Jongseong::GiyeokSiot), // ㄳ
        (Jongseong::Nieun, Choseong::Jieut) => Some(Jongseong::NieunJieut), // ㄵ
        (Jongseong::Nieun, Choseong::Hieut) => Some(Jongseong::NieunHieut), // ㄶ
        (Jongseong::Rieul, Choseong::Giyeok) => Some(Jongseong::RieulGiyeok), // ㄺ
        (Jongseong::Rieul, Choseong::Mieum) => Some(Jongseong::RieulMieum), // ㄻ
        (Jongseong::Rieul, Choseong::Bieup) => Some(Jongseong::RieulBieup), // ㄼ
        (Jongseong::Rieul, Choseong::Siot) => Some(Jongseong::RieulSiot), // ㄽ
        (Jongseong::Rieul, Choseong::Tieut) => Some(Jongseong::RieulTieut), // ㄾ
        (Jongseong::Rieul, Choseong::Pieup) => Some(Jongseong::RieulPieup), // ㄿ
        (Jongseong::Rieul, Choseong::Hieut) => Some(Jongseong::RieulHieut), // ㅀ
        (Jongseong::Bieup, Choseong::Siot) => Some(Jongseong::BieupSiot), // ㅄ
        _ => None,
    }
}

/// 겹받침 분리
/// 반환: (남는 종성, 분리되는 자음의 초성)
pub fn split_jongseong(jong: Jongseong) -> Option<(Jongseong, Choseong)> {
    match jong {
        Jongseong::GiyeokSiot => Some((Jongseong::Giyeok, Choseong::Siot)),
        Jongseong::NieunJieut => Some((Jongseong::Nieun, Choseong::Jieut)),
        Jongseong::NieunHieut => Some((Jongseong::Nieun, Choseong::Hieut)),
        Jongseong::RieulGiyeok => Some((Jongseong::Rieul, Choseong::Giyeok)),
        Jongseong::RieulMieum => Some((Jongseong::Rieul, Choseong::Mieum)),
        Jongseong::RieulBieup => Some((Jongseong::Rieul, Choseong::Bieup)),
        Jongseong::RieulSiot => Some((Jongseong::Rieul, Choseong::Siot)),
        Jongseong::RieulTieut => Some((Jongseong::Rieul, Choseong::Tieut)),
        Jongseong::RieulPieup => Some((Jongseong::Rieul, Choseong::Pieup)),
        Jongseong::RieulHieut => Some((Jongseong::Rieul, Choseong::Hieut)),
        Jongseong::BieupSiot => Some((Jongseong::Bieup, Choseong::Siot)),
        _ => None,
    }
}
