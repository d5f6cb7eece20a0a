//! 키 입력 문자열 -> 한글 통합 변환기

use crate::core::composer::HangulComposer;
use crate::core::jamo_mapper::map_key;

/// 두벌식 키 입력 문자열을 재생하여 한글 문자열로 변환
/// 대문자는 Shift를 누른 키로 취급
/// 매핑 없는 문자(숫자, 특수문자, 공백)는 조합 중인 글자를 확정한 뒤 그대로 유지
pub fn compose_keys(keys: &str) -> String {
    let mut composer = HangulComposer::new();
    let mut output = String::new();

    for c in keys.chars() {
        let jamo = if c.is_ascii_alphabetic() {
            map_key(c, c.is_ascii_uppercase())
        } else {
            None
        };

        match jamo {
            Some(jamo) => {
                let step = composer.add_jamo(jamo);
                output.extend(step.committed);
            }
            None => {
                output.extend(composer.commit());
                output.push(c);
            }
        }
    }

    output.extend(composer.commit());
    output
}
