//! 한글 조합 코어: 자모 정의, 자판 매핑, 유니코드 조합, 음절 조합기

pub mod composer;
pub mod converter;
pub mod jamo;
pub mod jamo_mapper;
pub mod unicode;
