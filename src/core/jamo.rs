//! 현대 한글 자모 정의 (초성 19, 중성 21, 종성 27)
//!
//! 각 열거형의 판별값은 유니코드 음절 조합 공식에서 쓰는 인덱스와 같습니다.
//! 종성은 "종성 없음"(0)을 `Option::None`으로 표현하므로 1부터 시작합니다.

/// 초성 (19개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Choseong {
    Giyeok = 0,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

/// 중성 (21개, 복합 모음 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Jungseong {
    A = 0,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

/// 종성 (27개, 겹받침 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Jongseong {
    Giyeok = 1,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

// 호환용 자모 (U+3131 ~ U+3163) 표기

const CHOSEONG_CHARS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

const JUNGSEONG_CHARS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

const JONGSEONG_CHARS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ',
    'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

impl Choseong {
    /// 인덱스 순서대로 나열한 전체 초성
    pub const ALL: [Choseong; 19] = [
        Choseong::Giyeok,
        Choseong::SsangGiyeok,
        Choseong::Nieun,
        Choseong::Digeut,
        Choseong::SsangDigeut,
        Choseong::Rieul,
        Choseong::Mieum,
        Choseong::Bieup,
        Choseong::SsangBieup,
        Choseong::Siot,
        Choseong::SsangSiot,
        Choseong::Ieung,
        Choseong::Jieut,
        Choseong::SsangJieut,
        Choseong::Chieut,
        Choseong::Kieuk,
        Choseong::Tieut,
        Choseong::Pieup,
        Choseong::Hieut,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 자모 문자
    pub fn to_char(self) -> char {
        CHOSEONG_CHARS[self as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        CHOSEONG_CHARS
            .iter()
            .position(|&x| x == c)
            .map(|i| Self::ALL[i])
    }

    /// 받침으로 쓸 때의 종성 (ㄸ, ㅃ, ㅉ는 받침 불가)
    pub fn to_jongseong(self) -> Option<Jongseong> {
        match self {
            Choseong::Giyeok => Some(Jongseong::Giyeok),
            Choseong::SsangGiyeok => Some(Jongseong::SsangGiyeok),
            Choseong::Nieun => Some(Jongseong::Nieun),
            Choseong::Digeut => Some(Jongseong::Digeut),
            Choseong::Rieul => Some(Jongseong::Rieul),
            Choseong::Mieum => Some(Jongseong::Mieum),
            Choseong::Bieup => Some(Jongseong::Bieup),
            Choseong::Siot => Some(Jongseong::Siot),
            Choseong::SsangSiot => Some(Jongseong::SsangSiot),
            Choseong::Ieung => Some(Jongseong::Ieung),
            Choseong::Jieut => Some(Jongseong::Jieut),
            Choseong::Chieut => Some(Jongseong::Chieut),
            Choseong::Kieuk => Some(Jongseong::Kieuk),
            Choseong::Tieut => Some(Jongseong::Tieut),
            Choseong::Pieup => Some(Jongseong::Pieup),
            Choseong::Hieut => Some(Jongseong::Hieut),
            Choseong::SsangDigeut | Choseong::SsangBieup | Choseong::SsangJieut => None,
        }
    }
}

impl Jungseong {
    /// 인덱스 순서대로 나열한 전체 중성
    pub const ALL: [Jungseong; 21] = [
        Jungseong::A,
        Jungseong::Ae,
        Jungseong::Ya,
        Jungseong::Yae,
        Jungseong::Eo,
        Jungseong::E,
        Jungseong::Yeo,
        Jungseong::Ye,
        Jungseong::O,
        Jungseong::Wa,
        Jungseong::Wae,
        Jungseong::Oe,
        Jungseong::Yo,
        Jungseong::U,
        Jungseong::Wo,
        Jungseong::We,
        Jungseong::Wi,
        Jungseong::Yu,
        Jungseong::Eu,
        Jungseong::Ui,
        Jungseong::I,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn to_char(self) -> char {
        JUNGSEONG_CHARS[self as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        JUNGSEONG_CHARS
            .iter()
            .position(|&x| x == c)
            .map(|i| Self::ALL[i])
    }
}

impl Jongseong {
    /// 인덱스 순서대로 나열한 전체 종성 (인덱스 1~27)
    pub const ALL: [Jongseong; 27] = [
        Jongseong::Giyeok,
        Jongseong::SsangGiyeok,
        Jongseong::GiyeokSiot,
        Jongseong::Nieun,
        Jongseong::NieunJieut,
        Jongseong::NieunHieut,
        Jongseong::Digeut,
        Jongseong::Rieul,
        Jongseong::RieulGiyeok,
        Jongseong::RieulMieum,
        Jongseong::RieulBieup,
        Jongseong::RieulSiot,
        Jongseong::RieulTieut,
        Jongseong::RieulPieup,
        Jongseong::RieulHieut,
        Jongseong::Mieum,
        Jongseong::Bieup,
        Jongseong::BieupSiot,
        Jongseong::Siot,
        Jongseong::SsangSiot,
        Jongseong::Ieung,
        Jongseong::Jieut,
        Jongseong::Chieut,
        Jongseong::Kieuk,
        Jongseong::Tieut,
        Jongseong::Pieup,
        Jongseong::Hieut,
    ];

    /// 음절 조합 공식의 종성 인덱스 (1~27)
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 0은 "종성 없음"이므로 None
    pub fn from_index(index: u32) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    pub fn to_char(self) -> char {
        JONGSEONG_CHARS[self as usize - 1]
    }

    pub fn from_char(c: char) -> Option<Self> {
        JONGSEONG_CHARS
            .iter()
            .position(|&x| x == c)
            .map(|i| Self::ALL[i])
    }

    /// 홑받침을 다음 글자의 초성으로 옮길 때 사용
    /// 겹받침은 None (`unicode::split_jongseong` 사용)
    pub fn to_choseong(self) -> Option<Choseong> {
        match self {
            Jongseong::Giyeok => Some(Choseong::Giyeok),
            Jongseong::SsangGiyeok => Some(Choseong::SsangGiyeok),
            Jongseong::Nieun => Some(Choseong::Nieun),
            Jongseong::Digeut => Some(Choseong::Digeut),
            Jongseong::Rieul => Some(Choseong::Rieul),
            Jongseong::Mieum => Some(Choseong::Mieum),
            Jongseong::Bieup => Some(Choseong::Bieup),
            Jongseong::Siot => Some(Choseong::Siot),
            Jongseong::SsangSiot => Some(Choseong::SsangSiot),
            Jongseong::Ieung => Some(Choseong::Ieung),
            Jongseong::Jieut => Some(Choseong::Jieut),
            Jongseong::Chieut => Some(Choseong::Chieut),
            Jongseong::Kieuk => Some(Choseong::Kieuk),
            Jongseong::Tieut => Some(Choseong::Tieut),
            Jongseong::Pieup => Some(Choseong::Pieup),
            Jongseong::Hieut => Some(Choseong::Hieut),
            _ => None,
        }
    }
}

/// 조합기에 입력되는 자모 하나
///
/// 같은 자음 글자가 초성과 종성 모두 될 수 있으므로, 자음은 초성 형태로
/// 입력받고 실제 자리는 조합기 상태가 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jamo {
    /// 자음 (초성 형태)
    Consonant(Choseong),
    /// 모음
    Vowel(Jungseong),
}

impl Jamo {
    /// 호환용 자모 문자를 자모로 해석
    /// 겹받침 글자(ㄳ 등)나 한글이 아닌 문자는 None
    pub fn from_char(c: char) -> Option<Self> {
        Choseong::from_char(c)
            .map(Jamo::Consonant)
            .or_else(|| Jungseong::from_char(c).map(Jamo::Vowel))
    }

    pub fn to_char(self) -> char {
        match self {
            Jamo::Consonant(cho) => cho.to_char(),
            Jamo::Vowel(jung) => jung.to_char(),
        }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant(_))
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel(_))
    }
}
