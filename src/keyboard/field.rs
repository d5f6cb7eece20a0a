//! 입력창 모델

/// 가상 키보드가 글자를 써 넣는 입력창
///
/// 글자 수 제한은 입력창이 가지며, 키보드는 제한을 넘는 입력을 거부합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    text: String,
    max_length: usize,
}

impl InputField {
    pub fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            max_length,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// 글자 수 (바이트가 아닌 문자 단위)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 외부에서 내용을 바꿀 때 사용 (길이 제한은 적용하지 않음)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub(crate) fn pop_char(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// 내용을 바꾼 결과가 제한 안에 있는지 확인
    pub(crate) fn fits(&self, text: &str) -> bool {
        text.chars().count() <= self.max_length
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new(crate::config::KeyboardConfig::default().max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_is_not_bytes() {
        let mut field = InputField::new(3);
        field.set_text("한글");
        assert_eq!(field.char_count(), 2);
        assert_eq!(field.last_char(), Some('글'));
        assert!(field.fits("한글a"));
        assert!(!field.fits("한글ab"));
    }

    #[test]
    fn test_pop_and_clear() {
        let mut field = InputField::default();
        assert_eq!(field.max_length(), 100);
        field.push_char('가');
        field.push_char('a');
        assert_eq!(field.pop_char(), Some('a'));
        assert_eq!(field.text(), "가");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.pop_char(), None);
    }
}
