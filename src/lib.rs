pub mod config;
pub mod core;
pub mod keyboard;

pub use self::core::composer::{Backspace, Composition, HangulComposer, Syllable};
pub use self::core::converter::compose_keys;
pub use self::core::jamo::{Choseong, Jamo, Jongseong, Jungseong};
pub use self::core::jamo_mapper::map_key;
pub use keyboard::{BackspaceEffect, InputField, InputMode, KeyOutcome, VirtualKeyboard};
