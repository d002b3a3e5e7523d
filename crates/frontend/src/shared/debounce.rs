/// Дебаунс текстового ввода через счётчик поколений.
///
/// Вместо хранения и отмены таймеров каждое изменение значения
/// начинает новое поколение; задача, досыпающая окно дебаунса,
/// сверяет свой токен и срабатывает только если не была вытеснена
/// более поздним изменением.
use gloo_timers::future::TimeoutFuture;

/// Пауза ввода перед публикацией значения, мс
pub const INPUT_DEBOUNCE_MS: u32 = 300;

/// Монотонный счётчик поколений
#[derive(Debug, Clone, Default)]
pub struct Epoch(u64);

impl Epoch {
    pub fn new() -> Self {
        Self(0)
    }

    /// Начать новое поколение и вернуть его токен.
    /// Все ранее выданные токены становятся устаревшими.
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Токен актуален, пока не было более позднего bump
    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Подождать окно дебаунса
pub async fn pause() {
    TimeoutFuture::new(INPUT_DEBOUNCE_MS).await;
}
