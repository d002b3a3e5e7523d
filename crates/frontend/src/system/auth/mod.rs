use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use crate::shared::notify::Notice;

/// Ошибки полей формы входа
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Валидация формы входа. Проверяются только заполненность
/// и минимальная длина пароля.
pub fn validate(request: &LoginRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if request.username.is_empty() {
        errors.username = Some("Username is required".to_string());
    }
    if request.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if request.password.chars().count() < 4 {
        errors.password = Some("Password must be at least 4 characters long".to_string());
    }
    errors
}

/// Учётные данные захардкожены: внешнего сервиса аутентификации нет
pub fn check_credentials(request: &LoginRequest) -> bool {
    request.username == "admin" && request.password == "admin"
}

/// Безголовое состояние формы входа. Представление привязывает
/// поля к сигналам и вызывает submit по отправке формы.
#[derive(Clone, Copy)]
pub struct LoginForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub username_error: RwSignal<Option<String>>,
    pub password_error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<Notice>>,
    pub authenticated: RwSignal<bool>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            username_error: RwSignal::new(None),
            password_error: RwSignal::new(None),
            notice: RwSignal::new(None),
            authenticated: RwSignal::new(false),
        }
    }

    /// Отправка формы: сначала валидация полей, затем проверка
    /// учётных данных. true — вход выполнен, представление
    /// переключается на список заказов.
    pub fn submit(&self) -> bool {
        let request = LoginRequest {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
        };

        let errors = validate(&request);
        let valid = errors.is_empty();
        self.username_error.set(errors.username);
        self.password_error.set(errors.password);
        if !valid {
            return false;
        }

        if check_credentials(&request) {
            self.notice.set(None);
            self.authenticated.set(true);
            true
        } else {
            self.notice.set(Some(Notice::error("Invalid credentials")));
            false
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
