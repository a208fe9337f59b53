//! Login screen

use crate::action::Action;
use crate::components::{Button, Container, Input, InputType, Text, View};
use crate::strings;
use crate::styles::StyleClass;
use app_state::{LoginForm, TextField};

/// Mask character for password inputs
const MASK: char = '•';

/// Render the login form
///
/// The submit button is enabled whatever the field contents.
pub fn render(form: &LoginForm) -> View {
    let email = Input::new(TextField::Email, InputType::Email)
        .with_placeholder(strings::EMAIL_PLACEHOLDER)
        .with_value(form.email())
        .with_class(StyleClass::Input);
    let password = Input::new(TextField::Password, InputType::Password)
        .with_placeholder(strings::PASSWORD_PLACEHOLDER)
        .with_value(MASK.to_string().repeat(form.password_len()))
        .with_class(StyleClass::Input);

    Container::new()
        .with_class(StyleClass::LoginContainer)
        .child(Text::new(strings::LOGIN_TITLE).with_class(StyleClass::LoginTitle))
        .child(email)
        .child(password)
        .child(
            Button::new(strings::LOGIN_SUBMIT, Action::SubmitLogin)
                .with_class(StyleClass::Button)
                .with_label_class(StyleClass::ButtonText),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let view = render(&LoginForm::new());
        let inputs = view.inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].placeholder, "Email");
        assert!(inputs[1].is_secure());
        assert_eq!(view.actions(), vec![&Action::SubmitLogin]);
        assert_eq!(view.texts(), vec!["Connexion", "Se connecter"]);

        let mut label_class = None;
        view.walk(&mut |v| {
            if let View::Button(button) = v {
                label_class = button.label_class;
            }
        });
        assert_eq!(label_class, Some(StyleClass::ButtonText));
    }

    #[test]
    fn test_password_masked() {
        let mut form = LoginForm::new();
        form.apply_text(TextField::Email, "alice@example.com");
        form.apply_text(TextField::Password, "abc");
        let view = render(&form);
        let inputs = view.inputs();
        assert_eq!(inputs[0].value, "alice@example.com");
        assert_eq!(inputs[1].value, "•••");
    }
}
