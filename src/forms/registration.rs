//! Registration Form
//!
//! New-account schema and submission.

use crate::api::Backend;
use crate::capabilities::{Navigator, Notice, Notifier};
use crate::config::{routes, STARTING_BALANCE, USER_NAME_MAX_LEN};
use crate::models::NewUser;
use crate::validation::{must_equal, FieldCheck, ValidationErrors};
use super::SubmitOutcome;

pub const FIELD_NOME: &str = "nome";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SENHA: &str = "senha";
pub const FIELD_CONFIRMAR_SENHA: &str = "confirmarSenha";

const MSG_REQUIRED: &str = "O campo é obrigatório";
const MSG_NAME_TOO_LONG: &str = "Campo inválido";
const MSG_EMAIL: &str = "Insira um e-mail válido";
const MSG_CONFIRM_REQUIRED: &str = "Confirme sua senha";
const MSG_PASSWORDS_DIFFER: &str = "As senhas devem ser iguais";

const TOAST_TITLE: &str = "Cadastro";
const TOAST_SUCCESS: &str = "Cadastro realizado com sucesso!";
const TOAST_FAILURE: &str = "Erro ao realizar cadastro, verifique os dados inseridos e tente novamente";

/// Raw registration input as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub confirmar_senha: String,
}

impl RegistrationForm {
    /// Check the schema and build the request body
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldCheck::new(FIELD_NOME, &self.nome)
            .required(MSG_REQUIRED)
            .max_len(USER_NAME_MAX_LEN, MSG_NAME_TOO_LONG)
            .finish(&mut errors);
        FieldCheck::new(FIELD_EMAIL, &self.email)
            .required(MSG_REQUIRED)
            .email(MSG_EMAIL)
            .finish(&mut errors);
        // Passwords are taken verbatim, spaces included
        FieldCheck::new(FIELD_SENHA, &self.senha)
            .non_empty(MSG_REQUIRED)
            .finish(&mut errors);
        FieldCheck::new(FIELD_CONFIRMAR_SENHA, &self.confirmar_senha)
            .non_empty(MSG_CONFIRM_REQUIRED)
            .finish(&mut errors);
        must_equal(&mut errors, FIELD_CONFIRMAR_SENHA, &self.senha, &self.confirmar_senha, MSG_PASSWORDS_DIFFER);

        errors.into_result(|| NewUser {
            nome: self.nome.clone(),
            email: self.email.clone(),
            senha: self.senha.clone(),
            confirmar_senha: self.confirmar_senha.clone(),
            moedas: STARTING_BALANCE,
        })
    }
}

/// Validate, create the account, then go to login
pub async fn submit_registration<B, N, R>(form: &RegistrationForm, backend: &B, notifier: &N, navigator: &R) -> SubmitOutcome
where
    B: Backend,
    N: Notifier,
    R: Navigator,
{
    let user = match form.validate() {
        Ok(user) => user,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    log::info!("[Cadastro] Creating account for {}", user.nome);
    match backend.create_user(&user).await {
        Ok(()) => {
            notifier.notify(Notice::success(TOAST_TITLE, TOAST_SUCCESS));
            navigator.navigate(routes::LOGIN);
            SubmitOutcome::Submitted
        }
        Err(e) => {
            log::error!("[Cadastro] Account creation failed: {}", e);
            notifier.notify(Notice::error(TOAST_TITLE, TOAST_FAILURE));
            SubmitOutcome::Failed(e)
        }
    }
}
