//! Theme Creation Form
//!
//! One form produces the theme and its icon, image and piece.

use crate::api::Backend;
use crate::capabilities::{Navigator, Notice, Notifier};
use crate::config::routes;
use crate::models::{Icone, Imagem, Peca, Tema, ThemeBundle};
use crate::validation::{parse_positive, FieldCheck, ValidationErrors};
use super::SubmitOutcome;

pub const FIELD_TMANOME: &str = "tmanome";
pub const FIELD_TMAPRECO: &str = "tmapreco";
pub const FIELD_ICNNOME: &str = "icnnome";
pub const FIELD_ICNURL: &str = "icnurl";
pub const FIELD_IMGNOME: &str = "imgnome";
pub const FIELD_IMGURL: &str = "imgurl";
pub const FIELD_PCANOME: &str = "pcanome";
pub const FIELD_PCAURL: &str = "pcaurl";

const TOAST_TITLE: &str = "Cadastro";
const TOAST_SUCCESS: &str = "Cadastro realizado com sucesso";
const TOAST_FAILURE: &str = "Cadastro realizado com erro";

/// Raw theme input as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeForm {
    pub tmanome: String,
    pub tmapreco: String,
    pub icnnome: String,
    pub icnurl: String,
    pub imgnome: String,
    pub imgurl: String,
    pub pcanome: String,
    pub pcaurl: String,
}

impl ThemeForm {
    pub fn validate(&self) -> Result<ThemeBundle, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldCheck::new(FIELD_TMANOME, &self.tmanome)
            .required("Nome do Tema é obrigatório")
            .finish(&mut errors);
        FieldCheck::new(FIELD_ICNNOME, &self.icnnome)
            .required("Nome do Ícone é obrigatório")
            .finish(&mut errors);
        FieldCheck::new(FIELD_ICNURL, &self.icnurl)
            .image_url("URL do Ícone inválida")
            .finish(&mut errors);
        FieldCheck::new(FIELD_TMAPRECO, &self.tmapreco)
            .positive_number("Preço do Ícone deve ser maior que 0")
            .finish(&mut errors);
        FieldCheck::new(FIELD_IMGNOME, &self.imgnome)
            .required("Nome da Imagem é obrigatório")
            .finish(&mut errors);
        FieldCheck::new(FIELD_IMGURL, &self.imgurl)
            .image_url("URL da Imagem inválida")
            .finish(&mut errors);
        FieldCheck::new(FIELD_PCANOME, &self.pcanome)
            .required("Nome da Peça é obrigatório")
            .finish(&mut errors);
        FieldCheck::new(FIELD_PCAURL, &self.pcaurl)
            .image_url("URL da Peça inválida")
            .finish(&mut errors);

        // Price is known to parse once no errors remain
        let price = parse_positive(&self.tmapreco).unwrap_or_default();
        errors.into_result(|| ThemeBundle {
            tema: Tema {
                tmanome: self.tmanome.clone(),
                tmapreco: price,
            },
            icone: Icone {
                icnnome: self.icnnome.clone(),
                icnurl: self.icnurl.clone(),
            },
            imagem: Imagem {
                imgnome: self.imgnome.clone(),
                imgurl: self.imgurl.clone(),
            },
            peca: Peca {
                pcanome: self.pcanome.clone(),
                pcaurl: self.pcaurl.clone(),
            },
        })
    }
}

/// Validate, create the theme bundle, then go to the theme list
pub async fn submit_theme<B, N, R>(form: &ThemeForm, backend: &B, notifier: &N, navigator: &R) -> SubmitOutcome
where
    B: Backend,
    N: Notifier,
    R: Navigator,
{
    let bundle = match form.validate() {
        Ok(bundle) => bundle,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    log::info!("[ThemeCreate] Creating theme {}", bundle.tema.tmanome);
    match backend.create_theme(&bundle).await {
        Ok(()) => {
            notifier.notify(Notice::success(TOAST_TITLE, TOAST_SUCCESS));
            navigator.navigate(routes::THEME_LIST);
            SubmitOutcome::Submitted
        }
        Err(e) => {
            log::error!("[ThemeCreate] Erro ao cadastrar: {}", e);
            notifier.notify(Notice::error(TOAST_TITLE, TOAST_FAILURE));
            SubmitOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::capabilities::fakes::{RecordingNavigator, RecordingNotifier};
    use crate::error::ApiError;
    use crate::forms::fake_backend::{Call, FakeBackend};

    fn valid_form() -> ThemeForm {
        ThemeForm {
            tmanome: "Clássico".to_string(),
            tmapreco: "25".to_string(),
            icnnome: "Ícone".to_string(),
            icnurl: "https://cdn.example/icon.png".to_string(),
            imgnome: "Tabuleiro".to_string(),
            imgurl: "https://cdn.example/board.jpg".to_string(),
            pcanome: "Peça".to_string(),
            pcaurl: "https://cdn.example/piece.gif".to_string(),
        }
    }

    #[test]
    fn test_icon_url_extension_checked() {
        let form = ThemeForm { icnurl: "photo.txt".to_string(), ..valid_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FIELD_ICNURL), Some("URL do Ícone inválida"));
        assert_eq!(errors.len(), 1);

        let form = ThemeForm { icnurl: "photo.png".to_string(), ..valid_form() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in ["0", "-1", "", "abc"] {
            let form = ThemeForm { tmapreco: price.to_string(), ..valid_form() };
            let errors = form.validate().unwrap_err();
            assert!(errors.has(FIELD_TMAPRECO), "price {:?} should fail", price);
        }
    }

    #[test]
    fn test_bundle_groups_fields() {
        let bundle = valid_form().validate().unwrap();
        assert_eq!(bundle.tema.tmanome, "Clássico");
        assert_eq!(bundle.tema.tmapreco, 25.0);
        assert_eq!(bundle.icone.icnurl, "https://cdn.example/icon.png");
        assert_eq!(bundle.imagem.imgnome, "Tabuleiro");
        assert_eq!(bundle.peca.pcaurl, "https://cdn.example/piece.gif");

        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["tema"]["tmapreco"], 25.0);
        assert_eq!(json["peca"]["pcanome"], "Peça");
    }

    #[test]
    fn test_submit_success_navigates_to_theme_list() {
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        let outcome = block_on(submit_theme(&valid_form(), &backend, &notifier, &navigator));

        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert!(matches!(backend.calls.borrow().as_slice(), [Call::CreateTheme(_)]));
        assert_eq!(*navigator.visited.borrow(), vec![routes::THEME_LIST.to_string()]);
    }

    #[test]
    fn test_submit_invalid_sends_nothing() {
        let form = ThemeForm { pcaurl: "piece.bmp".to_string(), ..valid_form() };
        let backend = FakeBackend::default();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        let outcome = block_on(submit_theme(&form, &backend, &notifier, &navigator));

        assert!(outcome.errors().unwrap().has(FIELD_PCAURL));
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_submit_failure_notifies_once() {
        let backend = FakeBackend::failing(ApiError::Network("offline".to_string()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        block_on(submit_theme(&valid_form(), &backend, &notifier, &navigator));

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].description, TOAST_FAILURE);
        assert!(navigator.visited.borrow().is_empty());
    }
}
