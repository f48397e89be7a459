// API routes and handlers
use crate::form::InputVector;
use crate::models::Predictor;
use crate::state::AppState;
use crate::view::{render, DisplayState, Prediction, INVALID_INPUT_MESSAGE};
use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use std::collections::HashMap;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(unreadable_form))
        .service(index)
        .service(submit);
}

/// A body that is not a urlencoded form is treated like any other bad input.
fn unreadable_form(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("rejected submission: {err}");
    let response = page(&DisplayState::Failed(INVALID_INPUT_MESSAGE.to_string()));
    InternalError::from_response(err, response).into()
}

#[get("/")]
pub async fn index() -> impl Responder {
    page(&DisplayState::Empty)
}

#[post("/")]
pub async fn submit(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    page(&evaluate(state.predictor.as_ref(), &form))
}

/// Runs one submission through parsing and prediction. Every failure lands in
/// the same error display state; nothing here turns into a 500.
pub fn evaluate(predictor: &dyn Predictor, fields: &HashMap<String, String>) -> DisplayState {
    let input = match InputVector::from_form(fields) {
        Ok(input) => input,
        Err(e) => {
            log::warn!("rejected submission: {e}");
            return DisplayState::Failed(INVALID_INPUT_MESSAGE.to_string());
        }
    };

    match predictor.predict(&input) {
        Ok(value) => {
            log::debug!("predicted {value} for {:?}", input.values());
            DisplayState::Predicted(Prediction(value))
        }
        Err(e) => {
            log::error!("prediction failed for {:?}: {e}", input.values());
            DisplayState::Failed(INVALID_INPUT_MESSAGE.to_string())
        }
    }
}

fn page(state: &DisplayState) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::form::FEATURE_NAMES;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(AtomicUsize);

    impl Predictor for Counting {
        fn predict(&self, _input: &InputVector) -> AppResult<f64> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(12.345)
        }
    }

    struct Failing;

    impl Predictor for Failing {
        fn predict(&self, _input: &InputVector) -> AppResult<f64> {
            Err(AppError::pipeline("shape mismatch"))
        }
    }

    fn fields(value: &str) -> HashMap<String, String> {
        FEATURE_NAMES
            .iter()
            .map(|name| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn invalid_input_never_reaches_the_predictor() {
        let predictor = Counting(AtomicUsize::new(0));
        let state = evaluate(&predictor, &fields("abc"));
        assert_eq!(state, DisplayState::Failed(INVALID_INPUT_MESSAGE.into()));
        assert_eq!(predictor.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_input_is_predicted_once() {
        let predictor = Counting(AtomicUsize::new(0));
        let state = evaluate(&predictor, &fields("1.0"));
        assert_eq!(state, DisplayState::Predicted(Prediction(12.345)));
        assert_eq!(predictor.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pipeline_fault_becomes_error_state() {
        let state = evaluate(&Failing, &fields("1.0"));
        assert_eq!(state, DisplayState::Failed(INVALID_INPUT_MESSAGE.into()));
    }
}
