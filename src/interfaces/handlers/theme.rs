use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::header,
    web, HttpRequest, HttpResponse, Responder,
};
use tracing::instrument;

use crate::{
    constants::{PREFERS_COLOR_SCHEME_HEADER, THEME_COOKIE},
    entities::theme::{SetThemeRequest, Theme, ThemeResolution, ThemeSource},
    AppState,
};

const COOKIE_MAX_AGE_DAYS: i64 = 365;

fn current_theme(req: &HttpRequest, state: &AppState) -> ThemeResolution {
    let stored = req.cookie(THEME_COOKIE);
    let hint = req
        .headers()
        .get(PREFERS_COLOR_SCHEME_HEADER)
        .and_then(|v| v.to_str().ok());

    state.theme_store.resolve(stored.as_ref().map(|c| c.value()), hint)
}

fn theme_cookie(theme: Theme) -> Cookie<'static> {
    let mut cookie = Cookie::new(THEME_COOKIE, theme.as_str());
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(COOKIE_MAX_AGE_DAYS));
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn stored_response(theme: Theme) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(theme_cookie(theme))
        .json(ThemeResolution { theme, source: ThemeSource::Stored })
}

#[instrument(skip(req, state))]
pub async fn get_theme(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let resolved = current_theme(&req, &state);

    HttpResponse::Ok()
        .insert_header(("Accept-CH", PREFERS_COLOR_SCHEME_HEADER))
        .insert_header((header::VARY, PREFERS_COLOR_SCHEME_HEADER))
        .json(resolved)
}

#[instrument(skip(data))]
pub async fn set_theme(data: web::Json<SetThemeRequest>) -> impl Responder {
    stored_response(data.theme)
}

#[instrument(skip(req, state))]
pub async fn toggle_theme(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let current = current_theme(&req, &state);
    let next = state.theme_store.toggle(current.theme);

    tracing::debug!(from = %current.theme, to = %next, "Theme toggled");
    stored_response(next)
}
