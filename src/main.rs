use crate::error::Error;
use crate::settings::{Party, Settings};
use crate::templates::statics::StaticFile;
use crate::treats::most_and_least_common_categories;
use crate::visitor::{Homepage, RsvpForm, RsvpOutcome, Visitor};
use clap::{crate_version, App, Arg};
use futures::{Future, Stream};
use gotham::handler::HandlerFuture;
use gotham::helpers::http::response::{create_empty_response, create_response};
use gotham::middleware::session::{NewSessionMiddleware, SessionData};
use gotham::middleware::state::StateMiddleware;
use gotham::pipeline::new_pipeline;
use gotham::pipeline::single::single_pipeline;
use gotham::router::{builder::*, Router};
use gotham::state::{FromState, State};
use gotham_derive::{StateData, StaticResponseExtender};
use hyper::header::{HeaderValue, CACHE_CONTROL, LOCATION};
use hyper::StatusCode;
use serde_derive::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod error;
mod guests;
mod settings;
mod treats;
mod visitor;

include!(concat!(env!("OUT_DIR"), "/templates.rs"));

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = App::new("balloonicorn-party")
        .version(crate_version!())
        .about("Serves the invitation and RSVP pages for Balloonicorn's party")
        .arg(
            Arg::with_name("settings")
                .long("settings")
                .short("s")
                .value_name("FILE")
                .default_value("settings")
                .help("Settings file, with or without its extension"),
        )
        .get_matches();

    let settings = match Settings::load(matches.value_of("settings").unwrap_or("settings")) {
        Ok(settings) => settings,
        Err(err) => {
            error!(%err, "could not load settings");
            std::process::exit(1);
        }
    };

    let addr = settings.listen_address();
    info!(%addr, treats = settings.treats.len(), "starting party site");
    gotham::start(addr, router(settings));
}

/// Read-only data every request can see.
#[derive(Clone, StateData)]
struct PartyState {
    settings: Arc<Settings>,
}

fn router(settings: Settings) -> Router {
    let sessions = NewSessionMiddleware::default()
        .with_cookie_name(settings.session.cookie_name.clone())
        .with_session_type::<Visitor>();
    let sessions = if settings.session.secure {
        sessions
    } else {
        sessions.insecure()
    };

    let party = PartyState {
        settings: Arc::new(settings),
    };

    let (chain, pipelines) = single_pipeline(
        new_pipeline()
            .add(StateMiddleware::new(party))
            .add(sessions)
            .build(),
    );

    build_router(chain, pipelines, |route| {
        route.get("/").to(serve_homepage);
        route.get("/treats").to(serve_treats);
        route.post("/rsvp").to(rsvp);

        route
            .get("/static/:name")
            .with_path_extractor::<StaticPath>()
            .to(serve_static);
    })
}

fn serve_homepage(mut state: State) -> (State, hyper::Response<hyper::Body>) {
    let page = {
        let session = SessionData::<Visitor>::borrow_mut_from(&mut state);
        let (visitor, page) = visitor::homepage((**session).clone());
        // Writing marks the session dirty, so leave it alone unless flashes were drained.
        if !page.flashes.is_empty() {
            **session = visitor;
        }
        page
    };

    let party = PartyState::borrow_from(&state);
    let response = match render_homepage(&party.settings.party, &page) {
        Ok(body) => create_response(&state, StatusCode::OK, mime::TEXT_HTML_UTF_8, body),
        Err(err) => {
            error!(%err, "homepage failed");
            err.as_response(&state)
        }
    };

    (state, response)
}

fn render_homepage(party: &Party, page: &Homepage) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    templates::homepage(&mut buf, party, &page.flashes, page.registered)
        .map_err(Error::Render)?;
    Ok(buf)
}

fn serve_treats(state: State) -> (State, hyper::Response<hyper::Body>) {
    let settings = &PartyState::borrow_from(&state).settings;
    let tally = most_and_least_common_categories(&settings.treats);

    let mut buf = Vec::new();
    let rendered = templates::treats(
        &mut buf,
        &settings.party,
        &settings.treats,
        &tally.most,
        &tally.least,
    );
    let response = match rendered {
        Ok(()) => create_response(&state, StatusCode::OK, mime::TEXT_HTML_UTF_8, buf),
        Err(err) => {
            let err = Error::Render(err);
            error!(%err, "treats page failed");
            err.as_response(&state)
        }
    };

    (state, response)
}

fn rsvp(mut state: State) -> Box<HandlerFuture> {
    let f = hyper::Body::take_from(&mut state)
        .concat2()
        .then(|body| match body {
            Ok(body) => {
                let outcome = rsvp_inner(&mut state, &body.into_bytes());
                info!(?outcome, "rsvp received");
                let response = redirect(&state, visitor::RSVP_REDIRECT);
                Ok((state, response))
            }
            Err(err) => {
                let err = Error::Body(err);
                error!(%err, "rsvp failed");
                let response = err.as_response(&state);
                Ok((state, response))
            }
        });
    Box::new(f)
}

fn rsvp_inner(state: &mut State, body: &bytes::Bytes) -> RsvpOutcome {
    let form = RsvpForm::from_form_body(body);
    let settings = Arc::clone(&PartyState::borrow_from(state).settings);

    let session = SessionData::<Visitor>::borrow_mut_from(state);
    let (visitor, outcome) =
        visitor::rsvp((**session).clone(), &form, &settings.excluded_guest);
    **session = visitor;

    outcome
}

#[derive(Deserialize, StateData, StaticResponseExtender)]
struct StaticPath {
    name: String,
}

fn serve_static(state: State) -> (State, hyper::Response<hyper::Body>) {
    let name = &StaticPath::borrow_from(&state).name;
    let response = match StaticFile::get(name) {
        Some(file) => {
            let mut response =
                create_response(&state, StatusCode::OK, file.mime.clone(), file.content);
            // Names carry a content hash, so they never go stale.
            response.headers_mut().insert(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=31536000"),
            );
            response
        }
        None => Error::NotFound(name.clone()).as_response(&state),
    };

    (state, response)
}

fn redirect(state: &State, to: &'static str) -> hyper::Response<hyper::Body> {
    let mut response = create_empty_response(state, StatusCode::SEE_OTHER);
    response
        .headers_mut()
        .insert(LOCATION, HeaderValue::from_static(to));
    response
}
